// File: crates/trendline-core/src/canvas.rs
// Summary: Backend-agnostic drawing surface trait plus a recording implementation.
// Notes:
// - Colors are skia colors so the raster backend needs no conversion.
// - RecordingCanvas keeps the commands in issue order; tests and replaying hosts read them back.

use skia_safe as skia;

use crate::geometry::{LineSegment, Offset, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StrokeJoin {
    #[default]
    Miter,
    Round,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Right,
}

/// Dash pattern: `on` pixels drawn, `off` pixels skipped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dash {
    pub on: f32,
    pub off: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: skia::Color,
    pub width: f32,
    pub cap: StrokeCap,
    pub join: StrokeJoin,
    pub dash: Option<Dash>,
}

impl Stroke {
    pub fn new(color: skia::Color, width: f32) -> Self {
        Self { color, width, cap: StrokeCap::Butt, join: StrokeJoin::Miter, dash: None }
    }
    pub fn cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }
    pub fn join(mut self, join: StrokeJoin) -> Self {
        self.join = join;
        self
    }
    pub fn dashed(mut self, on: f32, off: f32) -> Self {
        self.dash = Some(Dash { on, off });
        self
    }
}

/// Drawing operations the chart issues to its host.
pub trait Canvas {
    fn draw_line(&mut self, start: Offset, end: Offset, stroke: &Stroke);
    /// Stroke connected segments as one path so joins apply.
    fn draw_path(&mut self, segments: &[LineSegment], stroke: &Stroke);
    fn draw_circle(&mut self, center: Offset, radius: f32, color: skia::Color);
    fn fill_rect(&mut self, rect: Rect, color: skia::Color);
    /// `origin` is the baseline anchor; with `TextAlign::Right` it is the right edge.
    fn draw_text(&mut self, text: &str, origin: Offset, size: f32, color: skia::Color, align: TextAlign);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line { start: Offset, end: Offset, stroke: Stroke },
    Path { segments: Vec<LineSegment>, stroke: Stroke },
    Circle { center: Offset, radius: f32, color: skia::Color },
    Rect { rect: Rect, color: skia::Color },
    Text { text: String, origin: Offset, size: f32, color: skia::Color, align: TextAlign },
}

#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
    pub fn clear(&mut self) {
        self.commands.clear();
    }
    /// Replay the recorded commands onto another canvas.
    pub fn replay(&self, target: &mut dyn Canvas) {
        for cmd in &self.commands {
            match cmd {
                DrawCommand::Line { start, end, stroke } => target.draw_line(*start, *end, stroke),
                DrawCommand::Path { segments, stroke } => target.draw_path(segments, stroke),
                DrawCommand::Circle { center, radius, color } => target.draw_circle(*center, *radius, *color),
                DrawCommand::Rect { rect, color } => target.fill_rect(*rect, *color),
                DrawCommand::Text { text, origin, size, color, align } => {
                    target.draw_text(text, *origin, *size, *color, *align)
                }
            }
        }
    }
}

impl Canvas for RecordingCanvas {
    fn draw_line(&mut self, start: Offset, end: Offset, stroke: &Stroke) {
        self.commands.push(DrawCommand::Line { start, end, stroke: *stroke });
    }
    fn draw_path(&mut self, segments: &[LineSegment], stroke: &Stroke) {
        self.commands.push(DrawCommand::Path { segments: segments.to_vec(), stroke: *stroke });
    }
    fn draw_circle(&mut self, center: Offset, radius: f32, color: skia::Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }
    fn fill_rect(&mut self, rect: Rect, color: skia::Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }
    fn draw_text(&mut self, text: &str, origin: Offset, size: f32, color: skia::Color, align: TextAlign) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), origin, size, color, align });
    }
}
