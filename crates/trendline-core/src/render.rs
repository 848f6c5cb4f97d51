// File: crates/trendline-core/src/render.rs
// Summary: Skia CPU raster backend: Canvas impl plus headless PNG/RGBA rendering of a chart with its label panel.

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::canvas::{Canvas, Stroke, StrokeCap, StrokeJoin, TextAlign};
use crate::chart::{LineChart, RenderOptions};
use crate::geometry::{LineSegment, Offset, Rect, Size};
use crate::labels::{centered_left, DateLabels, ValueLabels};
use crate::text::TextShaper;

/// Value label text size, in dp.
const VALUE_TEXT: f32 = 10.0;
/// Date label text size, in dp.
const DATE_TEXT: f32 = 12.0;
/// Outer margin around the whole figure, in dp.
const MARGIN: f32 = 12.0;
/// Space between chart and side panel, in dp.
const PANEL_GAP: f32 = 8.0;
/// Space between chart bottom and the date row, in dp.
const DATE_GAP: f32 = 12.0;

/// `Canvas` on top of a Skia canvas.
pub struct SkiaCanvas<'a> {
    canvas: &'a skia::Canvas,
    text: TextShaper,
}

impl<'a> SkiaCanvas<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        Self { canvas, text: TextShaper::new() }
    }

    pub fn measure_text(&self, text: &str, size: f32) -> f32 {
        self.text.measure_width(text, size)
    }
}

fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width);
    paint.set_color(stroke.color);
    paint.set_stroke_cap(match stroke.cap {
        StrokeCap::Butt => skia::paint::Cap::Butt,
        StrokeCap::Round => skia::paint::Cap::Round,
    });
    paint.set_stroke_join(match stroke.join {
        StrokeJoin::Miter => skia::paint::Join::Miter,
        StrokeJoin::Round => skia::paint::Join::Round,
    });
    if let Some(dash) = stroke.dash {
        paint.set_path_effect(skia::PathEffect::dash(&[dash.on, dash.off], 0.0));
    }
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

impl Canvas for SkiaCanvas<'_> {
    fn draw_line(&mut self, start: Offset, end: Offset, stroke: &Stroke) {
        self.canvas.draw_line((start.x, start.y), (end.x, end.y), &stroke_paint(stroke));
    }

    fn draw_path(&mut self, segments: &[LineSegment], stroke: &Stroke) {
        let Some(first) = segments.first() else {
            return;
        };
        let mut path = skia::Path::new();
        path.move_to((first.start.x, first.start.y));
        for seg in segments {
            path.line_to((seg.end.x, seg.end.y));
        }
        self.canvas.draw_path(&path, &stroke_paint(stroke));
    }

    fn draw_circle(&mut self, center: Offset, radius: f32, color: skia::Color) {
        self.canvas.draw_circle((center.x, center.y), radius, &fill_paint(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: skia::Color) {
        let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
        self.canvas.draw_rect(r, &fill_paint(color));
    }

    fn draw_text(&mut self, text: &str, origin: Offset, size: f32, color: skia::Color, align: TextAlign) {
        match align {
            TextAlign::Left => self.text.draw_left(self.canvas, text, origin.x, origin.y, size, color),
            TextAlign::Right => self.text.draw_right(self.canvas, text, origin.x, origin.y, size, color),
        }
    }
}

/// Pixel rectangles of the figure's parts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureLayout {
    pub chart: Rect,
    pub panel: Option<Rect>,
    /// Baseline of the date row.
    pub date_baseline: Option<f32>,
}

impl FigureLayout {
    pub fn compute(opts: &RenderOptions) -> Self {
        let (w, h) = (opts.width as f32, opts.height as f32);
        if !opts.draw_labels {
            return Self { chart: Rect::from_ltrb(0.0, 0.0, w, h), panel: None, date_baseline: None };
        }
        let px = |dp: f32| dp * opts.density;
        let margin = px(MARGIN);
        let date_row = px(DATE_GAP) + px(DATE_TEXT) * 1.2;
        let chart_right = (w - margin - px(opts.panel_width) - px(PANEL_GAP)).max(margin);
        let chart_bottom = (h - margin - date_row).max(margin);
        let chart = Rect::from_ltrb(margin, margin, chart_right, chart_bottom);
        let panel = Rect::from_ltrb(chart_right + px(PANEL_GAP), margin, w - margin, chart_bottom);
        Self {
            chart,
            panel: Some(panel),
            date_baseline: Some(chart_bottom + px(DATE_GAP) + px(DATE_TEXT)),
        }
    }
}

impl LineChart {
    /// Paint the full figure (background, chart, optional labels) onto a Skia canvas.
    /// The options' density and theme are applied to the chart.
    pub fn paint(&mut self, canvas: &skia::Canvas, opts: &RenderOptions) {
        self.density = opts.density;
        self.theme = opts.theme;
        canvas.clear(opts.theme.background);

        let layout = FigureLayout::compute(opts);
        let size = Size::new(layout.chart.width(), layout.chart.height());
        let mut sk = SkiaCanvas::new(canvas);

        canvas.save();
        canvas.translate((layout.chart.left, layout.chart.top));
        let drawn = self.render(&mut sk, size, opts.pulse);
        canvas.restore();

        if drawn && opts.draw_labels {
            self.paint_labels(&mut sk, &layout, opts);
        }
    }

    fn paint_labels(&self, sk: &mut SkiaCanvas<'_>, layout: &FigureLayout, opts: &RenderOptions) {
        let theme = &opts.theme;
        let px = |dp: f32| dp * opts.density;

        if let Some(panel) = layout.panel {
            let text = px(VALUE_TEXT);
            let last = self.processor().end();
            let labels = ValueLabels::layout(self.series(), last, panel.height());
            let baseline = |center_y: f32| panel.top + center_y + text * 0.35;

            for label in [&labels.high, &labels.low] {
                sk.draw_text(&label.text, Offset::new(panel.right, baseline(label.center_y)), text, theme.value_label, TextAlign::Right);
            }
            if let Some(label) = labels.last {
                let cy = panel.top + label.center_y;
                let half = text * 0.7;
                sk.fill_rect(Rect::from_ltrb(panel.left, cy - half, panel.right, cy + half), theme.last_label_fill);
                sk.draw_text(&label.text, Offset::new(panel.right, baseline(label.center_y)), text, theme.last_label_text, TextAlign::Right);
            }
        }

        if let Some(y) = layout.date_baseline {
            let text = px(DATE_TEXT);
            let chart = layout.chart;
            match DateLabels::layout(self.series(), self.selection(), &opts.date_pattern) {
                DateLabels::Range { start, end } => {
                    sk.draw_text(&start, Offset::new(chart.left, y), text, theme.date_label, TextAlign::Left);
                    sk.draw_text(&end, Offset::new(chart.right, y), text, theme.date_label, TextAlign::Right);
                }
                DateLabels::Selected { text: label, x } => {
                    let width = sk.measure_text(&label, text);
                    let left = chart.left + centered_left(x, width);
                    sk.draw_text(&label, Offset::new(left, y), text, theme.date_label, TextAlign::Left);
                }
            }
        }
    }

    fn raster(&mut self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
        self.paint(surface.canvas(), opts);
        Ok(surface)
    }

    /// Render the figure to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&mut self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.raster(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the figure to a PNG at `output_png_path`.
    pub fn render_to_png(&mut self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Render to an unpremultiplied RGBA8 buffer: (pixels, width, height, row stride).
    pub fn render_to_rgba8(&mut self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.raster(opts)?;
        read_rgba8(&mut surface)
    }
}

/// Read a raster surface back as unpremultiplied RGBA8: (pixels, width, height, row stride).
pub fn read_rgba8(surface: &mut skia::Surface) -> Result<(Vec<u8>, i32, i32, usize)> {
    let (width, height) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new(
        (width, height),
        skia::ColorType::RGBA8888,
        skia::AlphaType::Unpremul,
        None,
    );
    let stride = width as usize * 4;
    let mut pixels = vec![0u8; stride * height as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("reading back raster pixels failed");
    }
    Ok((pixels, width, height, stride))
}
