// File: crates/trendline-core/src/lib.rs
// Summary: Core library entry point; exports the series model, layout processor, decorators and rendering.

pub mod canvas;
pub mod chart;
pub mod decorator;
pub mod error;
pub mod geometry;
pub mod labels;
pub mod processor;
pub mod render;
pub mod selection;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use canvas::{Canvas, DrawCommand, RecordingCanvas, Stroke};
pub use chart::{pulse_phase, LineChart, RenderOptions};
pub use decorator::{Decorator, DrawContext, PointerEvent, ThresholdLine};
pub use error::ChartError;
pub use geometry::{Offset, Size};
pub use processor::LineChartProcessor;
pub use render::{read_rgba8, SkiaCanvas};
pub use selection::{Selection, SelectionCursor};
pub use series::{Sample, Series};
pub use text::TextShaper;
pub use theme::Theme;
pub use types::{LayoutDirection, Padding};
