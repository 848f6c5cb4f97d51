// File: crates/trendline-core/src/text.rs
// Summary: Label text shaping on Skia textlayout, backed by the system font manager.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Tabular-number families first so value labels line up.
const FAMILIES: &[&str] = &["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "DejaVu Sans", "monospace", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts }
    }

    /// True when the font manager can resolve at least one family.
    pub fn has_fonts(&self) -> bool {
        skia::FontMgr::default().count_families() > 0
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(color);
        style.set_font_families(FAMILIES);

        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT).longest_line()
    }

    /// Draw with the baseline at `y` and the left edge at `x`.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let paragraph = self.layout(text, size, color);
        // Paragraphs paint from their top-left corner.
        paragraph.paint(canvas, (x, y - paragraph.alphabetic_baseline()));
    }

    /// Draw with the baseline at `y` and the right edge at `x`.
    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let paragraph = self.layout(text, size, color);
        let left = x - paragraph.longest_line();
        paragraph.paint(canvas, (left, y - paragraph.alphabetic_baseline()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wider_text_measures_wider() {
        let shaper = TextShaper::new();
        if !shaper.has_fonts() {
            return;
        }
        let short = shaper.measure_width("10", 12.0);
        let long = shaper.measure_width("1000", 12.0);
        assert!(short > 0.0);
        assert!(long > short);
        assert_eq!(shaper.measure_width("", 12.0), 0.0);
    }
}
