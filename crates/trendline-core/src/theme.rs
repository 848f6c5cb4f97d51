// File: crates/trendline-core/src/theme.rs
// Summary: Light/Dark color presets for the chart, markers, overlays and side labels.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub line_stroke: skia::Color,
    pub marker: skia::Color,
    pub threshold: skia::Color,
    pub cursor: skia::Color,
    pub scrim: skia::Color,
    pub value_label: skia::Color,
    pub last_label_fill: skia::Color,
    pub last_label_text: skia::Color,
    pub date_label: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            line_stroke: skia::Color::from_argb(255, 0xff, 0x00, 0x45),
            marker: skia::Color::from_argb(255, 0x70, 0x70, 0x70),
            threshold: skia::Color::from_argb(255, 0x47, 0x49, 0x4c),
            cursor: skia::Color::from_argb(255, 0x88, 0x88, 0x88),
            scrim: skia::Color::from_argb(0x50, 0, 0, 0),
            value_label: skia::Color::from_argb(255, 0xeb, 0x30, 0x3a),
            last_label_fill: skia::Color::from_argb(255, 0xff, 0x00, 0x00),
            last_label_text: skia::Color::from_argb(255, 255, 255, 255),
            date_label: skia::Color::from_argb(255, 0x88, 0x88, 0x88),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            line_stroke: skia::Color::from_argb(255, 0xff, 0x4d, 0x6d),
            marker: skia::Color::from_argb(255, 0xa0, 0xa0, 0xa8),
            threshold: skia::Color::from_argb(255, 0x70, 0x73, 0x78),
            cursor: skia::Color::from_argb(255, 0xc8, 0xc8, 0xd0),
            scrim: skia::Color::from_argb(0x50, 255, 255, 255),
            value_label: skia::Color::from_argb(255, 0xff, 0x6b, 0x73),
            last_label_fill: skia::Color::from_argb(255, 0xd0, 0x20, 0x30),
            last_label_text: skia::Color::from_argb(255, 255, 255, 255),
            date_label: skia::Color::from_argb(255, 150, 150, 160),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
