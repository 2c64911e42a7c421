// File: crates/chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout, with rotated tick-label placement.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Horizontal anchoring of a label relative to its reference point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Center,
    End,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, mono_numeric: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        if mono_numeric {
            ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        } else {
            ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, mono_numeric: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, mono_numeric);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw with the baseline at `y`, anchored horizontally at `x`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, anchor: Anchor) {
        // Numeric labels get tabular digits so tick columns line up.
        let numeric = !text.is_empty() && text.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-');
        let mut p = self.layout(text, size, color, numeric);
        let w = p.longest_line();
        let dx = match anchor {
            Anchor::Start => 0.0,
            Anchor::Center => -w * 0.5,
            Anchor::End => -w,
        };
        // Paragraph draws from top-left; approximate the baseline from the glyph size.
        p.paint(canvas, (x + dx, y - size * 0.8));
    }

    /// Draw rotated counter-clockwise by `degrees` about (`x`, `y`).
    ///
    /// The label's vertical center sits on the pivot, and `anchor` picks which
    /// end of the text touches it. Tick labels use `Anchor::End` so rotated
    /// text hangs down and to the left of its tick.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_rotated(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        degrees: f32,
        size: f32,
        color: skia::Color,
        anchor: Anchor,
    ) {
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(-degrees, None);
        self.draw(canvas, text, 0.0, size * 0.35, size, color, anchor);
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
