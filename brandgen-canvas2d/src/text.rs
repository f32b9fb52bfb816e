//! Text measurement using cosmic-text.

use crate::style::{FontSpec, TextAlign, TextBaseline};
use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};

/// Text metrics returned by `measure_text`.
#[derive(Debug, Clone, Default)]
pub struct TextMetrics {
    /// Width of the text in pixels.
    pub width: f32,
    /// Distance from baseline to top of the bounding box.
    pub ascent: f32,
    /// Distance from baseline to bottom of the bounding box.
    pub descent: f32,
}

/// Resolve a configured family name to a cosmic-text family.
///
/// Generic names route through the font database's generic mappings;
/// anything else is used as a concrete family name.
pub(crate) fn resolve_family(name: &str) -> Family<'_> {
    match name {
        "sans-serif" => Family::SansSerif,
        "serif" => Family::Serif,
        "monospace" => Family::Monospace,
        other => Family::Name(other),
    }
}

/// Measure text using cosmic-text.
pub(crate) fn measure_text(
    font_system: &mut FontSystem,
    text: &str,
    font: &FontSpec,
) -> TextMetrics {
    let metrics = Metrics::new(font.size_px, font.size_px * 1.2);
    let mut buffer = Buffer::new(font_system, metrics);

    let family = font
        .families
        .first()
        .map(|f| resolve_family(f))
        .unwrap_or(Family::SansSerif);

    let attrs = Attrs::new()
        .family(family)
        .weight(font.weight)
        .style(font.style);

    buffer.set_text(font_system, text, &attrs, Shaping::Advanced, None);
    buffer.shape_until_scroll(font_system, false);

    let mut width: f32 = 0.0;
    for run in buffer.layout_runs() {
        width = width.max(run.line_w);
    }

    // Em-square approximation; a full shaping pipeline is out of scope.
    TextMetrics {
        width,
        ascent: font.size_px * 0.8,
        descent: font.size_px * 0.2,
    }
}

/// Calculate X offset for text alignment.
pub(crate) fn text_x_offset(width: f32, align: TextAlign) -> f32 {
    match align {
        TextAlign::Left => 0.0,
        TextAlign::Right => -width,
        TextAlign::Center => -width / 2.0,
    }
}

/// Calculate Y offset for the text baseline.
pub(crate) fn text_y_offset(font_size: f32, baseline: TextBaseline) -> f32 {
    let ascent = font_size * 0.8;
    let descent = font_size * 0.2;

    match baseline {
        TextBaseline::Top => ascent,
        TextBaseline::Middle => ascent / 2.0 - descent / 2.0,
        TextBaseline::Alphabetic => 0.0,
        TextBaseline::Bottom => -descent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alignment_offsets() {
        assert_eq!(text_x_offset(100.0, TextAlign::Left), 0.0);
        assert_eq!(text_x_offset(100.0, TextAlign::Right), -100.0);
        assert_eq!(text_x_offset(100.0, TextAlign::Center), -50.0);
    }

    #[test]
    fn baseline_offsets() {
        assert_eq!(text_y_offset(10.0, TextBaseline::Alphabetic), 0.0);
        assert_eq!(text_y_offset(10.0, TextBaseline::Top), 8.0);
        assert_eq!(text_y_offset(10.0, TextBaseline::Bottom), -2.0);
        assert!((text_y_offset(10.0, TextBaseline::Middle) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn generic_families_resolve() {
        assert!(matches!(resolve_family("sans-serif"), Family::SansSerif));
        assert!(matches!(resolve_family("serif"), Family::Serif));
        assert!(matches!(resolve_family("monospace"), Family::Monospace));
        assert!(matches!(resolve_family("Inter"), Family::Name("Inter")));
    }
}
