//! Text rendering operations for CanvasContext.

use super::CanvasContext;
use crate::style::{FontSpec, TextAlign, TextBaseline};
use crate::text::{measure_text, resolve_family, text_x_offset, text_y_offset, TextMetrics};
use cosmic_text::{Attrs, Buffer, CacheKeyFlags, Command, Family, Metrics, Shaping};
use tiny_skia::Transform;

impl CanvasContext {
    /// Set the font used by subsequent measure/fill text calls.
    pub fn set_font(&mut self, font: FontSpec) {
        self.state.font = font;
    }

    /// Set the text alignment.
    pub fn set_text_align(&mut self, align: TextAlign) {
        self.state.text_align = align;
    }

    /// Set the text baseline.
    pub fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.text_baseline = baseline;
    }

    /// Measure text with the current font.
    pub fn measure_text(&mut self, text: &str) -> TextMetrics {
        measure_text(&mut self.font_system, text, &self.state.font)
    }

    /// Fill text at the specified position using vector glyph paths.
    pub fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        log::debug!(target: "canvas", "fillText \"{}\" {} {}", text, x, y);
        let font = self.state.font.clone();
        let metrics = Metrics::new(font.size_px, font.size_px * 1.2);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);

        let family = font
            .families
            .first()
            .map(|f| resolve_family(f))
            .unwrap_or(Family::SansSerif);

        // Disable hinting so rendering matches measurement across sizes.
        let attrs = Attrs::new()
            .family(family)
            .weight(font.weight)
            .style(font.style)
            .cache_key_flags(CacheKeyFlags::DISABLE_HINTING);

        buffer.set_text(&mut self.font_system, text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(&mut self.font_system, false);

        // Text dimensions for alignment
        let mut text_width: f32 = 0.0;
        for run in buffer.layout_runs() {
            text_width = text_width.max(run.line_w);
        }

        let base_x = x + text_x_offset(text_width, self.state.text_align);
        let base_y = y + text_y_offset(font.size_px, self.state.text_baseline);

        let style = self.state.fill_style.clone();
        let _ = self.with_paint_from_style(style, |ctx, paint| {
            // Render each glyph as a vector path
            for run in buffer.layout_runs() {
                for glyph in run.glyphs.iter() {
                    // Cache key for outline retrieval
                    let physical_glyph = glyph.physical((base_x, base_y), 1.0);

                    // Floating-point glyph position for sub-pixel precision
                    let glyph_x = base_x + glyph.x + glyph.font_size * glyph.x_offset;
                    let glyph_y = base_y + glyph.y - glyph.font_size * glyph.y_offset;

                    let Some(commands) = ctx
                        .swash_cache
                        .get_outline_commands(&mut ctx.font_system, physical_glyph.cache_key)
                    else {
                        continue;
                    };

                    // Font outlines have Y pointing up, screen has Y pointing
                    // down, so Y coordinates are negated while path building.
                    let mut path_builder = tiny_skia::PathBuilder::new();
                    for cmd in commands {
                        match cmd {
                            Command::MoveTo(p) => path_builder.move_to(p.x, -p.y),
                            Command::LineTo(p) => path_builder.line_to(p.x, -p.y),
                            Command::QuadTo(ctrl, end) => {
                                path_builder.quad_to(ctrl.x, -ctrl.y, end.x, -end.y)
                            }
                            Command::CurveTo(c1, c2, end) => {
                                path_builder.cubic_to(c1.x, -c1.y, c2.x, -c2.y, end.x, -end.y)
                            }
                            Command::Close => path_builder.close(),
                        }
                    }

                    if let Some(path) = path_builder.finish() {
                        let glyph_transform = Transform::from_translate(glyph_x, glyph_y);
                        ctx.pixmap.fill_path(
                            &path,
                            paint,
                            tiny_skia::FillRule::Winding,
                            glyph_transform,
                            None,
                        );
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_config::FontConfig;

    fn headless(width: u32, height: u32) -> CanvasContext {
        let config = FontConfig {
            load_system_fonts: false,
            ..FontConfig::default()
        };
        CanvasContext::with_config(width, height, &config).unwrap()
    }

    #[test]
    fn measure_without_fonts_is_zero_width() {
        // With an empty font database nothing shapes, but nothing panics
        // either; width degrades to zero.
        let mut ctx = headless(100, 100);
        let m = ctx.measure_text("hello");
        assert_eq!(m.width, 0.0);
        assert!(m.ascent > 0.0);
    }

    #[test]
    fn fill_text_without_fonts_is_noop() {
        let mut ctx = headless(100, 100);
        ctx.set_fill_color(tiny_skia::Color::WHITE);
        ctx.fill_text("hello", 10.0, 50.0);
        assert!(ctx.pixmap.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn metrics_scale_with_font_size() {
        let mut ctx = headless(10, 10);
        ctx.set_font(FontSpec {
            size_px: 20.0,
            ..FontSpec::default()
        });
        let m = ctx.measure_text("x");
        assert_eq!(m.ascent, 16.0);
        assert_eq!(m.descent, 4.0);
    }
}
