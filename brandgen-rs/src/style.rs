//! Named style constants for the layout pipelines.
//!
//! Every fixed scalar the pipelines use lives here rather than inline at
//! the drawing call sites, so tuning the look does not mean hunting through
//! compositing code.

/// Style constants shared by both layout pipelines.
#[derive(Debug, Clone)]
pub struct StyleConfig {
    // --- Text ---
    /// Heading font size as a fraction of the canvas min-dimension.
    pub heading_scale: f32,
    /// Heading scale for tall "story" canvases.
    pub heading_scale_story: f32,
    /// Subtext font size as a fraction of the heading size.
    pub subtext_factor: f32,
    /// Line height as a fraction of font size.
    pub line_height_factor: f32,
    /// Wrapped text max width as a fraction of canvas width.
    pub text_max_width_frac: f32,
    /// Heading anchor Y as a fraction of canvas height.
    pub heading_anchor: f32,
    /// Heading anchor for story canvases.
    pub heading_anchor_story: f32,
    /// Subtext anchor Y as a fraction of canvas height.
    pub subtext_anchor: f32,
    /// Subtext anchor for story canvases.
    pub subtext_anchor_story: f32,

    // --- Logo ---
    /// Logo box as a fraction of min-dimension.
    pub logo_ratio: f32,
    /// Logo box for story canvases.
    pub logo_ratio_story: f32,
    /// Standard logo anchor as fractions of canvas width/height.
    pub logo_anchor_x: f32,
    pub logo_anchor_y: f32,
    /// Shadow under the logo (and placeholder tile).
    pub logo_shadow_offset: f32,
    pub logo_shadow_blur: f32,
    pub logo_shadow_alpha: f32,
    /// Placeholder tile corner radius as a fraction of the tile.
    pub tile_corner_frac: f32,
    /// Placeholder tile fill alpha (translucent white).
    pub tile_fill_alpha: f32,
    /// Placeholder initial size as a fraction of the tile.
    pub tile_initial_frac: f32,
    /// Fixed accent color for the placeholder initial.
    pub tile_accent_color: &'static str,

    // --- Social decoration ---
    /// Decorative circle alpha.
    pub circle_alpha: f32,
    /// Wave band alpha.
    pub wave_alpha: f32,
    /// Watermark string drawn bottom-right on social canvases.
    pub watermark: &'static str,
    /// Watermark font size as a fraction of min-dimension.
    pub watermark_scale: f32,
    /// Watermark opacity.
    pub watermark_alpha: f32,
    /// Brand-name footer font size as a fraction of min-dimension (social,
    /// only when the logo is hidden).
    pub footer_name_scale: f32,
    /// Brand-name footer anchor Y as a fraction of canvas height.
    pub footer_name_anchor: f32,
    /// Margin from canvas edges as a fraction of min-dimension.
    pub edge_margin_frac: f32,

    // --- Marketing ---
    /// Header band height as a fraction of canvas height.
    pub header_frac: f32,
    /// Footer band height as a fraction of canvas height.
    pub footer_frac: f32,
    /// Marketing heading/subtext scales (independent of social).
    pub marketing_heading_scale: f32,
    pub marketing_subtext_factor: f32,
    /// Marketing heading/subtext anchors.
    pub marketing_heading_anchor: f32,
    pub marketing_subtext_anchor: f32,
    /// Neutral text palette for the white marketing body.
    pub marketing_heading_color: &'static str,
    pub marketing_subtext_color: &'static str,
    /// Footer brand-name size as a fraction of the footer band height.
    pub marketing_footer_text_factor: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            heading_scale: 0.08,
            heading_scale_story: 0.06,
            subtext_factor: 0.6,
            line_height_factor: 1.2,
            text_max_width_frac: 0.8,
            heading_anchor: 0.45,
            heading_anchor_story: 0.42,
            subtext_anchor: 0.60,
            subtext_anchor_story: 0.55,

            logo_ratio: 0.12,
            logo_ratio_story: 0.15,
            logo_anchor_x: 0.05,
            logo_anchor_y: 0.08,
            logo_shadow_offset: 2.0,
            logo_shadow_blur: 10.0,
            logo_shadow_alpha: 0.3,
            tile_corner_frac: 0.15,
            tile_fill_alpha: 0.2,
            tile_initial_frac: 0.5,
            tile_accent_color: "#FFFFFF",

            circle_alpha: 0.1,
            wave_alpha: 0.05,
            watermark: "Made with Brandgen",
            watermark_scale: 0.018,
            watermark_alpha: 0.5,
            footer_name_scale: 0.03,
            footer_name_anchor: 0.92,
            edge_margin_frac: 0.02,

            header_frac: 0.25,
            footer_frac: 0.08,
            marketing_heading_scale: 0.05,
            marketing_subtext_factor: 0.6,
            marketing_heading_anchor: 0.45,
            marketing_subtext_anchor: 0.55,
            marketing_heading_color: "#1F2937",
            marketing_subtext_color: "#6B7280",
            marketing_footer_text_factor: 0.35,
        }
    }
}

impl StyleConfig {
    /// Heading scale for the given canvas shape.
    pub fn heading_scale_for(&self, story: bool) -> f32 {
        if story {
            self.heading_scale_story
        } else {
            self.heading_scale
        }
    }

    /// Heading anchor for the given canvas shape.
    pub fn heading_anchor_for(&self, story: bool) -> f32 {
        if story {
            self.heading_anchor_story
        } else {
            self.heading_anchor
        }
    }

    /// Subtext anchor for the given canvas shape.
    pub fn subtext_anchor_for(&self, story: bool) -> f32 {
        if story {
            self.subtext_anchor_story
        } else {
            self.subtext_anchor
        }
    }

    /// Logo box ratio for the given canvas shape.
    pub fn logo_ratio_for(&self, story: bool) -> f32 {
        if story {
            self.logo_ratio_story
        } else {
            self.logo_ratio
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_documented_scalars() {
        let style = StyleConfig::default();
        assert_eq!(style.heading_scale, 0.08);
        assert_eq!(style.heading_scale_story, 0.06);
        assert_eq!(style.subtext_factor, 0.6);
        assert_eq!(style.logo_ratio, 0.12);
        assert_eq!(style.logo_ratio_story, 0.15);
        assert_eq!(style.header_frac, 0.25);
        assert_eq!(style.footer_frac, 0.08);
    }

    #[test]
    fn story_selectors_switch() {
        let style = StyleConfig::default();
        assert_eq!(style.heading_scale_for(true), style.heading_scale_story);
        assert_eq!(style.heading_scale_for(false), style.heading_scale);
        assert_eq!(style.logo_ratio_for(true), style.logo_ratio_story);
        assert_eq!(style.logo_ratio_for(false), style.logo_ratio);
    }
}
