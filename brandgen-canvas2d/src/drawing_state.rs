//! Drawing state that can be saved and restored.

use crate::style::{FillStyle, FontSpec, TextAlign, TextBaseline};

/// Drop-shadow parameters applied beneath fills and image draws.
#[derive(Debug, Clone)]
pub struct Shadow {
    /// Shadow color (usually translucent).
    pub color: tiny_skia::Color,
    /// Horizontal offset in pixels.
    pub offset_x: f32,
    /// Vertical offset in pixels.
    pub offset_y: f32,
    /// Blur amount; the gaussian sigma is half of this value.
    pub blur: f32,
}

/// Drawing state that can be saved and restored.
#[derive(Debug, Clone)]
pub struct DrawingState {
    /// Current fill style.
    pub fill_style: FillStyle,
    /// Current font specification.
    pub font: FontSpec,
    /// Current text alignment.
    pub text_align: TextAlign,
    /// Current text baseline.
    pub text_baseline: TextBaseline,
    /// Current global alpha.
    pub global_alpha: f32,
    /// Drop shadow, if any.
    pub shadow: Option<Shadow>,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self {
            fill_style: FillStyle::default(),
            font: FontSpec::default(),
            text_align: TextAlign::default(),
            text_baseline: TextBaseline::default(),
            global_alpha: 1.0,
            shadow: None,
        }
    }
}
