//! Pure Rust Canvas-2D-style drawing surface using tiny-skia and cosmic-text.
//!
//! This crate provides the raster surface that the brandgen engine composes
//! templates onto. It can be used without a browser or JavaScript runtime:
//! - `tiny-skia` for 2D graphics rendering
//! - `cosmic-text` for text shaping, measurement, and rendering
//! - `fontdb` for font database management (can be shared with other crates)
//!
//! # Example
//!
//! ```rust,ignore
//! use brandgen_canvas2d::CanvasContext;
//!
//! let mut ctx = CanvasContext::new(400, 300)?;
//! ctx.set_fill_color(tiny_skia::Color::from_rgba8(255, 0, 0, 255));
//! ctx.fill_rect(10.0, 10.0, 100.0, 50.0);
//! let png_data = ctx.to_png()?;
//! ```

mod blur;
mod context;
mod drawing_state;
mod error;
mod font_config;
mod gradient;
mod style;
mod text;

pub use context::CanvasContext;
pub use drawing_state::{DrawingState, Shadow};
pub use error::{CanvasError, CanvasResult};
pub use font_config::{
    font_config_to_fontdb, CustomFont, FontConfig, GenericFamilyMap, ResolvedFontConfig,
};
pub use gradient::{Gradient, GradientStop};
pub use style::{FillStyle, FontSpec, TextAlign, TextBaseline};
pub use text::TextMetrics;

// Re-export the cosmic-text types that appear in `FontSpec`, so dependents
// can build font specs without a direct cosmic-text dependency.
pub use cosmic_text::{Style as FontStyle, Weight as FontWeight};
