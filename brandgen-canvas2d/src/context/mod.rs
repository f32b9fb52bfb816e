//! Canvas rendering context implementation.

mod drawing;
mod image_ops;
mod path_ops;
mod text_rendering;

use crate::drawing_state::{DrawingState, Shadow};
use crate::error::{CanvasError, CanvasResult};
use crate::font_config::{font_config_to_fontdb, FontConfig, ResolvedFontConfig};
use crate::gradient::Gradient;
use crate::style::FillStyle;
use cosmic_text::{FontSystem, SwashCache};
use tiny_skia::Pixmap;

/// Maximum canvas dimension (same as Chrome).
const MAX_DIMENSION: u32 = 32767;

/// A fixed-size raster surface with Canvas-2D-style drawing state.
///
/// Coordinates are absolute device pixels; there is no transform stack.
/// The brandgen pipelines compose a template by painting fills, gradients,
/// images, and text onto one of these, then encoding the pixel buffer.
pub struct CanvasContext {
    /// Width of the canvas in pixels.
    pub(crate) width: u32,
    /// Height of the canvas in pixels.
    pub(crate) height: u32,
    /// Pixel buffer.
    pub(crate) pixmap: Pixmap,
    /// Font system for text rendering.
    pub(crate) font_system: FontSystem,
    /// Swash cache for glyph rasterization.
    pub(crate) swash_cache: SwashCache,
    /// Current drawing state.
    pub(crate) state: DrawingState,
    /// Stack of saved drawing states.
    state_stack: Vec<DrawingState>,
    /// Current path builder.
    pub(crate) path_builder: tiny_skia::PathBuilder,
}

impl CanvasContext {
    /// Create a new context with the specified dimensions.
    ///
    /// Uses `FontConfig::default()` which loads system fonts and sets up
    /// standard generic family mappings (sans-serif, serif, monospace).
    pub fn new(width: u32, height: u32) -> CanvasResult<Self> {
        let config = FontConfig::default();
        let db = font_config_to_fontdb(&config);
        Self::new_internal(width, height, db)
    }

    /// Create a new context with the specified dimensions and font configuration.
    pub fn with_config(width: u32, height: u32, config: &FontConfig) -> CanvasResult<Self> {
        let db = font_config_to_fontdb(config);
        Self::new_internal(width, height, db)
    }

    /// Create a new context using a pre-resolved font configuration.
    ///
    /// This clones the cached font database from the [`ResolvedFontConfig`]
    /// rather than rebuilding it from scratch, avoiding repeated system font
    /// scanning. Use this when creating many contexts that share fonts.
    pub fn with_resolved(
        width: u32,
        height: u32,
        resolved: &ResolvedFontConfig,
    ) -> CanvasResult<Self> {
        Self::new_internal(width, height, resolved.fontdb.clone())
    }

    fn new_internal(width: u32, height: u32, font_db: fontdb::Database) -> CanvasResult<Self> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(CanvasError::InvalidDimensions { width, height });
        }

        let pixmap =
            Pixmap::new(width, height).ok_or(CanvasError::InvalidDimensions { width, height })?;

        let font_system = FontSystem::new_with_locale_and_db("en".to_string(), font_db);
        let swash_cache = SwashCache::new();

        Ok(Self {
            width,
            height,
            pixmap,
            font_system,
            swash_cache,
            state: DrawingState::default(),
            state_stack: Vec::new(),
            path_builder: tiny_skia::PathBuilder::new(),
        })
    }

    /// Get canvas width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get canvas height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Save the current drawing state.
    pub fn save(&mut self) {
        log::debug!(target: "canvas", "save");
        self.state_stack.push(self.state.clone());
    }

    /// Restore the previously saved drawing state.
    pub fn restore(&mut self) {
        log::debug!(target: "canvas", "restore");
        if let Some(state) = self.state_stack.pop() {
            self.state = state;
        }
    }

    /// Fill the whole canvas with a solid color, replacing existing pixels.
    pub fn clear(&mut self, color: tiny_skia::Color) {
        log::debug!(target: "canvas", "clear");
        self.pixmap.fill(color);
    }

    // --- Style setters ---

    /// Set the fill style to a solid color.
    pub fn set_fill_color(&mut self, color: tiny_skia::Color) {
        self.state.fill_style = FillStyle::Color(color);
    }

    /// Set the fill style to a linear gradient.
    pub fn set_fill_gradient(&mut self, gradient: Gradient) {
        self.state.fill_style = FillStyle::LinearGradient(gradient);
    }

    /// Set the global alpha (opacity).
    /// Non-finite or out-of-range values are ignored.
    pub fn set_global_alpha(&mut self, alpha: f32) {
        if alpha.is_finite() && (0.0..=1.0).contains(&alpha) {
            self.state.global_alpha = alpha;
        }
    }

    /// Set or clear the drop shadow applied beneath fills and image draws.
    pub fn set_shadow(&mut self, shadow: Option<Shadow>) {
        self.state.shadow = shadow;
    }
}
