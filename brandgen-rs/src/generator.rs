//! The public generation surface: single templates, sequential batches, and
//! the file sink.

use crate::elements::TemplateElements;
use crate::encode::{encode_surface, GeneratedTemplate, OutputFormat};
use crate::error::{TemplateError, TemplateResult};
use crate::layout;
use crate::style::StyleConfig;
use crate::templates::{LayoutKind, TemplateConfig};
use brandgen_canvas2d::{CanvasContext, CanvasError, FontConfig, ResolvedFontConfig};
use std::path::{Path, PathBuf};

/// Stateless-per-call template generator.
///
/// Owns the resolved font configuration (the system font scan happens once,
/// at construction) and the style constants. Every generation call gets a
/// freshly-allocated surface and never mutates the caller's elements; the
/// only suspension point is logo acquisition.
pub struct TemplateGenerator {
    fonts: ResolvedFontConfig,
    style: StyleConfig,
}

impl TemplateGenerator {
    /// Generator with system fonts and default style constants.
    pub fn new() -> Self {
        Self::with_font_config(&FontConfig::default(), StyleConfig::default())
    }

    /// Generator with an explicit font configuration (e.g. bundled fonts
    /// only, for hermetic environments) and style constants.
    pub fn with_font_config(fonts: &FontConfig, style: StyleConfig) -> Self {
        Self {
            fonts: fonts.resolve(),
            style,
        }
    }

    fn new_surface(&self, config: &TemplateConfig) -> TemplateResult<CanvasContext> {
        CanvasContext::with_resolved(config.width, config.height, &self.fonts).map_err(|err| {
            match err {
                CanvasError::InvalidDimensions { width, height } => {
                    TemplateError::SurfaceUnavailable { width, height }
                }
                other => TemplateError::Canvas(other),
            }
        })
    }

    /// Compose and encode one social-media template.
    pub async fn generate_social_media_template(
        &self,
        config: &TemplateConfig,
        elements: &TemplateElements,
        format: OutputFormat,
    ) -> TemplateResult<GeneratedTemplate> {
        log::info!(
            "generating social template {} ({}x{})",
            config.id,
            config.width,
            config.height
        );
        let mut ctx = self.new_surface(config)?;
        layout::social::compose(&mut ctx, config, elements, &self.style).await;
        encode_surface(&ctx, config, format)
    }

    /// Compose and encode one marketing template.
    pub async fn generate_marketing_template(
        &self,
        config: &TemplateConfig,
        elements: &TemplateElements,
        format: OutputFormat,
    ) -> TemplateResult<GeneratedTemplate> {
        log::info!(
            "generating marketing template {} ({}x{})",
            config.id,
            config.width,
            config.height
        );
        let mut ctx = self.new_surface(config)?;
        layout::marketing::compose(&mut ctx, config, elements, &self.style).await;
        encode_surface(&ctx, config, format)
    }

    /// Generate one template per config, sequentially and in input order,
    /// reusing the same elements throughout.
    ///
    /// Best-effort: each config yields its own result, and a failure never
    /// aborts the remainder of the batch.
    pub async fn generate_batch_templates(
        &self,
        configs: &[TemplateConfig],
        elements: &TemplateElements,
        format: OutputFormat,
    ) -> Vec<TemplateResult<GeneratedTemplate>> {
        let mut results = Vec::with_capacity(configs.len());
        for config in configs {
            let result = match config.layout_kind() {
                LayoutKind::Social => {
                    self.generate_social_media_template(config, elements, format)
                        .await
                }
                LayoutKind::Marketing => {
                    self.generate_marketing_template(config, elements, format)
                        .await
                }
            };
            if let Err(err) = &result {
                log::warn!("batch item {} failed: {err}", config.id);
            }
            results.push(result);
        }
        results
    }
}

impl Default for TemplateGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Hand the encoded bytes to the host filesystem.
///
/// Writes `blob` into `dir`, deriving `{id}.{ext}` when no filename is
/// given, and returns the written path.
pub fn save_template(
    template: &GeneratedTemplate,
    dir: &Path,
    filename: Option<&str>,
) -> std::io::Result<PathBuf> {
    let filename = filename.map(str::to_string).unwrap_or_else(|| {
        format!("{}.{}", template.id, template.format.extension())
    });
    let path = dir.join(filename);
    std::fs::write(&path, &template.blob)?;
    Ok(path)
}
