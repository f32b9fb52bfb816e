//! Surface encoding and the generated-template output type.

use crate::error::{TemplateError, TemplateResult};
use crate::templates::TemplateConfig;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use brandgen_canvas2d::CanvasContext;
use image::ImageEncoder;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Fixed JPEG quality factor (out of 100).
const JPEG_QUALITY: u8 = 92;

/// Encoded output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    #[serde(alias = "jpeg")]
    Jpg,
}

impl OutputFormat {
    /// MIME type of the encoded bytes.
    pub fn mime(self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Jpg => "image/jpeg",
        }
    }

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpg => "jpg",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpg),
            other => Err(format!("unsupported format: {other}")),
        }
    }
}

/// A rendered template: encoded bytes plus identity metadata. Immutable
/// once produced; the engine keeps no reference to it.
#[derive(Debug, Clone)]
pub struct GeneratedTemplate {
    /// Unique id: `{config.id}-{stamp}`.
    pub id: String,
    pub name: String,
    /// Encoded image bytes.
    pub blob: Vec<u8>,
    /// `data:{mime};base64,...` encoding of the same bytes.
    pub data_url: String,
    pub width: u32,
    pub height: u32,
    pub format: OutputFormat,
}

static LAST_STAMP: AtomicU64 = AtomicU64::new(0);

/// Millisecond stamp, forced strictly monotonic so ids stay unique even for
/// repeated generations of the same config within one millisecond.
pub(crate) fn next_generation_stamp() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut last = LAST_STAMP.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(last + 1);
        match LAST_STAMP.compare_exchange_weak(last, candidate, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return candidate,
            Err(actual) => last = actual,
        }
    }
}

/// Serialize the composited surface into a [`GeneratedTemplate`].
pub(crate) fn encode_surface(
    ctx: &CanvasContext,
    config: &TemplateConfig,
    format: OutputFormat,
) -> TemplateResult<GeneratedTemplate> {
    let blob = match format {
        OutputFormat::Png => ctx
            .to_png()
            .map_err(|e| TemplateError::EncodingFailed(e.to_string()))?,
        OutputFormat::Jpg => encode_jpeg(ctx)?,
    };
    if blob.is_empty() {
        return Err(TemplateError::EncodingFailed(
            "encoder produced no bytes".to_string(),
        ));
    }

    let data_url = format!("data:{};base64,{}", format.mime(), BASE64.encode(&blob));
    let id = format!("{}-{}", config.id, next_generation_stamp());
    log::debug!(
        "encoded {} as {} ({} bytes)",
        config.id,
        format.mime(),
        blob.len()
    );

    Ok(GeneratedTemplate {
        id,
        name: config.name.clone(),
        blob,
        data_url,
        width: ctx.width(),
        height: ctx.height(),
        format,
    })
}

/// JPEG has no alpha channel: straight RGBA drops to RGB, with fully
/// transparent pixels landing on black, matching canvas JPEG export.
fn encode_jpeg(ctx: &CanvasContext) -> TemplateResult<Vec<u8>> {
    let rgba = ctx.image_data();
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        rgb.extend_from_slice(&px[..3]);
    }

    let mut buf = Vec::new();
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
    encoder
        .write_image(
            &rgb,
            ctx.width(),
            ctx.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| TemplateError::EncodingFailed(e.to_string()))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandgen_canvas2d::FontConfig;

    fn headless_canvas(width: u32, height: u32) -> CanvasContext {
        let config = FontConfig {
            load_system_fonts: false,
            ..FontConfig::default()
        };
        CanvasContext::with_config(width, height, &config).unwrap()
    }

    fn test_config() -> TemplateConfig {
        crate::templates::social_media_size("instagram-post")
            .unwrap()
            .clone()
    }

    #[test]
    fn format_from_str_accepts_aliases() {
        assert_eq!("png".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
        assert_eq!("jpg".parse::<OutputFormat>().unwrap(), OutputFormat::Jpg);
        assert_eq!("JPEG".parse::<OutputFormat>().unwrap(), OutputFormat::Jpg);
        assert!("webp".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn stamps_are_strictly_increasing() {
        let stamps: Vec<u64> = (0..64).map(|_| next_generation_stamp()).collect();
        for pair in stamps.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn png_blob_and_data_url_match() {
        let mut ctx = headless_canvas(16, 16);
        ctx.clear(tiny_skia::Color::WHITE);
        let template = encode_surface(&ctx, &test_config(), OutputFormat::Png).unwrap();

        assert!(template.data_url.starts_with("data:image/png;base64,"));
        let encoded = template
            .data_url
            .strip_prefix("data:image/png;base64,")
            .unwrap();
        assert_eq!(BASE64.decode(encoded).unwrap(), template.blob);
        assert_eq!(template.format, OutputFormat::Png);
        assert_eq!((template.width, template.height), (16, 16));
    }

    #[test]
    fn jpeg_blob_has_magic_and_prefix() {
        let mut ctx = headless_canvas(16, 16);
        ctx.clear(tiny_skia::Color::WHITE);
        let template = encode_surface(&ctx, &test_config(), OutputFormat::Jpg).unwrap();

        assert!(template.data_url.starts_with("data:image/jpeg;base64,"));
        assert_eq!(&template.blob[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn ids_are_unique_for_repeated_encodes() {
        let mut ctx = headless_canvas(8, 8);
        ctx.clear(tiny_skia::Color::BLACK);
        let config = test_config();
        let a = encode_surface(&ctx, &config, OutputFormat::Png).unwrap();
        let b = encode_surface(&ctx, &config, OutputFormat::Png).unwrap();
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("instagram-post-"));
    }
}
