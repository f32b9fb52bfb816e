//! Logo acquisition, contain-fit sizing, and the placeholder tile.
//!
//! Resolution order: a URL is fetched and decoded; otherwise inline SVG
//! markup is rasterized; otherwise (or on any failure) the caller draws the
//! placeholder tile. Decode failures are recovered, never surfaced.

use crate::color::hex_to_rgb;
use crate::elements::LogoSource;
use crate::style::StyleConfig;
use brandgen_canvas2d::{CanvasContext, FontSpec, FontWeight, Shadow, TextAlign, TextBaseline};
use lazy_static::lazy_static;
use reqwest::{Client, StatusCode};
use thiserror::Error;

static BRANDGEN_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

lazy_static! {
    static ref HTTP_CLIENT: Client = Client::builder()
        .user_agent(BRANDGEN_USER_AGENT)
        .build()
        .expect("Failed to construct reqwest client");
}

/// Why a logo could not be decoded. Consumed by the pipelines (placeholder
/// substitution); never part of the public error surface.
#[derive(Debug, Error)]
pub(crate) enum LogoDecodeError {
    #[error("no logo source supplied")]
    Missing,
    #[error("failed to fetch logo: {0}")]
    Http(String),
    #[error("failed to decode logo bitmap: {0}")]
    Bitmap(String),
    #[error("failed to rasterize logo svg: {0}")]
    Svg(String),
}

/// Scale a source into a square box, preserving aspect ratio and never
/// exceeding the box in either dimension.
pub fn contain_fit(src_width: f32, src_height: f32, box_px: f32) -> (f32, f32) {
    let aspect = src_width / src_height;
    let mut draw_width = box_px;
    let mut draw_height = box_px / aspect;
    if draw_height > box_px {
        draw_height = box_px;
        draw_width = box_px * aspect;
    }
    (draw_width, draw_height)
}

/// Top-left corner for a logo of the given drawn width: anchored at
/// (5% w, 8% h), or horizontally centered at 8% h on story canvases.
pub(crate) fn logo_position(
    canvas_width: f32,
    canvas_height: f32,
    draw_width: f32,
    story: bool,
    style: &StyleConfig,
) -> (f32, f32) {
    let y = canvas_height * style.logo_anchor_y;
    if story {
        ((canvas_width - draw_width) / 2.0, y)
    } else {
        (canvas_width * style.logo_anchor_x, y)
    }
}

/// Decode the configured logo source into a premultiplied pixmap.
///
/// `box_px` is the target box: SVG sources rasterize at twice their
/// contain-fit size so the later scaled draw downsamples.
pub(crate) async fn decode_logo(
    logo: Option<&LogoSource>,
    box_px: f32,
) -> Result<tiny_skia::Pixmap, LogoDecodeError> {
    let Some(logo) = logo else {
        return Err(LogoDecodeError::Missing);
    };

    if let Some(url) = logo.url.as_deref().filter(|u| !u.is_empty()) {
        log::debug!("fetching logo from {url}");
        let bytes = fetch_bytes(url).await?;
        return if looks_like_svg(&bytes) {
            let markup = String::from_utf8(bytes)
                .map_err(|e| LogoDecodeError::Svg(format!("invalid utf-8: {e}")))?;
            rasterize_svg(&markup, box_px)
        } else {
            decode_bitmap(&bytes)
        };
    }

    if let Some(svg) = logo.svg.as_deref().filter(|s| !s.is_empty()) {
        return rasterize_svg(svg, box_px);
    }

    Err(LogoDecodeError::Missing)
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>, LogoDecodeError> {
    let response = HTTP_CLIENT
        .get(url)
        .send()
        .await
        .map_err(|e| LogoDecodeError::Http(e.to_string()))?;
    match response.status() {
        StatusCode::OK => Ok(response
            .bytes()
            .await
            .map_err(|e| LogoDecodeError::Http(e.to_string()))?
            .to_vec()),
        status => Err(LogoDecodeError::Http(format!("status code {status}"))),
    }
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(256)];
    let Ok(text) = std::str::from_utf8(head) else {
        return false;
    };
    let trimmed = text.trim_start();
    trimmed.starts_with("<svg") || trimmed.starts_with("<?xml")
}

/// Decode raster bytes (PNG/JPEG) into a premultiplied pixmap.
fn decode_bitmap(bytes: &[u8]) -> Result<tiny_skia::Pixmap, LogoDecodeError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| LogoDecodeError::Bitmap(e.to_string()))?
        .to_rgba8();
    let (width, height) = (img.width(), img.height());
    let mut data = img.into_raw();
    premultiply(&mut data);

    let size = tiny_skia::IntSize::from_wh(width, height)
        .ok_or_else(|| LogoDecodeError::Bitmap("empty bitmap".to_string()))?;
    tiny_skia::Pixmap::from_vec(data, size)
        .ok_or_else(|| LogoDecodeError::Bitmap("bitmap buffer mismatch".to_string()))
}

fn premultiply(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let af = u16::from(px[3]) + 1;
        px[0] = ((u16::from(px[0]) * af) >> 8) as u8;
        px[1] = ((u16::from(px[1]) * af) >> 8) as u8;
        px[2] = ((u16::from(px[2]) * af) >> 8) as u8;
    }
}

/// Rasterize SVG markup at twice its contain-fit size in `box_px`.
fn rasterize_svg(markup: &str, box_px: f32) -> Result<tiny_skia::Pixmap, LogoDecodeError> {
    let opt = usvg::Options::default();
    let tree =
        usvg::Tree::from_str(markup, &opt).map_err(|e| LogoDecodeError::Svg(e.to_string()))?;

    let size = tree.size();
    if size.width() <= 0.0 || size.height() <= 0.0 {
        return Err(LogoDecodeError::Svg("svg has no intrinsic size".to_string()));
    }

    let (fit_width, fit_height) = contain_fit(size.width(), size.height(), box_px);
    let render_width = ((fit_width * 2.0).ceil() as u32).max(1);
    let render_height = ((fit_height * 2.0).ceil() as u32).max(1);

    let mut pixmap = tiny_skia::Pixmap::new(render_width, render_height)
        .ok_or_else(|| LogoDecodeError::Svg("failed to allocate svg pixmap".to_string()))?;
    let transform = usvg::Transform::from_scale(
        render_width as f32 / size.width(),
        render_height as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Ok(pixmap)
}

fn logo_shadow(style: &StyleConfig) -> Shadow {
    Shadow {
        color: tiny_skia::Color::from_rgba8(
            0,
            0,
            0,
            (style.logo_shadow_alpha * 255.0).round() as u8,
        ),
        offset_x: style.logo_shadow_offset,
        offset_y: style.logo_shadow_offset,
        blur: style.logo_shadow_blur,
    }
}

/// Acquire and draw the logo, substituting the placeholder tile on absence
/// or any decode failure. This is the recovered failure path: nothing here
/// ever propagates an error.
pub(crate) async fn draw_logo(
    ctx: &mut CanvasContext,
    logo: Option<&LogoSource>,
    brand_initial: char,
    story: bool,
    style: &StyleConfig,
) {
    let canvas_width = ctx.width() as f32;
    let canvas_height = ctx.height() as f32;
    let box_px = canvas_width.min(canvas_height) * style.logo_ratio_for(story);

    match decode_logo(logo, box_px).await {
        Ok(pixmap) => {
            let (draw_width, draw_height) =
                contain_fit(pixmap.width() as f32, pixmap.height() as f32, box_px);
            let (x, y) = logo_position(canvas_width, canvas_height, draw_width, story, style);

            ctx.set_shadow(Some(logo_shadow(style)));
            ctx.draw_image_scaled(
                pixmap.data(),
                pixmap.width(),
                pixmap.height(),
                x,
                y,
                draw_width,
                draw_height,
            );
            ctx.set_shadow(None);
        }
        Err(err) => {
            if !matches!(err, LogoDecodeError::Missing) {
                log::warn!("logo unavailable, drawing placeholder: {err}");
            }
            let (x, y) = logo_position(canvas_width, canvas_height, box_px, story, style);
            draw_placeholder_tile(ctx, x, y, box_px, brand_initial, style);
        }
    }
}

/// The recovered-failure placeholder: a rounded translucent-white tile with
/// the brand initial centered in the accent color.
fn draw_placeholder_tile(
    ctx: &mut CanvasContext,
    x: f32,
    y: f32,
    tile: f32,
    initial: char,
    style: &StyleConfig,
) {
    ctx.set_shadow(Some(logo_shadow(style)));
    ctx.set_fill_color(tiny_skia::Color::from_rgba8(
        255,
        255,
        255,
        (style.tile_fill_alpha * 255.0).round() as u8,
    ));
    ctx.begin_path();
    ctx.round_rect(x, y, tile, tile, tile * style.tile_corner_frac);
    ctx.fill();
    ctx.set_shadow(None);

    ctx.set_fill_color(hex_to_rgb(style.tile_accent_color).to_color());
    ctx.set_font(
        FontSpec::with_family("sans-serif", tile * style.tile_initial_frac)
            .weight(FontWeight::BOLD),
    );
    ctx.set_text_align(TextAlign::Center);
    ctx.set_text_baseline(TextBaseline::Middle);
    ctx.fill_text(&initial.to_string(), x + tile / 2.0, y + tile / 2.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contain_fit_wide_source() {
        // 200x100 into a 129.6 box: height-bound by aspect
        let (w, h) = contain_fit(200.0, 100.0, 129.6);
        assert!((w - 129.6).abs() < 1e-4);
        assert!((h - 64.8).abs() < 1e-4);
    }

    #[test]
    fn contain_fit_tall_source() {
        let (w, h) = contain_fit(100.0, 200.0, 120.0);
        assert!((h - 120.0).abs() < 1e-4);
        assert!((w - 60.0).abs() < 1e-4);
    }

    #[test]
    fn contain_fit_square_fills_box() {
        let (w, h) = contain_fit(64.0, 64.0, 100.0);
        assert_eq!((w, h), (100.0, 100.0));
    }

    #[test]
    fn contain_fit_preserves_aspect() {
        for (sw, sh) in [(200.0, 100.0), (31.0, 97.0), (1.0, 1.0), (640.0, 480.0)] {
            let (w, h) = contain_fit(sw, sh, 129.6);
            assert!((w / h - sw / sh).abs() < 1e-3);
            assert!(w <= 129.6 + 1e-3 && h <= 129.6 + 1e-3);
        }
    }

    #[test]
    fn standard_position_is_edge_anchored() {
        let style = StyleConfig::default();
        let (x, y) = logo_position(1080.0, 1080.0, 129.6, false, &style);
        assert!((x - 54.0).abs() < 1e-3); // 5% of 1080
        assert!((y - 86.4).abs() < 1e-3); // 8% of 1080
    }

    #[test]
    fn story_position_is_centered() {
        let style = StyleConfig::default();
        let (x, y) = logo_position(1080.0, 1920.0, 162.0, true, &style);
        assert!((x - (1080.0 - 162.0) / 2.0).abs() < 1e-3);
        assert!((y - 1920.0 * 0.08).abs() < 1e-3);
    }

    #[tokio::test]
    async fn absent_logo_is_missing_without_io() {
        assert!(matches!(
            decode_logo(None, 100.0).await,
            Err(LogoDecodeError::Missing)
        ));
        let empty = LogoSource::default();
        assert!(matches!(
            decode_logo(Some(&empty), 100.0).await,
            Err(LogoDecodeError::Missing)
        ));
    }

    #[tokio::test]
    async fn invalid_svg_is_recovered_as_error() {
        let source = LogoSource {
            url: None,
            svg: Some("<svg not actually closed".to_string()),
        };
        assert!(matches!(
            decode_logo(Some(&source), 100.0).await,
            Err(LogoDecodeError::Svg(_))
        ));
    }

    #[tokio::test]
    async fn svg_logo_rasterizes_with_aspect() {
        let source = LogoSource {
            url: None,
            svg: Some(
                r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100"><rect width="200" height="100" fill="#ff0000"/></svg>"##
                    .to_string(),
            ),
        };
        let pixmap = decode_logo(Some(&source), 129.6).await.unwrap();
        let aspect = pixmap.width() as f32 / pixmap.height() as f32;
        assert!((aspect - 2.0).abs() < 0.05);
    }

    #[test]
    fn svg_sniffing() {
        assert!(looks_like_svg(b"  <svg xmlns='x'/>"));
        assert!(looks_like_svg(b"<?xml version=\"1.0\"?><svg/>"));
        assert!(!looks_like_svg(&[0x89, b'P', b'N', b'G']));
    }
}
