//! The social-media pipeline: gradient base, decorative shapes, logo,
//! centered text, watermark.

use super::{draw_centered_block, BlockSpec};
use crate::color::{hex_to_rgb, lighten};
use crate::elements::TemplateElements;
use crate::logo;
use crate::style::StyleConfig;
use crate::templates::TemplateConfig;
use brandgen_canvas2d::{CanvasContext, FontSpec, FontWeight, Gradient, TextAlign, TextBaseline};

/// Paint a complete social template onto `ctx`.
pub(crate) async fn compose(
    ctx: &mut CanvasContext,
    config: &TemplateConfig,
    elements: &TemplateElements,
    style: &StyleConfig,
) {
    let w = config.width as f32;
    let h = config.height as f32;
    let min_dim = config.min_dimension();
    let story = config.is_story();
    let secondary = elements.secondary_color_or(20.0);

    // Base gradient across the full diagonal.
    let mut gradient = Gradient::new_linear(0.0, 0.0, w, h);
    gradient.add_color_stop(0.0, hex_to_rgb(&elements.background).to_color());
    gradient.add_color_stop(1.0, hex_to_rgb(&secondary).to_color());
    ctx.set_fill_gradient(gradient);
    ctx.fill_rect(0.0, 0.0, w, h);

    draw_circles(ctx, w, h, min_dim, &secondary, style);
    draw_wave_bands(ctx, w, h, style);

    if elements.show_logo {
        logo::draw_logo(
            ctx,
            elements.logo.as_ref(),
            elements.brand_initial(),
            story,
            style,
        )
        .await;
    }

    let heading_size = min_dim * style.heading_scale_for(story);
    if let Some(text) = elements.text.as_deref() {
        draw_centered_block(
            ctx,
            &BlockSpec {
                text,
                family: elements.heading_family(),
                size: heading_size,
                weight: FontWeight::BOLD,
                color: tiny_skia::Color::WHITE,
                anchor_y: h * style.heading_anchor_for(story),
                max_width: w * style.text_max_width_frac,
                line_height: heading_size * style.line_height_factor,
            },
        );
    }

    if let Some(subtext) = elements.subtext.as_deref() {
        let size = heading_size * style.subtext_factor;
        draw_centered_block(
            ctx,
            &BlockSpec {
                text: subtext,
                family: elements.body_family(),
                size,
                weight: FontWeight::NORMAL,
                color: tiny_skia::Color::from_rgba8(255, 255, 255, 230),
                anchor_y: h * style.subtext_anchor_for(story),
                max_width: w * style.text_max_width_frac,
                line_height: size * style.line_height_factor,
            },
        );
    }

    // Brand name stands in for the hidden logo.
    if !elements.show_logo {
        if let Some(name) = elements.brand_name.as_deref() {
            let size = min_dim * style.footer_name_scale;
            draw_centered_block(
                ctx,
                &BlockSpec {
                    text: name,
                    family: elements.heading_family(),
                    size,
                    weight: FontWeight::SEMIBOLD,
                    color: tiny_skia::Color::from_rgba8(255, 255, 255, 204),
                    anchor_y: h * style.footer_name_anchor,
                    max_width: w * style.text_max_width_frac,
                    line_height: size * style.line_height_factor,
                },
            );
        }
    }

    draw_watermark(ctx, w, h, min_dim, style);
}

/// Two low-alpha decorative circles at fixed relative positions.
fn draw_circles(
    ctx: &mut CanvasContext,
    w: f32,
    h: f32,
    min_dim: f32,
    secondary: &str,
    style: &StyleConfig,
) {
    let tint = hex_to_rgb(&lighten(secondary, 30.0)).to_color_with_alpha(style.circle_alpha);
    ctx.set_fill_color(tint);
    ctx.begin_path();
    ctx.circle(w * 0.85, h * 0.2, min_dim * 0.25);
    ctx.fill();

    let white = tiny_skia::Color::from_rgba(1.0, 1.0, 1.0, style.circle_alpha)
        .unwrap_or(tiny_skia::Color::WHITE);
    ctx.set_fill_color(white);
    ctx.begin_path();
    ctx.circle(w * 0.15, h * 0.8, min_dim * 0.18);
    ctx.fill();
}

/// Three low-alpha diagonal wave bands built from quadratic curves.
fn draw_wave_bands(ctx: &mut CanvasContext, w: f32, h: f32, style: &StyleConfig) {
    let white = tiny_skia::Color::from_rgba(1.0, 1.0, 1.0, style.wave_alpha)
        .unwrap_or(tiny_skia::Color::WHITE);
    ctx.set_fill_color(white);

    for i in 0..3 {
        let y_left = h * (0.30 + 0.20 * i as f32);
        let y_right = y_left - h * 0.12;
        let thickness = h * 0.055;

        ctx.begin_path();
        ctx.move_to(0.0, y_left);
        ctx.quad_to(w * 0.5, y_left + h * 0.08, w, y_right);
        ctx.line_to(w, y_right + thickness);
        ctx.quad_to(w * 0.5, y_left + h * 0.08 + thickness, 0.0, y_left + thickness);
        ctx.close_path();
        ctx.fill();
    }
}

/// Fixed watermark string in the bottom-right corner.
fn draw_watermark(ctx: &mut CanvasContext, w: f32, h: f32, min_dim: f32, style: &StyleConfig) {
    let margin = min_dim * style.edge_margin_frac;
    ctx.set_font(FontSpec::with_family(
        "sans-serif",
        min_dim * style.watermark_scale,
    ));
    ctx.set_text_align(TextAlign::Right);
    ctx.set_text_baseline(TextBaseline::Bottom);
    ctx.set_fill_color(
        tiny_skia::Color::from_rgba(1.0, 1.0, 1.0, style.watermark_alpha)
            .unwrap_or(tiny_skia::Color::WHITE),
    );
    ctx.fill_text(style.watermark, w - margin, h - margin);
}
