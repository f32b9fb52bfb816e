//! The marketing pipeline: white body, gradient header band, footer band.

use super::{draw_centered_block, BlockSpec};
use crate::color::{contrast_color, hex_to_rgb};
use crate::elements::TemplateElements;
use crate::logo;
use crate::style::StyleConfig;
use crate::templates::TemplateConfig;
use brandgen_canvas2d::{CanvasContext, FontSpec, FontWeight, Gradient, TextAlign, TextBaseline};

/// Paint a complete marketing template onto `ctx`.
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
    let secondary = elements.secondary_color_or(15.0);

    // Solid white body.
    ctx.clear(tiny_skia::Color::WHITE);

    // Header band: left-to-right gradient over the top quarter.
    let header_height = h * style.header_frac;
    let mut gradient = Gradient::new_linear(0.0, 0.0, w, 0.0);
    gradient.add_color_stop(0.0, hex_to_rgb(&elements.background).to_color());
    gradient.add_color_stop(1.0, hex_to_rgb(&secondary).to_color());
    ctx.set_fill_gradient(gradient);
    ctx.fill_rect(0.0, 0.0, w, header_height);

    draw_header_divider(ctx, w, h, header_height);

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

    // Neutral-toned text on the white body.
    let heading_size = min_dim * style.marketing_heading_scale;
    if let Some(text) = elements.text.as_deref() {
        draw_centered_block(
            ctx,
            &BlockSpec {
                text,
                family: elements.heading_family(),
                size: heading_size,
                weight: FontWeight::BOLD,
                color: hex_to_rgb(style.marketing_heading_color).to_color(),
                anchor_y: h * style.marketing_heading_anchor,
                max_width: w * style.text_max_width_frac,
                line_height: heading_size * style.line_height_factor,
            },
        );
    }

    if let Some(subtext) = elements.subtext.as_deref() {
        let size = heading_size * style.marketing_subtext_factor;
        draw_centered_block(
            ctx,
            &BlockSpec {
                text: subtext,
                family: elements.body_family(),
                size,
                weight: FontWeight::NORMAL,
                color: hex_to_rgb(style.marketing_subtext_color).to_color(),
                anchor_y: h * style.marketing_subtext_anchor,
                max_width: w * style.text_max_width_frac,
                line_height: size * style.line_height_factor,
            },
        );
    }

    draw_footer(ctx, w, h, elements, style);
}

/// A subtle wave bitten out of the header's lower edge: the lens between a
/// quadratic curve and the band boundary, filled in the body color.
fn draw_header_divider(ctx: &mut CanvasContext, w: f32, h: f32, header_height: f32) {
    ctx.set_fill_color(tiny_skia::Color::WHITE);
    ctx.begin_path();
    ctx.move_to(0.0, header_height);
    ctx.quad_to(w * 0.5, header_height - h * 0.025, w, header_height);
    ctx.close_path();
    ctx.fill();
}

/// Solid footer band in the brand background color, optionally carrying the
/// brand name in the contrasting text color.
fn draw_footer(
    ctx: &mut CanvasContext,
    w: f32,
    h: f32,
    elements: &TemplateElements,
    style: &StyleConfig,
) {
    let footer_height = h * style.footer_frac;
    let footer_top = h - footer_height;
    ctx.set_fill_color(hex_to_rgb(&elements.background).to_color());
    ctx.fill_rect(0.0, footer_top, w, footer_height);

    if let Some(name) = elements.brand_name.as_deref() {
        ctx.set_font(
            FontSpec::with_family(
                elements.heading_family(),
                footer_height * style.marketing_footer_text_factor,
            )
            .weight(FontWeight::SEMIBOLD),
        );
        ctx.set_text_align(TextAlign::Center);
        ctx.set_text_baseline(TextBaseline::Middle);
        ctx.set_fill_color(hex_to_rgb(contrast_color(&elements.background)).to_color());
        ctx.fill_text(name, w / 2.0, footer_top + footer_height / 2.0);
    }
}
