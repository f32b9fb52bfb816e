//! The two layout pipelines and their shared text-drawing helper.

pub(crate) mod marketing;
pub(crate) mod social;

use crate::text::{wrap_text, TextBlock};
use brandgen_canvas2d::{CanvasContext, FontSpec, FontWeight, TextAlign, TextBaseline};

/// A horizontally-centered, vertically-centered wrapped text block.
pub(crate) struct BlockSpec<'a> {
    pub text: &'a str,
    pub family: &'a str,
    pub size: f32,
    pub weight: FontWeight,
    pub color: tiny_skia::Color,
    /// Vertical anchor the block centers on.
    pub anchor_y: f32,
    pub max_width: f32,
    pub line_height: f32,
}

/// Wrap and draw a block of text centered on the canvas midline.
pub(crate) fn draw_centered_block(ctx: &mut CanvasContext, spec: &BlockSpec<'_>) {
    if spec.text.trim().is_empty() {
        return;
    }

    ctx.set_font(FontSpec::with_family(spec.family, spec.size).weight(spec.weight));
    let lines = wrap_text(spec.text, spec.max_width, |s| ctx.measure_text(s).width);
    if lines.is_empty() {
        return;
    }

    ctx.set_fill_color(spec.color);
    ctx.set_text_align(TextAlign::Center);
    ctx.set_text_baseline(TextBaseline::Middle);

    let center_x = ctx.width() as f32 / 2.0;
    let block = TextBlock::new(lines.len(), spec.line_height, spec.anchor_y);
    for (i, line) in lines.iter().enumerate() {
        ctx.fill_text(line, center_x, block.line_y(i));
    }
}
