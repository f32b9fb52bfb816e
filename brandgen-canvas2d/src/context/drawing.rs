//! Fill and paint helper operations for CanvasContext.

use super::CanvasContext;
use crate::blur::gaussian_blur_premul;
use crate::drawing_state::Shadow;
use crate::gradient::Gradient;
use crate::style::FillStyle;
use tiny_skia::Transform;

impl CanvasContext {
    /// Fill the current path using the non-zero winding rule.
    pub fn fill(&mut self) {
        log::debug!(target: "canvas", "fill");
        // Clone the path builder so we don't consume it - fill may be repeated
        let path = self.path_builder.clone().finish();

        if let Some(path) = path {
            if let Some(shadow) = self.state.shadow.clone() {
                self.paint_path_shadow(&path, &shadow);
            }
            let _ = self.with_fill_paint(|ctx, paint| {
                ctx.pixmap.fill_path(
                    &path,
                    paint,
                    tiny_skia::FillRule::Winding,
                    Transform::identity(),
                    None,
                );
            });
        }
    }

    /// Fill a rectangle.
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        log::debug!(target: "canvas", "fillRect {} {} {} {}", x, y, width, height);
        self.begin_path();
        self.rect(x, y, width, height);
        self.fill();
    }

    // --- Private paint helpers ---

    pub(crate) fn with_fill_paint<R>(
        &mut self,
        draw: impl for<'a> FnOnce(&mut Self, &tiny_skia::Paint<'a>) -> R,
    ) -> Option<R> {
        let style = self.state.fill_style.clone();
        self.with_paint_from_style(style, draw)
    }

    pub(crate) fn with_paint_from_style<R>(
        &mut self,
        style: FillStyle,
        draw: impl for<'a> FnOnce(&mut Self, &tiny_skia::Paint<'a>) -> R,
    ) -> Option<R> {
        let mut paint = tiny_skia::Paint {
            anti_alias: true,
            ..Default::default()
        };

        match style {
            FillStyle::Color(color) => {
                let mut color = color;
                // Apply global alpha
                if self.state.global_alpha < 1.0 {
                    color.set_alpha((color.alpha() * self.state.global_alpha).clamp(0.0, 1.0));
                }
                paint.set_color(color);
                Some(draw(self, &paint))
            }
            FillStyle::LinearGradient(gradient) => {
                let shader = self.create_gradient_shader(&gradient)?;
                paint.shader = shader;
                Some(draw(self, &paint))
            }
        }
    }

    pub(crate) fn create_gradient_shader(
        &self,
        gradient: &Gradient,
    ) -> Option<tiny_skia::Shader<'static>> {
        if gradient.stops.is_empty() {
            return None;
        }

        let stops: Vec<tiny_skia::GradientStop> = gradient
            .stops
            .iter()
            .map(|stop| {
                let mut color = stop.color;
                if self.state.global_alpha < 1.0 {
                    color.set_alpha((color.alpha() * self.state.global_alpha).clamp(0.0, 1.0));
                }
                tiny_skia::GradientStop::new(stop.offset as f32, color)
            })
            .collect();

        tiny_skia::LinearGradient::new(
            tiny_skia::Point {
                x: gradient.x0,
                y: gradient.y0,
            },
            tiny_skia::Point {
                x: gradient.x1,
                y: gradient.y1,
            },
            stops,
            tiny_skia::SpreadMode::Pad,
            Transform::identity(),
        )
    }

    // --- Shadow pass ---

    /// Paint a blurred, offset silhouette of `path` in the shadow color.
    fn paint_path_shadow(&mut self, path: &tiny_skia::Path, shadow: &Shadow) {
        let Some(mut layer) = tiny_skia::Pixmap::new(self.width, self.height) else {
            return;
        };
        let mut paint = tiny_skia::Paint {
            anti_alias: true,
            ..Default::default()
        };
        let mut color = shadow.color;
        if self.state.global_alpha < 1.0 {
            color.set_alpha((color.alpha() * self.state.global_alpha).clamp(0.0, 1.0));
        }
        paint.set_color(color);
        layer.fill_path(
            path,
            &paint,
            tiny_skia::FillRule::Winding,
            Transform::from_translate(shadow.offset_x, shadow.offset_y),
            None,
        );
        self.composite_shadow_layer(&layer, shadow.blur);
    }

    /// Blur a shadow layer and composite it onto the canvas.
    pub(crate) fn composite_shadow_layer(&mut self, layer: &tiny_skia::Pixmap, blur: f32) {
        let sigma = (blur.max(0.0)) * 0.5;
        let radius = (sigma * 2.0).ceil() as u32;
        let blurred = gaussian_blur_premul(layer.data(), self.width, self.height, radius, sigma);

        let Some(size) = tiny_skia::IntSize::from_wh(self.width, self.height) else {
            return;
        };
        let Some(shadow_pixmap) = tiny_skia::Pixmap::from_vec(blurred, size) else {
            return;
        };
        self.pixmap.draw_pixmap(
            0,
            0,
            shadow_pixmap.as_ref(),
            &tiny_skia::PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }
}
