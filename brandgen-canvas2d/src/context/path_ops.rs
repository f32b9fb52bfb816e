//! Path building operations for CanvasContext.
//!
//! All coordinates are absolute device pixels.

use super::CanvasContext;

impl CanvasContext {
    /// Begin a new path.
    pub fn begin_path(&mut self) {
        log::debug!(target: "canvas", "beginPath");
        self.path_builder = tiny_skia::PathBuilder::new();
    }

    /// Move to a point without drawing.
    pub fn move_to(&mut self, x: f32, y: f32) {
        log::debug!(target: "canvas", "moveTo {} {}", x, y);
        self.path_builder.move_to(x, y);
    }

    /// Draw a line to a point.
    pub fn line_to(&mut self, x: f32, y: f32) {
        log::debug!(target: "canvas", "lineTo {} {}", x, y);
        self.path_builder.line_to(x, y);
    }

    /// Draw a quadratic bezier curve to a point.
    pub fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        log::debug!(target: "canvas", "quadraticCurveTo {} {} {} {}", cx, cy, x, y);
        self.path_builder.quad_to(cx, cy, x, y);
    }

    /// Close the current subpath.
    pub fn close_path(&mut self) {
        log::debug!(target: "canvas", "closePath");
        self.path_builder.close();
    }

    /// Add an axis-aligned rectangle subpath.
    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        log::debug!(target: "canvas", "rect {} {} {} {}", x, y, width, height);
        if let Some(r) = tiny_skia::Rect::from_xywh(x, y, width, height) {
            self.path_builder.push_rect(r);
        }
    }

    /// Add a full circle subpath.
    pub fn circle(&mut self, cx: f32, cy: f32, radius: f32) {
        log::debug!(target: "canvas", "circle {} {} {}", cx, cy, radius);
        self.path_builder.push_circle(cx, cy, radius);
    }

    /// Add a rounded rectangle subpath. The corner radius is clamped to half
    /// of the smaller side.
    pub fn round_rect(&mut self, x: f32, y: f32, width: f32, height: f32, radius: f32) {
        log::debug!(target: "canvas", "roundRect {} {} {} {} {}", x, y, width, height, radius);
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let r = radius.max(0.0).min(width.min(height) / 2.0);
        if r == 0.0 {
            self.rect(x, y, width, height);
            return;
        }

        // Circular corners via cubic bezier approximation.
        let k = 0.552_284_75 * r;
        let (x1, y1) = (x + width, y + height);
        let pb = &mut self.path_builder;
        pb.move_to(x + r, y);
        pb.line_to(x1 - r, y);
        pb.cubic_to(x1 - r + k, y, x1, y + r - k, x1, y + r);
        pb.line_to(x1, y1 - r);
        pb.cubic_to(x1, y1 - r + k, x1 - r + k, y1, x1 - r, y1);
        pb.line_to(x + r, y1);
        pb.cubic_to(x + r - k, y1, x, y1 - r + k, x, y1 - r);
        pb.line_to(x, y + r);
        pb.cubic_to(x, y + r - k, x + r - k, y, x + r, y);
        pb.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_config::FontConfig;

    fn headless(width: u32, height: u32) -> CanvasContext {
        let config = FontConfig {
            load_system_fonts: false,
            ..FontConfig::default()
        };
        CanvasContext::with_config(width, height, &config).unwrap()
    }

    #[test]
    fn circle_fill_covers_center_not_corner() {
        let mut ctx = headless(50, 50);
        ctx.set_fill_color(tiny_skia::Color::WHITE);
        ctx.begin_path();
        ctx.circle(25.0, 25.0, 20.0);
        ctx.fill();

        assert_eq!(ctx.pixel(25, 25).unwrap()[3], 255);
        assert_eq!(ctx.pixel(1, 1).unwrap()[3], 0);
    }

    #[test]
    fn round_rect_clips_corners() {
        let mut ctx = headless(60, 60);
        ctx.set_fill_color(tiny_skia::Color::WHITE);
        ctx.begin_path();
        ctx.round_rect(10.0, 10.0, 40.0, 40.0, 12.0);
        ctx.fill();

        // Center is filled, the extreme corner of the bounding box is not.
        assert_eq!(ctx.pixel(30, 30).unwrap()[3], 255);
        assert_eq!(ctx.pixel(11, 11).unwrap()[3], 0);
    }

    #[test]
    fn degenerate_round_rect_is_ignored() {
        let mut ctx = headless(20, 20);
        ctx.set_fill_color(tiny_skia::Color::WHITE);
        ctx.begin_path();
        ctx.round_rect(5.0, 5.0, 0.0, 10.0, 3.0);
        ctx.fill();
        assert!(ctx.pixmap.data().iter().all(|&b| b == 0));
    }
}
