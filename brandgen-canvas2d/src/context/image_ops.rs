//! Image drawing, pixel data, and PNG output operations for CanvasContext.

use super::CanvasContext;
use crate::error::CanvasResult;
use tiny_skia::Transform;

impl CanvasContext {
    /// Draw a premultiplied-alpha RGBA image scaled into the destination
    /// rectangle. The active drop shadow, if any, is painted beneath it.
    pub fn draw_image_scaled(
        &mut self,
        data: &[u8],
        img_width: u32,
        img_height: u32,
        dx: f32,
        dy: f32,
        dw: f32,
        dh: f32,
    ) {
        log::debug!(target: "canvas", "drawImage {}x{} at {} {} ({}x{})", img_width, img_height, dx, dy, dw, dh);
        let Some(pixmap) = tiny_skia::PixmapRef::from_bytes(data, img_width, img_height) else {
            return;
        };
        if dw <= 0.0 || dh <= 0.0 {
            return;
        }

        let transform = Transform::from_translate(dx, dy)
            .pre_scale(dw / img_width as f32, dh / img_height as f32);

        if let Some(shadow) = self.state.shadow.clone() {
            self.paint_image_shadow(pixmap, transform, &shadow);
        }

        let paint = tiny_skia::PixmapPaint {
            opacity: self.state.global_alpha,
            blend_mode: tiny_skia::BlendMode::SourceOver,
            quality: tiny_skia::FilterQuality::Bilinear,
        };
        self.pixmap
            .draw_pixmap(0, 0, pixmap, &paint, transform, None);
    }

    /// Paint a blurred, offset silhouette of the image in the shadow color.
    fn paint_image_shadow(
        &mut self,
        src: tiny_skia::PixmapRef,
        transform: Transform,
        shadow: &crate::drawing_state::Shadow,
    ) {
        let Some(mut layer) = tiny_skia::Pixmap::new(self.width, self.height) else {
            return;
        };
        let paint = tiny_skia::PixmapPaint {
            opacity: self.state.global_alpha,
            ..Default::default()
        };
        let offset = transform.post_translate(shadow.offset_x, shadow.offset_y);
        layer.draw_pixmap(0, 0, src, &paint, offset, None);

        // Keep only the alpha silhouette, tinted with the shadow color
        // (premultiplied).
        let sc = shadow.color;
        for px in layer.data_mut().chunks_exact_mut(4) {
            let a = f32::from(px[3]) / 255.0 * sc.alpha();
            px[0] = (sc.red() * a * 255.0).round() as u8;
            px[1] = (sc.green() * a * 255.0).round() as u8;
            px[2] = (sc.blue() * a * 255.0).round() as u8;
            px[3] = (a * 255.0).round() as u8;
        }

        self.composite_shadow_layer(&layer, shadow.blur);
    }

    // --- Pixel access ---

    /// Get the full canvas as straight-alpha RGBA bytes.
    pub fn image_data(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pixmap.data().len());
        for px in self.pixmap.data().chunks_exact(4) {
            let a = px[3];
            if a == 0 {
                data.extend_from_slice(&[0, 0, 0, 0]);
            } else if a == 255 {
                data.extend_from_slice(px);
            } else {
                // Convert from premultiplied alpha to straight alpha
                let alpha_f = f32::from(a) / 255.0;
                data.push((f32::from(px[0]) / alpha_f).min(255.0) as u8);
                data.push((f32::from(px[1]) / alpha_f).min(255.0) as u8);
                data.push((f32::from(px[2]) / alpha_f).min(255.0) as u8);
                data.push(a);
            }
        }
        data
    }

    /// Get a single straight-alpha RGBA pixel, or None when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        let px = &self.pixmap.data()[idx..idx + 4];
        let a = px[3];
        Some(if a == 0 {
            [0, 0, 0, 0]
        } else if a == 255 {
            [px[0], px[1], px[2], a]
        } else {
            let alpha_f = f32::from(a) / 255.0;
            [
                (f32::from(px[0]) / alpha_f).min(255.0) as u8,
                (f32::from(px[1]) / alpha_f).min(255.0) as u8,
                (f32::from(px[2]) / alpha_f).min(255.0) as u8,
                a,
            ]
        })
    }

    /// Export the canvas as PNG data.
    pub fn to_png(&self) -> CanvasResult<Vec<u8>> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            // 72 ppi pixel density metadata (pixels per meter)
            let ppm = (72.0 / 0.0254_f32).round() as u32;
            encoder.set_pixel_dims(Some(png::PixelDimensions {
                xppu: ppm,
                yppu: ppm,
                unit: png::Unit::Meter,
            }));

            let mut writer = encoder.write_header()?;

            // Convert from premultiplied to straight alpha for PNG
            let data = self.image_data();
            writer.write_image_data(&data)?;
        }
        Ok(buf)
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

    fn opaque_red_image(w: u32, h: u32) -> Vec<u8> {
        [255u8, 0, 0, 255].repeat((w * h) as usize)
    }

    #[test]
    fn draw_image_scaled_covers_destination() {
        let mut ctx = headless(40, 40);
        let img = opaque_red_image(4, 2);
        ctx.draw_image_scaled(&img, 4, 2, 10.0, 10.0, 20.0, 10.0);

        assert_eq!(ctx.pixel(20, 15).unwrap(), [255, 0, 0, 255]);
        assert_eq!(ctx.pixel(5, 5).unwrap()[3], 0);
        // Below the 10px-tall destination rect
        assert_eq!(ctx.pixel(20, 25).unwrap()[3], 0);
    }

    #[test]
    fn to_png_has_signature() {
        let mut ctx = headless(8, 8);
        ctx.clear(tiny_skia::Color::WHITE);
        let data = ctx.to_png().unwrap();
        assert_eq!(&data[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    }

    #[test]
    fn image_data_is_straight_alpha() {
        let mut ctx = headless(4, 4);
        let mut half = tiny_skia::Color::WHITE;
        half.set_alpha(0.5);
        ctx.clear(half);
        let data = ctx.image_data();
        // Premultiplied storage holds ~128; straight alpha restores ~255.
        assert!(data[0] > 250);
        assert!((data[3] as i32 - 128).abs() <= 2);
    }
}
