//! Gradient types for drawing-surface operations.

/// A color stop in a gradient.
#[derive(Debug, Clone)]
pub struct GradientStop {
    /// Offset position (0.0 to 1.0).
    pub offset: f64,
    /// Color at this stop.
    pub color: tiny_skia::Color,
}

/// A linear gradient from (x0, y0) to (x1, y1).
#[derive(Debug, Clone)]
pub struct Gradient {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    /// Color stops, kept sorted by offset.
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// Create a new linear gradient.
    pub fn new_linear(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            stops: Vec::new(),
        }
    }

    /// Add a color stop to the gradient.
    pub fn add_color_stop(&mut self, offset: f64, color: tiny_skia::Color) {
        self.stops.push(GradientStop { offset, color });
        // Keep stops sorted by offset
        self.stops.sort_by(|a, b| {
            a.offset
                .partial_cmp(&b.offset)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_stay_sorted() {
        let mut g = Gradient::new_linear(0.0, 0.0, 100.0, 100.0);
        g.add_color_stop(1.0, tiny_skia::Color::WHITE);
        g.add_color_stop(0.0, tiny_skia::Color::BLACK);
        g.add_color_stop(0.5, tiny_skia::Color::WHITE);
        let offsets: Vec<f64> = g.stops.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
    }
}
