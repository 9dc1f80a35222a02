use crate::core::geom::Aabb;

/// Horizontal side-scrolling camera.
///
/// Tracks the player with a fixed lead-in margin and is deliberately
/// unclamped: it may show space before the level start or past the level
/// end. The rasterizer translates world-space shapes by `-x`.
#[derive(Debug, Clone)]
pub struct ScrollCamera {
    /// World-space x of the viewport's left edge.
    pub x: f32,
    /// Margin kept between the viewport's left edge and the tracked actor.
    pub lead_in: f32,
    /// Viewport width in pixels (the render surface width).
    pub viewport_width: f32,
}

impl ScrollCamera {
    pub fn new(lead_in: f32, viewport_width: f32) -> Self {
        Self {
            x: 0.0,
            lead_in,
            viewport_width,
        }
    }

    /// Snap the viewport so the target sits `lead_in` pixels from its left
    /// edge. No smoothing, no bounds.
    pub fn follow(&mut self, target_x: f32) {
        self.x = target_x - self.lead_in;
    }

    /// Whether a world-space rectangle intersects the horizontal viewport.
    /// Levels are authored to fit the surface vertically, so culling is
    /// one-dimensional.
    pub fn is_rect_visible(&self, rect: &Aabb) -> bool {
        rect.right() >= self.x && rect.left() <= self.x + self.viewport_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_keeps_lead_in_margin() {
        let mut cam = ScrollCamera::new(100.0, 800.0);
        cam.follow(350.0);
        assert_eq!(cam.x, 250.0);
    }

    #[test]
    fn follow_is_unclamped_at_level_start() {
        let mut cam = ScrollCamera::new(100.0, 800.0);
        cam.follow(50.0);
        assert_eq!(cam.x, -50.0);
    }

    #[test]
    fn rects_inside_viewport_are_visible() {
        let mut cam = ScrollCamera::new(100.0, 800.0);
        cam.follow(500.0); // viewport [400, 1200]
        assert!(cam.is_rect_visible(&Aabb::new(600.0, 0.0, 64.0, 16.0)));
        // Straddling the left edge still draws
        assert!(cam.is_rect_visible(&Aabb::new(380.0, 0.0, 64.0, 16.0)));
    }

    #[test]
    fn rects_outside_viewport_are_culled() {
        let mut cam = ScrollCamera::new(100.0, 800.0);
        cam.follow(500.0); // viewport [400, 1200]
        assert!(!cam.is_rect_visible(&Aabb::new(0.0, 0.0, 64.0, 16.0)));
        assert!(!cam.is_rect_visible(&Aabb::new(1300.0, 0.0, 64.0, 16.0)));
    }
}
