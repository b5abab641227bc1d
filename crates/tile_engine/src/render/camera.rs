//! Scrolling camera

use crate::physics::collision::Aabb;

/// A viewport into the level, in world units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    viewport: Aabb,
}

impl Camera {
    /// Camera showing exactly `viewport`
    pub fn new(viewport: Aabb) -> Self {
        Self { viewport }
    }

    /// Camera of the given screen size centered on `target`
    ///
    /// The viewport is then pushed back inside `level`: first against the
    /// left/top edge, then against the right/bottom edge. A level smaller
    /// than the screen therefore ends up anchored to its right/bottom edge.
    pub fn follow(target: &Aabb, level: &Aabb, screen_width: f32, screen_height: f32) -> Self {
        let center = target.center();
        let mut x = center.x - screen_width / 2.0;
        let mut y = center.y - screen_height / 2.0;

        if x < level.left() {
            x = level.left();
        }
        if y < level.top() {
            y = level.top();
        }
        if x > level.right() - screen_width {
            x = level.right() - screen_width;
        }
        if y > level.bottom() - screen_height {
            y = level.bottom() - screen_height;
        }

        Self::new(Aabb::new(x, y, screen_width, screen_height))
    }

    /// Visible world region
    pub fn viewport(&self) -> Aabb {
        self.viewport
    }

    /// Convert a world-space box to screen space
    pub fn to_screen(&self, world: &Aabb) -> Aabb {
        world.translated(-self.viewport.x, -self.viewport.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level() -> Aabb {
        Aabb::new(0.0, 0.0, 1280.0, 960.0)
    }

    #[test]
    fn test_follow_centers_on_target() {
        let dot = Aabb::new(630.0, 470.0, 20.0, 20.0);
        let camera = Camera::follow(&dot, &level(), 640.0, 480.0);
        assert_eq!(camera.viewport(), Aabb::new(320.0, 240.0, 640.0, 480.0));
        assert_eq!(camera.to_screen(&dot), Aabb::new(310.0, 230.0, 20.0, 20.0));
    }

    #[test]
    fn test_follow_clamps_into_level() {
        let top_left = Aabb::new(0.0, 0.0, 20.0, 20.0);
        let camera = Camera::follow(&top_left, &level(), 640.0, 480.0);
        assert_eq!(camera.viewport().x, 0.0);
        assert_eq!(camera.viewport().y, 0.0);

        let bottom_right = Aabb::new(1260.0, 940.0, 20.0, 20.0);
        let camera = Camera::follow(&bottom_right, &level(), 640.0, 480.0);
        assert_eq!(camera.viewport(), Aabb::new(640.0, 480.0, 640.0, 480.0));
        assert!(level().contains_box(&camera.viewport()));
    }
}
