/// Pointer-driven parallax with exponential smoothing
use nalgebra::Vector2;

use crate::projection::Viewport;

/// Fraction of the remaining distance covered each frame
pub const DEFAULT_SMOOTHING: f64 = 0.05;

/// Smooths raw pointer input into a normalized `[-1, 1]` offset.
///
/// Smoothing is per frame, not per second, so the response follows the
/// host's frame rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerParallax {
    current: Vector2<f64>,
    target: Vector2<f64>,
    smoothing: f64,
}

impl PointerParallax {
    pub fn new(smoothing: f64) -> Self {
        debug_assert!(smoothing > 0.0 && smoothing <= 1.0);
        Self {
            current: Vector2::zeros(),
            target: Vector2::zeros(),
            smoothing,
        }
    }

    /// Aim at a pointer position given in viewport pixels
    pub fn point_at(&mut self, x: f64, y: f64, viewport: Viewport) {
        self.target = Vector2::new(
            x / viewport.width * 2.0 - 1.0,
            y / viewport.height * 2.0 - 1.0,
        );
    }

    /// Move `current` one frame towards `target`
    pub fn step(&mut self) {
        self.current += (self.target - self.current) * self.smoothing;
    }

    /// Screen-space displacement for something at `depth`
    pub fn offset(&self, depth: f64, factor: f64) -> Vector2<f64> {
        -self.current * (depth * factor)
    }

    pub fn current(&self) -> Vector2<f64> {
        self.current
    }

    pub fn target(&self) -> Vector2<f64> {
        self.target
    }
}

impl Default for PointerParallax {
    fn default() -> Self {
        Self::new(DEFAULT_SMOOTHING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_at_normalizes_to_unit_square() {
        let viewport = Viewport::new(1000.0, 800.0);
        let mut tracker = PointerParallax::default();

        tracker.point_at(0.0, 0.0, viewport);
        assert_eq!(tracker.target(), Vector2::new(-1.0, -1.0));

        tracker.point_at(500.0, 400.0, viewport);
        assert_eq!(tracker.target(), Vector2::new(0.0, 0.0));

        tracker.point_at(1000.0, 800.0, viewport);
        assert_eq!(tracker.target(), Vector2::new(1.0, 1.0));

        // Targeting alone does not move the smoothed value
        assert_eq!(tracker.current(), Vector2::zeros());
    }

    #[test]
    fn test_converges_monotonically_without_overshoot() {
        let mut tracker = PointerParallax::default();
        tracker.point_at(1000.0, 0.0, Viewport::new(1000.0, 800.0));
        let target = tracker.target();

        let mut previous_gap = (target - tracker.current()).norm();
        for _ in 0..400 {
            tracker.step();
            let current = tracker.current();
            assert!(current.x <= target.x && current.x >= 0.0);
            assert!(current.y >= target.y && current.y <= 0.0);

            let gap = (target - current).norm();
            assert!(gap < previous_gap);
            // Each frame removes exactly the smoothing fraction of the gap
            assert!((gap - previous_gap * (1.0 - DEFAULT_SMOOTHING)).abs() < 1e-12);
            previous_gap = gap;
        }
        assert!(previous_gap < 1e-8);
    }

    #[test]
    fn test_first_step_moves_five_percent() {
        let mut tracker = PointerParallax::default();
        tracker.point_at(750.0, 200.0, Viewport::new(1000.0, 800.0));
        tracker.step();
        assert!((tracker.current().x - 0.025).abs() < 1e-12);
        assert!((tracker.current().y + 0.025).abs() < 1e-12);
    }

    #[test]
    fn test_offset_opposes_pointer_and_scales_with_depth() {
        let mut tracker = PointerParallax::new(1.0);
        tracker.point_at(1000.0, 800.0, Viewport::new(1000.0, 800.0));
        tracker.step();

        let near = tracker.offset(300.0, 0.1);
        let far = tracker.offset(600.0, 0.1);
        assert_eq!(near, Vector2::new(-30.0, -30.0));
        assert_eq!(far, Vector2::new(-60.0, -60.0));
        assert_eq!(tracker.offset(600.0, 0.05), near);
    }

    #[test]
    fn test_new_viewport_only_changes_normalization() {
        let mut tracker = PointerParallax::new(1.0);
        tracker.point_at(500.0, 400.0, Viewport::new(1000.0, 800.0));
        tracker.step();
        assert_eq!(tracker.current(), Vector2::zeros());

        tracker.point_at(500.0, 400.0, Viewport::new(2000.0, 800.0));
        assert_eq!(tracker.target(), Vector2::new(-0.5, 0.0));
        assert_eq!(tracker.current(), Vector2::zeros());
    }
}
