//! Floating background shapes with scroll parallax.
//!
//! Each shape is a triangle spun around its own center. Shapes sit behind
//! every screen and move upward as content scrolls, faster for higher
//! indices, wrapping vertically so they never run out.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Triangle};

use crate::animations::{parallax_offset, parallax_rotation};
use crate::colors::SHAPE_TINTS;
use crate::config::SCREEN_HEIGHT;

/// Resting centers of the floating shapes.
const SHAPE_ORIGINS: [Point; 4] = [
    Point::new(36, 48),
    Point::new(276, 92),
    Point::new(60, 176),
    Point::new(252, 212),
];

/// Circumradius of each shape.
const SHAPE_RADIUS: f32 = 14.0;

/// Vertical wrap period; a bit taller than the display so shapes fully
/// leave before reappearing.
const WRAP_HEIGHT: i32 = SCREEN_HEIGHT as i32 + 2 * SHAPE_RADIUS as i32;

/// Center of shape `index` after parallax.
pub fn shape_center(
    index: usize,
    scrolled: f32,
) -> Point {
    let origin = SHAPE_ORIGINS[index % SHAPE_ORIGINS.len()];
    let shifted = origin.y - parallax_offset(scrolled, index) as i32 + SHAPE_RADIUS as i32;
    Point::new(origin.x, shifted.rem_euclid(WRAP_HEIGHT) - SHAPE_RADIUS as i32)
}

/// Triangle vertices around `center` rotated by `degrees`.
pub fn shape_vertices(
    center: Point,
    degrees: f32,
) -> [Point; 3] {
    let base = degrees.to_radians();
    core::array::from_fn(|i| {
        let angle = base + i as f32 * core::f32::consts::TAU / 3.0;
        center + Point::new((angle.cos() * SHAPE_RADIUS) as i32, (angle.sin() * SHAPE_RADIUS) as i32)
    })
}

/// Draw every floating shape for the current scroll offset.
pub fn draw_floating_shapes<D>(
    display: &mut D,
    scrolled: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let rotation = parallax_rotation(scrolled);
    for (index, tint) in SHAPE_TINTS.iter().enumerate() {
        let [a, b, c] = shape_vertices(shape_center(index, scrolled), rotation);
        Triangle::new(a, b, c)
            .into_styled(PrimitiveStyle::with_stroke(*tint, 2))
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes_rest_without_scroll() {
        for (i, origin) in SHAPE_ORIGINS.iter().enumerate() {
            assert_eq!(shape_center(i, 0.0), *origin, "Shape {i} should be at rest");
        }
    }

    #[test]
    fn test_faster_shapes_move_further() {
        let slow = SHAPE_ORIGINS[0].y - shape_center(0, 40.0).y;
        let fast = SHAPE_ORIGINS[3].y - shape_center(3, 40.0).y;
        assert_eq!(slow, 20);
        assert_eq!(fast, 32);
    }

    #[test]
    fn test_shapes_wrap_vertically() {
        for scrolled in (0..5000).step_by(37) {
            let center = shape_center(1, scrolled as f32);
            assert!(
                center.y >= -(SHAPE_RADIUS as i32) && center.y < SCREEN_HEIGHT as i32 + SHAPE_RADIUS as i32,
                "Shape left the wrap band at scroll {scrolled}: {center:?}"
            );
        }
    }

    #[test]
    fn test_vertices_are_on_circle() {
        let center = Point::new(100, 100);
        for v in shape_vertices(center, 33.0) {
            let d = v - center;
            let r = ((d.x * d.x + d.y * d.y) as f32).sqrt();
            assert!((r - SHAPE_RADIUS).abs() <= 1.5, "Vertex {v:?} is {r}px from center");
        }
    }
}
