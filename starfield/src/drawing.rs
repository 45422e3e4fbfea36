//! Drawing primitives for star rendering.
//!
//! All shapes are clipped to the canvas, so callers may pass centers near or
//! beyond the edges.

use glam::IVec2;

use crate::canvas::Canvas;
use crate::color::Color;

/// Blend a filled disk toward `color`.
///
/// # Arguments
/// * `canvas` - The canvas to draw on
/// * `center` - Center pixel
/// * `radius` - Disk radius in pixels; 0 draws a single pixel
/// * `color` - Target color
/// * `opacity` - Blend factor in [0, 1]
pub fn blend_dot(canvas: &mut Canvas, center: IVec2, radius: i32, color: Color, opacity: f32) {
    blend_shape(canvas, center, radius, color, opacity, |dist_sq| {
        dist_sq <= radius * radius
    });
}

/// Blend an annulus of pixels with `inner < distance <= outer` toward `color`.
///
/// # Arguments
/// * `canvas` - The canvas to draw on
/// * `center` - Center pixel
/// * `inner` - Exclusive inner radius
/// * `outer` - Inclusive outer radius
/// * `color` - Target color
/// * `opacity` - Blend factor in [0, 1]
pub fn blend_ring(
    canvas: &mut Canvas,
    center: IVec2,
    inner: i32,
    outer: i32,
    color: Color,
    opacity: f32,
) {
    blend_shape(canvas, center, outer, color, opacity, |dist_sq| {
        dist_sq > inner * inner && dist_sq <= outer * outer
    });
}

/// Add a linearly fading ray of light, starting one step away from `origin`.
///
/// Pixel `i` along the ray (1-based) receives `color` scaled so that a white
/// ray adds `peak * (1 - i / length)` to every channel, with saturation.
pub fn add_ray(
    canvas: &mut Canvas,
    origin: IVec2,
    step: IVec2,
    length: i32,
    color: Color,
    peak: f32,
) {
    if length <= 1 {
        return;
    }

    for i in 1..length {
        let p = origin + step * i;
        if !canvas.contains(p.x, p.y) {
            // Rays are straight, once outside they stay outside
            break;
        }

        let fade = 1.0 - i as f32 / length as f32;
        let light = color.scale(peak * fade / 255.0);
        let (x, y) = (p.x as u32, p.y as u32);
        canvas.set(x, y, canvas.get(x, y).saturating_add(light));
    }
}

/// Blend a single pixel toward `color`, ignoring out-of-bounds coordinates.
#[inline]
pub fn blend_pixel(canvas: &mut Canvas, p: IVec2, color: Color, opacity: f32) {
    if canvas.contains(p.x, p.y) {
        let (x, y) = (p.x as u32, p.y as u32);
        canvas.set(x, y, canvas.get(x, y).lerp(color, opacity));
    }
}

fn blend_shape(
    canvas: &mut Canvas,
    center: IVec2,
    extent: i32,
    color: Color,
    opacity: f32,
    inside: impl Fn(i32) -> bool,
) {
    let extent = extent.max(0);

    // Bounding box clipped to the canvas
    let x_min = (center.x - extent).max(0);
    let x_max = (center.x + extent).min(canvas.width() as i32 - 1);
    let y_min = (center.y - extent).max(0);
    let y_max = (center.y + extent).min(canvas.height() as i32 - 1);

    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let d = IVec2::new(x, y) - center;
            if inside(d.length_squared()) {
                blend_pixel(canvas, IVec2::new(x, y), color, opacity);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(canvas: &Canvas) -> Vec<(u32, u32)> {
        let mut result = Vec::new();
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                if canvas.get(x, y) != Color::BLACK {
                    result.push((x, y));
                }
            }
        }
        result
    }

    #[test]
    fn test_dot_radius_zero_is_single_pixel() {
        let mut canvas = Canvas::new_filled(5, 5, Color::BLACK);
        blend_dot(&mut canvas, IVec2::new(2, 2), 0, Color::WHITE, 1.0);
        assert_eq!(lit(&canvas), vec![(2, 2)]);
        assert_eq!(canvas.get(2, 2), Color::WHITE);
    }

    #[test]
    fn test_dot_radius_one_is_plus() {
        let mut canvas = Canvas::new_filled(5, 5, Color::BLACK);
        blend_dot(&mut canvas, IVec2::new(2, 2), 1, Color::WHITE, 1.0);
        assert_eq!(lit(&canvas), vec![(2, 1), (1, 2), (2, 2), (3, 2), (2, 3)]);
    }

    #[test]
    fn test_dot_blends_with_background() {
        let mut canvas = Canvas::new_filled(3, 3, Color::rgb(100, 0, 200));
        blend_dot(&mut canvas, IVec2::new(1, 1), 0, Color::WHITE, 0.5);
        assert_eq!(canvas.get(1, 1), Color::rgb(178, 128, 228));
    }

    #[test]
    fn test_dot_clipped_at_corner() {
        let mut canvas = Canvas::new_filled(4, 4, Color::BLACK);
        blend_dot(&mut canvas, IVec2::new(0, 0), 2, Color::WHITE, 1.0);
        blend_dot(&mut canvas, IVec2::new(-10, -10), 2, Color::WHITE, 1.0);
        assert_eq!(lit(&canvas), vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (0, 2)]);
    }

    #[test]
    fn test_ring_excludes_inside() {
        let mut canvas = Canvas::new_filled(7, 7, Color::BLACK);
        blend_ring(&mut canvas, IVec2::new(3, 3), 1, 2, Color::WHITE, 1.0);

        let pixels = lit(&canvas);
        assert!(!pixels.contains(&(3, 3)));
        assert!(!pixels.contains(&(4, 3)));
        assert!(pixels.contains(&(4, 4)));
        assert!(pixels.contains(&(5, 3)));
        assert!(!pixels.contains(&(5, 5)));
        assert_eq!(pixels.len(), 8);
    }

    #[test]
    fn test_ray_fades() {
        let mut canvas = Canvas::new_filled(10, 1, Color::BLACK);
        add_ray(
            &mut canvas,
            IVec2::new(0, 0),
            IVec2::new(1, 0),
            5,
            Color::WHITE,
            100.0,
        );

        assert_eq!(canvas.get(0, 0), Color::BLACK);
        assert_eq!(canvas.get(1, 0), Color::gray(80));
        assert_eq!(canvas.get(2, 0), Color::gray(60));
        assert_eq!(canvas.get(4, 0), Color::gray(20));
        assert_eq!(canvas.get(5, 0), Color::BLACK);
    }

    #[test]
    fn test_ray_saturates_and_clips() {
        let mut canvas = Canvas::new_filled(3, 3, Color::gray(250));
        add_ray(
            &mut canvas,
            IVec2::new(1, 1),
            IVec2::new(1, 1),
            20,
            Color::WHITE,
            255.0,
        );
        assert_eq!(canvas.get(2, 2), Color::WHITE);
        assert_eq!(canvas.get(0, 0), Color::gray(250));
    }

    #[test]
    fn test_ray_uses_color() {
        let mut canvas = Canvas::new_filled(4, 1, Color::BLACK);
        add_ray(
            &mut canvas,
            IVec2::new(0, 0),
            IVec2::new(1, 0),
            2,
            Color::rgb(255, 0, 0),
            200.0,
        );
        assert_eq!(canvas.get(1, 0), Color::rgb(100, 0, 0));
    }

    #[test]
    fn test_blend_pixel_out_of_bounds_is_ignored() {
        let mut canvas = Canvas::new_filled(2, 2, Color::BLACK);
        blend_pixel(&mut canvas, IVec2::new(2, 0), Color::WHITE, 1.0);
        blend_pixel(&mut canvas, IVec2::new(0, -1), Color::WHITE, 1.0);
        assert!(lit(&canvas).is_empty());
    }
}
