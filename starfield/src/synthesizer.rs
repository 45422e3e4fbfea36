//! Star field synthesis: picks star positions and brightness and composites
//! them onto a background canvas.
//!
//! Placement uses an exact-count policy. `round(density * width * height)`
//! distinct pixels are sampled uniformly without replacement, so a density of
//! 1.0 lights every pixel and two stars never share a center.
//!
//! Compositing only ever moves a pixel toward the star color (white by
//! default), so dim stars let the background show through and no pixel is
//! darker than the background it started from.

use glam::{IVec2, UVec2};
use rand::seq::index;
use rand::Rng;

use crate::brightness::BrightnessModel;
use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::StarEffects;
use crate::drawing::{add_ray, blend_dot, blend_ring};

/// Stars dimmer than this are a single pixel.
pub const DISK_THRESHOLD: f32 = 3.0;
/// Stars at least this bright get a radius of `brightness / LARGE_RADIUS_DIVISOR`.
pub const LARGE_THRESHOLD: f32 = 6.0;
pub const LARGE_RADIUS_DIVISOR: f32 = 5.0;
/// Stars brighter than this get a glow ring at half intensity.
pub const GLOW_THRESHOLD: f32 = 8.0;
/// Stars brighter than this get axis-aligned diffraction spikes.
pub const SPIKE_THRESHOLD: f32 = 9.0;
/// Stars brighter than this also get diagonal spikes.
pub const DIAGONAL_SPIKE_THRESHOLD: f32 = 9.5;
/// Spike length is `SPIKE_BASE_LENGTH + (brightness - SPIKE_THRESHOLD) * SPIKE_LENGTH_SCALE`.
pub const SPIKE_BASE_LENGTH: f32 = 8.0;
pub const SPIKE_LENGTH_SCALE: f32 = 12.0;

const AXIS_STEPS: [IVec2; 4] = [
    IVec2::new(1, 0),
    IVec2::new(-1, 0),
    IVec2::new(0, 1),
    IVec2::new(0, -1),
];
const DIAGONAL_STEPS: [IVec2; 4] = [
    IVec2::new(1, 1),
    IVec2::new(-1, 1),
    IVec2::new(1, -1),
    IVec2::new(-1, -1),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: UVec2,
    pub brightness: f32,
}

impl Star {
    /// Disk radius in pixels; 0 is a single pixel.
    pub fn radius(&self) -> i32 {
        if self.brightness < DISK_THRESHOLD {
            0
        } else if self.brightness < LARGE_THRESHOLD {
            1
        } else {
            ((self.brightness / LARGE_RADIUS_DIVISOR) as i32).max(1)
        }
    }

    fn center(&self) -> IVec2 {
        self.pos.as_ivec2()
    }
}

/// Number of stars for `density` over `pixel_count` pixels.
pub fn star_count(density: f64, pixel_count: usize) -> usize {
    let density = density.clamp(0.0, 1.0);
    ((density * pixel_count as f64).round() as usize).min(pixel_count)
}

/// Samples star positions without replacement and draws a brightness for each.
pub fn place_stars<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    density: f64,
    model: &BrightnessModel,
    rng: &mut R,
) -> Vec<Star> {
    let pixel_count = width as usize * height as usize;
    let count = star_count(density, pixel_count);
    if count == 0 {
        return Vec::new();
    }

    let positions = index::sample(rng, pixel_count, count);

    positions
        .into_iter()
        .map(|idx| {
            let pos = UVec2::new((idx % width as usize) as u32, (idx / width as usize) as u32);
            Star {
                pos,
                brightness: model.sample(rng),
            }
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct Synthesizer {
    pub brightness: BrightnessModel,
    pub effects: StarEffects,
    pub star_color: Color,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self {
            brightness: BrightnessModel::default(),
            effects: StarEffects::default(),
            star_color: Color::WHITE,
        }
    }
}

impl Synthesizer {
    pub fn new(effects: StarEffects) -> Self {
        Self {
            effects,
            ..Default::default()
        }
    }

    /// Composites a random star field with the given density onto `canvas`.
    pub fn synthesize<R: Rng + ?Sized>(
        &self,
        mut canvas: Canvas,
        density: f64,
        rng: &mut R,
    ) -> Canvas {
        let stars = place_stars(
            canvas.width(),
            canvas.height(),
            density,
            &self.brightness,
            rng,
        );
        if stars.is_empty() {
            log::debug!("No stars to place at density {}", density);
            return canvas;
        }

        log::debug!(
            "Placing {} stars on {}x{} canvas",
            stars.len(),
            canvas.width(),
            canvas.height()
        );

        self.render(&mut canvas, &stars);
        canvas
    }

    /// Draws `stars` onto `canvas`. Spikes are added after all disks so they
    /// brighten whatever lies under them.
    pub fn render(&self, canvas: &mut Canvas, stars: &[Star]) {
        for star in stars {
            self.draw_star(canvas, star);
        }

        if self.effects.spikes {
            let mut spiked = 0;
            for star in stars.iter().filter(|s| s.brightness > SPIKE_THRESHOLD) {
                self.draw_spikes(canvas, star);
                spiked += 1;
            }
            log::debug!("Drew diffraction spikes for {} stars", spiked);
        }
    }

    fn draw_star(&self, canvas: &mut Canvas, star: &Star) {
        let intensity = self.brightness.intensity(star.brightness);
        let radius = star.radius();

        blend_dot(canvas, star.center(), radius, self.star_color, intensity);

        if self.effects.glow && star.brightness > GLOW_THRESHOLD {
            blend_ring(
                canvas,
                star.center(),
                radius,
                radius + 1,
                self.star_color,
                intensity / 2.0,
            );
        }
    }

    fn draw_spikes(&self, canvas: &mut Canvas, star: &Star) {
        let excess = star.brightness - SPIKE_THRESHOLD;
        let peak = self.brightness.intensity(star.brightness) * 255.0 * excess;
        let length = (SPIKE_BASE_LENGTH + excess * SPIKE_LENGTH_SCALE) as i32;

        for step in AXIS_STEPS {
            add_ray(canvas, star.center(), step, length, self.star_color, peak);
        }

        if star.brightness > DIAGONAL_SPIKE_THRESHOLD {
            for step in DIAGONAL_STEPS {
                add_ray(
                    canvas,
                    star.center(),
                    step,
                    length / 2,
                    self.star_color,
                    peak * 0.5,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn star(x: u32, y: u32, brightness: f32) -> Star {
        Star {
            pos: UVec2::new(x, y),
            brightness,
        }
    }

    fn lit_count(canvas: &Canvas) -> usize {
        canvas.pixels().filter(|&p| p != Color::BLACK).count()
    }

    #[test]
    fn test_star_count() {
        assert_eq!(star_count(0.0, 10_000), 0);
        assert_eq!(star_count(1.0, 10_000), 10_000);
        assert_eq!(star_count(0.05, 100), 5);
        assert_eq!(star_count(0.25, 10), 3);
        assert_eq!(star_count(0.05, 1920 * 1080), 103_680);
    }

    #[test]
    fn test_place_stars_exact_and_distinct() {
        let mut rng = StdRng::seed_from_u64(1);
        let stars = place_stars(64, 48, 0.1, &BrightnessModel::default(), &mut rng);

        assert_eq!(stars.len(), star_count(0.1, 64 * 48));
        let unique: HashSet<(u32, u32)> = stars.iter().map(|s| (s.pos.x, s.pos.y)).collect();
        assert_eq!(unique.len(), stars.len());
        assert!(stars.iter().all(|s| s.pos.x < 64 && s.pos.y < 48));
        assert!(stars.iter().all(|s| (1.0..=10.0).contains(&s.brightness)));
    }

    #[test]
    fn test_place_stars_full_density_covers_every_pixel() {
        let mut rng = StdRng::seed_from_u64(2);
        let stars = place_stars(13, 7, 1.0, &BrightnessModel::default(), &mut rng);
        let unique: HashSet<(u32, u32)> = stars.iter().map(|s| (s.pos.x, s.pos.y)).collect();
        assert_eq!(unique.len(), 13 * 7);
    }

    #[test]
    fn test_star_radius() {
        assert_eq!(star(0, 0, 1.0).radius(), 0);
        assert_eq!(star(0, 0, 2.99).radius(), 0);
        assert_eq!(star(0, 0, 3.0).radius(), 1);
        assert_eq!(star(0, 0, 5.9).radius(), 1);
        assert_eq!(star(0, 0, 7.0).radius(), 1);
        assert_eq!(star(0, 0, 10.0).radius(), 2);
    }

    #[test]
    fn test_zero_density_returns_background() {
        let background = Canvas::new_filled(20, 10, Color::rgb(5, 10, 15));
        let mut rng = StdRng::seed_from_u64(3);
        let result = Synthesizer::default().synthesize(background.clone(), 0.0, &mut rng);
        assert_eq!(result, background);
    }

    #[test]
    fn test_full_density_touches_every_pixel() {
        let background = Canvas::new_filled(16, 16, Color::rgb(20, 40, 60));
        let mut rng = StdRng::seed_from_u64(4);
        let result = Synthesizer::default().synthesize(background.clone(), 1.0, &mut rng);

        for (before, after) in background.pixels().zip(result.pixels()) {
            assert_ne!(before, after);
        }
    }

    #[test]
    fn test_full_density_changes_near_white_background() {
        let background = Canvas::new_filled(10, 10, Color::from_hex("#fcfcfc").unwrap());
        let mut rng = StdRng::seed_from_u64(1);
        let result = Synthesizer::default().synthesize(background.clone(), 1.0, &mut rng);

        for (before, after) in background.pixels().zip(result.pixels()) {
            assert_ne!(before, after);
            assert!(after.r > before.r);
        }
    }

    #[test]
    fn test_never_darkens() {
        let background = Canvas::new_filled(50, 40, Color::rgb(30, 200, 90));
        let mut rng = StdRng::seed_from_u64(5);
        let result = Synthesizer::default().synthesize(background.clone(), 0.2, &mut rng);

        for (before, after) in background.pixels().zip(result.pixels()) {
            assert!(after.r >= before.r && after.g >= before.g && after.b >= before.b);
        }
    }

    #[test]
    fn test_same_seed_same_canvas() {
        let synthesizer = Synthesizer::default();
        let background = Canvas::new_filled(80, 60, Color::BLACK);

        let a = synthesizer.synthesize(background.clone(), 0.1, &mut StdRng::seed_from_u64(9));
        let b = synthesizer.synthesize(background.clone(), 0.1, &mut StdRng::seed_from_u64(9));
        let c = synthesizer.synthesize(background, 0.1, &mut StdRng::seed_from_u64(10));

        assert_eq!(a.bytes(), b.bytes());
        assert_ne!(a.bytes(), c.bytes());
    }

    #[test]
    fn test_dim_star_is_single_blended_pixel() {
        let mut canvas = Canvas::new_filled(5, 5, Color::BLACK);
        Synthesizer::default().render(&mut canvas, &[star(2, 2, 2.0)]);

        assert_eq!(lit_count(&canvas), 1);
        assert_eq!(canvas.get(2, 2), Color::gray(51));
    }

    #[test]
    fn test_medium_star_is_plus() {
        let mut canvas = Canvas::new_filled(5, 5, Color::BLACK);
        Synthesizer::default().render(&mut canvas, &[star(2, 2, 4.0)]);

        assert_eq!(lit_count(&canvas), 5);
        assert_eq!(canvas.get(1, 2), Color::gray(102));
        assert_eq!(canvas.get(1, 1), Color::BLACK);
    }

    #[test]
    fn test_glow_ring() {
        let mut with_glow = Canvas::new_filled(9, 9, Color::BLACK);
        let mut without_glow = with_glow.clone();
        let bright = [star(4, 4, 8.5)];

        Synthesizer::default().render(&mut with_glow, &bright);
        Synthesizer::new(StarEffects::NONE).render(&mut without_glow, &bright);

        // radius 1 disk plus ring of 8 pixels at distance (1, 2]
        assert_eq!(lit_count(&without_glow), 5);
        assert_eq!(lit_count(&with_glow), 13);
        assert_eq!(with_glow.get(5, 5), Color::gray(108));
        assert_eq!(with_glow.get(4, 4), without_glow.get(4, 4));
    }

    #[test]
    fn test_spikes_only_for_brightest() {
        let mut canvas = Canvas::new_filled(41, 41, Color::BLACK);
        let effects = StarEffects {
            glow: false,
            spikes: true,
        };
        Synthesizer::new(effects).render(&mut canvas, &[star(20, 20, 9.8)]);

        // length = floor(8 + 0.8 * 12) = 17 along the axes, 8 along the diagonals
        assert_ne!(canvas.get(20 + 16, 20), Color::BLACK);
        assert_eq!(canvas.get(20 + 17, 20), Color::BLACK);
        assert_ne!(canvas.get(20, 20 - 10), Color::BLACK);
        assert_ne!(canvas.get(20 - 7, 20 - 7), Color::BLACK);
        assert_eq!(canvas.get(20 - 8, 20 - 8), Color::BLACK);
        assert_eq!(canvas.get(20 + 5, 20 + 3), Color::BLACK);

        let mut plain = Canvas::new_filled(41, 41, Color::BLACK);
        Synthesizer::new(effects).render(&mut plain, &[star(20, 20, 8.9)]);
        assert_eq!(lit_count(&plain), 5);
    }

    #[test]
    fn test_axis_only_spikes_below_diagonal_threshold() {
        let mut canvas = Canvas::new_filled(41, 41, Color::BLACK);
        let effects = StarEffects {
            glow: false,
            spikes: true,
        };
        Synthesizer::new(effects).render(&mut canvas, &[star(20, 20, 9.3)]);

        assert_ne!(canvas.get(20 + 5, 20), Color::BLACK);
        assert_eq!(canvas.get(20 + 3, 20 + 3), Color::BLACK);
    }

    #[test]
    fn test_spikes_clipped_at_edges() {
        let mut canvas = Canvas::new_filled(4, 4, Color::BLACK);
        Synthesizer::default().render(&mut canvas, &[star(0, 0, 10.0), star(3, 3, 9.9)]);
        assert_eq!(canvas.pixel_count(), 16);
        assert!(lit_count(&canvas) > 0);
    }
}
