//! Star brightness distribution.
//!
//! Brightness is drawn from a bounded power law on `[min, max]` with density
//! proportional to `b^-exponent`. With the defaults (1..10, exponent 2.5) the
//! median star sits around 1.6 and fewer than 1% of stars exceed 9, which is
//! what gives the field its "mostly faint dust, a few beacons" look.

use rand::Rng;

pub const DEFAULT_MIN_BRIGHTNESS: f32 = 1.0;
pub const DEFAULT_MAX_BRIGHTNESS: f32 = 10.0;
pub const DEFAULT_EXPONENT: f32 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessModel {
    pub min: f32,
    pub max: f32,
    pub exponent: f32,
}

impl Default for BrightnessModel {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_BRIGHTNESS,
            max: DEFAULT_MAX_BRIGHTNESS,
            exponent: DEFAULT_EXPONENT,
        }
    }
}

impl BrightnessModel {
    /// Draws one brightness value by inverse-CDF sampling.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.quantile(rng.random::<f32>())
    }

    /// Inverse CDF: maps `u` in [0, 1] to a brightness in [min, max].
    pub fn quantile(&self, u: f32) -> f32 {
        let u = u.clamp(0.0, 1.0);
        let k = 1.0 - self.exponent;

        let b = if k.abs() < 1e-6 {
            // exponent == 1 degenerates to log-uniform
            self.min * (self.max / self.min).powf(u)
        } else {
            let lo = self.min.powf(k);
            let hi = self.max.powf(k);
            (lo + u * (hi - lo)).powf(1.0 / k)
        };

        b.clamp(self.min, self.max)
    }

    /// Star opacity in (0, 1] relative to the brightest possible star.
    pub fn intensity(&self, brightness: f32) -> f32 {
        (brightness / self.max).clamp(0.0, 1.0)
    }
}
