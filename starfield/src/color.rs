//! Opaque 8-bit RGB color used for backgrounds and star compositing.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// RGB color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Gray color with all channels set to `value`.
    pub const fn gray(value: u8) -> Self {
        Self::rgb(value, value, value)
    }

    /// Parse `#RRGGBB`, `#RGB`, or the same without the leading `#`.
    pub fn from_hex(s: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(s.to_string());

        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());

        match hex.len() {
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            // #abc is shorthand for #aabbcc
            3 => Ok(Self::rgb(
                channel(&hex[0..1])? * 0x11,
                channel(&hex[1..2])? * 0x11,
                channel(&hex[2..3])? * 0x11,
            )),
            _ => Err(invalid()),
        }
    }

    /// Returns true if `s` is a hex color without the `#` marker.
    pub(crate) fn is_bare_hex(s: &str) -> bool {
        matches!(s.len(), 3 | 6) && s.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Linear blend from `self` toward `other`; `t` is clamped to [0, 1].
    ///
    /// For any `t > 0` a channel that differs from its target moves by at
    /// least one step, so a faint blend is never rounded away.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| {
            let mixed = (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            if mixed != a || t == 0.0 {
                mixed
            } else if b > a {
                a + 1
            } else if b < a {
                a - 1
            } else {
                a
            }
        };
        Color::rgb(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Channel-wise addition, saturating at 255.
    pub fn saturating_add(self, other: Color) -> Color {
        Color::rgb(
            self.r.saturating_add(other.r),
            self.g.saturating_add(other.g),
            self.b.saturating_add(other.b),
        )
    }

    /// Every channel multiplied by `factor`, rounded and clamped to [0, 255].
    pub fn scale(self, factor: f32) -> Color {
        let mul = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
        Color::rgb(mul(self.r), mul(self.g), mul(self.b))
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Color {
    fn from(arr: [u8; 3]) -> Self {
        Self::rgb(arr[0], arr[1], arr[2])
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}
