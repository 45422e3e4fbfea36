use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::background::{BackgroundSpec, FitMode};
use crate::color::Color;
use crate::error::ConfigError;

pub const DEFAULT_SIZE: Size = Size {
    width: 1920,
    height: 1080,
};
pub const DEFAULT_DENSITY: f64 = 0.05;
pub const DEFAULT_OUTPUT: &str = "starfield.png";

/// Canvas dimensions in pixels; both are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    width: u32,
    height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidSize(format!("{width}x{height}")));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl FromStr for Size {
    type Err = ConfigError;

    /// Accepts `WIDTHxHEIGHT` or `WIDTH:HEIGHT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidSize(s.to_string());

        let (w, h) = s.trim().split_once(['x', 'X', ':']).ok_or_else(invalid)?;

        let parse = |v: &str| {
            if v.is_empty() || !v.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            v.parse::<u32>().map_err(|_| invalid())
        };

        Size::new(parse(w)?, parse(h)?).map_err(|_| invalid())
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Optional decorations applied to bright stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarEffects {
    /// Faint ring around the brightest stars.
    pub glow: bool,
    /// Diffraction spikes on the very brightest stars.
    pub spikes: bool,
}

impl Default for StarEffects {
    fn default() -> Self {
        Self {
            glow: true,
            spikes: true,
        }
    }
}

impl StarEffects {
    pub const NONE: StarEffects = StarEffects {
        glow: false,
        spikes: false,
    };
}

/// Validated parameters of one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    size: Size,
    density: f64,
    background: BackgroundSpec,
    output: PathBuf,
    seed: Option<u64>,
    fit: FitMode,
    effects: StarEffects,
}

impl GenerationConfig {
    pub fn new(
        size: Size,
        density: f64,
        background: BackgroundSpec,
        output: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        // NaN fails this check too
        if !(0.0..=1.0).contains(&density) {
            return Err(ConfigError::InvalidDensity(density));
        }

        Ok(Self {
            size,
            density,
            background,
            output: output.into(),
            seed: None,
            fit: FitMode::default(),
            effects: StarEffects::default(),
        })
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_fit(mut self, fit: FitMode) -> Self {
        self.fit = fit;
        self
    }

    pub fn with_effects(mut self, effects: StarEffects) -> Self {
        self.effects = effects;
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn background(&self) -> &BackgroundSpec {
        &self.background
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn fit(&self) -> FitMode {
        self.fit
    }

    pub fn effects(&self) -> StarEffects {
        self.effects
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            density: DEFAULT_DENSITY,
            background: BackgroundSpec::Color(Color::BLACK),
            output: PathBuf::from(DEFAULT_OUTPUT),
            seed: None,
            fit: FitMode::default(),
            effects: StarEffects::default(),
        }
    }
}
