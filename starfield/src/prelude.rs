// Configuration
pub use crate::background::{BackgroundSpec, FitMode};
pub use crate::config::{GenerationConfig, Size, StarEffects};

// Error handling
pub use crate::error::{ConfigError, Error, Result};

// Pixels
pub use crate::canvas::Canvas;
pub use crate::color::Color;

// Generation
pub use crate::brightness::BrightnessModel;
pub use crate::generator::StarfieldGenerator;
pub use crate::synthesizer::{Star, Synthesizer};
