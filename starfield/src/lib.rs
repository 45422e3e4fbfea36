pub mod background;
pub mod brightness;
pub mod canvas;
pub mod color;
pub mod config;
pub mod drawing;
pub mod encoder;
pub mod error;
pub mod generator;
pub mod synthesizer;

pub mod prelude;

pub use prelude::*;
