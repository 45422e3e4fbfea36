use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::background::resolve_background;
use crate::canvas::Canvas;
use crate::config::GenerationConfig;
use crate::error::Result;
use crate::synthesizer::Synthesizer;

/// Runs the background resolver and the synthesizer for one configuration.
#[derive(Debug, Clone)]
pub struct StarfieldGenerator {
    config: GenerationConfig,
    synthesizer: Synthesizer,
}

impl StarfieldGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        let synthesizer = Synthesizer::new(config.effects());
        Self {
            config,
            synthesizer,
        }
    }

    pub fn with_synthesizer(mut self, synthesizer: Synthesizer) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Seed used by [`generate`](Self::generate): the configured one, or a
    /// fresh random seed.
    pub fn resolve_seed(&self) -> u64 {
        self.config.seed().unwrap_or_else(|| rand::rng().random())
    }

    /// Generates the starfield with a seeded [`StdRng`]. The seed is logged so
    /// any run can be reproduced with `--seed`.
    pub fn generate(&self) -> Result<Canvas> {
        let seed = self.resolve_seed();
        log::info!("Using random seed {}", seed);

        let mut rng = StdRng::seed_from_u64(seed);
        self.generate_with_rng(&mut rng)
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Canvas> {
        let background =
            resolve_background(self.config.size(), self.config.background(), self.config.fit())?;

        Ok(self
            .synthesizer
            .synthesize(background, self.config.density(), rng))
    }
}
