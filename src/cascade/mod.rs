//! Level resolution cascade.
//!
//! The cascade runs a series of stages in order, returning as soon as any
//! stage finds at least one valid skill level. The stage order is the
//! priority contract, so it lives in one visible list rather than in a
//! chain of early returns.
//!
//! # Example
//!
//! ```
//! use padel_series::cascade::{Cascade, Gender, SkillLevel};
//!
//! let cascade = Cascade::default();
//!
//! let resolution = cascade.resolve("Herre50 FTM");
//! assert_eq!(resolution.levels, vec![SkillLevel::Dpf50]);
//! assert_eq!(resolution.gender, Some(Gender::Herrer));
//! assert_eq!(resolution.source, Some("concatenated"));
//! ```

mod stage;
pub mod stages;
mod types;

#[cfg(test)]
mod samples_test;

pub use stage::Stage;
pub use stages::{ConcatenatedStage, DashRangeStage, DpfTagStage, StandaloneStage};
pub use types::{Gender, LevelMatch, LevelResolution, SkillLevel, YouthAge};

use once_cell::sync::Lazy;

static DEFAULT_CASCADE: Lazy<Cascade> = Lazy::new(Cascade::default);

/// A cascade of level resolution stages run in order until one succeeds.
pub struct Cascade {
    stages: Vec<Box<dyn Stage>>,
}

impl Cascade {
    /// Create an empty cascade (no stages).
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Create a cascade with the given stages.
    pub fn with_stages(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Add a stage to the end of the cascade.
    pub fn add_stage<S: Stage + 'static>(&mut self, stage: S) {
        self.stages.push(Box::new(stage));
    }

    /// Resolve skill levels by running stages in order.
    ///
    /// Returns the first stage's levels, or an empty resolution when no
    /// stage matched.
    pub fn resolve(&self, name: &str) -> LevelResolution {
        for stage in &self.stages {
            if let Some(found) = stage.resolve(name) {
                log::debug!(
                    "{:?}: {} resolved {:?}",
                    name,
                    stage.name(),
                    found.levels
                );
                return found.into();
            }
        }

        LevelResolution::default()
    }

    /// Get the number of stages in the cascade.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Names of the stages, in the order they run.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl Default for Cascade {
    /// Stages: DpfTagStage → ConcatenatedStage → DashRangeStage → StandaloneStage
    fn default() -> Self {
        let mut cascade = Self::new();
        cascade.add_stage(DpfTagStage::new());
        cascade.add_stage(ConcatenatedStage::new());
        cascade.add_stage(DashRangeStage::new());
        cascade.add_stage(StandaloneStage::new());
        cascade
    }
}

/// Resolve levels with the shared default cascade.
pub fn resolve_levels(name: &str) -> LevelResolution {
    DEFAULT_CASCADE.resolve(name)
}

/// First explicit DPF level, falling back to a lone standalone number.
pub fn extract_dpf_level(name: &str) -> Option<SkillLevel> {
    stages::extract_dpf_levels(name)
        .into_iter()
        .chain(stages::extract_standalone_levels(name))
        .next()
}
