//! Standalone level number stage (`HERRE 100`).

use once_cell::sync::Lazy;
use regex::Regex;

use super::dpf::extract_dpf_levels;
use crate::cascade::{LevelMatch, SkillLevel, Stage};

static STANDALONE_LEVEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u:\b)(10|25|35|50|60|100|200|500|1000|2000)(?-u:\b)").unwrap()
});

/// Stage for a bare tier number with no `DPF` prefix.
///
/// This is the last resort of the cascade, so it is deliberately strict:
/// it only answers when exactly one tier number appears anywhere in the
/// name, and never when an explicit DPF tag already yields levels.
/// Names with several numbers are usually dates or times.
pub struct StandaloneStage {
    _private: (),
}

impl StandaloneStage {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for StandaloneStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for StandaloneStage {
    fn name(&self) -> &'static str {
        "standalone"
    }

    fn resolve(&self, name: &str) -> Option<LevelMatch> {
        LevelMatch::new(extract_standalone_levels(name), self.name())
    }
}

/// Extract the single standalone tier number, if there is exactly one.
pub fn extract_standalone_levels(name: &str) -> Vec<SkillLevel> {
    if !extract_dpf_levels(name).is_empty() {
        return Vec::new();
    }

    let levels: Vec<SkillLevel> = STANDALONE_LEVEL_PATTERN
        .captures_iter(name)
        .filter_map(|caps| SkillLevel::from_number(&caps[1]))
        .collect();

    if levels.len() == 1 {
        levels
    } else {
        Vec::new()
    }
}
