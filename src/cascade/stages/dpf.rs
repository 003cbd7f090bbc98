//! Explicit DPF tag stage.

use regex::Regex;
use std::sync::OnceLock;

use super::levels_from_list;
use crate::cascade::{LevelMatch, SkillLevel, Stage};

/// Stage that reads explicit `DPF` tags.
///
/// Handles `DPF50`, `DPF 50`, `dpf50` and multi-level tags written as
/// `DPF100/60`, `DPF 25/35/50` or `DPF100-60`. Every tag in the name
/// contributes, numbers outside the published tier set are dropped.
pub struct DpfTagStage {
    _private: (),
}

impl DpfTagStage {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for DpfTagStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for DpfTagStage {
    fn name(&self) -> &'static str {
        "dpf_tag"
    }

    fn resolve(&self, name: &str) -> Option<LevelMatch> {
        LevelMatch::new(extract_dpf_levels(name), self.name())
    }
}

fn dpf_pattern() -> &'static Regex {
    static DPF: OnceLock<Regex> = OnceLock::new();
    DPF.get_or_init(|| Regex::new(r"(?i)(?-u:\b)DPF\s*(\d+(?:[/-]\d+)*)").unwrap())
}

/// Extract all explicitly tagged DPF levels, in written order.
pub fn extract_dpf_levels(name: &str) -> Vec<SkillLevel> {
    dpf_pattern()
        .captures_iter(name)
        .flat_map(|caps| levels_from_list(&caps[1], &['/', '-']))
        .collect()
}
