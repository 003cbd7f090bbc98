//! Dash-separated levels in parentheses (`(200-100)`).

use once_cell::sync::Lazy;
use regex::Regex;

use super::levels_from_list;
use crate::cascade::{LevelMatch, SkillLevel, Stage};

static DASH_LEVELS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\((\d+(?:-\d+)+)\)").unwrap());

/// Stage for untagged level ranges such as `Tilmelding, herrer (200-100)`.
pub struct DashRangeStage {
    _private: (),
}

impl DashRangeStage {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for DashRangeStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for DashRangeStage {
    fn name(&self) -> &'static str {
        "dash_range"
    }

    fn resolve(&self, name: &str) -> Option<LevelMatch> {
        LevelMatch::new(extract_dash_levels(name), self.name())
    }
}

/// Extract levels from every parenthesized dash list, in written order.
pub fn extract_dash_levels(name: &str) -> Vec<SkillLevel> {
    DASH_LEVELS_PATTERN
        .captures_iter(name)
        .flat_map(|caps| levels_from_list(&caps[1], &['-']))
        .collect()
}
