//! Concatenated gender and level stage (`Herre50`, `Dame35`).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::cascade::{Gender, LevelMatch, SkillLevel, Stage};

static CONCATENATED_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?-u:\b)(herrer?|damer?|kvinder?|mix)(\d+)(?-u:\b)").unwrap()
});

/// Stage for class names that glue the gender word to the level number.
///
/// Only the first such token is considered. The match also carries the
/// gender, since the gender extractor's word-bounded patterns cannot see
/// `Herre` inside `Herre50`.
pub struct ConcatenatedStage {
    _private: (),
}

impl ConcatenatedStage {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for ConcatenatedStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for ConcatenatedStage {
    fn name(&self) -> &'static str {
        "concatenated"
    }

    fn resolve(&self, name: &str) -> Option<LevelMatch> {
        let (gender, level) = extract_concatenated_gender_level(name)?;
        LevelMatch::new(vec![level], self.name()).map(|m| m.with_gender(gender))
    }
}

/// Extract a gender+level token such as `Herre50`.
///
/// Returns `None` when the first token's number is not a published tier;
/// the whole token is then discarded, gender included.
pub fn extract_concatenated_gender_level(name: &str) -> Option<(Gender, SkillLevel)> {
    let caps = CONCATENATED_PATTERN.captures(name)?;
    let word = caps[1].to_lowercase();

    let gender = if word.starts_with("herre") {
        Gender::Herrer
    } else if word.starts_with("dame") || word.starts_with("kvinde") {
        Gender::Damer
    } else {
        Gender::Mix
    };

    let level = SkillLevel::from_number(&caps[2])?;
    Some((gender, level))
}
