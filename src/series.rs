//! Series synthesis and ordering.
//!
//! A series is a normalized competitive division: a category (gender plus
//! optional youth age) and an optional DPF ranking. One raw class name can
//! map to several series when it lists several levels.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cascade::{self, Gender, SkillLevel};
use crate::extract::{extract_gender, extract_youth_age, is_waiting_list};

/// A normalized competitive division.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// `"<category> <ranking>"`, or the bare category for youth classes
    /// without a level. Unique within an event and within the corpus.
    pub name: String,
    pub ranking: Option<SkillLevel>,
    pub category: String,
    /// Players signed up, summed over every class that maps here.
    #[serde(default)]
    pub player_count: Option<i64>,
}

impl Series {
    /// Create a ranked series for a category.
    pub fn ranked(category: &str, level: SkillLevel) -> Self {
        Self {
            name: format!("{} {}", category, level),
            ranking: Some(level),
            category: category.to_string(),
            player_count: None,
        }
    }

    /// Create an unranked series (youth division without a level).
    pub fn unranked(category: &str) -> Self {
        Self {
            name: category.to_string(),
            ranking: None,
            category: category.to_string(),
            player_count: None,
        }
    }

    /// Attach a player count.
    pub fn with_player_count(mut self, player_count: Option<i64>) -> Self {
        self.player_count = player_count;
        self
    }

    /// Fold another series with the same name into this one.
    ///
    /// Only the player count changes: both present are summed (saturating),
    /// a missing count never turns a known one into `None`.
    pub fn absorb(&mut self, other: &Series) {
        self.player_count = match (self.player_count, other.player_count) {
            (Some(a), Some(b)) => Some(a.saturating_add(b)),
            (a, b) => a.or(b),
        };
    }
}

/// Result of normalizing a single class name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedName {
    pub is_waiting_list: bool,
    pub series: Vec<Series>,
}

/// Classify a raw class name into zero or more series.
///
/// Total over all strings: names that cannot be classified produce an
/// empty series list rather than an error.
pub fn normalize_class_name(name: &str) -> NormalizedName {
    if is_waiting_list(name) {
        return NormalizedName {
            is_waiting_list: true,
            series: Vec::new(),
        };
    }

    let youth_age = extract_youth_age(name);
    let resolution = cascade::resolve_levels(name);

    let mut gender = extract_gender(name).or(resolution.gender);
    // A level without any gender word is taken to be the men's division.
    if gender.is_none() && !resolution.levels.is_empty() {
        gender = Some(Gender::Herrer);
    }

    let Some(gender) = gender else {
        log::trace!("{:?}: no gender or level", name);
        return NormalizedName::default();
    };

    let category = match youth_age {
        Some(age) => format!("{} {}", gender, age),
        None => gender.to_string(),
    };

    let series = if !resolution.levels.is_empty() {
        resolution
            .levels
            .iter()
            .map(|level| Series::ranked(&category, *level))
            .collect()
    } else if youth_age.is_some() {
        vec![Series::unranked(&category)]
    } else {
        Vec::new()
    };

    NormalizedName {
        is_waiting_list: false,
        series,
    }
}

/// Sort series by category (Danish collation), then by ranking value.
///
/// Stable; series without a ranking sort before ranked ones of the same
/// category.
pub fn sort_series(mut series: Vec<Series>) -> Vec<Series> {
    series.sort_by(compare_series);
    series
}

fn compare_series(a: &Series, b: &Series) -> Ordering {
    danish_cmp(&a.category, &b.category).then_with(|| ranking_value(a).cmp(&ranking_value(b)))
}

fn ranking_value(series: &Series) -> u32 {
    series.ranking.map(|r| r.value()).unwrap_or(0)
}

/// Primary collation weight of a character.
///
/// Separators sort before digits, digits before letters, and the Danish
/// letters `æ ø å` come after `z`.
fn primary_weight(c: char) -> u32 {
    let lower = c.to_lowercase().next().unwrap_or(c);
    match lower {
        c if c.is_whitespace() => 0,
        '0'..='9' => 10 + (lower as u32 - '0' as u32),
        'a'..='z' => 100 + (lower as u32 - 'a' as u32),
        'æ' | 'ä' => 126,
        'ø' | 'ö' => 127,
        'å' => 128,
        c if !c.is_alphanumeric() => 1,
        c => 1000 + c as u32,
    }
}

/// Compare two strings the way a Danish reader orders them.
///
/// Letters compare case-insensitively first; when two strings are equal
/// apart from case, uppercase sorts first.
pub fn danish_cmp(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary_weight)
        .cmp(b.chars().map(primary_weight))
        .then_with(|| {
            a.chars()
                .map(|c| !c.is_uppercase())
                .cmp(b.chars().map(|c| !c.is_uppercase()))
        })
        .then_with(|| a.cmp(b))
}
