//! Core types for the level resolution cascade.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Gender (or youth gender) division of a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Herrer,
    Damer,
    Mix,
    Drenge,
    Piger,
}

impl Gender {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Herrer => "Herrer",
            Gender::Damer => "Damer",
            Gender::Mix => "Mix",
            Gender::Drenge => "Drenge",
            Gender::Piger => "Piger",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Youth age bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YouthAge {
    U12,
    U14,
    U16,
    U18,
}

impl YouthAge {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            YouthAge::U12 => "U12",
            YouthAge::U14 => "U14",
            YouthAge::U16 => "U16",
            YouthAge::U18 => "U18",
        }
    }

    /// Parse the bare age number ("12", "14", ...).
    pub fn from_number(s: &str) -> Option<Self> {
        match s {
            "12" => Some(YouthAge::U12),
            "14" => Some(YouthAge::U14),
            "16" => Some(YouthAge::U16),
            "18" => Some(YouthAge::U18),
            _ => None,
        }
    }
}

impl fmt::Display for YouthAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// DPF skill ranking tier.
///
/// Only the fixed set of published tiers is representable, so any number
/// parsed out of a class name has to pass through [`SkillLevel::from_number`]
/// before it can become a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SkillLevel {
    Dpf10,
    Dpf25,
    Dpf35,
    Dpf50,
    Dpf60,
    Dpf100,
    Dpf200,
    Dpf500,
    Dpf1000,
    Dpf2000,
}

impl SkillLevel {
    /// All tiers, lowest first.
    pub const ALL: [SkillLevel; 10] = [
        SkillLevel::Dpf10,
        SkillLevel::Dpf25,
        SkillLevel::Dpf35,
        SkillLevel::Dpf50,
        SkillLevel::Dpf60,
        SkillLevel::Dpf100,
        SkillLevel::Dpf200,
        SkillLevel::Dpf500,
        SkillLevel::Dpf1000,
        SkillLevel::Dpf2000,
    ];

    /// Numeric value of the tier.
    pub fn value(&self) -> u32 {
        match self {
            SkillLevel::Dpf10 => 10,
            SkillLevel::Dpf25 => 25,
            SkillLevel::Dpf35 => 35,
            SkillLevel::Dpf50 => 50,
            SkillLevel::Dpf60 => 60,
            SkillLevel::Dpf100 => 100,
            SkillLevel::Dpf200 => 200,
            SkillLevel::Dpf500 => 500,
            SkillLevel::Dpf1000 => 1000,
            SkillLevel::Dpf2000 => 2000,
        }
    }

    /// Get the string representation (`DPF50`).
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Dpf10 => "DPF10",
            SkillLevel::Dpf25 => "DPF25",
            SkillLevel::Dpf35 => "DPF35",
            SkillLevel::Dpf50 => "DPF50",
            SkillLevel::Dpf60 => "DPF60",
            SkillLevel::Dpf100 => "DPF100",
            SkillLevel::Dpf200 => "DPF200",
            SkillLevel::Dpf500 => "DPF500",
            SkillLevel::Dpf1000 => "DPF1000",
            SkillLevel::Dpf2000 => "DPF2000",
        }
    }

    /// Parse a number exactly as written ("50"). Leading zeros or any
    /// value outside the published set yield `None`.
    pub fn from_number(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str()[3..] == *s)
    }

    /// Parse from the rendered form (`DPF50`, case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        let upper = s.trim().to_uppercase();
        Self::from_number(upper.strip_prefix("DPF")?)
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for SkillLevel {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        SkillLevel::from_str(&s).ok_or_else(|| format!("unknown DPF level: {}", s))
    }
}

impl From<SkillLevel> for String {
    fn from(level: SkillLevel) -> Self {
        level.as_str().to_string()
    }
}

/// Levels found by a single cascade stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelMatch {
    /// Levels in the order they were written in the class name.
    pub levels: Vec<SkillLevel>,
    /// Gender inferred by the stage itself (concatenated forms like `Herre50`).
    pub gender: Option<Gender>,
    /// Name of the stage that produced this match.
    pub source: &'static str,
}

impl LevelMatch {
    /// Create a match without an inferred gender.
    ///
    /// Returns `None` for an empty level list, so stages can hand the
    /// name on to the next stage with a plain `?`/return.
    pub fn new(levels: Vec<SkillLevel>, source: &'static str) -> Option<Self> {
        if levels.is_empty() {
            return None;
        }
        Some(Self {
            levels,
            gender: None,
            source,
        })
    }

    /// Attach the gender inferred alongside the levels.
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }
}

/// Outcome of running the whole cascade over a class name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelResolution {
    /// Gender inferred by the winning stage, if any.
    pub gender: Option<Gender>,
    /// Resolved levels in written order; empty when no stage matched.
    pub levels: Vec<SkillLevel>,
    /// Winning stage, `None` when nothing matched.
    pub source: Option<&'static str>,
}

impl From<LevelMatch> for LevelResolution {
    fn from(m: LevelMatch) -> Self {
        Self {
            gender: m.gender,
            levels: m.levels,
            source: Some(m.source),
        }
    }
}
