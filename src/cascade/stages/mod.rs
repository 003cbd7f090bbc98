//! Built-in level resolution stages.
//!
//! This module contains the default stages used by the cascade, listed in
//! the order [`Cascade::default`](super::Cascade::default) runs them:
//!
//! - `DpfTagStage`: Explicit `DPF` tags, including `100/60` and `100-60` lists
//! - `ConcatenatedStage`: Gender glued to a level (`Herre50`, `Dame35`)
//! - `DashRangeStage`: Dash-separated levels in parentheses (`(200-100)`)
//! - `StandaloneStage`: A single bare level number (`HERRE 100`)

mod concatenated;
mod dash;
mod dpf;
mod standalone;

pub use concatenated::{extract_concatenated_gender_level, ConcatenatedStage};
pub use dash::{extract_dash_levels, DashRangeStage};
pub use dpf::{extract_dpf_levels, DpfTagStage};
pub use standalone::{extract_standalone_levels, StandaloneStage};

use crate::cascade::SkillLevel;

/// Split a matched number list on the given separators, keeping only the
/// numbers that are published tiers, in written order.
fn levels_from_list(list: &str, separators: &[char]) -> Vec<SkillLevel> {
    list.split(separators)
        .filter_map(SkillLevel::from_number)
        .collect()
}
