//! Stage trait for the level resolution cascade.

use super::LevelMatch;

/// A single stage in the level resolution cascade.
///
/// Each stage examines the raw class name and either:
/// - Returns `Some(match)` when it finds at least one valid level
/// - Returns `None` to pass to the next stage
///
/// # Implementation Notes
///
/// - Stages are stateless: every call builds fresh match iterators
/// - A stage never returns `Some` with an empty level list
/// - Use the `source` field in `LevelMatch` to identify your stage
pub trait Stage: Send + Sync {
    /// The name of this stage (for debugging/logging).
    fn name(&self) -> &'static str;

    /// Try to resolve skill levels from the class name.
    fn resolve(&self, name: &str) -> Option<LevelMatch>;
}
