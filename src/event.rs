//! Per-class and per-event normalization, plus corpus-wide collection.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::series::{normalize_class_name, sort_series, Series};

/// A raw sign-up class as published by the event platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassInput {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub player_count: Option<i64>,
}

impl ClassInput {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            player_count: None,
        }
    }

    pub fn with_player_count(mut self, player_count: i64) -> Self {
        self.player_count = Some(player_count);
        self
    }
}

/// A class kept in the event output (waiting lists are dropped).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedClass {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_count: Option<i64>,
}

impl From<&ClassInput> for NormalizedClass {
    fn from(class: &ClassInput) -> Self {
        Self {
            id: class.id,
            name: class.name.clone(),
            player_count: class.player_count,
        }
    }
}

/// Outcome of normalizing one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassOutcome {
    /// `None` for waiting-list entries, which are dropped entirely.
    pub class: Option<NormalizedClass>,
    /// Series carrying the class's player count.
    pub series: Vec<Series>,
    /// No series could be derived from a non-waiting-list class.
    pub is_unknown: bool,
}

/// An event record as delivered by the fetch layer.
///
/// Only `classes` is interpreted; every other property is carried through
/// normalization untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, deserialize_with = "lenient_classes")]
    pub classes: Vec<ClassInput>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    pub fn new(classes: Vec<ClassInput>) -> Self {
        Self {
            classes,
            extra: Map::new(),
        }
    }

    /// Set an extra property carried through normalization.
    pub fn with_property(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }
}

/// An event augmented with its classification result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedEvent {
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(default)]
    pub classes: Vec<NormalizedClass>,
    /// Deduplicated by name, sorted by category then ranking.
    #[serde(default)]
    pub series: Vec<Series>,
    /// Names of the classes that produced no series, in input order.
    #[serde(default)]
    pub unknown_series: Vec<String>,
}

/// Result shape of classifying one event.
pub type EventClassificationResult = NormalizedEvent;

// Missing, null or non-array `classes` all mean "no classes"; entries that
// are not class records are skipped.
fn lenient_classes<'de, D>(deserializer: D) -> Result<Vec<ClassInput>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            log::warn!("ignoring malformed classes field: {}", other);
            return Ok(Vec::new());
        }
    };

    let classes = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<ClassInput>(item) {
            Ok(class) => Some(class),
            Err(e) => {
                log::warn!("skipping malformed class entry: {}", e);
                None
            }
        })
        .collect();

    Ok(classes)
}

/// Insertion-ordered accumulator of series keyed by name.
///
/// The first series stored under a name keeps its fields; later ones only
/// add their player count. Partial accumulators can be combined with
/// [`merge`](Self::merge) in any order and give the same sorted result.
#[derive(Debug, Clone, Default)]
pub struct SeriesAccumulator {
    series: Vec<Series>,
    index: HashMap<String, usize>,
}

impl SeriesAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one series, merging it into an existing entry of the same name.
    pub fn add(&mut self, series: Series) {
        match self.index.get(&series.name) {
            Some(&i) => self.series[i].absorb(&series),
            None => {
                self.index.insert(series.name.clone(), self.series.len());
                self.series.push(series);
            }
        }
    }

    /// Fold another accumulator into this one.
    pub fn merge(&mut self, other: SeriesAccumulator) {
        self.extend(other.series);
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Series in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.iter()
    }

    /// Consume the accumulator into the sorted series list.
    pub fn into_sorted(self) -> Vec<Series> {
        sort_series(self.series)
    }
}

impl Extend<Series> for SeriesAccumulator {
    fn extend<I: IntoIterator<Item = Series>>(&mut self, iter: I) {
        for series in iter {
            self.add(series);
        }
    }
}

impl FromIterator<Series> for SeriesAccumulator {
    fn from_iter<I: IntoIterator<Item = Series>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

/// Normalize a single class, attaching its player count to every series.
pub fn normalize_class(class: &ClassInput) -> ClassOutcome {
    let normalized = normalize_class_name(&class.name);

    if normalized.is_waiting_list {
        return ClassOutcome {
            class: None,
            series: Vec::new(),
            is_unknown: false,
        };
    }

    let series: Vec<Series> = normalized
        .series
        .into_iter()
        .map(|s| s.with_player_count(class.player_count))
        .collect();

    ClassOutcome {
        class: Some(class.into()),
        is_unknown: series.is_empty(),
        series,
    }
}

/// Normalize every class of an event.
///
/// Waiting-list classes are dropped, unclassifiable ones are listed in
/// `unknown_series`, and series are deduplicated by name with summed
/// player counts.
pub fn normalize_event_classes(event: &Event) -> NormalizedEvent {
    let mut extra = event.extra.clone();
    extra.remove("series");
    extra.remove("unknownSeries");

    let mut classes = Vec::with_capacity(event.classes.len());
    let mut unknown_series = Vec::new();
    let mut acc = SeriesAccumulator::new();

    for class in &event.classes {
        let outcome = normalize_class(class);
        let Some(normalized) = outcome.class else {
            continue;
        };

        if outcome.is_unknown {
            unknown_series.push(normalized.name.clone());
        } else {
            acc.extend(outcome.series);
        }
        classes.push(normalized);
    }

    log::debug!(
        "normalized {} classes into {} series ({} unknown)",
        classes.len(),
        acc.len(),
        unknown_series.len()
    );

    NormalizedEvent {
        extra,
        classes,
        series: acc.into_sorted(),
        unknown_series,
    }
}

/// Normalize a batch of events, preserving their order.
pub fn normalize_all_events(events: &[Event]) -> Vec<NormalizedEvent> {
    events.iter().map(normalize_event_classes).collect()
}

/// Collect the corpus-wide catalog of series across normalized events.
pub fn collect_unique_series(events: &[NormalizedEvent]) -> Vec<Series> {
    events
        .iter()
        .flat_map(|event| event.series.iter().cloned())
        .collect::<SeriesAccumulator>()
        .into_sorted()
}

/// A whole events document: `{ "events": [...], ...other keys }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDocument {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A normalized document with the corpus catalog at the top level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedDocument {
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    pub series: Vec<Series>,
    pub events: Vec<NormalizedEvent>,
}

impl EventDocument {
    /// Normalize every event and collect the corpus catalog.
    pub fn normalize(&self) -> NormalizedDocument {
        let events = normalize_all_events(&self.events);
        let series = collect_unique_series(&events);

        let mut extra = self.extra.clone();
        extra.remove("series");

        NormalizedDocument {
            extra,
            series,
            events,
        }
    }
}
