//! Data-quality statistics and catalog facets over normalized events.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::Serialize;

use crate::cascade::SkillLevel;
use crate::event::NormalizedEvent;
use crate::series::Series;

const TOP_SERIES_NAMES: usize = 20;
const UNKNOWN_NAMES_SHOWN: usize = 30;

/// Counts over a batch of normalized events.
///
/// Series counts are per event: a series present in three events counts
/// three times. Missing player counts count as zero here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_events: usize,
    pub total_classes: usize,
    pub total_series: usize,
    pub total_unknown_series: usize,
    pub total_player_count: i64,
    pub by_category: BTreeMap<String, usize>,
    pub by_category_player_count: BTreeMap<String, i64>,
    pub by_ranking: BTreeMap<String, usize>,
    pub by_ranking_player_count: BTreeMap<String, i64>,
    pub by_series_name: BTreeMap<String, usize>,
    pub by_series_name_player_count: BTreeMap<String, i64>,
    /// Distinct unclassifiable class names, first-seen order.
    pub unknown_series_names: Vec<String>,
}

impl Statistics {
    pub fn from_events(events: &[NormalizedEvent]) -> Self {
        let mut stats = Statistics {
            total_events: events.len(),
            ..Default::default()
        };
        let mut seen_unknown = HashSet::new();

        for event in events {
            stats.total_classes += event.classes.len();

            for series in &event.series {
                let players = series.player_count.unwrap_or(0);
                stats.total_series += 1;
                stats.total_player_count = stats.total_player_count.saturating_add(players);

                *stats.by_series_name.entry(series.name.clone()).or_default() += 1;
                add_players(&mut stats.by_series_name_player_count, &series.name, players);

                if !series.category.is_empty() {
                    *stats.by_category.entry(series.category.clone()).or_default() += 1;
                    add_players(&mut stats.by_category_player_count, &series.category, players);
                }

                if let Some(ranking) = series.ranking {
                    let key = ranking.to_string();
                    *stats.by_ranking.entry(key.clone()).or_default() += 1;
                    add_players(&mut stats.by_ranking_player_count, &key, players);
                }
            }

            for name in &event.unknown_series {
                stats.total_unknown_series += 1;
                if seen_unknown.insert(name.as_str()) {
                    stats.unknown_series_names.push(name.clone());
                }
            }
        }

        stats
    }

    /// Log a summary at info level, most frequent categories first.
    pub fn log_summary(&self) {
        log::info!("total events: {}", self.total_events);
        log::info!("total classes: {}", self.total_classes);
        log::info!("total series (unique per event): {}", self.total_series);
        log::info!("total players: {}", self.total_player_count);
        log::info!("unknown series entries: {}", self.total_unknown_series);

        log::info!("by category (events / players):");
        let mut categories: Vec<_> = self.by_category.iter().collect();
        categories.sort_by(|a, b| b.1.cmp(a.1));
        for (category, count) in categories {
            let players = self.by_category_player_count.get(category).unwrap_or(&0);
            log::info!("  {}: {} events / {} players", category, count, players);
        }

        log::info!("by ranking (events / players):");
        let mut rankings: Vec<_> = self.by_ranking.iter().collect();
        rankings.sort_by_key(|(ranking, _)| SkillLevel::from_str(ranking).map(|r| r.value()));
        for (ranking, count) in rankings {
            let players = self.by_ranking_player_count.get(ranking).unwrap_or(&0);
            log::info!("  {}: {} events / {} players", ranking, count, players);
        }

        log::info!("by series name (top {} by events / players):", TOP_SERIES_NAMES);
        for (name, count, players) in self.top_series_names(TOP_SERIES_NAMES) {
            log::info!("  {}: {} events / {} players", name, count, players);
        }

        if !self.unknown_series_names.is_empty() {
            log::info!("unknown series ({} unique):", self.unknown_series_names.len());
            let (shown, hidden) = self.unknown_series_preview(UNKNOWN_NAMES_SHOWN);
            for name in shown {
                log::info!("  - {}", name);
            }
            if hidden > 0 {
                log::info!("  ... and {} more", hidden);
            }
        }
    }

    /// Series names by event count, most frequent first, with player totals.
    ///
    /// Ties keep name order.
    pub fn top_series_names(&self, limit: usize) -> Vec<(&str, usize, i64)> {
        let mut names: Vec<_> = self
            .by_series_name
            .iter()
            .map(|(name, &count)| {
                let players = self.by_series_name_player_count.get(name).copied();
                (name.as_str(), count, players.unwrap_or(0))
            })
            .collect();
        names.sort_by(|a, b| b.1.cmp(&a.1));
        names.truncate(limit);
        names
    }

    /// The first `limit` unknown names and how many were left out.
    pub fn unknown_series_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.unknown_series_names.len().min(limit);
        (
            &self.unknown_series_names[..shown],
            self.unknown_series_names.len() - shown,
        )
    }
}

fn add_players(counts: &mut BTreeMap<String, i64>, key: &str, players: i64) {
    let total = counts.entry(key.to_string()).or_default();
    *total = total.saturating_add(players);
}

/// Distinct non-empty categories, in plain string order.
pub fn unique_categories(series: &[Series]) -> Vec<String> {
    series
        .iter()
        .filter(|s| !s.category.is_empty())
        .map(|s| s.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct rankings, lowest tier first.
pub fn unique_rankings(series: &[Series]) -> Vec<SkillLevel> {
    series
        .iter()
        .filter_map(|s| s.ranking)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
