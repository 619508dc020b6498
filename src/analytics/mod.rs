//! Derived analytics over the store's collections.
//!
//! Pure, stateless aggregations recomputed on every read; nothing here is
//! cached. Groups preserve first-occurrence order so chart axes stay stable
//! across reads of unchanged data.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{ItemType, Retro, RetroStatus};

/// Retro count for one calendar month, keyed by short month name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonthCount {
    pub month: String,
    pub count: usize,
}

/// Item count for one feedback category.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TypeCount {
    pub name: String,
    pub value: usize,
}

/// Retro count for one team.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamCount {
    pub team_id: String,
    pub count: usize,
}

/// Retro counts per lifecycle status.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub upcoming: usize,
    pub active: usize,
    pub completed: usize,
}

/// Item counts per category within a single retro.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ItemBreakdown {
    pub positive: usize,
    pub negative: usize,
    pub action: usize,
}

/// Everything the analytics view needs, derived in one pass over the
/// current collections.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub retros_by_month: Vec<MonthCount>,
    pub items_by_type: Vec<TypeCount>,
    pub retros_by_team: Vec<TeamCount>,
    pub status_counts: StatusCounts,
}

/// Group retros by the short month name of their date and count per group.
///
/// Dates are `yyyy-MM-dd` by convention; a retro whose date does not parse
/// is left out of the grouping.
pub fn retros_by_month(retros: &[Retro]) -> Vec<MonthCount> {
    let mut groups: Vec<MonthCount> = Vec::new();
    for retro in retros {
        let Ok(date) = NaiveDate::parse_from_str(&retro.date, "%Y-%m-%d") else {
            continue;
        };
        let month = date.format("%b").to_string();
        match groups.iter_mut().find(|g| g.month == month) {
            Some(group) => group.count += 1,
            None => groups.push(MonthCount { month, count: 1 }),
        }
    }
    groups
}

/// Group all items across all retros by type and count per group.
pub fn items_by_type(retros: &[Retro]) -> Vec<TypeCount> {
    let mut groups: Vec<TypeCount> = Vec::new();
    for item in retros.iter().flat_map(|r| r.items.iter()) {
        let name = item.item_type.as_str();
        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.value += 1,
            None => groups.push(TypeCount {
                name: name.to_string(),
                value: 1,
            }),
        }
    }
    groups
}

/// Group retros by team id and count per group.
pub fn retros_by_team(retros: &[Retro]) -> Vec<TeamCount> {
    let mut groups: Vec<TeamCount> = Vec::new();
    for retro in retros {
        match groups.iter_mut().find(|g| g.team_id == retro.team_id) {
            Some(group) => group.count += 1,
            None => groups.push(TeamCount {
                team_id: retro.team_id.clone(),
                count: 1,
            }),
        }
    }
    groups
}

/// Count retros per lifecycle status.
pub fn status_counts(retros: &[Retro]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for retro in retros {
        match retro.status {
            RetroStatus::Upcoming => counts.upcoming += 1,
            RetroStatus::Active => counts.active += 1,
            RetroStatus::Completed => counts.completed += 1,
        }
    }
    counts
}

/// Count one retro's items per category.
pub fn item_breakdown(retro: &Retro) -> ItemBreakdown {
    let mut breakdown = ItemBreakdown::default();
    for item in &retro.items {
        match item.item_type {
            ItemType::Positive => breakdown.positive += 1,
            ItemType::Negative => breakdown.negative += 1,
            ItemType::Action => breakdown.action += 1,
        }
    }
    breakdown
}

/// Derive the full analytics payload from the current retro collection.
pub fn summarize(retros: &[Retro]) -> AnalyticsSummary {
    AnalyticsSummary {
        retros_by_month: retros_by_month(retros),
        items_by_type: items_by_type(retros),
        retros_by_team: retros_by_team(retros),
        status_counts: status_counts(retros),
    }
}
