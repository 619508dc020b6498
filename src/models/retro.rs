//! Retro and retro item models matching the frontend interfaces.

use serde::{Deserialize, Serialize};

/// Category of a feedback item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Positive,
    Negative,
    Action,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Positive => "positive",
            ItemType::Negative => "negative",
            ItemType::Action => "action",
        }
    }
}

/// Lifecycle status of a retrospective.
///
/// Set at creation; no store operation transitions it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RetroStatus {
    Upcoming,
    Active,
    Completed,
}

/// A single piece of feedback or action on a retro board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetroItem {
    pub id: String,
    pub content: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub votes: u32,
    pub author: String,
    pub created_at: String,
}

/// A scheduled team review session with its feedback items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Retro {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Calendar date in `yyyy-MM-dd` form.
    pub date: String,
    /// Reference to a team's id; a dangling reference is tolerated.
    pub team_id: String,
    pub status: RetroStatus,
    /// Insertion-ordered, owned exclusively by this retro.
    pub items: Vec<RetroItem>,
}

/// Request body for creating a new retro.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRetro {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    pub team_id: String,
    #[serde(default = "default_status")]
    pub status: RetroStatus,
    /// Accepted for interface compatibility; the store always starts a
    /// retro with an empty item list.
    #[serde(default)]
    pub items: Vec<RetroItem>,
}

fn default_status() -> RetroStatus {
    RetroStatus::Upcoming
}

/// Request body for adding an item to a retro.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRetroItem {
    pub content: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default)]
    pub votes: u32,
    pub author: String,
}

/// Partial update for an existing item; only supplied fields change.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetroItemPatch {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, rename = "type")]
    pub item_type: Option<ItemType>,
    #[serde(default)]
    pub votes: Option<u32>,
    #[serde(default)]
    pub author: Option<String>,
}

/// Request body for changing the current-retro selection.
///
/// `retro_id: null` clears the selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectRetroRequest {
    #[serde(default)]
    pub retro_id: Option<String>,
}
