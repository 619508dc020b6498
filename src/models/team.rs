//! Team model matching the frontend Team interface.

use serde::{Deserialize, Serialize};

/// A named group of members that owns retrospectives via `team_id` reference.
///
/// Members are plain display names; no member entity exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub members: Vec<String>,
}

/// Request body for changing the current-team selection.
///
/// `team_id: null` clears the selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectTeamRequest {
    #[serde(default)]
    pub team_id: Option<String>,
}
