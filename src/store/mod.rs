//! In-memory store for retrospectives and teams.
//!
//! Single source of truth for the application. All state lives here for the
//! lifetime of the process; a restart resets to the seed data. Mutators are
//! synchronous all-or-nothing updates. Unknown ids leave the collections
//! untouched; the return value tells the caller whether the target existed.

use chrono::Utc;
use uuid::Uuid;

use crate::models::{NewRetro, NewRetroItem, Retro, RetroItem, RetroItemPatch, Team};
use crate::seed;

/// Session-lifetime state container for retros and teams.
///
/// Constructed once by the application entry point and shared with handlers;
/// nothing else may mutate the collections.
#[derive(Debug)]
pub struct RetroStore {
    retros: Vec<Retro>,
    teams: Vec<Team>,
    current_retro: Option<Retro>,
    current_team: Option<Team>,
    /// No asynchronous load ever occurs, so this stays false. Kept for
    /// interface completeness with the frontend contract.
    loading: bool,
}

impl RetroStore {
    /// Create a store populated with the fixed sample data.
    ///
    /// The current team starts as the first seeded team; no retro is selected.
    pub fn seeded() -> Self {
        let teams = seed::teams();
        let current_team = teams.first().cloned();
        Self {
            retros: seed::retros(),
            teams,
            current_retro: None,
            current_team,
            loading: false,
        }
    }

    /// Create an empty store. Used by tests that need full control over state.
    pub fn empty() -> Self {
        Self {
            retros: Vec::new(),
            teams: Vec::new(),
            current_retro: None,
            current_team: None,
            loading: false,
        }
    }

    // ==================== READ ACCESS ====================

    pub fn retros(&self) -> &[Retro] {
        &self.retros
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn current_retro(&self) -> Option<&Retro> {
        self.current_retro.as_ref()
    }

    pub fn current_team(&self) -> Option<&Team> {
        self.current_team.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Find a retro by id.
    pub fn get_retro(&self, retro_id: &str) -> Option<&Retro> {
        self.retros.iter().find(|r| r.id == retro_id)
    }

    /// Find a team by id.
    pub fn get_team(&self, team_id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    // ==================== SELECTION ====================

    /// Replace the current-retro selection verbatim. No validation.
    pub fn set_current_retro(&mut self, retro: Option<Retro>) {
        self.current_retro = retro;
    }

    /// Replace the current-team selection verbatim. No validation.
    pub fn set_current_team(&mut self, team: Option<Team>) {
        self.current_team = team;
    }

    // ==================== RETRO OPERATIONS ====================

    /// Append a new retro with a fresh id.
    ///
    /// The item list always starts empty regardless of what the request
    /// carried. Returns the stored retro.
    pub fn add_retro(&mut self, new: NewRetro) -> Retro {
        let retro = Retro {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            description: new.description,
            date: new.date,
            team_id: new.team_id,
            status: new.status,
            items: Vec::new(),
        };
        tracing::info!(retro_id = %retro.id, title = %retro.title, "created retro");
        self.retros.push(retro.clone());
        self.resync_current_retro();
        retro
    }

    // ==================== ITEM OPERATIONS ====================

    /// Append a new item to the named retro, preserving insertion order.
    ///
    /// The item gets a fresh id and a creation timestamp. Returns `None`
    /// without touching any state when the retro id is unknown.
    pub fn add_retro_item(&mut self, retro_id: &str, new: NewRetroItem) -> Option<RetroItem> {
        let retro = match self.retros.iter_mut().find(|r| r.id == retro_id) {
            Some(retro) => retro,
            None => {
                tracing::debug!(retro_id, "add_retro_item: unknown retro");
                return None;
            }
        };

        let item = RetroItem {
            id: Uuid::new_v4().to_string(),
            content: new.content,
            item_type: new.item_type,
            votes: new.votes,
            author: new.author,
            created_at: Utc::now().to_rfc3339(),
        };
        retro.items.push(item.clone());
        self.resync_current_retro();
        Some(item)
    }

    /// Merge the supplied fields over an existing item; only supplied fields
    /// change. Returns the updated item, or `None` when either id is unknown.
    pub fn update_retro_item(
        &mut self,
        retro_id: &str,
        item_id: &str,
        patch: RetroItemPatch,
    ) -> Option<RetroItem> {
        let retro = self.retros.iter_mut().find(|r| r.id == retro_id)?;
        let item = retro.items.iter_mut().find(|i| i.id == item_id)?;

        if let Some(content) = patch.content {
            item.content = content;
        }
        if let Some(item_type) = patch.item_type {
            item.item_type = item_type;
        }
        if let Some(votes) = patch.votes {
            item.votes = votes;
        }
        if let Some(author) = patch.author {
            item.author = author;
        }

        let updated = item.clone();
        self.resync_current_retro();
        Some(updated)
    }

    /// Remove the named item from the named retro. Returns whether an item
    /// was actually removed.
    pub fn delete_retro_item(&mut self, retro_id: &str, item_id: &str) -> bool {
        let Some(retro) = self.retros.iter_mut().find(|r| r.id == retro_id) else {
            tracing::debug!(retro_id, "delete_retro_item: unknown retro");
            return false;
        };

        let before = retro.items.len();
        retro.items.retain(|i| i.id != item_id);
        let removed = retro.items.len() < before;
        if removed {
            self.resync_current_retro();
        }
        removed
    }

    /// Increment an item's vote counter by exactly one. No upper bound and
    /// no duplicate-vote prevention. Returns the updated item, or `None`
    /// when either id is unknown.
    pub fn vote_retro_item(&mut self, retro_id: &str, item_id: &str) -> Option<RetroItem> {
        let retro = self.retros.iter_mut().find(|r| r.id == retro_id)?;
        let item = retro.items.iter_mut().find(|i| i.id == item_id)?;
        item.votes += 1;
        let updated = item.clone();
        self.resync_current_retro();
        Some(updated)
    }

    // ==================== DERIVED-STATE SYNC ====================

    /// Re-resolve the current-retro selection against the collection after a
    /// mutation, so readers of the selection see the updated object. A
    /// selection whose id is no longer present is left untouched; no
    /// operation removes a retro, so that branch never fires in practice.
    fn resync_current_retro(&mut self) {
        if let Some(current) = &self.current_retro {
            if let Some(updated) = self.retros.iter().find(|r| r.id == current.id) {
                self.current_retro = Some(updated.clone());
            }
        }
    }
}
