//! Saved menu snapshots
//!
//! A snapshot is a deep copy of the editable sections, the date options and
//! the spacing parameters, tagged with an id, a user-facing name and the time
//! it was taken. The background image is not part of a snapshot.

use serde::{Deserialize, Serialize};

use super::menu::{MenuDocument, Section};
use super::spacing::SpacingParameters;
use crate::error::{MenuError, Result};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedMenuSnapshot {
    pub id: String,
    pub name: String,
    pub sections: Vec<Section>,
    #[serde(default)]
    pub spacing: SpacingParameters,
    #[serde(default)]
    pub show_date: bool,
    #[serde(default)]
    pub menu_date: String,
    /// RFC 3339 timestamp
    pub saved_at: String,
}

impl SavedMenuSnapshot {
    pub fn capture(name: &str, document: &MenuDocument, spacing: &SpacingParameters) -> Self {
        let name = name.trim();
        let saved_at = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: if name.is_empty() {
                format!("Menu {}", &saved_at[..10])
            } else {
                name.to_string()
            },
            sections: document.sections.clone(),
            spacing: *spacing,
            show_date: document.show_date,
            menu_date: document.menu_date.clone(),
            saved_at,
        }
    }

    /// Replace the live document content and spacing with this snapshot.
    /// The document's background image is left untouched.
    pub fn restore_into(&self, document: &mut MenuDocument, spacing: &mut SpacingParameters) {
        document.sections = self.sections.clone();
        document.show_date = self.show_date;
        document.menu_date = self.menu_date.clone();
        *spacing = self.spacing;
    }
}

/// Ordered collection of snapshots, oldest first
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct SavedMenus {
    entries: Vec<SavedMenuSnapshot>,
}

impl SavedMenus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[SavedMenuSnapshot] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store a snapshot. A snapshot with the same name replaces the earlier
    /// one in place; otherwise it is appended.
    pub fn upsert(&mut self, snapshot: SavedMenuSnapshot) {
        match self.entries.iter_mut().find(|s| s.name == snapshot.name) {
            Some(existing) => *existing = snapshot,
            None => self.entries.push(snapshot),
        }
    }

    pub fn get(&self, id: &str) -> Result<&SavedMenuSnapshot> {
        self.entries
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| MenuError::SnapshotNotFound(id.to_string()))
    }

    pub fn remove(&mut self, id: &str) -> Result<SavedMenuSnapshot> {
        let index = self
            .entries
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| MenuError::SnapshotNotFound(id.to_string()))?;
        Ok(self.entries.remove(index))
    }
}
