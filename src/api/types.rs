//! Shared types for the WASM API
//!
//! This module contains common result types used across multiple API modules.

use serde::Serialize;

use crate::html_layout::{FitResult, MenuDisplayList, RefitOutcome};
use crate::models::EditorState;

/// Result of an edit operation (mutation primitive)
///
/// Carries the fresh display list so the host can re-render without a
/// second round trip, then schedule a refit.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EditResult {
    pub revision: u64,
    pub display_list: MenuDisplayList,
    /// Index created by the edit (new section or item), if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_index: Option<usize>,
}

impl EditResult {
    pub fn from_state(state: &EditorState) -> Self {
        Self {
            revision: state.revision(),
            display_list: state.display_list(),
            created_index: None,
        }
    }

    pub fn with_created(mut self, index: usize) -> Self {
        self.created_index = Some(index);
        self
    }
}

/// Current layout state as reported to the host
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FitReport {
    /// "applied", "pending", "unmounted" or "deferred"
    pub status: &'static str,
    pub preset_id: &'static str,
    pub revision: u64,
    pub fit: Option<FitResult>,
    pub preview_scale: f64,
    pub overflows: bool,
    /// Milliseconds spent in the refit pass, when timed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_ms: Option<f64>,
}

impl FitReport {
    pub fn new(state: &EditorState, outcome: Option<RefitOutcome>) -> Self {
        let fit = state.fit().copied();
        let status = match outcome {
            Some(RefitOutcome::Applied(_)) => "applied",
            Some(RefitOutcome::Unmounted) => "unmounted",
            Some(RefitOutcome::Deferred) => "deferred",
            None if fit.is_some() => "applied",
            None => "pending",
        };
        Self {
            status,
            preset_id: state.preset().id,
            revision: state.revision(),
            fit,
            preview_scale: state.preview_scale(),
            overflows: fit.map_or(false, |f| f.overflows(&state.config.fit)),
            elapsed_ms: None,
        }
    }
}
