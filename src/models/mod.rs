//! Models module for the Menu Editor
//!
//! This module contains the data models: the editable menu document, design
//! settings, the export preset catalog, saved snapshots and the editor state
//! that ties them together.

pub mod editor_state;
pub mod menu;
pub mod preset;
pub mod snapshot;
pub mod spacing;

// Re-export commonly used types
pub use editor_state::{EditorState, Measurement};
pub use menu::{BackgroundImage, MenuDocument, MenuItem, RenderedSection, Section};
pub use preset::{default_preset, find_preset, presets, ExportPreset, PRESETS};
pub use snapshot::{SavedMenuSnapshot, SavedMenus};
pub use spacing::SpacingParameters;
