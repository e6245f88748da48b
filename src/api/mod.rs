//! Menu Editor WASM API
//!
//! This module provides the JavaScript-facing API for the menu editor. All
//! functions operate on the single WASM-owned `EditorState`.
//!
//! # Module Structure
//!
//! - `helpers`: editor state lock, serialization and error conversion
//! - `types`: result types returned to JavaScript
//! - `core`: initialization and document mutations
//! - `layout`: spacing, presets, fit mode and refit scheduling
//! - `storage`: saved menus
//! - `export`: image export

pub mod helpers;
pub mod types;
pub mod core;
pub mod layout;
pub mod storage;
pub mod export;

// Re-export all public functions to keep a flat public API
pub use self::core::*;
pub use layout::*;
pub use storage::{save_menu, list_saved_menus, load_saved_menu, delete_saved_menu};
pub use export::{export_image, is_exporting};
