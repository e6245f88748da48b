//! HTML Layout Engine
//!
//! This module computes layout for HTML/DOM rendering of the menu: the display
//! list the host renders, the fit of the rendered content onto the export
//! canvas, and the pipeline that measures the DOM and applies the fit.

pub mod display_list;
pub mod document;
pub mod fit;
pub mod pipeline;
pub mod surface;

pub use display_list::{MenuDisplayList, RenderItem, RenderSection, StyleMetrics};
pub use document::LayoutEngine;
pub use fit::{compute_fit, preview_scale, FitMode, FitResult, VerticalAlign};
pub use pipeline::{refit, RefitOutcome};
pub use surface::{preview_transform_css, LayoutSurface, PreviewSurface};
