//! Browser bindings: DOM surface, localStorage, timers and downloads

pub mod download;
pub mod scheduler;
pub mod storage;
pub mod surface;

pub use download::{alert_user, now_ms, trigger_download};
pub use scheduler::{cancel_pending_refit, debounce_refit};
pub use storage::BrowserStore;
pub use surface::DomSurface;
