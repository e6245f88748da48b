//! Editor configuration
//!
//! Named tuning constants plus the `EditorConfig` record the host page passes to
//! `initEditor`. Every field has a default so the host may send `{}` or omit
//! the config entirely.

use serde::{Deserialize, Serialize};

/// Vertical padding around the measured content subtree that is not part of
/// its own height (24px top + 24px bottom).
pub const FIXED_MARGIN_PX: f64 = 48.0;

/// Auto-fit never shrinks content below this factor; past it the content
/// overflows instead of becoming illegible.
pub const MIN_AUTO_FIT_SCALE: f64 = 0.5;

/// Delay between the last mutation of a burst and the re-fit it triggers.
pub const REFIT_DEBOUNCE_MS: u32 = 100;

pub const SAVED_MENUS_KEY: &str = "menuEditor.savedMenus";
pub const DESIGN_SETTINGS_KEY: &str = "menuEditor.designSettings";

pub const DEFAULT_PRESET_ID: &str = "social";

/// Tunables for the fit engine.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FitConstants {
    pub fixed_margin_px: f64,
    pub min_auto_fit_scale: f64,
}

impl Default for FitConstants {
    fn default() -> Self {
        Self {
            fixed_margin_px: FIXED_MARGIN_PX,
            min_auto_fit_scale: MIN_AUTO_FIT_SCALE,
        }
    }
}

/// DOM ids of the three nested elements the module measures and styles.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SurfaceIds {
    /// Outer wrapper carrying the preview-only viewport scale
    pub preview_wrapper: String,
    /// Fixed-size frame that gets rasterized
    pub canvas: String,
    /// Menu content subtree that gets measured and fit-scaled
    pub content: String,
}

impl Default for SurfaceIds {
    fn default() -> Self {
        Self {
            preview_wrapper: "menu-preview-wrapper".to_string(),
            canvas: "menu-canvas".to_string(),
            content: "menu-content".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageKeys {
    pub saved_menus: String,
    pub design_settings: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            saved_menus: SAVED_MENUS_KEY.to_string(),
            design_settings: DESIGN_SETTINGS_KEY.to_string(),
        }
    }
}

/// Fixed header/footer text printed around the sections.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuBranding {
    pub title: String,
    pub subtitle: String,
    pub footer_lines: Vec<String>,
}

impl Default for MenuBranding {
    fn default() -> Self {
        Self {
            title: "Бистро Бени".to_string(),
            subtitle: "Обедно Меню".to_string(),
            footer_lines: vec![
                "Адрес: ул. \"Минчо Папасчиков\" Nº38".to_string(),
                "Заповядайте!".to_string(),
            ],
        }
    }
}

/// Suffixes appended to the two price columns.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrencyLabels {
    pub primary_suffix: String,
    pub secondary_suffix: String,
    pub separator: String,
}

impl Default for CurrencyLabels {
    fn default() -> Self {
        Self {
            primary_suffix: " лв".to_string(),
            secondary_suffix: "€".to_string(),
            separator: " / ".to_string(),
        }
    }
}

/// Complete editor configuration (deserialized from the host page)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    pub surface: SurfaceIds,
    pub storage_keys: StorageKeys,
    pub refit_debounce_ms: u32,
    pub fit: FitConstants,
    pub branding: MenuBranding,
    pub currency: CurrencyLabels,
    pub default_preset: String,
    /// Shown once to the user when rasterization fails
    pub export_error_message: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceIds::default(),
            storage_keys: StorageKeys::default(),
            refit_debounce_ms: REFIT_DEBOUNCE_MS,
            fit: FitConstants::default(),
            branding: MenuBranding::default(),
            currency: CurrencyLabels::default(),
            default_preset: DEFAULT_PRESET_ID.to_string(),
            export_error_message: "Грешка при генериране на снимката.".to_string(),
        }
    }
}
