// Refit pipeline against a fake DOM surface

use menu_editor_wasm::config::EditorConfig;
use menu_editor_wasm::html_layout::{
    refit, FitMode, FitResult, LayoutSurface, PreviewSurface, RefitOutcome, VerticalAlign,
};
use menu_editor_wasm::models::{EditorState, ExportPreset, SpacingParameters};

/// Content whose natural height is fixed by the test
struct FakeSurface {
    natural_height: Option<f64>,
    content_transform: String,
    canvas_width: Option<f64>,
    /// Canvas width in effect at each measurement
    measured_widths: Vec<Option<f64>>,
    measurements: usize,
    applied: Vec<FitResult>,
    preview: String,
}

impl FakeSurface {
    fn mounted(natural_height: f64) -> Self {
        Self {
            natural_height: Some(natural_height),
            content_transform: "none".to_string(),
            canvas_width: None,
            measured_widths: Vec::new(),
            measurements: 0,
            applied: Vec::new(),
            preview: "none".to_string(),
        }
    }

    fn unmounted() -> Self {
        Self {
            natural_height: None,
            ..Self::mounted(0.0)
        }
    }
}

impl LayoutSurface for FakeSurface {
    fn prepare_canvas(&mut self, preset: &ExportPreset) {
        self.canvas_width = Some(preset.width_px());
    }

    /// Reads the laid-out height through the current content transform, with
    /// that transform reset to identity for the reading as the DOM surface does.
    fn measure_natural_height(&mut self) -> Option<f64> {
        self.measurements += 1;
        self.measured_widths.push(self.canvas_width);
        let applied = std::mem::replace(&mut self.content_transform, "none".to_string());
        let reading = self.natural_height.map(|h| h * scale_of(&self.content_transform));
        self.content_transform = applied;
        reading
    }

    fn apply_fit(&mut self, fit: &FitResult, preset: &ExportPreset) {
        self.canvas_width = Some(preset.width_px());
        self.content_transform = fit.content_transform();
        self.applied.push(*fit);
    }
}

impl PreviewSurface for FakeSurface {
    fn preview_transform(&self) -> String {
        self.preview.clone()
    }

    fn set_preview_transform(&mut self, transform: &str) {
        self.preview = transform.to_string();
    }
}

fn scale_of(transform: &str) -> f64 {
    transform
        .strip_prefix("scale(")
        .and_then(|s| s.strip_suffix(')'))
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(1.0)
}

fn editor() -> EditorState {
    EditorState::new(EditorConfig::default(), SpacingParameters::default())
}

#[test]
fn test_applies_fit_for_default_preset() {
    let mut state = editor();
    let mut surface = FakeSurface::mounted(1500.0);

    let outcome = refit(&mut state, &mut surface);

    let RefitOutcome::Applied(fit) = outcome else {
        panic!("expected a fit, got {:?}", outcome);
    };
    assert!((fit.applied_content_scale - 0.688).abs() < 1e-9);
    assert_eq!(surface.content_transform, "scale(0.688)");
    assert_eq!(state.fit(), Some(&fit));
}

// The fake resets its transform for each reading as `LayoutSurface` requires,
// so this covers the pipeline's use of the reading. The DOM surface's own reset
// is checked in the browser by `test_dom_surface_measures_with_identity_transform`
// in tests/wasm_build.rs.
#[test]
fn test_scale_does_not_compound_across_refits() {
    let mut state = editor();
    let mut surface = FakeSurface::mounted(1500.0);
    refit(&mut state, &mut surface);

    for title in ["Soups", "Супи", "Starters"] {
        state.edit_document(|doc| doc.set_section_title(0, title)).unwrap();
        let RefitOutcome::Applied(fit) = refit(&mut state, &mut surface) else {
            panic!("expected a fit");
        };
        assert_eq!(fit.measured_content_height, 1500.0);
        assert_eq!(surface.content_transform, "scale(0.688)");
    }
    assert_eq!(surface.measurements, 4);
}

#[test]
fn test_measurement_cached_per_revision() {
    let mut state = editor();
    let mut surface = FakeSurface::mounted(900.0);

    refit(&mut state, &mut surface);
    refit(&mut state, &mut surface);
    assert_eq!(surface.measurements, 1);

    // Fit mode does not change the content height
    state
        .set_fit_mode(FitMode {
            vertical_align: VerticalAlign::Center,
            ..Default::default()
        })
        .unwrap();
    refit(&mut state, &mut surface);
    assert_eq!(surface.measurements, 1);
    assert_eq!(surface.applied.last().unwrap().anchor, VerticalAlign::Center);

    // Edits, spacing and preset changes do
    state.edit_document(|doc| doc.add_item(0).map(|_| ())).unwrap();
    refit(&mut state, &mut surface);
    assert_eq!(surface.measurements, 2);

    state
        .set_spacing(SpacingParameters {
            item_gap: 2.0,
            ..Default::default()
        })
        .unwrap();
    refit(&mut state, &mut surface);
    assert_eq!(surface.measurements, 3);

    state.select_preset("story").unwrap();
    refit(&mut state, &mut surface);
    assert_eq!(surface.measurements, 4);

    // Re-selecting the same preset is not a change
    state.select_preset("story").unwrap();
    refit(&mut state, &mut surface);
    assert_eq!(surface.measurements, 4);
}

#[test]
fn test_preset_change_measures_at_new_width() {
    let mut state = editor();
    let mut surface = FakeSurface::mounted(1500.0);
    refit(&mut state, &mut surface);

    state.select_preset("print").unwrap();
    refit(&mut state, &mut surface);

    assert_eq!(surface.measured_widths, vec![Some(1080.0), Some(1240.0)]);
}

#[test]
fn test_new_height_is_picked_up_after_edit() {
    let mut state = editor();
    let mut surface = FakeSurface::mounted(600.0);
    refit(&mut state, &mut surface);

    surface.natural_height = Some(2064.0);
    state.edit_document(|doc| doc.add_item(1).map(|_| ())).unwrap();
    let RefitOutcome::Applied(fit) = refit(&mut state, &mut surface) else {
        panic!("expected a fit");
    };
    assert_eq!(fit.measured_content_height, 2064.0);
    assert_eq!(fit.applied_content_scale, 0.5);
}

#[test]
fn test_unmounted_surface_keeps_previous_fit() {
    let mut state = editor();
    let mut surface = FakeSurface::mounted(1500.0);
    refit(&mut state, &mut surface);
    let previous = state.fit().copied();

    state
        .edit_document(|doc| {
            doc.set_menu_date("01.01.2027");
            Ok(())
        })
        .unwrap();
    for height in [None, Some(0.0), Some(f64::NAN), Some(-3.0)] {
        let mut gone = FakeSurface::unmounted();
        gone.natural_height = height;
        assert_eq!(refit(&mut state, &mut gone), RefitOutcome::Unmounted);
        assert!(gone.applied.is_empty());
        assert_eq!(gone.preview, "none");
    }
    assert_eq!(state.fit().copied(), previous);
}

#[test]
fn test_refit_deferred_while_exporting() {
    let mut state = editor();
    let mut surface = FakeSurface::mounted(700.0);
    state.begin_export().unwrap();

    assert_eq!(refit(&mut state, &mut surface), RefitOutcome::Deferred);
    assert_eq!(surface.measurements, 0);

    state.end_export();
    assert!(matches!(refit(&mut state, &mut surface), RefitOutcome::Applied(_)));
}

#[test]
fn test_preview_scaled_to_viewport() {
    let mut state = editor();
    let mut surface = FakeSurface::mounted(800.0);
    state.set_viewport(594.0, 1200.0);

    refit(&mut state, &mut surface);
    assert_eq!(surface.preview, "scale(0.55)");

    state.set_viewport(2000.0, 2000.0);
    refit(&mut state, &mut surface);
    assert_eq!(surface.preview, "none");
}

#[test]
fn test_natural_height_preset_sizes_canvas_to_content() {
    let mut state = editor();
    state.select_preset("original").unwrap();
    let mut surface = FakeSurface::mounted(1333.0);

    refit(&mut state, &mut surface);
    assert_eq!(state.canvas_height(), Some(1333.0));
    assert_eq!(surface.content_transform, "none");
}
