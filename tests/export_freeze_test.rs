// Export orchestration: the preview transform is restored on every path

use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;
use futures::future;

use menu_editor_wasm::config::EditorConfig;
use menu_editor_wasm::error::MenuError;
use menu_editor_wasm::export::{run_export, ExportPlan};
use menu_editor_wasm::html_layout::PreviewSurface;
use menu_editor_wasm::models::{find_preset, EditorState, SpacingParameters};

/// Preview wrapper that records every transform it was given
struct RecordingWrapper {
    transform: String,
    history: Vec<String>,
}

impl RecordingWrapper {
    fn new(transform: &str) -> Self {
        Self {
            transform: transform.to_string(),
            history: Vec::new(),
        }
    }
}

impl PreviewSurface for RecordingWrapper {
    fn preview_transform(&self) -> String {
        self.transform.clone()
    }

    fn set_preview_transform(&mut self, transform: &str) {
        self.transform = transform.to_string();
        self.history.push(transform.to_string());
    }
}

/// Preview wrapper whose transform can be read while it is borrowed by an export
struct SharedWrapper(Rc<RefCell<String>>);

impl PreviewSurface for SharedWrapper {
    fn preview_transform(&self) -> String {
        self.0.borrow().clone()
    }

    fn set_preview_transform(&mut self, transform: &str) {
        *self.0.borrow_mut() = transform.to_string();
    }
}

fn social_plan() -> ExportPlan {
    ExportPlan::new(find_preset("social").unwrap(), None).unwrap()
}

#[test]
fn test_success_restores_preview_transform() {
    let mut wrapper = RecordingWrapper::new("scale(0.55)");
    let plan = social_plan();

    let image = block_on(run_export(&mut wrapper, &plan, |plan| {
        assert_eq!((plan.output_width, plan.output_height), (1080, 1080));
        future::ready(Ok("data:image/png;base64,iVBORw0KGgo=".to_string()))
    }))
    .unwrap();

    assert_eq!(image.file_name, "menu-social.png");
    assert_eq!(wrapper.transform, "scale(0.55)");
    assert_eq!(wrapper.history, ["none", "scale(0.55)"]);
}

#[test]
fn test_rasterizer_sees_frozen_preview() {
    let transform = Rc::new(RefCell::new("scale(0.4)".to_string()));
    let mut wrapper = SharedWrapper(Rc::clone(&transform));
    let plan = social_plan();
    let mut seen = None;

    block_on(run_export(&mut wrapper, &plan, |_| {
        seen = Some(transform.borrow().clone());
        future::ready(Ok("data:image/png;base64,AAAA".to_string()))
    }))
    .unwrap();

    assert_eq!(seen.as_deref(), Some("none"));
    assert_eq!(transform.borrow().as_str(), "scale(0.4)");
}

#[test]
fn test_failure_restores_preview_transform() {
    let mut wrapper = RecordingWrapper::new("scale(0.3125)");
    let plan = social_plan();

    let result = block_on(run_export(&mut wrapper, &plan, |_| {
        future::ready(Err(MenuError::Raster("canvas tainted".to_string())))
    }));

    assert!(matches!(result, Err(MenuError::Raster(_))));
    assert_eq!(wrapper.transform, "scale(0.3125)");
}

#[test]
fn test_non_png_output_is_rejected_after_restore() {
    let mut wrapper = RecordingWrapper::new("none");
    let plan = social_plan();

    for output in ["", "data:image/jpeg;base64,/9j/", "not a url"] {
        let result = block_on(run_export(&mut wrapper, &plan, |_| {
            future::ready(Ok(output.to_string()))
        }));
        assert!(matches!(result, Err(MenuError::Raster(_))), "accepted {:?}", output);
        assert_eq!(wrapper.transform, "none");
    }
}

#[test]
fn test_export_locks_out_edits() {
    let mut state = EditorState::new(EditorConfig::default(), SpacingParameters::default());
    state.begin_export().unwrap();

    assert!(matches!(state.begin_export(), Err(MenuError::ExportInProgress)));
    assert!(matches!(
        state.edit_document(|doc| {
            doc.add_section("Late");
            Ok(())
        }),
        Err(MenuError::ExportInProgress)
    ));
    assert!(state.set_spacing(SpacingParameters::default()).is_err());
    assert!(state.select_preset("story").is_err());
    assert_eq!(state.document().sections.len(), 3);

    state.end_export();
    assert!(state.select_preset("story").is_ok());
}

#[test]
fn test_natural_height_plan_uses_fit() {
    let original = find_preset("original").unwrap();
    assert!(ExportPlan::new(original, None).is_none());

    let fit = menu_editor_wasm::compute_fit(
        1800.0,
        original,
        &Default::default(),
        &Default::default(),
    );
    let plan = ExportPlan::new(original, Some(&fit)).unwrap();
    assert_eq!((plan.output_width, plan.output_height), (2400, 3600));
}
