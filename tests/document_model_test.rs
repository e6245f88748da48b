// Editing the menu document and what ends up in the rendered output

use menu_editor_wasm::config::EditorConfig;
use menu_editor_wasm::error::MenuError;
use menu_editor_wasm::models::{EditorState, MenuDocument, MenuItem, Section, SpacingParameters};

fn lunch() -> MenuDocument {
    let mut doc = MenuDocument::empty();
    doc.sections.push(Section::with_items(
        "Soups",
        vec![MenuItem::new("Tomato", "4.50", "2.30")],
    ));
    doc.sections.push(Section::with_items(
        "Mains",
        vec![
            MenuItem::new("Goulash", "9.80", "5"),
            MenuItem::new("Schnitzel", "11.70", "6"),
        ],
    ));
    doc
}

#[test]
fn test_removing_only_item_hides_section_but_keeps_it_editable() {
    let mut doc = lunch();

    doc.remove_item(0, 0).unwrap();

    assert_eq!(doc.sections.len(), 2, "section must stay in the editable document");
    assert_eq!(doc.sections[0].title, "Soups");
    let rendered = doc.rendered_sections();
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].title, "Mains");
    assert_eq!(rendered[0].section_index, 1);
}

#[test]
fn test_blank_item_hides_section_but_stays_in_sequence() {
    let mut doc = lunch();

    doc.set_item_name(0, 0, "   ").unwrap();

    assert_eq!(doc.sections[0].items.len(), 1, "empty item remains editable");
    let rendered = doc.rendered_sections();
    assert!(rendered.iter().all(|s| s.section_index != 0));

    // Naming the item again brings the section back
    doc.set_item_name(0, 0, "Lentil").unwrap();
    assert_eq!(doc.rendered_sections().len(), 2);
}

#[test]
fn test_rendered_items_keep_editable_indices() {
    let mut doc = lunch();
    doc.set_item_name(1, 0, "").unwrap();

    let rendered = doc.rendered_sections();
    let mains = &rendered[1];
    assert_eq!(mains.items.len(), 1);
    assert_eq!(mains.items[0].0, 1);
    assert_eq!(mains.items[0].1.name, "Schnitzel");
}

#[test]
fn test_out_of_range_indices_are_errors() {
    let mut doc = lunch();

    assert!(matches!(
        doc.remove_section(5),
        Err(MenuError::SectionOutOfBounds { index: 5, len: 2 })
    ));
    assert!(matches!(
        doc.set_item_name(1, 9, "x"),
        Err(MenuError::ItemOutOfBounds { section: 1, index: 9, len: 2 })
    ));
    assert!(doc.move_item(0, 0, 3).is_err());
    // Failed edits leave the document untouched
    assert_eq!(doc, lunch());
}

#[test]
fn test_prices_clear_on_empty_input() {
    let mut doc = lunch();
    doc.set_item_prices(1, 1, "", " 6 ").unwrap();

    let item = &doc.sections[1].items[1];
    assert_eq!(item.primary_price, None);
    assert!(item.secondary_price.is_some());
}

#[test]
fn test_display_list_follows_edits() {
    let mut state = EditorState::new(EditorConfig::default(), SpacingParameters::default());
    state
        .edit_document(|doc| {
            *doc = lunch();
            doc.set_show_date(true);
            doc.set_menu_date("17.10.2026");
            Ok(())
        })
        .unwrap();

    let list = state.display_list();
    assert_eq!(list.sections.len(), 2);
    assert_eq!(list.header.date.as_deref(), Some("17.10.2026"));
    assert_eq!(list.sections[1].items[0].name, "Goulash");
    assert!(list.sections[1].items[0].price_label.is_some());

    state
        .edit_document(|doc| doc.remove_item(0, 0).map(|_| ()))
        .unwrap();
    assert_eq!(state.display_list().sections.len(), 1);
}

#[test]
fn test_document_json_uses_camel_case() {
    let mut doc = lunch();
    doc.show_date = true;
    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(json["showDate"], true);
    assert!(json["sections"][0]["items"][0].get("primaryPrice").is_some());

    let back: MenuDocument = serde_json::from_value(json).unwrap();
    assert_eq!(back, doc);
}
