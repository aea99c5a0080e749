use std::cell::RefCell;

use loadout::catalog::Catalog;
use loadout::data::{Dataset, Relationships};
use loadout::lookup::view::{render, render_with, ViewState, NO_MATCH};
use serde_json::json;

fn relation_catalog() -> Catalog {
    let dataset = Dataset {
        weapons: serde_json::from_value(json!([
            {"WeaponKey": "W1", "NameJP": "小銃"},
            {"WeaponKey": "W2", "NameJP": "拳銃"}
        ]))
        .expect("weapons should parse"),
        attachments: serde_json::from_value(json!([
            {"AttachmentKey": "A1", "NameJP": "照準器", "Category": "Optics"},
            {"AttachmentKey": "A2", "NameJP": "銃床", "Category": "Stock"}
        ]))
        .expect("attachments should parse"),
        relationships: Relationships::Relation(
            serde_json::from_value(json!([
                {"WeaponKey": "W1", "AttachmentKey": "A1", "IsEquippable": true, "Default": true, "Cost": 0},
                {"WeaponKey": "W1", "AttachmentKey": "A2", "IsEquippable": false}
            ]))
            .expect("relation rows should parse"),
        ),
    };
    Catalog::from_dataset("unused", dataset)
}

fn index_map_catalog() -> Catalog {
    let dataset = Dataset {
        weapons: serde_json::from_value(json!([
            {"WeaponKey": "W1", "NameJP": "小銃"},
            {"WeaponKey": "W2", "NameJP": "拳銃"},
            {"WeaponKey": "W3", "NameJP": "散弾銃"}
        ]))
        .expect("weapons should parse"),
        attachments: serde_json::from_value(json!([
            {"Index": "3", "AttachmentKey": "A3", "NameJP": "照準器", "NameEN": "Scope", "Category": "optics", "Cost": 5},
            {"Index": 4, "AttachmentKey": "A4", "NameJP": "銃床", "NameEN": "Stock", "Category": "Stock", "Cost": null},
            {"Index": 5, "AttachmentKey": "A5", "NameEN": "Grip", "Category": "Grip", "Cost": 0}
        ]))
        .expect("attachments should parse"),
        relationships: Relationships::IndexMap(
            serde_json::from_value(json!([
                {"WeaponKey": "W1", "AttachmentIndexes": [3, 4, 5]},
                {"WeaponKey": "W2", "AttachmentKeys": ["A5", "A3"]}
            ]))
            .expect("mapping should parse"),
        ),
    };
    Catalog::from_dataset("unused", dataset)
}

#[test]
fn relation_scenario_yields_single_default_row_and_notifies_hook() {
    let catalog = relation_catalog();
    let received: RefCell<Vec<Vec<String>>> = RefCell::new(Vec::new());

    let view = render_with(&catalog, &ViewState::for_weapon("W1"), &|names: &[String]| {
        received.borrow_mut().push(names.to_vec());
    });

    assert_eq!(view.rows.len(), 1);
    let row = &view.rows[0];
    assert_eq!(row.key, "A1");
    assert_eq!(row.cost, "調査中");
    assert!(row.is_default);
    assert_eq!(row.label(), "★ 照準器");
    assert_eq!(received.into_inner(), vec![vec!["照準器".to_string()]]);
    assert_eq!(view.summary, "装備可能: 1 / 表示: 1");
}

#[test]
fn weapon_without_relation_rows_is_empty() {
    let catalog = relation_catalog();
    let view = render(&catalog, &ViewState::for_weapon("W2"));
    assert!(view.rows.is_empty());
    assert_eq!(view.total, 0);
    assert_eq!(view.summary, "装備可能: 0 / 表示: 0");
}

#[test]
fn weapon_without_mapping_entry_shows_no_match() {
    let catalog = index_map_catalog();
    let view = render(&catalog, &ViewState::for_weapon("W3"));
    assert!(!view.matched);
    assert!(view.rows.is_empty());
    assert_eq!(view.summary, NO_MATCH);
}

#[test]
fn unknown_weapon_key_shows_no_match() {
    let catalog = index_map_catalog();
    let view = render(&catalog, &ViewState::for_weapon("missing"));
    assert_eq!(view.total, 0);
    assert_eq!(view.summary, NO_MATCH);
}

#[test]
fn index_map_hook_is_never_called() {
    let catalog = index_map_catalog();
    let calls = RefCell::new(0);
    let _ = render_with(&catalog, &ViewState::for_weapon("W1"), &|_: &[String]| {
        *calls.borrow_mut() += 1;
    });
    assert_eq!(calls.into_inner(), 0);
}

#[test]
fn string_and_numeric_indexes_resolve_identically() {
    let catalog = index_map_catalog();
    assert_eq!(
        catalog.attachments().by_number(3).map(|a| a.attachment_key.as_str()),
        Some("A3")
    );
    let view = render(&catalog, &ViewState::for_weapon("W1"));
    let keys: Vec<&str> = view.rows.iter().map(|row| row.key.as_str()).collect();
    assert_eq!(keys, vec!["A3", "A4", "A5"]);
}

#[test]
fn cost_text_distinguishes_zero_null_and_value() {
    let catalog = index_map_catalog();
    let view = render(&catalog, &ViewState::for_weapon("W1"));
    let costs: Vec<&str> = view.rows.iter().map(|row| row.cost.as_str()).collect();
    assert_eq!(costs, vec!["5", "", "調査中"]);
    assert_eq!(view.summary, "総数: 3 / 表示: 3");
}

#[test]
fn category_filter_ignores_case() {
    let catalog = index_map_catalog();
    let view = render(&catalog, &ViewState::new("W1", "Optics", ""));
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].key, "A3");
    assert_eq!(view.summary, "総数: 3 / 表示: 1");
}

#[test]
fn keyword_matches_anywhere_in_the_name() {
    let catalog = index_map_catalog();
    let view = render(&catalog, &ViewState::new("W1", "", "準"));
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].name, "照準器");

    let english = render(&catalog, &ViewState::new("W1", "", "GRIP"));
    assert_eq!(english.rows.len(), 1);
    assert_eq!(english.rows[0].name, "Grip");
}

#[test]
fn key_array_order_is_preserved() {
    let catalog = index_map_catalog();
    let view = render(&catalog, &ViewState::for_weapon("W2"));
    let keys: Vec<&str> = view.rows.iter().map(|row| row.key.as_str()).collect();
    assert_eq!(keys, vec!["A5", "A3"]);
}

#[test]
fn empty_selection_defaults_to_first_weapon() {
    let catalog = index_map_catalog();
    let view = render(&catalog, &ViewState::default());
    assert_eq!(view.selected_weapon.as_deref(), Some("W1"));
    assert_eq!(view.total, 3);
}

#[test]
fn rendering_twice_is_idempotent() {
    let catalog = relation_catalog();
    let state = ViewState::new("W1", "optics", "照");
    assert_eq!(render(&catalog, &state), render(&catalog, &state));
}

#[test]
fn text_table_lists_rows_then_summary() {
    let catalog = relation_catalog();
    let table = render(&catalog, &ViewState::for_weapon("W1")).to_text_table();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines[0], "名前\tカテゴリ\tコスト\tキー");
    assert_eq!(lines[1], "★ 照準器\tOptics\t調査中\tA1");
    assert_eq!(lines[2], "装備可能: 1 / 表示: 1");
}
