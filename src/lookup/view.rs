//! Turn a view-state snapshot into the rows, options and status line shown to the user.
//! Rendering is a pure function of the catalog and the snapshot.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, WeaponOption};
use crate::data::RelationKind;
use crate::lookup::filter::FilterQuery;
use crate::lookup::join::JoinedRow;

pub const NO_MATCH: &str = "該当なし";
pub const COST_UNDER_INVESTIGATION: &str = "調査中";
pub const DEFAULT_MARKER: &str = "★ ";

/// Current values of the three controls, read once per render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ViewState {
    /// Empty selects the first weapon.
    #[serde(default, rename = "weapon")]
    pub weapon_key: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub keyword: String,
}

impl ViewState {
    pub fn new(
        weapon_key: impl Into<String>,
        category: impl Into<String>,
        keyword: impl Into<String>,
    ) -> Self {
        Self {
            weapon_key: weapon_key.into(),
            category: category.into(),
            keyword: keyword.into(),
        }
    }

    pub fn for_weapon(weapon_key: impl Into<String>) -> Self {
        Self::new(weapon_key, "", "")
    }
}

/// Receives the default-loadout names on each render under the relation schema.
pub trait LoadoutObserver {
    fn on_default_loadout(&self, names: &[String]);
}

impl<F> LoadoutObserver for F
where
    F: Fn(&[String]),
{
    fn on_default_loadout(&self, names: &[String]) {
        self(names)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub name: String,
    pub is_default: bool,
    pub category: String,
    pub cost: String,
    pub key: String,
}

impl TableRow {
    fn from_joined(row: &JoinedRow) -> Self {
        let attachment = &row.attachment;
        Self {
            name: attachment.display_name().to_string(),
            is_default: row.is_default,
            category: attachment.category().to_string(),
            cost: format_cost(attachment.cost),
            key: attachment.attachment_key.clone(),
        }
    }

    /// Name with the default marker prepended when the attachment is pre-equipped.
    pub fn label(&self) -> String {
        if self.is_default {
            format!("{DEFAULT_MARKER}{}", self.name)
        } else {
            self.name.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedView {
    pub strategy: RelationKind,
    pub selected_weapon: Option<String>,
    pub weapons: Vec<WeaponOption>,
    pub categories: Vec<String>,
    pub matched: bool,
    pub total: usize,
    pub shown: usize,
    pub rows: Vec<TableRow>,
    pub summary: String,
    pub default_loadout: Vec<String>,
}

impl RenderedView {
    /// Tab-separated table followed by the summary line.
    pub fn to_text_table(&self) -> String {
        let mut out = String::from("名前\tカテゴリ\tコスト\tキー\n");
        for row in &self.rows {
            let _ = writeln!(
                out,
                "{}\t{}\t{}\t{}",
                row.label(),
                row.category,
                row.cost,
                row.key
            );
        }
        out.push_str(&self.summary);
        out.push('\n');
        out
    }
}

/// `0` is the "under investigation" sentinel; absent cost renders empty.
pub fn format_cost(cost: Option<f64>) -> String {
    match cost {
        None => String::new(),
        Some(value) if value == 0.0 => COST_UNDER_INVESTIGATION.to_string(),
        Some(value) => value.to_string(),
    }
}

pub fn render(catalog: &Catalog, state: &ViewState) -> RenderedView {
    render_with(catalog, state, &|_: &[String]| {})
}

pub fn render_with<O>(catalog: &Catalog, state: &ViewState, observer: &O) -> RenderedView
where
    O: LoadoutObserver + ?Sized,
{
    let selected_weapon = if state.weapon_key.is_empty() {
        catalog.weapons().first().map(|w| w.weapon_key.clone())
    } else {
        Some(state.weapon_key.clone())
    };

    let kind = catalog.kind();
    let outcome = catalog.join(selected_weapon.as_deref().unwrap_or(""));
    if kind == RelationKind::Relation {
        observer.on_default_loadout(&outcome.default_loadout);
    }

    let query = FilterQuery::new(&state.category, &state.keyword);
    let rows: Vec<TableRow> = query
        .apply(&outcome.rows, kind.searches_english_name())
        .into_iter()
        .map(TableRow::from_joined)
        .collect();

    let total = outcome.rows.len();
    let shown = rows.len();
    let summary = match kind {
        RelationKind::IndexMap if !outcome.matched => NO_MATCH.to_string(),
        RelationKind::IndexMap => format!("総数: {total} / 表示: {shown}"),
        RelationKind::Relation => format!("装備可能: {total} / 表示: {shown}"),
    };

    RenderedView {
        strategy: kind,
        selected_weapon,
        weapons: catalog.weapon_options(),
        categories: catalog.categories().to_vec(),
        matched: outcome.matched,
        total,
        shown,
        rows,
        summary,
        default_loadout: outcome.default_loadout,
    }
}
