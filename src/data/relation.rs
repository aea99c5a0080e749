//! Weapon → attachment relationship data. Two schemas exist:
//! `indexmap.json` (one entry per weapon listing indexes or keys) and
//! `weapon_attachment_map.json` (one row per weapon/attachment pairing).

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data::coerce::null_as_empty;

pub const INDEX_MAP_FILE: &str = "indexmap.json";
pub const RELATION_MAP_FILE: &str = "weapon_attachment_map.json";

/// One `indexmap.json` entry. Array members are kept raw and coerced at join time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MappingEntry {
    pub weapon_key: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub attachment_indexes: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub attachment_keys: Vec<Value>,
}

/// One `weapon_attachment_map.json` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RelationRow {
    pub weapon_key: String,
    pub attachment_key: String,
    #[serde(default)]
    pub is_equippable: bool,
    #[serde(default)]
    pub default: bool,
    /// Per-pairing cost; replaces the attachment-level cost when joined.
    #[serde(default)]
    pub cost: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    IndexMap,
    Relation,
}

impl RelationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IndexMap => "index_map",
            Self::Relation => "relation",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::IndexMap => INDEX_MAP_FILE,
            Self::Relation => RELATION_MAP_FILE,
        }
    }

    /// The English name only participates in keyword search for index-map data.
    pub fn searches_english_name(&self) -> bool {
        matches!(self, Self::IndexMap)
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whichever relationship document the data directory provides.
#[derive(Debug, Clone, PartialEq)]
pub enum Relationships {
    IndexMap(Vec<MappingEntry>),
    Relation(Vec<RelationRow>),
}

impl Relationships {
    pub fn kind(&self) -> RelationKind {
        match self {
            Self::IndexMap(_) => RelationKind::IndexMap,
            Self::Relation(_) => RelationKind::Relation,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::IndexMap(entries) => entries.len(),
            Self::Relation(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
