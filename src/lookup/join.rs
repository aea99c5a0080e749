//! Resolve the attachments applicable to one weapon through whichever relationship
//! schema the catalog was loaded with.

use log::debug;
use serde::Serialize;

use crate::data::coerce::{coerce_index, coerce_key};
use crate::data::{Attachment, MappingEntry, RelationRow, Relationships};
use crate::lookup::index::AttachmentIndex;

/// An attachment as it applies to the selected weapon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinedRow {
    /// Attachment record; under the relation schema its cost is the pairing's cost.
    pub attachment: Attachment,
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct JoinOutcome {
    /// False only when the index map has no entry for the weapon.
    pub matched: bool,
    pub rows: Vec<JoinedRow>,
    /// Display names of the pre-equipped attachments (relation schema only).
    pub default_loadout: Vec<String>,
}

impl JoinOutcome {
    pub fn unmatched() -> Self {
        Self::default()
    }
}

pub fn join(relationships: &Relationships, index: &AttachmentIndex, weapon_key: &str) -> JoinOutcome {
    match relationships {
        Relationships::IndexMap(entries) => join_index_map(entries, index, weapon_key),
        Relationships::Relation(rows) => join_relation(rows, index, weapon_key),
    }
}

fn join_index_map(entries: &[MappingEntry], index: &AttachmentIndex, weapon_key: &str) -> JoinOutcome {
    let Some(entry) = entries.iter().find(|entry| entry.weapon_key == weapon_key) else {
        debug!("no index map entry for weapon '{weapon_key}'");
        return JoinOutcome::unmatched();
    };

    // Index array takes precedence over the key array when both are present.
    let resolved: Vec<&Attachment> = if !entry.attachment_indexes.is_empty() {
        entry
            .attachment_indexes
            .iter()
            .filter_map(|raw| coerce_index(raw).and_then(|i| index.by_number(i)))
            .collect()
    } else {
        entry
            .attachment_keys
            .iter()
            .filter_map(|raw| coerce_key(raw).and_then(|key| index.by_key(&key)))
            .collect()
    };

    let listed = entry.attachment_indexes.len().max(entry.attachment_keys.len());
    if resolved.len() < listed {
        debug!(
            "weapon '{weapon_key}': {} of {listed} attachment references unresolved",
            listed - resolved.len()
        );
    }

    JoinOutcome {
        matched: true,
        rows: resolved
            .into_iter()
            .map(|attachment| JoinedRow {
                attachment: attachment.clone(),
                is_default: false,
            })
            .collect(),
        default_loadout: Vec::new(),
    }
}

fn join_relation(rows: &[RelationRow], index: &AttachmentIndex, weapon_key: &str) -> JoinOutcome {
    let equipped: Vec<&RelationRow> = rows
        .iter()
        .filter(|row| row.weapon_key == weapon_key && row.is_equippable)
        .collect();

    let default_loadout = equipped
        .iter()
        .filter(|row| row.default)
        .map(|row| {
            index
                .by_key(&row.attachment_key)
                .map(Attachment::localized_name)
                .unwrap_or(&row.attachment_key)
                .to_string()
        })
        .collect();

    let joined: Vec<JoinedRow> = equipped
        .iter()
        .filter_map(|row| {
            let attachment = index.by_key(&row.attachment_key)?;
            let mut merged = attachment.clone();
            merged.cost = row.cost;
            Some(JoinedRow {
                attachment: merged,
                is_default: row.default,
            })
        })
        .collect();

    if joined.len() < equipped.len() {
        debug!(
            "weapon '{weapon_key}': {} equippable rows reference unknown attachments",
            equipped.len() - joined.len()
        );
    }

    JoinOutcome {
        matched: true,
        rows: joined,
        default_loadout,
    }
}
