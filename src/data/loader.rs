//! Load the weapon, attachment and relationship documents from a data directory.
//! All three are read fresh on every call and concurrently; any failure fails the whole load.

use std::path::{Path, PathBuf};

use log::debug;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::data::attachment::{Attachment, ATTACHMENTS_FILE};
use crate::data::relation::{RelationKind, Relationships};
use crate::data::weapon::{Weapon, WEAPONS_FILE};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "no relationship data in {}: expected weapon_attachment_map.json or indexmap.json",
        .dir.display()
    )]
    MissingRelationData { dir: PathBuf },
}

/// Everything read from one data directory, before indexing.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub weapons: Vec<Weapon>,
    pub attachments: Vec<Attachment>,
    pub relationships: Relationships,
}

pub async fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let parsed = serde_json::from_str(&raw).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded {}", path.display());
    Ok(parsed)
}

/// Pick the relationship schema by which file exists. Pairing rows win over the index map.
pub async fn detect_relation_kind(dir: &Path) -> Option<RelationKind> {
    for kind in [RelationKind::Relation, RelationKind::IndexMap] {
        let candidate = dir.join(kind.file_name());
        if tokio::fs::try_exists(&candidate).await.unwrap_or(false) {
            return Some(kind);
        }
    }
    None
}

async fn load_relationships(dir: &Path, kind: RelationKind) -> Result<Relationships, LoadError> {
    let path = dir.join(kind.file_name());
    match kind {
        RelationKind::IndexMap => Ok(Relationships::IndexMap(load_json(&path).await?)),
        RelationKind::Relation => Ok(Relationships::Relation(load_json(&path).await?)),
    }
}

pub async fn load_dataset(dir: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let dir = dir.as_ref();
    let kind = detect_relation_kind(dir)
        .await
        .ok_or_else(|| LoadError::MissingRelationData {
            dir: dir.to_path_buf(),
        })?;

    let weapons_path = dir.join(WEAPONS_FILE);
    let attachments_path = dir.join(ATTACHMENTS_FILE);
    let (weapons, attachments, relationships) = tokio::try_join!(
        load_json::<Vec<Weapon>>(&weapons_path),
        load_json::<Vec<Attachment>>(&attachments_path),
        load_relationships(dir, kind),
    )?;

    Ok(Dataset {
        weapons,
        attachments,
        relationships,
    })
}
