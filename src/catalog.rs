//! Startup-loaded snapshot of the reference data.
//! Load once, share via Arc with the server handlers and CLI; never mutated afterwards.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::info;
use serde::Serialize;

use crate::data::{load_dataset, Dataset, LoadError, RelationKind, Relationships, Weapon};
use crate::lookup::index::AttachmentIndex;
use crate::lookup::join::{join, JoinOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeaponOption {
    pub key: String,
    pub label: String,
}

#[derive(Debug)]
pub struct Catalog {
    data_dir: PathBuf,
    weapons: Vec<Weapon>,
    attachments: AttachmentIndex,
    relationships: Relationships,
    categories: Vec<String>,
    loaded_at: String,
}

impl Catalog {
    /// Read all three documents from `data_dir`. Any read or parse failure fails the load.
    pub async fn load(data_dir: impl AsRef<Path>) -> Result<Arc<Catalog>, LoadError> {
        let data_dir = data_dir.as_ref();
        let dataset = load_dataset(data_dir).await?;
        let catalog = Catalog::from_dataset(data_dir, dataset);
        info!(
            "loaded {} weapons, {} attachments, {} {} entries from {}",
            catalog.weapons.len(),
            catalog.attachments.len(),
            catalog.relationships.len(),
            catalog.kind(),
            data_dir.display()
        );
        Ok(Arc::new(catalog))
    }

    pub fn from_dataset(data_dir: impl Into<PathBuf>, dataset: Dataset) -> Catalog {
        let Dataset {
            weapons,
            attachments,
            relationships,
        } = dataset;

        let categories = attachments
            .iter()
            .filter_map(|a| a.category.as_deref())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Catalog {
            data_dir: data_dir.into(),
            weapons,
            attachments: AttachmentIndex::new(attachments),
            relationships,
            categories,
            loaded_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn kind(&self) -> RelationKind {
        self.relationships.kind()
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn weapon_options(&self) -> Vec<WeaponOption> {
        self.weapons
            .iter()
            .map(|w| WeaponOption {
                key: w.weapon_key.clone(),
                label: w.label().to_string(),
            })
            .collect()
    }

    /// Sorted, deduplicated, non-empty categories across every attachment.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn attachments(&self) -> &AttachmentIndex {
        &self.attachments
    }

    pub fn relationships(&self) -> &Relationships {
        &self.relationships
    }

    pub fn loaded_at(&self) -> &str {
        &self.loaded_at
    }

    pub fn join(&self, weapon_key: &str) -> JoinOutcome {
        join(&self.relationships, &self.attachments, weapon_key)
    }
}
