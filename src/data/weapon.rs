use serde::{Deserialize, Serialize};

use crate::data::non_empty;

pub const WEAPONS_FILE: &str = "weapons.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Weapon {
    pub weapon_key: String,
    #[serde(rename = "NameJP", default)]
    pub name_jp: Option<String>,
    #[serde(rename = "NameEN", default)]
    pub name_en: Option<String>,
}

impl Weapon {
    /// Label shown in the weapon selector: localized name, else the key.
    pub fn label(&self) -> &str {
        non_empty(&self.name_jp).unwrap_or(&self.weapon_key)
    }
}
