//! Attachment records (`attachments.json`).
//! `Index` is the legacy numeric id; `AttachmentKey` is the current string id.

use serde::{Deserialize, Serialize};

use crate::data::coerce::lenient_index;
use crate::data::non_empty;

pub const ATTACHMENTS_FILE: &str = "attachments.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Attachment {
    /// Numeric id; string-typed values in source data are coerced on load.
    #[serde(default, deserialize_with = "lenient_index")]
    pub index: Option<i64>,
    pub attachment_key: String,
    #[serde(rename = "NameJP", default)]
    pub name_jp: Option<String>,
    #[serde(rename = "NameEN", default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// `Some(0.0)` means the cost is still under investigation, which is not the same as `None`.
    #[serde(default)]
    pub cost: Option<f64>,
}

impl Attachment {
    /// Table label: localized name, else English name, else the raw key.
    pub fn display_name(&self) -> &str {
        non_empty(&self.name_jp)
            .or_else(|| non_empty(&self.name_en))
            .unwrap_or(&self.attachment_key)
    }

    /// Name used in the default loadout list: localized name, else the raw key.
    pub fn localized_name(&self) -> &str {
        non_empty(&self.name_jp).unwrap_or(&self.attachment_key)
    }

    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_string_and_numeric_index() {
        let parsed: Vec<Attachment> = serde_json::from_str(
            r#"[
                {"Index": 3, "AttachmentKey": "A", "NameJP": "照準器", "Category": "Optics", "Cost": 0},
                {"Index": "4", "AttachmentKey": "B", "Cost": null},
                {"AttachmentKey": "C", "Index": "n/a"}
            ]"#,
        )
        .expect("attachments should parse");

        assert_eq!(parsed[0].index, Some(3));
        assert_eq!(parsed[0].cost, Some(0.0));
        assert_eq!(parsed[1].index, Some(4));
        assert_eq!(parsed[1].cost, None);
        assert_eq!(parsed[2].index, None);
        assert_eq!(parsed[2].category(), "");
    }

    #[test]
    fn display_name_falls_back_to_english_then_key() {
        let mut attachment: Attachment =
            serde_json::from_str(r#"{"AttachmentKey": "muzzle_01", "NameJP": "", "NameEN": "Muzzle"}"#)
                .expect("attachment should parse");
        assert_eq!(attachment.display_name(), "Muzzle");
        assert_eq!(attachment.localized_name(), "muzzle_01");

        attachment.name_en = None;
        assert_eq!(attachment.display_name(), "muzzle_01");
    }
}
