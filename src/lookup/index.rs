//! O(1) lookup structures over the attachments collection.

use std::collections::HashMap;
use std::hash::Hash;

use crate::data::Attachment;

/// Map each item's numeric key to its position. Items whose key is `None` are skipped;
/// on duplicate keys the later item wins.
pub fn build_index_by_number<T, F>(items: &[T], field: F) -> HashMap<i64, usize>
where
    F: Fn(&T) -> Option<i64>,
{
    let mut index = HashMap::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        if let Some(key) = field(item) {
            index.insert(key, position);
        }
    }
    index
}

/// Map each item's key, used as-is, to its position. Later duplicates win.
pub fn build_index_by_key<T, K, F>(items: &[T], field: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    items
        .iter()
        .enumerate()
        .map(|(position, item)| (field(item), position))
        .collect()
}

/// Attachments addressable both by legacy `Index` and by `AttachmentKey`.
#[derive(Debug, Clone)]
pub struct AttachmentIndex {
    attachments: Vec<Attachment>,
    by_number: HashMap<i64, usize>,
    by_key: HashMap<String, usize>,
}

impl AttachmentIndex {
    pub fn new(attachments: Vec<Attachment>) -> Self {
        let by_number = build_index_by_number(&attachments, |a| a.index);
        let by_key = build_index_by_key(&attachments, |a| a.attachment_key.clone());
        Self {
            attachments,
            by_number,
            by_key,
        }
    }

    pub fn by_number(&self, index: i64) -> Option<&Attachment> {
        self.by_number
            .get(&index)
            .and_then(|&position| self.attachments.get(position))
    }

    pub fn by_key(&self, key: &str) -> Option<&Attachment> {
        self.by_key
            .get(key)
            .and_then(|&position| self.attachments.get(position))
    }

    /// All attachments in source order, duplicates included.
    pub fn all(&self) -> &[Attachment] {
        &self.attachments
    }

    pub fn len(&self) -> usize {
        self.attachments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attachments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Vec<Attachment> {
        serde_json::from_str(raw).expect("fixture should parse")
    }

    #[test]
    fn number_lookup_ignores_source_type() {
        let index = AttachmentIndex::new(parse(
            r#"[{"Index": "3", "AttachmentKey": "as_string"}, {"Index": 4, "AttachmentKey": "as_number"}]"#,
        ));
        assert_eq!(index.by_number(3).map(|a| a.attachment_key.as_str()), Some("as_string"));
        assert_eq!(index.by_number(4).map(|a| a.attachment_key.as_str()), Some("as_number"));
        assert!(index.by_number(5).is_none());
    }

    #[test]
    fn later_duplicates_shadow_earlier_entries() {
        let index = AttachmentIndex::new(parse(
            r#"[
                {"Index": 1, "AttachmentKey": "A", "NameJP": "first"},
                {"Index": 1, "AttachmentKey": "A", "NameJP": "second"}
            ]"#,
        ));
        assert_eq!(index.len(), 2);
        assert_eq!(index.by_key("A").and_then(|a| a.name_jp.as_deref()), Some("second"));
        assert_eq!(index.by_number(1).and_then(|a| a.name_jp.as_deref()), Some("second"));
    }

    #[test]
    fn generic_builders_work_over_any_records() {
        let pairs = [("x", 1_i64), ("y", 2), ("x", 3)];
        let by_key = build_index_by_key(&pairs, |p| p.0);
        assert_eq!(by_key.get("x"), Some(&2));
        let by_number = build_index_by_number(&pairs, |p| Some(p.1 * 10));
        assert_eq!(by_number.get(&30), Some(&2));
    }
}
