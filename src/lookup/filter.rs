use crate::data::Attachment;
use crate::lookup::join::JoinedRow;

/// Category and keyword filter, already trimmed and lowercased. Empty means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    category: String,
    keyword: String,
}

impl FilterQuery {
    pub fn new(category: &str, keyword: &str) -> Self {
        Self {
            category: category.trim().to_lowercase(),
            keyword: keyword.trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_empty() && self.keyword.is_empty()
    }

    pub fn matches_category(&self, attachment: &Attachment) -> bool {
        self.category.is_empty() || attachment.category().to_lowercase() == self.category
    }

    /// Substring match over localized name, optionally English name, and key.
    pub fn matches_keyword(&self, attachment: &Attachment, include_english: bool) -> bool {
        if self.keyword.is_empty() {
            return true;
        }
        let mut haystack = attachment.name_jp.clone().unwrap_or_default();
        if include_english {
            haystack.push(' ');
            haystack.push_str(attachment.name_en.as_deref().unwrap_or(""));
        }
        haystack.push(' ');
        haystack.push_str(&attachment.attachment_key);
        haystack.to_lowercase().contains(&self.keyword)
    }

    pub fn matches(&self, attachment: &Attachment, include_english: bool) -> bool {
        self.matches_category(attachment) && self.matches_keyword(attachment, include_english)
    }

    pub fn apply<'a>(&self, rows: &'a [JoinedRow], include_english: bool) -> Vec<&'a JoinedRow> {
        rows.iter()
            .filter(|row| self.matches(&row.attachment, include_english))
            .collect()
    }
}
