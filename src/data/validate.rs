//! Presence-only reference check over a loaded dataset: missing ids, duplicate keys,
//! and relationship entries that point at nothing. Lookups silently tolerate all of these;
//! this report exists so data maintainers can see them.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::data::coerce::{coerce_index, coerce_key};
use crate::data::loader::Dataset;
use crate::data::relation::Relationships;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.count(ValidationSeverity::Error) > 0
    }

    /// Errors or warnings; info diagnostics alone do not count.
    pub fn has_problems(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity != ValidationSeverity::Info)
    }

    pub fn count(&self, severity: ValidationSeverity) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == severity)
            .count()
    }
}

pub fn check_references(dataset: &Dataset) -> ValidationReport {
    let mut report = ValidationReport::default();

    let mut weapon_keys = HashSet::new();
    for (position, weapon) in dataset.weapons.iter().enumerate() {
        let context = format!("weapons[{position}]");
        if weapon.weapon_key.trim().is_empty() {
            report.push(ValidationSeverity::Error, context, "missing non-empty 'WeaponKey'");
        } else if !weapon_keys.insert(weapon.weapon_key.as_str()) {
            report.push(
                ValidationSeverity::Warning,
                context,
                format!("duplicate WeaponKey '{}'", weapon.weapon_key),
            );
        }
    }

    let mut attachment_keys = HashSet::new();
    let mut attachment_indexes: HashMap<i64, &str> = HashMap::new();
    for (position, attachment) in dataset.attachments.iter().enumerate() {
        let context = format!("attachments[{position}]");
        let key = attachment.attachment_key.as_str();
        if key.trim().is_empty() {
            report.push(
                ValidationSeverity::Error,
                context.clone(),
                "missing non-empty 'AttachmentKey'",
            );
        } else if !attachment_keys.insert(key) {
            report.push(
                ValidationSeverity::Warning,
                context.clone(),
                format!("duplicate AttachmentKey '{key}' shadows an earlier entry"),
            );
        }

        match attachment.index {
            Some(index) => {
                if let Some(previous) = attachment_indexes.insert(index, key) {
                    report.push(
                        ValidationSeverity::Warning,
                        context,
                        format!("duplicate Index {index} ('{key}' shadows '{previous}')"),
                    );
                }
            }
            None => report.push(
                ValidationSeverity::Info,
                context,
                format!("'{key}' has no numeric Index and is reachable by key only"),
            ),
        }
    }

    match &dataset.relationships {
        Relationships::IndexMap(entries) => {
            for (position, entry) in entries.iter().enumerate() {
                let context = format!("indexmap[{position}] weapon='{}'", entry.weapon_key);
                check_weapon(&mut report, &context, &entry.weapon_key, &weapon_keys);
                if !entry.attachment_indexes.is_empty() {
                    for raw in &entry.attachment_indexes {
                        let resolved = coerce_index(raw)
                            .map_or(false, |index| attachment_indexes.contains_key(&index));
                        if !resolved {
                            report.push(
                                ValidationSeverity::Warning,
                                context.clone(),
                                format!("unknown attachment index {raw}"),
                            );
                        }
                    }
                } else if !entry.attachment_keys.is_empty() {
                    for raw in &entry.attachment_keys {
                        let resolved = coerce_key(raw)
                            .map_or(false, |key| attachment_keys.contains(key.as_str()));
                        if !resolved {
                            report.push(
                                ValidationSeverity::Warning,
                                context.clone(),
                                format!("unknown attachment key {raw}"),
                            );
                        }
                    }
                } else {
                    report.push(ValidationSeverity::Info, context, "entry lists no attachments");
                }
            }
        }
        Relationships::Relation(rows) => {
            for (position, row) in rows.iter().enumerate() {
                let context = format!("relation[{position}] weapon='{}'", row.weapon_key);
                check_weapon(&mut report, &context, &row.weapon_key, &weapon_keys);
                if !attachment_keys.contains(row.attachment_key.as_str()) {
                    report.push(
                        ValidationSeverity::Warning,
                        context.clone(),
                        format!("unknown attachment key '{}'", row.attachment_key),
                    );
                }
                if row.default && !row.is_equippable {
                    report.push(
                        ValidationSeverity::Info,
                        context,
                        format!(
                            "'{}' is marked Default but not equippable and is never shown",
                            row.attachment_key
                        ),
                    );
                }
            }
        }
    }

    report
}

fn check_weapon(
    report: &mut ValidationReport,
    context: &str,
    weapon_key: &str,
    weapon_keys: &HashSet<&str>,
) {
    if !weapon_keys.contains(weapon_key) {
        report.push(
            ValidationSeverity::Warning,
            context,
            format!("unknown weapon '{weapon_key}'"),
        );
    }
}
