pub mod attachment;
pub mod coerce;
pub mod loader;
pub mod relation;
pub mod validate;
pub mod weapon;

pub use attachment::Attachment;
pub use loader::{load_dataset, Dataset, LoadError};
pub use relation::{MappingEntry, RelationKind, RelationRow, Relationships};
pub use weapon::Weapon;

/// Source data uses empty strings and missing fields interchangeably for names.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
