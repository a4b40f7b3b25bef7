//! Composite item keys.

use std::fmt;

use crate::attribute_value::AttributeValue;
use crate::types::Item;

/// A composite primary key identifying at most one item in a table.
///
/// Both key attributes carry string values; that matches the tables this
/// utility targets (date-keyed partitions, UUID sort keys). The `Display`
/// form (`"tournamentId: 2024-12-15, userId: 12ab..."`) feeds the lookup
/// status lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemKey {
    partition: KeyPart,
    sort: Option<KeyPart>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct KeyPart {
    name: String,
    value: String,
}

impl ItemKey {
    /// Create a key with only a partition attribute.
    pub fn new(partition_name: impl Into<String>, partition_value: impl Into<String>) -> Self {
        Self {
            partition: KeyPart {
                name: partition_name.into(),
                value: partition_value.into(),
            },
            sort: None,
        }
    }

    /// Add a sort attribute, completing a composite key.
    #[must_use]
    pub fn with_sort(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.sort = Some(KeyPart {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// The partition attribute as `(name, value)`.
    #[must_use]
    pub fn partition(&self) -> (&str, &str) {
        (&self.partition.name, &self.partition.value)
    }

    /// The sort attribute as `(name, value)`, if present.
    #[must_use]
    pub fn sort(&self) -> Option<(&str, &str)> {
        self.sort.as_ref().map(|p| (p.name.as_str(), p.value.as_str()))
    }

    /// The attribute map handed to the store's point-read call.
    #[must_use]
    pub fn to_attribute_map(&self) -> Item {
        let mut map = Item::new();
        map.insert(
            self.partition.name.clone(),
            AttributeValue::S(self.partition.value.clone()),
        );
        if let Some(sort) = &self.sort {
            map.insert(sort.name.clone(), AttributeValue::S(sort.value.clone()));
        }
        map
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.partition.name, self.partition.value)?;
        if let Some(sort) = &self.sort {
            write!(f, ", {}: {}", sort.name, sort.value)?;
        }
        Ok(())
    }
}
