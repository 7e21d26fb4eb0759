//! Trivia category value types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A question category such as "Science" or "Art".
///
/// Categories are read-only from this system's perspective; they are seeded
/// by migration and never created or mutated through the HTTP surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    /// Store identifier.
    #[schema(example = 1)]
    pub id: i32,
    /// Display label (the `type` column in the store).
    #[schema(example = "Science")]
    pub kind: String,
}

/// Categories keyed by identifier, as exposed by the HTTP surface.
///
/// Serializes as a JSON object whose keys are the identifiers rendered as
/// strings, e.g. `{"1": "Science", "2": "Art"}`. A `BTreeMap` keeps the key
/// order deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(value_type = std::collections::BTreeMap<String, String>)]
pub struct CategoryMap(BTreeMap<i32, String>);

impl CategoryMap {
    /// True when no categories are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of categories in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Look up a category label by identifier.
    #[must_use]
    pub fn label(&self, id: i32) -> Option<&str> {
        self.0.get(&id).map(String::as_str)
    }
}

impl FromIterator<Category> for CategoryMap {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|category| (category.id, category.kind))
                .collect(),
        )
    }
}

impl From<Vec<Category>> for CategoryMap {
    fn from(categories: Vec<Category>) -> Self {
        categories.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn science_and_art() -> Vec<Category> {
        vec![
            Category {
                id: 1,
                kind: "Science".into(),
            },
            Category {
                id: 2,
                kind: "Art".into(),
            },
        ]
    }

    #[rstest]
    fn serializes_as_id_keyed_object() {
        let map = CategoryMap::from(science_and_art());
        let value = serde_json::to_value(&map).expect("serializable map");
        assert_eq!(
            value,
            serde_json::json!({ "1": "Science", "2": "Art" })
        );
    }

    #[rstest]
    fn label_lookup_by_identifier() {
        let map = CategoryMap::from(science_and_art());
        assert_eq!(map.label(1), Some("Science"));
        assert_eq!(map.label(9), None);
        assert_eq!(map.len(), 2);
        assert!(!map.is_empty());
    }
}
