//! Trivia categories.
//!
//! Categories are read-only from the service's point of view: the store is
//! seeded with them and questions reference them by id.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by the category constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryValidationError {
    /// Category ids are positive; `0` is reserved for "all categories".
    #[error("category id must be a positive integer, got {value}")]
    InvalidId {
        /// Rejected raw value.
        value: i64,
    },
    /// The display label was blank.
    #[error("category type must not be empty")]
    EmptyLabel,
}

/// Store-assigned category identifier.
///
/// ## Invariants
/// - Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i32")]
pub struct CategoryId(i32);

impl CategoryId {
    /// Validate and wrap a raw identifier.
    pub fn new(value: i64) -> Result<Self, CategoryValidationError> {
        i32::try_from(value)
            .ok()
            .filter(|id| *id > 0)
            .map(Self)
            .ok_or(CategoryValidationError::InvalidId { value })
    }

    /// Return the raw identifier.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i64> for CategoryId {
    type Error = CategoryValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryId> for i32 {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A trivia category such as "Science" or "History".
///
/// Serialised as `{"id": 1, "type": "Science"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CategoryDto", into = "CategoryDto")]
pub struct Category {
    id: CategoryId,
    label: String,
}

impl Category {
    /// Validate and construct a category.
    pub fn new(id: CategoryId, label: impl Into<String>) -> Result<Self, CategoryValidationError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(CategoryValidationError::EmptyLabel);
        }
        Ok(Self { id, label })
    }

    /// Category identifier.
    pub fn id(&self) -> CategoryId {
        self.id
    }

    /// Display label (the `type` field on the wire).
    pub fn label(&self) -> &str {
        self.label.as_str()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CategoryDto {
    id: CategoryId,
    #[serde(rename = "type")]
    label: String,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            id: value.id,
            label: value.label,
        }
    }
}

impl TryFrom<CategoryDto> for Category {
    type Error = CategoryValidationError;

    fn try_from(value: CategoryDto) -> Result<Self, Self::Error> {
        Self::new(value.id, value.label)
    }
}

/// Ordered mapping from category id to display label.
///
/// Serialises as a JSON object keyed by the stringified id, the shape the
/// trivia client renders its category sidebar from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryMap(BTreeMap<CategoryId, String>);

impl CategoryMap {
    /// Number of categories.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up a label by id.
    pub fn label(&self, id: CategoryId) -> Option<&str> {
        self.0.get(&id).map(String::as_str)
    }

    /// Iterate over `(id, label)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryId, &str)> {
        self.0.iter().map(|(id, label)| (*id, label.as_str()))
    }
}

impl<'a> FromIterator<&'a Category> for CategoryMap {
    fn from_iter<I: IntoIterator<Item = &'a Category>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|category| (category.id, category.label.clone()))
                .collect(),
        )
    }
}

/// Labels the store is seeded with when it holds no categories, in id order.
pub const DEFAULT_CATEGORY_LABELS: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn category(id: i64, label: &str) -> Category {
        Category::new(CategoryId::new(id).expect("valid id"), label).expect("valid category")
    }

    #[rstest]
    #[case(0)]
    #[case(-4)]
    #[case(i64::from(i32::MAX) + 1)]
    fn category_id_rejects_out_of_range_values(#[case] raw: i64) {
        assert_eq!(
            CategoryId::new(raw),
            Err(CategoryValidationError::InvalidId { value: raw })
        );
    }

    #[rstest]
    fn category_rejects_blank_label() {
        let id = CategoryId::new(1).expect("valid id");
        assert_eq!(
            Category::new(id, "  "),
            Err(CategoryValidationError::EmptyLabel)
        );
    }

    #[rstest]
    fn category_serialises_label_as_type() {
        let value = serde_json::to_value(category(2, "Art")).expect("serialise category");
        assert_eq!(value, json!({"id": 2, "type": "Art"}));
    }

    #[rstest]
    fn category_map_serialises_as_object_in_id_order() {
        let categories = [category(3, "Geography"), category(1, "Science")];
        let map: CategoryMap = categories.iter().collect();

        let encoded = serde_json::to_string(&map).expect("serialise map");

        assert_eq!(encoded, r#"{"1":"Science","3":"Geography"}"#);
        assert_eq!(map.len(), 2);
        assert_eq!(map.label(CategoryId::new(3).expect("valid id")), Some("Geography"));
    }
}
