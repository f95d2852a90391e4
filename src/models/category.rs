//! Category model
//!
//! Categories are owned by the remote service; boards and goals only refer to
//! them by ID.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// A spending or income category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Look up a category by ID
pub fn find_by_id(categories: &[Category], id: CategoryId) -> Option<&Category> {
    categories.iter().find(|c| c.id == id)
}

/// Find the category best matching a free-text label
///
/// An exact case-insensitive match wins; otherwise the first category whose
/// name contains the label, or is contained in it.
pub fn match_label<'a>(categories: &'a [Category], label: &str) -> Option<&'a Category> {
    let label = label.trim().to_lowercase();
    if label.is_empty() {
        return None;
    }

    categories
        .iter()
        .find(|c| c.name.to_lowercase() == label)
        .or_else(|| {
            categories.iter().find(|c| {
                let name = c.name.to_lowercase();
                name.contains(&label) || label.contains(&name)
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        vec![
            Category::new(CategoryId::server(1), "Groceries"),
            Category::new(CategoryId::server(2), "Dining Out"),
            Category::new(CategoryId::server(3), "Rent"),
        ]
    }

    #[test]
    fn test_find_by_id() {
        let cats = categories();
        assert_eq!(find_by_id(&cats, CategoryId::server(3)).unwrap().name, "Rent");
        assert!(find_by_id(&cats, CategoryId::server(9)).is_none());
    }

    #[test]
    fn test_match_label_exact_first() {
        let cats = categories();
        assert_eq!(match_label(&cats, "rent").unwrap().id, CategoryId::server(3));
    }

    #[test]
    fn test_match_label_substring_both_ways() {
        let cats = categories();
        assert_eq!(match_label(&cats, "dining").unwrap().name, "Dining Out");
        assert_eq!(
            match_label(&cats, "Weekly groceries").unwrap().name,
            "Groceries"
        );
        assert!(match_label(&cats, "Travel").is_none());
        assert!(match_label(&cats, "  ").is_none());
    }
}
