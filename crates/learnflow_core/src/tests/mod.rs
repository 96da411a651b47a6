//! Behavioral tests for the expandable list model
//!
//! Tests are organized by topic:
//! - `flatten` - Row layout under every combination of expansion states
//! - `selection` - Selection independence, ordering, and saved selections
//! - `scenarios` - The sign-up walkthroughs on small catalogs

mod flatten;

use crate::model::{Category, Domain, ExpandableListModel};

/// Tech/Business fixture used across the scenario tests
pub(crate) fn tech_business() -> ExpandableListModel {
    ExpandableListModel::new(vec![
        Category::new(
            "Tech",
            vec![
                Domain::new("Web", "web"),
                Domain::new("AI", "ai"),
                Domain::new("Security", "security"),
            ],
        ),
        Category::new(
            "Business",
            vec![Domain::new("Finance", "finance"), Domain::new("Marketing", "marketing")],
        ),
    ])
}

/// Fixture with an empty category in the middle
pub(crate) fn with_empty_category() -> ExpandableListModel {
    ExpandableListModel::new(vec![
        Category::new("First", vec![Domain::new("f1", ""), Domain::new("f2", "")]),
        Category::new("Empty", vec![]),
        Category::new(
            "Last",
            vec![Domain::new("l1", ""), Domain::new("l2", ""), Domain::new("l3", "")],
        ),
    ])
}

/// Labels of the flattened rows, category headers prefixed with '#'
pub(crate) fn labels(model: &ExpandableListModel) -> Vec<String> {
    model
        .flatten()
        .iter()
        .map(|row| {
            if row.is_category() {
                format!("#{}", row.label())
            } else {
                row.label().to_string()
            }
        })
        .collect()
}
