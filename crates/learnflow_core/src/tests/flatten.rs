//! Tests for the flattened row sequence
//!
//! These tests verify, for every combination of expanded categories:
//! - Exactly one header per category, in category order
//! - Domain rows follow their header iff the category is expanded
//! - Collapsing one category leaves every other row untouched
//! - Toggling twice is a round trip

use super::{labels, tech_business, with_empty_category};
use crate::model::{ExpandableListModel, FlatRow};

/// Apply an expansion bitmask to a fresh copy of the model
fn with_mask(base: &ExpandableListModel, mask: u32) -> ExpandableListModel {
    let mut model = base.clone();
    for i in 0..model.len() {
        model.set_expanded(i, mask & (1 << i) != 0).unwrap();
    }
    model
}

fn fixtures() -> Vec<ExpandableListModel> {
    vec![tech_business(), with_empty_category()]
}

#[test]
fn test_headers_and_children_for_every_mask() {
    for base in fixtures() {
        for mask in 0..(1u32 << base.len()) {
            let model = with_mask(&base, mask);
            let rows = model.flatten();
            let mut pos = 0;

            for (ci, category) in model.categories().iter().enumerate() {
                match rows[pos] {
                    FlatRow::Category { index, category: c } => {
                        assert_eq!(index, ci);
                        assert_eq!(c.title(), category.title());
                    }
                    other => panic!("expected header for {ci}, got {other:?}"),
                }
                pos += 1;

                if category.is_expanded() {
                    for (di, domain) in category.domains().iter().enumerate() {
                        match rows[pos] {
                            FlatRow::Domain {
                                category_index,
                                domain_index,
                                domain: d,
                                parent,
                            } => {
                                assert_eq!((category_index, domain_index), (ci, di));
                                assert_eq!(d.name(), domain.name());
                                assert_eq!(parent.title(), category.title());
                            }
                            other => panic!("expected domain row, got {other:?}"),
                        }
                        pos += 1;
                    }
                }
            }

            assert_eq!(pos, rows.len(), "mask {mask:b} left trailing rows");
        }
    }
}

#[test]
fn test_collapse_removes_only_own_rows() {
    for base in fixtures() {
        let all = (1u32 << base.len()) - 1;
        for target in 0..base.len() {
            let expanded = with_mask(&base, all);
            let mut collapsed = expanded.clone();
            collapsed.toggle_expanded(target).unwrap();

            let own = expanded.categories()[target].domains().len();
            let before = labels(&expanded);
            let after = labels(&collapsed);
            assert_eq!(before.len() - own, after.len());

            let header = expanded.header_row_index(target).unwrap();
            let mut expected = before.clone();
            expected.drain(header + 1..header + 1 + own);
            assert_eq!(after, expected);
        }
    }
}

#[test]
fn test_toggle_twice_round_trips() {
    for base in fixtures() {
        for mask in 0..(1u32 << base.len()) {
            let model = with_mask(&base, mask);
            for i in 0..model.len() {
                let mut toggled = model.clone();
                toggled.toggle_expanded(i).unwrap();
                toggled.toggle_expanded(i).unwrap();
                assert_eq!(toggled.flatten(), model.flatten());
            }
        }
    }
}

#[test]
fn test_empty_category_only_renders_header() {
    let mut model = with_empty_category();
    assert!(model.toggle_expanded(1).unwrap());
    assert_eq!(labels(&model), ["#First", "#Empty", "#Last"]);
}

#[test]
fn test_no_categories_flattens_to_nothing() {
    let model = ExpandableListModel::default();
    assert!(model.flatten().is_empty());
    assert_eq!(model.row_count(), 0);
    assert_eq!(model.row(0), None);
}

#[test]
fn test_flatten_is_pure() {
    let mut model = tech_business();
    model.toggle_expanded(1).unwrap();
    let first = model.flatten();
    let second = model.flatten();
    assert_eq!(first, second);
}
