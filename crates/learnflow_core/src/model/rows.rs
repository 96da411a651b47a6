use super::{Category, Domain};

/// One entry of the flattened, render-ready sequence.
///
/// Rows borrow from the model and carry the positions they came from, so a
/// renderer can route activation back without searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlatRow<'a> {
    Category {
        index: usize,
        category: &'a Category,
    },
    Domain {
        category_index: usize,
        domain_index: usize,
        domain: &'a Domain,
        parent: &'a Category,
    },
}

impl<'a> FlatRow<'a> {
    /// Index-only handle for this row, usable after the borrow ends
    pub fn target(&self) -> RowTarget {
        match *self {
            FlatRow::Category { index, .. } => RowTarget::Category(index),
            FlatRow::Domain {
                category_index,
                domain_index,
                ..
            } => RowTarget::Domain {
                category_index,
                domain_index,
            },
        }
    }

    /// Index of the category this row belongs to (itself for header rows)
    pub fn category_index(&self) -> usize {
        match *self {
            FlatRow::Category { index, .. } => index,
            FlatRow::Domain { category_index, .. } => category_index,
        }
    }

    pub fn label(&self) -> &'a str {
        match *self {
            FlatRow::Category { category, .. } => category.title(),
            FlatRow::Domain { domain, .. } => domain.name(),
        }
    }

    pub fn is_category(&self) -> bool {
        matches!(self, FlatRow::Category { .. })
    }
}

/// Position of a row, detached from the model borrow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTarget {
    Category(usize),
    Domain {
        category_index: usize,
        domain_index: usize,
    },
}

/// What an activation changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Expanded {
        category_index: usize,
        expanded: bool,
    },
    Selected {
        category_index: usize,
        domain_index: usize,
        selected: bool,
    },
}
