use std::fmt;

/// Which collection an out-of-range index was aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeTarget {
    Category,
    Domain,
    Row,
}

impl fmt::Display for RangeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeTarget::Category => write!(f, "category"),
            RangeTarget::Domain => write!(f, "domain"),
            RangeTarget::Row => write!(f, "row"),
        }
    }
}

/// Errors raised by [`ExpandableListModel`](crate::ExpandableListModel) mutations.
///
/// An out-of-range index means the caller is holding a stale view of the
/// model, so these are never swallowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    OutOfRange {
        target: RangeTarget,
        index: usize,
        len: usize,
    },
}

impl ModelError {
    pub(crate) fn out_of_range(target: RangeTarget, index: usize, len: usize) -> Self {
        ModelError::OutOfRange { target, index, len }
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::OutOfRange { target, index, len } => {
                write!(f, "{target} index {index} out of range (len {len})")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors found while validating a [`Catalog`](crate::Catalog)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    EmptyCategoryTitle { index: usize },
    EmptyDomainName { category: String, index: usize },
    DuplicateCategory(String),
    DuplicateDomain { category: String, name: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::EmptyCategoryTitle { index } => {
                write!(f, "category {index} has an empty title")
            }
            CatalogError::EmptyDomainName { category, index } => {
                write!(f, "domain {index} in category '{category}' has an empty name")
            }
            CatalogError::DuplicateCategory(title) => {
                write!(f, "category '{title}' appears more than once")
            }
            CatalogError::DuplicateDomain { category, name } => {
                write!(f, "domain '{name}' appears more than once in category '{category}'")
            }
        }
    }
}

impl std::error::Error for CatalogError {}
