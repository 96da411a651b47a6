//! Categories and the learning domains they group.
//!
//! Expansion and selection flags are only mutable through
//! [`ExpandableListModel`](super::ExpandableListModel), so the fields are private.

use serde::{Deserialize, Serialize};

/// Opaque reference to a domain's visual asset (file name, URL, glyph...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(pub String);

impl From<&str> for IconRef {
    fn from(value: &str) -> Self {
        IconRef(value.to_string())
    }
}

/// A leaf entry with its own selection state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    name: String,
    icon: IconRef,
    description: Option<String>,
    selected: bool,
}

impl Domain {
    pub fn new(name: impl Into<String>, icon: impl Into<IconRef>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            description: None,
            selected: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> &IconRef {
        &self.icon
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn toggle_selected(&mut self) -> bool {
        self.selected = !self.selected;
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

/// A titled, ordered group of domains that can be expanded or collapsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    title: String,
    domains: Vec<Domain>,
    expanded: bool,
}

impl Category {
    /// Categories start collapsed.
    pub fn new(title: impl Into<String>, domains: Vec<Domain>) -> Self {
        Self {
            title: title.into(),
            domains,
            expanded: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn domain(&self, index: usize) -> Option<&Domain> {
        self.domains.get(index)
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Number of selected domains in this category
    pub fn selected_count(&self) -> usize {
        self.domains.iter().filter(|d| d.selected).count()
    }

    pub(crate) fn domains_mut(&mut self) -> &mut [Domain] {
        &mut self.domains
    }

    pub(crate) fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }
}

/// Names a domain by its category title and domain name.
///
/// Indices shift when a catalog is edited, names do not, so saved selections
/// are stored this way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainRef {
    pub category: String,
    pub domain: String,
}

impl DomainRef {
    pub fn new(category: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            domain: domain.into(),
        }
    }
}
