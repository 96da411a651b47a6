//! Serializable catalog definitions and the built-in seed catalog.
//!
//! A catalog is the static data a model is constructed from. It carries no
//! expansion or selection state.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::model::{Category, Domain, IconRef};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainDef {
    pub name: String,
    #[serde(default)]
    pub icon: IconRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DomainDef {
    pub fn new(name: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: IconRef::from(icon),
            description: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub title: String,
    #[serde(default)]
    pub domains: Vec<DomainDef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<CategoryDef>,
}

impl Catalog {
    /// The sign-up catalog shipped with the app
    pub fn seed() -> Self {
        let category = |title: &str, domains: &[(&str, &str)]| CategoryDef {
            title: title.to_string(),
            domains: domains
                .iter()
                .map(|(name, icon)| DomainDef::new(name, icon))
                .collect(),
        };

        Self {
            categories: vec![
                category(
                    "Tech",
                    &[
                        ("Web Development", "web_development"),
                        ("AI", "ai"),
                        ("Cybersecurity", "cybersecurity"),
                    ],
                ),
                category(
                    "Business",
                    &[("Finance", "finance"), ("Marketing", "marketing")],
                ),
                category(
                    "Arts",
                    &[("Graphic Design", "graphic_design"), ("Music", "music")],
                ),
            ],
        }
    }

    pub fn domain_count(&self) -> usize {
        self.categories.iter().map(|c| c.domains.len()).sum()
    }

    /// Check that every category and domain can be addressed by name.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut titles = HashSet::new();

        for (index, category) in self.categories.iter().enumerate() {
            if category.title.trim().is_empty() {
                return Err(CatalogError::EmptyCategoryTitle { index });
            }
            if !titles.insert(category.title.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.title.clone()));
            }

            let mut names = HashSet::new();
            for (index, domain) in category.domains.iter().enumerate() {
                if domain.name.trim().is_empty() {
                    return Err(CatalogError::EmptyDomainName {
                        category: category.title.clone(),
                        index,
                    });
                }
                if !names.insert(domain.name.as_str()) {
                    return Err(CatalogError::DuplicateDomain {
                        category: category.title.clone(),
                        name: domain.name.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    pub(crate) fn to_categories(&self) -> Vec<Category> {
        self.categories
            .iter()
            .map(|c| {
                let domains = c
                    .domains
                    .iter()
                    .map(|d| {
                        let domain = Domain::new(d.name.clone(), d.icon.clone());
                        match &d.description {
                            Some(desc) => domain.with_description(desc.clone()),
                            None => domain,
                        }
                    })
                    .collect();
                Category::new(c.title.clone(), domains)
            })
            .collect()
    }
}
