//! The expandable two-level list.
//!
//! The model never caches its flattened view: every call to
//! [`ExpandableListModel::flatten`] rebuilds it from the current state, so
//! callers re-flatten after each mutation.

use crate::catalog::Catalog;
use crate::error::{ModelError, RangeTarget, Result};

use super::{Activation, Category, Domain, DomainRef, FlatRow, RowTarget};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandableListModel {
    categories: Vec<Category>,
}

impl ExpandableListModel {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Build a model from a catalog definition, all categories collapsed
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.to_categories())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    // ========== Flattening ==========

    /// Derive the render sequence: each category header, followed by its
    /// domains when it is expanded.
    pub fn flatten(&self) -> Vec<FlatRow<'_>> {
        let mut rows = Vec::with_capacity(self.row_count());

        for (index, category) in self.categories.iter().enumerate() {
            rows.push(FlatRow::Category { index, category });

            if category.is_expanded() {
                rows.extend(category.domains().iter().enumerate().map(
                    |(domain_index, domain)| FlatRow::Domain {
                        category_index: index,
                        domain_index,
                        domain,
                        parent: category,
                    },
                ));
            }
        }

        rows
    }

    /// Length of [`flatten`](Self::flatten) without building it
    pub fn row_count(&self) -> usize {
        self.categories
            .iter()
            .map(|c| {
                if c.is_expanded() {
                    1 + c.domains().len()
                } else {
                    1
                }
            })
            .sum()
    }

    /// The row at a flat position, or `None` past the end
    pub fn row(&self, row_index: usize) -> Option<FlatRow<'_>> {
        let mut remaining = row_index;

        for (index, category) in self.categories.iter().enumerate() {
            if remaining == 0 {
                return Some(FlatRow::Category { index, category });
            }
            remaining -= 1;

            if category.is_expanded() {
                let count = category.domains().len();
                if remaining < count {
                    return Some(FlatRow::Domain {
                        category_index: index,
                        domain_index: remaining,
                        domain: &category.domains()[remaining],
                        parent: category,
                    });
                }
                remaining -= count;
            }
        }

        None
    }

    /// Flat position of a category's header row
    pub fn header_row_index(&self, category_index: usize) -> Option<usize> {
        if category_index >= self.categories.len() {
            return None;
        }

        Some(
            self.categories[..category_index]
                .iter()
                .map(|c| if c.is_expanded() { 1 + c.domains().len() } else { 1 })
                .sum(),
        )
    }

    // ========== Expansion ==========

    /// Flip a category's expansion, returning the new value
    pub fn toggle_expanded(&mut self, category_index: usize) -> Result<bool> {
        let category = self.category_mut(category_index)?;
        let expanded = !category.is_expanded();
        category.set_expanded(expanded);
        Ok(expanded)
    }

    pub fn set_expanded(&mut self, category_index: usize, expanded: bool) -> Result<()> {
        self.category_mut(category_index)?.set_expanded(expanded);
        Ok(())
    }

    pub fn expand_all(&mut self) {
        for category in &mut self.categories {
            category.set_expanded(true);
        }
    }

    pub fn collapse_all(&mut self) {
        for category in &mut self.categories {
            category.set_expanded(false);
        }
    }

    /// Expand every category holding a selected domain, leaving the rest as
    /// they are. Returns how many categories were expanded.
    pub fn expand_selected(&mut self) -> usize {
        let mut expanded = 0;
        for category in &mut self.categories {
            if category.selected_count() > 0 {
                category.set_expanded(true);
                expanded += 1;
            }
        }
        expanded
    }

    // ========== Selection ==========

    /// Flip a domain's selection, returning the new value
    pub fn toggle_selected(&mut self, category_index: usize, domain_index: usize) -> Result<bool> {
        let domain = self.domain_mut(category_index, domain_index)?;
        Ok(domain.toggle_selected())
    }

    /// Every selected domain, in category order then domain order
    pub fn selected_items(&self) -> Vec<&Domain> {
        self.categories
            .iter()
            .flat_map(|c| c.domains().iter())
            .filter(|d| d.is_selected())
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.categories.iter().map(Category::selected_count).sum()
    }

    /// Selected domains by name, in the same order as [`selected_items`](Self::selected_items)
    pub fn selected_refs(&self) -> Vec<DomainRef> {
        self.categories
            .iter()
            .flat_map(|c| {
                c.domains()
                    .iter()
                    .filter(|d| d.is_selected())
                    .map(move |d| DomainRef::new(c.title(), d.name()))
            })
            .collect()
    }

    /// Mark a domain selected by name. Returns false if no such domain exists.
    pub fn select_by_name(&mut self, category: &str, domain: &str) -> bool {
        let found = self
            .categories
            .iter_mut()
            .find(|c| c.title() == category)
            .and_then(|c| c.domains_mut().iter_mut().find(|d| d.name() == domain));

        match found {
            Some(d) => {
                d.set_selected(true);
                true
            }
            None => false,
        }
    }

    /// Re-apply a saved selection, returning the references that matched nothing
    pub fn restore_selection(&mut self, refs: &[DomainRef]) -> Vec<DomainRef> {
        refs.iter()
            .filter(|r| !self.select_by_name(&r.category, &r.domain))
            .cloned()
            .collect()
    }

    // ========== Activation ==========

    /// Header rows toggle expansion, domain rows toggle selection
    pub fn activate(&mut self, target: RowTarget) -> Result<Activation> {
        match target {
            RowTarget::Category(category_index) => {
                let expanded = self.toggle_expanded(category_index)?;
                Ok(Activation::Expanded {
                    category_index,
                    expanded,
                })
            }
            RowTarget::Domain {
                category_index,
                domain_index,
            } => {
                let selected = self.toggle_selected(category_index, domain_index)?;
                Ok(Activation::Selected {
                    category_index,
                    domain_index,
                    selected,
                })
            }
        }
    }

    /// Activate whatever row sits at a flat position
    pub fn activate_row(&mut self, row_index: usize) -> Result<Activation> {
        let target = self
            .row(row_index)
            .map(|row| row.target())
            .ok_or_else(|| ModelError::out_of_range(RangeTarget::Row, row_index, self.row_count()))?;
        self.activate(target)
    }

    fn category_mut(&mut self, index: usize) -> Result<&mut Category> {
        let len = self.categories.len();
        self.categories
            .get_mut(index)
            .ok_or_else(|| ModelError::out_of_range(RangeTarget::Category, index, len))
    }

    fn domain_mut(&mut self, category_index: usize, domain_index: usize) -> Result<&mut Domain> {
        let domains = self.category_mut(category_index)?.domains_mut();
        let len = domains.len();
        domains
            .get_mut(domain_index)
            .ok_or_else(|| ModelError::out_of_range(RangeTarget::Domain, domain_index, len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> ExpandableListModel {
        ExpandableListModel::new(vec![
            Category::new("A", vec![Domain::new("a1", "i"), Domain::new("a2", "i")]),
            Category::new("B", vec![]),
            Category::new("C", vec![Domain::new("c1", "i")]),
        ])
    }

    #[test]
    fn test_row_matches_flatten() {
        let mut m = model();
        m.toggle_expanded(0).unwrap();
        m.toggle_expanded(2).unwrap();

        let rows = m.flatten();
        assert_eq!(rows.len(), m.row_count());
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(m.row(i).as_ref(), Some(row));
        }
        assert_eq!(m.row(rows.len()), None);
    }

    #[test]
    fn test_header_row_index() {
        let mut m = model();
        m.toggle_expanded(0).unwrap();

        assert_eq!(m.header_row_index(0), Some(0));
        assert_eq!(m.header_row_index(1), Some(3));
        assert_eq!(m.header_row_index(2), Some(4));
        assert_eq!(m.header_row_index(3), None);
    }

    #[test]
    fn test_domain_out_of_range() {
        let mut m = model();
        let err = m.toggle_selected(1, 0).unwrap_err();
        assert_eq!(
            err,
            ModelError::OutOfRange {
                target: RangeTarget::Domain,
                index: 0,
                len: 0
            }
        );
    }

    #[test]
    fn test_activate_row_past_end() {
        let mut m = model();
        let err = m.activate_row(3).unwrap_err();
        assert_eq!(err, ModelError::out_of_range(RangeTarget::Row, 3, 3));
    }

    #[test]
    fn test_expand_and_collapse_all() {
        let mut m = model();
        m.expand_all();
        assert_eq!(m.row_count(), 6);
        m.collapse_all();
        assert_eq!(m.row_count(), 3);
    }

    #[test]
    fn test_expand_selected_only_touches_categories_with_selection() {
        let mut m = model();
        m.toggle_selected(2, 0).unwrap();
        m.set_expanded(1, true).unwrap();

        assert_eq!(m.expand_selected(), 1);
        assert!(!m.categories()[0].is_expanded());
        assert!(m.categories()[1].is_expanded());
        assert!(m.categories()[2].is_expanded());
    }
}
