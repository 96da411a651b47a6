use std::path::PathBuf;

use learnflow_core::{Activation, Catalog, ExpandableListModel, FlatRow};

use super::{LoadError, MessageModal, ModalState, SaveError, SelectionGate};
use crate::data::profile::{DataConfig, SelectionProfile};
use crate::data::storage::{DataDirectory, load_catalog_file};

/// Command-line overrides applied on top of the data directory
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub catalog: Option<PathBuf>,
    pub min_domains: Option<usize>,
}

/// Where the catalog on screen came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Seed,
    File(PathBuf),
}

#[derive(Debug, Default)]
pub struct PickerState {
    /// Flat row index under the cursor
    pub cursor: usize,
}

/// How an attempt to finish sign-up went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishOutcome {
    Saved { selected: usize },
    NeedMore { remaining: usize },
}

#[derive(Debug)]
pub struct AppState {
    pub model: ExpandableListModel,
    pub gate: SelectionGate,
    pub catalog_source: CatalogSource,
    pub data_dir: Option<PathBuf>,
    pub picker: PickerState,

    pub modal: ModalState,
    pub error_message: Option<String>,
    /// Set once the selection has been saved
    pub completed: bool,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_catalog(&Catalog::seed(), CatalogSource::Seed)
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: &Catalog, catalog_source: CatalogSource) -> Self {
        Self {
            model: ExpandableListModel::from_catalog(catalog),
            gate: SelectionGate::default(),
            catalog_source,
            data_dir: None,
            picker: PickerState::default(),
            modal: ModalState::None,
            error_message: None,
            completed: false,
            exit: false,
        }
    }

    /// Build the picker from a data directory.
    ///
    /// Catalog precedence: `--catalog`, then catalog.yaml, then the seed.
    /// Minimum precedence: `--min-domains`, then config.yaml, then the default.
    ///
    /// Each file falls back on its own: a broken catalog means the seed is
    /// shown, but the configured minimum and the saved selection still
    /// apply. Every problem ends up on the error line.
    pub fn load_from_data_dir(data_dir: PathBuf, options: &LaunchOptions) -> Self {
        let storage = DataDirectory::new(data_dir.clone());
        let mut problems = Vec::new();

        let config = storage.load_config().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Ignoring unreadable config");
            problems.push(format!("Config ignored: {}", e));
            DataConfig::default()
        });

        let (catalog, source) = Self::load_catalog(&storage, options).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to the built-in catalog");
            problems.push(format!("{}; using the built-in catalog", e));
            (Catalog::seed(), CatalogSource::Seed)
        });

        let mut state = Self::with_catalog(&catalog, source);
        state.data_dir = Some(data_dir);

        if let Some(minimum) = options.min_domains.or(config.min_domains) {
            state.gate = SelectionGate::new(minimum);
        }

        // A broken profile should not keep the user from picking again
        match storage.load_profile() {
            Ok(Some(profile)) => {
                let missing = state.restore_profile(&profile);
                if missing > 0 {
                    problems.push(format!("{} saved domain(s) are no longer available", missing));
                }
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable profile");
                problems.push(format!("Saved selection ignored: {}", e));
            }
        }

        if !problems.is_empty() {
            state.set_error(problems.join("; "));
        }

        tracing::info!(
            categories = state.model.len(),
            domains = catalog.domain_count(),
            selected = state.model.selected_count(),
            minimum = state.gate.minimum(),
            source = ?state.catalog_source,
            "Domain picker loaded"
        );

        state
    }

    fn load_catalog(
        storage: &DataDirectory,
        options: &LaunchOptions,
    ) -> Result<(Catalog, CatalogSource), LoadError> {
        let (catalog, source) = match &options.catalog {
            Some(path) => (load_catalog_file(path)?, CatalogSource::File(path.clone())),
            None => match storage.load_catalog()? {
                Some(catalog) => (catalog, CatalogSource::File(storage.catalog_path())),
                None => (Catalog::seed(), CatalogSource::Seed),
            },
        };

        if catalog.categories.is_empty() {
            return Err(LoadError::EmptyCatalog);
        }

        Ok((catalog, source))
    }

    /// Re-select the domains saved in a profile and expand their categories.
    /// Returns how many saved domains matched nothing.
    pub fn restore_profile(&mut self, profile: &SelectionProfile) -> usize {
        let missing = self.model.restore_selection(&profile.domains);

        for missing_ref in &missing {
            tracing::warn!(
                category = %missing_ref.category,
                domain = %missing_ref.domain,
                "Saved domain no longer in catalog"
            );
        }

        self.model.expand_selected();
        missing.len()
    }

    // ========== Cursor ==========

    pub fn current_row(&self) -> Option<FlatRow<'_>> {
        self.model.row(self.picker.cursor)
    }

    /// Keep the cursor on an existing row after the row count changed
    pub fn clamp_cursor(&mut self) {
        let rows = self.model.row_count();
        if self.picker.cursor >= rows {
            self.picker.cursor = rows.saturating_sub(1);
        }
    }

    /// Toggle whatever is under the cursor
    pub fn activate_cursor(&mut self) -> Option<Activation> {
        match self.model.activate_row(self.picker.cursor) {
            Ok(activation) => {
                tracing::debug!(?activation, "Row activated");
                self.clamp_cursor();
                Some(activation)
            }
            Err(e) => {
                tracing::error!(error = %e, cursor = self.picker.cursor, "Cursor out of sync with rows");
                self.set_error(e.to_string());
                self.clamp_cursor();
                None
            }
        }
    }

    /// Expand or collapse the category under the cursor (or the parent of the
    /// domain under it). Collapsing moves the cursor onto the header.
    pub fn set_cursor_category_expanded(&mut self, expanded: bool) {
        let Some(category_index) = self.current_row().map(|row| row.category_index()) else {
            return;
        };

        if let Err(e) = self.model.set_expanded(category_index, expanded) {
            self.set_error(e.to_string());
            return;
        }

        if !expanded && let Some(header) = self.model.header_row_index(category_index) {
            self.picker.cursor = header;
        }
        self.clamp_cursor();
    }

    pub fn expand_all(&mut self) {
        self.model.expand_all();
        self.clamp_cursor();
    }

    /// Collapse everything, keeping the cursor on the current category's header
    pub fn collapse_all(&mut self) {
        let category_index = self.current_row().map(|row| row.category_index());
        self.model.collapse_all();
        self.picker.cursor = category_index.unwrap_or(0);
        self.clamp_cursor();
    }

    // ========== Finish ==========

    /// Save the selection if the gate is open
    pub fn finish(&mut self) -> Result<FinishOutcome, SaveError> {
        let selected = self.model.selected_count();
        if !self.gate.is_satisfied(selected) {
            return Ok(FinishOutcome::NeedMore {
                remaining: self.gate.remaining(selected),
            });
        }

        let data_dir = self.data_dir.clone().ok_or(SaveError::NoPath)?;
        let profile = SelectionProfile::new(self.model.selected_refs());
        DataDirectory::new(data_dir).save_profile(&profile)?;

        tracing::info!(selected, "Selection saved");
        self.completed = true;
        Ok(FinishOutcome::Saved { selected })
    }

    /// Run [`finish`](Self::finish) and report the outcome through the UI
    pub fn finish_and_report(&mut self) {
        match self.finish() {
            Ok(FinishOutcome::Saved { selected }) => {
                self.clear_error();
                self.modal = ModalState::Message(MessageModal::info(
                    "Account Created",
                    &format!("Account created with {} domains selected", selected),
                ));
            }
            Ok(FinishOutcome::NeedMore { .. }) => {
                self.set_error(format!(
                    "Please select at least {} domains",
                    self.gate.minimum()
                ));
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save selection");
                self.modal =
                    ModalState::Message(MessageModal::error("Save Failed", &e.to_string()));
            }
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnflow_core::DomainRef;
    use tempfile::TempDir;

    fn state_in(temp_dir: &TempDir) -> AppState {
        let mut state = AppState::new();
        state.data_dir = Some(temp_dir.path().to_path_buf());
        state
    }

    #[test]
    fn test_default_state_uses_seed() {
        let state = AppState::new();
        assert_eq!(state.catalog_source, CatalogSource::Seed);
        assert_eq!(state.model.row_count(), 3);
        assert_eq!(state.gate.minimum(), 3);
    }

    #[test]
    fn test_activate_cursor_expands_then_selects() {
        let mut state = AppState::new();

        assert_eq!(
            state.activate_cursor(),
            Some(Activation::Expanded {
                category_index: 0,
                expanded: true
            })
        );

        state.picker.cursor = 1;
        assert_eq!(
            state.activate_cursor(),
            Some(Activation::Selected {
                category_index: 0,
                domain_index: 0,
                selected: true
            })
        );
        assert_eq!(state.model.selected_count(), 1);
    }

    #[test]
    fn test_collapse_from_domain_row_moves_cursor_to_header() {
        let mut state = AppState::new();
        state.model.expand_all();
        // Tech(0) WebDev AI Cyber Business(4) Finance Marketing(6)
        state.picker.cursor = 6;

        state.set_cursor_category_expanded(false);
        assert_eq!(state.picker.cursor, 4);
        assert!(!state.model.categories()[1].is_expanded());
        assert!(state.model.categories()[0].is_expanded());
    }

    #[test]
    fn test_collapse_all_keeps_category_under_cursor() {
        let mut state = AppState::new();
        state.expand_all();
        state.picker.cursor = 8; // Graphic Design, under Arts

        state.collapse_all();
        assert_eq!(state.picker.cursor, 2);
    }

    #[test]
    fn test_finish_blocked_below_minimum() {
        let temp_dir = TempDir::new().unwrap();
        let mut state = state_in(&temp_dir);
        state.model.toggle_selected(0, 0).unwrap();

        assert_eq!(
            state.finish().unwrap(),
            FinishOutcome::NeedMore { remaining: 2 }
        );
        assert!(!state.completed);

        state.finish_and_report();
        assert_eq!(
            state.error_message.as_deref(),
            Some("Please select at least 3 domains")
        );
    }

    #[test]
    fn test_finish_saves_profile() {
        let temp_dir = TempDir::new().unwrap();
        let mut state = state_in(&temp_dir);
        state.model.toggle_selected(0, 1).unwrap();
        state.model.toggle_selected(1, 0).unwrap();
        state.model.toggle_selected(2, 1).unwrap();

        state.finish_and_report();
        assert!(state.completed);
        match &state.modal {
            ModalState::Message(m) => {
                assert_eq!(m.message, "Account created with 3 domains selected");
                assert!(!m.is_error);
            }
            other => panic!("expected message modal, got {other:?}"),
        }

        let profile = DataDirectory::new(temp_dir.path().to_path_buf())
            .load_profile()
            .unwrap()
            .unwrap();
        assert_eq!(
            profile.domains,
            vec![
                DomainRef::new("Tech", "AI"),
                DomainRef::new("Business", "Finance"),
                DomainRef::new("Arts", "Music"),
            ]
        );
    }

    #[test]
    fn test_finish_without_data_dir() {
        let mut state = AppState::new();
        state.gate = SelectionGate::new(0);
        assert!(matches!(state.finish(), Err(SaveError::NoPath)));
    }

    #[test]
    fn test_load_restores_profile_and_config() {
        let temp_dir = TempDir::new().unwrap();
        let storage = DataDirectory::new(temp_dir.path().to_path_buf());
        storage
            .save_config(&DataConfig {
                min_domains: Some(2),
            })
            .unwrap();
        storage
            .save_profile(&SelectionProfile::new(vec![
                DomainRef::new("Arts", "Music"),
                DomainRef::new("Tech", "Blockchain"),
            ]))
            .unwrap();

        let state =
            AppState::load_from_data_dir(temp_dir.path().to_path_buf(), &LaunchOptions::default());

        assert_eq!(state.gate.minimum(), 2);
        assert_eq!(state.model.selected_count(), 1);
        assert!(state.model.categories()[2].is_expanded());
        assert!(!state.model.categories()[0].is_expanded());
        assert!(state.error_message.is_some());
    }

    #[test]
    fn test_cli_overrides_win() {
        let temp_dir = TempDir::new().unwrap();
        let storage = DataDirectory::new(temp_dir.path().to_path_buf());
        storage
            .save_config(&DataConfig {
                min_domains: Some(2),
            })
            .unwrap();

        let catalog_path = temp_dir.path().join("science.yaml");
        std::fs::write(
            &catalog_path,
            "categories:\n  - title: Science\n    domains:\n      - name: Physics\n",
        )
        .unwrap();

        let options = LaunchOptions {
            catalog: Some(catalog_path.clone()),
            min_domains: Some(1),
        };
        let state = AppState::load_from_data_dir(temp_dir.path().to_path_buf(), &options);

        assert_eq!(state.gate.minimum(), 1);
        assert_eq!(state.catalog_source, CatalogSource::File(catalog_path));
        assert_eq!(state.model.categories()[0].title(), "Science");
    }

    #[test]
    fn test_empty_catalog_falls_back_to_seed() {
        let temp_dir = TempDir::new().unwrap();
        let catalog_path = temp_dir.path().join("empty.yaml");
        std::fs::write(&catalog_path, "categories: []\n").unwrap();

        let options = LaunchOptions {
            catalog: Some(catalog_path),
            min_domains: None,
        };
        let state = AppState::load_from_data_dir(temp_dir.path().to_path_buf(), &options);

        assert_eq!(state.catalog_source, CatalogSource::Seed);
        assert_eq!(state.model.len(), 3);
        assert_eq!(
            state.error_message.as_deref(),
            Some("Catalog has no categories; using the built-in catalog")
        );
    }

    #[test]
    fn test_broken_catalog_keeps_config_and_profile() {
        let temp_dir = TempDir::new().unwrap();
        let storage = DataDirectory::new(temp_dir.path().to_path_buf());
        storage
            .save_config(&DataConfig {
                min_domains: Some(1),
            })
            .unwrap();
        storage
            .save_profile(&SelectionProfile::new(vec![DomainRef::new("Arts", "Music")]))
            .unwrap();
        std::fs::write(storage.catalog_path(), "categories: [").unwrap();

        let state =
            AppState::load_from_data_dir(temp_dir.path().to_path_buf(), &LaunchOptions::default());

        assert_eq!(state.catalog_source, CatalogSource::Seed);
        assert_eq!(state.gate.minimum(), 1);
        assert_eq!(state.model.selected_count(), 1);
        assert_eq!(state.model.selected_items()[0].name(), "Music");
        assert!(state.model.categories()[2].is_expanded());
        assert!(state.error_message.is_some());
    }

    #[test]
    fn test_broken_config_keeps_catalog_and_profile() {
        let temp_dir = TempDir::new().unwrap();
        let storage = DataDirectory::new(temp_dir.path().to_path_buf());
        storage.init().unwrap();
        std::fs::write(temp_dir.path().join("config.yaml"), "min_domains: [").unwrap();
        std::fs::write(
            storage.catalog_path(),
            "categories:\n  - title: Science\n    domains:\n      - name: Physics\n",
        )
        .unwrap();
        storage
            .save_profile(&SelectionProfile::new(vec![DomainRef::new("Science", "Physics")]))
            .unwrap();

        let state =
            AppState::load_from_data_dir(temp_dir.path().to_path_buf(), &LaunchOptions::default());

        assert_eq!(state.catalog_source, CatalogSource::File(storage.catalog_path()));
        assert_eq!(state.gate.minimum(), 3);
        assert_eq!(state.model.selected_count(), 1);
        assert!(
            state
                .error_message
                .as_deref()
                .is_some_and(|m| m.starts_with("Config ignored"))
        );
    }
}
