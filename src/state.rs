use std::collections::BTreeSet;

use crate::color::ColorMap;
use crate::data::filter::filter_by_entities;
use crate::data::model::{AccessDataset, Record};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Entities pre-selected when a freshly loaded dataset contains them.
pub const DEFAULT_ENTITIES: [&str; 5] =
    ["Brazil", "Angola", "South Africa", "United States", "India"];

/// Which chart tab is active in the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Evolution,
    MeanByEntity,
    FocusYear,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Dataset loaded once at startup; read-only afterwards.
    pub dataset: Option<AccessDataset>,

    /// Fatal startup failure. When set, the app renders only the error screen.
    pub load_error: Option<String>,

    /// Entities currently picked in the sidebar.
    pub selected_entities: BTreeSet<String>,

    /// Year picked in the focus tab.
    pub focus_year: Option<i32>,

    /// Entity-filtered rows (cached, rebuilt on every selection change).
    pub visible: Vec<Record>,

    /// Stable entity → colour assignment.
    pub colors: ColorMap,

    /// Active chart tab.
    pub tab: Tab,

    /// URI of the optional sidebar branding image, if the asset exists.
    pub branding: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            load_error: None,
            selected_entities: BTreeSet::new(),
            focus_year: None,
            visible: Vec::new(),
            colors: ColorMap::default(),
            tab: Tab::default(),
            branding: None,
        }
    }
}

impl AppState {
    /// Ingest the startup dataset: colours, default selection, initial view.
    pub fn set_dataset(&mut self, dataset: AccessDataset) {
        self.colors = ColorMap::new(dataset.entities());

        // Default selection: the stock entity list, restricted to what the
        // file actually contains.
        self.selected_entities = DEFAULT_ENTITIES
            .iter()
            .filter(|e| dataset.entities().iter().any(|x| x.as_str() == **e))
            .map(|e| e.to_string())
            .collect();

        // Focus the most recent year.
        self.focus_year = dataset.years().last().copied();

        self.dataset = Some(dataset);
        self.refilter();
    }

    /// Recompute the cached entity view after a selection change.
    pub fn refilter(&mut self) {
        self.visible = match &self.dataset {
            Some(ds) => filter_by_entities(&ds.records, &self.selected_entities),
            None => Vec::new(),
        };
    }

    /// Flip one entity's membership in the selection.
    pub fn toggle_entity(&mut self, entity: &str) {
        if !self.selected_entities.remove(entity) {
            self.selected_entities.insert(entity.to_string());
        }
        self.refilter();
    }

    /// Select every entity in the dataset.
    pub fn select_all(&mut self) {
        if let Some(ds) = &self.dataset {
            self.selected_entities = ds.entities().iter().cloned().collect();
        }
        self.refilter();
    }

    /// Clear the selection. Charts go empty, which is a valid state.
    pub fn select_none(&mut self) {
        self.selected_entities.clear();
        self.refilter();
    }
}
