use crate::color::SpeciesColors;
use crate::data::filter::{filtered_indices, FilterState};
use crate::data::model::{PenguinDataset, Species};
use crate::data::stats::Summary;
use crate::ui::table::GridFilters;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset, immutable after startup.
    pub dataset: PenguinDataset,

    /// The two filter inputs (mass threshold + species selection).
    pub filters: FilterState,

    /// Indices of penguins passing the current filters (cached).
    pub visible_rows: Vec<usize>,

    /// Per-column text filters of the data grid (presentation-level).
    pub grid_filters: GridFilters,

    /// Fixed species colours shared by the plot and the filter labels.
    pub species_colors: SpeciesColors,
}

impl AppState {
    /// Build the initial state: default filters, everything visible that
    /// passes them.
    pub fn new(dataset: PenguinDataset) -> Self {
        let filters = FilterState::default();
        let visible_rows = filtered_indices(&dataset, &filters);
        AppState {
            dataset,
            filters,
            visible_rows,
            grid_filters: GridFilters::default(),
            species_colors: SpeciesColors::default(),
        }
    }

    /// Recompute `visible_rows` after a filter change.
    pub fn refilter(&mut self) {
        self.visible_rows = filtered_indices(&self.dataset, &self.filters);
    }

    /// Summary figures for the value boxes, derived from the current view.
    pub fn summary(&self) -> Summary {
        Summary::compute(&self.dataset, &self.visible_rows)
    }

    /// Toggle a species checkbox.
    pub fn toggle_species(&mut self, species: Species) {
        self.filters.toggle_species(species);
        self.refilter();
    }

    /// Select all species.
    pub fn select_all_species(&mut self) {
        self.filters.select_all();
        self.refilter();
    }

    /// Deselect all species.
    pub fn select_no_species(&mut self) {
        self.filters.select_none();
        self.refilter();
    }
}
