use std::collections::BTreeSet;

use super::model::{PenguinDataset, Species};

// ---------------------------------------------------------------------------
// Filter state: the two user-controlled inputs
// ---------------------------------------------------------------------------

/// Slider range for the body-mass threshold (grams).
pub const MASS_MIN: f64 = 2000.0;
pub const MASS_MAX: f64 = 6000.0;

/// The two filter inputs: a maximum body mass and a species selection.
/// An empty selection is allowed and yields an empty filtered view.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub mass_threshold: f64,
    pub selected_species: BTreeSet<Species>,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            mass_threshold: MASS_MAX,
            selected_species: Species::ALL.into_iter().collect(),
        }
    }
}

impl FilterState {
    /// Toggle one species in the selection.
    pub fn toggle_species(&mut self, species: Species) {
        if !self.selected_species.remove(&species) {
            self.selected_species.insert(species);
        }
    }

    /// Select all three species.
    pub fn select_all(&mut self) {
        self.selected_species = Species::ALL.into_iter().collect();
    }

    /// Deselect every species.
    pub fn select_none(&mut self) {
        self.selected_species.clear();
    }
}

// ---------------------------------------------------------------------------
// Filtered-view derivation
// ---------------------------------------------------------------------------

/// Return indices of penguins that pass both filter predicates, in dataset
/// order.
///
/// A row passes when:
/// * its species is in `selected_species`, and
/// * its body mass is present and strictly below `mass_threshold`.
///
/// Rows with a missing body mass fail the mass predicate. Pure and
/// deterministic, so the caller may cache the result per filter change.
pub fn filtered_indices(dataset: &PenguinDataset, filters: &FilterState) -> Vec<usize> {
    dataset
        .penguins
        .iter()
        .enumerate()
        .filter(|(_, p)| {
            filters.selected_species.contains(&p.species)
                && p.body_mass_g
                    .is_some_and(|mass| mass < filters.mass_threshold)
        })
        .map(|(i, _)| i)
        .collect()
}
