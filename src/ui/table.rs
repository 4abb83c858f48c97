use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::Penguin;
use crate::data::stats::NO_VALUE;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Per-column text filters (presentation-level, on top of the filtered view)
// ---------------------------------------------------------------------------

/// Free-text filter per grid column. A row is shown when every non-empty
/// filter matches its cell text (case-insensitive substring).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridFilters {
    pub species: String,
    pub island: String,
    pub bill_length: String,
    pub bill_depth: String,
    pub body_mass: String,
}

impl GridFilters {
    pub fn matches(&self, penguin: &Penguin) -> bool {
        cell_matches(&self.species, &penguin.species.to_string())
            && cell_matches(&self.island, &penguin.island)
            && cell_matches(&self.bill_length, &fmt_mm(penguin.bill_length_mm))
            && cell_matches(&self.bill_depth, &fmt_mm(penguin.bill_depth_mm))
            && cell_matches(&self.body_mass, &fmt_g(penguin.body_mass_g))
    }
}

fn cell_matches(filter: &str, cell: &str) -> bool {
    let needle = filter.trim();
    needle.is_empty() || cell.to_lowercase().contains(&needle.to_lowercase())
}

// Cell text, shared by rendering and filter matching.
fn fmt_mm(value: Option<f64>) -> String {
    value.map_or_else(|| NO_VALUE.to_string(), |v| format!("{v:.1}"))
}

fn fmt_g(value: Option<f64>) -> String {
    value.map_or_else(|| NO_VALUE.to_string(), |v| format!("{v:.0}"))
}

// ---------------------------------------------------------------------------
// Data grid
// ---------------------------------------------------------------------------

const HEADERS: [&str; 5] = [
    "Species",
    "Island",
    "Bill length (mm)",
    "Bill depth (mm)",
    "Body mass (g)",
];

/// Render the filtered view as a grid with a filter box per column.
pub fn data_grid(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Penguin Data");

    // Split borrows: the grid filter text boxes mutate `grid_filters` while
    // the body reads `dataset` and `visible_rows`.
    let AppState {
        dataset,
        visible_rows,
        grid_filters,
        species_colors,
        ..
    } = state;

    let rows: Vec<&Penguin> = visible_rows
        .iter()
        .map(|&idx| &dataset.penguins[idx])
        .filter(|p| grid_filters.matches(p))
        .collect();

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::remainder().at_least(90.0))
        .header(48.0, |mut header| {
            let filters = [
                &mut grid_filters.species,
                &mut grid_filters.island,
                &mut grid_filters.bill_length,
                &mut grid_filters.bill_depth,
                &mut grid_filters.body_mass,
            ];
            for (title, filter) in HEADERS.into_iter().zip(filters) {
                header.col(|ui| {
                    ui.vertical(|ui: &mut Ui| {
                        ui.strong(title);
                        ui.text_edit_singleline(filter);
                    });
                });
            }
        })
        .body(|mut body| {
            for penguin in rows {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        let text = RichText::new(penguin.species.to_string())
                            .color(species_colors.color_for(penguin.species));
                        ui.label(text);
                    });
                    row.col(|ui| {
                        ui.label(&penguin.island);
                    });
                    row.col(|ui| {
                        ui.label(fmt_mm(penguin.bill_length_mm));
                    });
                    row.col(|ui| {
                        ui.label(fmt_mm(penguin.bill_depth_mm));
                    });
                    row.col(|ui| {
                        ui.label(fmt_g(penguin.body_mass_g));
                    });
                });
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Species;

    fn penguin() -> Penguin {
        Penguin {
            species: Species::Chinstrap,
            island: "Dream".to_string(),
            bill_length_mm: Some(49.5),
            bill_depth_mm: None,
            body_mass_g: Some(3800.0),
        }
    }

    #[test]
    fn empty_filters_match_everything() {
        assert!(GridFilters::default().matches(&penguin()));
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let filters = GridFilters {
            species: "chin".to_string(),
            ..GridFilters::default()
        };
        assert!(filters.matches(&penguin()));

        let filters = GridFilters {
            island: "torg".to_string(),
            ..GridFilters::default()
        };
        assert!(!filters.matches(&penguin()));
    }

    #[test]
    fn numeric_cells_match_their_display_text() {
        let filters = GridFilters {
            body_mass: "3800".to_string(),
            ..GridFilters::default()
        };
        assert!(filters.matches(&penguin()));

        // Missing bill depth renders as the placeholder.
        let filters = GridFilters {
            bill_depth: NO_VALUE.to_string(),
            ..GridFilters::default()
        };
        assert!(filters.matches(&penguin()));
    }

    #[test]
    fn all_active_filters_must_match() {
        let filters = GridFilters {
            species: "Chinstrap".to_string(),
            island: "Biscoe".to_string(),
            ..GridFilters::default()
        };
        assert!(!filters.matches(&penguin()));
    }
}
