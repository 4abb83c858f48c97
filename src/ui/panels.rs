use eframe::egui::{self, RichText, Ui};

use crate::data::filter::{MASS_MAX, MASS_MIN};
use crate::data::model::Species;
use crate::data::stats::format_mm;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter controls
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Controls");
    ui.separator();

    let mut changed = false;

    // ---- Mass threshold slider ----
    ui.strong("Max body mass");
    let slider = egui::Slider::new(&mut state.filters.mass_threshold, MASS_MIN..=MASS_MAX)
        .suffix(" g")
        .integer();
    if ui.add(slider).changed() {
        changed = true;
    }
    ui.separator();

    // ---- Species checkboxes ----
    ui.strong("Species");
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all_species();
        }
        if ui.small_button("None").clicked() {
            state.select_no_species();
        }
    });

    for species in Species::ALL {
        let mut checked = state.filters.selected_species.contains(&species);
        let label = RichText::new(species.to_string())
            .color(state.species_colors.color_for(species));
        if ui.checkbox(&mut checked, label).changed() {
            state.toggle_species(species);
        }
    }

    // Recompute visible rows after a slider drag.
    if changed {
        state.refilter();
    }
}

// ---------------------------------------------------------------------------
// Value boxes – the three summary statistics
// ---------------------------------------------------------------------------

/// Render the three summary value boxes above the plot and grid.
pub fn value_boxes(ui: &mut Ui, state: &AppState) {
    let summary = state.summary();

    ui.columns(3, |cols: &mut [Ui]| {
        value_box(&mut cols[0], "Total Penguins", summary.count.to_string());
        value_box(
            &mut cols[1],
            "Average Bill Length",
            format_mm(summary.mean_bill_length_mm),
        );
        value_box(
            &mut cols[2],
            "Average Bill Depth",
            format_mm(summary.mean_bill_depth_mm),
        );
    });
}

fn value_box(ui: &mut Ui, title: &str, value: String) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(title);
            ui.heading(RichText::new(value).strong());
        });
        ui.set_width(ui.available_width());
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar with the dataset status.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Penguins Dashboard");
        ui.separator();
        ui.label(format!(
            "{} of {} penguins shown",
            state.visible_rows.len(),
            state.dataset.len()
        ));
    });
}
