use eframe::egui::Ui;
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points};

use crate::data::model::Species;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Bill length × depth scatter plot
// ---------------------------------------------------------------------------

/// Render the scatter plot of bill length vs. bill depth, coloured by
/// species, over the currently visible rows.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    ui.strong("Bill Length and Depth");

    Plot::new("bill_scatter")
        .legend(Legend::default())
        .x_axis_label("Bill length (mm)")
        .y_axis_label("Bill depth (mm)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // One Points series per species so the legend groups by colour.
            for species in Species::ALL {
                let coords: PlotPoints = state
                    .visible_rows
                    .iter()
                    .map(|&idx| &state.dataset.penguins[idx])
                    .filter(|p| p.species == species)
                    .filter_map(|p| Some([p.bill_length_mm?, p.bill_depth_mm?]))
                    .collect();

                let points = Points::new(coords)
                    .name(species.to_string())
                    .color(state.species_colors.color_for(species))
                    .shape(MarkerShape::Circle)
                    .radius(3.0);

                plot_ui.points(points);
            }
        });
}
