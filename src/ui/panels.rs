use eframe::egui::{self, Align, Layout, RichText, ScrollArea, Ui};

use crate::data::model::{Island, Species};
use crate::options::{DENSITY_BINS, FREQUENCY_BINS};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – display options and filters
// ---------------------------------------------------------------------------

/// Render the left options panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Options");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Attribute selector ----
            ui.strong("Penguin attribute");
            let labels: Vec<&'static str> = state.labels.labels().collect();
            egui::ComboBox::from_id_salt("selected_attribute")
                .selected_text(state.options.attribute.as_str())
                .show_ui(ui, |ui: &mut Ui| {
                    for label in labels {
                        ui.selectable_value(&mut state.options.attribute, label.to_string(), label);
                    }
                });
            ui.add_space(6.0);

            // ---- Bin counts ----
            ui.strong("Frequency histogram bins");
            ui.add(
                egui::DragValue::new(&mut state.options.frequency_bins)
                    .range(FREQUENCY_BINS.min..=FREQUENCY_BINS.max),
            );
            ui.add_space(6.0);

            ui.strong("Density histogram bins");
            ui.add(egui::Slider::new(
                &mut state.options.density_bins,
                DENSITY_BINS.min..=DENSITY_BINS.max,
            ));
            ui.separator();

            species_filter(ui, state);
            island_filter(ui, state);
        });
}

fn species_filter(ui: &mut Ui, state: &mut AppState) {
    let header_text = format!(
        "Filter by species  ({}/{})",
        state.criteria.species.len(),
        Species::ALL.len()
    );
    let legend: Vec<_> = state.colors.legend_entries().collect();

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt("species_filter")
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.criteria.species = Species::ALL.into_iter().collect();
                }
                if ui.small_button("None").clicked() {
                    state.criteria.species.clear();
                }
            });

            // Checkbox labels double as the chart legend.
            for (species, color) in legend {
                let mut checked = state.criteria.species.contains(&species);
                let text = RichText::new(species.name()).color(color);
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_species(species);
                }
            }
        });
}

fn island_filter(ui: &mut Ui, state: &mut AppState) {
    let header_text = format!(
        "Filter by island  ({}/{})",
        state.criteria.islands.len(),
        Island::ALL.len()
    );

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt("island_filter")
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.criteria.islands = Island::ALL.into_iter().collect();
                }
                if ui.small_button("None").clicked() {
                    state.criteria.islands.clear();
                }
            });

            for island in Island::ALL {
                let mut checked = state.criteria.islands.contains(&island);
                if ui.checkbox(&mut checked, island.name()).changed() {
                    state.toggle_island(island);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Filters", |ui: &mut Ui| {
            if ui.button("Reset").clicked() {
                state.reset_filters();
                ui.close_menu();
            }
        });

        ui.separator();

        let total = state.total_rows();
        let visible = state.filtered().len();
        ui.label(format!("{total} penguins loaded, {visible} visible"));
    });
}

// ---------------------------------------------------------------------------
// Card – framed, titled section of the main area
// ---------------------------------------------------------------------------

/// Returns whether the card's expand/restore button was clicked, along with
/// the contents' result.
pub fn card<R>(
    ui: &mut Ui,
    heading: &str,
    expanded: bool,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> (bool, R) {
    egui::Frame::group(ui.style())
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            let mut toggled = false;
            ui.horizontal(|ui: &mut Ui| {
                ui.heading(heading);
                ui.with_layout(Layout::right_to_left(Align::Center), |ui: &mut Ui| {
                    let (text, hover) = if expanded {
                        ("Restore", "Back to the dashboard (Esc)")
                    } else {
                        ("Expand", "Show this card full screen")
                    };
                    toggled = ui.small_button(text).on_hover_text(hover).clicked();
                });
            });
            ui.separator();
            (toggled, add_contents(ui))
        })
        .inner
}
