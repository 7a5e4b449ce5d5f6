use std::sync::Arc;

use eframe::egui::{self, Ui};

use crate::color::SpeciesColors;
use crate::data::model::PenguinTable;
use crate::state::{AppState, Card};
use crate::ui::plot::PLOT_HEIGHT;
use crate::ui::tables::TABLE_HEIGHT;
use crate::ui::{panels, plot, tables};

/// Room left above an expanded card's contents for its header and caption.
const EXPANDED_HEADER: f32 = 90.0;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PenguinExplorerApp {
    pub state: AppState,
}

impl PenguinExplorerApp {
    pub fn new(dataset: Arc<PenguinTable>) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }

    fn dashboard(&mut self, ui: &mut Ui) {
        // Chart accessors borrow the state mutably.
        let colors = self.state.colors.clone();
        let mut toggled = card_row(&mut self.state, &colors, ui, &Card::TABLES);
        ui.separator();
        toggled = card_row(&mut self.state, &colors, ui, &Card::CHARTS).or(toggled);

        if let Some(card) = toggled {
            self.state.toggle_expanded(card);
        }
    }

    fn full_screen(&mut self, ui: &mut Ui, card: Card) {
        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.state.expanded = None;
            return;
        }
        let colors = self.state.colors.clone();
        let height = (ui.available_height() - EXPANDED_HEADER).max(default_height(card));
        if draw_card(&mut self.state, &colors, ui, card, height) {
            self.state.toggle_expanded(card);
        }
    }
}

fn default_height(card: Card) -> f32 {
    match card {
        Card::Table | Card::Grid => TABLE_HEIGHT,
        Card::Frequency | Card::Scatter | Card::Density => PLOT_HEIGHT,
    }
}

/// Lay `cards` out side by side. Returns the card whose expand button was
/// clicked.
fn card_row(
    state: &mut AppState,
    colors: &SpeciesColors,
    ui: &mut Ui,
    cards: &[Card],
) -> Option<Card> {
    let mut toggled = None;
    ui.columns(cards.len(), |columns: &mut [Ui]| {
        for (column, &card) in columns.iter_mut().zip(cards) {
            if draw_card(state, colors, column, card, default_height(card)) {
                toggled = Some(card);
            }
        }
    });
    toggled
}

/// Draw one card with its contents bounded by `height`. Returns whether its
/// expand/restore button was clicked.
fn draw_card(
    state: &mut AppState,
    colors: &SpeciesColors,
    ui: &mut Ui,
    card: Card,
    height: f32,
) -> bool {
    let expanded = state.expanded == Some(card);
    let (toggled, sort_click) = panels::card(ui, card.title(), expanded, |ui: &mut Ui| match card {
        Card::Table => {
            tables::data_table(ui, state.table_view(), height);
            None
        }
        Card::Grid => {
            let sort = state.options.grid_sort;
            tables::data_grid(ui, state.grid_view(), sort, height)
        }
        Card::Frequency => {
            plot::frequency_histogram(ui, state.frequency_histogram(), colors, height);
            None
        }
        Card::Scatter => {
            plot::scatter_plot(ui, state.scatter_plot(), colors, height);
            None
        }
        Card::Density => {
            plot::density_histogram(ui, state.density_histogram(), colors, height);
            None
        }
    });

    if let Some(column) = sort_click {
        state.sort_grid_by(column);
    }
    toggled
}

impl eframe::App for PenguinExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: options and filters ----
        egui::SidePanel::left("options_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: one expanded card, or tables then charts ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.expanded {
            Some(card) => self.full_screen(ui, card),
            None => {
                egui::ScrollArea::vertical()
                    .id_salt("main_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui: &mut Ui| self.dashboard(ui));
            }
        });
    }
}
