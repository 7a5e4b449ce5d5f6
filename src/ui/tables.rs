use eframe::egui::{self, Align, Layout, Ui};
use egui_extras::{Column, TableBuilder};

use crate::render::tables::{GridSort, SortDirection, TableArtifact};

pub const TABLE_HEIGHT: f32 = 320.0;
const ROW_HEIGHT: f32 = 18.0;
const NO_ROWS: &str = "No penguins match the current filters.";

/// Render the table view: a striped, resizable, virtualised table scrolling
/// within `height`.
pub fn data_table(ui: &mut Ui, artifact: &TableArtifact, height: f32) {
    if artifact.is_empty() {
        ui.weak(NO_ROWS);
    }
    ui.push_id("penguin_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(Layout::left_to_right(Align::Center))
            .columns(Column::auto().at_least(60.0), artifact.columns.len())
            .min_scrolled_height(0.0)
            .max_scroll_height(height)
            .header(20.0, |mut header| {
                for name in &artifact.columns {
                    header.col(|ui| {
                        ui.strong(*name);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, artifact.rows.len(), |mut row| {
                    let cells = &artifact.rows[row.index()];
                    for cell in cells {
                        row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                });
            });
    });
}

/// Render the grid view. Returns the index of a clicked column header so the
/// caller can update the sort state.
pub fn data_grid(
    ui: &mut Ui,
    artifact: &TableArtifact,
    sort: Option<GridSort>,
    height: f32,
) -> Option<usize> {
    let mut clicked = None;
    if artifact.is_empty() {
        ui.weak(NO_ROWS);
    }

    egui::ScrollArea::both()
        .id_salt("penguin_grid_scroll")
        .max_height(height)
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("penguin_grid")
                .striped(true)
                .min_col_width(60.0)
                .show(ui, |ui: &mut Ui| {
                    for (idx, name) in artifact.columns.iter().enumerate() {
                        let arrow = match sort {
                            Some(GridSort {
                                column,
                                direction: SortDirection::Ascending,
                            }) if column == idx => " ^",
                            Some(GridSort {
                                column,
                                direction: SortDirection::Descending,
                            }) if column == idx => " v",
                            _ => "",
                        };
                        if ui.button(format!("{name}{arrow}")).clicked() {
                            clicked = Some(idx);
                        }
                    }
                    ui.end_row();

                    for row in &artifact.rows {
                        for cell in row {
                            ui.label(cell);
                        }
                        ui.end_row();
                    }
                });
        });

    clicked
}
