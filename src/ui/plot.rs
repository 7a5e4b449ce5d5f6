use std::hash::Hash;

use eframe::egui::{RichText, Ui, Vec2};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, PlotUi, Points};

use crate::color::SpeciesColors;
use crate::render::charts::{ChartText, DensityChart, HistogramChart, ScatterChart};

pub const PLOT_HEIGHT: f32 = 300.0;

/// Keep the panel's footprint when there is nothing to draw.
fn blank(ui: &mut Ui, height: f32) {
    ui.allocate_space(Vec2::new(ui.available_width(), height));
}

/// Plot ids include the attribute so switching it resets the view bounds.
fn show_plot(
    ui: &mut Ui,
    id: impl Hash,
    text: &ChartText,
    height: f32,
    add_items: impl FnOnce(&mut PlotUi),
) {
    Plot::new(id)
        .legend(Legend::default())
        .x_axis_label(text.x_label.as_str())
        .y_axis_label(text.y_label.as_str())
        .height(height)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, add_items);
}

// ---------------------------------------------------------------------------
// Frequency histogram
// ---------------------------------------------------------------------------

/// Bars stacked by species.
pub fn frequency_histogram(
    ui: &mut Ui,
    chart: Option<&HistogramChart>,
    colors: &SpeciesColors,
    height: f32,
) {
    let Some(chart) = chart else {
        blank(ui, height);
        return;
    };
    ui.label(RichText::new(&chart.text.title).strong());
    ui.weak(chart.caption());

    let mut stacked: Vec<BarChart> = Vec::new();
    if let Some(edges) = chart.edges {
        for series in &chart.series {
            let bars: Vec<Bar> = series
                .counts
                .iter()
                .enumerate()
                .map(|(bin, &count)| Bar::new(edges.center(bin), count as f64).width(edges.width()))
                .collect();
            let below: Vec<&BarChart> = stacked.iter().collect();
            let bar_chart = BarChart::new(bars)
                .name(series.species.name())
                .color(colors.color_for(series.species))
                .stack_on(&below);
            stacked.push(bar_chart);
        }
    }

    show_plot(ui, ("frequency_histogram", chart.attribute), &chart.text, height, |plot_ui| {
        for bar_chart in stacked {
            plot_ui.bar_chart(bar_chart);
        }
    });
}

// ---------------------------------------------------------------------------
// Scatter plot
// ---------------------------------------------------------------------------

pub fn scatter_plot(
    ui: &mut Ui,
    chart: Option<&ScatterChart>,
    colors: &SpeciesColors,
    height: f32,
) {
    let Some(chart) = chart else {
        blank(ui, height);
        return;
    };
    ui.label(RichText::new(&chart.text.title).strong());

    show_plot(ui, ("scatter_plot", chart.attribute), &chart.text, height, |plot_ui| {
        for series in &chart.series {
            let points: PlotPoints = series.points.iter().copied().collect();
            plot_ui.points(
                Points::new(points)
                    .name(series.species.name())
                    .color(colors.color_for(series.species))
                    .radius(2.5),
            );
        }
    });
}

// ---------------------------------------------------------------------------
// Density histogram
// ---------------------------------------------------------------------------

/// Step outline per species, with its KDE curve in the same colour.
pub fn density_histogram(
    ui: &mut Ui,
    chart: Option<&DensityChart>,
    colors: &SpeciesColors,
    height: f32,
) {
    let Some(chart) = chart else {
        blank(ui, height);
        return;
    };
    ui.label(RichText::new(&chart.text.title).strong());
    ui.weak(chart.caption());

    show_plot(ui, ("density_histogram", chart.attribute), &chart.text, height, |plot_ui| {
        let Some(edges) = chart.edges else {
            return;
        };
        for series in &chart.series {
            let color = colors.color_for(series.species);

            let steps: PlotPoints = series.step_points(&edges).into_iter().collect();
            plot_ui.line(
                Line::new(steps)
                    .name(series.species.name())
                    .color(color)
                    .width(1.5),
            );

            if !series.kde.is_empty() {
                let kde: PlotPoints = series.kde.iter().copied().collect();
                plot_ui.line(
                    Line::new(kde)
                        .name(series.species.name())
                        .color(color)
                        .width(2.5),
                );
            }
        }
    });
}
