use std::sync::Arc;

use crate::color::SpeciesColors;
use crate::data::filter::{FilterCriteria, FilterEngine};
use crate::data::labels::{AttributeLabels, LabelError};
use crate::data::model::{Island, PenguinTable, Species};
use crate::options::DisplayOptions;
use crate::reactive::Memo;
use crate::render::charts::{
    density_histogram, frequency_histogram, scatter_plot, ChartResult, DensityChart,
    HistogramChart, ScatterChart,
};
use crate::render::tables::{grid_view, table_view, GridSort, TableArtifact};

type ChartKey = (FilterCriteria, String, usize);

/// The five framed sections of the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Card {
    Table,
    Grid,
    Frequency,
    Scatter,
    Density,
}

impl Card {
    pub const TABLES: [Card; 2] = [Card::Table, Card::Grid];
    pub const CHARTS: [Card; 3] = [Card::Frequency, Card::Scatter, Card::Density];

    pub fn title(self) -> &'static str {
        match self {
            Card::Table => "Penguin Data Table",
            Card::Grid => "Penguin Data Grid",
            Card::Frequency => "Frequency Histogram",
            Card::Scatter => "Scatter Plot",
            Card::Density => "Density Histogram",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Inputs (`criteria`, `options`) are written by the side panel. Every view
/// is pulled through a [`Memo`] keyed on exactly the inputs it reads, so a
/// change recomputes only the views that depend on it.
pub struct AppState {
    pub criteria: FilterCriteria,
    pub options: DisplayOptions,
    pub labels: AttributeLabels,
    pub colors: SpeciesColors,
    /// Card shown full screen, if any.
    pub expanded: Option<Card>,

    engine: FilterEngine,
    table: Memo<FilterCriteria, TableArtifact>,
    grid: Memo<(FilterCriteria, Option<GridSort>), TableArtifact>,
    histogram: Memo<ChartKey, Option<HistogramChart>>,
    scatter: Memo<(FilterCriteria, String), Option<ScatterChart>>,
    density: Memo<ChartKey, Option<DensityChart>>,
}

impl AppState {
    pub fn new(dataset: Arc<PenguinTable>) -> Self {
        let labels = AttributeLabels::new();
        let first_label = labels.labels().next().unwrap_or_default();
        Self {
            criteria: FilterCriteria::default(),
            options: DisplayOptions::new(first_label),
            labels,
            colors: SpeciesColors::default(),
            expanded: None,
            engine: FilterEngine::new(dataset),
            table: Memo::new(),
            grid: Memo::new(),
            histogram: Memo::new(),
            scatter: Memo::new(),
            density: Memo::new(),
        }
    }

    /// Rows in the full dataset.
    pub fn total_rows(&self) -> usize {
        self.engine.dataset().len()
    }

    /// The dataset filtered by the current criteria.
    pub fn filtered(&mut self) -> &PenguinTable {
        self.engine.filtered(&self.criteria)
    }

    pub fn table_view(&mut self) -> &TableArtifact {
        let filtered = self.engine.filtered(&self.criteria);
        self.table.get(&self.criteria, |_| table_view(filtered))
    }

    pub fn grid_view(&mut self) -> &TableArtifact {
        let filtered = self.engine.filtered(&self.criteria);
        let key = (self.criteria.clone(), self.options.grid_sort);
        self.grid.get(&key, |(_, sort)| grid_view(filtered, *sort))
    }

    pub fn frequency_histogram(&mut self) -> Option<&HistogramChart> {
        let filtered = self.engine.filtered(&self.criteria);
        let labels = &self.labels;
        let key = (
            self.criteria.clone(),
            self.options.attribute.clone(),
            self.options.frequency_bins,
        );
        self.histogram
            .get(&key, |(_, label, bins)| {
                blank_on_error(frequency_histogram(filtered, labels, label, *bins))
            })
            .as_ref()
    }

    pub fn scatter_plot(&mut self) -> Option<&ScatterChart> {
        let filtered = self.engine.filtered(&self.criteria);
        let labels = &self.labels;
        let key = (self.criteria.clone(), self.options.attribute.clone());
        self.scatter
            .get(&key, |(_, label)| {
                blank_on_error(scatter_plot(filtered, labels, label))
            })
            .as_ref()
    }

    pub fn density_histogram(&mut self) -> Option<&DensityChart> {
        let filtered = self.engine.filtered(&self.criteria);
        let labels = &self.labels;
        let key = (
            self.criteria.clone(),
            self.options.attribute.clone(),
            self.options.density_bins,
        );
        self.density
            .get(&key, |(_, label, bins)| {
                blank_on_error(density_histogram(filtered, labels, label, *bins))
            })
            .as_ref()
    }

    /// Flip a species checkbox.
    pub fn toggle_species(&mut self, species: Species) {
        self.criteria.toggle_species(species);
    }

    /// Flip an island checkbox.
    pub fn toggle_island(&mut self, island: Island) {
        self.criteria.toggle_island(island);
    }

    /// Select every species and island again.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    /// Expand `card` to fill the main area, or restore it if it already does.
    pub fn toggle_expanded(&mut self, card: Card) {
        self.expanded = if self.expanded == Some(card) {
            None
        } else {
            Some(card)
        };
    }

    /// Advance the grid's sort state after a header click.
    pub fn sort_grid_by(&mut self, column: usize) {
        self.options.grid_sort = GridSort::cycle(self.options.grid_sort, column);
    }
}

/// An unknown attribute label means the side panel and label map disagree;
/// log it and leave the panel blank rather than taking the app down.
fn blank_on_error<T>(result: ChartResult<T>) -> Option<T> {
    result.unwrap_or_else(|e: LabelError| {
        log::error!("Cannot render chart: {e}");
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_penguins;

    fn state() -> AppState {
        AppState::new(Arc::new(load_penguins().unwrap()))
    }

    #[test]
    fn starts_with_everything_selected() {
        let mut state = state();
        assert_eq!(state.total_rows(), 344);
        assert_eq!(state.filtered().len(), 344);
        assert_eq!(state.options.attribute, "Bill Length (mm)");
        assert_eq!(state.table_view().rows.len(), 344);
    }

    #[test]
    fn deselecting_all_species_blanks_the_charts() {
        let mut state = state();
        for species in Species::ALL {
            state.toggle_species(species);
        }
        assert!(state.filtered().is_empty());
        assert!(state.frequency_histogram().is_none());
        assert!(state.scatter_plot().is_none());
        assert!(state.density_histogram().is_none());

        let table = state.table_view();
        assert!(table.is_empty());
        assert_eq!(table.columns.len(), 8);
        assert!(state.grid_view().is_empty());
    }

    #[test]
    fn bin_change_only_recomputes_its_histogram() {
        let mut state = state();
        state.frequency_histogram();
        state.scatter_plot();
        state.density_histogram();

        state.options.frequency_bins = 25;
        assert_eq!(state.frequency_histogram().map(|c| c.bins), Some(25));
        state.scatter_plot();
        state.density_histogram();

        assert_eq!(state.histogram.computations(), 2);
        assert_eq!(state.scatter.computations(), 1);
        assert_eq!(state.density.computations(), 1);
        assert_eq!(state.engine.recomputations(), 1);
    }

    #[test]
    fn unknown_attribute_leaves_charts_blank() {
        let mut state = state();
        state.options.attribute = "Wingspan".into();
        assert!(state.frequency_histogram().is_none());
        assert!(state.scatter_plot().is_none());
        // Tables are unaffected.
        assert_eq!(state.grid_view().rows.len(), 344);
    }

    #[test]
    fn reset_restores_the_full_dataset() {
        let mut state = state();
        state.toggle_island(Island::Dream);
        assert_eq!(state.filtered().len(), 220);
        state.reset_filters();
        assert_eq!(state.filtered().len(), 344);
    }

    #[test]
    fn grid_sort_cycles_on_header_clicks() {
        let mut state = state();
        state.sort_grid_by(5);
        let first_mass = state.grid_view().rows[0][5].clone();
        assert_eq!(first_mass, "2700");
        state.sort_grid_by(5);
        assert_eq!(state.grid_view().rows[0][5], "6300");
        state.sort_grid_by(5);
        assert_eq!(state.options.grid_sort, None);
    }

    #[test]
    fn cards_expand_one_at_a_time() {
        let mut state = state();
        assert_eq!(state.expanded, None);

        state.toggle_expanded(Card::Scatter);
        assert_eq!(state.expanded, Some(Card::Scatter));
        state.toggle_expanded(Card::Grid);
        assert_eq!(state.expanded, Some(Card::Grid));
        state.toggle_expanded(Card::Grid);
        assert_eq!(state.expanded, None);

        // Expanding a card leaves its contents unchanged.
        state.toggle_expanded(Card::Table);
        assert_eq!(state.table_view().rows.len(), 344);
    }

    #[test]
    fn every_card_has_a_distinct_title() {
        let titles: std::collections::BTreeSet<_> = Card::TABLES
            .iter()
            .chain(&Card::CHARTS)
            .map(|c| c.title())
            .collect();
        assert_eq!(titles.len(), 5);
        assert!(titles.contains("Penguin Data Grid"));
    }
}
