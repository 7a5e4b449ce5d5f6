use crate::data::labels::{AttributeLabels, LabelError};
use crate::data::model::{Attribute, PenguinTable, Species};
use crate::data::validate::validate;
use crate::options::{DENSITY_BINS, FREQUENCY_BINS};
use crate::render::stats::{gaussian_kde, BinEdges, KDE_GRID_POINTS};

/// Output of a chart renderer: `Ok(None)` means there is nothing to draw.
pub type ChartResult<T> = Result<Option<T>, LabelError>;

/// Title and axis captions, taken from the attribute's display label.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartText {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

// ---------------------------------------------------------------------------
// Frequency histogram – counts stacked by species
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesCounts {
    pub species: Species,
    pub counts: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramChart {
    pub attribute: Attribute,
    pub text: ChartText,
    /// Bin count the user asked for.
    pub bins: usize,
    /// `None` when the attribute has no values in the filtered rows.
    pub edges: Option<BinEdges>,
    pub series: Vec<SpeciesCounts>,
}

impl HistogramChart {
    /// Bin count and width, shown under the chart title.
    pub fn caption(&self) -> String {
        bin_caption(self.bins, self.edges)
    }
}

/// Histogram of the selected attribute with `bins` shared bins, one stacked
/// series per species present.
pub fn frequency_histogram(
    table: &PenguinTable,
    labels: &AttributeLabels,
    label: &str,
    bins: usize,
) -> ChartResult<HistogramChart> {
    let attribute = labels.resolve(label)?;
    if !validate(table, attribute) {
        return Ok(None);
    }

    let bins = FREQUENCY_BINS.clamp(bins);
    let edges = BinEdges::spanning(&table.values(attribute), bins);
    let series = match &edges {
        Some(edges) => per_species(table, attribute)
            .map(|(species, values)| SpeciesCounts {
                species,
                counts: edges.counts(values),
            })
            .collect(),
        None => Vec::new(),
    };

    Ok(Some(HistogramChart {
        attribute,
        text: ChartText {
            title: format!("{label} Frequency"),
            x_label: label.to_string(),
            y_label: "Count".to_string(),
        },
        bins,
        edges,
        series,
    }))
}

// ---------------------------------------------------------------------------
// Scatter plot – attribute against body mass
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub species: Species,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub attribute: Attribute,
    pub text: ChartText,
    pub series: Vec<ScatterSeries>,
}

/// Selected attribute (x) against body mass (y), one series per species.
/// Rows missing either value are left out.
pub fn scatter_plot(
    table: &PenguinTable,
    labels: &AttributeLabels,
    label: &str,
) -> ChartResult<ScatterChart> {
    let attribute = labels.resolve(label)?;
    if !validate(table, attribute) {
        return Ok(None);
    }

    let series = Species::ALL
        .into_iter()
        .filter_map(|species| {
            let points: Vec<[f64; 2]> = table
                .iter()
                .filter(|r| r.species == Some(species))
                .filter_map(|r| Some([attribute.value(r)?, Attribute::BodyMass.value(r)?]))
                .collect();
            (!points.is_empty()).then_some(ScatterSeries { species, points })
        })
        .collect();

    Ok(Some(ScatterChart {
        attribute,
        text: ChartText {
            title: format!("{label} vs Body Mass(g)"),
            x_label: label.to_string(),
            y_label: labels.to_label(Attribute::BodyMass.column_name())?.to_string(),
        },
        series,
    }))
}

// ---------------------------------------------------------------------------
// Density histogram – per-species step outline with a KDE overlay
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DensitySeries {
    pub species: Species,
    pub counts: Vec<usize>,
    /// KDE scaled to the count axis; empty when the species has no spread.
    pub kde: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DensityChart {
    pub attribute: Attribute,
    pub text: ChartText,
    pub bins: usize,
    pub edges: Option<BinEdges>,
    pub series: Vec<DensitySeries>,
}

impl DensitySeries {
    /// Step outline of the counts: a flat segment across each bin.
    pub fn step_points(&self, edges: &BinEdges) -> Vec<[f64; 2]> {
        let mut points = Vec::with_capacity(self.counts.len() * 2 + 2);
        points.push([edges.start, 0.0]);
        for (bin, &count) in self.counts.iter().enumerate() {
            points.push([edges.left(bin), count as f64]);
            points.push([edges.left(bin + 1), count as f64]);
        }
        points.push([edges.end, 0.0]);
        points
    }
}

impl DensityChart {
    pub fn caption(&self) -> String {
        bin_caption(self.bins, self.edges)
    }
}

/// Histogram of the selected attribute by species with a kernel density
/// curve per species, scaled so its area matches the bar counts.
pub fn density_histogram(
    table: &PenguinTable,
    labels: &AttributeLabels,
    label: &str,
    bins: usize,
) -> ChartResult<DensityChart> {
    let attribute = labels.resolve(label)?;
    if !validate(table, attribute) {
        return Ok(None);
    }

    let bins = DENSITY_BINS.clamp(bins);
    let edges = BinEdges::spanning(&table.values(attribute), bins);
    let series = match &edges {
        Some(edges) => per_species(table, attribute)
            .map(|(species, values)| {
                let scale = values.len() as f64 * edges.width();
                let kde = gaussian_kde(&values, KDE_GRID_POINTS)
                    .into_iter()
                    .map(|[x, density]| [x, density * scale])
                    .collect();
                DensitySeries {
                    species,
                    counts: edges.counts(values),
                    kde,
                }
            })
            .collect(),
        None => Vec::new(),
    };

    Ok(Some(DensityChart {
        attribute,
        text: ChartText {
            title: format!("Distribution of {label} by Species"),
            x_label: label.to_string(),
            y_label: "Count".to_string(),
        },
        bins,
        edges,
        series,
    }))
}

fn bin_caption(bins: usize, edges: Option<BinEdges>) -> String {
    match edges {
        Some(edges) => format!("{bins} bins of width {:.2}", edges.width()),
        None => format!("{bins} bins"),
    }
}

/// Present values of `attribute` grouped by species, skipping species with
/// no values.
fn per_species(
    table: &PenguinTable,
    attribute: Attribute,
) -> impl Iterator<Item = (Species, Vec<f64>)> + '_ {
    Species::ALL.into_iter().filter_map(move |species| {
        let values: Vec<f64> = table
            .iter()
            .filter(|r| r.species == Some(species))
            .filter_map(|r| attribute.value(r))
            .collect();
        (!values.is_empty()).then_some((species, values))
    })
}
