use crate::render::tables::GridSort;

// ---------------------------------------------------------------------------
// Input bounds
// ---------------------------------------------------------------------------

/// Allowed range and initial value of a bin-count input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinRange {
    pub min: usize,
    pub max: usize,
    pub default: usize,
}

impl BinRange {
    pub fn clamp(&self, bins: usize) -> usize {
        bins.clamp(self.min, self.max)
    }
}

/// Bins of the stacked frequency histogram.
pub const FREQUENCY_BINS: BinRange = BinRange {
    min: 1,
    max: 100,
    default: 10,
};

/// Bins of the per-species density histogram.
pub const DENSITY_BINS: BinRange = BinRange {
    min: 5,
    max: 50,
    default: 20,
};

// ---------------------------------------------------------------------------
// Display options
// ---------------------------------------------------------------------------

/// Per-view settings chosen in the side panel. Independent of filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayOptions {
    /// Display label of the charted attribute.
    pub attribute: String,
    pub frequency_bins: usize,
    pub density_bins: usize,
    pub grid_sort: Option<GridSort>,
}

impl DisplayOptions {
    pub fn new(attribute: &str) -> Self {
        Self {
            attribute: attribute.to_string(),
            frequency_bins: FREQUENCY_BINS.default,
            density_bins: DENSITY_BINS.default,
            grid_sort: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_side_panel() {
        let opts = DisplayOptions::new("Bill Length (mm)");
        assert_eq!(opts.frequency_bins, 10);
        assert_eq!(opts.density_bins, 20);
        assert_eq!(opts.grid_sort, None);
    }

    #[test]
    fn bins_are_clamped_to_range() {
        assert_eq!(FREQUENCY_BINS.clamp(0), 1);
        assert_eq!(FREQUENCY_BINS.clamp(250), 100);
        assert_eq!(DENSITY_BINS.clamp(3), 5);
        assert_eq!(DENSITY_BINS.clamp(33), 33);
    }
}
