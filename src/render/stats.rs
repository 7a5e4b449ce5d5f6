//! Binning and density estimation behind the histogram views.

use std::f64::consts::PI;

/// Grid resolution of a KDE curve.
pub const KDE_GRID_POINTS: usize = 200;

// ---------------------------------------------------------------------------
// BinEdges – equal-width bins over an observed range
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinEdges {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl BinEdges {
    /// `count` equal-width bins from the smallest to the largest value.
    /// A single distinct value gets a unit-wide range centred on it.
    pub fn spanning(values: &[f64], count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let (min, max) = min_max(values)?;
        let (lo, hi) = if max - min < f64::EPSILON {
            (min - 0.5, max + 0.5)
        } else {
            (min, max)
        };
        Some(Self {
            start: lo,
            end: hi,
            count,
        })
    }

    pub fn width(&self) -> f64 {
        (self.end - self.start) / self.count as f64
    }

    pub fn left(&self, bin: usize) -> f64 {
        self.start + self.width() * bin as f64
    }

    pub fn center(&self, bin: usize) -> f64 {
        self.left(bin) + self.width() / 2.0
    }

    /// Bin holding `value`. Bins are half-open except the last, which also
    /// holds the upper edge.
    pub fn index_of(&self, value: f64) -> Option<usize> {
        if !value.is_finite() || value < self.start || value > self.end {
            return None;
        }
        let idx = ((value - self.start) / self.width()).floor() as usize;
        Some(idx.min(self.count - 1))
    }

    pub fn counts(&self, values: impl IntoIterator<Item = f64>) -> Vec<usize> {
        let mut counts = vec![0; self.count];
        for idx in values.into_iter().filter_map(|v| self.index_of(v)) {
            counts[idx] += 1;
        }
        counts
    }
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

// ---------------------------------------------------------------------------
// Kernel density estimate
// ---------------------------------------------------------------------------

/// Sample standard deviation (n - 1 denominator).
fn sample_std(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

/// Gaussian KDE with Scott's rule bandwidth, evaluated at `grid_points`
/// evenly spaced positions between the smallest and largest value.
///
/// Returns an empty curve when the data has no spread.
pub fn gaussian_kde(values: &[f64], grid_points: usize) -> Vec<[f64; 2]> {
    if values.len() < 2 || grid_points < 2 {
        return Vec::new();
    }
    let Some((min, max)) = min_max(values) else {
        return Vec::new();
    };
    let std = sample_std(values);
    if std.is_nan() || std <= 0.0 || max - min < f64::EPSILON {
        return Vec::new();
    }

    let n = values.len() as f64;
    let bandwidth = std * n.powf(-0.2);
    let norm = 1.0 / (n * bandwidth * (2.0 * PI).sqrt());
    let step = (max - min) / (grid_points - 1) as f64;

    (0..grid_points)
        .map(|i| {
            let x = min + step * i as f64;
            let density: f64 = values
                .iter()
                .map(|&xi| {
                    let u = (x - xi) / bandwidth;
                    (-0.5 * u * u).exp()
                })
                .sum::<f64>()
                * norm;
            [x, density]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_span_the_observed_range() {
        let edges = BinEdges::spanning(&[1.0, 3.0, 2.0, 5.0], 4).unwrap();
        assert_eq!(edges.start, 1.0);
        assert_eq!(edges.width(), 1.0);
        assert_eq!(edges.end, 5.0);
        assert_eq!(edges.center(0), 1.5);
    }

    #[test]
    fn largest_value_lands_in_last_bin() {
        let edges = BinEdges::spanning(&[0.0, 10.0], 5).unwrap();
        assert_eq!(edges.index_of(10.0), Some(4));
        assert_eq!(edges.index_of(0.0), Some(0));
        assert_eq!(edges.index_of(10.5), None);
        assert_eq!(edges.counts([0.0, 1.9, 2.0, 10.0]), vec![2, 1, 0, 0, 1]);
    }

    #[test]
    fn constant_values_get_unit_range() {
        let edges = BinEdges::spanning(&[4.0, 4.0], 3).unwrap();
        assert_eq!(edges.start, 3.5);
        assert_eq!(edges.end, 4.5);
        assert_eq!(edges.counts([4.0, 4.0]), vec![0, 2, 0]);
    }

    #[test]
    fn no_values_no_bins() {
        assert!(BinEdges::spanning(&[], 10).is_none());
        assert!(BinEdges::spanning(&[1.0], 0).is_none());
    }

    #[test]
    fn kde_peaks_in_the_middle_of_symmetric_data() {
        let values = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0];
        let curve = gaussian_kde(&values, 101);
        assert_eq!(curve.len(), 101);
        assert_eq!(curve[0][0], 1.0);
        assert!((curve[100][0] - 5.0).abs() < 1e-9);

        let peak = curve
            .iter()
            .max_by(|a, b| a[1].total_cmp(&b[1]))
            .unwrap();
        assert!((peak[0] - 3.0).abs() < 1e-9);
        assert!(curve.iter().all(|p| p[1] > 0.0));
    }

    #[test]
    fn kde_needs_spread() {
        assert!(gaussian_kde(&[2.0], 10).is_empty());
        assert!(gaussian_kde(&[2.0, 2.0, 2.0], 10).is_empty());
    }
}
