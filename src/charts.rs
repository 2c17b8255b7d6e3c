//! Chart series preparation. Everything here is plain data so the gallery
//! renderer only has to draw it.

use crate::data::model::{Attribute, Dataset, Group, Species};
use crate::stats::{summarize_by_group, CorrelationMatrix};

/// Observations shown in the growth-journey line chart.
pub const GROWTH_OBSERVATIONS: usize = 20;

/// Bins per species in the sepal-length histogram.
pub const HISTOGRAM_BINS: usize = 12;

// ---------------------------------------------------------------------------
// Line chart: first observations per attribute
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub attribute: Attribute,
    /// `[observation index, value]`.
    pub points: Vec<[f64; 2]>,
}

pub fn growth_journey(dataset: &Dataset, observations: usize) -> Vec<LineSeries> {
    let head = dataset.head(observations);
    Attribute::ALL
        .iter()
        .map(|&attribute| LineSeries {
            attribute,
            points: head
                .iter()
                .enumerate()
                .map(|(i, s)| [i as f64, s.value(attribute)])
                .collect(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Bar chart: mean petal length per species
// ---------------------------------------------------------------------------

pub fn petal_means(dataset: &Dataset) -> Vec<(Species, f64)> {
    summarize_by_group(dataset, &[Attribute::PetalLength])
        .into_iter()
        .filter_map(|(species, summary)| {
            Some((species, summary.get(Attribute::PetalLength)?.mean))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

/// Equal-width histogram. `edges` has `counts.len() + 1` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin values into `bins` equal-width bins spanning `[min, max]`. Every
    /// bin is half-open except the last, which includes `max`. A degenerate
    /// range is widened by 0.5 on each side. Returns `None` for no values or
    /// zero bins.
    pub fn new(values: &[f64], bins: usize) -> Option<Self> {
        if values.is_empty() || bins == 0 {
            return None;
        }
        let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if (hi - lo).abs() < f64::EPSILON {
            lo -= 0.5;
            hi += 0.5;
        }
        let width = (hi - lo) / bins as f64;
        let mut edges: Vec<f64> = (0..bins).map(|i| lo + width * i as f64).collect();
        edges.push(hi);

        // Bin membership is decided against the edges themselves, so a value
        // equal to an interior edge lands in the bin that edge opens.
        let mut counts = vec![0usize; bins];
        for &v in values {
            let idx = edges.partition_point(|&e| e <= v).saturating_sub(1).min(bins - 1);
            counts[idx] += 1;
        }
        Some(Histogram { edges, counts })
    }

    pub fn bin_width(&self) -> f64 {
        self.edges[1] - self.edges[0]
    }

    /// `(bin centre, count)` pairs.
    pub fn bars(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(w, &c)| ((w[0] + w[1]) / 2.0, c))
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

pub fn sepal_histograms(dataset: &Dataset, bins: usize) -> Vec<(Species, Histogram)> {
    dataset
        .species()
        .into_iter()
        .filter_map(|species| {
            let values = dataset.values(Group::Species(species), Attribute::SepalLength);
            Some((species, Histogram::new(&values, bins)?))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Scatter: sepal length vs petal length
// ---------------------------------------------------------------------------

pub fn sepal_petal_scatter(dataset: &Dataset) -> Vec<(Species, Vec<[f64; 2]>)> {
    dataset
        .species()
        .into_iter()
        .map(|species| {
            let points = dataset
                .samples()
                .iter()
                .filter(|s| s.species == species)
                .map(|s| [s.value(Attribute::SepalLength), s.value(Attribute::PetalLength)])
                .collect();
            (species, points)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Heatmap: lower triangle of the correlation matrix
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatmapCell {
    /// Row index in matrix order (0 = first attribute).
    pub row: usize,
    pub column: usize,
    /// NaN when undefined.
    pub value: f64,
}

/// Cells strictly below the diagonal; the upper triangle and the diagonal are
/// masked out.
pub fn correlation_heatmap(matrix: &CorrelationMatrix) -> Vec<HeatmapCell> {
    let position = |attribute: Attribute| {
        matrix
            .attributes()
            .iter()
            .position(|&a| a == attribute)
            .unwrap_or_default()
    };
    matrix
        .lower_triangle()
        .into_iter()
        .map(|(row, column, value)| HeatmapCell {
            row: position(row),
            column: position(column),
            value,
        })
        .collect()
}
