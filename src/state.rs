use std::collections::BTreeMap;

use blooming_insights::charts::{self, Histogram, LineSeries};
use blooming_insights::data::filter::{filtered_indices, init_filter_state, FilterState};
use blooming_insights::stats::{
    correlation_matrix, summarize_by_group, CorrelationMatrix, GroupSummary,
};
use blooming_insights::{Attribute, Dataset, Species};

use crate::color::ColorMap;

// ---------------------------------------------------------------------------
// Chart selection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chart {
    GrowthJourney,
    PetalMeans,
    SepalHistogram,
    SepalPetalScatter,
    CorrelationHeatmap,
}

impl Chart {
    pub const ALL: [Chart; 5] = [
        Chart::GrowthJourney,
        Chart::PetalMeans,
        Chart::SepalHistogram,
        Chart::SepalPetalScatter,
        Chart::CorrelationHeatmap,
    ];

    pub fn tab_label(self) -> &'static str {
        match self {
            Chart::GrowthJourney => "Line",
            Chart::PetalMeans => "Bar",
            Chart::SepalHistogram => "Histogram",
            Chart::SepalPetalScatter => "Scatter",
            Chart::CorrelationHeatmap => "Heatmap",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Chart::GrowthJourney => "The Growth Journey: Tracking Flower Measurements",
            Chart::PetalMeans => "Floral Elegance: Average Petal Length by Species",
            Chart::SepalHistogram => "Nature's Variety: Distribution of Sepal Lengths",
            Chart::SepalPetalScatter => "Floral Harmony: Relationship Between Sepals and Petals",
            Chart::CorrelationHeatmap => "Nature's Blueprint: Correlation Between Flower Features",
        }
    }
}

// ---------------------------------------------------------------------------
// Chart series derived from the visible samples
// ---------------------------------------------------------------------------

pub struct ChartData {
    pub growth: Vec<LineSeries>,
    pub petal_means: Vec<(Species, f64)>,
    pub histograms: Vec<(Species, Histogram)>,
    pub scatter: Vec<(Species, Vec<[f64; 2]>)>,
    pub summaries: BTreeMap<Species, GroupSummary>,
}

impl ChartData {
    fn build(dataset: &Dataset) -> Self {
        log::debug!("Preparing chart series for {} samples", dataset.len());
        ChartData {
            growth: charts::growth_journey(dataset, charts::GROWTH_OBSERVATIONS),
            petal_means: charts::petal_means(dataset),
            histograms: charts::sepal_histograms(dataset, charts::HISTOGRAM_BINS),
            scatter: charts::sepal_petal_scatter(dataset),
            summaries: summarize_by_group(dataset, &Attribute::ALL),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The bundled dataset (read-only).
    pub dataset: Dataset,

    /// Species currently shown.
    pub filters: FilterState,

    /// Indices of samples passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Series for the visible samples; `None` when nothing is selected.
    pub charts: Option<ChartData>,

    /// Correlations over the full dataset, independent of the filter.
    pub matrix: CorrelationMatrix,

    pub active_chart: Chart,

    pub color_map: ColorMap,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        let filters = init_filter_state(&dataset);
        let matrix = correlation_matrix(&dataset, &Attribute::ALL);
        let mut state = Self {
            dataset,
            filters,
            visible_indices: Vec::new(),
            charts: None,
            matrix,
            active_chart: Chart::GrowthJourney,
            color_map: ColorMap::default(),
        };
        state.refilter();
        state
    }

    /// Recompute `visible_indices` and the chart series after a filter change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset, &self.filters);
        let samples = self
            .visible_indices
            .iter()
            .map(|&i| self.dataset.samples()[i])
            .collect();
        // An empty selection has nothing to chart.
        self.charts = Dataset::from_samples(samples)
            .ok()
            .map(|visible| ChartData::build(&visible));
    }

    /// Toggle a single species in the filter.
    pub fn toggle_species(&mut self, species: Species) {
        if !self.filters.remove(&species) {
            self.filters.insert(species);
        }
        self.refilter();
    }

    /// Select every species.
    pub fn select_all(&mut self) {
        self.filters = init_filter_state(&self.dataset);
        self.refilter();
    }

    /// Deselect every species.
    pub fn select_none(&mut self) {
        self.filters.clear();
        self.refilter();
    }
}
