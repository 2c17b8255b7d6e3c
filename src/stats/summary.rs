use std::collections::BTreeMap;

use super::moments::Moments;
use crate::data::model::{Attribute, Dataset, Extremum, Group, Species};
use crate::error::{Result, StatsError};

// ---------------------------------------------------------------------------
// Summary types
// ---------------------------------------------------------------------------

/// Descriptive statistics of one attribute within one group.
///
/// `std_dev` is the sample standard deviation (ddof = 1) and is NaN when the
/// group holds a single sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl AttributeSummary {
    fn from_moments(m: &Moments) -> Option<Self> {
        Some(AttributeSummary {
            mean: m.mean()?,
            std_dev: m.sample_std_dev(),
            min: m.min()?,
            max: m.max()?,
        })
    }
}

/// Aggregated statistics for one label's samples.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    pub count: usize,
    pub attributes: BTreeMap<Attribute, AttributeSummary>,
}

impl GroupSummary {
    pub fn get(&self, attribute: Attribute) -> Option<&AttributeSummary> {
        self.attributes.get(&attribute)
    }
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Per-species statistics over the requested attributes. Every species
/// present in the dataset gets an entry; iteration is sorted by label.
pub fn summarize_by_group(
    dataset: &Dataset,
    attributes: &[Attribute],
) -> BTreeMap<Species, GroupSummary> {
    let mut accumulators: BTreeMap<Species, Vec<Moments>> = BTreeMap::new();
    for sample in dataset.samples() {
        let accs = accumulators
            .entry(sample.species)
            .or_insert_with(|| vec![Moments::new(); attributes.len()]);
        for (acc, &attr) in accs.iter_mut().zip(attributes) {
            acc.update(sample.value(attr));
        }
    }

    accumulators
        .into_iter()
        .map(|(species, accs)| {
            let count = dataset.group_counts().get(&species).copied().unwrap_or(0);
            (species, build_summary(count, attributes, &accs))
        })
        .collect()
}

/// The same statistics over the whole dataset.
pub fn summarize_all(dataset: &Dataset, attributes: &[Attribute]) -> GroupSummary {
    let accs: Vec<Moments> = attributes
        .iter()
        .map(|&attr| dataset.samples().iter().map(|s| s.value(attr)).collect())
        .collect();
    build_summary(dataset.len(), attributes, &accs)
}

fn build_summary(count: usize, attributes: &[Attribute], accs: &[Moments]) -> GroupSummary {
    let attributes = attributes
        .iter()
        .zip(accs)
        .filter_map(|(&attr, m)| Some((attr, AttributeSummary::from_moments(m)?)))
        .collect();
    GroupSummary { count, attributes }
}

/// Minimum or maximum of one attribute, optionally restricted to a species.
pub fn extremum(
    dataset: &Dataset,
    group: Group,
    attribute: Attribute,
    kind: Extremum,
) -> Result<f64> {
    let moments: Moments = dataset.values(group, attribute).into_iter().collect();
    let value = match kind {
        Extremum::Min => moments.min(),
        Extremum::Max => moments.max(),
    };
    value.ok_or(match group {
        Group::Species(s) => StatsError::EmptyGroup(s),
        // A constructed dataset is never empty.
        Group::All => StatsError::DataUnavailable("dataset contains no samples".to_string()),
    })
}

/// Mean of the whole-dataset sample standard deviations of every attribute.
pub fn measurement_precision(dataset: &Dataset) -> f64 {
    let summary = summarize_all(dataset, &Attribute::ALL);
    let std_devs: Vec<f64> = summary.attributes.values().map(|s| s.std_dev).collect();
    std_devs.iter().sum::<f64>() / std_devs.len() as f64
}
