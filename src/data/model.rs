use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StatsError};

// ---------------------------------------------------------------------------
// Attribute – one numeric measurement column
// ---------------------------------------------------------------------------

/// The four measurements recorded for every flower, in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Attribute {
    SepalLength,
    SepalWidth,
    PetalLength,
    PetalWidth,
}

impl Attribute {
    /// Canonical column order.
    pub const ALL: [Attribute; 4] = [
        Attribute::SepalLength,
        Attribute::SepalWidth,
        Attribute::PetalLength,
        Attribute::PetalWidth,
    ];

    /// Column header shown to the user, e.g. `Petal Length (cm)`.
    pub fn name(self) -> &'static str {
        match self {
            Attribute::SepalLength => "Sepal Length (cm)",
            Attribute::SepalWidth => "Sepal Width (cm)",
            Attribute::PetalLength => "Petal Length (cm)",
            Attribute::PetalWidth => "Petal Width (cm)",
        }
    }

    /// Name without the unit suffix, used for legends.
    pub fn short_name(self) -> &'static str {
        self.name().trim_end_matches(" (cm)")
    }

    /// snake_case key as used in the bundled CSV header.
    pub fn key(self) -> &'static str {
        match self {
            Attribute::SepalLength => "sepal_length",
            Attribute::SepalWidth => "sepal_width",
            Attribute::PetalLength => "petal_length",
            Attribute::PetalWidth => "petal_width",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = StatsError;

    /// Accepts either the display name or the snake_case key.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Attribute::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s) || a.key() == s)
            .ok_or_else(|| StatsError::UnknownAttribute(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Species – the categorical label
// ---------------------------------------------------------------------------

/// Iris species. Variant order matches alphabetical order of the display
/// names, so `BTreeMap<Species, _>` enumerates groups sorted by label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Setosa, Species::Versicolor, Species::Virginica];

    pub fn name(self) -> &'static str {
        match self {
            Species::Setosa => "Iris Setosa",
            Species::Versicolor => "Iris Versicolor",
            Species::Virginica => "Iris Virginica",
        }
    }

    /// Decode the integer target code used by the bundled source.
    pub(crate) fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Species::Setosa),
            1 => Some(Species::Versicolor),
            2 => Some(Species::Virginica),
            _ => None,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Group / Extremum selectors
// ---------------------------------------------------------------------------

/// Either the whole garden or a single species.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    All,
    Species(Species),
}

impl Group {
    pub fn contains(self, species: Species) -> bool {
        match self {
            Group::All => true,
            Group::Species(s) => s == species,
        }
    }
}

impl From<Species> for Group {
    fn from(s: Species) -> Self {
        Group::Species(s)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::All => f.write_str("all"),
            Group::Species(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    Min,
    Max,
}

// ---------------------------------------------------------------------------
// Sample – one row of the dataset
// ---------------------------------------------------------------------------

/// One flower: four measurements plus its species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    measurements: [f64; 4],
    pub species: Species,
}

impl Sample {
    /// Measurements are given in [`Attribute::ALL`] order.
    pub fn new(measurements: [f64; 4], species: Species) -> Self {
        Sample {
            measurements,
            species,
        }
    }

    pub fn value(&self, attribute: Attribute) -> f64 {
        self.measurements[attribute.index()]
    }

    pub fn measurements(&self) -> &[f64; 4] {
        &self.measurements
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full, read-only collection of samples with group sizes derived at
/// construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    samples: Vec<Sample>,
    group_counts: BTreeMap<Species, usize>,
}

impl Dataset {
    /// Build a dataset, deriving the per-species counts. An empty sample list
    /// is rejected.
    pub fn from_samples(samples: Vec<Sample>) -> Result<Self> {
        if samples.is_empty() {
            return Err(StatsError::DataUnavailable(
                "dataset contains no samples".to_string(),
            ));
        }
        let mut group_counts: BTreeMap<Species, usize> = BTreeMap::new();
        for sample in &samples {
            *group_counts.entry(sample.species).or_default() += 1;
        }
        Ok(Dataset {
            samples,
            group_counts,
        })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false for a constructed dataset; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Distinct species present, sorted by label.
    pub fn species(&self) -> BTreeSet<Species> {
        self.group_counts.keys().copied().collect()
    }

    /// Sample count per species.
    pub fn group_counts(&self) -> &BTreeMap<Species, usize> {
        &self.group_counts
    }

    /// Values of one attribute restricted to a group, in dataset order.
    pub fn values(&self, group: Group, attribute: Attribute) -> Vec<f64> {
        self.samples
            .iter()
            .filter(|s| group.contains(s.species))
            .map(|s| s.value(attribute))
            .collect()
    }

    /// The first `n` samples (fewer if the dataset is shorter).
    pub fn head(&self, n: usize) -> &[Sample] {
        &self.samples[..n.min(self.samples.len())]
    }
}
