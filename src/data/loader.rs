use serde::Deserialize;

use super::model::{Dataset, Sample, Species};
use crate::error::{Result, StatsError};

/// The canonical Iris measurements, versioned with the program.
const BUNDLED_IRIS_CSV: &str = include_str!("../../assets/iris.csv");

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the bundled 150-sample Iris dataset.
///
/// Fails with [`StatsError::DataUnavailable`] only if the embedded resource
/// cannot be decoded.
pub fn load_dataset() -> Result<Dataset> {
    let dataset = parse_csv(BUNDLED_IRIS_CSV)?;
    log::info!(
        "Loaded {} samples across {} species: {:?}",
        dataset.len(),
        dataset.group_counts().len(),
        dataset
            .group_counts()
            .iter()
            .map(|(s, n)| format!("{s}={n}"))
            .collect::<Vec<_>>()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV decoding
// ---------------------------------------------------------------------------

/// CSV layout: header row, four measurement columns and an integer
/// `species` code (0 = Setosa, 1 = Versicolor, 2 = Virginica).
#[derive(Debug, Deserialize)]
struct IrisRecord {
    sepal_length: f64,
    sepal_width: f64,
    petal_length: f64,
    petal_width: f64,
    species: u8,
}

pub(crate) fn parse_csv(text: &str) -> Result<Dataset> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut samples = Vec::new();

    for (row_no, result) in reader.deserialize::<IrisRecord>().enumerate() {
        let record = result
            .map_err(|e| StatsError::DataUnavailable(format!("CSV row {row_no}: {e}")))?;

        let species = Species::from_code(record.species).ok_or_else(|| {
            StatsError::DataUnavailable(format!(
                "CSV row {row_no}: unknown species code {}",
                record.species
            ))
        })?;

        let measurements = [
            record.sepal_length,
            record.sepal_width,
            record.petal_length,
            record.petal_width,
        ];
        if measurements.iter().any(|v| !v.is_finite()) {
            return Err(StatsError::DataUnavailable(format!(
                "CSV row {row_no}: non-finite measurement"
            )));
        }

        samples.push(Sample::new(measurements, species));
    }

    Dataset::from_samples(samples)
}
