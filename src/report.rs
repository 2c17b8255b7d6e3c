//! Console narration of the garden: counts, summary tables, correlations.

use std::fmt::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;

use crate::data::model::{Attribute, Dataset, Extremum, Group, Species};
use crate::error::StatsError;
use crate::stats::{
    correlation_matrix, extremum, measurement_precision, summarize_by_group, AttributeSummary,
    CorrelationMatrix,
};

const RULE_WIDTH: usize = 45;

/// Chart titles, in gallery order.
pub const GALLERY_CHARTS: [&str; 5] = [
    "The Growth Journey",
    "Floral Elegance",
    "Nature's Variety",
    "Floral Harmony",
    "Nature's Blueprint",
];

/// Render the full console report.
pub fn render(dataset: &Dataset) -> Result<String> {
    let mut out = String::new();
    let matrix = correlation_matrix(dataset, &Attribute::ALL);

    writeln!(out, "Welcome to Blooming Insights!")?;
    writeln!(
        out,
        "Join me on a journey through the enchanting world of Iris flowers..."
    )?;
    discovery(&mut out, dataset)?;
    meet_the_flowers(&mut out, dataset)?;
    gallery(&mut out)?;
    patterns(&mut out, &matrix)?;
    botanists_journal(&mut out)?;
    expedition_summary(&mut out, dataset)?;
    farewell(&mut out)?;
    Ok(out)
}

fn heading(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out, "\n{title}")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

fn discovery(out: &mut String, dataset: &Dataset) -> Result<()> {
    heading(out, "The Garden Discovery")?;
    writeln!(
        out,
        "We've discovered a garden with {} types of Iris flowers:",
        dataset.group_counts().len()
    )?;
    for (species, count) in dataset.group_counts() {
        writeln!(out, "    {species}: {count} specimens")?;
    }
    writeln!(
        out,
        "\nOur garden journal contains {} detailed observations",
        dataset.len()
    )?;
    writeln!(
        out,
        "Each flower has {} measurements recorded",
        Attribute::ALL.len()
    )?;
    Ok(())
}

fn meet_the_flowers(out: &mut String, dataset: &Dataset) -> Result<()> {
    heading(out, "Meeting the Flowers")?;
    writeln!(out, "Average measurements by species:")?;
    let table = summary_table(dataset, &[Attribute::SepalLength, Attribute::PetalLength])?;
    writeln!(out, "{table}")?;

    writeln!(out, "\nBotanical observations:")?;
    let observations: [(&str, Species, Attribute, Option<Extremum>); 2] = [
        (
            "has the most compact petals, averaging only",
            Species::Setosa,
            Attribute::PetalLength,
            None,
        ),
        (
            "boasts the largest petals, reaching",
            Species::Virginica,
            Attribute::PetalLength,
            Some(Extremum::Max),
        ),
    ];
    for (phrase, species, attribute, kind) in observations {
        match observation(dataset, species, attribute, kind) {
            Ok(v) => writeln!(out, "- {species} {phrase} {v:.1}cm")?,
            Err(e @ StatsError::EmptyGroup(_)) => {
                log::warn!("Skipping observation: {e}");
                writeln!(out, "- {species}: skipped ({e})")?;
            }
            Err(e) => return Err(e).context("computing botanical observation"),
        }
    }

    let min = extremum(dataset, Group::All, Attribute::SepalWidth, Extremum::Min)?;
    let max = extremum(dataset, Group::All, Attribute::SepalWidth, Extremum::Max)?;
    writeln!(
        out,
        "- The garden shows incredible diversity in sepal width: {min:.1}cm to {max:.1}cm"
    )?;
    Ok(())
}

/// Mean of one species' attribute when `kind` is `None`, otherwise its
/// extremum.
fn observation(
    dataset: &Dataset,
    species: Species,
    attribute: Attribute,
    kind: Option<Extremum>,
) -> Result<f64, StatsError> {
    match kind {
        Some(kind) => extremum(dataset, Group::Species(species), attribute, kind),
        None => summarize_by_group(dataset, &[attribute])
            .get(&species)
            .and_then(|g| g.get(attribute))
            .map(|s| s.mean)
            .ok_or(StatsError::EmptyGroup(species)),
    }
}

fn gallery(out: &mut String) -> Result<()> {
    heading(out, "The Flower Gallery")?;
    writeln!(out, "Charts available in the gallery window:")?;
    for title in GALLERY_CHARTS {
        writeln!(out, "    {title}")?;
    }
    Ok(())
}

fn patterns(out: &mut String, matrix: &CorrelationMatrix) -> Result<()> {
    heading(out, "Nature's Hidden Patterns")?;
    writeln!(out, "{}", correlation_table(matrix)?)?;

    writeln!(out, "\nBotanical insights:")?;
    let insights = [
        (
            "Petal length and width dance together",
            Attribute::PetalLength,
            Attribute::PetalWidth,
        ),
        (
            "Sepals and petals grow in coordination",
            Attribute::SepalLength,
            Attribute::PetalLength,
        ),
    ];
    for (phrase, a, b) in insights {
        match matrix.coefficient(a, b) {
            Ok(r) => writeln!(out, "- {phrase} (r = {r:.2})")?,
            Err(e) => writeln!(out, "- {phrase} (r undefined: {e})")?,
        }
    }
    writeln!(out, "- Each species has its own unique growth pattern")?;
    Ok(())
}

const REFLECTIONS: &str = "\
Three distinct personalities:
   - Iris Setosa: the petite beauty with compact, delicate features
   - Iris Versicolor: the balanced medium-sized charmer
   - Iris Virginica: the grand showcase with impressive dimensions

Nature's precision:
   - Petal measurements show remarkable consistency within species
   - Sepal width varies more, showing nature's creative flexibility
   - Strong correlations reveal systematic growth patterns

Artistic diversity:
   - Despite sharing a genus, each species has unique proportions
   - The garden balances consistency and variety
   - Every flower tells a story through its measurements

For future exploration:
   - What environmental factors influence these measurements?
   - How do these patterns change across different regions?
   - What other hidden relationships might we discover?";

fn botanists_journal(out: &mut String) -> Result<()> {
    heading(out, "Final Chapter: The Botanist's Journal")?;
    writeln!(out, "After carefully studying our Iris garden, here are my reflections:\n")?;
    writeln!(out, "{REFLECTIONS}")?;
    Ok(())
}

fn farewell(out: &mut String) -> Result<()> {
    let rule = "=".repeat(60);
    writeln!(out, "\n{rule}")?;
    writeln!(out, "Thank you for joining this botanical journey!")?;
    writeln!(
        out,
        "May your data adventures continue to bloom with insight and wonder."
    )?;
    writeln!(out, "{rule}")?;
    Ok(())
}

fn expedition_summary(out: &mut String, dataset: &Dataset) -> Result<()> {
    heading(out, "Expedition Summary")?;
    writeln!(out, "Flowers documented: {}", dataset.len())?;
    writeln!(out, "Species varieties: {}", dataset.group_counts().len())?;
    writeln!(
        out,
        "Measurement precision: {:.2} cm average variation",
        measurement_precision(dataset)
    )?;
    let complete = dataset
        .samples()
        .iter()
        .all(|s| s.measurements().iter().all(|v| v.is_finite()));
    writeln!(
        out,
        "Garden health: {}",
        if complete {
            "no missing data found"
        } else {
            "missing measurements detected"
        }
    )?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tables (arrow pretty printer)
// ---------------------------------------------------------------------------

/// Per-species mean and standard deviation of `attributes`, rounded to two
/// decimals.
pub fn summary_table(dataset: &Dataset, attributes: &[Attribute]) -> Result<String> {
    let groups = summarize_by_group(dataset, attributes);

    let mut fields = vec![Field::new("Species", DataType::Utf8, false)];
    let mut columns: Vec<ArrayRef> = vec![Arc::new(StringArray::from(
        groups.keys().map(|s| s.name()).collect::<Vec<_>>(),
    ))];

    for &attr in attributes {
        let summaries: Vec<Option<&AttributeSummary>> =
            groups.values().map(|g| g.get(attr)).collect();

        let name = attr.short_name();
        fields.push(Field::new(format!("{name} mean"), DataType::Float64, true));
        let means: Vec<Option<f64>> = summaries
            .iter()
            .map(|s| s.map(|s| round2(s.mean)))
            .collect();
        columns.push(Arc::new(Float64Array::from(means)));

        fields.push(Field::new(format!("{name} std"), DataType::Float64, true));
        let stds: Vec<Option<f64>> = summaries
            .iter()
            .map(|s| s.map(|s| round2(s.std_dev)))
            .collect();
        columns.push(Arc::new(Float64Array::from(stds)));
    }

    let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)
        .context("building summary table")?;
    Ok(pretty_format_batches(&[batch])
        .context("formatting summary table")?
        .to_string())
}

/// Full correlation matrix, rounded to two decimals.
pub fn correlation_table(matrix: &CorrelationMatrix) -> Result<String> {
    let mut fields = vec![Field::new("", DataType::Utf8, false)];
    let mut columns: Vec<ArrayRef> = vec![Arc::new(StringArray::from(
        matrix
            .attributes()
            .iter()
            .map(|a| a.short_name())
            .collect::<Vec<_>>(),
    ))];

    for (j, attr) in matrix.attributes().iter().enumerate() {
        fields.push(Field::new(attr.short_name(), DataType::Float64, false));
        let values: Vec<f64> = matrix.rows().map(|(_, cells)| round2(cells[j])).collect();
        columns.push(Arc::new(Float64Array::from(values)));
    }

    let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)
        .context("building correlation table")?;
    Ok(pretty_format_batches(&[batch])
        .context("formatting correlation table")?
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Sample;

    fn setosa_only() -> Dataset {
        Dataset::from_samples(vec![
            Sample::new([5.0, 3.0, 1.4, 0.2], Species::Setosa),
            Sample::new([4.8, 3.4, 1.6, 0.2], Species::Setosa),
        ])
        .unwrap()
    }

    #[test]
    fn missing_species_is_skipped_not_fatal() {
        let text = render(&setosa_only()).unwrap();
        assert!(text.contains("Iris Virginica: skipped"));
        assert!(text.contains("Iris Setosa has the most compact petals, averaging only 1.5cm"));
    }

    #[test]
    fn zero_variance_insight_is_reported_undefined() {
        let text = render(&setosa_only()).unwrap();
        assert!(text.contains("Petal length and width dance together (r undefined"));
    }

    #[test]
    fn report_opens_and_closes_the_journey() {
        let text = render(&setosa_only()).unwrap();
        assert!(text.starts_with("Welcome to Blooming Insights!"));
        assert!(text.contains("Final Chapter: The Botanist's Journal"));
        assert!(text.contains("Each species has its own unique growth pattern"));
        let journal = text.find("The Botanist's Journal").unwrap();
        let summary = text.find("Expedition Summary").unwrap();
        assert!(journal < summary);
        assert!(text.trim_end().ends_with(&"=".repeat(60)));
    }

    #[test]
    fn summary_table_lists_each_species() {
        let table = summary_table(&setosa_only(), &[Attribute::SepalLength]).unwrap();
        assert!(table.contains("Iris Setosa"));
        assert!(table.contains("Sepal Length mean"));
        assert!(table.contains("4.9"));
    }
}
