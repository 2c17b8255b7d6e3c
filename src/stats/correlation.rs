use super::moments::CoMoments;
use crate::data::model::{Attribute, Dataset};
use crate::error::{Result, StatsError};

// ---------------------------------------------------------------------------
// CorrelationMatrix
// ---------------------------------------------------------------------------

/// Symmetric matrix of Pearson coefficients over the full dataset.
///
/// Cells involving a zero-variance attribute hold NaN, including that
/// attribute's diagonal cell; every other diagonal cell is exactly 1.0.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    attributes: Vec<Attribute>,
    /// Row-major, `attributes.len()²` cells.
    values: Vec<f64>,
}

impl CorrelationMatrix {
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    fn position(&self, attribute: Attribute) -> Option<usize> {
        self.attributes.iter().position(|&a| a == attribute)
    }

    /// Raw cell value, NaN if undefined. `None` if either attribute was not
    /// part of the request.
    pub fn get(&self, a: Attribute, b: Attribute) -> Option<f64> {
        let n = self.attributes.len();
        Some(self.values[self.position(a)? * n + self.position(b)?])
    }

    /// Cell value, reporting the undefined sentinel as an error.
    pub fn coefficient(&self, a: Attribute, b: Attribute) -> Result<f64> {
        let value = self
            .get(a, b)
            .ok_or_else(|| StatsError::UnknownAttribute(format!("{a} / {b}")))?;
        if value.is_nan() {
            Err(StatsError::InsufficientData(a, b))
        } else {
            Ok(value)
        }
    }

    pub fn is_defined(&self, a: Attribute, b: Attribute) -> bool {
        self.get(a, b).is_some_and(|v| !v.is_nan())
    }

    /// Rows in request order, each as `(row attribute, cells)`.
    pub fn rows(&self) -> impl Iterator<Item = (Attribute, &[f64])> {
        self.attributes
            .iter()
            .copied()
            .zip(self.values.chunks(self.attributes.len().max(1)))
    }

    /// Cells strictly below the diagonal as `(row, column, value)`.
    pub fn lower_triangle(&self) -> Vec<(Attribute, Attribute, f64)> {
        let n = self.attributes.len();
        let mut cells = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in 0..i {
                cells.push((self.attributes[i], self.attributes[j], self.values[i * n + j]));
            }
        }
        cells
    }
}

/// Pearson correlation between every pair of requested attributes.
///
/// Only the upper triangle is computed; the lower triangle is mirrored so the
/// matrix is bit-for-bit symmetric. Duplicate attributes in the request are
/// ignored after their first occurrence.
pub fn correlation_matrix(dataset: &Dataset, attributes: &[Attribute]) -> CorrelationMatrix {
    let mut attrs: Vec<Attribute> = Vec::with_capacity(attributes.len());
    for &a in attributes {
        if !attrs.contains(&a) {
            attrs.push(a);
        }
    }

    let n = attrs.len();
    let mut values = vec![f64::NAN; n * n];

    for i in 0..n {
        for j in i..n {
            let mut acc = CoMoments::default();
            for sample in dataset.samples() {
                acc.update(sample.value(attrs[i]), sample.value(attrs[j]));
            }
            let r = acc.pearson();
            let r = if i == j && !r.is_nan() { 1.0 } else { r };
            values[i * n + j] = r;
            values[j * n + i] = r;
        }
    }

    for (i, &a) in attrs.iter().enumerate() {
        if values[i * n + i].is_nan() {
            log::warn!("Attribute '{a}' has zero variance; its correlations are undefined");
        }
    }

    CorrelationMatrix {
        attributes: attrs,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Sample, Species};

    fn dataset() -> Dataset {
        Dataset::from_samples(vec![
            Sample::new([1.0, 5.0, 2.0, 0.3], Species::Setosa),
            Sample::new([2.0, 3.0, 4.1, 0.3], Species::Setosa),
            Sample::new([3.0, 4.0, 5.9, 0.3], Species::Versicolor),
            Sample::new([4.0, 1.0, 8.2, 0.3], Species::Virginica),
        ])
        .unwrap()
    }

    #[test]
    fn diagonal_is_one_and_matrix_is_symmetric() {
        let m = correlation_matrix(&dataset(), &Attribute::ALL[..3]);
        for &a in m.attributes() {
            assert_eq!(m.get(a, a), Some(1.0));
            for &b in m.attributes() {
                assert_eq!(
                    m.get(a, b).unwrap().to_bits(),
                    m.get(b, a).unwrap().to_bits()
                );
                let r = m.get(a, b).unwrap();
                assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&r));
            }
        }
    }

    #[test]
    fn single_attribute_request() {
        let m = correlation_matrix(&dataset(), &[Attribute::PetalLength]);
        assert_eq!(m.attributes(), &[Attribute::PetalLength]);
        assert_eq!(m.get(Attribute::PetalLength, Attribute::PetalLength), Some(1.0));
        assert_eq!(m.get(Attribute::SepalLength, Attribute::PetalLength), None);
    }

    #[test]
    fn zero_variance_attribute_is_undefined_everywhere() {
        let m = correlation_matrix(&dataset(), &Attribute::ALL);
        for &a in &Attribute::ALL {
            assert!(m.get(Attribute::PetalWidth, a).unwrap().is_nan());
            assert!(m.get(a, Attribute::PetalWidth).unwrap().is_nan());
            assert!(!m.is_defined(a, Attribute::PetalWidth));
        }
        assert_eq!(
            m.coefficient(Attribute::SepalLength, Attribute::PetalWidth),
            Err(StatsError::InsufficientData(
                Attribute::SepalLength,
                Attribute::PetalWidth
            ))
        );
        // Unrelated pairs remain usable.
        let r = m
            .coefficient(Attribute::SepalLength, Attribute::PetalLength)
            .unwrap();
        assert!(r > 0.99);
        assert!(m.coefficient(Attribute::SepalLength, Attribute::SepalWidth).unwrap() < 0.0);
    }

    #[test]
    fn lower_triangle_excludes_diagonal() {
        let m = correlation_matrix(&dataset(), &Attribute::ALL);
        let cells = m.lower_triangle();
        assert_eq!(cells.len(), 6);
        assert!(cells.iter().all(|(r, c, _)| r != c));
        assert_eq!(cells[0].0, Attribute::SepalWidth);
        assert_eq!(cells[0].1, Attribute::SepalLength);
    }

    #[test]
    fn duplicate_attributes_are_collapsed() {
        let m = correlation_matrix(
            &dataset(),
            &[Attribute::SepalLength, Attribute::SepalLength, Attribute::SepalWidth],
        );
        assert_eq!(m.attributes().len(), 2);
        assert_eq!(m.rows().count(), 2);
    }
}
