//! Statistics engine: deterministic descriptive statistics over a [`Dataset`].
//!
//! Every operation is a pure function of its inputs. Summaries and matrices
//! are freshly allocated plain data and hold no references into the dataset.
//!
//! [`Dataset`]: crate::data::model::Dataset

pub mod correlation;
pub mod moments;
pub mod summary;

pub use correlation::{correlation_matrix, CorrelationMatrix};
pub use summary::{
    extremum, measurement_precision, summarize_all, summarize_by_group, AttributeSummary,
    GroupSummary,
};

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::data::model::{Attribute, Dataset, Extremum, Group, Sample, Species};
    use proptest::prelude::*;

    /// Rows of `(species, measurements)`; columns flagged in `constant` are
    /// overwritten with a single value.
    fn dataset_strategy() -> impl Strategy<Value = Dataset> {
        (
            prop::collection::vec((0usize..3, prop::array::uniform4(0.1f64..10.0)), 1..60),
            prop::array::uniform4(any::<bool>()),
            0.1f64..10.0,
        )
            .prop_map(|(rows, constant, fill)| {
                let samples = rows
                    .into_iter()
                    .map(|(code, mut values)| {
                        for (v, &flat) in values.iter_mut().zip(&constant) {
                            if flat {
                                *v = fill;
                            }
                        }
                        Sample::new(values, Species::ALL[code])
                    })
                    .collect();
                Dataset::from_samples(samples).unwrap()
            })
    }

    fn varies(dataset: &Dataset, attribute: Attribute) -> bool {
        let first = dataset.samples()[0].value(attribute);
        dataset.samples().iter().any(|s| s.value(attribute) != first)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn one_summary_per_species_and_counts_add_up(ds in dataset_strategy()) {
            let groups = summarize_by_group(&ds, &Attribute::ALL);
            let labels: Vec<Species> = groups.keys().copied().collect();
            let present: Vec<Species> = ds.species().into_iter().collect();
            prop_assert_eq!(labels, present);
            let total: usize = groups.values().map(|g| g.count).sum();
            prop_assert_eq!(total, ds.len());
            for (species, group) in &groups {
                prop_assert_eq!(group.count, ds.group_counts()[species]);
                prop_assert!(group.count > 0);
            }
        }

        #[test]
        fn summaries_are_bounded_by_extrema(ds in dataset_strategy()) {
            for (species, group) in summarize_by_group(&ds, &Attribute::ALL) {
                for attr in Attribute::ALL {
                    let s = group.get(attr).unwrap();
                    prop_assert!(s.min <= s.mean + 1e-9 && s.mean <= s.max + 1e-9);
                    prop_assert_eq!(group.count < 2, s.std_dev.is_nan());
                    let lo = extremum(&ds, Group::Species(species), attr, Extremum::Min).unwrap();
                    prop_assert_eq!(lo, s.min);
                }
            }
        }

        #[test]
        fn matrix_is_symmetric_and_bounded(ds in dataset_strategy()) {
            let m = correlation_matrix(&ds, &Attribute::ALL);
            for a in Attribute::ALL {
                for b in Attribute::ALL {
                    let r = m.get(a, b).unwrap();
                    prop_assert_eq!(r.to_bits(), m.get(b, a).unwrap().to_bits());
                    if !r.is_nan() {
                        prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&r));
                    }
                }
            }
        }

        #[test]
        fn undefined_cells_follow_zero_variance(ds in dataset_strategy()) {
            let m = correlation_matrix(&ds, &Attribute::ALL);
            for a in Attribute::ALL {
                let diagonal = m.get(a, a).unwrap();
                if varies(&ds, a) {
                    prop_assert_eq!(diagonal, 1.0);
                } else {
                    prop_assert!(diagonal.is_nan());
                }
                for b in Attribute::ALL {
                    let defined = varies(&ds, a) && varies(&ds, b);
                    prop_assert_eq!(m.is_defined(a, b), defined);
                }
            }
        }

        #[test]
        fn repeated_calls_are_bit_identical(ds in dataset_strategy()) {
            let first = correlation_matrix(&ds, &Attribute::ALL);
            let second = correlation_matrix(&ds, &Attribute::ALL);
            for a in Attribute::ALL {
                for b in Attribute::ALL {
                    prop_assert_eq!(
                        first.get(a, b).unwrap().to_bits(),
                        second.get(a, b).unwrap().to_bits()
                    );
                }
            }

            let bits = |ds: &Dataset| -> Vec<u64> {
                summarize_by_group(ds, &Attribute::ALL)
                    .values()
                    .flat_map(|g| g.attributes.values())
                    .flat_map(|s| [s.mean, s.std_dev, s.min, s.max])
                    .map(f64::to_bits)
                    .collect()
            };
            prop_assert_eq!(bits(&ds), bits(&ds));
        }
    }
}
