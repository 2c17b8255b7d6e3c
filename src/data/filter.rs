use std::collections::BTreeSet;

use super::model::{Dataset, Species};

// ---------------------------------------------------------------------------
// Filter predicate: which species are selected
// ---------------------------------------------------------------------------

/// Set of species currently shown. An empty set hides everything.
pub type FilterState = BTreeSet<Species>;

/// Initialise a [`FilterState`] with every species present selected.
pub fn init_filter_state(dataset: &Dataset) -> FilterState {
    dataset.species()
}

/// Return indices of samples whose species is selected.
pub fn filtered_indices(dataset: &Dataset, filters: &FilterState) -> Vec<usize> {
    dataset
        .samples()
        .iter()
        .enumerate()
        .filter(|(_, s)| filters.contains(&s.species))
        .map(|(i, _)| i)
        .collect()
}
