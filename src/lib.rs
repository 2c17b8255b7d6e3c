pub mod charts;
pub mod data;
pub mod error;
pub mod report;
pub mod stats;

pub use data::loader::load_dataset;
pub use data::model::{Attribute, Dataset, Extremum, Group, Sample, Species};
pub use error::StatsError;
