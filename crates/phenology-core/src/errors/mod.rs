mod phenology_error;

pub use phenology_error::{PhenologyError, PhenologyResult};
