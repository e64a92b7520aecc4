pub(crate) mod ops;

pub use ops::{complement, pattern_locations, reverse_complement};
