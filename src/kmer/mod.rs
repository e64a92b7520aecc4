pub(crate) mod counter;
pub(crate) mod types;

pub use counter::{build_frequency_table, FrequencyTable};
pub use types::Kmer;
