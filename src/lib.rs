//! Find k-mer clumps: k-mers that occur at least `t` times inside some
//! window of `L` bases of a genome.

pub mod clump;
pub mod io;
pub mod kmer;
pub mod sequence;

pub use clump::{find_clumps, ClumpFinder, ClumpSet, Strategy};
pub use kmer::{build_frequency_table, FrequencyTable, Kmer};
