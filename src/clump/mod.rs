pub(crate) mod finder;
pub(crate) mod sliding;
pub(crate) mod types;

pub use finder::{find_clumps, ClumpFinder};
pub use sliding::SlidingTable;
pub use types::{ClumpSet, Strategy};
