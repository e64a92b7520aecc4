pub(crate) mod reader;
pub(crate) mod writer;

pub use reader::{GenomeError, GenomeReader};
pub use writer::{write_locations, write_report, write_sequence, ClumpReport, ReportFormat};
