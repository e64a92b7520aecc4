use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Find k-mer clumps in genomic sequences")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Number of threads to use
    #[arg(short = 'j', long, global = true)]
    pub threads: Option<usize>,

    /// Path to log file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find k-mers forming clumps in some window of the genome
    Clumps(ClumpsCommand),

    /// List every position where a pattern occurs
    Locate(LocateCommand),

    /// Print the reverse complement of the genome
    Revcomp(RevcompCommand),
}

#[derive(Parser, Debug)]
pub struct ClumpsCommand {
    /// Genome file (raw nucleotides or FASTA/FASTQ)
    pub genome: PathBuf,

    /// K-mer length
    #[arg(short = 'k', long = "kmer-size", default_value = "9")]
    pub k: usize,

    /// Window length
    #[arg(short = 'L', long, default_value = "500")]
    pub window: usize,

    /// Minimum occurrences inside one window
    #[arg(short, long, default_value = "3")]
    pub threshold: usize,

    /// Scan strategy
    #[arg(short, long, value_enum, default_value = "naive")]
    pub strategy: Strategy,

    /// List the clumps, not just their number
    #[arg(long)]
    pub list: bool,

    /// Report elapsed scan time
    #[arg(long)]
    pub timing: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct LocateCommand {
    /// Genome file (raw nucleotides or FASTA/FASTQ)
    pub genome: PathBuf,

    /// Pattern to search for
    pub pattern: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct RevcompCommand {
    /// Genome file (raw nucleotides or FASTA/FASTQ)
    pub genome: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum Strategy {
    Naive,
    Sliding,
    Parallel,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum OutputFormat {
    Text,
    Tsv,
    Json,
}

impl From<Strategy> for clump_finder::Strategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Naive => Self::Naive,
            Strategy::Sliding => Self::Sliding,
            Strategy::Parallel => Self::Parallel,
        }
    }
}

impl From<OutputFormat> for clump_finder::io::ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Tsv => Self::Tsv,
            OutputFormat::Json => Self::Json,
        }
    }
}
