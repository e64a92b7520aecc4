use std::fs;
use std::path::{Path, PathBuf};

use bio::alphabets::dna;
use log::{debug, info};
use needletail::parse_fastx_file;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenomeError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("{path} contains no sequence")]
    Empty { path: PathBuf },

    #[error("{path}: invalid base '{base}' at position {position}")]
    InvalidBase {
        path: PathBuf,
        base: char,
        position: usize,
    },
}

/// Loads a genome as one contiguous upper-case sequence.
///
/// FASTA/FASTQ input (first non-blank byte `>` or `@`) is parsed with
/// needletail and all records are concatenated. Anything else is treated as
/// raw sequence text with whitespace stripped.
pub struct GenomeReader {
    path: PathBuf,
}

impl GenomeReader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        GenomeReader {
            path: path.as_ref().to_owned(),
        }
    }

    /// Read, normalize and validate the genome
    pub fn read(&self) -> Result<Vec<u8>, GenomeError> {
        info!("Loading genome from {}", self.path.display());

        let raw = fs::read(&self.path).map_err(|source| GenomeError::Io {
            path: self.path.clone(),
            source,
        })?;

        let genome = match raw.iter().find(|b| !b.is_ascii_whitespace()) {
            Some(b'>') | Some(b'@') => self.read_fastx()?,
            Some(_) => normalize(&raw),
            None => Vec::new(),
        };

        if genome.is_empty() {
            return Err(GenomeError::Empty {
                path: self.path.clone(),
            });
        }
        validate(&self.path, &genome)?;

        info!("Loaded {} bases from {}", genome.len(), self.path.display());
        Ok(genome)
    }

    fn read_fastx(&self) -> Result<Vec<u8>, GenomeError> {
        let parse_error = |e: needletail::errors::ParseError| GenomeError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        };

        let mut reader = parse_fastx_file(&self.path).map_err(parse_error)?;
        let mut genome = Vec::new();
        let mut num_records = 0;

        while let Some(record) = reader.next() {
            let record = record.map_err(parse_error)?;
            // needletail's normalize masks unknown bytes as N; validation must see them
            genome.extend(normalize(&record.seq()));
            num_records += 1;
        }

        debug!("Concatenated {} records from {}", num_records, self.path.display());
        Ok(genome)
    }
}

/// Strip whitespace and upper-case a raw sequence
pub fn normalize(raw: &[u8]) -> Vec<u8> {
    raw.iter()
        .filter(|b| !b.is_ascii_whitespace())
        .map(|b| b.to_ascii_uppercase())
        .collect()
}

/// Reject bytes outside the IUPAC nucleotide alphabet
pub fn validate(path: &Path, genome: &[u8]) -> Result<(), GenomeError> {
    let alphabet = dna::iupac_alphabet();
    if alphabet.is_word(genome) {
        return Ok(());
    }

    match genome.iter().position(|&b| !alphabet.is_word([b])) {
        Some(position) => Err(GenomeError::InvalidBase {
            path: path.to_owned(),
            base: genome[position] as char,
            position,
        }),
        None => Ok(()),
    }
}
