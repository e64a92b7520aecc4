use std::fs::File;
use std::io::Write;

use anyhow::Result;
use clump_finder::io::{write_report, ClumpReport, GenomeReader, ReportFormat};
use clump_finder::{find_clumps, ClumpFinder, Strategy};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

const SAMPLE: &str =
    "CGGACTCGACAGATGTGAAGAACGACAATGTGAAGACTCGACACGACAGAGTGAAGAGAAGAGGAAACATTGTAA";

#[test]
fn sample_from_fasta_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("sample.fasta");
    let mut file = File::create(&path)?;
    writeln!(file, ">sample\n{}\n{}", &SAMPLE[..40], &SAMPLE[40..])?;

    let genome = GenomeReader::new(&path).read()?;
    assert_eq!(genome, SAMPLE.as_bytes());
    assert_eq!(find_clumps(&genome, 5, 50, 4).into_sorted(), vec!["CGACA", "GAAGA"]);
    Ok(())
}

#[test]
fn sample_report_lists_sorted_clumps() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("sample.txt");
    std::fs::write(&path, SAMPLE.to_lowercase())?;

    let genome = GenomeReader::new(&path).read()?;
    let finder = ClumpFinder::new(5, 50, 4).with_strategy(Strategy::Sliding);
    let clumps = finder.find(&genome);
    let report = ClumpReport::new(&finder, genome.len(), clumps, None, true);

    let mut out = Vec::new();
    write_report(&mut out, &report, ReportFormat::Text)?;
    assert_eq!(String::from_utf8(out)?, "Number of clumps found: 2\nCGACA\nGAAGA\n");
    Ok(())
}

#[test]
fn invalid_genome_is_rejected() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("bad.txt");
    std::fs::write(&path, "ACGT1ACGT")?;

    assert!(GenomeReader::new(&path).read().is_err());
    Ok(())
}

/// Published count of (500, 3)-clumps of 9-mers in the E. coli genome.
/// Point CLUMP_FINDER_ECOLI at the genome text file to run it.
#[test]
#[ignore]
fn ecoli_reference_run() -> Result<()> {
    let path = std::env::var("CLUMP_FINDER_ECOLI")?;
    let genome = GenomeReader::new(path).read()?;

    let clumps = ClumpFinder::new(9, 500, 3)
        .with_strategy(Strategy::Sliding)
        .find(&genome);
    assert_eq!(clumps.len(), 1904);
    Ok(())
}
