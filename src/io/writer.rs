use std::io::Write;
use std::time::Duration;

use anyhow::{bail, Result};
use serde::Serialize;

use crate::clump::{ClumpFinder, ClumpSet, Strategy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Tsv,
    Json,
}

/// Summary of one clump scan
#[derive(Debug, Clone, Serialize)]
pub struct ClumpReport {
    pub k: usize,
    pub window: usize,
    pub threshold: usize,
    pub strategy: Strategy,
    pub genome_length: usize,
    pub clump_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clumps: Option<Vec<String>>,
}

impl ClumpReport {
    /// Build a report; clumps are listed (sorted) only when `list` is set
    pub fn new(
        finder: &ClumpFinder,
        genome_length: usize,
        clumps: ClumpSet,
        elapsed: Option<Duration>,
        list: bool,
    ) -> Self {
        let clump_count = clumps.len();
        ClumpReport {
            k: finder.kmer_size(),
            window: finder.window(),
            threshold: finder.threshold(),
            strategy: finder.strategy(),
            genome_length,
            clump_count,
            elapsed_ms: elapsed.map(|d| d.as_secs_f64() * 1000.0),
            clumps: list.then(|| clumps.into_sorted()),
        }
    }
}

/// Write a report. TSV output lists k-mers only, so it requires a report
/// built with `list` set.
pub fn write_report<W: Write>(writer: &mut W, report: &ClumpReport, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Text => {
            if report.clump_count == 0 {
                writeln!(writer, "No clumps found with the given parameters.")?;
            } else {
                writeln!(writer, "Number of clumps found: {}", report.clump_count)?;
            }
            if let Some(clumps) = &report.clumps {
                for kmer in clumps {
                    writeln!(writer, "{}", kmer)?;
                }
            }
            if let Some(ms) = report.elapsed_ms {
                writeln!(writer, "Time taken: {:.3} s", ms / 1000.0)?;
            }
        }
        ReportFormat::Tsv => {
            let Some(clumps) = &report.clumps else {
                bail!("TSV output needs the clump list; build the report with list enabled");
            };
            writeln!(writer, "kmer")?;
            for kmer in clumps {
                writeln!(writer, "{}", kmer)?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, report)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

pub fn write_locations<W: Write>(writer: &mut W, pattern: &str, locations: &[usize]) -> Result<()> {
    if locations.is_empty() {
        writeln!(writer, "The pattern '{}' was not found in the genome.", pattern)?;
        return Ok(());
    }

    writeln!(
        writer,
        "The pattern '{}' appears {} times at positions:",
        pattern,
        locations.len()
    )?;
    let positions: Vec<String> = locations.iter().map(|p| p.to_string()).collect();
    writeln!(writer, "{}", positions.join(" "))?;
    Ok(())
}

pub fn write_sequence<W: Write>(writer: &mut W, sequence: &[u8]) -> Result<()> {
    writer.write_all(sequence)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report(list: bool) -> ClumpReport {
        timed_report(None, list)
    }

    fn timed_report(elapsed: Option<Duration>, list: bool) -> ClumpReport {
        let finder = ClumpFinder::new(3, 6, 2);
        let mut clumps = ClumpSet::new();
        clumps.insert(b"TTT");
        clumps.insert(b"AAA");
        ClumpReport::new(&finder, 20, clumps, elapsed, list)
    }

    #[test]
    fn test_text_report() -> Result<()> {
        let mut out = Vec::new();
        write_report(&mut out, &sample_report(true), ReportFormat::Text)?;
        assert_eq!(
            String::from_utf8(out)?,
            "Number of clumps found: 2\nAAA\nTTT\n"
        );
        Ok(())
    }

    #[test]
    fn test_text_report_without_clumps() -> Result<()> {
        let finder = ClumpFinder::new(3, 6, 2);
        let report = ClumpReport::new(&finder, 4, ClumpSet::new(), None, false);
        let mut out = Vec::new();
        write_report(&mut out, &report, ReportFormat::Text)?;
        assert_eq!(String::from_utf8(out)?, "No clumps found with the given parameters.\n");
        Ok(())
    }

    #[test]
    fn test_json_report() -> Result<()> {
        let mut out = Vec::new();
        write_report(&mut out, &sample_report(false), ReportFormat::Json)?;
        let value: serde_json::Value = serde_json::from_slice(&out)?;
        assert_eq!(value["clump_count"], 2);
        assert_eq!(value["strategy"], "Naive");
        assert!(value.get("clumps").is_none());
        assert!(value.get("elapsed_ms").is_none());
        Ok(())
    }

    #[test]
    fn test_tsv_report() -> Result<()> {
        let mut out = Vec::new();
        write_report(&mut out, &sample_report(true), ReportFormat::Tsv)?;
        assert_eq!(String::from_utf8(out)?, "kmer\nAAA\nTTT\n");
        Ok(())
    }

    #[test]
    fn test_tsv_without_list_is_rejected() {
        let mut out = Vec::new();
        assert!(write_report(&mut out, &sample_report(false), ReportFormat::Tsv).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_text_report_with_timing() -> Result<()> {
        let mut out = Vec::new();
        let report = timed_report(Some(Duration::from_millis(1500)), false);
        write_report(&mut out, &report, ReportFormat::Text)?;
        assert_eq!(
            String::from_utf8(out)?,
            "Number of clumps found: 2\nTime taken: 1.500 s\n"
        );
        Ok(())
    }

    #[test]
    fn test_json_report_with_timing_and_clumps() -> Result<()> {
        let mut out = Vec::new();
        let report = timed_report(Some(Duration::from_millis(250)), true);
        write_report(&mut out, &report, ReportFormat::Json)?;
        let value: serde_json::Value = serde_json::from_slice(&out)?;
        assert_eq!(value["elapsed_ms"], 250.0);
        assert_eq!(value["clumps"], serde_json::json!(["AAA", "TTT"]));
        assert_eq!(value["k"], 3);
        assert_eq!(value["window"], 6);
        assert_eq!(value["threshold"], 2);
        assert_eq!(value["genome_length"], 20);
        Ok(())
    }

    #[test]
    fn test_locations() -> Result<()> {
        let mut out = Vec::new();
        write_locations(&mut out, "ATAT", &[1, 3, 9])?;
        assert_eq!(
            String::from_utf8(out)?,
            "The pattern 'ATAT' appears 3 times at positions:\n1 3 9\n"
        );
        Ok(())
    }
}
