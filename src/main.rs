mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clump_finder::io::{write_locations, write_report, write_sequence, ClumpReport, GenomeReader};
use clump_finder::sequence::{pattern_locations, reverse_complement};
use clump_finder::ClumpFinder;

use crate::cli::{Cli, ClumpsCommand, Commands, LocateCommand, RevcompCommand};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(log_file) = cli.log_file {
        let file = File::create(log_file)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    // Set up parallel processing
    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to initialize thread pool")?;
    }

    match cli.command {
        Commands::Clumps(cmd) => handle_clumps_command(cmd)?,
        Commands::Locate(cmd) => handle_locate_command(cmd)?,
        Commands::Revcomp(cmd) => handle_revcomp_command(cmd)?,
    }

    Ok(())
}

fn open_output(output: Option<PathBuf>) -> Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout()),
    };
    Ok(writer)
}

fn load_genome(path: &Path) -> Result<Vec<u8>> {
    GenomeReader::new(path)
        .read()
        .with_context(|| format!("Failed to load genome: {}", path.display()))
}

fn handle_clumps_command(cmd: ClumpsCommand) -> Result<()> {
    let genome = load_genome(&cmd.genome)?;
    let finder = ClumpFinder::new(cmd.k, cmd.window, cmd.threshold).with_strategy(cmd.strategy.into());

    if finder.is_degenerate(genome.len()) {
        warn!(
            "Parameters k={}, L={}, t={} admit no clumps in a genome of {} bases",
            cmd.k,
            cmd.window,
            cmd.threshold,
            genome.len()
        );
    }

    info!(
        "Finding clumps with k={}, L={}, t={} ({} strategy)",
        cmd.k,
        cmd.window,
        cmd.threshold,
        finder.strategy()
    );
    let start = Instant::now();
    let clumps = finder.find(&genome);
    let elapsed = start.elapsed();
    info!("Found {} clumps in {:.3?}", clumps.len(), elapsed);

    let list = cmd.list || matches!(cmd.format, cli::OutputFormat::Tsv);
    let report = ClumpReport::new(
        &finder,
        genome.len(),
        clumps,
        cmd.timing.then_some(elapsed),
        list,
    );

    let mut writer = open_output(cmd.output)?;
    write_report(&mut writer, &report, cmd.format.into())?;
    writer.flush()?;
    Ok(())
}

fn handle_locate_command(cmd: LocateCommand) -> Result<()> {
    let genome = load_genome(&cmd.genome)?;
    let pattern = cmd.pattern.to_ascii_uppercase();

    let locations = pattern_locations(&genome, pattern.as_bytes());
    info!("Pattern {} occurs {} times", pattern, locations.len());

    let mut writer = open_output(cmd.output)?;
    write_locations(&mut writer, &pattern, &locations)?;
    writer.flush()?;
    Ok(())
}

fn handle_revcomp_command(cmd: RevcompCommand) -> Result<()> {
    let genome = load_genome(&cmd.genome)?;
    let reversed = reverse_complement(&genome);

    let mut writer = open_output(cmd.output)?;
    write_sequence(&mut writer, &reversed)?;
    writer.flush()?;
    Ok(())
}
