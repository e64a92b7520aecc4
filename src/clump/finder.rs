use dashmap::DashMap;
use log::debug;
use rayon::prelude::*;

use super::sliding::SlidingTable;
use super::types::{ClumpSet, Strategy};
use crate::kmer::{FrequencyTable, Kmer};

/// Scans a genome for k-mers that occur at least `threshold` times inside
/// some window of `window` bases.
///
/// Degenerate parameters (any of them zero, `k > window`, or a genome
/// shorter than the window) produce an empty result rather than an error.
#[derive(Debug, Clone)]
pub struct ClumpFinder {
    k: usize,
    window: usize,
    threshold: usize,
    strategy: Strategy,
}

impl ClumpFinder {
    /// Create a ClumpFinder using the naive per-window strategy
    pub fn new(k: usize, window: usize, threshold: usize) -> Self {
        ClumpFinder {
            k,
            window,
            threshold,
            strategy: Strategy::Naive,
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn kmer_size(&self) -> usize {
        self.k
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// True when no genome of `genome_len` bases can contain a clump
    pub fn is_degenerate(&self, genome_len: usize) -> bool {
        self.k == 0
            || self.window == 0
            || self.threshold == 0
            || self.k > self.window
            || self.window > genome_len
    }

    /// Number of window start positions in a genome of `genome_len` bases
    pub fn window_count(&self, genome_len: usize) -> usize {
        if self.window == 0 || self.window > genome_len {
            0
        } else {
            genome_len - self.window + 1
        }
    }

    /// Find every clump in `genome` with the configured strategy
    pub fn find(&self, genome: &[u8]) -> ClumpSet {
        if self.is_degenerate(genome.len()) {
            debug!(
                "No windows to scan (n={}, k={}, L={}, t={})",
                genome.len(),
                self.k,
                self.window,
                self.threshold
            );
            return ClumpSet::new();
        }

        debug!(
            "Scanning {} windows of length {} for {}-mers seen at least {} times ({} strategy)",
            self.window_count(genome.len()),
            self.window,
            self.k,
            self.threshold,
            self.strategy
        );

        let clumps = match self.strategy {
            Strategy::Naive => self.find_naive(genome),
            Strategy::Sliding => self.find_sliding(genome),
            Strategy::Parallel => self.find_parallel(genome),
        };

        debug!("Found {} clumps", clumps.len());
        clumps
    }

    /// Rebuild a fresh table for every window; first qualification wins
    fn find_naive(&self, genome: &[u8]) -> ClumpSet {
        let mut clumps = ClumpSet::new();

        for window in genome.windows(self.window) {
            let table = FrequencyTable::build(window, self.k);
            for kmer in table.at_least(self.threshold) {
                clumps.insert(kmer);
            }
        }

        clumps
    }

    /// Only the k-mer entering the window can newly reach the threshold,
    /// every other count stays put or drops.
    fn find_sliding(&self, genome: &[u8]) -> ClumpSet {
        let mut clumps = ClumpSet::new();
        let Some(mut sliding) = SlidingTable::new(genome, self.k, self.window) else {
            return clumps;
        };

        for kmer in sliding.table().at_least(self.threshold) {
            clumps.insert(kmer);
        }

        while let Some(incoming) = sliding.advance() {
            if sliding.table().get(incoming).unwrap_or(0) >= self.threshold {
                clumps.insert(incoming);
            }
        }

        clumps
    }

    /// Windows are independent, so each rayon task builds its own table.
    /// Every clump remembers the earliest window it qualified in, and the
    /// result is ordered by that window, then by k-mer.
    fn find_parallel(&self, genome: &[u8]) -> ClumpSet {
        let first_seen: DashMap<Kmer, usize> = DashMap::new();

        (0..self.window_count(genome.len()))
            .into_par_iter()
            .for_each(|start| {
                let table = FrequencyTable::build(&genome[start..start + self.window], self.k);
                for kmer in table.at_least(self.threshold) {
                    first_seen
                        .entry(Kmer::new(kmer))
                        .and_modify(|window| *window = (*window).min(start))
                        .or_insert(start);
                }
            });

        let mut ordered: Vec<(usize, Kmer)> = first_seen
            .into_iter()
            .map(|(kmer, window)| (window, kmer))
            .collect();
        ordered.sort();

        let mut clumps = ClumpSet::new();
        for (_, kmer) in &ordered {
            clumps.insert(kmer.as_bytes());
        }
        clumps
    }
}

/// Find all k-mers occurring at least `t` times in some window of length `l`,
/// recomputing the frequency table for each window.
pub fn find_clumps(genome: &[u8], k: usize, l: usize, t: usize) -> ClumpSet {
    ClumpFinder::new(k, l, t).find(genome)
}
