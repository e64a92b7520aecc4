use rayon::prelude::*;

/// Every start position of `pattern` in `genome`, overlapping matches included.
pub fn pattern_locations(genome: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > genome.len() {
        return Vec::new();
    }

    genome
        .windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(position, _)| position)
        .collect()
}

/// Watson-Crick complement of a single base; anything else becomes `N`
pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        _ => b'N',
    }
}

/// Reverse complement of the whole genome
pub fn reverse_complement(genome: &[u8]) -> Vec<u8> {
    genome.par_iter().rev().map(|&base| complement(base)).collect()
}
