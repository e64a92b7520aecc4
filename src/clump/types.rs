use fxhash::FxHashSet;
use serde::Serialize;

use crate::kmer::Kmer;

/// How the window scan computes its per-window frequency tables
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub enum Strategy {
    /// Rebuild the table from scratch for every window
    #[default]
    Naive,
    /// Keep one table and update it as the window advances
    Sliding,
    /// Rebuild per window, spreading windows over the rayon pool
    Parallel,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Naive => write!(f, "naive"),
            Strategy::Sliding => write!(f, "sliding"),
            Strategy::Parallel => write!(f, "parallel"),
        }
    }
}

/// K-mers that formed a clump somewhere in the genome.
///
/// Keeps the order in which k-mers first qualified; a k-mer is stored once.
#[derive(Debug, Clone, Default)]
pub struct ClumpSet {
    order: Vec<Kmer>,
    seen: FxHashSet<Kmer>,
}

impl ClumpSet {
    pub fn new() -> Self {
        ClumpSet::default()
    }

    /// Record a k-mer, returning `false` if it was already present
    pub fn insert(&mut self, kmer: &[u8]) -> bool {
        if self.seen.contains(kmer) {
            return false;
        }
        let kmer = Kmer::new(kmer);
        self.seen.insert(kmer.clone());
        self.order.push(kmer);
        true
    }

    pub fn contains(&self, kmer: &[u8]) -> bool {
        self.seen.contains(kmer)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate in first-qualification order
    pub fn iter(&self) -> impl Iterator<Item = &Kmer> {
        self.order.iter()
    }

    /// Clumps as strings in lexicographic order
    pub fn into_sorted(self) -> Vec<String> {
        let mut kmers = self.order;
        kmers.sort();
        kmers.into_iter().map(|kmer| kmer.sequence()).collect()
    }
}

impl PartialEq for ClumpSet {
    /// Equality is set membership; insertion order is ignored
    fn eq(&self, other: &Self) -> bool {
        self.seen == other.seen
    }
}

impl Eq for ClumpSet {}

impl<'a> IntoIterator for &'a ClumpSet {
    type Item = &'a Kmer;
    type IntoIter = std::slice::Iter<'a, Kmer>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_order() {
        let mut clumps = ClumpSet::new();
        assert!(clumps.insert(b"TTT"));
        assert!(clumps.insert(b"AAA"));
        assert!(!clumps.insert(b"TTT"));

        let order: Vec<String> = clumps.iter().map(|k| k.sequence()).collect();
        assert_eq!(order, vec!["TTT", "AAA"]);
        assert_eq!(clumps.len(), 2);
    }

    #[test]
    fn test_sorted_output() {
        let mut clumps = ClumpSet::new();
        clumps.insert(b"GGG");
        clumps.insert(b"ACG");
        clumps.insert(b"CCC");
        assert_eq!(clumps.into_sorted(), vec!["ACG", "CCC", "GGG"]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let mut left = ClumpSet::new();
        left.insert(b"AAA");
        left.insert(b"CCC");

        let mut right = ClumpSet::new();
        right.insert(b"CCC");
        right.insert(b"AAA");

        assert_eq!(left, right);
        right.insert(b"GGG");
        assert_ne!(left, right);
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(Strategy::Naive.to_string(), "naive");
        assert_eq!(Strategy::Sliding.to_string(), "sliding");
        assert_eq!(Strategy::Parallel.to_string(), "parallel");
        assert_eq!(Strategy::default(), Strategy::Naive);
    }
}
