use std::collections::HashMap;

use fxhash::FxHashMap;

/// Occurrence counts of every k-mer in one piece of text.
///
/// Keys borrow from the counted text, so a table lives no longer than the
/// window it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<'a> {
    k: usize,
    counts: FxHashMap<&'a [u8], usize>,
}

impl<'a> FrequencyTable<'a> {
    /// Create an empty table for k-mers of length `k`
    pub fn new(k: usize) -> Self {
        FrequencyTable {
            k,
            counts: FxHashMap::default(),
        }
    }

    /// Count every k-mer starting at positions `0..=text.len() - k`.
    ///
    /// A `k` of zero or longer than `text` yields an empty table.
    pub fn build(text: &'a [u8], k: usize) -> Self {
        let mut table = FrequencyTable::new(k);
        if k == 0 || text.len() < k {
            return table;
        }

        text.windows(k).for_each(|kmer| table.add(kmer));
        table
    }

    pub(crate) fn add(&mut self, kmer: &'a [u8]) {
        debug_assert_eq!(kmer.len(), self.k);
        self.counts.entry(kmer).and_modify(|count| *count += 1).or_insert(1);
    }

    /// Decrement a k-mer, dropping the key once its count reaches zero.
    pub(crate) fn remove(&mut self, kmer: &[u8]) {
        if let Some(count) = self.counts.get_mut(kmer) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(kmer);
            }
        }
    }

    /// Count for `kmer`, or `None` if it never occurs
    pub fn get(&self, kmer: &[u8]) -> Option<usize> {
        self.counts.get(kmer).copied()
    }

    /// Number of distinct k-mers
    pub fn unique_kmers(&self) -> usize {
        self.counts.len()
    }

    /// Number of k-mer positions counted, duplicates included
    pub fn total_kmers(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a [u8], usize)> + '_ {
        self.counts.iter().map(|(kmer, count)| (*kmer, *count))
    }

    /// K-mers whose count reaches `threshold`
    pub fn at_least(&self, threshold: usize) -> impl Iterator<Item = &'a [u8]> + '_ {
        self.iter()
            .filter(move |(_, count)| *count >= threshold)
            .map(|(kmer, _)| kmer)
    }

    /// Get k-mer counts as a regular HashMap
    pub fn get_counts(&self) -> HashMap<String, usize> {
        self.counts
            .iter()
            .map(|(kmer, count)| (String::from_utf8_lossy(kmer).into_owned(), *count))
            .collect()
    }
}

/// Build a fresh frequency table of all length-`k` substrings of `text`.
pub fn build_frequency_table(text: &[u8], k: usize) -> FrequencyTable<'_> {
    FrequencyTable::build(text, k)
}
