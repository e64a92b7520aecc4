use crate::kmer::FrequencyTable;

/// A frequency table that follows a fixed-length window along a genome.
///
/// Advancing by one position drops the k-mer leaving on the left and adds
/// the one entering on the right, so after every step the table equals
/// `FrequencyTable::build(&genome[start..start + window], k)`.
pub struct SlidingTable<'a> {
    genome: &'a [u8],
    k: usize,
    window: usize,
    start: usize,
    table: FrequencyTable<'a>,
}

impl<'a> SlidingTable<'a> {
    /// Place the window at the start of `genome`. Returns `None` when no
    /// window holds a k-mer (`k == 0`, `k > window`, or `window > genome.len()`).
    pub fn new(genome: &'a [u8], k: usize, window: usize) -> Option<Self> {
        if k == 0 || k > window || window > genome.len() {
            return None;
        }

        Some(SlidingTable {
            genome,
            k,
            window,
            start: 0,
            table: FrequencyTable::build(&genome[..window], k),
        })
    }

    /// Start position of the current window
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn table(&self) -> &FrequencyTable<'a> {
        &self.table
    }

    /// Shift the window right by one and return the k-mer that entered,
    /// or `None` once the window touches the end of the genome.
    pub fn advance(&mut self) -> Option<&'a [u8]> {
        let end = self.start + self.window;
        if end >= self.genome.len() {
            return None;
        }

        let genome = self.genome;
        let outgoing = &genome[self.start..self.start + self.k];
        let incoming = &genome[end + 1 - self.k..end + 1];
        self.table.remove(outgoing);
        self.table.add(incoming);
        self.start += 1;
        Some(incoming)
    }
}
