use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

/// An owned k-mer. Identity is the byte content, never the position it came from.
#[derive(Debug, Clone, Eq)]
pub struct Kmer {
    sequence: Vec<u8>,
}

impl Kmer {
    pub fn new(sequence: &[u8]) -> Self {
        Kmer {
            sequence: sequence.to_vec(),
        }
    }

    pub fn sequence(&self) -> String {
        String::from_utf8_lossy(&self.sequence).into_owned()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.sequence
    }
}

impl Hash for Kmer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sequence.hash(state);
    }
}

impl PartialEq for Kmer {
    fn eq(&self, other: &Self) -> bool {
        self.sequence == other.sequence
    }
}

impl Ord for Kmer {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sequence.cmp(&other.sequence)
    }
}

impl PartialOrd for Kmer {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// Lets sets keyed by Kmer be probed with a borrowed window slice.
impl Borrow<[u8]> for Kmer {
    fn borrow(&self) -> &[u8] {
        &self.sequence
    }
}

impl From<&str> for Kmer {
    fn from(s: &str) -> Self {
        Kmer::new(s.as_bytes())
    }
}

impl fmt::Display for Kmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.sequence))
    }
}

impl Serialize for Kmer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
