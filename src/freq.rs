//! Symbol frequency counting.
//!
//! The frequency table is the statistical model the whole codec hangs off:
//! the encoder builds its tree from it, serializes it into the container
//! header, and the decoder rebuilds the identical tree from the stored copy.
//! The table iterates in ascending symbol order so that every consumer
//! (heap seeding, header serialization) sees the same deterministic order.

use std::collections::BTreeMap;

/// An alphabet element, as an opaque integer.
///
/// Byte mode uses 0..=255; code-point mode uses Unicode scalar values.
pub type Symbol = u32;

/// Occurrence counts per distinct symbol.
///
/// # Invariants
/// - Every symbol present in the source sequence appears with its exact count
/// - Counts sum to the sequence length
/// - The table is empty iff the source sequence was empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<Symbol, u64>,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Count occurrences of each distinct symbol in a sequence.
    pub fn from_symbols(symbols: &[Symbol]) -> Self {
        let mut counts = BTreeMap::new();
        for &symbol in symbols {
            *counts.entry(symbol).or_insert(0u64) += 1;
        }
        Self { counts }
    }

    /// Record `count` occurrences of `symbol`, replacing any previous entry.
    ///
    /// Used when reading a stored table back out of a container header.
    pub fn set(&mut self, symbol: Symbol, count: u64) {
        self.counts.insert(symbol, count);
    }

    /// Look up the count for a symbol (0 if absent).
    pub fn get(&self, symbol: Symbol) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if no symbols have been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts.iter().map(|(&s, &c)| (s, c))
    }
}
