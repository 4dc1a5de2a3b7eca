//! Huffman tree construction.
//!
//! The tree is built once per encode from the input's frequency table, and
//! rebuilt at decode time from the table stored in the container header.
//! Both sides must arrive at the *same shape*, not just the same code
//! lengths, so merge order has to be a pure function of the (symbol,
//! frequency) pairs.
//!
//! # Ordering
//!
//! Candidates are compared by:
//! 1. weight, ascending
//! 2. leaf before internal at equal weight
//! 3. smallest symbol in the subtree, ascending
//!
//! Within one construction the live candidates hold disjoint symbol sets,
//! so rule 3 never ties: the order is strict and the merge sequence is
//! fully determined by the table alone, independent of heap internals or
//! insertion order.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::{HuffmanError, Result};
use crate::freq::{FrequencyTable, Symbol};

/// A node of the prefix tree: a symbol leaf or a two-child internal node.
///
/// Each node carries the summed frequency of its subtree. Internal nodes
/// also cache the smallest symbol below them, used only as the final
/// comparison key during construction.
#[derive(Debug, Clone)]
pub enum Node {
    Leaf {
        weight: u64,
        symbol: Symbol,
    },
    Internal {
        weight: u64,
        min_symbol: Symbol,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Create a leaf for one symbol.
    pub fn leaf(symbol: Symbol, weight: u64) -> Self {
        Node::Leaf { weight, symbol }
    }

    /// Merge two nodes into an internal parent; the first argument becomes
    /// the left child.
    ///
    /// Weights saturate instead of overflowing: a decoded table can store
    /// arbitrary u64 counts, and weights only order merges, so saturation
    /// cannot change which tree a table produces round-trip.
    pub fn merge(left: Node, right: Node) -> Self {
        Node::Internal {
            weight: left.weight().saturating_add(right.weight()),
            min_symbol: left.min_symbol().min(right.min_symbol()),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Combined frequency of all symbols in this subtree.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// Smallest symbol in this subtree.
    pub fn min_symbol(&self) -> Symbol {
        match self {
            Node::Leaf { symbol, .. } => *symbol,
            Node::Internal { min_symbol, .. } => *min_symbol,
        }
    }

    /// True for leaves.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Comparison key: weight, then leaf-before-internal, then min symbol.
    fn key(&self) -> (u64, u8, Symbol) {
        let rank = if self.is_leaf() { 0 } else { 1 };
        (self.weight(), rank, self.min_symbol())
    }
}

// Equality and ordering compare construction keys, not subtree structure.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Node {}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Build the Huffman tree for a frequency table.
///
/// Seeds a min-priority queue with one leaf per distinct symbol, then
/// repeatedly merges the two lowest-ordered candidates until a single root
/// remains. The lower-ordered candidate of each pair becomes the left
/// child. A single-entry table yields a lone leaf with no merges.
///
/// # Errors
/// `HuffmanError::EmptyAlphabet` if the table has no entries.
pub fn build_tree(table: &FrequencyTable) -> Result<Node> {
    if table.is_empty() {
        return Err(HuffmanError::EmptyAlphabet.into());
    }

    let mut heap: BinaryHeap<Reverse<Node>> = table
        .iter()
        .map(|(symbol, count)| Reverse(Node::leaf(symbol, count)))
        .collect();

    while heap.len() > 1 {
        let (first, second) = match (heap.pop(), heap.pop()) {
            (Some(Reverse(a)), Some(Reverse(b))) => (a, b),
            // Unreachable: the loop condition guarantees two entries
            _ => break,
        };
        heap.push(Reverse(Node::merge(first, second)));
    }

    match heap.pop() {
        Some(Reverse(root)) => Ok(root),
        None => Err(HuffmanError::EmptyAlphabet.into()),
    }
}
