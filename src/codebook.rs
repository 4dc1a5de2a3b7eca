//! Code table derivation from a Huffman tree.
//!
//! Each root-to-leaf path becomes that leaf's code: 0 for a left edge, 1
//! for a right edge. The walk is iterative with an explicit stack so a
//! badly skewed alphabet (thousands of rare symbols) cannot overflow the
//! call stack.

use std::collections::BTreeMap;
use std::fmt;

use crate::freq::Symbol;
use crate::tree::Node;

/// A single Huffman code: a non-empty bit sequence, first bit first.
///
/// Codes are kept as explicit bit sequences rather than packed integers
/// because the worst-case depth (alphabet size minus one) can exceed any
/// fixed machine-word width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    /// Number of bits in the code.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True if the code has no bits (only during construction).
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Iterate bits first-to-last.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// True if `self` is a prefix of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len() <= other.len() && self.bits == other.bits[..self.len()]
    }

    fn extended(&self, bit: bool) -> Code {
        let mut bits = self.bits.clone();
        bits.push(bit);
        Code { bits }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// The symbol-to-code mapping for one tree.
///
/// Prefix-free by construction: codes are leaf paths, and no leaf lies on
/// the path to another.
#[derive(Debug, Clone, Default)]
pub struct Codebook {
    codes: BTreeMap<Symbol, Code>,
}

impl Codebook {
    /// Derive the codebook from a tree via iterative depth-first walk.
    ///
    /// Degenerate case: a root that is itself a leaf has no path, so its
    /// one symbol is assigned the single-bit code "0" by convention.
    pub fn from_tree(root: &Node) -> Self {
        let mut codes = BTreeMap::new();

        if let Node::Leaf { symbol, .. } = root {
            codes.insert(*symbol, Code { bits: vec![false] });
            return Self { codes };
        }

        let mut stack: Vec<(&Node, Code)> = vec![(root, Code::default())];
        while let Some((node, path)) = stack.pop() {
            match node {
                Node::Leaf { symbol, .. } => {
                    codes.insert(*symbol, path);
                }
                Node::Internal { left, right, .. } => {
                    stack.push((right, path.extended(true)));
                    stack.push((left, path.extended(false)));
                }
            }
        }

        Self { codes }
    }

    /// Look up the code for a symbol.
    pub fn code(&self, symbol: Symbol) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    /// Number of symbols with codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if no codes exist.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate (symbol, code) entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Code)> {
        self.codes.iter().map(|(&s, c)| (s, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyTable;
    use crate::tree::build_tree;

    fn codebook_for(entries: &[(Symbol, u64)]) -> Codebook {
        let mut table = FrequencyTable::new();
        for &(s, c) in entries {
            table.set(s, c);
        }
        Codebook::from_tree(&build_tree(&table).unwrap())
    }

    #[test]
    fn test_single_symbol_gets_code_zero() {
        let book = codebook_for(&[(b'x' as Symbol, 42)]);
        assert_eq!(book.len(), 1);
        assert_eq!(book.code(b'x' as Symbol).unwrap().to_string(), "0");
    }

    #[test]
    fn test_two_symbols_single_bit_codes() {
        // A:3, B:1 -> B left ("0"), A right ("1")
        let book = codebook_for(&[(0x41, 3), (0x42, 1)]);
        assert_eq!(book.code(0x42).unwrap().to_string(), "0");
        assert_eq!(book.code(0x41).unwrap().to_string(), "1");
    }

    #[test]
    fn test_every_symbol_has_a_code() {
        let entries: Vec<(Symbol, u64)> = (0..=255u32).map(|s| (s, s as u64 + 1)).collect();
        let book = codebook_for(&entries);
        assert_eq!(book.len(), 256);
        for (s, _) in &entries {
            assert!(book.code(*s).is_some());
        }
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let entries: Vec<(Symbol, u64)> =
            (0..40u32).map(|s| (s, (s as u64 * 7) % 11 + 1)).collect();
        let book = codebook_for(&entries);

        let codes: Vec<&Code> = book.iter().map(|(_, c)| c).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!a.is_prefix_of(b), "code {a} is a prefix of {b}");
                }
            }
        }
    }

    #[test]
    fn test_frequent_symbols_get_shorter_codes() {
        let book = codebook_for(&[(1, 100), (2, 10), (3, 1), (4, 1)]);
        let len_of = |s| book.code(s).unwrap().len();
        assert!(len_of(1) <= len_of(2));
        assert!(len_of(2) <= len_of(3));
    }

    #[test]
    fn test_skewed_alphabet_deep_walk() {
        // Exponential weights force a maximally unbalanced tree; the
        // iterative walk must handle the depth without recursion.
        let entries: Vec<(Symbol, u64)> = (0..50u32).map(|s| (s, 1u64 << s)).collect();
        let book = codebook_for(&entries);
        assert_eq!(book.len(), 50);
        // Deepest leaf sits at depth alphabet_size - 1
        let max_len = book.iter().map(|(_, c)| c.len()).max().unwrap();
        assert_eq!(max_len, 49);
    }
}
