//! Self-describing container serialization and the encode/decode entry
//! points.
//!
//! The header carries everything the decoder needs to rebuild the Huffman
//! tree (alphabet mode and the frequency table), so the tree itself is
//! never persisted. Multi-byte integers are big-endian.
//!
//! # Container Format
//!
//! ```text
//! +--------------------+
//! | Magic (4 bytes)    |  0x48 0x46 0x4D 0x31 ("HFM1")
//! +--------------------+
//! | mode (1)           |  0 = raw bytes, 1 = Unicode code points
//! +--------------------+
//! | symbol_count (4)   |  u32 number of distinct symbols
//! +--------------------+
//! | per symbol:        |
//! |   symbol (4)       |  u32
//! |   frequency (8)    |  u64
//! +--------------------+
//! | total_bits (8)     |  u64 meaningful bits in the payload
//! +--------------------+
//! | payload            |  packed codes, MSB-first, zero-padded
//! | (variable)         |
//! +--------------------+
//! ```
//!
//! The symbol table is written in ascending symbol order, which together
//! with deterministic tree construction makes encoding byte-reproducible.
//!
//! # Empty-input asymmetry
//!
//! `encode` rejects empty input, but `decode` accepts a container whose
//! stored table has zero symbols and produces empty output. A decoder must
//! handle such containers even though this encoder never emits one.

use crate::alphabet::Alphabet;
use crate::bitio::{BitReader, BitWriter};
use crate::codebook::Codebook;
use crate::error::{ContainerError, Error, HuffmanError, Result};
use crate::freq::FrequencyTable;
use crate::tree::{build_tree, Node};

/// Magic marker: "HFM1" (Huffman Format, version 1)
const MAGIC: [u8; 4] = [0x48, 0x46, 0x4D, 0x31];

/// Bytes before the symbol table: magic + mode + symbol_count
const FIXED_HEADER_SIZE: usize = 9;

/// Bytes per stored (symbol, frequency) pair
const PAIR_SIZE: usize = 12;

/// Result of decoding a container: the reconstructed bytes and the
/// alphabet they were encoded under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Original input, byte-for-byte
    pub data: Vec<u8>,
    /// Alphabet mode stored in the container
    pub alphabet: Alphabet,
}

/// Compress `input` into a self-describing container.
///
/// Models the whole input in one pass, builds the prefix tree, packs each
/// symbol's code in occurrence order, and prepends the header.
///
/// # Errors
/// - `Error::EmptyInput` if the input yields zero symbols
/// - `Error::InvalidUtf8` in code-point mode on malformed UTF-8
pub fn encode(input: &[u8], alphabet: Alphabet) -> Result<Vec<u8>> {
    let symbols = alphabet.extract(input)?;
    if symbols.is_empty() {
        return Err(Error::EmptyInput);
    }

    let table = FrequencyTable::from_symbols(&symbols);
    let root = build_tree(&table)?;
    let codebook = Codebook::from_tree(&root);

    let mut writer = BitWriter::new();
    for &symbol in &symbols {
        let code = codebook
            .code(symbol)
            .ok_or(HuffmanError::MissingCode { symbol })?;
        for bit in code.iter() {
            writer.write_bit(bit);
        }
    }
    let total_bits = writer.bit_len() as u64;
    let payload = writer.finish();

    let total_size = FIXED_HEADER_SIZE + table.len() * PAIR_SIZE + 8 + payload.len();
    let mut container = Vec::with_capacity(total_size);

    container.extend_from_slice(&MAGIC);
    container.push(alphabet.mode_byte());
    container.extend_from_slice(&(table.len() as u32).to_be_bytes());
    for (symbol, count) in table.iter() {
        container.extend_from_slice(&symbol.to_be_bytes());
        container.extend_from_slice(&count.to_be_bytes());
    }
    container.extend_from_slice(&total_bits.to_be_bytes());
    container.extend_from_slice(&payload);

    Ok(container)
}

/// Decompress a container back into the original bytes.
///
/// Rebuilds the tree from the *stored* frequency table (the original input
/// is not available here), then walks exactly `total_bits` payload bits
/// through it. Trailing padding bits are ignored.
///
/// # Errors
/// - `ContainerError::InvalidMagic` if the marker does not match
/// - `ContainerError::HeaderTooShort` / `TruncatedSymbolTable` /
///   `TruncatedPayload` if the declared structure does not fit the buffer
/// - `ContainerError::UnknownAlphabetMode` on an unrecognized mode byte
/// - `ContainerError::SymbolOutOfRange` / `InvalidCodePoint` if a stored
///   symbol is not representable in the stored alphabet
pub fn decode(container: &[u8]) -> Result<Decoded> {
    if container.len() < FIXED_HEADER_SIZE {
        return Err(ContainerError::HeaderTooShort {
            required: FIXED_HEADER_SIZE,
            actual: container.len(),
        }
        .into());
    }

    let magic: [u8; 4] = container[0..4].try_into().unwrap();
    if magic != MAGIC {
        return Err(ContainerError::InvalidMagic {
            expected: MAGIC,
            actual: magic,
        }
        .into());
    }

    let alphabet = Alphabet::from_mode_byte(container[4])?;
    let symbol_count = u32::from_be_bytes(container[5..9].try_into().unwrap());

    // Widen before multiplying: a hostile symbol_count must not wrap the
    // bounds check
    let table_len = symbol_count as u64 * PAIR_SIZE as u64;
    if (container.len() as u64) < FIXED_HEADER_SIZE as u64 + table_len {
        return Err(ContainerError::TruncatedSymbolTable {
            declared: symbol_count,
            available: container.len() - FIXED_HEADER_SIZE,
        }
        .into());
    }
    let table_end = FIXED_HEADER_SIZE + table_len as usize;

    let mut table = FrequencyTable::new();
    let mut offset = FIXED_HEADER_SIZE;
    for _ in 0..symbol_count {
        let symbol = u32::from_be_bytes(container[offset..offset + 4].try_into().unwrap());
        let count = u64::from_be_bytes(container[offset + 4..offset + 12].try_into().unwrap());
        alphabet.validate_symbol(symbol)?;
        table.set(symbol, count);
        offset += PAIR_SIZE;
    }

    if container.len() < table_end + 8 {
        return Err(ContainerError::HeaderTooShort {
            required: table_end + 8,
            actual: container.len(),
        }
        .into());
    }
    let total_bits = u64::from_be_bytes(container[table_end..table_end + 8].try_into().unwrap());
    let payload = &container[table_end + 8..];

    // An explicitly-constructed empty container decodes to empty output;
    // this mirrors encode's rejection of empty input without breaking
    // round-trip symmetry for such containers.
    if table.is_empty() {
        return Ok(Decoded {
            data: Vec::new(),
            alphabet,
        });
    }

    let root = build_tree(&table)?;
    let mut data = Vec::new();

    // Single-symbol alphabet: the stored frequency, not the bit count,
    // governs repetition; payload bits are ignored entirely.
    if let Node::Leaf { symbol, .. } = root {
        let count = table.get(symbol);
        for _ in 0..count {
            alphabet.emit(symbol, &mut data)?;
        }
        return Ok(Decoded { data, alphabet });
    }

    let available_bits = payload.len() as u64 * 8;
    if total_bits > available_bits {
        return Err(ContainerError::TruncatedPayload {
            required_bits: total_bits,
            available_bits,
        }
        .into());
    }

    let mut reader = BitReader::new(payload);
    let mut node = &root;
    for _ in 0..total_bits {
        let bit = reader.read_bit()?;
        if let Node::Internal { left, right, .. } = node {
            node = if bit { right.as_ref() } else { left.as_ref() };
        }
        if let Node::Leaf { symbol, .. } = node {
            alphabet.emit(*symbol, &mut data)?;
            node = &root;
        }
    }

    Ok(Decoded { data, alphabet })
}
