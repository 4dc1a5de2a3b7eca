//! Bit-level packing and unpacking of Huffman codes.
//!
//! Both sides operate MSB-first (most significant bit first) within each
//! byte, which is the conventional order for Huffman payloads.
//!
//! # Padding Rules
//! - `BitWriter` pads the final partial byte with trailing zero bits
//! - Padding is never marked in the stream itself; the container's total
//!   bit count is the sole authority on where meaningful data ends, and
//!   `BitReader` callers must stop at exactly that count
//!
//! # Example
//! ```
//! use huffpack::bitio::{BitWriter, BitReader};
//!
//! let mut writer = BitWriter::new();
//! for bit in [true, false, true] {
//!     writer.write_bit(bit);
//! }
//! assert_eq!(writer.bit_len(), 3);
//!
//! let bytes = writer.finish();
//! assert_eq!(bytes, vec![0b1010_0000]);
//!
//! let mut reader = BitReader::new(&bytes);
//! assert_eq!(reader.read_bit().unwrap(), true);
//! assert_eq!(reader.read_bit().unwrap(), false);
//! assert_eq!(reader.read_bit().unwrap(), true);
//! ```

use crate::error::{BitIoError, Result};

/// Packs bits MSB-first into a byte buffer.
///
/// # Invariants
/// - `bit_count` is always < 8; a full accumulator is flushed immediately
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    /// Completed bytes
    bytes: Vec<u8>,
    /// Accumulator for the current partial byte (MSB-aligned)
    bit_buffer: u8,
    /// Number of bits in bit_buffer (0-7)
    bit_count: u8,
}

impl BitWriter {
    /// Create a new BitWriter with empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single bit.
    pub fn write_bit(&mut self, bit: bool) {
        if bit {
            self.bit_buffer |= 1 << (7 - self.bit_count);
        }
        self.bit_count += 1;

        if self.bit_count == 8 {
            self.bytes.push(self.bit_buffer);
            self.bit_buffer = 0;
            self.bit_count = 0;
        }
    }

    /// Total number of bits written so far, including the partial byte.
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + self.bit_count as usize
    }

    /// Finish writing and return the packed bytes.
    ///
    /// A partial final byte is padded with trailing zeros. Consumes the
    /// writer.
    pub fn finish(mut self) -> Vec<u8> {
        if self.bit_count > 0 {
            self.bytes.push(self.bit_buffer);
        }
        self.bytes
    }
}

/// Reads bits MSB-first from a byte buffer.
///
/// The reader cannot tell padding from data; the caller must track how many
/// bits are meaningful and stop there.
///
/// # Invariants
/// - `bit_position` never exceeds `data.len() * 8`
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// Source data
    data: &'a [u8],
    /// Current bit position (0 = MSB of first byte)
    bit_position: usize,
}

impl<'a> BitReader<'a> {
    /// Create a new BitReader over the given bytes.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            bit_position: 0,
        }
    }

    /// Read the next bit.
    ///
    /// # Errors
    /// `BitIoError::UnexpectedEof` if the buffer is exhausted.
    pub fn read_bit(&mut self) -> Result<bool> {
        let byte_idx = self.bit_position / 8;
        if byte_idx >= self.data.len() {
            return Err(BitIoError::UnexpectedEof {
                position: self.bit_position,
            }
            .into());
        }

        let bit_offset = self.bit_position % 8;
        let bit = (self.data[byte_idx] >> (7 - bit_offset)) & 1;
        self.bit_position += 1;
        Ok(bit == 1)
    }

    /// Number of bits remaining in the buffer (padding included).
    pub fn bits_remaining(&self) -> usize {
        self.data.len() * 8 - self.bit_position
    }

    /// Current bit position from the start of the buffer.
    pub fn position(&self) -> usize {
        self.bit_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_full_byte() {
        let mut writer = BitWriter::new();
        for bit in [true, false, true, true, false, false, true, false] {
            writer.write_bit(bit);
        }

        let bytes = writer.finish();
        assert_eq!(bytes, vec![0b10110010]);

        let mut reader = BitReader::new(&bytes);
        let expected = [true, false, true, true, false, false, true, false];
        for &exp in &expected {
            assert_eq!(reader.read_bit().unwrap(), exp);
        }
    }

    #[test]
    fn test_padding_fills_low_bits() {
        let mut writer = BitWriter::new();
        writer.write_bit(true);
        // Padded to 10000000

        let bytes = writer.finish();
        assert_eq!(bytes, vec![0b10000000]);
    }

    #[test]
    fn test_empty_writer() {
        let writer = BitWriter::new();
        assert_eq!(writer.bit_len(), 0);
        assert!(writer.finish().is_empty());
    }

    #[test]
    fn test_bit_len_tracks_partial_bytes() {
        let mut writer = BitWriter::new();
        for _ in 0..11 {
            writer.write_bit(false);
        }
        assert_eq!(writer.bit_len(), 11);

        let bytes = writer.finish();
        assert_eq!(bytes.len(), 2);
    }

    #[test]
    fn test_multi_byte_round_trip() {
        let pattern: Vec<bool> = (0..19).map(|i| i % 3 == 0).collect();

        let mut writer = BitWriter::new();
        for &bit in &pattern {
            writer.write_bit(bit);
        }
        let bytes = writer.finish();

        let mut reader = BitReader::new(&bytes);
        for &exp in &pattern {
            assert_eq!(reader.read_bit().unwrap(), exp);
        }
        // Only padding remains
        assert!(reader.bits_remaining() < 8);
    }

    #[test]
    fn test_read_past_end() {
        let data = vec![0b10101010];
        let mut reader = BitReader::new(&data);

        for _ in 0..8 {
            reader.read_bit().unwrap();
        }
        assert!(reader.read_bit().is_err());
    }

    #[test]
    fn test_position_advances() {
        let data = vec![0xFF, 0x00];
        let mut reader = BitReader::new(&data);

        assert_eq!(reader.bits_remaining(), 16);
        reader.read_bit().unwrap();
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.bits_remaining(), 15);
    }
}
