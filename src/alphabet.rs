//! Alphabet strategies: how raw input bytes map to symbols and back.
//!
//! The codec core treats symbols as opaque integers; everything
//! alphabet-specific happens here, once, at the boundary. Both encode
//! paths and both decode paths share one implementation parameterized by
//! this enum instead of duplicating the codec per mode.

use crate::error::{ContainerError, Result};
use crate::freq::Symbol;

/// Which alphabet a container's symbols belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// Symbols are raw 8-bit bytes (0..=255)
    Bytes,
    /// Symbols are Unicode scalar values; input must be valid UTF-8
    CodePoints,
}

impl Alphabet {
    /// The mode byte stored in the container header.
    pub fn mode_byte(self) -> u8 {
        match self {
            Alphabet::Bytes => 0,
            Alphabet::CodePoints => 1,
        }
    }

    /// Parse a stored mode byte.
    ///
    /// # Errors
    /// `ContainerError::UnknownAlphabetMode` for anything but 0 or 1.
    pub fn from_mode_byte(byte: u8) -> Result<Self> {
        match byte {
            0 => Ok(Alphabet::Bytes),
            1 => Ok(Alphabet::CodePoints),
            other => Err(ContainerError::UnknownAlphabetMode(other).into()),
        }
    }

    /// Split raw input into the symbol sequence for this alphabet.
    ///
    /// # Errors
    /// `Error::InvalidUtf8` in code-point mode when the input is not
    /// well-formed UTF-8.
    pub(crate) fn extract(self, input: &[u8]) -> Result<Vec<Symbol>> {
        match self {
            Alphabet::Bytes => Ok(input.iter().map(|&b| b as Symbol).collect()),
            Alphabet::CodePoints => {
                let text = std::str::from_utf8(input)?;
                Ok(text.chars().map(|c| c as Symbol).collect())
            }
        }
    }

    /// Check that a symbol read from a container header is representable
    /// in this alphabet.
    ///
    /// # Errors
    /// - `ContainerError::SymbolOutOfRange` in byte mode for values > 0xFF
    /// - `ContainerError::InvalidCodePoint` in code-point mode for values
    ///   that are not Unicode scalar values
    pub(crate) fn validate_symbol(self, symbol: Symbol) -> Result<()> {
        match self {
            Alphabet::Bytes => {
                if symbol > 0xFF {
                    return Err(ContainerError::SymbolOutOfRange { symbol }.into());
                }
            }
            Alphabet::CodePoints => {
                if char::from_u32(symbol).is_none() {
                    return Err(ContainerError::InvalidCodePoint(symbol).into());
                }
            }
        }
        Ok(())
    }

    /// Append the output bytes for one decoded symbol.
    ///
    /// # Errors
    /// Same conditions as [`Self::validate_symbol`]; unreachable for
    /// symbols that already passed header validation.
    pub(crate) fn emit(self, symbol: Symbol, out: &mut Vec<u8>) -> Result<()> {
        match self {
            Alphabet::Bytes => {
                if symbol > 0xFF {
                    return Err(ContainerError::SymbolOutOfRange { symbol }.into());
                }
                out.push(symbol as u8);
            }
            Alphabet::CodePoints => {
                let c = char::from_u32(symbol)
                    .ok_or(ContainerError::InvalidCodePoint(symbol))?;
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_mode_byte_round_trip() {
        for alphabet in [Alphabet::Bytes, Alphabet::CodePoints] {
            assert_eq!(
                Alphabet::from_mode_byte(alphabet.mode_byte()).unwrap(),
                alphabet
            );
        }
    }

    #[test]
    fn test_unknown_mode_byte() {
        let result = Alphabet::from_mode_byte(7);
        assert!(matches!(
            result,
            Err(Error::Container(ContainerError::UnknownAlphabetMode(7)))
        ));
    }

    #[test]
    fn test_byte_extraction() {
        let symbols = Alphabet::Bytes.extract(&[0x00, 0xFF, 0x41]).unwrap();
        assert_eq!(symbols, vec![0, 255, 65]);
    }

    #[test]
    fn test_code_point_extraction() {
        let symbols = Alphabet::CodePoints.extract("aé€".as_bytes()).unwrap();
        assert_eq!(symbols, vec!['a' as u32, 'é' as u32, '€' as u32]);
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let result = Alphabet::CodePoints.extract(&[0xFF, 0xFE]);
        assert!(matches!(result, Err(Error::InvalidUtf8(_))));
    }

    #[test]
    fn test_emit_byte() {
        let mut out = Vec::new();
        Alphabet::Bytes.emit(0x41, &mut out).unwrap();
        assert_eq!(out, b"A");
    }

    #[test]
    fn test_emit_multibyte_code_point() {
        let mut out = Vec::new();
        Alphabet::CodePoints.emit('€' as u32, &mut out).unwrap();
        assert_eq!(out, "€".as_bytes());
    }

    #[test]
    fn test_validate_rejects_out_of_range_byte() {
        let result = Alphabet::Bytes.validate_symbol(0x100);
        assert!(matches!(
            result,
            Err(Error::Container(ContainerError::SymbolOutOfRange { .. }))
        ));
    }

    #[test]
    fn test_validate_rejects_surrogate_code_point() {
        let result = Alphabet::CodePoints.validate_symbol(0xD800);
        assert!(matches!(
            result,
            Err(Error::Container(ContainerError::InvalidCodePoint(0xD800)))
        ));
    }
}
