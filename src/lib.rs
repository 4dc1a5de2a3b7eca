//! huffpack: Huffman prefix-code compression with a self-describing
//! binary container.
//!
//! This library derives an optimal prefix-free code from the symbol
//! distribution of a fully-buffered input, packs the encoded symbols into
//! an MSB-first bitstream, and wraps it in a container that carries enough
//! information (alphabet mode plus frequency table) to be decoded on its
//! own. Two alphabets are supported: raw 8-bit bytes and Unicode code
//! points.
//!
//! # Architecture
//!
//! The codec is organized around clear module boundaries:
//! - `freq`: symbol frequency counting
//! - `tree`: deterministic Huffman tree construction
//! - `codebook`: symbol-to-code table derivation
//! - `bitio`: MSB-first bit packing/unpacking
//! - `alphabet`: byte vs. code-point symbol strategies
//! - `container`: header layout plus the `encode`/`decode` entry points
//!
//! # Design Principles
//!
//! - **No panics**: all failures are structured errors
//! - **Deterministic**: the same input always produces a byte-identical
//!   container, and the decoder rebuilds the exact tree the encoder used
//!   from stored frequencies alone
//! - **Whole-buffer**: each call models its entire input in one pass;
//!   there is no streaming mode
//!
//! # Example
//! ```
//! use huffpack::{decode, encode, Alphabet};
//!
//! let input = b"abracadabra";
//! let container = encode(input, Alphabet::Bytes).unwrap();
//! let decoded = decode(&container).unwrap();
//! assert_eq!(decoded.data, input);
//! ```

pub mod alphabet;
pub mod bitio;
pub mod codebook;
pub mod container;
pub mod error;
pub mod freq;
pub mod tree;

// Re-export the surface the I/O layers consume
pub use alphabet::Alphabet;
pub use container::{decode, encode, Decoded};
pub use error::{Error, Result};
