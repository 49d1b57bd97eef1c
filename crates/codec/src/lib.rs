//! Genetic data compression by permutation table.
//!
//! Every group of four bases drawn from {T, C, G, A} is one of 256 possible
//! groups, so it can be replaced by a single byte: its index in a fixed
//! [`PermutationTable`]. An encoded stream is the index bytes followed by a
//! 19-byte [`Footer`] holding the original length, the number of index bytes,
//! and up to three leftover bases.
//!
//! ```rust
//! use gdcx_codec::{Codec, PermutationCodec};
//!
//! let codec = PermutationCodec::default();
//! let stream = codec.encode(b"TCGAT").unwrap();
//! assert_eq!(stream[0], 27);
//! assert_eq!(codec.decode(&stream).unwrap(), b"TCGAT");
//! ```

pub mod alphabet;
mod decoder;
mod encoder;
mod error;
mod footer;
pub mod table;
mod traits;

pub use alphabet::{Base, InvalidBase};
pub use decoder::Decoder;
pub use encoder::{Encoded, Encoder, InvalidGroupPolicy, CHUNK_SIZE};
pub use error::CodecError as Error;
pub use error::CodecError;
pub use footer::{Footer, FOOTER_LEN, OVERFLOW_LEN};
pub use table::{Group, PermutationTable, GROUP_SIZE, TABLE_SIZE};
pub use traits::Codec;

/// Owns a table and encodes/decodes complete streams.
#[derive(Debug, Clone, Default)]
pub struct PermutationCodec {
    table: PermutationTable,
    policy: InvalidGroupPolicy,
    parallel: bool,
}

impl PermutationCodec {
    pub fn new(policy: InvalidGroupPolicy) -> Self {
        Self {
            table: PermutationTable::build(),
            policy,
            parallel: false,
        }
    }

    /// Use the rayon encoder for inputs larger than [`CHUNK_SIZE`].
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn table(&self) -> &PermutationTable {
        &self.table
    }

    pub fn encoder(&self) -> Encoder<'_> {
        Encoder::new(&self.table).with_policy(self.policy)
    }

    pub fn decoder(&self) -> Decoder<'_> {
        Decoder::new(&self.table)
    }

    /// Encode without flattening, keeping the footer and skip count.
    pub fn encode_detailed(&self, seq: &[u8]) -> Result<Encoded, CodecError> {
        if self.parallel {
            self.encoder().encode_parallel(seq)
        } else {
            self.encoder().encode(seq)
        }
    }
}

impl Codec for PermutationCodec {
    fn encode(&self, seq: &[u8]) -> Result<Vec<u8>, CodecError> {
        Ok(self.encode_detailed(seq)?.to_bytes())
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        self.decoder().decode(data)
    }
}
