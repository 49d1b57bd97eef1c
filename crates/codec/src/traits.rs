use crate::error::CodecError;

/// Core trait for sequence codecs.
///
/// `encode` turns raw bases into the full on-disk stream and `decode` turns
/// that stream back into uppercase bases.
pub trait Codec {
    fn encode(&self, seq: &[u8]) -> Result<Vec<u8>, CodecError>;
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError>;
}
