use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::table::GROUP_SIZE;

/// Maximum number of trailing bases that cannot form a complete group.
pub const OVERFLOW_LEN: usize = GROUP_SIZE - 1;

/// Size in bytes of a serialized footer.
pub const FOOTER_LEN: usize = 8 + 8 + OVERFLOW_LEN;

/// Trailer written after the index bytes.
///
/// Wire layout, little-endian, no padding:
///
/// | Offset | Size | Field               |
/// |--------|------|---------------------|
/// | 0      | 8    | `uncompressed_size` |
/// | 8      | 8    | `compressed_size`   |
/// | 16     | 3    | `overflow`          |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    /// Length of the original input in bytes.
    pub uncompressed_size: u64,
    /// Number of index bytes preceding the footer.
    pub compressed_size: u64,
    /// Leftover bases, left-aligned and zero-padded.
    pub overflow: [u8; OVERFLOW_LEN],
}

impl Footer {
    /// Number of meaningful bytes in `overflow`.
    pub fn overflow_len(&self) -> usize {
        (self.uncompressed_size % GROUP_SIZE as u64) as usize
    }

    pub fn overflow_bytes(&self) -> &[u8] {
        &self.overflow[..self.overflow_len()]
    }

    pub fn to_bytes(&self) -> [u8; FOOTER_LEN] {
        let mut out = [0u8; FOOTER_LEN];
        out[0..8].copy_from_slice(&self.uncompressed_size.to_le_bytes());
        out[8..16].copy_from_slice(&self.compressed_size.to_le_bytes());
        out[16..].copy_from_slice(&self.overflow);
        out
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), CodecError> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        if bytes.len() != FOOTER_LEN {
            return Err(CodecError::Footer(format!(
                "expected {FOOTER_LEN} bytes, got {}",
                bytes.len()
            )));
        }

        let mut size = [0u8; 8];
        size.copy_from_slice(&bytes[0..8]);
        let uncompressed_size = u64::from_le_bytes(size);
        size.copy_from_slice(&bytes[8..16]);
        let compressed_size = u64::from_le_bytes(size);

        let mut overflow = [0u8; OVERFLOW_LEN];
        overflow.copy_from_slice(&bytes[16..]);

        Ok(Self {
            uncompressed_size,
            compressed_size,
            overflow,
        })
    }
}
