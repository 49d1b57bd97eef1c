use crate::error::CodecError;
use crate::footer::{Footer, FOOTER_LEN};
use crate::table::{PermutationTable, GROUP_SIZE};

/// Expands an encoded stream back into uppercase bases.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'t> {
    table: &'t PermutationTable,
}

impl<'t> Decoder<'t> {
    pub fn new(table: &'t PermutationTable) -> Self {
        Self { table }
    }

    /// Split `data` into index bytes and footer without expanding anything.
    pub fn split(data: &[u8]) -> Result<(&[u8], Footer), CodecError> {
        if data.len() < FOOTER_LEN {
            return Err(CodecError::Decode(format!(
                "Stream too short for footer: {} bytes",
                data.len()
            )));
        }
        let (indices, footer) = data.split_at(data.len() - FOOTER_LEN);
        Ok((indices, Footer::from_bytes(footer)?))
    }

    pub fn decode(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        let (indices, footer) = Self::split(data)?;

        if footer.compressed_size != indices.len() as u64 {
            return Err(CodecError::Decode(format!(
                "Footer declares {} index bytes, stream holds {}",
                footer.compressed_size,
                indices.len()
            )));
        }

        let expected_groups = footer.uncompressed_size / GROUP_SIZE as u64;
        if footer.compressed_size > expected_groups {
            return Err(CodecError::Decode(format!(
                "Footer declares {} groups but an input of {} bytes holds at most {expected_groups}",
                footer.compressed_size, footer.uncompressed_size
            )));
        }
        if footer.compressed_size < expected_groups {
            return Err(CodecError::Decode(format!(
                "Lossy stream: {} of {expected_groups} groups were dropped during encoding",
                expected_groups - footer.compressed_size
            )));
        }

        check_overflow(&footer)?;

        let mut seq = Vec::with_capacity(footer.uncompressed_size as usize);
        for &index in indices {
            seq.extend_from_slice(self.table.get(index));
        }
        seq.extend_from_slice(footer.overflow_bytes());

        Ok(seq)
    }
}

/// Leftover bytes must be non-NUL and the padding after them zero.
fn check_overflow(footer: &Footer) -> Result<(), CodecError> {
    let (used, padding) = footer.overflow.split_at(footer.overflow_len());
    if let Some(slot) = used.iter().position(|&b| b == 0) {
        return Err(CodecError::Decode(format!(
            "Overflow slot {slot} is NUL but the footer declares {} leftover bytes",
            used.len()
        )));
    }
    if padding.iter().any(|&b| b != 0) {
        return Err(CodecError::Decode(format!(
            "Overflow padding after {} leftover bytes is not zero",
            used.len()
        )));
    }
    Ok(())
}
