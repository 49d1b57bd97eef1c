use thiserror::Error;

use crate::table::GROUP_SIZE;

/// Error type for codec operations.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A byte outside the T/C/G/A alphabet was found while validating input.
    #[error("Invalid symbol {byte:#04x} ({}) at offset {offset}", printable(.byte))]
    InvalidSymbol { offset: usize, byte: u8 },

    /// A complete group could not be resolved through the permutation table.
    #[error("Group {:?} at offset {offset} is not in the permutation table", String::from_utf8_lossy(.group))]
    UnresolvedGroup {
        offset: usize,
        group: [u8; GROUP_SIZE],
    },

    #[error("Footer error: {0}")]
    Footer(String),

    #[error("Decoding error: {0}")]
    Decode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn printable(byte: &u8) -> String {
    if byte.is_ascii_graphic() {
        format!("'{}'", *byte as char)
    } else {
        format!("{:?}", *byte as char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_symbol_display() {
        let err = CodecError::InvalidSymbol {
            offset: 7,
            byte: b'N',
        };
        let msg = err.to_string();
        assert!(msg.contains("'N'"));
        assert!(msg.contains("offset 7"));
    }

    #[test]
    fn test_invalid_symbol_display_control_char() {
        let err = CodecError::InvalidSymbol {
            offset: 4,
            byte: b'\n',
        };
        assert!(err.to_string().contains("\\n"));
    }

    #[test]
    fn test_unresolved_group_display() {
        let err = CodecError::UnresolvedGroup {
            offset: 8,
            group: *b"TC\nG",
        };
        let msg = err.to_string();
        assert!(msg.contains("offset 8"));
        assert!(msg.contains("TC"));
    }
}
