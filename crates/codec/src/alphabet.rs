use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a byte is not one of the four bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidBase(pub u8);

impl fmt::Display for InvalidBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid base byte: {} ('{}')", self.0, self.0.escape_ascii())
    }
}

impl std::error::Error for InvalidBase {}

/// A nucleotide base of the packing alphabet.
///
/// The discriminants fix the canonical order used to build the permutation
/// table (T=0, C=1, G=2, A=3). A group's table index is the base-4 number
/// formed by the discriminants of its four bases, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Base {
    T = 0,
    C = 1,
    G = 2,
    A = 3,
}

impl Base {
    /// All bases in canonical order.
    pub const ALL: [Base; 4] = [Base::T, Base::C, Base::G, Base::A];

    #[inline(always)]
    pub const fn to_index(self) -> u8 {
        self as u8
    }

    /// Convert from an ASCII byte, accepting either case.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'T' | b't' => Some(Self::T),
            b'C' | b'c' => Some(Self::C),
            b'G' | b'g' => Some(Self::G),
            b'A' | b'a' => Some(Self::A),
            _ => None,
        }
    }

    /// Uppercase ASCII byte for this base.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Self::T => b'T',
            Self::C => b'C',
            Self::G => b'G',
            Self::A => b'A',
        }
    }
}

impl TryFrom<u8> for Base {
    type Error = InvalidBase;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_ascii(byte).ok_or(InvalidBase(byte))
    }
}

impl From<Base> for u8 {
    #[inline(always)]
    fn from(base: Base) -> u8 {
        base.to_index()
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ascii() as char)
    }
}

/// Uppercase every byte of `input`. Bytes that are not ASCII letters are
/// left untouched.
pub fn normalize(input: &[u8]) -> Vec<u8> {
    input.to_ascii_uppercase()
}

/// Offset of the first byte that is not a base, if any.
pub fn first_invalid(input: &[u8]) -> Option<(usize, InvalidBase)> {
    input
        .iter()
        .enumerate()
        .find_map(|(offset, &b)| Base::try_from(b).err().map(|err| (offset, err)))
}
