use std::io::Write;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::alphabet::{first_invalid, normalize, InvalidBase};
use crate::error::CodecError;
use crate::footer::{Footer, FOOTER_LEN, OVERFLOW_LEN};
use crate::table::{Group, PermutationTable, GROUP_SIZE};

/// Input bytes handed to each rayon task by [`Encoder::encode_parallel`].
pub const CHUNK_SIZE: usize = 1024 * 1024;

/// What to do with a complete group that contains a byte outside the alphabet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidGroupPolicy {
    /// Drop the group without emitting a byte. Only the number of dropped
    /// groups is kept, so the stream can no longer be decoded exactly.
    Skip,
    /// Fail on the first group that does not resolve.
    Reject,
    /// Scan the whole input before encoding and fail on the first byte
    /// outside the alphabet, including bytes in the trailing overflow.
    #[default]
    Validate,
}

impl std::fmt::Display for InvalidGroupPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skip => write!(f, "skip"),
            Self::Reject => write!(f, "reject"),
            Self::Validate => write!(f, "validate"),
        }
    }
}

impl std::str::FromStr for InvalidGroupPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skip" => Ok(Self::Skip),
            "reject" => Ok(Self::Reject),
            "validate" => Ok(Self::Validate),
            _ => Err(format!(
                "Unknown invalid-group policy: {s}. Available: skip, reject, validate"
            )),
        }
    }
}

/// Output of one encoding pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// One table index per complete group, in input order.
    pub indices: Vec<u8>,
    pub footer: Footer,
    /// Groups dropped under [`InvalidGroupPolicy::Skip`].
    pub skipped_groups: usize,
}

impl Encoded {
    /// Full output stream: index bytes followed by the footer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(&self.indices);
        out.extend_from_slice(&self.footer.to_bytes());
        out
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), CodecError> {
        writer.write_all(&self.indices)?;
        self.footer.write_to(writer)
    }

    /// Length of the full output stream in bytes.
    pub fn len(&self) -> usize {
        self.indices.len() + FOOTER_LEN
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Input bytes per output byte, footer included.
    pub fn compression_ratio(&self) -> f64 {
        self.footer.uncompressed_size as f64 / self.len() as f64
    }
}

/// Packs groups of four bases into single table-index bytes.
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'t> {
    table: &'t PermutationTable,
    policy: InvalidGroupPolicy,
}

impl<'t> Encoder<'t> {
    pub fn new(table: &'t PermutationTable) -> Self {
        Self {
            table,
            policy: InvalidGroupPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: InvalidGroupPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> InvalidGroupPolicy {
        self.policy
    }

    /// Encode `input` on the current thread.
    ///
    /// Input is uppercased before grouping. Trailing bytes that do not fill
    /// a group are stored in the footer's overflow, in input order.
    pub fn encode(&self, input: &[u8]) -> Result<Encoded, CodecError> {
        let input = normalize(input);
        self.validate(&input)?;

        let (body, tail) = split_groups(&input);
        let (indices, skipped_groups) = self.encode_groups(body, 0)?;

        Ok(self.finish(input.len(), indices, skipped_groups, tail))
    }

    /// Encode `input` with groups spread over the rayon pool.
    ///
    /// Produces exactly the same result as [`Encoder::encode`]. Errors under
    /// [`InvalidGroupPolicy::Reject`] report the first bad group in input
    /// order.
    pub fn encode_parallel(&self, input: &[u8]) -> Result<Encoded, CodecError> {
        if input.len() <= CHUNK_SIZE {
            return self.encode(input);
        }

        let input = normalize(input);
        self.validate(&input)?;

        let (body, tail) = split_groups(&input);
        let portions: Vec<Result<(Vec<u8>, usize), CodecError>> = body
            .par_chunks(CHUNK_SIZE)
            .enumerate()
            .map(|(i, chunk)| self.encode_groups(chunk, i * CHUNK_SIZE))
            .collect();

        let mut indices = Vec::with_capacity(body.len() / GROUP_SIZE);
        let mut skipped_groups = 0;
        for portion in portions {
            let (chunk_indices, chunk_skipped) = portion?;
            indices.extend_from_slice(&chunk_indices);
            skipped_groups += chunk_skipped;
        }

        debug!(chunks = body.len().div_ceil(CHUNK_SIZE), "parallel encode finished");
        Ok(self.finish(input.len(), indices, skipped_groups, tail))
    }

    fn validate(&self, input: &[u8]) -> Result<(), CodecError> {
        if self.policy != InvalidGroupPolicy::Validate {
            return Ok(());
        }
        match first_invalid(input) {
            Some((offset, InvalidBase(byte))) => Err(CodecError::InvalidSymbol { offset, byte }),
            None => Ok(()),
        }
    }

    /// `body.len()` must be a multiple of [`GROUP_SIZE`]; `base_offset` is
    /// the position of `body` within the whole input.
    fn encode_groups(
        &self,
        body: &[u8],
        base_offset: usize,
    ) -> Result<(Vec<u8>, usize), CodecError> {
        let mut indices = Vec::with_capacity(body.len() / GROUP_SIZE);
        let mut skipped = 0;

        for (i, group) in body.chunks_exact(GROUP_SIZE).enumerate() {
            match self.table.index_of(group) {
                Some(index) => indices.push(index),
                None => {
                    let offset = base_offset + i * GROUP_SIZE;
                    if self.policy == InvalidGroupPolicy::Skip {
                        debug!(offset, "skipping unresolved group");
                        skipped += 1;
                    } else {
                        return Err(CodecError::UnresolvedGroup {
                            offset,
                            group: to_group(group),
                        });
                    }
                }
            }
        }

        Ok((indices, skipped))
    }

    fn finish(
        &self,
        input_len: usize,
        indices: Vec<u8>,
        skipped_groups: usize,
        tail: &[u8],
    ) -> Encoded {
        let mut overflow = [0u8; OVERFLOW_LEN];
        overflow[..tail.len()].copy_from_slice(tail);

        if skipped_groups > 0 {
            warn!(
                skipped_groups,
                "dropped groups containing bytes outside the alphabet"
            );
        }

        let footer = Footer {
            uncompressed_size: input_len as u64,
            compressed_size: indices.len() as u64,
            overflow,
        };

        Encoded {
            indices,
            footer,
            skipped_groups,
        }
    }
}

/// Split `input` into the complete groups and the 0-3 trailing bytes.
fn split_groups(input: &[u8]) -> (&[u8], &[u8]) {
    input.split_at(input.len() - input.len() % GROUP_SIZE)
}

fn to_group(group: &[u8]) -> Group {
    let mut out = [0u8; GROUP_SIZE];
    out.copy_from_slice(group);
    out
}
