//! The permutation table: a fixed bijection between the 256 ordered groups of
//! four bases and the byte values 0-255.
//!
//! The table is built by enumerating the alphabet four levels deep in
//! canonical order, so the index of a group is
//! `b0 * 64 + b1 * 16 + b2 * 4 + b3` where `bN` is the canonical index of the
//! base in slot `N`. The stored table makes the mapping inspectable; lookups
//! in the other direction invert the formula instead of scanning.

use std::ops::Index;

use tracing::debug;

use crate::alphabet::Base;

/// Number of bases packed into one output byte.
pub const GROUP_SIZE: usize = 4;

/// Number of distinct groups, one per byte value.
pub const TABLE_SIZE: usize = 256;

/// A group of four uppercase ASCII bases.
pub type Group = [u8; GROUP_SIZE];

/// Immutable index <-> group mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    groups: [Group; TABLE_SIZE],
}

impl PermutationTable {
    /// Build the table. Construction is total and cannot fail.
    pub fn build() -> Self {
        let mut groups = [[0u8; GROUP_SIZE]; TABLE_SIZE];
        let mut index = 0usize;

        for a in Base::ALL {
            for b in Base::ALL {
                for c in Base::ALL {
                    for d in Base::ALL {
                        groups[index] = [a.to_ascii(), b.to_ascii(), c.to_ascii(), d.to_ascii()];
                        index += 1;
                    }
                }
            }
        }

        debug!(entries = index, "built permutation table");
        Self { groups }
    }

    /// Group stored at `index`.
    #[inline]
    pub fn get(&self, index: u8) -> &Group {
        &self.groups[index as usize]
    }

    /// Table index of `group`, or `None` if it is not exactly four bases.
    ///
    /// Matching is case-insensitive.
    #[inline]
    pub fn index_of(&self, group: &[u8]) -> Option<u8> {
        if group.len() != GROUP_SIZE {
            return None;
        }
        group.iter().try_fold(0u8, |acc, &byte| {
            Base::try_from(byte).ok().map(|base| (acc << 2) | u8::from(base))
        })
    }

    /// Iterate over `(index, group)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Group)> + '_ {
        self.groups
            .iter()
            .enumerate()
            .map(|(i, group)| (i as u8, group))
    }

    pub fn len(&self) -> usize {
        TABLE_SIZE
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for PermutationTable {
    fn default() -> Self {
        Self::build()
    }
}

impl Index<u8> for PermutationTable {
    type Output = Group;

    fn index(&self, index: u8) -> &Group {
        self.get(index)
    }
}

impl Index<usize> for PermutationTable {
    type Output = Group;

    fn index(&self, index: usize) -> &Group {
        &self.groups[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_first_and_last_entries() {
        let table = PermutationTable::build();
        assert_eq!(table[0u8], *b"TTTT");
        assert_eq!(table[1u8], *b"TTTC");
        assert_eq!(table[4u8], *b"TTCT");
        assert_eq!(table[255u8], *b"AAAA");
    }

    #[test]
    fn test_known_index() {
        let table = PermutationTable::build();
        // T=0, C=1, G=2, A=3 -> 0*64 + 1*16 + 2*4 + 3
        assert_eq!(table.index_of(b"TCGA"), Some(27));
        assert_eq!(table.get(27), b"TCGA");
    }

    #[test]
    fn test_table_is_injective() {
        let table = PermutationTable::build();
        let distinct: HashSet<Group> = table.iter().map(|(_, g)| *g).collect();
        assert_eq!(distinct.len(), TABLE_SIZE);
        assert_eq!(table.iter().count(), TABLE_SIZE);
    }

    #[test]
    fn test_reverse_lookup_inverts_forward() {
        let table = PermutationTable::build();
        for (i, group) in table.iter() {
            assert_eq!(table.index_of(group), Some(i), "index {i}");
        }
    }

    #[test]
    fn test_closed_form_matches_scan() {
        let table = PermutationTable::build();
        for (i, group) in table.iter() {
            let scanned = table
                .iter()
                .find(|(_, g)| *g == group)
                .map(|(idx, _)| idx);
            assert_eq!(scanned, Some(i));
        }
    }

    #[test]
    fn test_index_of_is_case_insensitive() {
        let table = PermutationTable::build();
        assert_eq!(table.index_of(b"tcga"), table.index_of(b"TCGA"));
        assert_eq!(table.index_of(b"aAaA"), Some(255));
    }

    #[test]
    fn test_index_of_rejects_bad_groups() {
        let table = PermutationTable::build();
        assert_eq!(table.index_of(b"TCGN"), None);
        assert_eq!(table.index_of(b"TC\nG"), None);
        assert_eq!(table.index_of(b"TCG"), None);
        assert_eq!(table.index_of(b"TCGAT"), None);
        assert_eq!(table.index_of(b""), None);
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(PermutationTable::build(), PermutationTable::default());
        assert_eq!(PermutationTable::build().len(), TABLE_SIZE);
    }
}
