//! The 63 non-empty subsets of the six pieces, used to compute the
//! skip-action value (spec: the fixed point of "keep skipping while it
//! helps" is a minimum over subsets of the induced average).

use once_cell::sync::Lazy;
use smallvec::SmallVec;

use crate::board::NUM_PIECES;

/// A non-empty subset of piece indices, with its size cached alongside
/// the member list so callers don't need to call `.len()` in the hot
/// averaging loop.
#[derive(Clone, Debug)]
pub struct Subset {
    pub size: u8,
    pub members: SmallVec<[u8; NUM_PIECES]>,
}

/// Flat table of the 63 non-empty subsets of `{0..6}`, indexed by the
/// subset's bitmask (`1..=63`); index `0` (the empty subset) is never
/// populated and is skipped by [`non_empty`] iteration.
pub static SUBSETS: Lazy<Vec<Subset>> = Lazy::new(build_subsets);

fn build_subsets() -> Vec<Subset> {
    let mut table = Vec::with_capacity(64);
    table.push(Subset {
        size: 0,
        members: SmallVec::new(),
    });
    for mask in 1u8..=63 {
        let members: SmallVec<[u8; NUM_PIECES]> = (0..NUM_PIECES as u8)
            .filter(|&p| mask & (1 << p) != 0)
            .collect();
        table.push(Subset {
            size: members.len() as u8,
            members,
        });
    }
    table
}

/// Iterates the 63 non-empty subsets (skipping the unused index `0`).
pub fn non_empty() -> impl Iterator<Item = &'static Subset> {
    SUBSETS[1..=63].iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerates_exactly_63_non_empty_subsets() {
        assert_eq!(non_empty().count(), 63);
    }

    #[test]
    fn sizes_match_member_counts() {
        for subset in non_empty() {
            assert_eq!(subset.size as usize, subset.members.len());
            assert!(subset.size >= 1 && subset.size as usize <= NUM_PIECES);
        }
    }

    #[test]
    fn full_set_is_present() {
        let full = &SUBSETS[63];
        assert_eq!(full.size as usize, NUM_PIECES);
    }
}
