//! One-bit-per-cell sets over the 225 board cells

use std::ops::{BitOr, Sub};

use super::{Pos, TOTAL_CELLS};

const WORDS: usize = TOTAL_CELLS.div_ceil(64);

#[inline]
const fn locate(pos: Pos) -> (usize, u64) {
    let idx = pos.y as usize * super::BOARD_SIZE + pos.x as usize;
    (idx / 64, 1u64 << (idx % 64))
}

/// Set of board cells, stored as 4 x u64 (bit `y * 15 + x`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    words: [u64; WORDS],
}

impl Bitboard {
    pub const fn new() -> Self {
        Self { words: [0; WORDS] }
    }

    #[inline]
    pub fn set(&mut self, pos: Pos) {
        let (w, mask) = locate(pos);
        self.words[w] |= mask;
    }

    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        let (w, mask) = locate(pos);
        self.words[w] &= !mask;
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        let (w, mask) = locate(pos);
        self.words[w] & mask != 0
    }

    /// Number of cells in the set
    #[inline]
    pub fn count(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words == [0; WORDS]
    }

    /// Cells within Chebyshev distance 1 of a member, members included
    pub fn neighborhood(&self) -> Bitboard {
        let mut near = *self;
        for pos in self.iter_ones() {
            for (dx, dy) in [(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)] {
                if let Some(n) = pos.offset(dx, dy) {
                    near.set(n);
                }
            }
        }
        near
    }

    /// Members in row-major order
    pub fn iter_ones(&self) -> impl Iterator<Item = Pos> + '_ {
        self.words.iter().enumerate().flat_map(|(w, &word)| {
            let mut rest = word;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let bit = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                Some(Pos::from_index(w * 64 + bit))
            })
        })
    }

    fn zip_with(self, rhs: Bitboard, f: impl Fn(u64, u64) -> u64) -> Bitboard {
        let mut words = self.words;
        for (word, other) in words.iter_mut().zip(rhs.words) {
            *word = f(*word, other);
        }
        Bitboard { words }
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    fn bitor(self, rhs: Bitboard) -> Bitboard {
        self.zip_with(rhs, |a, b| a | b)
    }
}

/// Set difference
impl Sub for Bitboard {
    type Output = Bitboard;

    fn sub(self, rhs: Bitboard) -> Bitboard {
        self.zip_with(rhs, |a, b| a & !b)
    }
}
