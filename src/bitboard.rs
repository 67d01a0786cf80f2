//! Packed N×N cell masks.
//!
//! A mask is indexed by [`Square`], a row-major position that can only be
//! built inside the board, so reads and writes never fail.

use core::ops::{BitAnd, Not};
use core::mem;
use num_traits::{PrimInt, Unsigned};

/// In-range position on an N×N board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Square<const N: usize>(usize);

impl<const N: usize> Square<N> {
    /// `None` unless both indices are below `N`.
    pub(crate) fn new(row: usize, col: usize) -> Option<Self> {
        (row < N && col < N).then_some(Square(row * N + col))
    }

    pub(crate) fn row(self) -> usize {
        self.0 / N
    }

    pub(crate) fn col(self) -> usize {
        self.0 % N
    }

    /// Every square in row-major order.
    pub(crate) fn all() -> impl Iterator<Item = Self> {
        (0..N * N).map(Square)
    }
}

/// One bit per square, packed into `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    const FITS: () = assert!(N * N <= mem::size_of::<T>() * 8, "board does not fit in T");

    fn board_mask() -> T {
        if N * N == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << (N * N)) - T::one()
        }
    }

    pub(crate) fn new() -> Self {
        let () = Self::FITS;
        BitBoard { bits: T::zero() }
    }

    pub(crate) fn contains(&self, sq: Square<N>) -> bool {
        ((self.bits >> sq.0) & T::one()) != T::zero()
    }

    pub(crate) fn insert(&mut self, sq: Square<N>) {
        self.bits = self.bits | (T::one() << sq.0);
    }

    pub(crate) fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

/// Complement, limited to the board's `N*N` bits.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned,
{
    type Output = Self;
    fn not(self) -> Self {
        BitBoard {
            bits: !self.bits & Self::board_mask(),
        }
    }
}
