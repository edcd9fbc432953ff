//======================================================================
// threefish/src/word.rs
// 64-bit word with the modular arithmetic Threefish is specified in.
//======================================================================

use crate::variant::ThreefishVariant;
use cipher::generic_array::GenericArray;
use core::fmt;
use core::ops::{Add, AddAssign, BitAnd, BitXor, BitXorAssign, Sub, SubAssign};
use zeroize::Zeroize;

/// An unsigned 64-bit word. Addition and subtraction wrap modulo 2^64.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Zeroize)]
#[repr(transparent)]
pub struct Word64(pub u64);

impl Word64 {
    pub const ZERO: Self = Self(0);

    /// Rotates left by `n mod 64` bits.
    #[inline(always)]
    pub const fn rotl(self, n: u32) -> Self {
        Self(self.0.rotate_left(n % 64))
    }

    /// Rotates right by `n mod 64` bits.
    #[inline(always)]
    pub const fn rotr(self, n: u32) -> Self {
        Self(self.0.rotate_right(n % 64))
    }

    #[inline(always)]
    pub const fn from_le_bytes(bytes: [u8; 8]) -> Self {
        Self(u64::from_le_bytes(bytes))
    }

    #[inline(always)]
    pub const fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }

    /// Reads one word from the first 8 bytes of `bytes`.
    ///
    /// Callers always hand in exact 8-byte chunks.
    #[inline(always)]
    pub(crate) fn read_le(bytes: &[u8]) -> Self {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(&bytes[..8]);
        Self::from_le_bytes(raw)
    }
}

/// Loads little-endian words from `bytes` into `words`.
///
/// `bytes` must hold exactly `8 * words.len()` bytes.
#[inline]
pub(crate) fn load_le(words: &mut [Word64], bytes: &[u8]) {
    debug_assert_eq!(bytes.len(), words.len() * 8);
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
        *word = Word64::read_le(chunk);
    }
}

/// Stores `words` into `bytes` in little-endian order.
///
/// `bytes` must hold exactly `8 * words.len()` bytes.
#[inline]
pub(crate) fn store_le(words: &[Word64], bytes: &mut [u8]) {
    debug_assert_eq!(bytes.len(), words.len() * 8);
    for (word, chunk) in words.iter().zip(bytes.chunks_exact_mut(8)) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
}

/// Reads one full block as little-endian words.
#[inline]
pub fn block_to_words<V: ThreefishVariant>(block: &GenericArray<u8, V::BlockSize>) -> V::Words {
    let mut words = V::Words::default();
    load_le(words.as_mut(), block);
    words
}

/// Writes `words` out as one full little-endian block.
#[inline]
pub fn words_to_block<V: ThreefishVariant>(words: &V::Words) -> GenericArray<u8, V::BlockSize> {
    let mut block = GenericArray::default();
    store_le(words.as_ref(), &mut block);
    block
}

impl From<u64> for Word64 {
    #[inline(always)]
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Word64> for u64 {
    #[inline(always)]
    fn from(value: Word64) -> Self {
        value.0
    }
}

impl Add for Word64 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl AddAssign for Word64 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_add(rhs.0);
    }
}

impl Sub for Word64 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl SubAssign for Word64 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_sub(rhs.0);
    }
}

impl BitXor for Word64 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Word64 {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl BitAnd for Word64 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for Word64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}
