//======================================================================
// threefish/src/variant.rs
// Defines the block-size variants of Threefish.
//======================================================================

use crate::consts::{PERMUTATION_256, PERMUTATION_512, ROTATIONS_256, ROTATIONS_512};
use crate::word::Word64;
use cipher::consts::{U32, U64};
use core::fmt::Debug;
use zeroize::Zeroize;

/// A trait that defines the parameters for a specific Threefish variant.
pub trait ThreefishVariant: Sized + Clone + Send + Sync + 'static {
    /// Block (and key) size in bytes.
    type BlockSize: cipher::ArrayLength<u8> + 'static;
    const BLOCK_BYTES: usize;

    /// One block as words: `[Word64; WORDS]`.
    type Words: Copy
        + Default
        + Debug
        + PartialEq
        + AsRef<[Word64]>
        + AsMut<[Word64]>
        + Zeroize
        + Send
        + Sync
        + 'static;
    const WORDS: usize;

    /// Flattened rotation table, `8 * WORDS / 2` entries.
    const ROTATIONS: &'static [u32];

    /// Word permutation applied after each round of MIX.
    const PERMUTATION: &'static [usize];

    const NAME: &'static str;
}

/// Threefish with a 256-bit block and key.
#[derive(Clone, Copy, Debug)]
pub struct Threefish256;
impl ThreefishVariant for Threefish256 {
    type BlockSize = U32;
    const BLOCK_BYTES: usize = 32;
    type Words = [Word64; 4];
    const WORDS: usize = 4;
    const ROTATIONS: &'static [u32] = &ROTATIONS_256;
    const PERMUTATION: &'static [usize] = &PERMUTATION_256;
    const NAME: &'static str = "Threefish-256";
}

/// Threefish with a 512-bit block and key.
#[derive(Clone, Copy, Debug)]
pub struct Threefish512;
impl ThreefishVariant for Threefish512 {
    type BlockSize = U64;
    const BLOCK_BYTES: usize = 64;
    type Words = [Word64; 8];
    const WORDS: usize = 8;
    const ROTATIONS: &'static [u32] = &ROTATIONS_512;
    const PERMUTATION: &'static [usize] = &PERMUTATION_512;
    const NAME: &'static str = "Threefish-512";
}
