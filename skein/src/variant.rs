//======================================================================
// skein/src/variant.rs
// Security parameter variants: the internal state size.
//======================================================================

use digest::consts::{U256, U32, U64};
use digest::generic_array::ArrayLength;
use digest::typenum::{IsLess, B1};
use threefish::variant::{Threefish256, Threefish512, ThreefishVariant};

/// A Skein state size, tied to the Threefish variant that drives it.
pub trait SkeinVariant: Sized + Clone + Send + Sync + 'static {
    /// The block cipher used by every UBI pass.
    type Threefish: ThreefishVariant<BlockSize = Self::BlockSize>;

    /// State and block size in bytes.
    type BlockSize: ArrayLength<u8> + IsLess<U256, Output = B1> + 'static;

    const BLOCK_BYTES: usize;

    const NAME: &'static str;
}

/// Skein with a 256-bit internal state.
#[derive(Clone, Copy, Debug)]
pub struct Skein256;
impl SkeinVariant for Skein256 {
    type Threefish = Threefish256;
    type BlockSize = U32;
    const BLOCK_BYTES: usize = 32;
    const NAME: &'static str = "Skein-256";
}

/// Skein with a 512-bit internal state.
#[derive(Clone, Copy, Debug)]
pub struct Skein512;
impl SkeinVariant for Skein512 {
    type Threefish = Threefish512;
    type BlockSize = U64;
    const BLOCK_BYTES: usize = 64;
    const NAME: &'static str = "Skein-512";
}

/// The chaining value of variant `V` as words.
pub type Words<V> = <<V as SkeinVariant>::Threefish as ThreefishVariant>::Words;
