//======================================================================
// skein/src/fixed.rs
// Fixed-size digests and MACs on top of SkeinCore.
//======================================================================

use crate::config::SkeinParams;
use crate::engine::{SkeinCore, SkeinReaderCore};
use crate::variant::SkeinVariant;
use core::{fmt, marker::PhantomData};
use digest::{
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, FixedOutputCore,
        OutputSizeUser, UpdateCore,
    },
    crypto_common::{InvalidLength, Key, KeyInit, KeySizeUser},
    generic_array::ArrayLength,
    HashMarker, MacMarker, Output, Reset,
};

/// Digest of `N` bytes. The length is bound into the configuration block,
/// so different `N` give unrelated digests.
#[derive(Clone)]
pub struct FixedCore<V: SkeinVariant, N: ArrayLength<u8> + 'static> {
    core: SkeinCore<V>,
    _size: PhantomData<N>,
}

impl<V: SkeinVariant, N: ArrayLength<u8> + 'static> Default for FixedCore<V, N> {
    fn default() -> Self {
        Self {
            core: SkeinCore::configure(&SkeinParams::new(N::USIZE)),
            _size: PhantomData,
        }
    }
}

impl<V: SkeinVariant, N: ArrayLength<u8> + 'static> HashMarker for FixedCore<V, N> {}

impl<V: SkeinVariant, N: ArrayLength<u8> + 'static> BlockSizeUser for FixedCore<V, N> {
    type BlockSize = V::BlockSize;
}

impl<V: SkeinVariant, N: ArrayLength<u8> + 'static> BufferKindUser for FixedCore<V, N> {
    type BufferKind = <SkeinCore<V> as BufferKindUser>::BufferKind;
}

impl<V: SkeinVariant, N: ArrayLength<u8> + 'static> OutputSizeUser for FixedCore<V, N> {
    type OutputSize = N;
}

impl<V: SkeinVariant, N: ArrayLength<u8> + 'static> UpdateCore for FixedCore<V, N> {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        self.core.update_blocks(blocks);
    }
}

impl<V: SkeinVariant, N: ArrayLength<u8> + 'static> FixedOutputCore for FixedCore<V, N> {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let chain = self.core.finalize_chain(buffer);
        SkeinReaderCore::<V>::new(chain).fill(out);
    }
}

impl<V: SkeinVariant, N: ArrayLength<u8> + 'static> Reset for FixedCore<V, N> {
    #[inline]
    fn reset(&mut self) {
        self.core.reset();
    }
}

impl<V: SkeinVariant, N: ArrayLength<u8> + 'static> AlgorithmName for FixedCore<V, N> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", V::NAME, N::USIZE * 8)
    }
}

impl<V: SkeinVariant, N: ArrayLength<u8> + 'static> fmt::Debug for FixedCore<V, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FixedCore<")?;
        Self::write_alg_name(f)?;
        f.write_str("> { ... }")
    }
}

/// Skein-MAC with an `N`-byte tag.
///
/// The key is absorbed by its own UBI pass ahead of the configuration, so it
/// may have any length; [`KeySizeUser::KeySize`] only names the natural one
/// (a full state).
#[derive(Clone)]
pub struct MacCore<V: SkeinVariant, N: ArrayLength<u8> + 'static>(FixedCore<V, N>);

impl<V: SkeinVariant, N: ArrayLength<u8> + 'static> MacCore<V, N> {
    fn with_key(key: &[u8]) -> Self {
        Self(FixedCore {
            core: SkeinCore::configure(&SkeinParams::new(N::USIZE).key(key)),
            _size: PhantomData,
        })
    }
}

impl<V: SkeinVariant, N: ArrayLength<u8> + 'static> MacMarker for MacCore<V, N> {}

impl<V: SkeinVariant, N: ArrayLength<u8> + 'static> KeySizeUser for MacCore<V, N> {
    type KeySize = V::BlockSize;
}

impl<V: SkeinVariant, N: ArrayLength<u8> + 'static> KeyInit for MacCore<V, N> {
    #[inline]
    fn new(key: &Key<Self>) -> Self {
        Self::with_key(key)
    }

    #[inline]
    fn new_from_slice(key: &[u8]) -> Result<Self, InvalidLength> {
        Ok(Self::with_key(key))
    }
}

impl<V: SkeinVariant, N: ArrayLength<u8> + 'static> BlockSizeUser for MacCore<V, N> {
    type BlockSize = V::BlockSize;
}

impl<V: SkeinVariant, N: ArrayLength<u8> + 'static> BufferKindUser for MacCore<V, N> {
    type BufferKind = <SkeinCore<V> as BufferKindUser>::BufferKind;
}

impl<V: SkeinVariant, N: ArrayLength<u8> + 'static> OutputSizeUser for MacCore<V, N> {
    type OutputSize = N;
}

impl<V: SkeinVariant, N: ArrayLength<u8> + 'static> UpdateCore for MacCore<V, N> {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        self.0.update_blocks(blocks);
    }
}

impl<V: SkeinVariant, N: ArrayLength<u8> + 'static> FixedOutputCore for MacCore<V, N> {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        self.0.finalize_fixed_core(buffer, out);
    }
}

impl<V: SkeinVariant, N: ArrayLength<u8> + 'static> Reset for MacCore<V, N> {
    /// Back to the keyed state; the key is not forgotten.
    #[inline]
    fn reset(&mut self) {
        self.0.reset();
    }
}

impl<V: SkeinVariant, N: ArrayLength<u8> + 'static> AlgorithmName for MacCore<V, N> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-MAC-{}", V::NAME, N::USIZE * 8)
    }
}

impl<V: SkeinVariant, N: ArrayLength<u8> + 'static> fmt::Debug for MacCore<V, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MacCore<")?;
        Self::write_alg_name(f)?;
        f.write_str("> { ... }")
    }
}
