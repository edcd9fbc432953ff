//======================================================================
// skein/src/ubi.rs
// Unique Block Iteration: chaining Threefish into a compression function.
//======================================================================

use crate::tweak::{BlockType, TweakRegister};
use crate::variant::{SkeinVariant, Words};
use digest::generic_array::GenericArray;
use threefish::word::block_to_words;
use threefish::Threefish;

/// One full block of UBI input for variant `V`.
pub type UbiBlock<V> = GenericArray<u8, <V as SkeinVariant>::BlockSize>;

/// Compresses one block: `E(chain, tweak, block) ^ block`.
///
/// The cipher is built fresh from `(chain, tweak)`, so nothing carries over
/// between calls. The block length is fixed by the variant:
///
/// ```
/// use skein::tweak::TweakRegister;
/// use skein::ubi::ubi;
/// use skein::variant::{Skein256, Words};
///
/// let chain = Words::<Skein256>::default();
/// let next = ubi::<Skein256>(&chain, &TweakRegister::message(), &[0u8; 32].into());
/// assert_ne!(next, chain);
/// ```
///
/// A block of any other length does not type-check:
///
/// ```compile_fail
/// use skein::tweak::TweakRegister;
/// use skein::ubi::ubi;
/// use skein::variant::{Skein256, Words};
///
/// let chain = Words::<Skein256>::default();
/// let next = ubi::<Skein256>(&chain, &TweakRegister::message(), &[0u8; 31].into());
/// ```
pub fn ubi<V: SkeinVariant>(chain: &Words<V>, tweak: &TweakRegister, block: &UbiBlock<V>) -> Words<V> {
    let payload = block_to_words::<V::Threefish>(block);

    let cipher = Threefish::<V::Threefish>::from_words(chain, &tweak.to_tweak());
    let mut out = payload;
    cipher.encrypt_words(&mut out);
    for (o, p) in out.as_mut().iter_mut().zip(payload.as_ref()) {
        *o ^= *p;
    }
    out
}

/// Runs a complete UBI pass of `block_type` over `data`.
///
/// The final (or only) block is zero-padded; an empty string still costs one
/// all-zero block at position 0.
pub fn ubi_string<V: SkeinVariant>(chain: &Words<V>, block_type: BlockType, data: &[u8]) -> Words<V> {
    let mut tweak = TweakRegister::new(block_type);
    let mut chain = *chain;
    let mut block = UbiBlock::<V>::default();

    let mut chunks = data.chunks(V::BLOCK_BYTES).peekable();
    if chunks.peek().is_none() {
        tweak.mark_last();
        return ubi::<V>(&chain, &tweak, &block);
    }
    while let Some(chunk) = chunks.next() {
        tweak.advance(chunk.len());
        if chunks.peek().is_none() {
            tweak.mark_last();
        }
        block[..chunk.len()].copy_from_slice(chunk);
        block[chunk.len()..].fill(0);
        chain = ubi::<V>(&chain, &tweak, &block);
        tweak.clear_first();
    }
    chain
}

/// Produces output block `counter` from the final chaining value.
pub fn output_block<V: SkeinVariant>(chain: &Words<V>, counter: u64) -> Words<V> {
    let mut block = UbiBlock::<V>::default();
    block[..8].copy_from_slice(&counter.to_le_bytes());
    ubi::<V>(chain, &TweakRegister::output(), &block)
}
