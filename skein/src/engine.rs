//======================================================================
// skein/src/engine.rs
// SkeinCore: configuration, message chaining and finalization.
// SkeinReaderCore: counter-keyed output blocks.
//======================================================================

use crate::config::{config_block, SkeinParams};
use crate::consts::CONFIG_BYTES;
use crate::error::Error;
use crate::tweak::{BlockType, TweakRegister};
use crate::ubi::{output_block, ubi, ubi_string};
use crate::variant::{SkeinVariant, Words};
use core::fmt;
use digest::{
    block_buffer::Lazy,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, ExtendableOutputCore,
        UpdateCore, XofReaderCore,
    },
    Reset,
};
use log::trace;
use threefish::word::words_to_block;
use zeroize::{Zeroize, ZeroizeOnDrop};

//======================================================================
// SkeinCore
//======================================================================

/// Low-level Skein state: the chaining value and the message tweak.
///
/// Blocks reach [`UpdateCore::update_blocks`] only once more input is known
/// to follow them (`Lazy` buffering), so the final block is always handled
/// by finalization with the last flag set.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SkeinCore<V: SkeinVariant> {
    chain: Words<V>,
    /// Chaining value right after the configuration and any other
    /// pre-message passes; `reset` returns here.
    initial_chain: Words<V>,
    tweak: TweakRegister,
    output_bits: u64,
}

impl<V: SkeinVariant> SkeinCore<V> {
    /// Runs the key, configuration and optional string passes.
    pub fn from_params(params: &SkeinParams<'_>) -> Result<Self, Error> {
        params.validate()?;
        Ok(Self::configure(params))
    }

    /// Same as [`SkeinCore::from_params`] for parameters already known to
    /// be in range.
    pub(crate) fn configure(params: &SkeinParams<'_>) -> Self {
        let output_bits = params.output().bits();

        let zero = Words::<V>::default();
        let mut chain = if params.is_keyed() {
            ubi_string::<V>(&zero, BlockType::Key, params.key_bytes())
        } else {
            zero
        };

        chain = config_pass::<V>(&chain, output_bits);

        for (block_type, data) in params.trailing_strings() {
            if !data.is_empty() {
                chain = ubi_string::<V>(&chain, block_type, data);
            }
        }

        trace!(
            "{}: configured for {} output bits (keyed: {})",
            V::NAME,
            output_bits,
            params.is_keyed()
        );

        Self {
            chain,
            initial_chain: chain,
            tweak: TweakRegister::message(),
            output_bits,
        }
    }

    /// Message bytes absorbed into full, already-compressed blocks.
    pub fn bytes_compressed(&self) -> u64 {
        self.tweak.position()
    }

    pub fn output_bits(&self) -> u64 {
        self.output_bits
    }

    /// Final message pass; leaves the core in a state only `reset` recovers.
    pub(crate) fn finalize_chain(&mut self, buffer: &mut Buffer<Self>) -> Words<V> {
        self.tweak.advance(buffer.get_pos());
        self.tweak.mark_last();
        let block = buffer.pad_with_zeros();
        self.chain = ubi::<V>(&self.chain, &self.tweak, block);
        trace!(
            "{}: finalized after {} message bytes",
            V::NAME,
            self.tweak.position()
        );
        self.chain
    }
}

/// The configuration block, zero-padded to a full block.
fn config_pass<V: SkeinVariant>(chain: &Words<V>, output_bits: u64) -> Words<V> {
    let mut block = Block::<SkeinCore<V>>::default();
    block[..CONFIG_BYTES].copy_from_slice(&config_block(output_bits));
    ubi::<V>(chain, &TweakRegister::config(), &block)
}

impl<V: SkeinVariant> Default for SkeinCore<V> {
    /// Unkeyed, unbounded output.
    fn default() -> Self {
        Self::configure(&SkeinParams::xof())
    }
}

impl<V: SkeinVariant> BlockSizeUser for SkeinCore<V> {
    type BlockSize = V::BlockSize;
}

impl<V: SkeinVariant> BufferKindUser for SkeinCore<V> {
    type BufferKind = Lazy;
}

impl<V: SkeinVariant> UpdateCore for SkeinCore<V> {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        for block in blocks {
            self.tweak.advance(V::BLOCK_BYTES);
            self.chain = ubi::<V>(&self.chain, &self.tweak, block);
            self.tweak.clear_first();
        }
    }
}

impl<V: SkeinVariant> ExtendableOutputCore for SkeinCore<V> {
    type ReaderCore = SkeinReaderCore<V>;

    #[inline]
    fn finalize_xof_core(&mut self, buffer: &mut Buffer<Self>) -> Self::ReaderCore {
        SkeinReaderCore::new(self.finalize_chain(buffer))
    }
}

impl<V: SkeinVariant> Reset for SkeinCore<V> {
    #[inline]
    fn reset(&mut self) {
        self.chain = self.initial_chain;
        self.tweak = TweakRegister::message();
    }
}

impl<V: SkeinVariant> AlgorithmName for SkeinCore<V> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-XOF", V::NAME)
    }
}

impl<V: SkeinVariant> fmt::Debug for SkeinCore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SkeinCore<{}> {{ ... }}", V::NAME)
    }
}

//======================================================================
// SkeinReaderCore
//======================================================================

/// Output generator. Block `i` is an independent output pass over the
/// 8-byte counter `i`, keyed by the finalized chaining value.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SkeinReaderCore<V: SkeinVariant> {
    chain: Words<V>,
    counter: u64,
}

impl<V: SkeinVariant> SkeinReaderCore<V> {
    pub(crate) fn new(chain: Words<V>) -> Self {
        Self { chain, counter: 0 }
    }

    /// Number of output passes run so far.
    pub fn blocks_emitted(&self) -> u64 {
        self.counter
    }

    /// Fills `out` from the current counter onward.
    pub fn fill(&mut self, out: &mut [u8]) {
        for chunk in out.chunks_mut(V::BLOCK_BYTES) {
            let block = self.read_block();
            chunk.copy_from_slice(&block[..chunk.len()]);
        }
    }
}

impl<V: SkeinVariant> BlockSizeUser for SkeinReaderCore<V> {
    type BlockSize = V::BlockSize;
}

impl<V: SkeinVariant> XofReaderCore for SkeinReaderCore<V> {
    #[inline]
    fn read_block(&mut self) -> Block<Self> {
        let words = output_block::<V>(&self.chain, self.counter);
        self.counter = self.counter.wrapping_add(1);
        words_to_block::<V::Threefish>(&words)
    }
}

impl<V: SkeinVariant> fmt::Debug for SkeinReaderCore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SkeinReaderCore<{}> {{ ... }}", V::NAME)
    }
}
