//======================================================================
// skein/src/tweak.rs
// UBI tweak register: byte position, block type, first/last flags.
//======================================================================

use crate::consts::{CONFIG_BYTES, OUTPUT_COUNTER_BYTES};
use threefish::Tweak;
use zeroize::Zeroize;

const FIRST_BIT: u64 = 1 << 62;
const LAST_BIT: u64 = 1 << 63;
const TYPE_SHIFT: u32 = 56;

/// Type tag carried in bits 56..62 of the second tweak word.
///
/// The discriminants are the tag values; passes run in ascending tag order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum BlockType {
    Key = 0,
    Config = 4,
    Personalization = 8,
    PublicKey = 12,
    KeyIdentifier = 16,
    Nonce = 20,
    Message = 48,
    Output = 63,
}

/// Tweak state for one UBI pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TweakRegister {
    position: u64,
    block_type: BlockType,
    first: bool,
    last: bool,
}

impl TweakRegister {
    /// Start of a pass of `block_type`: position 0, first block pending.
    pub const fn new(block_type: BlockType) -> Self {
        Self {
            position: 0,
            block_type,
            first: true,
            last: false,
        }
    }

    /// The single configuration block.
    pub const fn config() -> Self {
        Self {
            position: CONFIG_BYTES as u64,
            block_type: BlockType::Config,
            first: true,
            last: true,
        }
    }

    /// Start of the message pass.
    pub const fn message() -> Self {
        Self::new(BlockType::Message)
    }

    /// One output block; the counter travels in the payload, not the tweak.
    pub const fn output() -> Self {
        Self {
            position: OUTPUT_COUNTER_BYTES as u64,
            block_type: BlockType::Output,
            first: true,
            last: true,
        }
    }

    /// Counts `bytes` more input as consumed by the block about to be processed.
    #[inline]
    pub fn advance(&mut self, bytes: usize) {
        self.position = self.position.wrapping_add(bytes as u64);
    }

    #[inline]
    pub fn mark_last(&mut self) {
        self.last = true;
    }

    /// Called after a block has gone through the cipher.
    #[inline]
    pub fn clear_first(&mut self) {
        self.first = false;
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn block_type(&self) -> BlockType {
        self.block_type
    }

    pub fn is_first(&self) -> bool {
        self.first
    }

    pub fn is_last(&self) -> bool {
        self.last
    }

    /// Encodes the register as the 128-bit cipher tweak.
    pub fn to_tweak(&self) -> Tweak {
        let mut t1 = (self.block_type as u64) << TYPE_SHIFT;
        if self.first {
            t1 |= FIRST_BIT;
        }
        if self.last {
            t1 |= LAST_BIT;
        }
        Tweak::from_words(self.position, t1)
    }
}

impl Zeroize for TweakRegister {
    fn zeroize(&mut self) {
        self.position.zeroize();
        self.first = true;
        self.last = false;
    }
}
