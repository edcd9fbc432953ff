//======================================================================
// skein/src/config.rs
// Configuration string and the parameters describing one Skein instance.
//======================================================================

use crate::consts::{
    CONFIG_BYTES, MAX_DIGEST_BYTES, MIN_DIGEST_BYTES, SCHEMA_ID, VERSION, XOF_OUTPUT_BITS,
};
use crate::error::Error;

/// Encodes the 32-byte configuration string for `output_bits` of output.
///
/// Layout: schema id (4), version (2), reserved (2), output length in bits
/// (8, little-endian), tree parameters (3, all zero for sequential hashing),
/// reserved (13).
pub fn config_block(output_bits: u64) -> [u8; CONFIG_BYTES] {
    let mut block = [0u8; CONFIG_BYTES];
    block[..4].copy_from_slice(&SCHEMA_ID);
    block[4..6].copy_from_slice(&VERSION.to_le_bytes());
    block[8..16].copy_from_slice(&output_bits.to_le_bytes());
    block
}

/// How much output an instance is configured for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputLength {
    /// A fixed digest of this many bytes.
    Bytes(usize),
    /// Unbounded output read through an XOF reader.
    Unbounded,
}

impl OutputLength {
    pub(crate) fn bits(self) -> u64 {
        match self {
            OutputLength::Bytes(n) => (n as u64) * 8,
            OutputLength::Unbounded => XOF_OUTPUT_BITS,
        }
    }
}

/// Parameters for one Skein instance.
///
/// Every non-empty optional string gets its own UBI pass, run in the order
/// key, configuration, personalization, public key, key identifier, nonce.
#[derive(Clone, Copy, Debug)]
pub struct SkeinParams<'a> {
    output: OutputLength,
    key: &'a [u8],
    personalization: &'a [u8],
    public_key: &'a [u8],
    key_id: &'a [u8],
    nonce: &'a [u8],
}

impl<'a> SkeinParams<'a> {
    /// Plain hashing with a digest of `digest_size` bytes.
    pub const fn new(digest_size: usize) -> Self {
        Self::with_output(OutputLength::Bytes(digest_size))
    }

    /// Unbounded output.
    pub const fn xof() -> Self {
        Self::with_output(OutputLength::Unbounded)
    }

    const fn with_output(output: OutputLength) -> Self {
        Self {
            output,
            key: &[],
            personalization: &[],
            public_key: &[],
            key_id: &[],
            nonce: &[],
        }
    }

    /// MAC key. An empty key means unkeyed hashing.
    pub const fn key(mut self, key: &'a [u8]) -> Self {
        self.key = key;
        self
    }

    pub const fn personalization(mut self, personalization: &'a [u8]) -> Self {
        self.personalization = personalization;
        self
    }

    pub const fn public_key(mut self, public_key: &'a [u8]) -> Self {
        self.public_key = public_key;
        self
    }

    /// Key identifier for key derivation.
    pub const fn key_id(mut self, key_id: &'a [u8]) -> Self {
        self.key_id = key_id;
        self
    }

    pub const fn nonce(mut self, nonce: &'a [u8]) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn output(&self) -> OutputLength {
        self.output
    }

    pub fn is_keyed(&self) -> bool {
        !self.key.is_empty()
    }

    pub(crate) fn key_bytes(&self) -> &'a [u8] {
        self.key
    }

    /// Optional strings absorbed after the configuration pass, in order.
    pub(crate) fn trailing_strings(&self) -> [(crate::tweak::BlockType, &'a [u8]); 4] {
        use crate::tweak::BlockType;
        [
            (BlockType::Personalization, self.personalization),
            (BlockType::PublicKey, self.public_key),
            (BlockType::KeyIdentifier, self.key_id),
            (BlockType::Nonce, self.nonce),
        ]
    }

    /// Checks the digest size against `[1, 2^29]`.
    pub fn validate(&self) -> Result<(), Error> {
        match self.output {
            OutputLength::Bytes(n) if !(MIN_DIGEST_BYTES..=MAX_DIGEST_BYTES).contains(&n) => {
                Err(Error::OutOfRange {
                    value: n,
                    min: MIN_DIGEST_BYTES,
                    max: MAX_DIGEST_BYTES,
                })
            }
            _ => Ok(()),
        }
    }
}
