//======================================================================
// threefish/src/block.rs
// The keyed, tweaked Threefish block cipher.
//======================================================================

use crate::backends;
use crate::consts::TWEAK_BYTES;
use crate::error::Error;
use crate::key::{KeyRegister, SubkeySchedule};
use crate::tweak::Tweak;
use crate::variant::ThreefishVariant;
use crate::word::{load_le, store_le};
use cipher::{
    AlgorithmName, BlockCipher, BlockClosure, BlockDecrypt, BlockEncrypt, BlockSizeUser, Key,
    KeyInit, KeySizeUser,
};
use core::fmt;

/// Threefish keyed with one `(key, tweak)` pair.
///
/// The subkey schedule is derived once in the constructor and never
/// changes. Encrypting under another key or tweak means building another
/// `Threefish`.
#[derive(Clone)]
pub struct Threefish<V: ThreefishVariant> {
    schedule: SubkeySchedule<V>,
}

impl<V: ThreefishVariant> Threefish<V> {
    /// Creates a cipher from a key and a 16-byte tweak.
    pub fn new_with_tweak(key: &Key<Self>, tweak: &[u8; TWEAK_BYTES]) -> Self {
        Self::with_register(&KeyRegister::from_bytes(key), &Tweak::from_bytes(tweak))
    }

    /// Creates a cipher from key and tweak slices, checking both lengths.
    pub fn try_new(key: &[u8], tweak: &[u8]) -> Result<Self, Error> {
        if key.len() != V::BLOCK_BYTES {
            return Err(Error::SizeMismatch {
                expected: V::BLOCK_BYTES,
                actual: key.len(),
            });
        }
        let tweak = Tweak::try_from_slice(tweak)?;
        Ok(Self::with_register(&KeyRegister::from_bytes(key), &tweak))
    }

    /// Creates a cipher from key words, as used when chaining.
    pub fn from_words(key: &V::Words, tweak: &Tweak) -> Self {
        Self::with_register(&KeyRegister::from_words(*key), tweak)
    }

    pub fn with_register(key: &KeyRegister<V>, tweak: &Tweak) -> Self {
        Self {
            schedule: SubkeySchedule::derive(key, tweak),
        }
    }

    #[inline]
    pub fn encrypt_words(&self, block: &mut V::Words) {
        backends::encrypt_words::<V>(&self.schedule, block);
    }

    #[inline]
    pub fn decrypt_words(&self, block: &mut V::Words) {
        backends::decrypt_words::<V>(&self.schedule, block);
    }

    /// Encrypts the block starting at `offset` in place.
    pub fn encrypt_block_at(&self, buf: &mut [u8], offset: usize) -> Result<(), Error> {
        let bytes = block_at::<V>(buf, offset)?;
        let mut state = V::Words::default();
        load_le(state.as_mut(), bytes);
        self.encrypt_words(&mut state);
        store_le(state.as_ref(), bytes);
        Ok(())
    }

    /// Decrypts the block starting at `offset` in place.
    pub fn decrypt_block_at(&self, buf: &mut [u8], offset: usize) -> Result<(), Error> {
        let bytes = block_at::<V>(buf, offset)?;
        let mut state = V::Words::default();
        load_le(state.as_mut(), bytes);
        self.decrypt_words(&mut state);
        store_le(state.as_ref(), bytes);
        Ok(())
    }
}

fn block_at<V: ThreefishVariant>(buf: &mut [u8], offset: usize) -> Result<&mut [u8], Error> {
    let available = buf.len().saturating_sub(offset);
    if available < V::BLOCK_BYTES {
        return Err(Error::SizeMismatch {
            expected: V::BLOCK_BYTES,
            actual: available,
        });
    }
    Ok(&mut buf[offset..offset + V::BLOCK_BYTES])
}

impl<V: ThreefishVariant> KeySizeUser for Threefish<V> {
    type KeySize = V::BlockSize;
}

impl<V: ThreefishVariant> BlockSizeUser for Threefish<V> {
    type BlockSize = V::BlockSize;
}

impl<V: ThreefishVariant> BlockCipher for Threefish<V> {}

impl<V: ThreefishVariant> KeyInit for Threefish<V> {
    /// Keys the cipher with an all-zero tweak.
    fn new(key: &Key<Self>) -> Self {
        Self::new_with_tweak(key, &[0u8; TWEAK_BYTES])
    }
}

impl<V: ThreefishVariant> BlockEncrypt for Threefish<V> {
    fn encrypt_with_backend(&self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut backends::EncBackend(&self.schedule));
    }
}

impl<V: ThreefishVariant> BlockDecrypt for Threefish<V> {
    fn decrypt_with_backend(&self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut backends::DecBackend(&self.schedule));
    }
}

impl<V: ThreefishVariant> AlgorithmName for Threefish<V> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(V::NAME)
    }
}

impl<V: ThreefishVariant> fmt::Debug for Threefish<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{ ... }}", V::NAME)
    }
}
