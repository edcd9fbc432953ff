//======================================================================
// threefish/src/tweak.rs
// The 128-bit cipher tweak and its three-word expansion.
//======================================================================

use crate::consts::TWEAK_BYTES;
use crate::error::Error;
use crate::word::Word64;
use zeroize::Zeroize;

/// The cipher tweak, held as `[t0, t1, t0 ^ t1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroize)]
pub struct Tweak {
    words: [Word64; 3],
}

impl Tweak {
    /// Builds the tweak from its two defining words.
    #[inline]
    pub const fn from_words(t0: u64, t1: u64) -> Self {
        Self {
            words: [Word64(t0), Word64(t1), Word64(t0 ^ t1)],
        }
    }

    /// Builds the tweak from 16 little-endian bytes.
    #[inline]
    pub fn from_bytes(bytes: &[u8; TWEAK_BYTES]) -> Self {
        let t0 = Word64::read_le(&bytes[..8]);
        let t1 = Word64::read_le(&bytes[8..]);
        Self::from_words(t0.0, t1.0)
    }

    /// Slice variant of [`Tweak::from_bytes`].
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let raw: &[u8; TWEAK_BYTES] = bytes.try_into().map_err(|_| Error::SizeMismatch {
            expected: TWEAK_BYTES,
            actual: bytes.len(),
        })?;
        Ok(Self::from_bytes(raw))
    }

    pub fn to_bytes(&self) -> [u8; TWEAK_BYTES] {
        let mut out = [0u8; TWEAK_BYTES];
        out[..8].copy_from_slice(&self.words[0].to_le_bytes());
        out[8..].copy_from_slice(&self.words[1].to_le_bytes());
        out
    }

    /// Returns tweak word `i mod 3` of the expansion.
    #[inline(always)]
    pub(crate) fn word(&self, i: usize) -> Word64 {
        self.words[i % 3]
    }

    pub fn t0(&self) -> u64 {
        self.words[0].0
    }

    pub fn t1(&self) -> u64 {
        self.words[1].0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_carries_xor_word() {
        let tweak = Tweak::from_words(0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210);
        assert_eq!(tweak.word(2), Word64(0xFFFF_FFFF_FFFF_FFFF));
        assert_eq!(tweak.word(3), tweak.word(0));
        assert_eq!(tweak.word(4), tweak.word(1));
    }

    #[test]
    fn byte_form_is_little_endian() {
        let bytes: [u8; 16] = core::array::from_fn(|i| i as u8);
        let tweak = Tweak::from_bytes(&bytes);
        assert_eq!(tweak.t0(), 0x0706_0504_0302_0100);
        assert_eq!(tweak.t1(), 0x0F0E_0D0C_0B0A_0908);
        assert_eq!(tweak.to_bytes(), bytes);
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            Tweak::try_from_slice(&[0u8; 15]),
            Err(Error::SizeMismatch { expected: 16, actual: 15 })
        );
        assert!(Tweak::try_from_slice(&[0u8; 16]).is_ok());
    }
}
