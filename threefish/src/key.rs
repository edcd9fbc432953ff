//======================================================================
// threefish/src/key.rs
// Key register (key words plus parity) and the derived subkey schedule.
//======================================================================

use crate::consts::{KEY_SCHEDULE_PARITY, SUBKEY_COUNT};
use crate::tweak::Tweak;
use crate::variant::ThreefishVariant;
use crate::word::{load_le, Word64};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The `WORDS + 1` key words the schedule is drawn from.
///
/// The extra word is the parity `k0 ^ k1 ^ ... ^ C`, recomputed on every
/// construction so the register is always valid for scheduling.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyRegister<V: ThreefishVariant> {
    words: V::Words,
    parity: Word64,
}

impl<V: ThreefishVariant> KeyRegister<V> {
    pub fn from_words(words: V::Words) -> Self {
        let parity = words
            .as_ref()
            .iter()
            .fold(Word64(KEY_SCHEDULE_PARITY), |acc, &w| acc ^ w);
        Self { words, parity }
    }

    /// `bytes` must be exactly `V::BLOCK_BYTES` long.
    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        let mut words = V::Words::default();
        load_le(words.as_mut(), bytes);
        Self::from_words(words)
    }

    /// Key word `i mod (WORDS + 1)`.
    #[inline(always)]
    pub fn word(&self, i: usize) -> Word64 {
        let i = i % (V::WORDS + 1);
        if i == V::WORDS {
            self.parity
        } else {
            self.words.as_ref()[i]
        }
    }

    pub fn parity(&self) -> Word64 {
        self.parity
    }
}

/// Per-injection subkeys derived from one `(key, tweak)` pair.
///
/// A schedule is never updated in place. A new key or tweak means a new
/// schedule.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SubkeySchedule<V: ThreefishVariant> {
    subkeys: [V::Words; SUBKEY_COUNT],
}

impl<V: ThreefishVariant> SubkeySchedule<V> {
    pub fn derive(key: &KeyRegister<V>, tweak: &Tweak) -> Self {
        let n = V::WORDS;
        let mut subkeys = [V::Words::default(); SUBKEY_COUNT];
        for (s, subkey) in subkeys.iter_mut().enumerate() {
            let words = subkey.as_mut();
            for (i, word) in words.iter_mut().enumerate() {
                *word = key.word(s + i);
            }
            words[n - 3] += tweak.word(s);
            words[n - 2] += tweak.word(s + 1);
            words[n - 1] += Word64(s as u64);
        }
        Self { subkeys }
    }

    /// Subkey injected at position `s` (`0..SUBKEY_COUNT`).
    #[inline(always)]
    pub fn subkey(&self, s: usize) -> &V::Words {
        &self.subkeys[s]
    }
}
