//======================================================================
// threefish/src/backends/soft.rs
// Software (scalar) implementation of the Threefish round network.
//======================================================================

use crate::consts::ROUNDS;
use crate::key::SubkeySchedule;
use crate::variant::ThreefishVariant;
use crate::word::{load_le, store_le, Word64};
use cipher::consts::U1;
use cipher::inout::InOut;
use cipher::{Block, BlockBackend, BlockSizeUser, ParBlocksSizeUser};

/// Forward-direction backend handed to `cipher` closures.
pub(crate) struct EncBackend<'a, V: ThreefishVariant>(pub(crate) &'a SubkeySchedule<V>);

impl<'a, V: ThreefishVariant> BlockSizeUser for EncBackend<'a, V> {
    type BlockSize = V::BlockSize;
}

impl<'a, V: ThreefishVariant> ParBlocksSizeUser for EncBackend<'a, V> {
    type ParBlocksSize = U1;
}

impl<'a, V: ThreefishVariant> BlockBackend for EncBackend<'a, V> {
    #[inline]
    fn proc_block(&mut self, mut block: InOut<'_, '_, Block<Self>>) {
        let mut state = V::Words::default();
        load_le(state.as_mut(), block.get_in());
        encrypt_words::<V>(self.0, &mut state);
        store_le(state.as_ref(), block.get_out());
    }
}

/// Inverse-direction backend handed to `cipher` closures.
pub(crate) struct DecBackend<'a, V: ThreefishVariant>(pub(crate) &'a SubkeySchedule<V>);

impl<'a, V: ThreefishVariant> BlockSizeUser for DecBackend<'a, V> {
    type BlockSize = V::BlockSize;
}

impl<'a, V: ThreefishVariant> ParBlocksSizeUser for DecBackend<'a, V> {
    type ParBlocksSize = U1;
}

impl<'a, V: ThreefishVariant> BlockBackend for DecBackend<'a, V> {
    #[inline]
    fn proc_block(&mut self, mut block: InOut<'_, '_, Block<Self>>) {
        let mut state = V::Words::default();
        load_le(state.as_mut(), block.get_in());
        decrypt_words::<V>(self.0, &mut state);
        store_le(state.as_ref(), block.get_out());
    }
}

#[inline(always)]
fn rotation<V: ThreefishVariant>(round: usize, pair: usize) -> u32 {
    V::ROTATIONS[(round % 8) * (V::WORDS / 2) + pair]
}

/// MIX on every word pair: `y0 = x0 + x1`, `y1 = (x1 <<< R) ^ y0`.
#[inline(always)]
fn mix<V: ThreefishVariant>(x: &mut [Word64], round: usize) {
    for pair in 0..V::WORDS / 2 {
        let (a, b) = (2 * pair, 2 * pair + 1);
        x[a] += x[b];
        x[b] = x[b].rotl(rotation::<V>(round, pair)) ^ x[a];
    }
}

#[inline(always)]
fn unmix<V: ThreefishVariant>(x: &mut [Word64], round: usize) {
    for pair in 0..V::WORDS / 2 {
        let (a, b) = (2 * pair, 2 * pair + 1);
        x[b] = (x[b] ^ x[a]).rotr(rotation::<V>(round, pair));
        x[a] -= x[b];
    }
}

#[inline(always)]
fn permute<V: ThreefishVariant>(state: &mut V::Words) {
    let old = *state;
    let (src, dst) = (old.as_ref(), state.as_mut());
    for (i, &p) in V::PERMUTATION.iter().enumerate() {
        dst[i] = src[p];
    }
}

#[inline(always)]
fn unpermute<V: ThreefishVariant>(state: &mut V::Words) {
    let old = *state;
    let (src, dst) = (old.as_ref(), state.as_mut());
    for (i, &p) in V::PERMUTATION.iter().enumerate() {
        dst[p] = src[i];
    }
}

#[inline(always)]
fn add_subkey(x: &mut [Word64], subkey: &[Word64]) {
    for (w, &k) in x.iter_mut().zip(subkey) {
        *w += k;
    }
}

#[inline(always)]
fn sub_subkey(x: &mut [Word64], subkey: &[Word64]) {
    for (w, &k) in x.iter_mut().zip(subkey) {
        *w -= k;
    }
}

/// Encrypts one block of words in place.
pub(crate) fn encrypt_words<V: ThreefishVariant>(schedule: &SubkeySchedule<V>, state: &mut V::Words) {
    for round in 0..ROUNDS {
        if round % 4 == 0 {
            add_subkey(state.as_mut(), schedule.subkey(round / 4).as_ref());
        }
        mix::<V>(state.as_mut(), round);
        permute::<V>(state);
    }
    add_subkey(state.as_mut(), schedule.subkey(ROUNDS / 4).as_ref());
}

/// Decrypts one block of words in place; the exact inverse of [`encrypt_words`].
pub(crate) fn decrypt_words<V: ThreefishVariant>(schedule: &SubkeySchedule<V>, state: &mut V::Words) {
    sub_subkey(state.as_mut(), schedule.subkey(ROUNDS / 4).as_ref());
    for round in (0..ROUNDS).rev() {
        unpermute::<V>(state);
        unmix::<V>(state.as_mut(), round);
        if round % 4 == 0 {
            sub_subkey(state.as_mut(), schedule.subkey(round / 4).as_ref());
        }
    }
}
