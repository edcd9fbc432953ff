//======================================================================
// Threefish Crate Test Suite
//======================================================================
#![cfg(test)]

extern crate std;

use crate::{Error, Threefish256, Threefish512, Tweak, Word64};
use cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};
use std::vec;

fn hex32(s: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    hex::decode_to_slice(s, &mut out).expect("valid hex");
    out
}

//======================================================================
// Known-answer tests
//======================================================================

#[test]
fn threefish_256_zero_vector() {
    let cipher = Threefish256::new_with_tweak(&[0u8; 32].into(), &[0u8; 16]);
    let mut block = [0u8; 32].into();
    cipher.encrypt_block(&mut block);
    assert_eq!(
        block.as_slice(),
        hex32("84da2a1f8beaee947066ae3e3103f1ad536db1f4a1192495116b9f3ce6133fd8")
    );

    cipher.decrypt_block(&mut block);
    assert_eq!(block.as_slice(), &[0u8; 32], "Decryption must restore the zero block");
}

#[test]
fn threefish_512_zero_vector() {
    let cipher = Threefish512::try_new(&[0u8; 64], &[0u8; 16]).expect("valid sizes");
    let mut block = [0u8; 64];
    cipher.encrypt_block_at(&mut block, 0).expect("full block");

    let mut expected = [0u8; 64];
    hex::decode_to_slice(
        "b1a2bbc6ef6025bc40eb3822161f36e375d1bb0aee3186fbd19e47c5d479947b\
         7bc2f8586e35f0cff7e7f03084b0b7b1f1ab3961a580a3e97eb41ea14a6d7bbe",
        &mut expected,
    )
    .expect("valid hex");
    assert_eq!(block, expected);

    cipher.decrypt_block_at(&mut block, 0).expect("full block");
    assert_eq!(block, [0u8; 64], "Decryption must restore the zero block");
}

#[test]
fn key_init_uses_zero_tweak() {
    let key = [0u8; 32].into();
    let plain = Threefish256::new(&key);
    let tweaked = Threefish256::new_with_tweak(&key, &[0u8; 16]);

    let mut a = [0x5Au8; 32].into();
    let mut b = [0x5Au8; 32].into();
    plain.encrypt_block(&mut a);
    tweaked.encrypt_block(&mut b);
    assert_eq!(a, b);
}

//======================================================================
// Round trips
//======================================================================

#[test]
fn threefish_256_random_roundtrip() {
    let mut rng = ChaCha8Rng::from_seed([7; 32]);
    for _ in 0..16 {
        let mut key = [0u8; 32];
        let mut tweak = [0u8; 16];
        let mut block = [0u8; 32];
        rng.fill_bytes(&mut key);
        rng.fill_bytes(&mut tweak);
        rng.fill_bytes(&mut block);

        let cipher = Threefish256::new_with_tweak(&key.into(), &tweak);
        let mut buf = block.into();
        cipher.encrypt_block(&mut buf);
        assert_ne!(buf.as_slice(), block, "Ciphertext should not match plaintext");
        cipher.decrypt_block(&mut buf);
        assert_eq!(buf.as_slice(), block);
    }
}

#[test]
fn threefish_512_random_roundtrip() {
    let mut rng = ChaCha8Rng::from_seed([9; 32]);
    for _ in 0..16 {
        let mut key = [0u8; 64];
        let mut tweak = [0u8; 16];
        let mut block = [0u8; 64];
        rng.fill_bytes(&mut key);
        rng.fill_bytes(&mut tweak);
        rng.fill_bytes(&mut block);

        let cipher = Threefish512::try_new(&key, &tweak).expect("valid sizes");
        let mut buf = block;
        cipher.encrypt_block_at(&mut buf, 0).expect("full block");
        assert_ne!(buf, block, "Ciphertext should not match plaintext");
        cipher.decrypt_block_at(&mut buf, 0).expect("full block");
        assert_eq!(buf, block);
    }
}

#[test]
fn word_api_matches_byte_api() {
    let key: [u8; 64] = core::array::from_fn(|i| i as u8);
    let tweak: [u8; 16] = core::array::from_fn(|i| 0xF0 | i as u8);
    let cipher = Threefish512::try_new(&key, &tweak).expect("valid sizes");

    let mut key_words = [Word64::ZERO; 8];
    crate::word::load_le(&mut key_words, &key);
    let by_words = Threefish512::from_words(&key_words, &Tweak::from_bytes(&tweak));

    let mut bytes = [0x11u8; 64];
    cipher.encrypt_block_at(&mut bytes, 0).expect("full block");

    let mut words = [Word64(0x1111_1111_1111_1111); 8];
    by_words.encrypt_words(&mut words);
    let mut from_words = [0u8; 64];
    crate::word::store_le(&words, &mut from_words);

    assert_eq!(bytes, from_words);
}

#[test]
fn multi_block_buffers_match_per_block_encryption() {
    let cipher = Threefish256::new_with_tweak(&[3u8; 32].into(), &[4u8; 16]);
    let mut rng = ChaCha8Rng::from_seed([11; 32]);
    let mut data = vec![0u8; 96];
    rng.fill_bytes(&mut data);

    let mut by_offset = data.clone();
    for offset in (0..96).step_by(32) {
        cipher.encrypt_block_at(&mut by_offset, offset).expect("full block");
    }

    let mut blocks: std::vec::Vec<_> = data
        .chunks_exact(32)
        .map(|c| cipher::Block::<Threefish256>::clone_from_slice(c))
        .collect();
    cipher.encrypt_blocks(&mut blocks);
    let flat: std::vec::Vec<u8> = blocks.iter().flat_map(|b| b.iter().copied()).collect();

    assert_eq!(by_offset, flat);
}

//======================================================================
// Key and tweak handling
//======================================================================

#[test]
fn each_tweak_gets_its_own_schedule() {
    let key = [0x24u8; 32].into();
    let first = Threefish256::new_with_tweak(&key, &[1u8; 16]);
    let second = Threefish256::new_with_tweak(&key, &[2u8; 16]);

    let mut a = [0u8; 32].into();
    let mut b = [0u8; 32].into();
    first.encrypt_block(&mut a);
    second.encrypt_block(&mut b);
    assert_ne!(a, b, "Different tweaks must give different ciphertexts");

    let rebuilt = Threefish256::new_with_tweak(&key, &[1u8; 16]);
    let mut c = [0u8; 32].into();
    rebuilt.encrypt_block(&mut c);
    assert_eq!(a, c, "Rebuilding with the first tweak must reproduce its ciphertext");
}

#[test]
fn slice_constructor_rejects_bad_lengths() {
    assert_eq!(
        Threefish256::try_new(&[0u8; 31], &[0u8; 16]).unwrap_err(),
        Error::SizeMismatch { expected: 32, actual: 31 }
    );
    assert_eq!(
        Threefish512::try_new(&[0u8; 64], &[0u8; 17]).unwrap_err(),
        Error::SizeMismatch { expected: 16, actual: 17 }
    );
}

#[test]
fn short_buffers_are_rejected_without_mutation() {
    let cipher = Threefish256::new_with_tweak(&[0u8; 32].into(), &[0u8; 16]);

    let mut short = [9u8; 31];
    assert_eq!(
        cipher.encrypt_block_at(&mut short, 0),
        Err(Error::SizeMismatch { expected: 32, actual: 31 })
    );
    assert_eq!(short, [9u8; 31]);

    let mut buf = [9u8; 40];
    assert_eq!(
        cipher.decrypt_block_at(&mut buf, 9),
        Err(Error::SizeMismatch { expected: 32, actual: 31 })
    );
    assert_eq!(
        cipher.encrypt_block_at(&mut buf, 100),
        Err(Error::SizeMismatch { expected: 32, actual: 0 })
    );
    assert_eq!(buf, [9u8; 40]);

    assert!(cipher.encrypt_block_at(&mut buf, 8).is_ok());
    assert_eq!(buf[..8], [9u8; 8], "Bytes before the offset are untouched");
}
