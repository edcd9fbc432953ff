//======================================================================
// threefish/src/backends/mod.rs
// Round function backends.
//======================================================================

mod soft;
pub(crate) use self::soft::{decrypt_words, encrypt_words, DecBackend, EncBackend};
