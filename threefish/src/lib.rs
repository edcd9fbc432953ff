//======================================================================
// threefish/src/lib.rs
// Crate entry point for the Threefish tweakable block cipher.
//======================================================================

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

// --- Module Declarations ---

mod backends;
mod block;
pub mod consts;
pub mod error;
pub mod key;
pub mod tweak;
pub mod variant;
pub mod word;

// --- Test Module ---
#[cfg(test)]
mod tests;

// --- Re-exports ---

pub use cipher;

pub use block::Threefish;
pub use error::Error;
pub use key::{KeyRegister, SubkeySchedule};
pub use tweak::Tweak;
pub use variant::ThreefishVariant;
pub use word::Word64;

// --- Top-level Type Aliases ---

/// Threefish with 256-bit blocks and keys.
pub type Threefish256 = Threefish<variant::Threefish256>;

/// Threefish with 512-bit blocks and keys.
pub type Threefish512 = Threefish<variant::Threefish512>;
