//======================================================================
// skein/src/lib.rs
// Crate entry point: Skein hashing, MAC and XOF over Threefish.
//======================================================================

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

#[cfg(feature = "alloc")]
extern crate alloc;

// --- Module Declarations ---

pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod fixed;
pub mod hasher;
pub mod tweak;
pub mod ubi;
pub mod variant;


// --- Re-exports ---

pub use digest;
pub use threefish;

pub use config::{OutputLength, SkeinParams};
pub use engine::{SkeinCore, SkeinReaderCore};
pub use error::Error;
pub use fixed::{FixedCore, MacCore};
pub use hasher::Skein;
pub use variant::SkeinVariant;

use digest::consts::{U16, U20, U28, U32, U48, U64};
use digest::core_api::{CoreWrapper, XofReaderCoreWrapper};

// --- Runtime-sized Contexts ---

/// Skein-256 with a digest size chosen at construction.
pub type Skein256 = Skein<variant::Skein256>;
/// Skein-512 with a digest size chosen at construction.
pub type Skein512 = Skein<variant::Skein512>;

// --- Fixed-size Digests ---

pub type Skein256Hash<N> = CoreWrapper<FixedCore<variant::Skein256, N>>;
pub type Skein512Hash<N> = CoreWrapper<FixedCore<variant::Skein512, N>>;

pub type Skein256_128 = Skein256Hash<U16>;
pub type Skein256_160 = Skein256Hash<U20>;
pub type Skein256_224 = Skein256Hash<U28>;
pub type Skein256_256 = Skein256Hash<U32>;
pub type Skein512_224 = Skein512Hash<U28>;
pub type Skein512_256 = Skein512Hash<U32>;
pub type Skein512_384 = Skein512Hash<U48>;
pub type Skein512_512 = Skein512Hash<U64>;

// --- MACs ---

/// Skein-256-MAC with an `N`-byte tag; keys of any length.
pub type Skein256Mac<N> = CoreWrapper<MacCore<variant::Skein256, N>>;
/// Skein-512-MAC with an `N`-byte tag; keys of any length.
pub type Skein512Mac<N> = CoreWrapper<MacCore<variant::Skein512, N>>;

// --- Extendable Output ---

pub type Skein256Xof = CoreWrapper<SkeinCore<variant::Skein256>>;
pub type Skein512Xof = CoreWrapper<SkeinCore<variant::Skein512>>;
pub type Skein256XofReader = XofReaderCoreWrapper<SkeinReaderCore<variant::Skein256>>;
pub type Skein512XofReader = XofReaderCoreWrapper<SkeinReaderCore<variant::Skein512>>;
