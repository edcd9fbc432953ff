//======================================================================
// skein/src/hasher.rs
// Streaming Skein context with a digest size chosen at runtime.
//======================================================================

use crate::config::{OutputLength, SkeinParams};
use crate::consts::MAX_DIGEST_BYTES;
use crate::engine::SkeinCore;
use crate::error::Error;
use crate::variant::SkeinVariant;
use core::fmt;
use digest::{
    core_api::CoreWrapper, ExtendableOutput, ExtendableOutputReset, InvalidBufferSize,
    InvalidOutputSize, Reset, Update, VariableOutput, VariableOutputReset, XofReader,
};

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};

/// Skein hash or MAC producing `digest_size` bytes, `1 <= digest_size <= 2^29`.
///
/// Input may be written in any number of pieces. [`Skein::sum_into`] and
/// [`Skein::sum`] work on a copy and leave the context writable;
/// [`Skein::finalize_into`] consumes it.
///
/// ```
/// use skein::Skein512;
///
/// let mut hasher = Skein512::new(64).unwrap();
/// hasher.update(b"abc");
/// let mut digest = [0u8; 64];
/// hasher.sum_into(&mut digest).unwrap();
///
/// hasher.update(b"def");
/// let mut longer = [0u8; 64];
/// hasher.sum_into(&mut longer).unwrap();
/// assert_ne!(digest, longer);
/// ```
#[derive(Clone)]
pub struct Skein<V: SkeinVariant> {
    inner: CoreWrapper<SkeinCore<V>>,
    digest_size: usize,
}

impl<V: SkeinVariant> Skein<V> {
    /// Unkeyed context. Fails with [`Error::OutOfRange`] for sizes outside
    /// `[1, 2^29]`.
    pub fn new(digest_size: usize) -> Result<Self, Error> {
        Self::from_params(&SkeinParams::new(digest_size))
    }

    /// MAC context. An empty `key` gives the unkeyed hash.
    pub fn new_keyed(digest_size: usize, key: &[u8]) -> Result<Self, Error> {
        Self::from_params(&SkeinParams::new(digest_size).key(key))
    }

    /// Context for arbitrary parameters.
    ///
    /// `params` must name a digest size. Unbounded parameters are rejected
    /// with [`Error::UnboundedOutput`]; use [`crate::Skein256Xof`] or
    /// [`crate::Skein512Xof`] for those.
    pub fn from_params(params: &SkeinParams<'_>) -> Result<Self, Error> {
        let digest_size = match params.output() {
            OutputLength::Bytes(n) => n,
            OutputLength::Unbounded => return Err(Error::UnboundedOutput),
        };
        let core = SkeinCore::from_params(params)?;
        Ok(Self {
            inner: CoreWrapper::from_core(core),
            digest_size,
        })
    }

    /// Fresh context with the same configuration (digest size, key and
    /// optional strings) and no data.
    pub fn new_empty(&self) -> Self {
        let mut fresh = self.clone();
        fresh.reset();
        fresh
    }

    pub fn digest_size(&self) -> usize {
        self.digest_size
    }

    /// Absorbs `data`. Full blocks are compressed only once it is known that
    /// more input follows them.
    pub fn update(&mut self, data: &[u8]) {
        Update::update(&mut self.inner, data);
    }

    /// Writes the digest of everything absorbed so far to
    /// `out[..digest_size]`. The context itself is not changed.
    pub fn sum_into(&self, out: &mut [u8]) -> Result<(), Error> {
        let out = self.output_slice(out)?;
        self.inner.clone().finalize_xof().read(out);
        Ok(())
    }

    /// Like [`Skein::sum_into`], returning a new vector.
    #[cfg(feature = "alloc")]
    pub fn sum(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.digest_size];
        self.inner.clone().finalize_xof().read(&mut out);
        out
    }

    /// Finalizes in place, without copying the state first.
    pub fn finalize_into(self, out: &mut [u8]) -> Result<(), Error> {
        let out = self.output_slice(out)?;
        self.inner.finalize_xof().read(out);
        Ok(())
    }

    /// Finalizes in place, then returns to the freshly configured state.
    pub fn finalize_into_reset(&mut self, out: &mut [u8]) -> Result<(), Error> {
        let out = self.output_slice(out)?;
        self.inner.finalize_xof_reset().read(out);
        Ok(())
    }

    /// Drops all absorbed data. Digest size, key and optional strings stay.
    pub fn reset(&mut self) {
        Reset::reset(&mut self.inner);
    }

    fn output_slice<'o>(&self, out: &'o mut [u8]) -> Result<&'o mut [u8], Error> {
        let actual = out.len();
        out.get_mut(..self.digest_size).ok_or(Error::SizeMismatch {
            expected: self.digest_size,
            actual,
        })
    }
}

impl<V: SkeinVariant> fmt::Debug for Skein<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Skein")
            .field("variant", &V::NAME)
            .field("digest_size", &self.digest_size)
            .finish_non_exhaustive()
    }
}

impl<V: SkeinVariant> Update for Skein<V> {
    #[inline]
    fn update(&mut self, data: &[u8]) {
        Update::update(&mut self.inner, data);
    }
}

impl<V: SkeinVariant> Reset for Skein<V> {
    #[inline]
    fn reset(&mut self) {
        Reset::reset(&mut self.inner);
    }
}

impl<V: SkeinVariant> VariableOutput for Skein<V> {
    const MAX_OUTPUT_SIZE: usize = MAX_DIGEST_BYTES;

    fn new(output_size: usize) -> Result<Self, InvalidOutputSize> {
        Skein::new(output_size).map_err(|_| InvalidOutputSize)
    }

    fn output_size(&self) -> usize {
        self.digest_size
    }

    /// `out` must be exactly [`VariableOutput::output_size`] bytes long.
    fn finalize_variable(self, out: &mut [u8]) -> Result<(), InvalidBufferSize> {
        if out.len() != self.digest_size {
            return Err(InvalidBufferSize);
        }
        self.finalize_into(out).map_err(|_| InvalidBufferSize)
    }
}

impl<V: SkeinVariant> VariableOutputReset for Skein<V> {
    fn finalize_variable_reset(&mut self, out: &mut [u8]) -> Result<(), InvalidBufferSize> {
        if out.len() != self.digest_size {
            return Err(InvalidBufferSize);
        }
        self.finalize_into_reset(out).map_err(|_| InvalidBufferSize)
    }
}
