//======================================================================
// skein/src/consts.rs
// Constants for the Skein configuration block and size limits.
//======================================================================

/// Schema identifier at the start of the configuration string: "SHA3".
pub const SCHEMA_ID: [u8; 4] = *b"SHA3";

/// Configuration string format version.
pub const VERSION: u16 = 1;

/// Length of the configuration string in bytes.
pub const CONFIG_BYTES: usize = 32;

/// Length of the output counter fed to each output pass.
pub const OUTPUT_COUNTER_BYTES: usize = 8;

/// Smallest digest size accepted by the runtime-sized context.
pub const MIN_DIGEST_BYTES: usize = 1;

/// Largest digest size accepted by the runtime-sized context (2^29 bytes).
pub const MAX_DIGEST_BYTES: usize = 1 << 29;

/// Output length placed in the configuration block for unbounded output.
pub const XOF_OUTPUT_BITS: u64 = u64::MAX;
