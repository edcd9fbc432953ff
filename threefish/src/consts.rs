//======================================================================
// threefish/src/consts.rs
// Constants shared by every Threefish variant.
//======================================================================

/// Number of rounds for Threefish-256 and Threefish-512.
pub const ROUNDS: usize = 72;

/// A subkey is injected before the first round, after every fourth round,
/// and once more at the end.
pub const SUBKEY_COUNT: usize = ROUNDS / 4 + 1;

/// Constant folded into the key parity word.
pub const KEY_SCHEDULE_PARITY: u64 = 0x1BD1_1BDA_A9FC_1A22;

/// Tweak size in bytes.
pub const TWEAK_BYTES: usize = 16;

/// Rotation constants for Threefish-256, indexed by `(round % 8) * 2 + pair`.
pub const ROTATIONS_256: [u32; 16] = [
    14, 16, //
    52, 57, //
    23, 40, //
    5, 37, //
    25, 33, //
    46, 12, //
    58, 22, //
    32, 32,
];

/// Rotation constants for Threefish-512, indexed by `(round % 8) * 4 + pair`.
pub const ROTATIONS_512: [u32; 32] = [
    46, 36, 19, 37, //
    33, 27, 14, 42, //
    17, 49, 36, 39, //
    44, 9, 54, 56, //
    39, 30, 34, 24, //
    13, 50, 10, 17, //
    25, 29, 39, 43, //
    8, 35, 56, 22,
];

/// Word permutation for Threefish-256: `new[i] = old[P[i]]`.
pub const PERMUTATION_256: [usize; 4] = [0, 3, 2, 1];

/// Word permutation for Threefish-512: `new[i] = old[P[i]]`.
pub const PERMUTATION_512: [usize; 8] = [2, 1, 4, 7, 6, 5, 0, 3];
