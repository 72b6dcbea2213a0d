/// Widest LCG modulus exponent, limited by the `u128` state.
pub const MAX_LCG_EXPONENT: u32 = 128;
/// Longest LFSR register, limited by the `u128` output value.
pub const MAX_REGISTER_LEN: usize = 128;

/// Default number of steps per run.
pub const DEFAULT_STEPS: usize = 1000;

// Demonstration LCG: x' = (3x + 2) mod 2^24, seeded with 5
pub const DEMO_LCG_A: u128 = 3;
pub const DEMO_LCG_B: u128 = 2;
pub const DEMO_LCG_M: u32 = 24;
pub const DEMO_LCG_SEED: u128 = 5;

// Demonstration LFSR: 8-bit register, feedback = r[2] ^ r[4] ^ r[7]
pub const DEMO_LFSR_REGISTER: [u8; 8] = [1, 0, 1, 1, 0, 0, 1, 0];
pub const DEMO_LFSR_TAPS: [usize; 3] = [2, 4, 7];

/// Projection modulus used by the demonstration's second run of each generator.
pub const DEMO_MODULUS: u128 = 2;
