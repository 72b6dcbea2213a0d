use super::{Engine, PrngError};
use crate::configs::MAX_REGISTER_LEN;

/// Fixed-length bit register.
///
/// Bit index 0 is the oldest bit and the most significant bit of
/// [`Register::value`]; index `len - 1` is the newest and least significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Register {
    bits: u128,
    len: usize,
}

impl Register {
    pub fn from_bits(bits: &[u8]) -> Result<Register, PrngError> {
        if bits.is_empty() {
            return Err(PrngError::EmptyRegister);
        }
        if bits.len() > MAX_REGISTER_LEN {
            return Err(PrngError::RegisterTooLong { len: bits.len() });
        }
        let mut value = 0u128;
        for (index, &bit) in bits.iter().enumerate() {
            if bit > 1 {
                return Err(PrngError::InvalidBit { index, value: bit });
            }
            value = (value << 1) | bit as u128;
        }
        Ok(Register {
            bits: value,
            len: bits.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The register read as an unsigned integer, index 0 first.
    pub fn value(&self) -> u128 {
        self.bits
    }

    /// Bit at `index`. Panics if `index >= len`.
    pub fn bit(&self, index: usize) -> u8 {
        assert!(index < self.len, "bit index {index} out of range");
        ((self.bits >> (self.len - 1 - index)) & 1) as u8
    }

    pub fn to_bits(&self) -> Vec<u8> {
        (0..self.len).map(|i| self.bit(i)).collect()
    }

    /// Drop bit 0 and append `bit` at the newest position.
    fn shift_in(&self, bit: u8) -> Register {
        let mask = u128::MAX >> (MAX_REGISTER_LEN - self.len);
        Register {
            bits: ((self.bits << 1) | bit as u128) & mask,
            len: self.len,
        }
    }
}

/// How tapped bits are folded into the feedback bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Combine {
    #[default]
    Xor,
    Xnor,
}

/// Feedback function: the tapped register positions and their combining rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    taps: Vec<usize>,
    combine: Combine,
}

impl Feedback {
    pub fn new(taps: Vec<usize>, combine: Combine) -> Feedback {
        Feedback { taps, combine }
    }

    pub fn xor(taps: Vec<usize>) -> Feedback {
        Feedback::new(taps, Combine::Xor)
    }

    pub fn taps(&self) -> &[usize] {
        &self.taps
    }

    pub fn combine(&self) -> Combine {
        self.combine
    }

    fn apply(&self, register: &Register) -> u8 {
        let parity = self
            .taps
            .iter()
            .fold(0u8, |acc, &tap| acc ^ register.bit(tap));
        match self.combine {
            Combine::Xor => parity,
            Combine::Xnor => parity ^ 1,
        }
    }
}

/// Linear Feedback Shift Register over a register of fixed length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LfsrEngine {
    len: usize,
    feedback: Feedback,
}

impl LfsrEngine {
    /// Taps are checked against `len` here, so a bad tap never surfaces mid-run.
    pub fn new(len: usize, feedback: Feedback) -> Result<LfsrEngine, PrngError> {
        if len == 0 {
            return Err(PrngError::EmptyRegister);
        }
        if len > MAX_REGISTER_LEN {
            return Err(PrngError::RegisterTooLong { len });
        }
        if feedback.taps.is_empty() {
            return Err(PrngError::NoTaps);
        }
        if let Some(&tap) = feedback.taps.iter().find(|&&tap| tap >= len) {
            return Err(PrngError::TapOutOfRange { tap, len });
        }
        Ok(LfsrEngine { len, feedback })
    }

    /// Register width in bits.
    pub fn width(&self) -> usize {
        self.len
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

impl Engine for LfsrEngine {
    type State = Register;

    fn kind(&self) -> &'static str {
        "LFSR"
    }

    fn validate(&self, state: &Register) -> Result<(), PrngError> {
        if state.len != self.len {
            return Err(PrngError::RegisterLengthMismatch {
                expected: self.len,
                found: state.len,
            });
        }
        Ok(())
    }

    fn step(&self, state: &Register) -> (Register, u128) {
        let next = state.shift_in(self.feedback.apply(state));
        (next, next.value())
    }
}
