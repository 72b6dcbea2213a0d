use super::{Engine, PrngError};
use crate::configs::MAX_LCG_EXPONENT;

/// Parameters of `x' = (a * x + b) mod 2^m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcgParams {
    pub a: u128,
    pub b: u128,
    pub m: u32,
}

impl LcgParams {
    pub fn new(a: u128, b: u128, m: u32) -> Self {
        LcgParams { a, b, m }
    }
}

/// Linear Congruential Generator
///
/// Xi+1 = (a x Xi + b) mod 2^m
///
/// The product is taken with wrapping `u128` arithmetic and then masked to the
/// low `m` bits. Since 2^m divides 2^128, this is exact for every m <= 128.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcgEngine {
    params: LcgParams,
    mask: u128,
}

impl LcgEngine {
    pub fn new(params: LcgParams) -> Result<LcgEngine, PrngError> {
        if params.m == 0 || params.m > MAX_LCG_EXPONENT {
            return Err(PrngError::InvalidExponent { m: params.m });
        }
        let mask = u128::MAX >> (MAX_LCG_EXPONENT - params.m);
        Ok(LcgEngine { params, mask })
    }

    pub fn params(&self) -> LcgParams {
        self.params
    }

    /// 2^m - 1, the largest state this engine can hold.
    pub fn max_state(&self) -> u128 {
        self.mask
    }
}

impl Engine for LcgEngine {
    type State = u128;

    fn kind(&self) -> &'static str {
        "LCG"
    }

    fn validate(&self, state: &u128) -> Result<(), PrngError> {
        if *state > self.mask {
            return Err(PrngError::SeedOutOfRange {
                seed: *state,
                m: self.params.m,
            });
        }
        Ok(())
    }

    fn step(&self, state: &u128) -> (u128, u128) {
        let next = state
            .wrapping_mul(self.params.a)
            .wrapping_add(self.params.b)
            & self.mask;
        (next, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_exponent() {
        assert_eq!(
            LcgEngine::new(LcgParams::new(3, 2, 0)),
            Err(PrngError::InvalidExponent { m: 0 })
        );
        assert_eq!(
            LcgEngine::new(LcgParams::new(3, 2, 129)),
            Err(PrngError::InvalidExponent { m: 129 })
        );
    }

    #[test]
    fn seed_must_fit_modulus() {
        let engine = LcgEngine::new(LcgParams::new(3, 2, 24)).unwrap();
        assert!(engine.validate(&((1 << 24) - 1)).is_ok());
        assert_eq!(
            engine.validate(&(1 << 24)),
            Err(PrngError::SeedOutOfRange { seed: 1 << 24, m: 24 })
        );
    }

    #[test]
    fn matches_recurrence() {
        let engine = LcgEngine::new(LcgParams::new(3, 2, 24)).unwrap();
        let mut x = 5u128;
        for _ in 0..100 {
            let (next, raw) = engine.step(&x);
            assert_eq!(next, raw);
            assert_eq!(next, (3 * x + 2) % (1 << 24));
            x = next;
        }
    }

    #[test]
    fn wraps_at_full_width() {
        let engine = LcgEngine::new(LcgParams::new(u128::MAX, 1, 128)).unwrap();
        assert_eq!(engine.max_state(), u128::MAX);
        // (2^128 - 1) * 2 + 1 mod 2^128 == 2^128 - 1
        let (next, _) = engine.step(&2);
        assert_eq!(next, u128::MAX);
    }

    #[test]
    fn wide_multiplier_beyond_u64() {
        // a * x overflows 64 bits but stays exact modulo 2^80
        let a = (1u128 << 70) + 3;
        let engine = LcgEngine::new(LcgParams::new(a, 7, 80)).unwrap();
        let x = 1u128 << 20;
        let expected = ((a % (1 << 80)) * x + 7) % (1 << 80);
        assert_eq!(engine.step(&x).1, expected);
    }
}
