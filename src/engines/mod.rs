use std::fmt::Debug;
use thiserror::Error;

pub mod lcg;
pub mod lfsr;

use lcg::{LcgEngine, LcgParams};
use lfsr::{Feedback, LfsrEngine, Register};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrngError {
    /// LCG modulus exponent outside `1..=128`.
    #[error("Invalid LCG modulus exponent m={m}: expected 1..={max}", max = crate::configs::MAX_LCG_EXPONENT)]
    InvalidExponent { m: u32 },

    /// LCG seed does not fit in `[0, 2^m)`.
    #[error("LCG seed {seed} out of range for modulus 2^{m}")]
    SeedOutOfRange { seed: u128, m: u32 },

    #[error("LFSR register must hold at least one bit")]
    EmptyRegister,

    #[error("LFSR register of {len} bits exceeds the {max}-bit limit", max = crate::configs::MAX_REGISTER_LEN)]
    RegisterTooLong { len: usize },

    /// A register cell that is neither 0 nor 1.
    #[error("Invalid register bit {value} at index {index}")]
    InvalidBit { index: usize, value: u8 },

    /// Seed register width differs from the width the taps were checked against.
    #[error("LFSR register has {found} bits, engine expects {expected}")]
    RegisterLengthMismatch { expected: usize, found: usize },

    #[error("LFSR feedback needs at least one tap")]
    NoTaps,

    /// Feedback references a bit the register does not have.
    #[error("Tap index {tap} out of range for a {len}-bit register")]
    TapOutOfRange { tap: usize, len: usize },

    #[error("Step count must be positive")]
    ZeroSteps,

    #[error("Projection modulus must be positive")]
    ZeroModulus,
}

impl PrngError {
    /// Bad generator parameters, reported at construction.
    pub fn is_configuration(&self) -> bool {
        !self.is_invalid_argument()
    }

    /// Bad run parameters, reported at run entry.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PrngError::ZeroSteps | PrngError::ZeroModulus)
    }
}

/// A recurrence rule. Engines are immutable; the state is threaded through
/// `step` by the owning [`Generator`].
pub trait Engine {
    type State: Clone + Debug;

    /// Short name of the generator family (e.g., "LCG")
    fn kind(&self) -> &'static str;

    /// Check that `state` is a legal state for this engine.
    fn validate(&self, state: &Self::State) -> Result<(), PrngError>;

    /// Advance one step, returning the new state and the raw emitted value.
    fn step(&self, state: &Self::State) -> (Self::State, u128);
}

/// Anything that yields raw values one at a time.
pub trait Source {
    fn kind(&self) -> &'static str;

    fn next_raw(&mut self) -> u128;
}

/// An engine bound to its current state and the seed it started from.
#[derive(Debug, Clone)]
pub struct Generator<E: Engine> {
    engine: E,
    seed: E::State,
    state: E::State,
}

impl<E: Engine> Generator<E> {
    pub fn new(engine: E, seed: E::State) -> Result<Self, PrngError> {
        engine.validate(&seed)?;
        log::debug!("Constructed {} generator with seed {:?}", engine.kind(), seed);
        Ok(Self {
            engine,
            state: seed.clone(),
            seed,
        })
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn state(&self) -> &E::State {
        &self.state
    }

    /// Restore the seed the generator was constructed with.
    pub fn reset(&mut self) {
        self.state = self.seed.clone();
    }

    /// Replace both the seed and the current state.
    pub fn reseed(&mut self, seed: E::State) -> Result<(), PrngError> {
        self.engine.validate(&seed)?;
        self.state = seed.clone();
        self.seed = seed;
        Ok(())
    }
}

impl<E: Engine> Source for Generator<E> {
    fn kind(&self) -> &'static str {
        self.engine.kind()
    }

    fn next_raw(&mut self) -> u128 {
        let (state, raw) = self.engine.step(&self.state);
        self.state = state;
        raw
    }
}

/// Parameters for [`construct_generator`].
#[derive(Debug, Clone)]
pub enum GeneratorConfig {
    Lcg { params: LcgParams, seed: u128 },
    Lfsr { register: Vec<u8>, feedback: Feedback },
}

/// A generator of either family, chosen at runtime.
#[derive(Debug, Clone)]
pub enum Prng {
    Lcg(Generator<LcgEngine>),
    Lfsr(Generator<LfsrEngine>),
}

impl Prng {
    pub fn reset(&mut self) {
        match self {
            Prng::Lcg(g) => g.reset(),
            Prng::Lfsr(g) => g.reset(),
        }
    }
}

impl Source for Prng {
    fn kind(&self) -> &'static str {
        match self {
            Prng::Lcg(g) => g.kind(),
            Prng::Lfsr(g) => g.kind(),
        }
    }

    fn next_raw(&mut self) -> u128 {
        match self {
            Prng::Lcg(g) => g.next_raw(),
            Prng::Lfsr(g) => g.next_raw(),
        }
    }
}

/// Build a generator, validating every parameter before any value is produced.
pub fn construct_generator(config: GeneratorConfig) -> Result<Prng, PrngError> {
    match config {
        GeneratorConfig::Lcg { params, seed } => {
            let engine = LcgEngine::new(params)?;
            Ok(Prng::Lcg(Generator::new(engine, seed)?))
        }
        GeneratorConfig::Lfsr { register, feedback } => {
            let register = Register::from_bits(&register)?;
            let engine = LfsrEngine::new(register.len(), feedback)?;
            Ok(Prng::Lfsr(Generator::new(engine, register)?))
        }
    }
}
