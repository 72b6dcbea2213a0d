//! Deterministic LCG and LFSR sequences with first-repeat detection.
//!
//! ```
//! use prng_period::{construct_generator, run, GeneratorConfig, LcgParams};
//!
//! let mut prng = construct_generator(GeneratorConfig::Lcg {
//!     params: LcgParams::new(3, 2, 24),
//!     seed: 5,
//! })
//! .unwrap();
//! let result = run(&mut prng, 1000, false, Some(2)).unwrap();
//! assert_eq!(result.len(), 1000);
//! assert!(result.sequence.iter().all(|&v| v < 2));
//! ```

pub mod configs;
pub mod engines;
pub mod runner;

pub use engines::lcg::{LcgEngine, LcgParams};
pub use engines::lfsr::{Combine, Feedback, LfsrEngine, Register};
pub use engines::{construct_generator, Engine, Generator, GeneratorConfig, Prng, PrngError, Source};
pub use runner::{project, run, Cycle, RunResult};
