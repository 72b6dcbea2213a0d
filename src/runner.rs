use std::collections::HashMap;

use crate::engines::{PrngError, Source};

/// Where the sequence re-entered a value it had already produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    /// Index of the first occurrence of the repeated raw value.
    pub start: usize,
    /// Distance between the first occurrence and the repeat.
    pub length: usize,
}

/// Output of one [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// Emitted values, projected when a modulus was given.
    pub sequence: Vec<u128>,
    /// Index of the first repeated raw value, or the number of values produced
    /// if nothing repeated.
    pub preperiod: usize,
    /// Set once a raw value repeats, whether or not the run stopped there.
    pub cycle: Option<Cycle>,
}

impl RunResult {
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn repeated(&self) -> bool {
        self.cycle.is_some()
    }

    /// `(index, value)` pairs, ready to be drawn as a scatter plot.
    pub fn points(&self) -> impl Iterator<Item = (usize, u128)> + '_ {
        self.sequence.iter().copied().enumerate()
    }
}

/// Reduce `raw` modulo `modulus`, or pass it through.
pub fn project(raw: u128, modulus: Option<u128>) -> u128 {
    match modulus {
        Some(m) => raw % m,
        None => raw,
    }
}

/// Drive `source` for up to `n` steps.
///
/// Repeats are detected on raw values; the modulus only affects what is
/// stored in the sequence. With `stop_on_repeat` the repeated value is not
/// emitted, so the sequence length equals the preperiod.
pub fn run<S: Source + ?Sized>(
    source: &mut S,
    n: usize,
    stop_on_repeat: bool,
    modulus: Option<u128>,
) -> Result<RunResult, PrngError> {
    if n == 0 {
        return Err(PrngError::ZeroSteps);
    }
    if modulus == Some(0) {
        return Err(PrngError::ZeroModulus);
    }
    log::debug!(
        "Running {} for {} steps (stop_on_repeat={}, modulus={:?})",
        source.kind(),
        n,
        stop_on_repeat,
        modulus
    );

    let mut visited: HashMap<u128, usize> = HashMap::new();
    let mut sequence = Vec::with_capacity(n);
    let mut cycle = None;

    for i in 0..n {
        let raw = source.next_raw();
        if let Some(&first) = visited.get(&raw) {
            if cycle.is_none() {
                log::debug!("{}: value {} at step {} first seen at {}", source.kind(), raw, i, first);
                cycle = Some(Cycle {
                    start: first,
                    length: i - first,
                });
            }
            if stop_on_repeat {
                break;
            }
        } else {
            visited.insert(raw, i);
        }
        sequence.push(project(raw, modulus));
    }

    let preperiod = match cycle {
        Some(c) => c.start + c.length,
        None => sequence.len(),
    };
    log::info!(
        "{}: period = {}, {} number(s) generated",
        source.kind(),
        preperiod,
        sequence.len()
    );

    Ok(RunResult {
        sequence,
        preperiod,
        cycle,
    })
}
