//! Label-seeded random generator with namespaced scopes
//!
//! Seeds are derived from text labels through a fixed 64-bit FNV-1a hash, so the
//! same label produces the same sequence on every platform and release. A scope
//! pushed with [`SeededRandom::push`] reseeds from the scope's full label path
//! and [`SeededRandom::pop`] restores the enclosing generator exactly where it
//! left off.

use crate::random::source::RandomSource;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Generator saved when a scope is pushed
#[derive(Debug, Clone)]
struct Scope {
    label: String,
    rng: StdRng,
}

/// Deterministic random source seeded from a label
#[derive(Debug, Clone)]
pub struct SeededRandom {
    label: String,
    rng: StdRng,
    scopes: Vec<Scope>,
}

impl SeededRandom {
    /// Create a generator seeded from `label`
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            rng: StdRng::seed_from_u64(label_seed(label)),
            scopes: Vec::new(),
        }
    }

    /// Create a generator from a numeric seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            label: seed.to_string(),
            rng: StdRng::seed_from_u64(seed),
            scopes: Vec::new(),
        }
    }

    /// Label of the current scope, including enclosing scopes
    pub const fn label(&self) -> &str {
        self.label.as_str()
    }

    /// Number of scopes currently pushed
    pub const fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Draw `true` with the given probability
    ///
    /// Probabilities outside `0.0..=1.0` are clamped; NaN never succeeds.
    pub fn chance(&mut self, probability: f64) -> bool {
        if probability.is_nan() || probability <= 0.0 {
            return false;
        }
        if probability >= 1.0 {
            return true;
        }
        self.rng.random_bool(probability)
    }

    /// Shuffle `items` in place
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Enter a named scope with its own deterministic sequence
    ///
    /// Without an explicit `seed` the scope is seeded from its label path, so
    /// the sequence inside does not depend on how many draws preceded it.
    pub fn push(&mut self, label: &str, seed: Option<&str>) {
        let scoped_label = format!("{}/{label}", self.label);
        let seed_value = seed.map_or_else(|| label_seed(&scoped_label), label_seed);

        let rng = std::mem::replace(&mut self.rng, StdRng::seed_from_u64(seed_value));
        let label = std::mem::replace(&mut self.label, scoped_label);
        self.scopes.push(Scope { label, rng });
    }

    /// Leave the innermost scope, returning its label
    ///
    /// Returns `None` and changes nothing when no scope is pushed.
    pub fn pop(&mut self) -> Option<String> {
        let scope = self.scopes.pop()?;
        self.rng = scope.rng;
        Some(std::mem::replace(&mut self.label, scope.label))
    }
}

impl RandomSource for SeededRandom {
    fn integer(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..=max)
    }
}

/// Stable 64-bit FNV-1a hash of a label
fn label_seed(label: &str) -> u64 {
    label.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}
