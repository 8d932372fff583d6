//! RNG module - uniform symbol generation
//!
//! Every new pattern step is an independent, uniform draw from the four-symbol
//! alphabet. Repeats are allowed and there is no bag or history.
//!
//! The generator is a seeded LCG so that a session can be replayed exactly
//! from its seed (tests, benchmarks, bug reports).

use crate::types::{Symbol, SYMBOL_COUNT};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by multiplication instead of `%`: the low bits of a power-of-two
    /// LCG have tiny periods (the lowest two bits cycle every 4 draws).
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Source of pattern symbols.
#[derive(Debug, Clone)]
pub struct SymbolSource {
    rng: SimpleRng,
    seed: u32,
}

impl SymbolSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// Draw one symbol uniformly at random.
    pub fn generate_symbol(&mut self) -> Symbol {
        Symbol::ALL[self.rng.next_range(SYMBOL_COUNT as u32) as usize]
    }

    /// Seed this source was created with.
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for SymbolSource {
    fn default() -> Self {
        Self::new(1)
    }
}
