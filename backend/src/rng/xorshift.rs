//! xorshift64* random number generator
//!
//! Same seed → same sequence. Together with an injected clock this makes a
//! whole workflow run reproducible, down to the confidence of every stage.

use serde::{Deserialize, Serialize};

/// Seeded xorshift64* generator
///
/// # Example
/// ```
/// use subrogation_workflow_core::RngManager;
///
/// let mut rng = RngManager::new(42);
/// let confidence = rng.range_inclusive(80, 99);
/// assert!((80..=99).contains(&confidence));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    state: u64,
}

impl RngManager {
    /// Create a generator from `seed`
    ///
    /// xorshift has a fixed point at zero, so a zero seed is replaced by 1.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Next raw 64-bit value
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// Uniform integer in `[min, max]`
    ///
    /// # Panics
    /// Panics if `min > max`.
    pub fn range_inclusive(&mut self, min: u64, max: u64) -> u64 {
        assert!(min <= max, "min must not exceed max");
        let span = max - min;
        if span == u64::MAX {
            return self.next_u64();
        }
        min + self.next_u64() % (span + 1)
    }

    /// Uniform float in `[0.0, 1.0)`
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// `true` with probability `p`
    ///
    /// `p <= 0.0` never draws, so callers with failures disabled keep the
    /// exact same sequence as if this method did not exist.
    pub fn chance(&mut self, p: f64) -> bool {
        if p <= 0.0 {
            return false;
        }
        if p >= 1.0 {
            return true;
        }
        self.next_f64() < p
    }

    /// Uniformly chosen element, `None` for an empty slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.range_inclusive(0, items.len() as u64 - 1) as usize;
        items.get(idx)
    }

    /// Current internal state
    pub fn state(&self) -> u64 {
        self.state
    }
}
