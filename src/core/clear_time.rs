//! Clear-time draws.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform source of clear times in `[min, max)` seconds.
///
/// When `min >= max` every draw returns `min`. The generator sits behind its
/// own short-lived lock; it is never held together with any other lock.
pub struct ClearTimeSource {
    min: u32,
    max: u32,
    rng: Mutex<StdRng>,
}

impl ClearTimeSource {
    /// Source seeded from the operating system.
    #[must_use]
    pub fn new(min: u32, max: u32) -> Self {
        Self::with_rng(min, max, StdRng::from_os_rng())
    }

    /// Deterministic source for reproducible runs.
    #[must_use]
    pub fn seeded(min: u32, max: u32, seed: u64) -> Self {
        Self::with_rng(min, max, StdRng::seed_from_u64(seed))
    }

    fn with_rng(min: u32, max: u32, rng: StdRng) -> Self {
        Self {
            min,
            max,
            rng: Mutex::new(rng),
        }
    }

    /// Draw the next clear time.
    pub fn draw(&self) -> u32 {
        if self.min >= self.max {
            return self.min;
        }
        self.rng.lock().random_range(self.min..self.max)
    }

    /// Lower bound (inclusive).
    #[must_use]
    pub const fn min(&self) -> u32 {
        self.min
    }

    /// Upper bound (exclusive).
    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draws_stay_in_range() {
        let source = ClearTimeSource::seeded(5, 15, 42);
        for _ in 0..1000 {
            let t = source.draw();
            assert!((5..15).contains(&t), "draw {t} out of range");
        }
    }

    #[test]
    fn test_degenerate_range_returns_min() {
        let source = ClearTimeSource::new(4, 4);
        assert_eq!(source.draw(), 4);
        let inverted = ClearTimeSource::new(9, 3);
        assert_eq!(inverted.draw(), 9);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = ClearTimeSource::seeded(1, 15, 7);
        let b = ClearTimeSource::seeded(1, 15, 7);
        let left: Vec<_> = (0..32).map(|_| a.draw()).collect();
        let right: Vec<_> = (0..32).map(|_| b.draw()).collect();
        assert_eq!(left, right);
    }
}
