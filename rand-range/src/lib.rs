use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

mod dice;

pub use dice::Dice;

/// A source of uniformly distributed integers over an inclusive range.
///
/// Every random decision made during generation goes through this trait, so
/// callers can substitute a deterministic source in tests.
pub trait RandomRange {
    fn rand_range(&mut self, min: u32, max: u32) -> u32;
}

impl<R: Rng> RandomRange for R {
    fn rand_range(&mut self, min: u32, max: u32) -> u32 {
        self.gen_range(min..=max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandRange {
    pub min: u32,
    pub max: u32,
}

impl RandRange {
    pub const PERCENT: Self = Self { min: 1, max: 100 };

    pub fn new(min: u32, max: u32) -> Self {
        assert!(min <= max, "empty range: {}..={}", min, max);
        Self { min, max }
    }

    pub fn choose<R: RandomRange>(&self, rng: &mut R) -> u32 {
        rng.rand_range(self.min, self.max)
    }
}

/// Returns true with probability `percent`/100.
pub fn roll_percent<R: RandomRange>(rng: &mut R, percent: u32) -> bool {
    RandRange::PERCENT.choose(rng) <= percent
}

/// Replays a fixed sequence of values, then yields the minimum of each
/// requested range forever.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    values: VecDeque<u32>,
    draws: usize,
}

impl Scripted {
    pub fn new<I: IntoIterator<Item = u32>>(values: I) -> Self {
        Self {
            values: values.into_iter().collect(),
            draws: 0,
        }
    }

    pub fn always_min() -> Self {
        Self::default()
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomRange for Scripted {
    fn rand_range(&mut self, min: u32, max: u32) -> u32 {
        self.draws += 1;
        match self.values.pop_front() {
            Some(value) => {
                assert!(
                    min <= value && value <= max,
                    "scripted value {} (draw {}) outside {}..={}",
                    value,
                    self.draws,
                    min,
                    max
                );
                value
            }
            None => min,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand_isaac::Isaac64Rng;

    #[test]
    fn rng_stays_in_inclusive_range() {
        let mut rng = Isaac64Rng::seed_from_u64(0);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..1000 {
            let value = rng.rand_range(3, 6);
            assert!((3..=6).contains(&value));
            seen_min |= value == 3;
            seen_max |= value == 6;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn degenerate_range() {
        let mut rng = Isaac64Rng::seed_from_u64(1);
        assert_eq!(rng.rand_range(7, 7), 7);
    }

    #[test]
    fn scripted_replays_then_falls_back_to_min() {
        let mut scripted = Scripted::new(vec![4, 0]);
        assert_eq!(scripted.rand_range(0, 5), 4);
        assert_eq!(scripted.rand_range(0, 5), 0);
        assert_eq!(scripted.remaining(), 0);
        assert_eq!(scripted.rand_range(2, 9), 2);
        assert_eq!(scripted.draws(), 3);
    }

    #[test]
    #[should_panic]
    fn scripted_rejects_out_of_range_values() {
        let mut scripted = Scripted::new(vec![10]);
        scripted.rand_range(0, 5);
    }

    #[test]
    fn percent_rolls() {
        let mut scripted = Scripted::new(vec![50, 51, 100, 1]);
        assert!(roll_percent(&mut scripted, 50));
        assert!(!roll_percent(&mut scripted, 50));
        assert!(roll_percent(&mut scripted, 100));
        assert!(!roll_percent(&mut scripted, 0));
    }
}
