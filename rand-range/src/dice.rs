use crate::{RandRange, RandomRange};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dice {
    range: RandRange,
    history: Vec<u32>,
}

impl Dice {
    pub fn new(min: u32, max: u32) -> Self {
        Self {
            range: RandRange::new(min, max),
            history: Vec::new(),
        }
    }

    pub fn d6() -> Self {
        Self::new(1, 6)
    }

    pub fn roll<R: RandomRange>(&mut self, rng: &mut R) -> u32 {
        let n = self.range.choose(rng);
        self.history.push(n);
        n
    }

    /// Every roll so far, oldest first.
    pub fn history(&self) -> &[u32] {
        &self.history
    }

    pub fn last(&self) -> Option<u32> {
        self.history.last().cloned()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Scripted;
    use rand::SeedableRng;
    use rand_isaac::Isaac64Rng;

    #[test]
    fn rolls_are_recorded_in_order() {
        let mut dice = Dice::d6();
        let mut rng = Scripted::new(vec![3, 6, 1]);
        assert_eq!(dice.roll(&mut rng), 3);
        assert_eq!(dice.roll(&mut rng), 6);
        assert_eq!(dice.roll(&mut rng), 1);
        assert_eq!(dice.history(), &[3, 6, 1]);
        assert_eq!(dice.last(), Some(1));
    }

    #[test]
    fn d6_stays_on_the_die() {
        let mut dice = Dice::d6();
        let mut rng = Isaac64Rng::seed_from_u64(42);
        for _ in 0..100 {
            let n = dice.roll(&mut rng);
            assert!((1..=6).contains(&n));
        }
        assert_eq!(dice.history().len(), 100);
    }
}
