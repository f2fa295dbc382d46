use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded source of randomness for one play session. The same seed and the
/// same direction inputs reproduce the same food placements.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        let left: Vec<i32> = (0..16).map(|_| a.random_range(0..28)).collect();
        let right: Vec<i32> = (0..16).map(|_| b.random_range(0..28)).collect();
        assert_eq!(left, right);
        assert_eq!(a.seed(), 7);
    }
}
