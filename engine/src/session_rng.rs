use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness for everything the engine decides by chance.
///
/// The session is generic over this so tests can script exact draws.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn random_unit(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn random_index(&mut self, len: usize) -> usize;

    fn random_bool(&mut self) -> bool;
}

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
}

impl RandomSource for SessionRng {
    fn random_unit(&mut self) -> f64 {
        self.rng.random()
    }

    fn random_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn random_bool(&mut self) -> bool {
        self.rng.random()
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use std::collections::VecDeque;

    use super::RandomSource;

    /// Replays queued draws. An exhausted queue yields `0.0`, `0` and `true`.
    #[derive(Default)]
    pub(crate) struct ScriptedRng {
        units: VecDeque<f64>,
        indices: VecDeque<usize>,
        bools: VecDeque<bool>,
    }

    impl ScriptedRng {
        pub(crate) fn with_units(units: &[f64]) -> Self {
            Self {
                units: units.iter().copied().collect(),
                ..Self::default()
            }
        }

        pub(crate) fn indices(mut self, indices: &[usize]) -> Self {
            self.indices = indices.iter().copied().collect();
            self
        }

        pub(crate) fn bools(mut self, bools: &[bool]) -> Self {
            self.bools = bools.iter().copied().collect();
            self
        }
    }

    impl RandomSource for ScriptedRng {
        fn random_unit(&mut self) -> f64 {
            self.units.pop_front().unwrap_or(0.0)
        }

        fn random_index(&mut self, len: usize) -> usize {
            self.indices.pop_front().unwrap_or(0) % len
        }

        fn random_bool(&mut self) -> bool {
            self.bools.pop_front().unwrap_or(true)
        }
    }
}
