use serde::{Deserialize, Serialize};

use super::types::FirstPlayerMode;
use crate::SessionRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub first_player: FirstPlayerMode,
    /// Fixed seed for reproducible games; a fresh one is drawn when absent.
    pub seed: Option<u64>,
}

impl SessionSettings {
    pub fn create_rng(&self) -> SessionRng {
        match self.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        }
    }
}
