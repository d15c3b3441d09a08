use std::time::Duration;

use serde::{Deserialize, Serialize};
use tictactoe_engine::RandomSource;
use tictactoe_engine::config::Validate;

pub const MAX_THINKING_DELAY_MS: u64 = 10_000;

/// How long the opponent pretends to think before replying.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PacingConfig {
    /// One of these is picked uniformly per reply. Empty disables the pause.
    pub thinking_delays_ms: Vec<u64>,
}

impl PacingConfig {
    pub fn disabled() -> Self {
        Self {
            thinking_delays_ms: Vec::new(),
        }
    }

    /// No pause when the reply is forced (a single open cell).
    pub fn thinking_delay(
        &self,
        candidate_count: usize,
        rng: &mut impl RandomSource,
    ) -> Option<Duration> {
        if candidate_count <= 1 || self.thinking_delays_ms.is_empty() {
            return None;
        }
        let pick = rng.random_index(self.thinking_delays_ms.len());
        Some(Duration::from_millis(self.thinking_delays_ms[pick]))
    }
}

impl Validate for PacingConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(delay) = self
            .thinking_delays_ms
            .iter()
            .find(|&&delay| delay > MAX_THINKING_DELAY_MS)
        {
            return Err(format!(
                "Thinking delay {} ms exceeds the maximum of {} ms",
                delay, MAX_THINKING_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            thinking_delays_ms: vec![200, 1000, 2000],
        }
    }
}
