#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{rng, AgentId, SplitMix64};

/// Per-tick inputs shared by every agent evaluated during the tick.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TickContext {
    pub tick: u64,
    pub dt_seconds: f32,
    pub seed: u64,
}

impl TickContext {
    pub fn new(tick: u64, dt_seconds: f32, seed: u64) -> Self {
        Self {
            tick,
            dt_seconds,
            seed,
        }
    }

    /// Seconds of simulated time elapsed before this tick.
    pub fn elapsed_seconds(&self) -> f32 {
        self.tick as f32 * self.dt_seconds
    }

    /// Random stream for one agent on this tick. Distinct `stream` values give independent
    /// sequences, so separate nodes of the same agent should use separate streams.
    pub fn rng_for_agent<A: AgentId>(&self, agent: A, stream: u64) -> SplitMix64 {
        let seed = rng::derive_seed(self.seed, self.tick, agent.stable_id(), stream);
        SplitMix64::new(seed)
    }
}
