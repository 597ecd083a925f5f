//! Deterministic random sources.
//!
//! Decision nodes never touch process-wide RNG state; they draw from a generator derived from the
//! tick context (see [`crate::TickContext::rng_for_agent`]). Not cryptographic.

pub trait DeterministicRng {
    fn next_u64(&mut self) -> u64;

    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform float in `[0, 1)`.
    fn next_f32_unit(&mut self) -> f32 {
        // 24 bits of mantissa
        let x = self.next_u32() >> 8;
        (x as f32) / ((1u32 << 24) as f32)
    }

    /// Uniform integer in `[lo, hi)`. Returns `lo` for an empty range.
    fn range_u32(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi - lo) as u64;
        lo + ((self.next_u32() as u64 * span) >> 32) as u32
    }
}

/// SplitMix64: good seeding RNG and small deterministic generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl DeterministicRng for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        mix64(self.state)
    }
}

pub fn mix64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

pub fn derive_seed(global_seed: u64, tick: u64, agent_id: u64, stream: u64) -> u64 {
    let x = global_seed
        ^ mix64(tick.wrapping_add(0xD1B54A32D192ED03))
        ^ mix64(agent_id.wrapping_add(0x9E3779B97F4A7C15))
        ^ mix64(stream);
    mix64(x)
}
