use core::fmt::Debug;

/// Stable handle for an agent (or any other world entity a decision node may reference).
///
/// Agents are evaluated in `stable_id` order, and the id seeds per-agent random streams, so it
/// must not change during the agent's lifetime. `Default` is the "no entity" value returned by a
/// plain blackboard read of a slot that was never written.
pub trait AgentId: Copy + Ord + Eq + Debug + Default + 'static {
    fn stable_id(self) -> u64;
}

impl AgentId for u64 {
    fn stable_id(self) -> u64 {
        self
    }
}

impl AgentId for u32 {
    fn stable_id(self) -> u64 {
        self as u64
    }
}
