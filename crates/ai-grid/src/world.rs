use ai_core::{WorldMut, WorldView};

use crate::{AgentAction, Color, Position, Team};

/// Read access to the components decision nodes query.
///
/// Every accessor returns `None` (or `false`) for entities that no longer exist.
pub trait GridWorldView: WorldView {
    fn is_alive(&self, entity: Self::Agent) -> bool;
    fn position(&self, entity: Self::Agent) -> Option<Position>;
    fn team(&self, entity: Self::Agent) -> Option<Team>;
    fn hitpoints(&self, entity: Self::Agent) -> Option<f32>;
    /// Anchor point patrol behaviors return to.
    fn home(&self, entity: Self::Agent) -> Option<Position>;
    fn is_base(&self, entity: Self::Agent) -> bool;
    fn action(&self, entity: Self::Agent) -> Option<AgentAction>;

    /// All living entities, in a deterministic order.
    fn entities(&self) -> impl Iterator<Item = Self::Agent> + '_;
}

/// Write access to an agent's own output cells.
pub trait GridWorldMut: WorldMut + GridWorldView {
    fn set_action(&mut self, agent: Self::Agent, action: AgentAction);
    fn set_color(&mut self, agent: Self::Agent, color: Color);
    fn set_hitpoints(&mut self, agent: Self::Agent, hitpoints: f32);
}
