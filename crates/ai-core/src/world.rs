use crate::AgentId;

/// Read-only world access.
///
/// The core crate does not prescribe which queries a world must expose; the grid crate defines
/// the position/team/hitpoint queries the decision catalogs need as extension traits.
pub trait WorldView {
    type Agent: AgentId;
}

/// Write access to the agent's own output cells (action slot, color, hitpoints).
pub trait WorldMut: WorldView {}
