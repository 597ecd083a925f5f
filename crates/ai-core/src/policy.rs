use crate::{Blackboard, TickContext, WorldMut};

/// A per-agent decision strategy, evaluated exactly once per simulation tick.
///
/// Finite-state machines and behavior trees both implement this; an agent owns exactly one.
pub trait Policy<W>: 'static
where
    W: WorldMut + 'static,
{
    fn tick(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    );
}
