use ai_core::{TickContext, WorldMut};

use crate::StateMachine;

/// A unit of agent behavior, acting once per tick while it is the machine's current state.
pub trait State<W>: 'static
where
    W: WorldMut + 'static,
{
    fn enter(&mut self, _ctx: &TickContext, _agent: W::Agent, _world: &mut W) {}

    fn exit(&mut self, _ctx: &TickContext, _agent: W::Agent, _world: &mut W) {}

    fn act(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W);
}

/// A state whose behavior is an entire nested machine.
///
/// The nested machine keeps its current state across exit/enter of the wrapping state.
pub struct NestedState<W>
where
    W: WorldMut + 'static,
{
    pub machine: StateMachine<W>,
}

impl<W> NestedState<W>
where
    W: WorldMut + 'static,
{
    pub fn new(machine: StateMachine<W>) -> Self {
        Self { machine }
    }
}

impl<W> State<W> for NestedState<W>
where
    W: WorldMut + 'static,
{
    fn act(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) {
        self.machine.act(ctx, agent, world);
    }
}
