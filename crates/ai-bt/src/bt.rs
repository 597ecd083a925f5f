use ai_core::{Blackboard, TickContext, WorldMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BtStatus {
    Running,
    Success,
    Failure,
}

/// Out-of-band notifications delivered through [`BtNode::react`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BtEvent {
    #[default]
    Default,
    Danger,
    Safe,
}

pub trait BtNode<W>: 'static
where
    W: WorldMut + 'static,
{
    fn update(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus;

    fn react(
        &mut self,
        _ctx: &TickContext,
        _agent: W::Agent,
        _world: &mut W,
        _blackboard: &mut Blackboard,
        _event: BtEvent,
    ) {
    }
}
