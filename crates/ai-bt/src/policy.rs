use ai_core::{Blackboard, Policy, TickContext, WorldMut};

use crate::bt::{BtEvent, BtNode, BtStatus};

/// A whole tree driven from its root once per tick.
pub struct BehaviorTree<W>
where
    W: WorldMut + 'static,
{
    root: Box<dyn BtNode<W>>,
    last: BtStatus,
}

impl<W> BehaviorTree<W>
where
    W: WorldMut + 'static,
{
    pub fn new(root: Box<dyn BtNode<W>>) -> Self {
        Self {
            root,
            last: BtStatus::Running,
        }
    }

    pub fn update(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        self.last = self.root.update(ctx, agent, world, blackboard);
        self.last
    }

    pub fn react(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
        event: BtEvent,
    ) {
        self.root.react(ctx, agent, world, blackboard, event);
    }

    /// Status of the most recent update; informational only.
    pub fn last_status(&self) -> BtStatus {
        self.last
    }
}

impl<W> Policy<W> for BehaviorTree<W>
where
    W: WorldMut + 'static,
{
    fn tick(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) {
        self.update(ctx, agent, world, blackboard);
    }
}
