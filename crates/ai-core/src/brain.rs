use crate::{AgentId, Blackboard, Policy, TickContext, WorldMut};

/// One agent's decision state: its blackboard and its single strategy.
pub struct Brain<W>
where
    W: WorldMut + 'static,
{
    pub agent: W::Agent,
    pub blackboard: Blackboard,
    pub policy: Box<dyn Policy<W>>,
}

impl<W> Brain<W>
where
    W: WorldMut + 'static,
{
    pub fn new(agent: W::Agent, policy: Box<dyn Policy<W>>) -> Self {
        Self::with_blackboard(agent, Blackboard::new(), policy)
    }

    /// Use a blackboard that nodes already registered their slots in while the strategy was built.
    pub fn with_blackboard(
        agent: W::Agent,
        blackboard: Blackboard,
        policy: Box<dyn Policy<W>>,
    ) -> Self {
        Self {
            agent,
            blackboard,
            policy,
        }
    }

    pub fn tick(&mut self, ctx: &TickContext, world: &mut W) {
        self.policy.tick(ctx, self.agent, world, &mut self.blackboard);
    }
}

/// Evaluate every brain once, sequentially, in stable agent order.
pub fn tick_brains<W>(ctx: &TickContext, world: &mut W, brains: &mut [Brain<W>])
where
    W: WorldMut + 'static,
{
    brains.sort_by_key(|b| b.agent.stable_id());
    tracing::trace!(tick = ctx.tick, agents = brains.len(), "evaluating brains");
    for brain in brains.iter_mut() {
        brain.tick(ctx, world);
    }
}
