use ai_core::{Blackboard, Policy, TickContext, WorldMut};

use crate::{FsmError, State, Transition, TransitionPredicate};

struct Edge<W>
where
    W: WorldMut + 'static,
{
    transition: Transition<W>,
    to: usize,
}

/// Flat state machine; states are indexed by insertion order and state 0 starts current.
pub struct StateMachine<W>
where
    W: WorldMut + 'static,
{
    current: usize,
    states: Vec<Box<dyn State<W>>>,
    edges: Vec<Vec<Edge<W>>>,
}

impl<W> Default for StateMachine<W>
where
    W: WorldMut + 'static,
{
    fn default() -> Self {
        Self {
            current: 0,
            states: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<W> StateMachine<W>
where
    W: WorldMut + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a state and return its stable index.
    pub fn add_state(&mut self, state: impl State<W>) -> usize {
        self.add_boxed_state(Box::new(state))
    }

    pub fn add_boxed_state(&mut self, state: Box<dyn State<W>>) -> usize {
        self.states.push(state);
        self.edges.push(Vec::new());
        self.states.len() - 1
    }

    /// Append an edge to `from`'s edge list.
    ///
    /// # Panics
    /// If either index does not name an added state.
    pub fn add_transition(
        &mut self,
        predicate: impl TransitionPredicate<W>,
        from: usize,
        to: usize,
    ) {
        if let Err(err) = self.try_add_transition(predicate, from, to) {
            panic!("invalid transition {from} -> {to}: {err}");
        }
    }

    pub fn try_add_transition(
        &mut self,
        predicate: impl TransitionPredicate<W>,
        from: usize,
        to: usize,
    ) -> Result<(), FsmError> {
        let len = self.states.len();
        for index in [from, to] {
            if index >= len {
                return Err(FsmError::StateOutOfRange { index, len });
            }
        }
        self.edges[from].push(Edge {
            transition: Transition::new(predicate),
            to,
        });
        Ok(())
    }

    pub fn current_state(&self) -> usize {
        self.current
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self, from: usize) -> usize {
        self.edges.get(from).map_or(0, Vec::len)
    }

    /// Run the current state, then take at most one outgoing edge.
    ///
    /// Edges are polled in insertion order with `ctx.dt_seconds`; polling stops at the first
    /// available edge, whose clock is reset before the exit/enter hooks run.
    pub fn act(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) {
        let Some(state) = self.states.get_mut(self.current) else {
            return;
        };
        state.act(ctx, agent, world);

        let mut next = None;
        for edge in self.edges[self.current].iter_mut() {
            if edge.transition.poll(ctx.dt_seconds, agent, &*world) {
                edge.transition.reset();
                next = Some(edge.to);
                break;
            }
        }

        let Some(next) = next else {
            return;
        };

        tracing::debug!(?agent, from = self.current, to = next, tick = ctx.tick, "fsm transition");
        self.states[self.current].exit(ctx, agent, world);
        self.current = next;
        self.states[self.current].enter(ctx, agent, world);
    }
}

impl<W> Policy<W> for StateMachine<W>
where
    W: WorldMut + 'static,
{
    fn tick(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        _blackboard: &mut Blackboard,
    ) {
        self.act(ctx, agent, world);
    }
}
