use ai_core::{Blackboard, TickContext, WorldMut};

use crate::bt::{BtEvent, BtNode, BtStatus};
use crate::BtError;

fn forward_event<W>(
    children: &mut [Box<dyn BtNode<W>>],
    active: Option<usize>,
    ctx: &TickContext,
    agent: W::Agent,
    world: &mut W,
    blackboard: &mut Blackboard,
    event: BtEvent,
) where
    W: WorldMut + 'static,
{
    if let Some(child) = active.and_then(|i| children.get_mut(i)) {
        child.react(ctx, agent, world, blackboard, event);
    }
}

/// Runs children in order until one does not succeed.
///
/// Evaluation always starts from the first child; a `Running` child makes the whole sequence
/// report `Running` and the sequence is re-entered from the top next tick.
pub struct Sequence<W>
where
    W: WorldMut + 'static,
{
    children: Vec<Box<dyn BtNode<W>>>,
    active: Option<usize>,
}

impl<W> Sequence<W>
where
    W: WorldMut + 'static,
{
    pub fn new(children: Vec<Box<dyn BtNode<W>>>) -> Self {
        Self {
            children,
            active: None,
        }
    }
}

impl<W> BtNode<W> for Sequence<W>
where
    W: WorldMut + 'static,
{
    fn update(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        for (i, child) in self.children.iter_mut().enumerate() {
            let status = child.update(ctx, agent, world, blackboard);
            self.active = (status != BtStatus::Failure).then_some(i);
            if status != BtStatus::Success {
                return status;
            }
        }
        BtStatus::Success
    }

    fn react(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
        event: BtEvent,
    ) {
        forward_event(&mut self.children, self.active, ctx, agent, world, blackboard, event);
    }
}

/// Runs children in order until one does not fail (a.k.a. fallback).
pub struct Selector<W>
where
    W: WorldMut + 'static,
{
    children: Vec<Box<dyn BtNode<W>>>,
    active: Option<usize>,
}

impl<W> Selector<W>
where
    W: WorldMut + 'static,
{
    pub fn new(children: Vec<Box<dyn BtNode<W>>>) -> Self {
        Self {
            children,
            active: None,
        }
    }
}

impl<W> BtNode<W> for Selector<W>
where
    W: WorldMut + 'static,
{
    fn update(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        for (i, child) in self.children.iter_mut().enumerate() {
            let status = child.update(ctx, agent, world, blackboard);
            if status != BtStatus::Failure {
                self.active = Some(i);
                return status;
            }
        }
        self.active = None;
        BtStatus::Failure
    }

    fn react(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
        event: BtEvent,
    ) {
        forward_event(&mut self.children, self.active, ctx, agent, world, blackboard, event);
    }
}

/// Ticks every child each update.
///
/// Any failure aborts immediately with `Failure`. Otherwise the node is `Running` while at least
/// one child is still running, and `Success` once every child has succeeded.
pub struct Parallel<W>
where
    W: WorldMut + 'static,
{
    children: Vec<Box<dyn BtNode<W>>>,
    active: Option<usize>,
}

impl<W> Parallel<W>
where
    W: WorldMut + 'static,
{
    pub fn new(children: Vec<Box<dyn BtNode<W>>>) -> Self {
        Self {
            children,
            active: None,
        }
    }
}

impl<W> BtNode<W> for Parallel<W>
where
    W: WorldMut + 'static,
{
    fn update(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        let mut running = false;
        for (i, child) in self.children.iter_mut().enumerate() {
            match child.update(ctx, agent, world, blackboard) {
                BtStatus::Failure => {
                    self.active = None;
                    return BtStatus::Failure;
                }
                BtStatus::Running => running = true,
                BtStatus::Success => {}
            }
            self.active = Some(i);
        }
        if running {
            BtStatus::Running
        } else {
            BtStatus::Success
        }
    }

    fn react(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
        event: BtEvent,
    ) {
        forward_event(&mut self.children, self.active, ctx, agent, world, blackboard, event);
    }
}

/// Binary logical or. The second child is skipped when the first succeeds.
pub struct Or<W>
where
    W: WorldMut + 'static,
{
    children: Vec<Box<dyn BtNode<W>>>,
    active: Option<usize>,
}

impl<W> Or<W>
where
    W: WorldMut + 'static,
{
    pub fn new(lhs: Box<dyn BtNode<W>>, rhs: Box<dyn BtNode<W>>) -> Self {
        Self {
            children: vec![lhs, rhs],
            active: None,
        }
    }

    pub fn try_from_children(children: Vec<Box<dyn BtNode<W>>>) -> Result<Self, BtError> {
        if children.len() != 2 {
            return Err(BtError::Arity {
                node: "or",
                expected: 2,
                got: children.len(),
            });
        }
        Ok(Self {
            children,
            active: None,
        })
    }
}

impl<W> BtNode<W> for Or<W>
where
    W: WorldMut + 'static,
{
    fn update(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        let first = self.children[0].update(ctx, agent, world, blackboard);
        self.active = Some(0);
        if first == BtStatus::Success {
            return BtStatus::Success;
        }

        let second = self.children[1].update(ctx, agent, world, blackboard);
        self.active = Some(1);
        match (first, second) {
            (_, BtStatus::Success) => BtStatus::Success,
            (BtStatus::Running, _) | (_, BtStatus::Running) => BtStatus::Running,
            _ => BtStatus::Failure,
        }
    }

    fn react(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
        event: BtEvent,
    ) {
        forward_event(&mut self.children, self.active, ctx, agent, world, blackboard, event);
    }
}

/// Logical not: `Success` becomes `Failure`, anything else (including `Running`) becomes
/// `Success`.
pub struct Inverse<W>
where
    W: WorldMut + 'static,
{
    child: Box<dyn BtNode<W>>,
    active: bool,
}

impl<W> Inverse<W>
where
    W: WorldMut + 'static,
{
    pub fn new(child: Box<dyn BtNode<W>>) -> Self {
        Self {
            child,
            active: false,
        }
    }

    pub fn try_from_children(mut children: Vec<Box<dyn BtNode<W>>>) -> Result<Self, BtError> {
        let got = children.len();
        match children.pop() {
            Some(child) if got == 1 => Ok(Self::new(child)),
            _ => Err(BtError::Arity {
                node: "not",
                expected: 1,
                got,
            }),
        }
    }
}

impl<W> BtNode<W> for Inverse<W>
where
    W: WorldMut + 'static,
{
    fn update(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        let status = self.child.update(ctx, agent, world, blackboard);
        self.active = status != BtStatus::Success;
        if status == BtStatus::Success {
            BtStatus::Failure
        } else {
            BtStatus::Success
        }
    }

    fn react(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
        event: BtEvent,
    ) {
        if self.active {
            self.child.react(ctx, agent, world, blackboard, event);
        }
    }
}

/// Closure-backed check: `Success` when it returns `true`, otherwise `Failure`.
pub struct Condition<F> {
    cond: F,
}

impl<F> Condition<F> {
    pub fn new(cond: F) -> Self {
        Self { cond }
    }
}

impl<F, W> BtNode<W> for Condition<F>
where
    F: FnMut(&TickContext, W::Agent, &W, &Blackboard) -> bool + 'static,
    W: WorldMut + 'static,
{
    fn update(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        if (self.cond)(ctx, agent, &*world, &*blackboard) {
            BtStatus::Success
        } else {
            BtStatus::Failure
        }
    }
}

pub fn sequence<W>(nodes: Vec<Box<dyn BtNode<W>>>) -> Box<dyn BtNode<W>>
where
    W: WorldMut + 'static,
{
    Box::new(Sequence::new(nodes))
}

pub fn selector<W>(nodes: Vec<Box<dyn BtNode<W>>>) -> Box<dyn BtNode<W>>
where
    W: WorldMut + 'static,
{
    Box::new(Selector::new(nodes))
}

/// Alias of [`selector`].
pub fn fallback<W>(nodes: Vec<Box<dyn BtNode<W>>>) -> Box<dyn BtNode<W>>
where
    W: WorldMut + 'static,
{
    selector(nodes)
}

pub fn parallel<W>(nodes: Vec<Box<dyn BtNode<W>>>) -> Box<dyn BtNode<W>>
where
    W: WorldMut + 'static,
{
    Box::new(Parallel::new(nodes))
}

pub fn logic_or<W>(lhs: Box<dyn BtNode<W>>, rhs: Box<dyn BtNode<W>>) -> Box<dyn BtNode<W>>
where
    W: WorldMut + 'static,
{
    Box::new(Or::new(lhs, rhs))
}

pub fn logic_not<W>(child: Box<dyn BtNode<W>>) -> Box<dyn BtNode<W>>
where
    W: WorldMut + 'static,
{
    Box::new(Inverse::new(child))
}
