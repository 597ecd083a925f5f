use core::marker::PhantomData;

use ai_core::WorldView;
use ai_grid::{enemy_within, GridWorldView, Position};

use crate::TransitionPredicate;

/// Agent stands exactly on `pos`.
#[derive(Debug, Clone, Copy)]
pub struct ArrivedAtPos {
    pub pos: Position,
}

impl ArrivedAtPos {
    pub fn new(pos: Position) -> Self {
        Self { pos }
    }
}

impl<W> TransitionPredicate<W> for ArrivedAtPos
where
    W: GridWorldView + 'static,
{
    fn available(&self, _duration: f32, agent: W::Agent, world: &W) -> bool {
        world.position(agent) == Some(self.pos)
    }
}

/// Agent stands on the tracked entity's cell.
///
/// A target that no longer exists counts as arrived: there is nothing left to chase, so the
/// machine should move on.
pub struct ArrivedAtEntity<W>
where
    W: WorldView,
{
    target: W::Agent,
    _world: PhantomData<fn() -> W>,
}

impl<W> ArrivedAtEntity<W>
where
    W: WorldView,
{
    pub fn new(target: W::Agent) -> Self {
        Self {
            target,
            _world: PhantomData,
        }
    }
}

impl<W> TransitionPredicate<W> for ArrivedAtEntity<W>
where
    W: GridWorldView + 'static,
{
    fn available(&self, _duration: f32, agent: W::Agent, world: &W) -> bool {
        if !world.is_alive(self.target) {
            return true;
        }
        match (world.position(agent), world.position(self.target)) {
            (Some(pos), Some(target)) => pos == target,
            _ => false,
        }
    }
}

/// Fires once the edge has been polled for strictly more than `seconds`.
#[derive(Debug, Clone, Copy)]
pub struct Elapsed {
    pub seconds: f32,
}

impl Elapsed {
    pub fn new(seconds: f32) -> Self {
        Self { seconds }
    }
}

impl<W> TransitionPredicate<W> for Elapsed
where
    W: WorldView + 'static,
{
    fn available(&self, duration: f32, _agent: W::Agent, _world: &W) -> bool {
        duration > self.seconds
    }
}

/// Some enemy is within `radius` (inclusive).
#[derive(Debug, Clone, Copy)]
pub struct EnemyAvailable {
    pub radius: f32,
}

impl EnemyAvailable {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

impl<W> TransitionPredicate<W> for EnemyAvailable
where
    W: GridWorldView + 'static,
{
    fn available(&self, _duration: f32, agent: W::Agent, world: &W) -> bool {
        enemy_within(world, agent, self.radius)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HitpointsLessThan {
    pub threshold: f32,
}

impl HitpointsLessThan {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }
}

impl<W> TransitionPredicate<W> for HitpointsLessThan
where
    W: GridWorldView + 'static,
{
    fn available(&self, _duration: f32, agent: W::Agent, world: &W) -> bool {
        world.hitpoints(agent).is_some_and(|hp| hp < self.threshold)
    }
}

/// Reserved for a path-based reachability check; never available.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnemyReachable;

impl<W> TransitionPredicate<W> for EnemyReachable
where
    W: WorldView + 'static,
{
    fn available(&self, _duration: f32, _agent: W::Agent, _world: &W) -> bool {
        false
    }
}
