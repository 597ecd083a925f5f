//! Reference states for grid agents.

use core::marker::PhantomData;

use ai_core::{DeterministicRng, TickContext, WorldView};
use ai_grid::{move_towards, nearest_enemy, AgentAction, Color, GridWorldMut, Position};

use crate::State;

const PATROL_STREAM: u64 = 0x5041_5452_4f4c;

/// Placeholder: melee resolution happens when a move is blocked by an enemy.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttackEnemy;

impl<W> State<W> for AttackEnemy
where
    W: GridWorldMut + 'static,
{
    fn act(&mut self, _ctx: &TickContext, _agent: W::Agent, _world: &mut W) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Nop;

impl<W> State<W> for Nop
where
    W: GridWorldMut + 'static,
{
    fn act(&mut self, _ctx: &TickContext, _agent: W::Agent, _world: &mut W) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MoveToEnemy;

impl<W> State<W> for MoveToEnemy
where
    W: GridWorldMut + 'static,
{
    fn act(&mut self, _ctx: &TickContext, agent: W::Agent, world: &mut W) {
        let (Some(pos), Some(enemy)) = (world.position(agent), nearest_enemy(&*world, agent)) else {
            return;
        };
        world.set_action(agent, move_towards(pos, enemy.position));
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FleeFromEnemy;

impl<W> State<W> for FleeFromEnemy
where
    W: GridWorldMut + 'static,
{
    fn act(&mut self, _ctx: &TickContext, agent: W::Agent, world: &mut W) {
        let (Some(pos), Some(enemy)) = (world.position(agent), nearest_enemy(&*world, agent)) else {
            return;
        };
        world.set_action(agent, move_towards(pos, enemy.position).inverse());
    }
}

/// Random walk around the agent's home cell, walking back once farther than `distance`.
#[derive(Debug, Clone, Copy)]
pub struct Patrol {
    pub distance: f32,
}

impl Patrol {
    pub fn new(distance: f32) -> Self {
        Self { distance }
    }
}

impl<W> State<W> for Patrol
where
    W: GridWorldMut + 'static,
{
    fn act(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) {
        let (Some(pos), Some(home)) = (world.position(agent), world.home(agent)) else {
            return;
        };
        let action = if pos.distance(home) > self.distance {
            move_towards(pos, home)
        } else {
            let mut rng = ctx.rng_for_agent(agent, PATROL_STREAM);
            AgentAction::MOVES[rng.range_u32(0, AgentAction::MOVES.len() as u32) as usize]
        };
        world.set_action(agent, action);
    }
}

/// Restores `delta` hitpoints per tick, capped at 100.
#[derive(Debug, Clone, Copy)]
pub struct Healing {
    pub delta: f32,
}

impl Healing {
    pub fn new(delta: f32) -> Self {
        Self { delta }
    }
}

impl Default for Healing {
    fn default() -> Self {
        Self { delta: 20.0 }
    }
}

impl<W> State<W> for Healing
where
    W: GridWorldMut + 'static,
{
    fn act(&mut self, _ctx: &TickContext, agent: W::Agent, world: &mut W) {
        if let Some(hp) = world.hitpoints(agent) {
            world.set_hitpoints(agent, (hp + self.delta).min(100.0));
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GoToPos {
    pub pos: Position,
}

impl GoToPos {
    pub fn new(pos: Position) -> Self {
        Self { pos }
    }
}

impl<W> State<W> for GoToPos
where
    W: GridWorldMut + 'static,
{
    fn act(&mut self, _ctx: &TickContext, agent: W::Agent, world: &mut W) {
        if let Some(pos) = world.position(agent) {
            world.set_action(agent, move_towards(pos, self.pos));
        }
    }
}

/// Follow a specific entity; idles once it is gone.
pub struct MoveToEntity<W>
where
    W: WorldView,
{
    target: W::Agent,
    _world: PhantomData<fn() -> W>,
}

impl<W> MoveToEntity<W>
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

impl<W> State<W> for MoveToEntity<W>
where
    W: GridWorldMut + 'static,
{
    fn act(&mut self, _ctx: &TickContext, agent: W::Agent, world: &mut W) {
        let (Some(pos), Some(target)) = (world.position(agent), world.position(self.target)) else {
            return;
        };
        world.set_action(agent, move_towards(pos, target));
    }
}

/// Alternates the agent's color between two values every `speed` ticks.
#[derive(Debug, Clone, Copy)]
pub struct Blink {
    colors: [Color; 2],
    speed: u32,
    counter: u32,
    current: Option<Color>,
}

impl Blink {
    pub fn new(color1: Color, color2: Color, speed: u32) -> Self {
        Self {
            colors: [color1, color2],
            speed: speed.max(1),
            counter: 0,
            current: None,
        }
    }
}

impl<W> State<W> for Blink
where
    W: GridWorldMut + 'static,
{
    fn act(&mut self, _ctx: &TickContext, agent: W::Agent, world: &mut W) {
        self.counter = self.counter.wrapping_add(1);
        if self.counter % self.speed == 0 {
            let phase = (self.counter / self.speed) % 2;
            self.current = Some(if phase == 1 { self.colors[0] } else { self.colors[1] });
        }
        if let Some(color) = self.current {
            world.set_color(agent, color);
        }
    }
}
