//! Leaf behaviors for grid agents.
//!
//! Leaves that share data (a target found by one leaf and chased by another) do so through named
//! blackboard slots. Slots are registered when the leaf is built, so constructors take the agent's
//! blackboard.

use ai_core::{BbKey, Blackboard, DeterministicRng, TickContext, WorldView};
use ai_grid::{
    move_towards, nearest_base, nearest_enemy, AgentAction, Color, GridWorldMut, Position,
};

use crate::bt::{BtEvent, BtNode, BtStatus};

/// Bool slot raised by [`Patrol`] when it receives [`BtEvent::Danger`].
pub const DANGER_SLOT: &str = "danger";

const PATROL_STREAM: u64 = 0x4254_5041_5452;
const RANDOM_WALK_STREAM: u64 = 0x4254_5741_4c4b;

fn random_move<W: WorldView>(ctx: &TickContext, agent: W::Agent, stream: u64) -> AgentAction {
    let mut rng = ctx.rng_for_agent(agent, stream);
    AgentAction::MOVES[rng.range_u32(0, AgentAction::MOVES.len() as u32) as usize]
}

/// Resolve an entity slot to the target's position, or `None` if unset or gone.
fn target_position<W>(world: &W, blackboard: &Blackboard, slot: BbKey<W::Agent>) -> Option<Position>
where
    W: GridWorldMut,
{
    let target = blackboard.get_safe(slot);
    if !target.is_initialized {
        tracing::debug!(slot = slot.index(), "target slot never set");
        return None;
    }
    if !world.is_alive(target.value) {
        tracing::debug!(target = ?target.value, "target no longer alive");
        return None;
    }
    world.position(target.value)
}

/// Stores the nearest enemy within `distance` in an entity slot.
pub struct FindEnemy<W>
where
    W: WorldView,
{
    distance: f32,
    slot: BbKey<W::Agent>,
}

impl<W> FindEnemy<W>
where
    W: WorldView,
{
    pub fn new(blackboard: &mut Blackboard, distance: f32, slot: &str) -> Self {
        Self {
            distance,
            slot: blackboard.register(slot),
        }
    }
}

impl<W> BtNode<W> for FindEnemy<W>
where
    W: GridWorldMut + 'static,
{
    fn update(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        match nearest_enemy(&*world, agent) {
            Some(enemy) if enemy.distance <= self.distance => {
                blackboard.set(self.slot, enemy.entity);
                BtStatus::Success
            }
            _ => BtStatus::Failure,
        }
    }
}

/// Stores the nearest base within `distance` in an entity slot.
pub struct FindBase<W>
where
    W: WorldView,
{
    distance: f32,
    slot: BbKey<W::Agent>,
}

impl<W> FindBase<W>
where
    W: WorldView,
{
    pub fn new(blackboard: &mut Blackboard, distance: f32, slot: &str) -> Self {
        Self {
            distance,
            slot: blackboard.register(slot),
        }
    }
}

impl<W> BtNode<W> for FindBase<W>
where
    W: GridWorldMut + 'static,
{
    fn update(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        match nearest_base(&*world, agent) {
            Some(base) if base.distance <= self.distance => {
                blackboard.set(self.slot, base.entity);
                BtStatus::Success
            }
            _ => BtStatus::Failure,
        }
    }
}

/// Walks toward the entity held in a slot. `Success` once standing on its cell.
pub struct MoveToEntity<W>
where
    W: WorldView,
{
    slot: BbKey<W::Agent>,
}

impl<W> MoveToEntity<W>
where
    W: WorldView,
{
    pub fn new(blackboard: &mut Blackboard, slot: &str) -> Self {
        Self {
            slot: blackboard.register(slot),
        }
    }
}

impl<W> BtNode<W> for MoveToEntity<W>
where
    W: GridWorldMut + 'static,
{
    fn update(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        let Some(target) = target_position(&*world, blackboard, self.slot) else {
            return BtStatus::Failure;
        };
        let Some(pos) = world.position(agent) else {
            return BtStatus::Failure;
        };
        if pos == target {
            return BtStatus::Success;
        }
        world.set_action(agent, move_towards(pos, target));
        BtStatus::Running
    }
}

/// Moves directly away from the entity held in a slot.
pub struct Flee<W>
where
    W: WorldView,
{
    slot: BbKey<W::Agent>,
}

impl<W> Flee<W>
where
    W: WorldView,
{
    pub fn new(blackboard: &mut Blackboard, slot: &str) -> Self {
        Self {
            slot: blackboard.register(slot),
        }
    }
}

impl<W> BtNode<W> for Flee<W>
where
    W: GridWorldMut + 'static,
{
    fn update(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        let Some(threat) = target_position(&*world, blackboard, self.slot) else {
            return BtStatus::Failure;
        };
        let Some(pos) = world.position(agent) else {
            return BtStatus::Failure;
        };
        world.set_action(agent, move_towards(pos, threat).inverse());
        BtStatus::Running
    }
}

/// Random walk that stays within `distance` of an anchor stored in a position slot.
///
/// Never finishes on its own. A [`BtEvent::Danger`] raises the [`DANGER_SLOT`] flag and
/// [`BtEvent::Safe`] lowers it.
pub struct Patrol {
    distance: f32,
    anchor: BbKey<Position>,
    danger: BbKey<bool>,
}

impl Patrol {
    pub fn new(blackboard: &mut Blackboard, anchor: Position, distance: f32, slot: &str) -> Self {
        let anchor_key = blackboard.register(slot);
        blackboard.set(anchor_key, anchor);
        Self {
            distance,
            anchor: anchor_key,
            danger: blackboard.register(DANGER_SLOT),
        }
    }
}

impl<W> BtNode<W> for Patrol
where
    W: GridWorldMut + 'static,
{
    fn update(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        let Some(pos) = world.position(agent) else {
            return BtStatus::Failure;
        };
        let anchor = blackboard.get(self.anchor);
        let action = if pos.distance(anchor) > self.distance {
            move_towards(pos, anchor)
        } else {
            random_move::<W>(ctx, agent, PATROL_STREAM)
        };
        world.set_action(agent, action);
        BtStatus::Running
    }

    fn react(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        _world: &mut W,
        blackboard: &mut Blackboard,
        event: BtEvent,
    ) {
        match event {
            BtEvent::Danger => blackboard.set(self.danger, true),
            BtEvent::Safe => blackboard.set(self.danger, false),
            BtEvent::Default => return,
        }
        tracing::debug!(?agent, ?event, "patrol interrupted");
    }
}

/// `Success` unless the [`DANGER_SLOT`] flag is raised.
pub struct IsSafe {
    danger: BbKey<bool>,
}

impl IsSafe {
    pub fn new(blackboard: &mut Blackboard) -> Self {
        Self {
            danger: blackboard.register(DANGER_SLOT),
        }
    }
}

impl<W> BtNode<W> for IsSafe
where
    W: GridWorldMut + 'static,
{
    fn update(
        &mut self,
        _ctx: &TickContext,
        _agent: W::Agent,
        _world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        if blackboard.get(self.danger) {
            BtStatus::Failure
        } else {
            BtStatus::Success
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IsLowHp {
    threshold: f32,
}

impl IsLowHp {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }
}

impl<W> BtNode<W> for IsLowHp
where
    W: GridWorldMut + 'static,
{
    fn update(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        _blackboard: &mut Blackboard,
    ) -> BtStatus {
        match world.hitpoints(agent) {
            Some(hp) if hp < self.threshold => BtStatus::Success,
            _ => BtStatus::Failure,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomWalk;

impl<W> BtNode<W> for RandomWalk
where
    W: GridWorldMut + 'static,
{
    fn update(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        _blackboard: &mut Blackboard,
    ) -> BtStatus {
        world.set_action(agent, random_move::<W>(ctx, agent, RANDOM_WALK_STREAM));
        BtStatus::Running
    }
}

/// Requests `HealSelf` until hitpoints reach `threshold`.
#[derive(Debug, Clone, Copy)]
pub struct PatchUp {
    threshold: f32,
}

impl PatchUp {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }
}

impl<W> BtNode<W> for PatchUp
where
    W: GridWorldMut + 'static,
{
    fn update(
        &mut self,
        _ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        _blackboard: &mut Blackboard,
    ) -> BtStatus {
        let Some(hp) = world.hitpoints(agent) else {
            return BtStatus::Failure;
        };
        if hp >= self.threshold {
            return BtStatus::Success;
        }
        world.set_action(agent, AgentAction::HealSelf);
        BtStatus::Running
    }
}

/// Cycles through a fixed route, writing the next waypoint into an entity slot on each update.
pub struct GetNextWaypoint<W>
where
    W: WorldView,
{
    waypoints: Vec<W::Agent>,
    next: usize,
    slot: BbKey<W::Agent>,
}

impl<W> GetNextWaypoint<W>
where
    W: WorldView,
{
    pub fn new(blackboard: &mut Blackboard, waypoints: Vec<W::Agent>, slot: &str) -> Self {
        Self {
            waypoints,
            next: 0,
            slot: blackboard.register(slot),
        }
    }
}

impl<W> BtNode<W> for GetNextWaypoint<W>
where
    W: GridWorldMut + 'static,
{
    fn update(
        &mut self,
        _ctx: &TickContext,
        _agent: W::Agent,
        _world: &mut W,
        blackboard: &mut Blackboard,
    ) -> BtStatus {
        let Some(&waypoint) = self.waypoints.get(self.next) else {
            return BtStatus::Failure;
        };
        blackboard.set(self.slot, waypoint);
        self.next = (self.next + 1) % self.waypoints.len();
        BtStatus::Success
    }
}

/// Cycles the agent's color over time; `speed` scales how fast the hue turns.
#[derive(Debug, Clone, Copy)]
pub struct SetRandomColor {
    speed: f32,
}

impl SetRandomColor {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }

    pub fn color_at(&self, seconds: f32) -> Color {
        let phase = seconds * self.speed;
        let channel = |offset: f32| (((phase + offset).sin() * 0.5 + 0.5) * 255.0) as u8;
        Color::from_rgba(channel(0.0), channel(2.094), channel(4.189), 255)
    }
}

impl<W> BtNode<W> for SetRandomColor
where
    W: GridWorldMut + 'static,
{
    fn update(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        _blackboard: &mut Blackboard,
    ) -> BtStatus {
        world.set_color(agent, self.color_at(ctx.elapsed_seconds()));
        BtStatus::Running
    }
}

pub fn find_enemy<W>(blackboard: &mut Blackboard, distance: f32, slot: &str) -> Box<dyn BtNode<W>>
where
    W: GridWorldMut + 'static,
{
    Box::new(FindEnemy::<W>::new(blackboard, distance, slot))
}

pub fn find_base<W>(blackboard: &mut Blackboard, distance: f32, slot: &str) -> Box<dyn BtNode<W>>
where
    W: GridWorldMut + 'static,
{
    Box::new(FindBase::<W>::new(blackboard, distance, slot))
}

pub fn move_to_entity<W>(blackboard: &mut Blackboard, slot: &str) -> Box<dyn BtNode<W>>
where
    W: GridWorldMut + 'static,
{
    Box::new(MoveToEntity::<W>::new(blackboard, slot))
}

pub fn flee<W>(blackboard: &mut Blackboard, slot: &str) -> Box<dyn BtNode<W>>
where
    W: GridWorldMut + 'static,
{
    Box::new(Flee::<W>::new(blackboard, slot))
}

pub fn patrol<W>(
    blackboard: &mut Blackboard,
    anchor: Position,
    distance: f32,
    slot: &str,
) -> Box<dyn BtNode<W>>
where
    W: GridWorldMut + 'static,
{
    Box::new(Patrol::new(blackboard, anchor, distance, slot))
}

pub fn is_safe<W>(blackboard: &mut Blackboard) -> Box<dyn BtNode<W>>
where
    W: GridWorldMut + 'static,
{
    Box::new(IsSafe::new(blackboard))
}

pub fn is_low_hp<W>(threshold: f32) -> Box<dyn BtNode<W>>
where
    W: GridWorldMut + 'static,
{
    Box::new(IsLowHp::new(threshold))
}

pub fn random_walk<W>() -> Box<dyn BtNode<W>>
where
    W: GridWorldMut + 'static,
{
    Box::new(RandomWalk)
}

pub fn patch_up<W>(threshold: f32) -> Box<dyn BtNode<W>>
where
    W: GridWorldMut + 'static,
{
    Box::new(PatchUp::new(threshold))
}

pub fn get_next_waypoint<W>(
    blackboard: &mut Blackboard,
    waypoints: Vec<W::Agent>,
    slot: &str,
) -> Box<dyn BtNode<W>>
where
    W: GridWorldMut + 'static,
{
    Box::new(GetNextWaypoint::<W>::new(blackboard, waypoints, slot))
}

pub fn set_random_color<W>(speed: f32) -> Box<dyn BtNode<W>>
where
    W: GridWorldMut + 'static,
{
    Box::new(SetRandomColor::new(speed))
}
