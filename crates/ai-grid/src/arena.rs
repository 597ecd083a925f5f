use std::collections::BTreeMap;

use ai_core::{WorldMut, WorldView};

use crate::{AgentAction, Color, GridWorldMut, GridWorldView, Position, Team};

/// Component bundle for one arena entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: Position,
    pub home: Position,
    pub team: Option<Team>,
    pub hitpoints: f32,
    pub melee_damage: f32,
    pub color: Color,
    pub action: AgentAction,
    pub is_base: bool,
}

impl Body {
    pub fn agent(position: Position, team: Team) -> Self {
        Self {
            position,
            home: position,
            team: Some(team),
            hitpoints: 100.0,
            melee_damage: 20.0,
            color: Color(0xffff_ffff),
            action: AgentAction::Nop,
            is_base: false,
        }
    }

    /// A team-less, non-acting point of interest (waypoint, pickup).
    pub fn marker(position: Position) -> Self {
        Self {
            team: None,
            melee_damage: 0.0,
            ..Self::agent(position, Team::default())
        }
    }

    pub fn base(position: Position) -> Self {
        Self {
            is_base: true,
            ..Self::marker(position)
        }
    }

    pub fn with_hitpoints(mut self, hitpoints: f32) -> Self {
        self.hitpoints = hitpoints;
        self
    }

    pub fn with_home(mut self, home: Position) -> Self {
        self.home = home;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_melee_damage(mut self, damage: f32) -> Self {
        self.melee_damage = damage;
        self
    }
}

/// In-memory grid world keyed by stable `u64` ids (ids start at 1 and are never reused).
#[derive(Debug, Clone, Default)]
pub struct GridArena {
    bodies: BTreeMap<u64, Body>,
    next_id: u64,
}

impl GridArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, body: Body) -> u64 {
        self.next_id += 1;
        self.bodies.insert(self.next_id, body);
        self.next_id
    }

    pub fn despawn(&mut self, id: u64) -> Option<Body> {
        self.bodies.remove(&id)
    }

    pub fn body(&self, id: u64) -> Option<&Body> {
        self.bodies.get(&id)
    }

    pub fn body_mut(&mut self, id: u64) -> Option<&mut Body> {
        self.bodies.get_mut(&id)
    }

    pub fn ids(&self) -> Vec<u64> {
        self.bodies.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl WorldView for GridArena {
    type Agent = u64;
}

impl WorldMut for GridArena {}

impl GridWorldView for GridArena {
    fn is_alive(&self, entity: u64) -> bool {
        self.bodies.contains_key(&entity)
    }

    fn position(&self, entity: u64) -> Option<Position> {
        self.body(entity).map(|b| b.position)
    }

    fn team(&self, entity: u64) -> Option<Team> {
        self.body(entity)?.team
    }

    fn hitpoints(&self, entity: u64) -> Option<f32> {
        self.body(entity).map(|b| b.hitpoints)
    }

    fn home(&self, entity: u64) -> Option<Position> {
        self.body(entity).map(|b| b.home)
    }

    fn is_base(&self, entity: u64) -> bool {
        self.body(entity).is_some_and(|b| b.is_base)
    }

    fn action(&self, entity: u64) -> Option<AgentAction> {
        self.body(entity).map(|b| b.action)
    }

    fn entities(&self) -> impl Iterator<Item = u64> + '_ {
        self.bodies.keys().copied()
    }
}

impl GridWorldMut for GridArena {
    fn set_action(&mut self, agent: u64, action: AgentAction) {
        if let Some(body) = self.body_mut(agent) {
            body.action = action;
        }
    }

    fn set_color(&mut self, agent: u64, color: Color) {
        if let Some(body) = self.body_mut(agent) {
            body.color = color;
        }
    }

    fn set_hitpoints(&mut self, agent: u64, hitpoints: f32) {
        if let Some(body) = self.body_mut(agent) {
            body.hitpoints = hitpoints;
        }
    }
}
