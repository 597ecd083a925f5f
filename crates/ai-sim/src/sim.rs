//! The turn loop: every agent decides, then all actions resolve at once.

use std::collections::BTreeMap;

use ai_core::{tick_brains, Blackboard, Brain, TickContext};
use ai_grid::{AgentAction, Body, GridArena, GridWorldView, Position};
use anyhow::{anyhow, Result};

use crate::agents;
use crate::config::{SimConfig, Strategy};

/// What happened while resolving one turn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurnReport {
    pub tick: u64,
    /// `(attacker, victim)` pairs, in resolution order.
    pub hits: Vec<(u64, u64)>,
    pub deaths: Vec<u64>,
}

pub struct Simulation {
    pub world: GridArena,
    brains: Vec<Brain<GridArena>>,
    names: BTreeMap<u64, String>,
    seed: u64,
    dt_seconds: f32,
    heal_amount: f32,
    tick: u64,
}

impl Simulation {
    /// Spawn everything the scenario lists and build each agent's strategy.
    pub fn from_config(config: &SimConfig) -> Result<Self> {
        let mut world = GridArena::new();
        let mut names = BTreeMap::new();
        let mut by_name = BTreeMap::new();

        for marker in &config.markers {
            let body = if marker.base {
                Body::base(marker.position)
            } else {
                Body::marker(marker.position)
            };
            let id = world.spawn(body);
            names.insert(id, marker.name.clone());
            by_name.insert(marker.name.clone(), id);
        }

        let mut spawned = Vec::with_capacity(config.agents.len());
        for spec in &config.agents {
            let id = world.spawn(
                Body::agent(spec.position, spec.team)
                    .with_hitpoints(spec.hitpoints)
                    .with_melee_damage(spec.melee_damage),
            );
            names.insert(id, spec.name.clone());
            by_name.insert(spec.name.clone(), id);
            spawned.push(id);
        }

        let lookup = |name: &str| {
            by_name
                .get(name)
                .copied()
                .ok_or_else(|| anyhow!("unknown entity name `{name}`"))
        };

        let mut brains = Vec::with_capacity(spawned.len());
        for (spec, &id) in config.agents.iter().zip(&spawned) {
            let mut bb = Blackboard::new();
            let brain = match &spec.strategy {
                Strategy::Attack => agents::brain(id, bb, agents::attack()),
                Strategy::Berserk => agents::brain(id, bb, agents::berserk()),
                Strategy::PatrolFlee => agents::brain(id, bb, agents::patrol_flee()),
                Strategy::PatrolAttackFlee => agents::brain(id, bb, agents::patrol_attack_flee()),
                Strategy::PatrolAttackFleeHealing => {
                    agents::brain(id, bb, agents::patrol_attack_flee_healing())
                }
                Strategy::Crafter { target } => {
                    agents::brain(id, bb, agents::crafter(lookup(target.as_str())?))
                }
                Strategy::Guard => {
                    let tree = agents::guard(&mut bb, spec.position);
                    agents::brain(id, bb, tree)
                }
                Strategy::Courier { route } => {
                    let stops = route
                        .iter()
                        .map(|name| lookup(name.as_str()))
                        .collect::<Result<Vec<_>>>()?;
                    let tree = agents::courier(&mut bb, stops);
                    agents::brain(id, bb, tree)
                }
                Strategy::Utility { selector } => {
                    let tree = agents::utility(&mut bb, *selector);
                    agents::brain(id, bb, tree)
                }
            };
            brains.push(brain);
        }

        tracing::info!(
            agents = brains.len(),
            markers = config.markers.len(),
            seed = config.seed,
            "scenario loaded"
        );

        Ok(Self {
            world,
            brains,
            names,
            seed: config.seed,
            dt_seconds: config.dt_seconds,
            heal_amount: config.heal_amount,
            tick: 0,
        })
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn name(&self, id: u64) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn id(&self, name: &str) -> Option<u64> {
        self.names
            .iter()
            .find_map(|(id, n)| (n == name).then_some(*id))
    }

    /// Agents that still have a brain, in id order.
    pub fn living_agents(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.brains.iter().map(|b| b.agent).collect();
        ids.sort_unstable();
        ids
    }

    /// Run one full turn.
    pub fn step(&mut self) -> TurnReport {
        let ctx = TickContext::new(self.tick, self.dt_seconds, self.seed);
        tick_brains(&ctx, &mut self.world, &mut self.brains);

        let mut report = resolve_actions(&mut self.world, self.heal_amount);
        report.tick = self.tick;

        for &(attacker, victim) in &report.hits {
            tracing::debug!(
                tick = self.tick,
                attacker = self.name(attacker).unwrap_or("?"),
                victim = self.name(victim).unwrap_or("?"),
                "melee hit"
            );
        }
        for &dead in &report.deaths {
            tracing::info!(tick = self.tick, agent = self.name(dead).unwrap_or("?"), "agent died");
        }
        self.brains.retain(|b| !report.deaths.contains(&b.agent));

        self.tick += 1;
        report
    }
}

/// Apply every pending action at once.
///
/// Agents resolve in id order against the cells already claimed this turn. A move into a claimed
/// cell is blocked, and if the occupant is on another team it takes the mover's melee damage.
/// Entities without a team (bases, waypoints) never block. Afterwards every action is cleared and
/// agents at or below zero hitpoints are removed.
pub fn resolve_actions(world: &mut GridArena, heal_amount: f32) -> TurnReport {
    let mut report = TurnReport::default();
    let actors: Vec<u64> = world
        .ids()
        .into_iter()
        .filter(|&id| world.team(id).is_some())
        .collect();

    let mut claimed: BTreeMap<u64, Position> = actors
        .iter()
        .filter_map(|&id| Some((id, world.position(id)?)))
        .collect();

    for &id in &actors {
        let Some(body) = world.body(id) else {
            continue;
        };
        let (action, from) = (body.action, body.position);
        let (team, damage) = (body.team, body.melee_damage);

        if action == AgentAction::HealSelf {
            if let Some(body) = world.body_mut(id) {
                body.hitpoints = (body.hitpoints + heal_amount).min(100.0);
            }
            continue;
        }
        if !action.is_move() {
            continue;
        }

        let to = from.step(action);
        let blocker = claimed
            .iter()
            .find_map(|(&other, &pos)| (other != id && pos == to).then_some(other));

        match blocker {
            Some(other) => {
                if world.team(other) != team {
                    if let Some(victim) = world.body_mut(other) {
                        victim.hitpoints -= damage;
                    }
                    report.hits.push((id, other));
                }
            }
            None => {
                claimed.insert(id, to);
            }
        }
    }

    for (&id, &pos) in &claimed {
        if let Some(body) = world.body_mut(id) {
            body.position = pos;
            body.action = AgentAction::Nop;
        }
    }

    for id in actors {
        if world.hitpoints(id).is_some_and(|hp| hp <= 0.0) {
            world.despawn(id);
            report.deaths.push(id);
        }
    }
    report
}
