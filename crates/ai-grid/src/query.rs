use crate::{AgentAction, GridWorldView, Position};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest<A> {
    pub entity: A,
    pub position: Position,
    pub distance: f32,
}

/// Pick the axis with the larger delta and step along it toward `to`.
///
/// Ties (including `from == to`) resolve to the vertical axis.
pub fn move_towards(from: Position, to: Position) -> AgentAction {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx.abs() > dy.abs() {
        if dx > 0 {
            AgentAction::MoveRight
        } else {
            AgentAction::MoveLeft
        }
    } else if dy > 0 {
        AgentAction::MoveUp
    } else {
        AgentAction::MoveDown
    }
}

fn nearest_where<W, F>(world: &W, from: Position, mut accept: F) -> Option<Nearest<W::Agent>>
where
    W: GridWorldView,
    F: FnMut(W::Agent) -> bool,
{
    let mut best: Option<Nearest<W::Agent>> = None;
    for entity in world.entities() {
        if !accept(entity) {
            continue;
        }
        let Some(position) = world.position(entity) else {
            continue;
        };
        let distance = from.distance(position);
        if best.map_or(true, |b| distance < b.distance) {
            best = Some(Nearest {
                entity,
                position,
                distance,
            });
        }
    }
    best
}

/// Closest living entity on a different team than `agent`.
///
/// Entities without a team (bases, waypoints) are never enemies. Equal distances keep the entity
/// that comes first in `entities()` order.
pub fn nearest_enemy<W: GridWorldView>(world: &W, agent: W::Agent) -> Option<Nearest<W::Agent>> {
    let from = world.position(agent)?;
    let team = world.team(agent)?;
    nearest_where(world, from, |other| {
        other != agent && world.team(other).is_some_and(|t| t != team)
    })
}

pub fn nearest_base<W: GridWorldView>(world: &W, agent: W::Agent) -> Option<Nearest<W::Agent>> {
    let from = world.position(agent)?;
    nearest_where(world, from, |other| world.is_base(other))
}

/// Whether any enemy is within `radius` (inclusive) of `agent`.
pub fn enemy_within<W: GridWorldView>(world: &W, agent: W::Agent, radius: f32) -> bool {
    nearest_enemy(world, agent).is_some_and(|n| n.distance <= radius)
}
