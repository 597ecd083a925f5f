use ai_grid::{
    enemy_within, move_towards, nearest_base, nearest_enemy, AgentAction, Body, GridArena,
    GridWorldView, Position, Team,
};

#[test]
fn move_towards_prefers_the_axis_with_the_larger_delta() {
    let origin = Position::new(0, 0);
    assert_eq!(move_towards(Position::new(5, 0), origin), AgentAction::MoveLeft);
    assert_eq!(move_towards(origin, Position::new(3, 1)), AgentAction::MoveRight);
    assert_eq!(move_towards(origin, Position::new(1, 3)), AgentAction::MoveUp);
    assert_eq!(move_towards(origin, Position::new(-1, -3)), AgentAction::MoveDown);
    // Equal deltas resolve vertically.
    assert_eq!(move_towards(origin, Position::new(2, 2)), AgentAction::MoveUp);
}

#[test]
fn inverse_swaps_opposite_moves_only() {
    for action in AgentAction::MOVES {
        assert_ne!(action.inverse(), action);
        assert_eq!(action.inverse().inverse(), action);
    }
    assert_eq!(AgentAction::HealSelf.inverse(), AgentAction::HealSelf);
    assert_eq!(AgentAction::Nop.inverse(), AgentAction::Nop);
}

#[test]
fn step_moves_up_along_positive_y() {
    let p = Position::new(2, 2);
    assert_eq!(p.step(AgentAction::MoveUp), Position::new(2, 3));
    assert_eq!(p.step(AgentAction::MoveDown), Position::new(2, 1));
    assert_eq!(p.step(AgentAction::MoveLeft), Position::new(1, 2));
    assert_eq!(p.step(AgentAction::MoveRight), Position::new(3, 2));
    assert_eq!(p.step(AgentAction::Attack), p);
}

#[test]
fn nearest_enemy_ignores_allies_and_teamless_entities() {
    let mut world = GridArena::new();
    let me = world.spawn(Body::agent(Position::new(0, 0), Team(1)));
    let _ally = world.spawn(Body::agent(Position::new(1, 0), Team(1)));
    let _marker = world.spawn(Body::marker(Position::new(0, 1)));
    let far = world.spawn(Body::agent(Position::new(6, 0), Team(2)));
    let near = world.spawn(Body::agent(Position::new(0, -3), Team(3)));

    let found = nearest_enemy(&world, me).expect("enemy exists");
    assert_eq!(found.entity, near);
    assert_eq!(found.position, Position::new(0, -3));
    assert!((found.distance - 3.0).abs() < 1e-6);

    world.despawn(near);
    assert_eq!(nearest_enemy(&world, me).map(|n| n.entity), Some(far));
}

#[test]
fn enemy_within_is_inclusive() {
    let mut world = GridArena::new();
    let me = world.spawn(Body::agent(Position::new(0, 0), Team(0)));
    world.spawn(Body::agent(Position::new(3, 0), Team(1)));

    assert!(enemy_within(&world, me, 3.0));
    assert!(!enemy_within(&world, me, 2.9));
}

#[test]
fn nearest_base_only_considers_bases() {
    let mut world = GridArena::new();
    let me = world.spawn(Body::agent(Position::new(0, 0), Team(0)));
    world.spawn(Body::marker(Position::new(1, 1)));
    let base = world.spawn(Body::base(Position::new(4, 4)));

    let found = nearest_base(&world, me).expect("base exists");
    assert_eq!(found.entity, base);
    assert!(world.is_base(base));
    assert!(!world.is_base(me));
}

#[test]
fn despawned_entities_disappear_from_queries() {
    let mut world = GridArena::new();
    let id = world.spawn(Body::agent(Position::new(0, 0), Team(0)));
    assert!(world.is_alive(id));
    world.despawn(id);
    assert!(!world.is_alive(id));
    assert_eq!(world.position(id), None);
    assert_eq!(world.entities().count(), 0);

    // Ids are never reused.
    let next = world.spawn(Body::agent(Position::new(0, 0), Team(0)));
    assert_ne!(next, id);
}
