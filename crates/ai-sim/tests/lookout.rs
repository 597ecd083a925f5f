use ai_core::{Blackboard, Policy, TickContext};
use ai_grid::{AgentAction, Body, GridArena, GridWorldView, Position, Team};
use ai_sim::agents;

fn danger(bb: &Blackboard) -> bool {
    bb.get(bb.key::<bool>("danger").unwrap())
}

fn step(
    guard: u64,
    tick: u64,
    world: &mut GridArena,
    bb: &mut Blackboard,
    lookout: &mut agents::Lookout,
) {
    lookout.tick(&TickContext::new(tick, 1.0, 7), guard, world, bb);
}

#[test]
fn guard_engages_after_danger_and_stands_down_once_safe() {
    let mut world = GridArena::new();
    let guard = world.spawn(Body::agent(Position::new(0, 0), Team(0)));
    let enemy = world.spawn(Body::agent(Position::new(3, 0), Team(1)));

    let mut bb = Blackboard::new();
    let mut lookout = agents::guard(&mut bb, Position::new(0, 0));

    // nothing is active yet, so the first alarm only reaches the tree on the next tick
    step(guard, 0, &mut world, &mut bb, &mut lookout);
    assert!(lookout.alarmed());
    assert!(!danger(&bb));

    step(guard, 1, &mut world, &mut bb, &mut lookout);
    assert!(danger(&bb));
    assert_eq!(world.action(guard), Some(AgentAction::MoveRight));

    world.body_mut(enemy).unwrap().position = Position::new(20, 0);
    step(guard, 2, &mut world, &mut bb, &mut lookout);
    assert!(!lookout.alarmed());
    step(guard, 3, &mut world, &mut bb, &mut lookout);
    assert!(!danger(&bb));
}

#[test]
fn guards_in_a_scenario_are_driven_by_a_lookout() {
    let yaml = r#"
seed: 3
agents:
  - name: guard
    position: { x: 0, y: 0 }
    team: 0
    strategy: { kind: guard }
  - name: raider
    position: { x: 3, y: 0 }
    team: 1
    strategy: { kind: attack }
"#;
    let config: ai_sim::SimConfig = serde_yaml::from_str(yaml).unwrap();
    let mut sim = ai_sim::Simulation::from_config(&config).unwrap();
    let guard = sim.id("guard").unwrap();
    let raider = sim.id("raider").unwrap();

    for _ in 0..4 {
        sim.step();
    }
    let gap = sim
        .world
        .position(guard)
        .unwrap()
        .distance(sim.world.position(raider).unwrap());
    assert!(gap <= 1.0, "guard and raider should have closed in, gap {gap}");
}
