use ai_bt::{find_enemy, move_to_entity, patch_up, sequence, BehaviorTree};
use ai_core::{tick_brains, Blackboard, Brain, TickContext};
use ai_grid::{AgentAction, Body, GridArena, GridWorldView, Position, Team};
use ai_utility::{utility_selector, SelectionMode, UtilityChild, UtilitySelectorConfig};

fn fight_or_heal(bb: &mut Blackboard) -> BehaviorTree<GridArena> {
    let fight = UtilityChild::new(
        sequence(vec![
            find_enemy::<GridArena>(bb, 10.0, "enemy"),
            move_to_entity::<GridArena>(bb, "enemy"),
        ]),
        |_: &TickContext, agent: u64, world: &GridArena, _: &Blackboard| {
            world.hitpoints(agent).unwrap_or(0.0)
        },
    );
    let heal = UtilityChild::new(
        patch_up::<GridArena>(80.0),
        |_: &TickContext, agent: u64, world: &GridArena, _: &Blackboard| {
            100.0 - world.hitpoints(agent).unwrap_or(0.0)
        },
    );
    let config = UtilitySelectorConfig {
        mode: SelectionMode::Deterministic,
        ..UtilitySelectorConfig::default()
    };
    BehaviorTree::new(utility_selector(vec![fight, heal], config))
}

#[test]
fn wounded_agents_prefer_healing() {
    let mut world = GridArena::new();
    let healthy = world.spawn(Body::agent(Position::new(0, 0), Team(0)).with_hitpoints(90.0));
    let wounded = world.spawn(Body::agent(Position::new(0, 5), Team(0)).with_hitpoints(20.0));
    world.spawn(Body::agent(Position::new(3, 0), Team(1)));

    let mut brains: Vec<Brain<GridArena>> = [healthy, wounded]
        .into_iter()
        .map(|agent| {
            let mut bb = Blackboard::new();
            let tree = fight_or_heal(&mut bb);
            Brain::with_blackboard(agent, bb, Box::new(tree))
        })
        .collect();

    tick_brains(&TickContext::new(0, 1.0, 5), &mut world, &mut brains);
    assert_eq!(world.action(healthy), Some(AgentAction::MoveRight));
    assert_eq!(world.action(wounded), Some(AgentAction::HealSelf));
}
