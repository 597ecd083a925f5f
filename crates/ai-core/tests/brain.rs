use ai_core::{tick_brains, Blackboard, Brain, Policy, TickContext, WorldMut, WorldView};

#[derive(Default)]
struct RecordingWorld {
    order: Vec<(u64, u64)>,
}

impl WorldView for RecordingWorld {
    type Agent = u64;
}

impl WorldMut for RecordingWorld {}

struct Record;

impl Policy<RecordingWorld> for Record {
    fn tick(
        &mut self,
        ctx: &TickContext,
        agent: u64,
        world: &mut RecordingWorld,
        _blackboard: &mut Blackboard,
    ) {
        world.order.push((ctx.tick, agent));
    }
}

#[test]
fn brains_tick_once_each_in_stable_agent_order() {
    let mut brains = vec![
        Brain::new(3u64, Box::new(Record) as Box<dyn Policy<RecordingWorld>>),
        Brain::new(1u64, Box::new(Record)),
        Brain::new(2u64, Box::new(Record)),
    ];
    let mut world = RecordingWorld::default();

    for tick in 0..2u64 {
        tick_brains(&TickContext::new(tick, 1.0, 0), &mut world, &mut brains);
    }

    assert_eq!(
        world.order,
        vec![(0, 1), (0, 2), (0, 3), (1, 1), (1, 2), (1, 3)]
    );
}

#[test]
fn agent_rng_streams_are_deterministic_and_vary_by_tick() {
    use ai_core::DeterministicRng;

    let a = TickContext::new(4, 1.0, 99);
    let b = TickContext::new(5, 1.0, 99);

    let x = a.rng_for_agent(7u64, 1).next_u64();
    assert_eq!(x, a.rng_for_agent(7u64, 1).next_u64());
    assert_ne!(x, b.rng_for_agent(7u64, 1).next_u64());
    assert_ne!(x, a.rng_for_agent(7u64, 2).next_u64());
}
