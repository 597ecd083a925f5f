use ai_core::{TickContext, WorldMut, WorldView};
use ai_fsm::{Condition, Elapsed, FsmError, NestedState, State, StateMachine};

#[derive(Debug, Default)]
struct RecordingWorld {
    ready: bool,
    log: Vec<String>,
}

impl WorldView for RecordingWorld {
    type Agent = u64;
}

impl WorldMut for RecordingWorld {}

struct Named(&'static str);

impl State<RecordingWorld> for Named {
    fn enter(&mut self, _ctx: &TickContext, _agent: u64, world: &mut RecordingWorld) {
        world.log.push(format!("{}.enter", self.0));
    }

    fn exit(&mut self, _ctx: &TickContext, _agent: u64, world: &mut RecordingWorld) {
        world.log.push(format!("{}.exit", self.0));
    }

    fn act(&mut self, _ctx: &TickContext, _agent: u64, world: &mut RecordingWorld) {
        world.log.push(format!("{}.act", self.0));
    }
}

fn ready(_duration: f32, _agent: u64, world: &RecordingWorld) -> bool {
    world.ready
}

fn ctx(tick: u64) -> TickContext {
    TickContext::new(tick, 1.0, 0)
}

#[test]
fn first_added_state_is_current() {
    let mut sm = StateMachine::<RecordingWorld>::new();
    let a = sm.add_state(Named("a"));
    let b = sm.add_state(Named("b"));
    assert_eq!((a, b), (0, 1));
    assert_eq!(sm.current_state(), a);
}

#[test]
fn transition_fires_after_acting_and_runs_exit_then_enter() {
    let mut sm = StateMachine::new();
    let a = sm.add_state(Named("a"));
    let b = sm.add_state(Named("b"));
    sm.add_transition(Condition::new(ready), a, b);

    let mut world = RecordingWorld::default();
    for tick in 0..5 {
        sm.act(&ctx(tick), 1, &mut world);
    }
    assert_eq!(world.log, vec!["a.act"; 5]);
    assert_eq!(sm.current_state(), a);

    world.log.clear();
    world.ready = true;
    sm.act(&ctx(5), 1, &mut world);
    assert_eq!(world.log, vec!["a.act", "a.exit", "b.enter"]);
    assert_eq!(sm.current_state(), b);

    world.log.clear();
    sm.act(&ctx(6), 1, &mut world);
    sm.act(&ctx(7), 1, &mut world);
    assert_eq!(world.log, vec!["b.act", "b.act"]);
}

#[test]
fn first_matching_edge_wins_and_later_edges_are_not_polled() {
    let mut sm = StateMachine::new();
    let a = sm.add_state(Named("a"));
    let b = sm.add_state(Named("b"));
    let c = sm.add_state(Named("c"));
    sm.add_transition(Condition::new(|_: f32, _: u64, _: &RecordingWorld| true), a, b);
    sm.add_transition(
        Condition::new(|_: f32, _: u64, _: &RecordingWorld| -> bool {
            panic!("must not be polled")
        }),
        a,
        c,
    );

    let mut world = RecordingWorld::default();
    sm.act(&ctx(0), 1, &mut world);
    assert_eq!(sm.current_state(), b);
}

#[test]
fn only_edges_from_the_current_state_are_checked() {
    let mut sm = StateMachine::new();
    let a = sm.add_state(Named("a"));
    let b = sm.add_state(Named("b"));
    sm.add_transition(Condition::new(|_: f32, _: u64, _: &RecordingWorld| true), b, a);

    let mut world = RecordingWorld::default();
    for tick in 0..3 {
        sm.act(&ctx(tick), 1, &mut world);
    }
    assert_eq!(sm.current_state(), a);
    assert_eq!(sm.transition_count(b), 1);
}

#[test]
fn elapsed_edges_restart_their_clock_after_firing() {
    let mut sm = StateMachine::new();
    let a = sm.add_state(Named("a"));
    let b = sm.add_state(Named("b"));
    sm.add_transition(Elapsed::new(1.0), a, b);
    sm.add_transition(Elapsed::new(1.0), b, a);

    let mut world = RecordingWorld::default();
    let mut visited = Vec::new();
    for tick in 0..8 {
        sm.act(&ctx(tick), 1, &mut world);
        visited.push(sm.current_state());
    }
    // Each state acts for two ticks, then hands over.
    assert_eq!(visited, vec![a, b, b, a, a, b, b, a]);
}

#[test]
fn nested_machine_runs_inside_a_single_outer_state() {
    let mut inner = StateMachine::new();
    let x = inner.add_state(Named("x"));
    let y = inner.add_state(Named("y"));
    inner.add_transition(Condition::new(ready), x, y);

    let mut outer = StateMachine::new();
    let nested = outer.add_state(NestedState::new(inner));
    let idle = outer.add_state(Named("idle"));
    outer.add_transition(Elapsed::new(2.0), nested, idle);

    let mut world = RecordingWorld::default();
    outer.act(&ctx(0), 1, &mut world);
    world.ready = true;
    outer.act(&ctx(1), 1, &mut world);
    outer.act(&ctx(2), 1, &mut world);
    outer.act(&ctx(3), 1, &mut world);

    assert_eq!(
        world.log,
        vec!["x.act", "x.act", "x.exit", "y.enter", "y.act", "idle.enter", "idle.act"]
    );
    assert_eq!(outer.current_state(), idle);
}

#[test]
fn checked_builder_rejects_unknown_states() {
    let mut sm = StateMachine::<RecordingWorld>::new();
    let a = sm.add_state(Named("a"));
    let err = sm
        .try_add_transition(Condition::new(ready), a, 4)
        .unwrap_err();
    assert_eq!(err, FsmError::StateOutOfRange { index: 4, len: 1 });
    assert_eq!(sm.transition_count(a), 0);
}

#[test]
#[should_panic(expected = "out of range")]
fn unchecked_builder_panics_on_unknown_states() {
    let mut sm = StateMachine::<RecordingWorld>::new();
    sm.add_state(Named("a"));
    sm.add_transition(Condition::new(ready), 2, 0);
}

#[test]
fn empty_machine_is_inert() {
    let mut sm = StateMachine::<RecordingWorld>::new();
    let mut world = RecordingWorld::default();
    sm.act(&ctx(0), 1, &mut world);
    assert!(world.log.is_empty());
    assert_eq!(sm.state_count(), 0);
}
