//! Strategy factories: one function per agent archetype.

use ai_bt::{
    fallback, find_base, find_enemy, flee, get_next_waypoint, is_low_hp, is_safe, logic_not,
    move_to_entity, parallel, patch_up, patrol, random_walk, selector, sequence, set_random_color,
    BehaviorTree, BtEvent, BtNode, Condition,
};
use ai_core::{Blackboard, Brain, Policy, TickContext};
use ai_fsm::{
    And, ArrivedAtEntity, ArrivedAtPos, Blink, Elapsed, EnemyAvailable, FleeFromEnemy, GoToPos,
    Healing, HitpointsLessThan, MoveToEnemy, MoveToEntity, NestedState, Not, Patrol, StateMachine,
};
use ai_grid::{enemy_within, Color, GridArena, GridWorldView, Position};
use ai_utility::{utility_selector, UtilityChild, UtilitySelectorConfig};

const WORKSHOP_A: Position = Position::new(-5, 5);
const WORKSHOP_B: Position = Position::new(5, -5);

pub fn attack() -> StateMachine<GridArena> {
    let mut sm = StateMachine::new();
    sm.add_state(MoveToEnemy);
    sm
}

pub fn berserk() -> StateMachine<GridArena> {
    let mut sm = StateMachine::new();
    let patrol = sm.add_state(Patrol::new(3.0));
    let chase = sm.add_state(MoveToEnemy);
    sm.add_transition(HitpointsLessThan::new(60.0), patrol, chase);
    sm
}

pub fn patrol_flee() -> StateMachine<GridArena> {
    let mut sm = StateMachine::new();
    let patrol = sm.add_state(Patrol::new(3.0));
    let flee = sm.add_state(FleeFromEnemy);
    sm.add_transition(EnemyAvailable::new(3.0), patrol, flee);
    sm.add_transition(Not::new(EnemyAvailable::new(5.0)), flee, patrol);
    sm
}

pub fn patrol_attack_flee() -> StateMachine<GridArena> {
    let mut sm = StateMachine::new();
    let patrol = sm.add_state(Patrol::new(3.0));
    let chase = sm.add_state(MoveToEnemy);
    let flee = sm.add_state(FleeFromEnemy);

    sm.add_transition(EnemyAvailable::new(3.0), patrol, chase);
    sm.add_transition(Not::new(EnemyAvailable::new(5.0)), chase, patrol);

    sm.add_transition(
        And::new(HitpointsLessThan::new(60.0), EnemyAvailable::new(5.0)),
        chase,
        flee,
    );
    sm.add_transition(
        And::new(HitpointsLessThan::new(60.0), EnemyAvailable::new(3.0)),
        patrol,
        flee,
    );

    sm.add_transition(Not::new(EnemyAvailable::new(7.0)), flee, patrol);
    sm
}

pub fn patrol_attack_flee_healing() -> StateMachine<GridArena> {
    let mut sm = StateMachine::new();
    let patrol = sm.add_state(Patrol::new(3.0));
    let chase = sm.add_state(MoveToEnemy);
    let flee = sm.add_state(FleeFromEnemy);
    let healing = sm.add_state(Healing::new(20.0));

    sm.add_transition(EnemyAvailable::new(3.0), patrol, chase);
    sm.add_transition(Not::new(EnemyAvailable::new(5.0)), chase, patrol);

    sm.add_transition(
        And::new(HitpointsLessThan::new(60.0), EnemyAvailable::new(5.0)),
        chase,
        flee,
    );
    sm.add_transition(
        And::new(HitpointsLessThan::new(60.0), EnemyAvailable::new(3.0)),
        patrol,
        flee,
    );
    sm.add_transition(
        And::new(HitpointsLessThan::new(99.0), EnemyAvailable::new(3.0)),
        healing,
        flee,
    );

    sm.add_transition(
        And::new(
            HitpointsLessThan::new(60.0),
            Not::new(EnemyAvailable::new(5.0)),
        ),
        patrol,
        healing,
    );
    sm.add_transition(Not::new(HitpointsLessThan::new(99.0)), healing, patrol);

    sm.add_transition(Not::new(EnemyAvailable::new(7.0)), flee, patrol);
    sm
}

/// Shuttle between two workshops, blinking at each.
fn workshop_loop() -> StateMachine<GridArena> {
    let mut sm = StateMachine::new();
    let go_a = sm.add_state(GoToPos::new(WORKSHOP_A));
    let blink_a = sm.add_state(Blink::new(Color(0xff00_0000), Color(0xffff_ffff), 2));
    let go_b = sm.add_state(GoToPos::new(WORKSHOP_B));
    let blink_b = sm.add_state(Blink::new(Color(0xffff_0000), Color(0xff00_00ff), 4));

    sm.add_transition(ArrivedAtPos::new(WORKSHOP_A), go_a, blink_a);
    sm.add_transition(Elapsed::new(10.0), blink_a, go_b);
    sm.add_transition(ArrivedAtPos::new(WORKSHOP_B), go_b, blink_b);
    sm.add_transition(Elapsed::new(5.0), blink_b, go_a);
    sm
}

fn follow(target: u64) -> StateMachine<GridArena> {
    let mut sm = StateMachine::new();
    let go = sm.add_state(MoveToEntity::new(target));
    let blink = sm.add_state(Blink::new(Color(0xff00_ff00), Color(0xff00_4400), 2));
    sm.add_transition(ArrivedAtEntity::new(target), go, blink);
    sm
}

pub fn crafter(target: u64) -> StateMachine<GridArena> {
    let mut sm = StateMachine::new();
    let work = sm.add_state(NestedState::new(workshop_loop()));
    let visit = sm.add_state(NestedState::new(follow(target)));
    sm.add_transition(Elapsed::new(10.0), work, visit);
    sm.add_transition(Elapsed::new(10.0), visit, work);
    sm
}

/// Radius a guard's lookout watches for enemies.
pub const GUARD_SIGHT: f32 = 4.0;

/// Drives a tree and tells it, before every update, whether an enemy is in sight.
///
/// `Danger` is raised while an enemy is within `radius` and `Safe` otherwise. Events go to
/// whichever node was active after the previous update.
pub struct Lookout {
    tree: BehaviorTree<GridArena>,
    radius: f32,
    alarmed: bool,
}

impl Lookout {
    pub fn new(tree: BehaviorTree<GridArena>, radius: f32) -> Self {
        Self {
            tree,
            radius,
            alarmed: false,
        }
    }

    pub fn alarmed(&self) -> bool {
        self.alarmed
    }
}

impl Policy<GridArena> for Lookout {
    fn tick(
        &mut self,
        ctx: &TickContext,
        agent: u64,
        world: &mut GridArena,
        blackboard: &mut Blackboard,
    ) {
        let threat = enemy_within(&*world, agent, self.radius);
        if threat != self.alarmed {
            tracing::debug!(agent, tick = ctx.tick, threat, "lookout changed");
            self.alarmed = threat;
        }
        let event = if threat { BtEvent::Danger } else { BtEvent::Safe };
        self.tree.react(ctx, agent, world, blackboard, event);
        self.tree.update(ctx, agent, world, blackboard);
    }
}

/// Patrols around `post`; once the lookout reports danger it engages the nearest enemy.
pub fn guard(bb: &mut Blackboard, post: Position) -> Lookout {
    let tree = BehaviorTree::new(selector(vec![
        sequence(vec![
            is_low_hp(50.0),
            find_base(bb, 30.0, "base"),
            move_to_entity(bb, "base"),
            patch_up(90.0),
        ]),
        sequence(vec![
            is_low_hp(30.0),
            find_enemy(bb, 5.0, "enemy"),
            flee(bb, "enemy"),
        ]),
        sequence(vec![
            logic_not(is_safe(bb)),
            find_enemy(bb, GUARD_SIGHT, "enemy"),
            move_to_entity(bb, "enemy"),
        ]),
        patrol(bb, post, 3.0, "post"),
    ]));
    Lookout::new(tree, GUARD_SIGHT)
}

/// Walks to each stop in turn, picking the next one once the current is reached.
pub fn courier(bb: &mut Blackboard, route: Vec<u64>) -> BehaviorTree<GridArena> {
    let waypoint = bb.register::<u64>("waypoint");
    let heading_somewhere: Box<dyn BtNode<GridArena>> = Box::new(Condition::new(
        move |_: &TickContext, agent: u64, world: &GridArena, bb: &Blackboard| {
            let target = bb.get_safe(waypoint);
            target.is_initialized && world.position(target.value) != world.position(agent)
        },
    ));

    BehaviorTree::new(sequence(vec![
        fallback(vec![
            heading_somewhere,
            get_next_waypoint(bb, route, "waypoint"),
        ]),
        move_to_entity(bb, "waypoint"),
    ]))
}

pub fn utility(bb: &mut Blackboard, config: UtilitySelectorConfig) -> BehaviorTree<GridArena> {
    let fight = UtilityChild::new(
        sequence(vec![find_enemy(bb, 6.0, "enemy"), move_to_entity(bb, "enemy")]),
        |_: &TickContext, agent: u64, world: &GridArena, _: &Blackboard| {
            world.hitpoints(agent).unwrap_or(0.0) * 0.8
        },
    );
    let heal = UtilityChild::new(
        patch_up(100.0),
        |_: &TickContext, agent: u64, world: &GridArena, _: &Blackboard| {
            100.0 - world.hitpoints(agent).unwrap_or(100.0)
        },
    );
    let wander = UtilityChild::new(
        random_walk(),
        |_: &TickContext, _: u64, _: &GridArena, _: &Blackboard| 10.0,
    );

    BehaviorTree::new(parallel(vec![
        set_random_color(0.5),
        utility_selector(vec![fight, heal, wander], config),
    ]))
}

/// Wrap a finished strategy with the blackboard its nodes registered into.
pub fn brain(
    agent: u64,
    blackboard: Blackboard,
    policy: impl Policy<GridArena>,
) -> Brain<GridArena> {
    Brain::with_blackboard(agent, blackboard, Box::new(policy))
}
