//! Hierarchical finite-state machines built on `ai-core`.
//!
//! A [`StateMachine`] owns its states and a per-state list of guarded edges. Each tick the current
//! state acts, then its outgoing edges are polled in registration order and the first available
//! one switches state. [`NestedState`] wraps a whole machine as a single state.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod error;
pub mod machine;
pub mod predicates;
pub mod state;
pub mod states;
pub mod transition;

pub use error::FsmError;
pub use machine::StateMachine;
pub use predicates::{
    ArrivedAtEntity, ArrivedAtPos, Elapsed, EnemyAvailable, EnemyReachable, HitpointsLessThan,
};
pub use state::{NestedState, State};
pub use states::{
    AttackEnemy, Blink, FleeFromEnemy, GoToPos, Healing, MoveToEnemy, MoveToEntity, Nop, Patrol,
};
pub use transition::{And, Condition, Not, Transition, TransitionPredicate};
