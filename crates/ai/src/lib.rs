//! Umbrella crate that re-exports the `ai-*` building blocks.
//!
//! Agents own a [`Blackboard`](crate::core::Blackboard) and exactly one strategy: either a finite
//! state machine ([`StateMachine`](crate::fsm::StateMachine)) or a behavior tree
//! ([`BehaviorTree`](crate::bt::BehaviorTree)), optionally with
//! [`UtilitySelector`](crate::utility::UtilitySelector) nodes inside it. The grid crate supplies
//! the world traits and spatial queries the bundled states and leaves are written against.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use ai_core as core;

#[cfg(feature = "grid")]
#[cfg_attr(docsrs, doc(cfg(feature = "grid")))]
pub use ai_grid as grid;

#[cfg(feature = "fsm")]
#[cfg_attr(docsrs, doc(cfg(feature = "fsm")))]
pub use ai_fsm as fsm;

#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub use ai_bt as bt;

#[cfg(feature = "utility")]
#[cfg_attr(docsrs, doc(cfg(feature = "utility")))]
pub use ai_utility as utility;

#[cfg(doc)]
pub mod guides {
    #![allow(clippy::all)]

    #[doc = include_str!("../../../docs/guides/decision-making.md")]
    pub mod decision_making {}
}
