//! Deterministic, engine-agnostic decision kernel primitives.
//!
//! Every agent owns one [`Blackboard`] and exactly one decision strategy (a [`Policy`]). The
//! surrounding turn loop evaluates each agent's strategy once per tick via [`tick_brains`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod blackboard;
pub mod brain;
pub mod policy;
pub mod rng;
pub mod tick;
pub mod world;

pub use agent::AgentId;
pub use blackboard::{BbKey, BbValue, Blackboard};
pub use brain::{tick_brains, Brain};
pub use policy::Policy;
pub use rng::{DeterministicRng, SplitMix64};
pub use tick::TickContext;
pub use world::{WorldMut, WorldView};
