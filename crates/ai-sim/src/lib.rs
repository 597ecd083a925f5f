//! Turn-based grid arena for exercising FSM and behavior-tree agents.
//!
//! A scenario ([`SimConfig`]) lists markers and agents with a [`Strategy`] each.
//! [`Simulation::step`] runs one turn: every agent decides, then all pending actions resolve
//! together.

#![forbid(unsafe_code)]

pub mod agents;
pub mod config;
pub mod sim;

pub use config::{AgentSpec, MarkerSpec, SimConfig, Strategy};
pub use agents::Lookout;
pub use sim::{resolve_actions, Simulation, TurnReport};
