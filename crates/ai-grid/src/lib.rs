//! Grid-world primitives shared by the FSM and behavior-tree catalogs.
//!
//! Decision nodes only see the world through [`GridWorldView`] / [`GridWorldMut`]; [`GridArena`]
//! is a small in-memory implementation for tests and demos.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod arena;
pub mod query;
pub mod types;
pub mod world;

pub use arena::{Body, GridArena};
pub use query::{enemy_within, move_towards, nearest_base, nearest_enemy, Nearest};
pub use types::{AgentAction, Color, Position, Team};
pub use world::{GridWorldMut, GridWorldView};
