//! Utility AI selection for behavior trees.
//!
//! A [`UtilitySelector`] scores its children every tick and runs the most desirable one, either in
//! strict score order or by sampling proportionally to score. The previous winner gets a decaying
//! score bonus so agents neither flip-flop between near-equal options nor lock in forever.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod selector;

pub use config::{SelectionMode, UtilitySelectorConfig};
pub use selector::{utility_selector, weighted_pick, UtilityChild, UtilitySelector};
