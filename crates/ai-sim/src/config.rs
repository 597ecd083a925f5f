//! Scenario loading.

use std::path::Path;

use ai_grid::{Position, Team};
use ai_utility::UtilitySelectorConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const BUILTIN_SCENARIO: &str = include_str!("../scenarios/arena.yaml");

/// A whole scenario: run parameters plus everything spawned at tick 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Number of turns to run
    #[serde(default = "default_ticks")]
    pub ticks: u64,

    /// Simulated seconds per turn, fed to FSM edge clocks
    #[serde(default = "default_dt")]
    pub dt_seconds: f32,

    /// Hitpoints restored by a `HealSelf` action
    #[serde(default = "default_heal_amount")]
    pub heal_amount: f32,

    pub agents: Vec<AgentSpec>,

    /// Bases and waypoints
    pub markers: Vec<MarkerSpec>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            ticks: default_ticks(),
            dt_seconds: default_dt(),
            heal_amount: default_heal_amount(),
            agents: Vec::new(),
            markers: Vec::new(),
        }
    }
}

fn default_seed() -> u64 {
    0x5eed
}
fn default_ticks() -> u64 {
    100
}
fn default_dt() -> f32 {
    1.0
}
fn default_heal_amount() -> f32 {
    10.0
}
fn default_hitpoints() -> f32 {
    100.0
}
fn default_melee_damage() -> f32 {
    20.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSpec {
    pub name: String,
    pub position: Position,
    pub team: Team,

    #[serde(default = "default_hitpoints")]
    pub hitpoints: f32,

    #[serde(default = "default_melee_damage")]
    pub melee_damage: f32,

    pub strategy: Strategy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerSpec {
    pub name: String,
    pub position: Position,

    /// Bases are where wounded guards retreat to
    #[serde(default)]
    pub base: bool,
}

/// How an agent decides. The first group are state machines, the rest behavior trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    /// Chase anything that comes close, attack only.
    Attack,
    /// Patrol until wounded, then chase forever.
    Berserk,
    PatrolFlee,
    PatrolAttackFlee,
    PatrolAttackFleeHealing,
    /// Two nested machines: a workshop loop and following `target`, swapping every 10 seconds.
    Crafter { target: String },
    /// Retreat to a base when wounded, otherwise fight or patrol.
    Guard,
    /// Walk a fixed loop of markers.
    Courier { route: Vec<String> },
    /// Pick between fighting, healing and wandering by utility score.
    Utility {
        #[serde(default)]
        selector: UtilitySelectorConfig,
    },
}

impl SimConfig {
    /// Load a scenario from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse scenario from {}", path.display()))?;
        Ok(config)
    }

    /// The scenario shipped with the binary.
    pub fn builtin() -> Result<Self> {
        serde_yaml::from_str(BUILTIN_SCENARIO).context("Failed to parse builtin scenario")
    }
}
