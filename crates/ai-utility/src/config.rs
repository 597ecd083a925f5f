#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SelectionMode {
    /// Try children from highest to lowest adjusted score.
    Deterministic,
    /// Sample children with probability proportional to adjusted score.
    #[default]
    WeightedRandom,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UtilitySelectorConfig {
    /// Bonus coefficient given to a child the first tick after it wins.
    ///
    /// While the same child keeps winning the coefficient is multiplied by this value each tick,
    /// so the bonus decays geometrically toward zero.
    pub cooldown: f32,
    pub mode: SelectionMode,
}

impl Default for UtilitySelectorConfig {
    fn default() -> Self {
        Self {
            cooldown: 0.1,
            mode: SelectionMode::default(),
        }
    }
}
