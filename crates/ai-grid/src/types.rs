#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance_sq(self, other: Position) -> f32 {
        let dx = (other.x - self.x) as f32;
        let dy = (other.y - self.y) as f32;
        dx * dx + dy * dy
    }

    /// Euclidean distance.
    pub fn distance(self, other: Position) -> f32 {
        self.distance_sq(other).sqrt()
    }

    /// The cell reached by performing `action` from here. Non-move actions stay in place.
    pub fn step(self, action: AgentAction) -> Position {
        match action {
            AgentAction::MoveLeft => Position::new(self.x - 1, self.y),
            AgentAction::MoveRight => Position::new(self.x + 1, self.y),
            AgentAction::MoveUp => Position::new(self.x, self.y + 1),
            AgentAction::MoveDown => Position::new(self.x, self.y - 1),
            AgentAction::Nop | AgentAction::Attack | AgentAction::HealSelf => self,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Team(pub u32);

/// Packed ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color(pub u32);

impl Color {
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32))
    }
}

/// The single pending action an agent intends to perform this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AgentAction {
    #[default]
    Nop,
    MoveLeft,
    MoveRight,
    MoveDown,
    MoveUp,
    Attack,
    HealSelf,
}

impl AgentAction {
    /// The four moves, in the order random walks sample them.
    pub const MOVES: [AgentAction; 4] = [
        AgentAction::MoveLeft,
        AgentAction::MoveRight,
        AgentAction::MoveDown,
        AgentAction::MoveUp,
    ];

    pub fn is_move(self) -> bool {
        Self::MOVES.contains(&self)
    }

    /// The opposite move; non-moves map to themselves.
    pub fn inverse(self) -> AgentAction {
        match self {
            AgentAction::MoveLeft => AgentAction::MoveRight,
            AgentAction::MoveRight => AgentAction::MoveLeft,
            AgentAction::MoveUp => AgentAction::MoveDown,
            AgentAction::MoveDown => AgentAction::MoveUp,
            other => other,
        }
    }
}
