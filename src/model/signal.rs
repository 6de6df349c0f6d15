use serde::{Deserialize, Serialize};

use super::brick::Direction;

/// Direction reported by a single `add_tick` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    Down,
    Neutral,
    Up,
}

impl Signal {
    pub fn as_i8(self) -> i8 {
        match self {
            Signal::Down => -1,
            Signal::Neutral => 0,
            Signal::Up => 1,
        }
    }
}

impl From<Signal> for i8 {
    fn from(signal: Signal) -> Self {
        signal.as_i8()
    }
}

impl From<Direction> for Signal {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Signal::Up,
            Direction::Down => Signal::Down,
        }
    }
}
