use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// `+1` for up bricks, `-1` for down bricks.
    pub fn sign(self) -> i64 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }

    /// Direction of a non-zero price change. Zero has no direction.
    pub fn from_delta(delta: i64) -> Option<Self> {
        match delta.signum() {
            1 => Some(Direction::Up),
            -1 => Some(Direction::Down),
            _ => None,
        }
    }
}

/// A completed Renko brick. Prices are fixed-point ticks, timestamps are
/// milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    pub open_timestamp: u64,
    pub close_timestamp: u64,
    pub open_price: i64,
    pub close_price: i64,
    pub direction: Direction,
    /// Price of the tick that completed this brick.
    pub source_price: i64,
}

impl Brick {
    pub fn is_up(&self) -> bool {
        self.direction == Direction::Up
    }

    pub fn height(&self) -> i64 {
        (self.close_price - self.open_price).abs()
    }

    pub fn duration_ms(&self) -> u64 {
        self.close_timestamp.saturating_sub(self.open_timestamp)
    }

    pub fn open_time(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.open_timestamp)
    }

    pub fn close_time(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.close_timestamp)
    }
}

fn millis_to_datetime(ms: u64) -> Option<DateTime<Utc>> {
    i64::try_from(ms)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
}
