/// A single trade price observation in fixed-point ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub timestamp_ms: u64,
    pub price: i64,
}

impl Tick {
    pub fn new(timestamp_ms: u64, price: i64) -> Self {
        Self {
            timestamp_ms,
            price,
        }
    }
}

impl From<(u64, i64)> for Tick {
    fn from((timestamp_ms, price): (u64, i64)) -> Self {
        Self::new(timestamp_ms, price)
    }
}
