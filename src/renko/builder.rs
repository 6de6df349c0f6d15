use serde::{Deserialize, Serialize};

use crate::config::RenkoConfig;
use crate::error::RenkoError;
use crate::model::brick::{Brick, Direction};
use crate::model::signal::Signal;
use crate::model::tick::Tick;

pub const DEFAULT_MAX_BRICKS_PER_TICK: usize = 10_000;

/// Incrementally turns ticks into fixed-size Renko bricks.
///
/// The first tick only sets the anchor: its price is snapped down to the
/// brick grid (plus half a brick in half-point mode). Every later tick that
/// reaches a border emits as many whole bricks as fit between the anchor and
/// the tick price. The grid is never re-snapped after that.
#[derive(Debug, Clone)]
pub struct BrickBuilder {
    brick_size: i64,
    half_point: bool,
    max_bricks_per_tick: usize,
    initialized: bool,
    last_brick_close: i64,
    up_border: i64,
    down_border: i64,
    last_brick_timestamp: u64,
    bricks: Vec<Brick>,
}

/// Read-only copy of the builder state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenkoSnapshot {
    pub brick_size: i64,
    pub half_point: bool,
    pub initialized: bool,
    pub last_brick_close: Option<i64>,
    pub up_border: Option<i64>,
    pub down_border: Option<i64>,
    pub last_brick_timestamp: Option<u64>,
    pub bricks: Vec<Brick>,
}

impl BrickBuilder {
    pub fn new(brick_size: i64, half_point: bool) -> Result<Self, RenkoError> {
        if brick_size <= 0 {
            return Err(RenkoError::InvalidConfig(format!(
                "brick_size must be > 0, got {}",
                brick_size
            )));
        }
        Ok(Self {
            brick_size,
            half_point,
            max_bricks_per_tick: DEFAULT_MAX_BRICKS_PER_TICK,
            initialized: false,
            last_brick_close: 0,
            up_border: 0,
            down_border: 0,
            last_brick_timestamp: 0,
            bricks: Vec::new(),
        })
    }

    pub fn from_config(config: &RenkoConfig) -> Result<Self, RenkoError> {
        let brick_size = config.brick_size_ticks()?;
        Self::new(brick_size, config.half_point)?
            .with_max_bricks_per_tick(config.max_bricks_per_tick)
    }

    /// Cap the number of bricks a single tick may produce.
    pub fn with_max_bricks_per_tick(mut self, limit: usize) -> Result<Self, RenkoError> {
        if limit == 0 {
            return Err(RenkoError::InvalidConfig(
                "max_bricks_per_tick must be > 0".to_string(),
            ));
        }
        self.max_bricks_per_tick = limit;
        Ok(self)
    }

    pub fn on_tick(&mut self, tick: &Tick) -> Result<Signal, RenkoError> {
        self.add_tick(tick.timestamp_ms, tick.price)
    }

    /// Feed one tick. Returns `Up`/`Down` when bricks were emitted, otherwise
    /// `Neutral`. On error the builder is left unchanged.
    pub fn add_tick(&mut self, timestamp: u64, price: i64) -> Result<Signal, RenkoError> {
        if !self.initialized {
            self.initialize(timestamp, price)?;
            return Ok(Signal::Neutral);
        }

        let direction = if price >= self.up_border {
            Direction::Up
        } else if price <= self.down_border {
            Direction::Down
        } else {
            return Ok(Signal::Neutral);
        };

        // Widened so that extreme price jumps cannot overflow.
        let delta = (i128::from(price) - i128::from(self.last_brick_close)).abs();
        let num_bricks = delta / i128::from(self.brick_size);
        debug_assert!(num_bricks >= 1);

        if num_bricks > self.max_bricks_per_tick as i128 {
            tracing::warn!(
                price,
                anchor = self.last_brick_close,
                required = %num_bricks,
                limit = self.max_bricks_per_tick,
                "Rejected tick: too many bricks"
            );
            return Err(RenkoError::ExcessiveBrickCount {
                required: num_bricks as u128,
                limit: self.max_bricks_per_tick,
            });
        }

        let step = direction.sign() * self.brick_size;
        // Lies between the current anchor and `price`, so it fits in i64.
        let final_close =
            (i128::from(self.last_brick_close) + num_bricks * i128::from(step)) as i64;
        let Some((down_border, up_border)) = self.borders_around(final_close) else {
            tracing::warn!(price, final_close, "Rejected tick: borders overflow");
            return Err(RenkoError::PriceOutOfRange { price });
        };

        if self.bricks.try_reserve(num_bricks as usize).is_err() {
            tracing::warn!(
                price,
                anchor = self.last_brick_close,
                required = %num_bricks,
                "Rejected tick: brick storage cannot grow"
            );
            return Err(RenkoError::ExcessiveBrickCount {
                required: num_bricks as u128,
                limit: self.max_bricks_per_tick,
            });
        }
        for _ in 0..num_bricks {
            let open_price = self.last_brick_close;
            let close_price = open_price + step;
            self.bricks.push(Brick {
                open_timestamp: self.last_brick_timestamp,
                close_timestamp: timestamp,
                open_price,
                close_price,
                direction,
                source_price: price,
            });
            self.last_brick_timestamp = timestamp;
            self.last_brick_close = close_price;
        }
        self.up_border = up_border;
        self.down_border = down_border;

        tracing::debug!(
            ?direction,
            count = %num_bricks,
            anchor = self.last_brick_close,
            timestamp,
            "Renko bricks emitted"
        );
        Ok(Signal::from(direction))
    }

    fn initialize(&mut self, timestamp: u64, price: i64) -> Result<(), RenkoError> {
        let offset = if self.half_point {
            self.brick_size / 2
        } else {
            0
        };
        // div_euclid floors toward negative infinity for a positive divisor.
        let anchor = price
            .div_euclid(self.brick_size)
            .checked_mul(self.brick_size)
            .and_then(|grid| grid.checked_add(offset));
        let Some((anchor, (down_border, up_border))) =
            anchor.and_then(|a| self.borders_around(a).map(|borders| (a, borders)))
        else {
            tracing::warn!(price, "Rejected first tick: anchor outside price range");
            return Err(RenkoError::PriceOutOfRange { price });
        };

        self.last_brick_close = anchor;
        self.up_border = up_border;
        self.down_border = down_border;
        self.last_brick_timestamp = timestamp;
        self.initialized = true;

        tracing::debug!(
            price,
            anchor,
            down_border,
            up_border,
            half_point = self.half_point,
            "Renko anchor initialized"
        );
        Ok(())
    }

    fn borders_around(&self, anchor: i64) -> Option<(i64, i64)> {
        Some((
            anchor.checked_sub(self.brick_size)?,
            anchor.checked_add(self.brick_size)?,
        ))
    }

    pub fn brick_size(&self) -> i64 {
        self.brick_size
    }

    pub fn half_point(&self) -> bool {
        self.half_point
    }

    pub fn max_bricks_per_tick(&self) -> usize {
        self.max_bricks_per_tick
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn last_brick_close(&self) -> Option<i64> {
        self.initialized.then_some(self.last_brick_close)
    }

    pub fn up_border(&self) -> Option<i64> {
        self.initialized.then_some(self.up_border)
    }

    pub fn down_border(&self) -> Option<i64> {
        self.initialized.then_some(self.down_border)
    }

    pub fn last_brick_timestamp(&self) -> Option<u64> {
        self.initialized.then_some(self.last_brick_timestamp)
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    /// Bricks appended after the first `from` bricks. Lets a caller keep a
    /// cursor and pick up only what a tick produced.
    pub fn bricks_since(&self, from: usize) -> &[Brick] {
        &self.bricks[from.min(self.bricks.len())..]
    }

    pub fn last_brick(&self) -> Option<&Brick> {
        self.bricks.last()
    }

    pub fn snapshot(&self) -> RenkoSnapshot {
        RenkoSnapshot {
            brick_size: self.brick_size,
            half_point: self.half_point,
            initialized: self.initialized,
            last_brick_close: self.last_brick_close(),
            up_border: self.up_border(),
            down_border: self.down_border(),
            last_brick_timestamp: self.last_brick_timestamp(),
            bricks: self.bricks.clone(),
        }
    }
}
