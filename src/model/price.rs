use crate::error::RenkoError;

pub const MAX_PRICE_DECIMALS: u32 = 18;

/// Converts between decimal prices and integer ticks at a fixed number of
/// decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriceScale {
    decimals: u32,
}

impl PriceScale {
    pub fn new(decimals: u32) -> Result<Self, RenkoError> {
        if decimals > MAX_PRICE_DECIMALS {
            return Err(RenkoError::InvalidConfig(format!(
                "price_decimals must be <= {}, got {}",
                MAX_PRICE_DECIMALS, decimals
            )));
        }
        Ok(Self { decimals })
    }

    /// Ticks per whole price unit.
    pub fn factor(&self) -> i64 {
        10_i64.pow(self.decimals)
    }

    /// Round to the nearest tick, halves away from zero.
    pub fn to_ticks(&self, price: f64) -> Result<i64, RenkoError> {
        if !price.is_finite() {
            return Err(RenkoError::InvalidPrice(price));
        }
        let scaled = (price * self.factor() as f64).round();
        // i64::MAX as f64 rounds up to 2^63, which is itself out of range
        if scaled >= i64::MAX as f64 || scaled < i64::MIN as f64 {
            return Err(RenkoError::InvalidPrice(price));
        }
        Ok(scaled as i64)
    }

    pub fn from_ticks(&self, ticks: i64) -> f64 {
        ticks as f64 / self.factor() as f64
    }
}
