use crate::error::RenkoError;
use crate::renko::builder::DEFAULT_MAX_BRICKS_PER_TICK;

/// Build `(open, close)` brick prices from a whole price series at once.
///
/// Unlike [`BrickBuilder`](crate::renko::builder::BrickBuilder) the anchor is
/// `prices[0]` as-is, with no grid snap, no timestamps and no borders. Each
/// price is compared against the running anchor and whole bricks are stepped
/// off in the direction of the move.
pub fn build_from_series(prices: &[i64], brick_size: i64) -> Result<Vec<(i64, i64)>, RenkoError> {
    build_from_series_with_limit(prices, brick_size, DEFAULT_MAX_BRICKS_PER_TICK)
}

pub fn build_from_series_with_limit(
    prices: &[i64],
    brick_size: i64,
    max_bricks_per_step: usize,
) -> Result<Vec<(i64, i64)>, RenkoError> {
    if brick_size <= 0 {
        return Err(RenkoError::InvalidConfig(format!(
            "brick_size must be > 0, got {}",
            brick_size
        )));
    }
    let Some(&first) = prices.first() else {
        return Ok(Vec::new());
    };

    let mut out: Vec<(i64, i64)> = Vec::new();
    let mut last = first;
    for &price in prices {
        let change = i128::from(price) - i128::from(last);
        let num_bricks = change.abs() / i128::from(brick_size);
        if num_bricks == 0 {
            continue;
        }
        let over_limit = num_bricks > max_bricks_per_step as i128;
        if over_limit || out.try_reserve(num_bricks as usize).is_err() {
            tracing::warn!(
                price,
                anchor = last,
                required = %num_bricks,
                limit = max_bricks_per_step,
                "Rejected series step: too many bricks"
            );
            return Err(RenkoError::ExcessiveBrickCount {
                required: num_bricks as u128,
                limit: max_bricks_per_step,
            });
        }
        let step = if change > 0 { brick_size } else { -brick_size };
        for _ in 0..num_bricks {
            let close = last + step;
            out.push((last, close));
            last = close;
        }
    }
    Ok(out)
}
