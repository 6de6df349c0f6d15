use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenkoError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("tick requires {required} bricks, limit is {limit}")]
    ExcessiveBrickCount { required: u128, limit: usize },

    #[error("price {price} is outside the representable brick grid")]
    PriceOutOfRange { price: i64 },

    #[error("price {0} cannot be converted to fixed-point ticks")]
    InvalidPrice(f64),
}
