//! Incremental Renko brick construction from timestamped price ticks.

pub mod config;
pub mod error;
pub mod model;
pub mod renko;
pub mod telemetry;

pub use error::RenkoError;
pub use model::brick::{Brick, Direction};
pub use model::signal::Signal;
pub use model::tick::Tick;
pub use renko::{build_from_series, BrickBuilder, RenkoSnapshot};
