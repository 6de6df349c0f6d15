pub mod batch;
pub mod builder;

pub use batch::{build_from_series, build_from_series_with_limit};
pub use builder::{BrickBuilder, RenkoSnapshot, DEFAULT_MAX_BRICKS_PER_TICK};
