pub mod brick;
pub mod price;
pub mod signal;
pub mod tick;
