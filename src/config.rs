use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::RenkoError;
use crate::model::price::PriceScale;
use crate::renko::builder::DEFAULT_MAX_BRICKS_PER_TICK;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub renko: RenkoConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenkoConfig {
    /// Brick size in price units, scaled by `price_decimals`.
    pub brick_size: f64,
    #[serde(default)]
    pub half_point: bool,
    #[serde(default = "default_max_bricks_per_tick")]
    pub max_bricks_per_tick: usize,
    #[serde(default)]
    pub price_decimals: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

fn default_max_bricks_per_tick() -> usize {
    DEFAULT_MAX_BRICKS_PER_TICK
}

impl RenkoConfig {
    pub fn price_scale(&self) -> Result<PriceScale, RenkoError> {
        PriceScale::new(self.price_decimals)
    }

    /// Brick size converted to fixed-point ticks.
    pub fn brick_size_ticks(&self) -> Result<i64, RenkoError> {
        self.price_scale()?.to_ticks(self.brick_size)
    }

    pub fn validate(&self) -> Result<()> {
        let ticks = self
            .brick_size_ticks()
            .context("renko.brick_size is invalid")?;
        if ticks <= 0 {
            bail!(
                "renko.brick_size {} rounds to {} ticks at {} decimals, must be > 0",
                self.brick_size,
                ticks,
                self.price_decimals
            );
        }
        if self.max_bricks_per_tick == 0 {
            bail!("renko.max_bricks_per_tick must be > 0");
        }
        Ok(())
    }
}

fn config_path() -> PathBuf {
    std::env::var("RENKO_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config/default.toml"))
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).context("failed to parse renko config")?;
        config.renko.validate()?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&config_str).with_context(|| format!("in {}", path.display()))
    }

    /// Load from `RENKO_CONFIG_PATH`, falling back to `config/default.toml`.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::load_from_path(&config_path())
    }
}
