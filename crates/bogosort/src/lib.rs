//! bogosort: sort a list of integers by shuffling it until it happens to be
//! sorted.
//!
//! This crate wires [`bogosort_core`] to a [`Config`] and a seeded RNG; the
//! `bogosort` binary prints the sequence before and after.

pub mod config;

use bogosort_core::{SortError, SortOptions, SortReport, bogo_sort};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

pub use bogosort_core::ShuffleStrategy;
pub use config::{Config, ConfigError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Sort(#[from] SortError),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub before: Vec<i64>,
    pub after: Vec<i64>,
    /// The seed the shuffle RNG was created from, drawn at random if the
    /// config had none.
    pub seed: u64,
    pub report: SortReport,
}

/// Sorts `config.values` with a single RNG seeded from `config.seed`.
pub fn run(config: &Config) -> Result<Run> {
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(seed, strategy = ?config.shuffle, "seeding shuffle rng");
    let mut rng = StdRng::seed_from_u64(seed);

    let options = SortOptions {
        strategy: config.shuffle,
        max_shuffles: config.max_shuffles,
    };
    let mut after = config.values.clone();
    let report = bogo_sort(&mut after, &mut rng, &options)?;

    Ok(Run {
        before: config.values.clone(),
        after,
        seed,
        report,
    })
}
