pub mod facts;
pub mod init;
pub mod loan;
pub mod quiz;
pub mod scores;

use std::path::Path;

use anyhow::Result;

use carcoach_core::config::{load_config_from, DataPaths};

/// Resolve data file locations from the config and `--data-dir`.
pub fn data_paths(config: Option<&Path>, data_dir: Option<&Path>) -> Result<DataPaths> {
    let config = load_config_from(config)?;
    let paths = match data_dir {
        Some(dir) => config.data.rebase(dir),
        None => config.data,
    };
    tracing::debug!(
        "facts: {}, quiz bank: {}, scores: {}",
        paths.facts.display(),
        paths.quiz_bank.display(),
        paths.scores.display()
    );
    Ok(paths)
}
