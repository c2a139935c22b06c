//! Data file configuration.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that moves every data file into one directory.
pub const DATA_DIR_ENV: &str = "CARCOACH_DATA_DIR";

/// Locations of the three data files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPaths {
    /// Glossary of car facts.
    #[serde(default = "default_facts")]
    pub facts: PathBuf,
    /// Multiple-choice question bank.
    #[serde(default = "default_quiz_bank")]
    pub quiz_bank: PathBuf,
    /// Append-only score log.
    #[serde(default = "default_scores")]
    pub scores: PathBuf,
}

fn default_facts() -> PathBuf {
    PathBuf::from("data/car_facts.txt")
}
fn default_quiz_bank() -> PathBuf {
    PathBuf::from("data/quiz_bank.txt")
}
fn default_scores() -> PathBuf {
    PathBuf::from("data/quiz_results.txt")
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            facts: default_facts(),
            quiz_bank: default_quiz_bank(),
            scores: default_scores(),
        }
    }
}

impl DataPaths {
    /// Keep each file name but place it under `dir`.
    pub fn rebase(&self, dir: &Path) -> Self {
        let under = |p: &Path, fallback: &str| {
            dir.join(p.file_name().unwrap_or_else(|| OsStr::new(fallback)))
        };
        Self {
            facts: under(&self.facts, "car_facts.txt"),
            quiz_bank: under(&self.quiz_bank, "quiz_bank.txt"),
            scores: under(&self.scores, "quiz_results.txt"),
        }
    }
}

/// Top-level carcoach configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarcoachConfig {
    #[serde(default)]
    pub data: DataPaths,
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without an explicit path:
/// 1. `carcoach.toml` in the current directory
/// 2. `~/.config/carcoach/config.toml`
///
/// `CARCOACH_DATA_DIR` rebases every data file onto that directory.
pub fn load_config_from(path: Option<&Path>) -> Result<CarcoachConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("carcoach.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<CarcoachConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("using config {}", path.display());
            config
        }
        None => CarcoachConfig::default(),
    };

    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if dir.trim().is_empty() {
            tracing::warn!("{DATA_DIR_ENV} is set but empty, ignoring");
        } else {
            config.data = config.data.rebase(Path::new(&dir));
        }
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("carcoach"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = CarcoachConfig::default();
        assert_eq!(config.data.facts, PathBuf::from("data/car_facts.txt"));
        assert_eq!(config.data.quiz_bank, PathBuf::from("data/quiz_bank.txt"));
        assert_eq!(config.data.scores, PathBuf::from("data/quiz_results.txt"));
    }

    #[test]
    fn parse_partial_config() {
        let toml_str = r#"
[data]
scores = "/var/lib/carcoach/scores.txt"
"#;
        let config: CarcoachConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.data.scores, PathBuf::from("/var/lib/carcoach/scores.txt"));
        assert_eq!(config.data.facts, PathBuf::from("data/car_facts.txt"));
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: CarcoachConfig = toml::from_str("").unwrap();
        assert_eq!(config, CarcoachConfig::default());
    }

    #[test]
    fn rebase_keeps_file_names() {
        let paths = DataPaths {
            facts: PathBuf::from("a/b/facts.txt"),
            ..DataPaths::default()
        };
        let rebased = paths.rebase(Path::new("/tmp/cc"));
        assert_eq!(rebased.facts, PathBuf::from("/tmp/cc/facts.txt"));
        assert_eq!(rebased.quiz_bank, PathBuf::from("/tmp/cc/quiz_bank.txt"));
    }

    #[test]
    fn explicit_config_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("carcoach.toml");
        std::fs::write(&path, "[data]\nfacts = \"glossary.txt\"\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert!(config.data.facts.ends_with("glossary.txt"));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let err = load_config_from(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("carcoach.toml");
        std::fs::write(&path, "[data\nfacts = ").unwrap();
        assert!(load_config_from(Some(&path)).is_err());
    }
}
