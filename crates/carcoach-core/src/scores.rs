//! Append-only quiz score log.
//!
//! One record per line, `name,score/total`, no header.

use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScoreLogError;

/// Returned by [`ScoreLog::read`] when nothing has been logged yet.
pub const NO_SCORES: &str = "No past scores yet.";

/// A single logged quiz result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub score: u32,
    pub total: u32,
}

impl fmt::Display for ScoreRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}/{}", self.name, self.score, self.total)
    }
}

impl FromStr for ScoreRecord {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (name, result) = line
            .rsplit_once(',')
            .ok_or_else(|| format!("missing ',' in score line: {line}"))?;
        let (score, total) = result
            .split_once('/')
            .ok_or_else(|| format!("missing '/' in score line: {line}"))?;

        let parse = |v: &str| {
            v.trim()
                .parse::<u32>()
                .map_err(|_| format!("invalid number '{}' in score line: {line}", v.trim()))
        };

        Ok(ScoreRecord {
            name: name.to_string(),
            score: parse(score)?,
            total: parse(total)?,
        })
    }
}

/// A score log file on disk.
#[derive(Debug, Clone)]
pub struct ScoreLog {
    path: PathBuf,
}

impl ScoreLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one `name,score/total` line, creating the file and its
    /// parent directories if needed.
    ///
    /// Line breaks in `name` are written as spaces so every record stays on
    /// one line.
    pub fn append(&self, name: &str, score: u32, total: u32) -> Result<(), ScoreLogError> {
        let record = ScoreRecord {
            name: name.to_string(),
            score,
            total,
        };
        self.append_record(&record)
    }

    pub fn append_record(&self, record: &ScoreRecord) -> Result<(), ScoreLogError> {
        self.write_line(record).map_err(|source| self.io_error(source))?;
        tracing::info!("recorded score {} in {}", record, self.path.display());
        Ok(())
    }

    fn write_line(&self, record: &ScoreRecord) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let name = record.name.replace(['\r', '\n'], " ");
        writeln!(file, "{name},{}/{}", record.score, record.total)
    }

    /// The raw log contents, trimmed, or [`NO_SCORES`] if the log is absent
    /// or empty.
    pub fn read(&self) -> Result<String, ScoreLogError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let trimmed = content.trim();
                if trimmed.is_empty() {
                    Ok(NO_SCORES.to_string())
                } else {
                    Ok(trimmed.to_string())
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(NO_SCORES.to_string()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    /// Parsed records, skipping lines that do not match the log format.
    pub fn records(&self) -> Result<Vec<ScoreRecord>, ScoreLogError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        Ok(content
            .lines()
            .filter(|l| !l.trim().is_empty())
            .filter_map(|l| match l.parse::<ScoreRecord>() {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("{e}");
                    None
                }
            })
            .collect())
    }

    fn io_error(&self, source: io::Error) -> ScoreLogError {
        ScoreLogError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Append a score line to the log at `path`.
pub fn append_score(path: &Path, name: &str, score: u32, total: u32) -> Result<(), ScoreLogError> {
    ScoreLog::new(path).append(name, score, total)
}

/// Read the score log at `path` verbatim.
pub fn read_scores(path: &Path) -> Result<String, ScoreLogError> {
    ScoreLog::new(path).read()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_before_append_is_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz_results.txt");
        assert_eq!(read_scores(&path).unwrap(), NO_SCORES);
    }

    #[test]
    fn empty_file_is_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz_results.txt");
        std::fs::write(&path, "\n\n").unwrap();
        assert_eq!(read_scores(&path).unwrap(), NO_SCORES);
    }

    #[test]
    fn appends_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz_results.txt");

        append_score(&path, "Ana", 4, 5).unwrap();
        append_score(&path, "Ben", 2, 5).unwrap();

        assert_eq!(read_scores(&path).unwrap(), "Ana,4/5\nBen,2/5");
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Ana,4/5\nBen,2/5\n"
        );
    }

    #[test]
    fn line_breaks_in_name_stay_on_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz_results.txt");
        let log = ScoreLog::new(&path);

        log.append("Ana\nBen,5/5", 3, 5).unwrap();
        log.append("Cy\r\n", 1, 5).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Ana Ben,5/5,3/5\nCy  ,1/5\n"
        );
        let records = log.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Ana Ben,5/5");
        assert_eq!(records[0].score, 3);
        assert_eq!(records[1].name, "Cy  ");
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data/quiz_results.txt");

        append_score(&path, "Ana", 5, 5).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn record_parsing() {
        let record: ScoreRecord = "Mary, Jane,3/5".parse().unwrap();
        assert_eq!(record.name, "Mary, Jane");
        assert_eq!(record.score, 3);
        assert_eq!(record.total, 5);
        assert_eq!(record.to_string(), "Mary, Jane,3/5");

        assert!("no separator".parse::<ScoreRecord>().is_err());
        assert!("Ana,3-5".parse::<ScoreRecord>().is_err());
        assert!("Ana,x/5".parse::<ScoreRecord>().is_err());
    }

    #[test]
    fn records_skip_bad_lines() {
        let dir = tempfile::tempdir().unwrap();
        let log = ScoreLog::new(dir.path().join("quiz_results.txt"));
        assert!(log.records().unwrap().is_empty());

        log.append("Ana", 4, 5).unwrap();
        std::fs::OpenOptions::new()
            .append(true)
            .open(log.path())
            .unwrap()
            .write_all(b"garbage\n")
            .unwrap();
        log.append("Ben", 1, 3).unwrap();

        let records = log.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "Ben");
        assert_eq!(records[1].total, 3);
    }
}
