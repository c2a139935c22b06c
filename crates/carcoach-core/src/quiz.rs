//! Multiple-choice quiz bank.
//!
//! Bank files hold one question per line:
//!
//! ```text
//! level|prompt|option1|option2|option3|option4|ANSWER
//! ```
//!
//! Lines starting with `#` and blank lines are ignored. Malformed lines are
//! skipped without aborting the load.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Maximum number of options kept per question.
pub const MAX_OPTIONS: usize = 4;

const ANSWER_LETTERS: [char; MAX_OPTIONS] = ['A', 'B', 'C', 'D'];

/// Quiz difficulty bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl Level {
    /// All levels, in bank order.
    pub const ALL: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Easy => write!(f, "easy"),
            Level::Medium => write!(f, "medium"),
            Level::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Level::Easy),
            "medium" => Ok(Level::Medium),
            "hard" => Ok(Level::Hard),
            other => Err(format!("unknown level: {other}")),
        }
    }
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The question text.
    pub prompt: String,
    /// Between two and four answer options, in display order.
    pub options: Vec<String>,
    /// The correct answer letter, `A` through `D`.
    pub answer: char,
}

impl Question {
    /// The letter a user picks to select option `index`.
    ///
    /// Options written as `B) Stop` carry their own letter; otherwise the
    /// letter follows the option's position. Unlabelled options past the
    /// fourth have no letter.
    pub fn option_letter(&self, index: usize) -> Option<String> {
        let option = self.options.get(index)?;
        match option.split_once(')') {
            Some((label, _)) if label.trim().chars().count() == 1 => {
                Some(label.trim().to_uppercase())
            }
            _ => ANSWER_LETTERS.get(index).map(char::to_string),
        }
    }

    /// Returns `true` if `letter` names one of this question's options.
    pub fn has_option(&self, letter: &str) -> bool {
        (0..self.options.len()).any(|i| self.option_letter(i).as_deref() == Some(letter))
    }

    /// Check a user's choice against the stored answer.
    pub fn is_correct(&self, chosen: &str) -> bool {
        let mut chars = chosen.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_ascii_uppercase() == self.answer,
            _ => false,
        }
    }
}

/// Parse one bank line into its level and question.
///
/// Returns `None` for any line that fails validation.
pub fn parse_line(line: &str) -> Option<(Level, Question)> {
    let parts: Vec<&str> = line.trim().split('|').map(str::trim).collect();
    if parts.len() < 4 {
        return None;
    }

    let level: Level = parts[0].parse().ok()?;

    let prompt = parts[1];
    if prompt.is_empty() {
        return None;
    }

    let options: Vec<String> = parts[2..parts.len() - 1]
        .iter()
        .filter(|o| !o.is_empty())
        .take(MAX_OPTIONS)
        .map(|o| o.to_string())
        .collect();
    if options.len() < 2 {
        return None;
    }

    let answer = parts[parts.len() - 1].to_uppercase();
    let mut chars = answer.chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(c), None) if ANSWER_LETTERS.contains(&c) => c,
        _ => return None,
    };

    let question = Question {
        prompt: prompt.to_string(),
        options,
        answer: letter,
    };
    if !question.has_option(&answer) {
        return None;
    }

    Some((level, question))
}

/// Questions grouped by difficulty level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizBank {
    levels: BTreeMap<Level, Vec<Question>>,
}

impl Default for QuizBank {
    fn default() -> Self {
        Self {
            levels: Level::ALL.iter().map(|&l| (l, Vec::new())).collect(),
        }
    }
}

impl QuizBank {
    /// A copy of the questions for `level`.
    ///
    /// Unknown level names give an empty list.
    pub fn questions_by_level(&self, level: &str) -> Vec<Question> {
        level
            .parse::<Level>()
            .map(|l| self.questions(l).to_vec())
            .unwrap_or_default()
    }

    /// Borrow the questions for a level.
    pub fn questions(&self, level: Level) -> &[Question] {
        self.levels.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every question, easy first, then medium, then hard.
    pub fn all_questions(&self) -> Vec<Question> {
        Level::ALL
            .iter()
            .flat_map(|&l| self.questions(l).iter().cloned())
            .collect()
    }

    /// Total number of questions across all levels.
    pub fn len(&self) -> usize {
        self.levels.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, level: Level, question: Question) {
        self.levels.entry(level).or_default().push(question);
    }
}

/// Parse a quiz bank from an in-memory string.
pub fn parse_bank(content: &str) -> QuizBank {
    let mut bank = QuizBank::default();

    for (lineno, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_line(line) {
            Some((level, question)) => bank.push(level, question),
            None => tracing::debug!("skipping malformed quiz line {}", lineno + 1),
        }
    }

    bank
}

/// Load a quiz bank file from disk.
pub fn load_bank(path: &Path) -> Result<QuizBank, LoadError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| LoadError::from_io(path.to_path_buf(), e))?;

    let bank = parse_bank(&content);
    tracing::info!("loaded {} questions from {}", bank.len(), path.display());
    Ok(bank)
}

/// Lazily loaded quiz bank owned by the caller.
///
/// The file is read on the first [`BankCache::get`] and kept until
/// [`BankCache::refresh`] is called.
#[derive(Debug)]
pub struct BankCache {
    path: PathBuf,
    bank: Option<QuizBank>,
}

impl BankCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            bank: None,
        }
    }

    /// The cached bank, loading it on first use.
    pub fn get(&mut self) -> Result<&QuizBank, LoadError> {
        if self.bank.is_none() {
            self.bank = Some(load_bank(&self.path)?);
        }
        Ok(self.bank.get_or_insert_with(QuizBank::default))
    }

    /// Re-read the bank file, replacing the cached copy.
    pub fn refresh(&mut self) -> Result<&QuizBank, LoadError> {
        self.bank = None;
        self.get()
    }

    /// Returns `true` if a bank has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.bank.is_some()
    }
}
