//! Car facts glossary.
//!
//! The facts file is line oriented. A line of the form `Topic|text` starts a
//! new topic; any following line without a `|` continues the explanation of
//! the current topic. Blank lines are ignored.

use std::collections::HashMap;
use std::path::Path;

use crate::error::LoadError;

/// Topic → explanation lookup table, built once from a facts file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactStore {
    facts: HashMap<String, String>,
}

impl FactStore {
    /// Number of topics.
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Explanation for an exact topic name.
    pub fn explain(&self, topic: &str) -> Option<&str> {
        self.facts.get(topic).map(String::as_str)
    }

    /// All topics, sorted case-insensitively.
    pub fn topics(&self) -> Vec<&str> {
        let mut topics: Vec<&str> = self.facts.keys().map(String::as_str).collect();
        topics.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then(a.cmp(b)));
        topics
    }

    /// Topics whose name contains `query`, ignoring case.
    ///
    /// An empty (or whitespace-only) query matches every topic.
    pub fn search(&self, query: &str) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        self.topics()
            .into_iter()
            .filter(|t| needle.is_empty() || t.to_lowercase().contains(&needle))
            .collect()
    }
}

/// Load a facts file from disk.
pub fn load_facts(path: &Path) -> Result<FactStore, LoadError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| LoadError::from_io(path.to_path_buf(), e))?;

    let store = parse_facts(&content);
    tracing::info!("loaded {} facts from {}", store.len(), path.display());
    Ok(store)
}

/// Parse facts from an in-memory string.
pub fn parse_facts(content: &str) -> FactStore {
    let mut facts = HashMap::new();
    let mut current: Option<String> = None;
    let mut text: Vec<&str> = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }

        if let Some((topic, first)) = line.split_once('|') {
            if let Some(prev) = current.take() {
                facts.insert(prev, text.join("\n").trim().to_string());
                text.clear();
            }
            current = Some(topic.trim().to_string());
            text.push(first.trim());
        } else if current.is_some() {
            text.push(line.trim());
        }
    }

    if let Some(last) = current {
        facts.insert(last, text.join("\n").trim().to_string());
    }

    FactStore { facts }
}
