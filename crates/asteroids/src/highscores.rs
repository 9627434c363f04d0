//! Highscore table
//!
//! Scores persist in a plain text file, one `name,score` record per line. The
//! file is only ever appended to; ordering happens in memory after loading.
//! Records are split at their last comma, so a name may itself contain commas.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Name recorded when the player leaves the prompt empty
pub const ANONYMOUS: &str = "ANONYMOUS";

/// A single highscore record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighscoreEntry {
    /// Player name
    pub name: String,

    /// Final score
    pub score: u32,
}

impl HighscoreEntry {
    /// Create a new entry
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// Parse a `name,score` record
    pub fn parse(line: &str) -> Option<Self> {
        let (name, score) = line.rsplit_once(',')?;
        let score = score.trim().parse().ok()?;
        Some(Self::new(name, score))
    }

    fn to_record(&self) -> String {
        format!("{},{}\n", self.name, self.score)
    }
}

impl fmt::Display for HighscoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.score)
    }
}

/// Highscore persistence errors
#[derive(thiserror::Error, Debug)]
pub enum HighscoreError {
    /// The file could not be opened or created
    #[error("could not open {}: {source}", path.display())]
    Open {
        /// Highscore file
        path: PathBuf,
        /// Underlying failure
        source: std::io::Error,
    },

    /// The record could not be written
    #[error("could not write to {}: {source}", path.display())]
    Write {
        /// Highscore file
        path: PathBuf,
        /// Underlying failure
        source: std::io::Error,
    },
}

/// In-memory highscore table backed by an append-only file
#[derive(Debug, Clone)]
pub struct HighscoreStore {
    path: PathBuf,
    entries: Vec<HighscoreEntry>,
}

impl HighscoreStore {
    /// Load the table from `path`.
    ///
    /// A missing or unreadable file yields an empty table.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let mut entries = parse_records(&contents);
                sort_descending(&mut entries);
                log::info!("Loaded {} highscores from {}", entries.len(), path.display());
                entries
            }
            Err(e) => {
                log::warn!("Could not load highscores from {}: {e}", path.display());
                Vec::new()
            }
        };

        Self { path, entries }
    }

    /// All entries, highest score first
    pub fn entries(&self) -> &[HighscoreEntry] {
        &self.entries
    }

    /// The best `count` entries
    pub fn top(&self, count: usize) -> &[HighscoreEntry] {
        &self.entries[..count.min(self.entries.len())]
    }

    /// Append an entry to the file and the table.
    ///
    /// Returns the entry as stored, after name cleanup. On failure the table
    /// is left unchanged so the caller can retry.
    pub fn append(&mut self, entry: HighscoreEntry) -> Result<HighscoreEntry, HighscoreError> {
        let entry = HighscoreEntry::new(sanitize_name(&entry.name), entry.score);

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|source| HighscoreError::Open {
                path: self.path.clone(),
                source,
            })?;
        file.write_all(entry.to_record().as_bytes())
            .map_err(|source| HighscoreError::Write {
                path: self.path.clone(),
                source,
            })?;

        // Ties keep the earlier record first
        let index = self.entries.partition_point(|e| e.score >= entry.score);
        self.entries.insert(index, entry.clone());
        log::info!("Saved highscore {entry}");
        Ok(entry)
    }
}

/// Parse records until the first blank line, skipping malformed ones
pub fn parse_records(contents: &str) -> Vec<HighscoreEntry> {
    let mut entries = Vec::new();
    for (number, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            break;
        }
        match HighscoreEntry::parse(line) {
            Some(entry) => entries.push(entry),
            None => log::warn!("Skipping malformed highscore on line {}: {line:?}", number + 1),
        }
    }
    entries
}

/// Stable sort, highest score first
fn sort_descending(entries: &mut [HighscoreEntry]) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
}

/// Make a name safe to store as one record
fn sanitize_name(name: &str) -> String {
    let name: String = name
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    let name = name.trim();
    if name.is_empty() {
        ANONYMOUS.to_string()
    } else {
        name.to_string()
    }
}
