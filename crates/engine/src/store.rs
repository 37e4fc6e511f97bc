//! Best-score persistence.
//!
//! The only persisted value is one non-negative integer stored under
//! [`BEST_SCORE_KEY`](crate::types::BEST_SCORE_KEY). There is no schema versioning.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};


/// Where the best score lives between runs
pub trait BestScoreStore {
    /// Load the stored best score; 0 when nothing has been saved yet
    fn load_best_score(&mut self) -> Result<u32>;

    fn save_best_score(&mut self, score: u32) -> Result<()>;
}

impl<S: BestScoreStore + ?Sized> BestScoreStore for Box<S> {
    fn load_best_score(&mut self) -> Result<u32> {
        (**self).load_best_score()
    }

    fn save_best_score(&mut self, score: u32) -> Result<()> {
        (**self).save_best_score(score)
    }
}

/// In-memory store (tests, headless runs)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryBestScore {
    value: Option<u32>,
    saves: usize,
}

impl MemoryBestScore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u32) -> Self {
        Self {
            value: Some(value),
            saves: 0,
        }
    }

    /// Number of times `save_best_score` was called
    pub fn saves(&self) -> usize {
        self.saves
    }

    pub fn value(&self) -> Option<u32> {
        self.value
    }
}

impl BestScoreStore for MemoryBestScore {
    fn load_best_score(&mut self) -> Result<u32> {
        Ok(self.value.unwrap_or(0))
    }

    fn save_best_score(&mut self, score: u32) -> Result<()> {
        self.value = Some(score);
        self.saves += 1;
        Ok(())
    }
}

/// On-disk layout. Keys other than the best score are carried through saves.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ScoreFile {
    #[serde(rename = "jd_best_score", default, skip_serializing_if = "Option::is_none")]
    best_score: Option<u32>,
    #[serde(flatten)]
    other: BTreeMap<String, serde_json::Value>,
}

/// JSON file store: `{"jd_best_score": 123}`
///
/// Other keys already present in the file are preserved on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileBestScore {
    path: PathBuf,
}

impl JsonFileBestScore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<ScoreFile> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(ScoreFile::default()),
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", self.path.display()));
            }
        };
        if text.trim().is_empty() {
            return Ok(ScoreFile::default());
        }
        serde_json::from_str(&text).with_context(|| format!("parsing {}", self.path.display()))
    }
}

impl BestScoreStore for JsonFileBestScore {
    fn load_best_score(&mut self) -> Result<u32> {
        Ok(self.read()?.best_score.unwrap_or(0))
    }

    fn save_best_score(&mut self, score: u32) -> Result<()> {
        // A corrupt file is replaced rather than blocking the save.
        let mut file = self.read().unwrap_or_default();
        file.best_score = Some(score);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        let text = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, text).with_context(|| format!("writing {}", self.path.display()))
    }
}
