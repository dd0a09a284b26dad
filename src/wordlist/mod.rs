//! Root word sources.
//!
//! A round draws its root word from a [`WordListProvider`]. The bundled
//! implementation, [`StartWords`], reads a newline-delimited file.

use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use anyhow::{Context, Result};

/// Supplies the candidate root words a round can be started with.
///
/// `None` means the list is unavailable. Both `None` and an empty slice
/// prevent a round from starting.
pub trait WordListProvider {
    fn candidate_root_words(&self) -> Option<&[String]>;
}

impl<T: WordListProvider + ?Sized> WordListProvider for &T {
    fn candidate_root_words(&self) -> Option<&[String]> {
        (**self).candidate_root_words()
    }
}

impl<T: WordListProvider + ?Sized> WordListProvider for Arc<T> {
    fn candidate_root_words(&self) -> Option<&[String]> {
        (**self).candidate_root_words()
    }
}

impl WordListProvider for Vec<String> {
    fn candidate_root_words(&self) -> Option<&[String]> {
        Some(self.as_slice())
    }
}

/// Root words loaded from a start-word list
#[derive(Debug, Clone, Default)]
pub struct StartWords {
    words: Vec<String>,
}

impl StartWords {
    /// Load start words from a file, one per line
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Could not load start words from {}", path.display()))?;
        let start_words = Self::from_words(content.lines());

        tracing::info!("Loaded {} start words", start_words.len());

        Ok(start_words)
    }

    /// Build a start-word list from memory, dropping blank entries
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|line| line.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordListProvider for StartWords {
    fn candidate_root_words(&self) -> Option<&[String]> {
        if self.words.is_empty() {
            None
        } else {
            Some(&self.words)
        }
    }
}
