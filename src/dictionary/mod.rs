use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use anyhow::{Context, Result};

/// Language tag used when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// Answers "is this a real word in language L?".
///
/// Callers pass an already-lowercased, non-empty word.
pub trait DictionaryOracle {
    fn is_recognized_word(&self, word: &str, language: &str) -> bool;
}

impl<T: DictionaryOracle + ?Sized> DictionaryOracle for &T {
    fn is_recognized_word(&self, word: &str, language: &str) -> bool {
        (**self).is_recognized_word(word, language)
    }
}

impl<T: DictionaryOracle + ?Sized> DictionaryOracle for Arc<T> {
    fn is_recognized_word(&self, word: &str, language: &str) -> bool {
        (**self).is_recognized_word(word, language)
    }
}

/// Word set for a single language, loaded from a newline-delimited file
pub struct Dictionary {
    language: String,
    words: HashSet<String>,
}

impl Dictionary {
    /// Load dictionary from a file
    pub async fn load<P: AsRef<Path>>(path: P, language: &str) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read dictionary {}", path.display()))?;
        let dictionary = Self::from_words(language, content.lines());

        tracing::info!(
            "Loaded {} {} words into dictionary",
            dictionary.len(),
            dictionary.language
        );

        Ok(dictionary)
    }

    /// Build a dictionary from an in-memory word list
    pub fn from_words<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|line| line.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            language: language.to_string(),
            words,
        }
    }

    /// Create an empty dictionary (for testing)
    pub fn empty(language: &str) -> Self {
        Self {
            language: language.to_string(),
            words: HashSet::new(),
        }
    }

    /// Check if a word exists in the dictionary
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryOracle for Dictionary {
    fn is_recognized_word(&self, word: &str, language: &str) -> bool {
        self.language.eq_ignore_ascii_case(language) && self.contains(word)
    }
}
