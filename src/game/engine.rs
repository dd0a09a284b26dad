//! Round lifecycle and the submission pipeline.

use rand::{seq::IndexedRandom, Rng};

use crate::{
    dictionary::{DictionaryOracle, DEFAULT_LANGUAGE},
    error::RoundError,
    game::{Scorer, WordValidator},
    models::{Rejection, RoundState, Submission},
    wordlist::WordListProvider,
};

/// Owns the state of one round and decides on every submitted word.
///
/// The engine is not synchronized. Hosts that share one between threads
/// must serialize access to the whole engine.
pub struct RoundEngine<W, D> {
    words: W,
    validator: WordValidator<D>,
    state: RoundState,
}

impl<W: WordListProvider, D: DictionaryOracle> RoundEngine<W, D> {
    /// Create an engine for English and start its first round
    pub fn new(words: W, dictionary: D) -> Result<Self, RoundError> {
        Self::with_language(words, dictionary, DEFAULT_LANGUAGE)
    }

    /// Create an engine that checks words against `language` and start its first round
    pub fn with_language(words: W, dictionary: D, language: &str) -> Result<Self, RoundError> {
        let mut engine = Self {
            words,
            validator: WordValidator::new(dictionary, language),
            state: RoundState::default(),
        };
        engine.start_round()?;
        Ok(engine)
    }

    /// Start a new round with a randomly drawn root word
    pub fn start_round(&mut self) -> Result<&str, RoundError> {
        let mut rng = rand::rng();
        self.start_round_with(&mut rng)
    }

    /// Start a new round, drawing the root word with `rng`.
    ///
    /// On error the previous round is left as it was.
    pub fn start_round_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&str, RoundError> {
        let root_word = self
            .words
            .candidate_root_words()
            .ok_or_else(|| RoundError::ResourceUnavailable("word list unavailable".to_string()))?
            .choose(rng)
            .ok_or_else(|| RoundError::ResourceUnavailable("word list is empty".to_string()))?
            .clone();

        tracing::info!("Starting round with root word: {}", root_word);

        self.state = RoundState {
            root_word,
            used_words: Vec::new(),
            score: 0,
        };

        Ok(&self.state.root_word)
    }

    /// Submit a candidate word.
    ///
    /// Blank input is ignored. Otherwise the word is either accepted,
    /// updating the used words and score, or rejected with state unchanged.
    pub fn submit(&mut self, raw: &str) -> Submission {
        let Some(word) = WordValidator::<D>::normalize(raw) else {
            return Submission::Ignored;
        };

        if let Err(kind) =
            self.validator
                .validate(&word, &self.state.root_word, &self.state.used_words)
        {
            tracing::debug!(
                "Rejected '{}' for root word '{}': {}",
                word,
                self.state.root_word,
                kind
            );
            return Submission::Rejected(Rejection::new(kind, &self.state.root_word));
        }

        self.state.score = self.state.score.saturating_add(Scorer::score(&word));
        tracing::debug!("Accepted '{}', score is now {}", word, self.state.score);
        self.state.used_words.insert(0, word);

        Submission::Accepted {
            used_words: self.state.used_words.clone(),
            score: self.state.score,
        }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn root_word(&self) -> &str {
        &self.state.root_word
    }

    /// Accepted words, most recent first
    pub fn used_words(&self) -> &[String] {
        &self.state.used_words
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }
}
