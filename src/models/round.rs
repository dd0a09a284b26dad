use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of a round: the root word, accepted words (newest first) and score
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub root_word: String,
    pub used_words: Vec<String>,
    pub score: u32,
}

/// Why a submitted word was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    /// Already accepted earlier in this round
    DuplicateWord,
    /// Needs letters the root word does not have (or not enough of them)
    ImpossibleWord,
    /// Not recognized by the dictionary
    NotAWord,
    /// Fewer than the minimum number of characters
    TooShort,
}

impl RejectionKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::DuplicateWord => "Word used already",
            Self::ImpossibleWord => "Word not possible",
            Self::NotAWord => "Word not recognized",
            Self::TooShort => "Word not long enough",
        }
    }

    pub fn message(self, root_word: &str) -> String {
        match self {
            Self::DuplicateWord => "Be more original".to_string(),
            Self::ImpossibleWord => format!("You can't spell that word from '{}'", root_word),
            Self::NotAWord => "You can't just make them up".to_string(),
            Self::TooShort => "You can't enter words with less than 3 characters".to_string(),
        }
    }
}

impl fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A rejection with the title/message pair the player is shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub kind: RejectionKind,
    pub title: String,
    pub message: String,
}

impl Rejection {
    pub fn new(kind: RejectionKind, root_word: &str) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            message: kind.message(root_word),
        }
    }
}

/// Outcome of submitting a candidate word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Blank input; nothing happened
    Ignored,
    Accepted { used_words: Vec<String>, score: u32 },
    Rejected(Rejection),
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The rejection kind, if the word was rejected
    pub fn rejection_kind(&self) -> Option<RejectionKind> {
        match self {
            Self::Rejected(rejection) => Some(rejection.kind),
            _ => None,
        }
    }
}
