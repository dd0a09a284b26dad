//! Word Scramble
//!
//! A word-building game. Each round draws a root word; the player submits
//! words spelled from its letters and scores one point per character for
//! every accepted word.
//!
//! The [`game::RoundEngine`] holds all the rules. The [`websocket`] and
//! [`routes`] modules host it behind a small axum server.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod models;
pub mod routes;
pub mod utils;
pub mod websocket;
pub mod wordlist;

use std::sync::Arc;

use config::Config;
use dictionary::Dictionary;
use wordlist::StartWords;

pub use error::RoundError;
pub use game::RoundEngine;
pub use models::{Rejection, RejectionKind, RoundState, Submission};

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    pub dictionary: Arc<Dictionary>,
    pub start_words: Arc<StartWords>,
}
