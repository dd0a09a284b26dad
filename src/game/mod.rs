// Round engine modules

pub mod engine;
pub mod scorer;
pub mod validator;

pub use engine::RoundEngine;
pub use scorer::Scorer;
pub use validator::{WordValidator, MIN_WORD_LENGTH};
