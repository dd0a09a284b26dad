use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "word-scramble",
        "version": env!("CARGO_PKG_VERSION"),
        "start_words": state.start_words.len(),
        "dictionary_words": state.dictionary.len()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{Config, GameConfig, ServerConfig},
        dictionary::Dictionary,
        wordlist::StartWords,
    };

    #[tokio::test]
    async fn test_health_reports_loaded_resources() {
        let state = Arc::new(AppState {
            config: Config {
                server: ServerConfig {
                    host: "127.0.0.1".to_string(),
                    port: 3000,
                },
                game: GameConfig::default(),
            },
            dictionary: Arc::new(Dictionary::from_words("en", ["silk", "worm"])),
            start_words: Arc::new(StartWords::from_words(["silkworm"])),
        });

        let Json(body) = health_check(State(state)).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "word-scramble");
        assert_eq!(body["start_words"], 1);
        assert_eq!(body["dictionary_words"], 2);
    }
}
