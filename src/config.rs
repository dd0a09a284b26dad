use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

use crate::dictionary::DEFAULT_LANGUAGE;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub dictionary_path: String,
    pub start_words_path: String,
    pub language: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dictionary_path: "./dictionary.txt".to_string(),
            start_words_path: "./start.txt".to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup (the process environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = GameConfig::default();

        let server = ServerConfig {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
        };

        let game = GameConfig {
            dictionary_path: lookup("DICTIONARY_PATH").unwrap_or(defaults.dictionary_path),
            start_words_path: lookup("START_WORDS_PATH").unwrap_or(defaults.start_words_path),
            language: lookup("DICTIONARY_LANGUAGE").unwrap_or(defaults.language),
        };

        Ok(Config { server, game })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
