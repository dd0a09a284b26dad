use serde::{Deserialize, Serialize};
use crate::models::{RejectionKind, Submission};

/// Messages sent from client to server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    NewRound,
    SubmitWord {
        word: String,
    },
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    RoundStarted {
        root_word: String,
    },
    WordAccepted {
        word: String,
        used_words: Vec<String>,
        score: u32,
    },
    WordRejected {
        kind: RejectionKind,
        title: String,
        message: String,
    },
    Error {
        message: String,
    },
}

impl ServerMessage {
    /// Reply for a submission; blank submissions get no reply
    pub fn from_submission(submission: Submission) -> Option<Self> {
        match submission {
            Submission::Ignored => None,
            Submission::Accepted { used_words, score } => Some(Self::WordAccepted {
                word: used_words.first().cloned().unwrap_or_default(),
                used_words,
                score,
            }),
            Submission::Rejected(rejection) => Some(Self::WordRejected {
                kind: rejection.kind,
                title: rejection.title,
                message: rejection.message,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rejection;

    #[test]
    fn test_parse_client_messages() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type":"new_round"}"#).unwrap();
        assert_eq!(msg, ClientMessage::NewRound);

        let msg: ClientMessage =
            serde_json::from_str(r#"{"type":"submit_word","word":"Silk"}"#).unwrap();
        assert_eq!(
            msg,
            ClientMessage::SubmitWord {
                word: "Silk".to_string()
            }
        );

        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"pass_turn"}"#).is_err());
    }

    #[test]
    fn test_server_message_json_shape() {
        let msg = ServerMessage::WordRejected {
            kind: RejectionKind::TooShort,
            title: "Word not long enough".to_string(),
            message: "You can't enter words with less than 3 characters".to_string(),
        };
        let json: serde_json::Value = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "word_rejected");
        assert_eq!(json["kind"], "too_short");

        let msg = ServerMessage::RoundStarted {
            root_word: "silkworm".to_string(),
        };
        let json: serde_json::Value = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "round_started");
        assert_eq!(json["root_word"], "silkworm");
    }

    #[test]
    fn test_from_submission() {
        assert_eq!(ServerMessage::from_submission(Submission::Ignored), None);

        let accepted = Submission::Accepted {
            used_words: vec!["worm".to_string(), "silk".to_string()],
            score: 8,
        };
        assert_eq!(
            ServerMessage::from_submission(accepted),
            Some(ServerMessage::WordAccepted {
                word: "worm".to_string(),
                used_words: vec!["worm".to_string(), "silk".to_string()],
                score: 8,
            })
        );

        let rejected = Submission::Rejected(Rejection::new(RejectionKind::NotAWord, "silkworm"));
        assert_eq!(
            ServerMessage::from_submission(rejected),
            Some(ServerMessage::WordRejected {
                kind: RejectionKind::NotAWord,
                title: "Word not recognized".to_string(),
                message: "You can't just make them up".to_string(),
            })
        );
    }
}
