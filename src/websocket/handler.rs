use crate::{
    dictionary::{Dictionary, DictionaryOracle},
    game::RoundEngine,
    websocket::messages::{ClientMessage, ServerMessage},
    wordlist::{StartWords, WordListProvider},
    AppState,
};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures::{sink::SinkExt, stream::StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Engine type used for one connection
pub type SessionEngine = RoundEngine<Arc<StartWords>, Arc<Dictionary>>;

/// WebSocket upgrade handler
pub async fn handle_websocket(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle individual WebSocket connection. Each connection plays its own round.
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::channel::<ServerMessage>(100);

    let mut engine: SessionEngine = match RoundEngine::with_language(
        state.start_words.clone(),
        state.dictionary.clone(),
        &state.config.game.language,
    ) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!("Failed to start round: {}", e);
            if let Ok(json) = serde_json::to_string(&ServerMessage::Error {
                message: e.to_string(),
            }) {
                let _ = sender.send(Message::Text(json.into())).await;
            }
            return;
        }
    };

    tracing::info!(
        "WebSocket connection established, root word: {}",
        engine.root_word()
    );

    let _ = tx
        .send(ServerMessage::RoundStarted {
            root_word: engine.root_word().to_string(),
        })
        .await;

    // Spawn a task to send messages to the client
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to serialize message: {}", e);
                }
            }
        }
    });

    // Handle incoming messages from the client
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            match msg {
                Message::Text(text) => {
                    let reply = match serde_json::from_str::<ClientMessage>(&text) {
                        Ok(client_msg) => handle_client_message(client_msg, &mut engine),
                        Err(e) => {
                            tracing::error!("Failed to parse message: {}", e);
                            Some(ServerMessage::Error {
                                message: format!("Invalid message format: {}", e),
                            })
                        }
                    };

                    if let Some(reply) = reply {
                        if tx.send(reply).await.is_err() {
                            break;
                        }
                    }
                }
                Message::Close(_) => {
                    tracing::info!("Client disconnected");
                    break;
                }
                _ => {}
            }
        }
    });

    // Wait for either task to finish
    tokio::select! {
        _ = (&mut send_task) => {
            recv_task.abort();
        }
        _ = (&mut recv_task) => {
            send_task.abort();
        }
    }

    tracing::info!("WebSocket connection closed");
}

/// Apply one client message to the connection's round and build the reply
pub fn handle_client_message<W, D>(
    msg: ClientMessage,
    engine: &mut RoundEngine<W, D>,
) -> Option<ServerMessage>
where
    W: WordListProvider,
    D: DictionaryOracle,
{
    match msg {
        ClientMessage::NewRound => match engine.start_round() {
            Ok(root_word) => Some(ServerMessage::RoundStarted {
                root_word: root_word.to_string(),
            }),
            Err(e) => {
                tracing::error!("Failed to start round: {}", e);
                Some(ServerMessage::Error {
                    message: e.to_string(),
                })
            }
        },
        ClientMessage::SubmitWord { word } => {
            tracing::debug!("Submitting word: {:?}", word);
            ServerMessage::from_submission(engine.submit(&word))
        }
    }
}
