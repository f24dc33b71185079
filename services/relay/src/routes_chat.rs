use crate::error::RelayError;
use crate::provider::{CompletionOutcome, WARMING_REPLY};
use crate::state::SharedState;
use axum::{extract::State, Json};
use datactx::compose_user_turn;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

pub async fn chat_complete(
    State(state): State<SharedState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, RelayError> {
    let message = match req.message.as_deref().map(str::trim) {
        Some(m) if !m.is_empty() => m.to_string(),
        _ => return Err(RelayError::InvalidRequest),
    };
    info!(chars = message.len(), "received chat request");

    // Transcript ordering: user turn, then the pending placeholder that the
    // resolved reply (or failure text) replaces in place.
    let (pending_id, prompt) = {
        let mut transcript = state.transcript.write().await;
        transcript.push_user(message.clone());
        let pending_id = transcript.push_pending();

        let dataset = state.dataset.read().await;
        let prompt = compose_user_turn(&state.classifier, &dataset, &message);
        (pending_id, prompt)
    };

    let result = state
        .provider
        .complete(&state.cfg.system_prompt, &prompt)
        .await;

    let mut transcript = state.transcript.write().await;
    match result {
        Ok(CompletionOutcome::Reply(reply)) => {
            transcript.resolve(pending_id, reply.clone());
            info!("sending reply");
            Ok(Json(ChatResponse { reply }))
        }
        Ok(CompletionOutcome::Warming) => {
            let reply = WARMING_REPLY.to_string();
            transcript.resolve(pending_id, reply.clone());
            info!("model warming, sending soft reply");
            Ok(Json(ChatResponse { reply }))
        }
        Err(err) => {
            transcript.resolve(pending_id, err.user_message());
            error!(%err, "chat turn failed");
            Err(err)
        }
    }
}
