use crate::error::RelayError;
use async_trait::async_trait;

/// Reply returned while the remote model is still loading (soft failure,
/// HTTP success on our side).
pub const WARMING_REPLY: &str =
    "I'm currently warming up! The AI model is loading. Please try again in about 20-30 seconds.";

/// Reply substituted when the remote payload has no extractable text.
pub const FALLBACK_REPLY: &str =
    "I apologize, but I couldn't generate a proper response. Please try again.";

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ProviderInfo {
    pub name: String,
    pub api_url: String,
    pub model: String,
}

/// Outcome of one completion call. Warming is not an error: the route
/// converts it into [`WARMING_REPLY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    Reply(String),
    Warming,
}

#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Forward the system prompt plus one composed user turn and return
    /// the first completion choice's text.
    async fn complete(
        &self,
        system_prompt: &str,
        user_turn: &str,
    ) -> Result<CompletionOutcome, RelayError>;

    fn info(&self) -> ProviderInfo;
}
