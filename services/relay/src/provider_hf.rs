use crate::config::AppConfig;
use crate::error::RelayError;
use crate::provider::{ChatProvider, CompletionOutcome, ProviderInfo, FALLBACK_REPLY};
use async_trait::async_trait;

/// Hugging Face router client speaking the OpenAI-compatible
/// chat-completions shape.
pub struct HfRouterProvider {
    api_url: String,
    model: String,
    token: String,
    max_tokens: u32,
    temperature: f32,
    client: reqwest::Client,
}

impl HfRouterProvider {
    pub fn from_config(cfg: &AppConfig) -> Self {
        Self {
            api_url: cfg.api_url.clone(),
            model: cfg.model.clone(),
            token: cfg.hf_api_token.clone(),
            max_tokens: cfg.max_tokens,
            temperature: cfg.temperature,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ChatProvider for HfRouterProvider {
    async fn complete(
        &self,
        system_prompt: &str,
        user_turn: &str,
    ) -> Result<CompletionOutcome, RelayError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_turn }
            ],
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
            "stream": false
        });

        let resp = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if status.as_u16() == 503 {
            // Model cold-start; surfaced as a normal reply, not a failure.
            return Ok(CompletionOutcome::Warming);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RelayError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let json: serde_json::Value = resp.json().await?;
        let reply = match json["choices"][0]["message"]["content"].as_str() {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => FALLBACK_REPLY.to_string(),
        };

        Ok(CompletionOutcome::Reply(reply))
    }

    fn info(&self) -> ProviderInfo {
        ProviderInfo {
            name: "hf-router".to_string(),
            api_url: self.api_url.clone(),
            model: self.model.clone(),
        }
    }
}
