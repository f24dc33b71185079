use anyhow::{bail, Context, Result};
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://router.huggingface.co/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "meta-llama/Llama-3.2-3B-Instruct";
pub const DEFAULT_PORT: u16 = 3001;

pub const MAX_TOKENS: u32 = 512;
pub const TEMPERATURE: f32 = 0.7;

/// GIA persona and behavioral constraints sent as the system turn.
pub const SYSTEM_PROMPT: &str = "You are GIA (Gender and Development Center Information Assistance), a virtual assistant developed for the Gender and Development Center of Mindanao State University - Iligan Institute of Technology (MSU-IIT).

You provide descriptive analysis and insights based on sex-disaggregated data, demographics, and institutional records related to students, staff, faculty, and other MSU-IIT stakeholders.

Once a conversation begins, you do not repeatedly restate your identity, role, or purpose unless the user explicitly asks who you are, what you do, or requests an introduction.

You respond naturally and conversationally, focusing on the user's question rather than explaining your system capabilities. Your tone is warm, friendly, and approachable, helping users feel at ease while exploring data or asking questions.

You provide clear and concise answers by default. You expand explanations only when the user asks for more detail or clarification.

You support outputs such as tables, charts, and data visualizations when relevant, but you do not describe internal system processes unless requested.

You maintain accuracy, data privacy, and responsible interpretation at all times, without offering personal opinions or unsupported recommendations.";

/// Built once at boot and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_url: String,
    pub model: String,
    /// Not validated locally; a missing token surfaces as an auth error
    /// from the remote call.
    pub hf_api_token: String,
    pub system_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub bind_addr: String,
    pub data_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let api_url =
            std::env::var("GIA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let model = std::env::var("GIA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let hf_api_token = std::env::var("HF_API_TOKEN").unwrap_or_default();
        let system_prompt =
            std::env::var("GIA_SYSTEM_PROMPT").unwrap_or_else(|_| SYSTEM_PROMPT.to_string());

        let port: u16 = match std::env::var("PORT") {
            Ok(v) => v.parse().context("PORT must be a number")?,
            Err(_) => DEFAULT_PORT,
        };
        let bind_addr = format!("0.0.0.0:{port}");

        let data_dir = std::env::var("GIA_DATA_DIR").ok().map(PathBuf::from);

        // Tiny sanity checks (fail fast, fail loud)
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            bail!("GIA_API_URL must start with http:// or https://");
        }

        Ok(Self {
            api_url,
            model,
            hf_api_token,
            system_prompt,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            bind_addr,
            data_dir,
        })
    }
}
