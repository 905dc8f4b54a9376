use std::env;

use anyhow::{Result, anyhow};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_API_HOSTNAME: &str = "https://api.openai.com";
pub const DEFAULT_HISTORY_BUDGET: usize = 6000;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub openai_model: String,
    pub openai_api_hostname: String,
    pub openai_api_key: String,
    pub history_budget: usize,
}

impl AppConfig {
    /// Read the config from the environment. Fails when
    /// `OPENAI_API_KEY` is missing or blank so that the server never
    /// starts without a usable credential.
    pub fn from_env() -> Result<Self> {
        let openai_api_key = env::var("OPENAI_API_KEY")
            .map(|key| key.trim().to_string())
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| anyhow!("Missing env var OPENAI_API_KEY"))?;
        let openai_model = env::var("OPENAI_MODEL")
            .map(|model| model.trim().to_string())
            .ok()
            .filter(|model| !model.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let openai_api_hostname = env::var("SPECIES_CHAT_LLM_HOST")
            .unwrap_or_else(|_| DEFAULT_API_HOSTNAME.to_string());
        let history_budget = match env::var("SPECIES_CHAT_HISTORY_BUDGET") {
            Ok(budget) => budget.trim().parse::<usize>().map_err(|e| {
                anyhow!("Invalid SPECIES_CHAT_HISTORY_BUDGET {:?}: {}", budget, e)
            })?,
            Err(_) => DEFAULT_HISTORY_BUDGET,
        };

        Ok(Self {
            openai_model,
            openai_api_hostname,
            openai_api_key,
            history_budget,
        })
    }
}
