use anyhow::bail;
use mindscale_llm::{client::LlmClient, ollama::OllamaClient, providers};
use std::sync::Arc;
use std::time::Duration;

use crate::config::LlmConfig;

pub fn create_llm_client(config: &LlmConfig) -> anyhow::Result<Arc<dyn LlmClient>> {
    let client: Arc<dyn LlmClient> = match config.provider.as_str() {
        providers::OLLAMA => Arc::new(
            OllamaClient::with_timeout(config.timeout_secs.map(Duration::from_secs))?
                .with_base_url(&config.base_url)
                .with_model(&config.model),
        ),
        other => bail!("Unsupported LLM provider '{other}'. Supported: ollama"),
    };

    Ok(client)
}
