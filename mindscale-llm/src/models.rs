//! Model constants for supported LLM providers

/// Ollama model tags
pub mod ollama {
    /// Llama 3.2 (3B) - default rating model
    pub const LLAMA_3_2: &str = "llama3.2";
}
