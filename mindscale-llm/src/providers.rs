//! Provider name constants

/// Ollama local provider
pub const OLLAMA: &str = "ollama";
