//! # mindscale LLM SDK
//!
//! Provider-agnostic completion types plus the Ollama chat client the
//! scoring service rates answers with.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mindscale_llm::client::LlmClient;
//! use mindscale_llm::ollama::OllamaClient;
//! use mindscale_llm::types::CompletionRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OllamaClient::new()?
//!         .with_base_url("http://localhost:11434")
//!         .with_model("llama3.2");
//!     let response = client
//!         .complete(CompletionRequest::single_turn(
//!             "llama3.2",
//!             "Answer with a single number.",
//!             "How many legs does a cat have?",
//!         ))
//!         .await?;
//!
//!     println!("Response: {}", response.text().unwrap_or_default());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod ollama;
pub mod providers;
pub mod types;

pub use client::LlmClient;
pub use error::LlmError;
