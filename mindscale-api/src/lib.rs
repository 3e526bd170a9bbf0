use actix_web::{error::InternalError, web, HttpResponse};
use mindscale_llm::client::LlmClient;
use mindscale_types::ErrorResponse;
use std::sync::Arc;

pub mod config;
pub mod handlers;
pub mod helpers;
pub mod scoring;

use scoring::ScoringOptions;

/// Everything a request handler needs, built once in `main`
#[derive(Clone)]
pub struct AssessmentContext {
    pub llm: Arc<dyn LlmClient>,
    pub options: ScoringOptions,
}

impl AssessmentContext {
    pub fn new(llm: Arc<dyn LlmClient>, options: ScoringOptions) -> Self {
        Self { llm, options }
    }
}

/// JSON extractor config: malformed bodies get a 400 with an `ErrorResponse`
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("Invalid request body: {err}");
        tracing::warn!(error = %err, "Rejected request body");
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ErrorResponse::new(message)),
        )
        .into()
    })
}

/// Register every route on an app or scope
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(handlers::assessment::assess_depression)
        .service(handlers::health::health);
}
