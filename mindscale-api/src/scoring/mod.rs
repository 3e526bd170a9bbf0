//! Per-record rating and aggregation for `POST /assess_depression`.

pub mod parse;
pub mod prompt;

pub use parse::{extract_scale, ParseMode};
pub use prompt::build_rating_prompt;

use mindscale_llm::{client::LlmClient, error::LlmError, types::CompletionRequest};
use mindscale_types::{AssessmentRequest, AssessmentResult, QuestionRecord, ScoredRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Scale midpoint, used whenever a reply holds no rating
pub const DEFAULT_FALLBACK_SCALE: f64 = 5.0;

/// Knobs for one scoring run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringOptions {
    pub model: String,
    pub parse_mode: ParseMode,
    pub fallback_scale: f64,
    /// Sampling temperature sent with every rating call, model default when unset
    pub temperature: Option<f32>,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            model: mindscale_llm::models::ollama::LLAMA_3_2.to_string(),
            parse_mode: ParseMode::default(),
            fallback_scale: DEFAULT_FALLBACK_SCALE,
            temperature: None,
        }
    }
}

/// Rate every record in submission order and aggregate.
///
/// Records are rated one at a time; the next model call is only issued
/// once the previous reply has been parsed. A collaborator failure aborts
/// the whole run, an unparseable reply does not.
pub async fn assess(
    llm: &dyn LlmClient,
    options: &ScoringOptions,
    request: AssessmentRequest,
) -> Result<AssessmentResult, LlmError> {
    let mut scored = Vec::with_capacity(request.responses.len());

    for record in request.responses {
        let scale = rate_response(llm, options, &record).await?;
        scored.push(ScoredRecord::new(record, scale));
    }

    let result = AssessmentResult::from_scored(scored);
    info!(
        records = result.responses.len(),
        overall = result.overall_depression_scale,
        status = %result.depression_status,
        "Assessment complete"
    );

    Ok(result)
}

/// One model call for one record, returning the parsed or fallback scale
pub async fn rate_response(
    llm: &dyn LlmClient,
    options: &ScoringOptions,
    record: &QuestionRecord,
) -> Result<f64, LlmError> {
    let system = build_rating_prompt(&record.question_text, &record.student_response);
    let request = CompletionRequest::single_turn(
        options.model.as_str(),
        system,
        record.student_response.as_str(),
    )
    .with_temperature(options.temperature);

    let response = llm.complete(request).await?;
    let reply = response.text();

    info!(question = %record.question_text, "Question");
    info!(student_response = %record.student_response, "Student response");
    debug!(reply = ?reply, usage = ?response.usage, "Model reply");

    let scale = reply
        .as_deref()
        .and_then(|text| extract_scale(text, options.parse_mode));

    Ok(match scale {
        Some(scale) => scale,
        None => {
            warn!(
                question_number = record.question_number,
                reply = ?reply,
                fallback = options.fallback_scale,
                "No rating found in model reply, using fallback"
            );
            options.fallback_scale
        }
    })
}
