//! Wire types shared by the mindscale scoring service and survey client.

pub mod api;
pub mod assessment;
pub mod typescript_gen;

pub use api::{ErrorResponse, HealthResponse};
pub use assessment::{
    mean_scale, AssessmentPayload, AssessmentRequest, AssessmentResult, Category, QuestionRecord,
    RiskTier, ScoredRecord,
};
pub use typescript_gen::generate_typescript_definitions;
