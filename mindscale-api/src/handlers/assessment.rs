use actix_web::{post, web, HttpResponse, Responder};
use mindscale_types::{AssessmentPayload, AssessmentRequest, ErrorResponse};
use tracing::{error, info};

use crate::{scoring, AssessmentContext};

#[post("/assess_depression")]
pub async fn assess_depression(
    payload: web::Json<AssessmentPayload>,
    context: web::Data<AssessmentContext>,
) -> impl Responder {
    let request: AssessmentRequest = payload.into_inner().into();

    info!(
        records = request.responses.len(),
        user_type = ?request.user_type,
        provider = context.llm.provider_name(),
        model = %context.options.model,
        "Assessing submission"
    );

    match scoring::assess(context.llm.as_ref(), &context.options, request).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => {
            error!(error = %e, "Assessment failed");
            HttpResponse::InternalServerError().json(ErrorResponse::new(format!(
                "Failed to assess responses: {e}"
            )))
        }
    }
}
