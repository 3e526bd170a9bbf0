use crate::error::CliError;
use mindscale_types::{AssessmentRequest, AssessmentResult, QuestionRecord};
use tracing::{debug, error, info};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// HTTP client for the scoring service
pub struct AssessmentClient {
    http_client: reqwest::Client,
    server_url: String,
}

impl AssessmentClient {
    pub fn new(server_url: Option<String>) -> Self {
        let server_url = server_url
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Self {
            http_client: reqwest::Client::new(),
            server_url,
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Submit the records and wait for the scored result. No retry.
    pub async fn submit(
        &self,
        records: Vec<QuestionRecord>,
        user_type: Option<String>,
    ) -> Result<AssessmentResult, CliError> {
        let url = format!("{}/assess_depression", self.server_url);
        let request = AssessmentRequest {
            responses: records,
            user_type,
        };
        info!(records = request.responses.len(), "Submitting assessment");
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to reach scoring service: {}", e);
                CliError::Communication(format!("HTTP request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            debug!(%status, body = %error_text, "Scoring service rejected submission");
            return Err(CliError::Communication(format!(
                "Scoring service returned {}: {}",
                status, error_text
            )));
        }

        let result: AssessmentResult = response
            .json()
            .await
            .map_err(|e| CliError::Communication(format!("Failed to parse response: {}", e)))?;

        info!(
            overall = result.overall_depression_scale,
            status = %result.depression_status,
            "Assessment received"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindscale_types::Category;
    use mockito::Matcher;

    fn records() -> Vec<QuestionRecord> {
        vec![QuestionRecord::new(1, "How often do you feel overwhelmed?", "Rarely")
            .with_category(Category::Emotional)]
    }

    #[tokio::test]
    async fn test_submit_posts_wrapped_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/assess_depression")
            .match_body(Matcher::Json(serde_json::json!({
                "responses": [{
                    "question_number": 1,
                    "question_text": "How often do you feel overwhelmed?",
                    "student_response": "Rarely",
                    "category": "emotional"
                }],
                "user_type": "student"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "responses": [{
                        "question_number": 1,
                        "question_text": "How often do you feel overwhelmed?",
                        "student_response": "Rarely",
                        "category": "emotional",
                        "depression_scale": 2.0
                    }],
                    "overall_depression_scale": 2.0,
                    "depression_status": "Low depression risk"
                }"#,
            )
            .create_async()
            .await;

        let client = AssessmentClient::new(Some(format!("{}/", server.url())));
        let result = client
            .submit(records(), Some("student".to_string()))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result.overall_depression_scale, 2.0);
        assert_eq!(result.responses[0].record.category, Some(Category::Emotional));
    }

    #[tokio::test]
    async fn test_submit_maps_server_error_to_communication() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/assess_depression")
            .with_status(500)
            .with_body(r#"{"error":"Failed to assess responses"}"#)
            .create_async()
            .await;

        let client = AssessmentClient::new(Some(server.url()));
        let err = client.submit(records(), None).await.unwrap_err();

        assert!(matches!(err, CliError::Communication(_)));
        assert_eq!(err.exit_code(), 7);
    }

    #[tokio::test]
    async fn test_submit_unreachable_server() {
        let client = AssessmentClient::new(Some("http://127.0.0.1:1".to_string()));
        let err = client.submit(records(), None).await.unwrap_err();
        assert!(matches!(err, CliError::Communication(_)));
    }

    #[test]
    fn test_default_server_url() {
        assert_eq!(AssessmentClient::new(None).server_url(), DEFAULT_SERVER_URL);
    }
}
