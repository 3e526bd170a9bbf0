use actix_web::{test, web, App};
use mindscale_api::scoring::ScoringOptions;
use mindscale_api::{configure, AssessmentContext};
use mindscale_llm::client::LlmClient;
use mindscale_llm::error::LlmError;
use mindscale_llm::types::{CompletionRequest, CompletionResponse, ContentBlock, Role, Usage};
use std::sync::{Arc, Mutex};

/// Canned behaviour for one model call
#[derive(Debug, Clone)]
pub enum MockReply {
    Text(String),
    /// Reply with no content at all
    Empty,
    /// Backend answers with an HTTP error
    Fail(u16),
}

pub fn text(reply: &str) -> MockReply {
    MockReply::Text(reply.to_string())
}

pub struct MockLlmClient {
    pub replies: Mutex<Vec<MockReply>>,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::with_replies(Vec::new())
    }

    pub fn with_replies(replies: Vec<MockReply>) -> Self {
        MockLlmClient {
            replies: Mutex::new(replies),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn get_call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn recorded_requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(request);

        let reply = {
            let mut replies = self.replies.lock().unwrap();
            if replies.is_empty() {
                text("5")
            } else {
                replies.remove(0)
            }
        };

        let content = match reply {
            MockReply::Text(text) => vec![ContentBlock::Text { text }],
            MockReply::Empty => vec![],
            MockReply::Fail(status) => {
                return Err(LlmError::api_error(status, "model crashed".to_string()))
            }
        };

        Ok(CompletionResponse {
            content,
            role: Role::Assistant,
            usage: Usage {
                input_tokens: 10,
                output_tokens: 1,
            },
            stop_reason: Some("stop".to_string()),
        })
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

pub struct TestApp<S> {
    pub mock_llm_client: Arc<MockLlmClient>,
    pub app: S,
}

pub async fn setup_test_app(
    replies: Vec<MockReply>,
) -> TestApp<
    impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
> {
    setup_test_app_with_options(replies, ScoringOptions::default()).await
}

pub async fn setup_test_app_with_options(
    replies: Vec<MockReply>,
    options: ScoringOptions,
) -> TestApp<
    impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
> {
    let mock_llm_client = Arc::new(MockLlmClient::with_replies(replies));
    let llm_client = mock_llm_client.clone() as Arc<dyn LlmClient>;
    let context = AssessmentContext::new(llm_client, options);

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(context))
            .configure(configure),
    )
    .await;

    TestApp {
        mock_llm_client,
        app,
    }
}

pub fn record(number: u32, question: &str, answer: &str) -> serde_json::Value {
    serde_json::json!({
        "question_number": number,
        "question_text": question,
        "student_response": answer,
    })
}
