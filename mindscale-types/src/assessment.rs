use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Wellbeing category a survey question belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Category {
    Emotional,
    Academic,
    Social,
}

impl Category {
    /// All categories in submission order
    pub const ALL: [Category; 3] = [Category::Emotional, Category::Academic, Category::Social];

    /// Tab title shown above the category's questions
    pub fn title(&self) -> &'static str {
        match self {
            Category::Emotional => "Emotional Health",
            Category::Academic => "Academic Performance",
            Category::Social => "Social Integration",
        }
    }

    /// Column heading used when rendering scored results
    pub fn indicators_title(&self) -> &'static str {
        match self {
            Category::Emotional => "Emotional Health Indicators",
            Category::Academic => "Academic Performance Indicators",
            Category::Social => "Social Integration Indicators",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Emotional => write!(f, "emotional"),
            Category::Academic => write!(f, "academic"),
            Category::Social => write!(f, "social"),
        }
    }
}

/// One answered survey question as submitted by the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionRecord {
    pub question_number: u32,
    #[serde(default)]
    pub question_text: String,
    #[serde(default)]
    pub student_response: String,
    /// Optional so untagged records from older clients still decode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub category: Option<Category>,
}

impl QuestionRecord {
    pub fn new(
        question_number: u32,
        question_text: impl Into<String>,
        student_response: impl Into<String>,
    ) -> Self {
        Self {
            question_number,
            question_text: question_text.into(),
            student_response: student_response.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }
}

/// A question record enriched with the model-assigned depression scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoredRecord {
    #[serde(flatten)]
    pub record: QuestionRecord,
    pub depression_scale: f64,
}

impl ScoredRecord {
    pub fn new(record: QuestionRecord, depression_scale: f64) -> Self {
        Self {
            record,
            depression_scale,
        }
    }
}

/// Three-tier classification of the mean depression scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// `> 7` is High, `> 4` is Moderate, anything else is Low
    pub fn classify(mean: f64) -> Self {
        if mean > 7.0 {
            RiskTier::High
        } else if mean > 4.0 {
            RiskTier::Moderate
        } else {
            RiskTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low depression risk",
            RiskTier::Moderate => "Moderate depression risk",
            RiskTier::High => "High depression risk",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Low depression risk" => Some(RiskTier::Low),
            "Moderate depression risk" => Some(RiskTier::Moderate),
            "High depression risk" => Some(RiskTier::High),
            _ => None,
        }
    }

    /// Colored dot shown next to the status line
    pub fn indicator(&self) -> &'static str {
        match self {
            RiskTier::Low => "🟢",
            RiskTier::Moderate => "🟡",
            RiskTier::High => "🔴",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Arithmetic mean of the scored records, 0.0 when there are none
pub fn mean_scale(records: &[ScoredRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let total: f64 = records.iter().map(|r| r.depression_scale).sum();
    total / records.len() as f64
}

/// Scored submission returned by `POST /assess_depression`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub responses: Vec<ScoredRecord>,
    pub overall_depression_scale: f64,
    pub depression_status: String,
}

impl AssessmentResult {
    /// Aggregate the scored records; order is kept as given
    pub fn from_scored(responses: Vec<ScoredRecord>) -> Self {
        let overall_depression_scale = mean_scale(&responses);
        let depression_status = RiskTier::classify(overall_depression_scale)
            .label()
            .to_string();

        Self {
            responses,
            overall_depression_scale,
            depression_status,
        }
    }

    pub fn risk_tier(&self) -> Option<RiskTier> {
        RiskTier::from_label(&self.depression_status)
    }
}

/// Canonical request body for `POST /assess_depression`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRequest {
    pub responses: Vec<QuestionRecord>,
    /// Accepted and logged, never used for scoring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub user_type: Option<String>,
}

impl AssessmentRequest {
    pub fn new(responses: Vec<QuestionRecord>) -> Self {
        Self {
            responses,
            user_type: None,
        }
    }
}

/// Any request body the endpoint accepts: the canonical object, or the
/// legacy bare array of records
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AssessmentPayload {
    Request(AssessmentRequest),
    Records(Vec<QuestionRecord>),
}

impl From<AssessmentPayload> for AssessmentRequest {
    fn from(payload: AssessmentPayload) -> Self {
        match payload {
            AssessmentPayload::Request(request) => request,
            AssessmentPayload::Records(responses) => AssessmentRequest::new(responses),
        }
    }
}
