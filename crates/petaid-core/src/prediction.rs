//! Symptom Prediction Client
//!
//! Sends a free-text symptom description to the prediction service and
//! models the request lifecycle for the checker page. The service's findings
//! are rendered as-is; nothing here interprets them beyond the colour tier.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::markdown::render_markdown;
use crate::notice::Notice;

pub const FAILURE_NOTICE: &str = "Something went wrong while analyzing symptoms.";

pub const MISSING_INPUT: &str = "Please select a pet type and describe the symptoms.";

pub const DISCLAIMER: &str = "This AI Symptom Checker provides preliminary insights and is not a substitute for professional veterinary advice. Always consult a qualified veterinarian for an accurate diagnosis and treatment plan.";

/// Species the checker accepts, as (value, label)
pub const CHECKER_SPECIES: &[(&str, &str)] = &[("dog", "Dog"), ("cat", "Cat")];

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("prediction request failed: {0}")]
    Http(#[source] reqwest::Error),
    #[error("prediction service returned status {0}")]
    Status(u16),
    #[error("unreadable prediction response: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("{}", MISSING_INPUT)]
    EmptyInput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionRequest<'a> {
    pub symptom: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SymptomFinding {
    #[serde(default)]
    pub original_text: Option<String>,
    pub normalized_symptom: String,
    pub risk: String,
    pub advice: String,
}

impl SymptomFinding {
    pub fn severity(&self) -> Severity {
        Severity::from_risk(&self.risk)
    }

    /// Risk as shown on the card
    pub fn risk_label(&self) -> String {
        self.risk.to_uppercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HighestRisk {
    pub level: String,
    #[serde(default)]
    pub symptom: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub results: Vec<SymptomFinding>,
    #[serde(default)]
    pub highest_risk: Option<HighestRisk>,
    #[serde(default)]
    pub user_input: Option<String>,
}

/// Colour tier for a risk string; unknown values read as low
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Low,
    Medium,
    High,
    Emergency,
}

impl Severity {
    pub fn from_risk(risk: &str) -> Self {
        match risk {
            "emergency" => Severity::Emergency,
            "high" => Severity::High,
            "medium" => Severity::Medium,
            _ => Severity::Low,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Emergency => "risk-emergency",
            Severity::High => "risk-high",
            Severity::Medium => "risk-medium",
            Severity::Low => "risk-low",
        }
    }
}

/// Checker form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomQuery {
    pub species: String,
    pub description: String,
}

impl SymptomQuery {
    /// The description as typed, once a supported species is chosen and the
    /// description has non-whitespace content
    pub fn validated(&self) -> Result<&str, PredictionError> {
        let species_ok = CHECKER_SPECIES.iter().any(|(value, _)| *value == self.species);
        if !species_ok || self.description.trim().is_empty() {
            return Err(PredictionError::EmptyInput);
        }
        Ok(&self.description)
    }
}

/// One finding as the checker shows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindingCard {
    pub symptom: String,
    /// The user's wording, when it differs from the normalized symptom
    pub original_text: Option<String>,
    pub label: String,
    pub css_class: &'static str,
    pub advice: String,
}

impl From<&SymptomFinding> for FindingCard {
    fn from(finding: &SymptomFinding) -> Self {
        Self {
            symptom: finding.normalized_symptom.clone(),
            original_text: finding
                .original_text
                .clone()
                .filter(|text| *text != finding.normalized_symptom),
            label: finding.risk_label(),
            css_class: finding.severity().css_class(),
            advice: finding.advice.clone(),
        }
    }
}

/// Everything the result panel renders for a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisView {
    /// Summary markdown rendered to HTML, raw HTML escaped
    pub summary_html: String,
    pub cards: Vec<FindingCard>,
}

impl AnalysisView {
    pub fn from_response(response: &PredictionResponse) -> Self {
        Self {
            summary_html: render_markdown(&response.summary),
            cards: response.results.iter().map(FindingCard::from).collect(),
        }
    }
}

#[async_trait(?Send)]
pub trait SymptomPredictor {
    async fn predict(&self, symptom: &str) -> Result<PredictionResponse, PredictionError>;
}

/// `SymptomPredictor` over HTTP (fetch on wasm32)
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PredictionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl SymptomPredictor for PredictionClient {
    async fn predict(&self, symptom: &str) -> Result<PredictionResponse, PredictionError> {
        log::debug!("POST {}", self.endpoint);
        let response = self
            .http
            .post(&self.endpoint)
            .json(&PredictionRequest { symptom })
            .send()
            .await
            .map_err(PredictionError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictionError::Status(status.as_u16()));
        }

        response
            .json::<PredictionResponse>()
            .await
            .map_err(PredictionError::Decode)
    }
}

/// Validate the query, then ask the predictor
pub async fn analyze<P: SymptomPredictor + ?Sized>(
    predictor: &P,
    query: &SymptomQuery,
) -> Result<PredictionResponse, PredictionError> {
    let symptom = query.validated()?;
    predictor.predict(symptom).await.map_err(|e| {
        log::error!("Symptom analysis failed: {}", e);
        e
    })
}

/// Result of asking to start an analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Begin {
    Started,
    /// A request is already running; nothing changed
    Busy,
    /// Input incomplete; the previous result is kept
    Rejected(Notice),
}

/// Checker page state. At most one request is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnalysisState {
    #[default]
    Idle,
    Pending,
    Ready(PredictionResponse),
    Failed,
}

impl AnalysisState {
    pub fn is_pending(&self) -> bool {
        matches!(self, AnalysisState::Pending)
    }

    /// Check the query and enter `Pending`, dropping the previous result.
    /// Busy or invalid input leaves the state untouched.
    pub fn begin(&mut self, query: &SymptomQuery) -> Begin {
        if self.is_pending() {
            return Begin::Busy;
        }
        if query.validated().is_err() {
            return Begin::Rejected(Notice::warning("Missing Information", MISSING_INPUT));
        }
        *self = AnalysisState::Pending;
        Begin::Started
    }

    /// Record the outcome and return the notice to show
    pub fn finish(&mut self, outcome: Result<PredictionResponse, PredictionError>) -> Notice {
        match outcome {
            Ok(response) => {
                let notice = Notice::success(
                    "Analysis Complete",
                    format!("{} symptom(s) reviewed.", response.results.len()),
                );
                *self = AnalysisState::Ready(response);
                notice
            }
            Err(PredictionError::EmptyInput) => {
                *self = AnalysisState::Idle;
                Notice::warning("Missing Information", MISSING_INPUT)
            }
            Err(_) => {
                *self = AnalysisState::Failed;
                Notice::error("Error", FAILURE_NOTICE)
            }
        }
    }

    pub fn response(&self) -> Option<&PredictionResponse> {
        match self {
            AnalysisState::Ready(response) => Some(response),
            _ => None,
        }
    }

    pub fn view(&self) -> Option<AnalysisView> {
        self.response().map(AnalysisView::from_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned(Option<PredictionResponse>);

    #[async_trait(?Send)]
    impl SymptomPredictor for Canned {
        async fn predict(&self, _symptom: &str) -> Result<PredictionResponse, PredictionError> {
            self.0.clone().ok_or(PredictionError::Status(503))
        }
    }

    fn query(species: &str, description: &str) -> SymptomQuery {
        SymptomQuery {
            species: species.into(),
            description: description.into(),
        }
    }

    fn sample() -> PredictionResponse {
        serde_json::from_str(
            r#"{"summary":"S","results":[{"normalized_symptom":"vomiting","risk":"high","advice":"A"}]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_severity_tiers() {
        assert_eq!(Severity::from_risk("emergency"), Severity::Emergency);
        assert_eq!(Severity::from_risk("medium"), Severity::Medium);
        assert_eq!(Severity::from_risk("unknown"), Severity::Low);
        assert_eq!(Severity::from_risk("HIGH"), Severity::Low);
    }

    #[test]
    fn test_query_validation() {
        assert!(query("", "vomiting").validated().is_err());
        assert!(query("bird", "vomiting").validated().is_err());
        assert!(query("dog", "   ").validated().is_err());
        assert_eq!(query("cat", " sneezing ").validated().unwrap(), " sneezing ");
    }

    #[test]
    fn test_single_request_in_flight() {
        let mut state = AnalysisState::Ready(sample());
        assert_eq!(state.begin(&query("dog", "vomiting")), Begin::Started);
        assert!(state.response().is_none());
        assert_eq!(state.begin(&query("dog", "vomiting")), Begin::Busy);
    }

    #[test]
    fn test_invalid_input_keeps_previous_result() {
        let mut state = AnalysisState::Ready(sample());
        let outcome = state.begin(&query("", "vomiting"));

        let Begin::Rejected(notice) = outcome else {
            panic!("expected rejection, got {:?}", outcome);
        };
        assert_eq!(notice.description, MISSING_INPUT);
        assert_eq!(state, AnalysisState::Ready(sample()));
    }

    #[tokio::test]
    async fn test_ready_view() {
        let mut state = AnalysisState::default();
        let q = query("dog", "vomiting");
        assert_eq!(state.begin(&q), Begin::Started);
        let notice = state.finish(analyze(&Canned(Some(sample())), &q).await);
        assert_eq!(notice.level, crate::notice::NoticeLevel::Success);

        let view = state.view().unwrap();
        assert_eq!(view.summary_html.trim(), "<p>S</p>");
        assert_eq!(
            view.cards,
            vec![FindingCard {
                symptom: "vomiting".into(),
                original_text: None,
                label: "HIGH".into(),
                css_class: "risk-high",
                advice: "A".into(),
            }]
        );
    }

    #[test]
    fn test_card_keeps_differing_original_text() {
        let finding = SymptomFinding {
            original_text: Some("throwing up".into()),
            normalized_symptom: "vomiting".into(),
            risk: "emergency".into(),
            advice: "Go now.".into(),
        };
        let card = FindingCard::from(&finding);
        assert_eq!(card.original_text.as_deref(), Some("throwing up"));
        assert_eq!(card.label, "EMERGENCY");
        assert_eq!(card.css_class, "risk-emergency");
    }

    #[test]
    fn test_summary_markdown_is_escaped() {
        let response = PredictionResponse {
            summary: "Most urgent: **vomiting** <img src=x>".into(),
            results: vec![],
            highest_risk: None,
            user_input: None,
        };
        let view = AnalysisView::from_response(&response);
        assert!(view.summary_html.contains("<strong>vomiting</strong>"));
        assert!(!view.summary_html.contains("<img"));
    }

    #[tokio::test]
    async fn test_failure_clears_result() {
        let mut state = AnalysisState::default();
        let q = query("cat", "cough");
        state.begin(&q);
        let notice = state.finish(analyze(&Canned(None), &q).await);
        assert_eq!(notice.description, FAILURE_NOTICE);
        assert_eq!(state, AnalysisState::Failed);
        assert!(state.view().is_none());
    }

    #[tokio::test]
    async fn test_empty_input_never_calls_service() {
        let mut state = AnalysisState::default();
        let notice = state.finish(analyze(&Canned(Some(sample())), &query("dog", "")).await);
        assert_eq!(notice.description, MISSING_INPUT);
        assert_eq!(state, AnalysisState::Idle);
    }
}
