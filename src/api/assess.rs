//! The AIQ estimation pipeline.
//!
//! One linear pass per request: method check, credential lookup, body
//! validation, a single upstream call, then parse-and-merge. Every early exit
//! happens before the upstream is contacted.

use serde_json::Value;
use tracing::{error, info};

use super::parsing;
use crate::ai::{CompletionBackend, build_prompt};
use crate::core::config::AppConfig;
use crate::core::models::{AssessmentRequest, Report};
use crate::errors::AiqError;
use crate::prompt::build_assessment_prompt;

/// Runs the full assessment for one proxy event.
///
/// # Errors
///
/// Returns the [`AiqError`] for whichever step failed first; see
/// [`AiqError::status_code`] for the HTTP mapping.
pub async fn assess_event(
    payload: &Value,
    config: &AppConfig,
    backend: &dyn CompletionBackend,
) -> Result<Report, AiqError> {
    if !parsing::is_post(payload) {
        return Err(AiqError::MethodNotAllowed);
    }

    let api_key = config
        .openai_api_key
        .as_deref()
        .ok_or_else(|| AiqError::MissingConfig("OPENAI_API_KEY".to_string()))?;

    let request = AssessmentRequest::from_body(&parsing::parse_json_body(payload));
    let Some(company) = request.company() else {
        return Err(AiqError::BadRequest("company is required".to_string()));
    };

    info!(company = %company, "Estimating AIQ");

    let user_prompt = build_assessment_prompt(company, &request);
    let content = backend.complete(api_key, build_prompt(&user_prompt)).await?;

    parse_report(&content)
}

/// Parses the model's completion text and fills in defaults.
///
/// # Errors
///
/// Returns [`AiqError::InvalidJson`] when the text is not JSON, and
/// [`AiqError::Internal`] when it is the JSON literal `null`.
pub fn parse_report(content: &str) -> Result<Report, AiqError> {
    let parsed: Value = serde_json::from_str(content).map_err(|e| {
        error!(content = %content, "Failed to parse JSON from OpenAI: {}", e);
        AiqError::InvalidJson(e.to_string())
    })?;

    if parsed.is_null() {
        error!("OpenAI returned a JSON null");
        return Err(AiqError::Internal(
            "OpenAI completion parsed to null".to_string(),
        ));
    }

    Ok(Report::from_model_output(&parsed))
}
