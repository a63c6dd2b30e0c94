//! API Lambda handler.
//!
//! Loads configuration, runs the assessment pipeline against the live
//! `OpenAI` client, and maps the outcome onto a proxy response.

use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use super::{assess, helpers, parsing};
use crate::ai::{CompletionBackend, LlmClient};
use crate::core::config::AppConfig;

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Request failures are returned as proxy responses with the matching status
/// code, so this never returns `Err` in practice.
#[tracing::instrument(level = "info", skip(event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<impl Serialize, Error> {
    let config = AppConfig::from_env();
    let client = LlmClient::from_config(&config);

    Ok(handle_event(&event.payload, &config, &client).await)
}

/// Runs one request through the pipeline and renders the response.
pub async fn handle_event(
    payload: &Value,
    config: &AppConfig,
    backend: &dyn CompletionBackend,
) -> Value {
    info!(
        method = parsing::http_method(payload).unwrap_or("<none>"),
        "API Lambda received request"
    );

    match assess::assess_event(payload, config, backend).await {
        Ok(report) => helpers::ok_json(&report),
        Err(e) => {
            if e.status_code() >= 500 {
                error!("AIQ request failed: {}", e);
            } else {
                info!("AIQ request rejected: {}", e);
            }
            helpers::error_to_response(&e)
        }
    }
}
