//! AIQ - a serverless endpoint that estimates an organization's AI maturity.
//!
//! A single API Lambda accepts `{ company, industry?, region?, size? }`, asks
//! the `OpenAI` chat-completions API for a fixed-shape JSON "AIQ" report, and
//! returns that report with defaults filled in for anything the model left out.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution (`lambda_runtime`)
//! - reqwest for the one outbound `OpenAI` call
//! - openai-api-rs message types for prompt construction
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use aiq::ai::LlmClient;
//! use aiq::api::handler::handle_event;
//! use aiq::core::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() {
//!     aiq::setup_logging();
//!
//!     let config = AppConfig::from_env();
//!     let client = LlmClient::from_config(&config);
//!     let event = serde_json::json!({
//!         "requestContext": { "http": { "method": "POST" } },
//!         "body": r#"{"company":"Acme Corp","industry":"Logistics"}"#
//!     });
//!
//!     let response = handle_event(&event, &config, &client).await;
//!     println!("{response}");
//! }
//! ```

pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod prompt;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration, filtered by `RUST_LOG` (default `info`). It
/// should be called once at the start of the Lambda binary.
///
/// # Example
///
/// ```
/// aiq::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
