use std::env;

/// Model used when `OPENAI_MODEL` is not set.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4.1-mini";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub openai_api_key: Option<String>,
    pub openai_org_id: Option<String>,
    pub openai_model: Option<String>,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// Never fails: a missing `OPENAI_API_KEY` is reported per request, not at startup.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            openai_api_key: non_empty_var("OPENAI_API_KEY"),
            openai_org_id: non_empty_var("OPENAI_ORG_ID"),
            openai_model: non_empty_var("OPENAI_MODEL"),
        }
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        self.openai_model.as_deref().unwrap_or(DEFAULT_OPENAI_MODEL)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    non_empty(env::var(key).ok())
}

/// Only the empty string counts as unset; whitespace is passed on as-is.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
