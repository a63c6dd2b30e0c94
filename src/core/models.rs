use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

pub const DEFAULT_AIQ_SCORE: i64 = 45;
pub const DEFAULT_INDUSTRY_AVERAGE: i64 = 52;
pub const DEFAULT_LEADERS_AVERAGE: i64 = 78;

/// Placeholder substituted for optional request fields that were not supplied.
pub const UNKNOWN: &str = "unknown";

/// Incoming assessment request.
///
/// Optional fields accept any JSON value so a stray number or boolean does not
/// reject the whole request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub company: Option<Value>,
    #[serde(default)]
    pub industry: Option<Value>,
    #[serde(default)]
    pub region: Option<Value>,
    #[serde(default)]
    pub size: Option<Value>,
}

impl AssessmentRequest {
    /// Builds a request from a decoded body. Anything other than a JSON object
    /// is treated as an empty request.
    #[must_use]
    pub fn from_body(body: &Value) -> Self {
        if body.is_object() {
            serde_json::from_value(body.clone()).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Returns the company name if it is a non-empty string.
    #[must_use]
    pub fn company(&self) -> Option<&str> {
        match &self.company {
            Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn industry(&self) -> String {
        display_or_unknown(self.industry.as_ref())
    }

    #[must_use]
    pub fn region(&self) -> String {
        display_or_unknown(self.region.as_ref())
    }

    #[must_use]
    pub fn size(&self) -> String {
        display_or_unknown(self.size.as_ref())
    }
}

/// Renders an optional field for interpolation into the prompt. Empty and
/// falsy values become `"unknown"`; lists are comma-joined.
fn display_or_unknown(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => UNKNOWN.to_string(),
        Some(Value::String(s)) if s.is_empty() => UNKNOWN.to_string(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => UNKNOWN.to_string(),
        Some(other) => render_text(other),
    }
}

fn render_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(render_text).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

/// The normalized assessment returned to the caller.
///
/// Values are kept as raw JSON: whatever the model returned for a field is
/// passed through untouched, only missing or `null` fields are defaulted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub aiq_score: Value,
    pub industry_average: Value,
    pub leaders_average: Value,
    pub summary: Value,
    pub strengths: Value,
    pub gaps: Value,
    pub roadmap: Value,
    pub pillars: Value,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            aiq_score: json!(DEFAULT_AIQ_SCORE),
            industry_average: json!(DEFAULT_INDUSTRY_AVERAGE),
            leaders_average: json!(DEFAULT_LEADERS_AVERAGE),
            summary: json!(""),
            strengths: json!([]),
            gaps: json!([]),
            roadmap: json!([]),
            pillars: json!([]),
        }
    }
}

impl Report {
    /// Merges a parsed model reply over the defaults.
    ///
    /// Non-object replies carry no fields, so they yield the defaults.
    #[must_use]
    pub fn from_model_output(parsed: &Value) -> Self {
        let Some(fields) = parsed.as_object() else {
            return Self::default();
        };

        let defaults = Self::default();
        Self {
            aiq_score: pick(fields, "aiqScore", defaults.aiq_score),
            industry_average: pick(fields, "industryAverage", defaults.industry_average),
            leaders_average: pick(fields, "leadersAverage", defaults.leaders_average),
            summary: pick(fields, "summary", defaults.summary),
            strengths: pick(fields, "strengths", defaults.strengths),
            gaps: pick(fields, "gaps", defaults.gaps),
            roadmap: pick(fields, "roadmap", defaults.roadmap),
            pillars: pick(fields, "pillars", defaults.pillars),
        }
    }
}

fn pick(fields: &Map<String, Value>, key: &str, default: Value) -> Value {
    match fields.get(key) {
        None | Some(Value::Null) => default,
        Some(value) => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falsy_values_survive_the_merge() {
        let report = Report::from_model_output(&json!({
            "aiqScore": 0,
            "summary": "",
            "strengths": false
        }));
        assert_eq!(report.aiq_score, json!(0));
        assert_eq!(report.summary, json!(""));
        assert_eq!(report.strengths, json!(false));
        assert_eq!(report.industry_average, json!(52));
    }

    #[test]
    fn null_fields_are_defaulted() {
        let report = Report::from_model_output(&json!({ "aiqScore": null, "gaps": null }));
        assert_eq!(report.aiq_score, json!(45));
        assert_eq!(report.gaps, json!([]));
    }

    #[test]
    fn non_object_reply_yields_defaults() {
        assert_eq!(Report::from_model_output(&json!([1, 2, 3])), Report::default());
        assert_eq!(Report::from_model_output(&json!(17)), Report::default());
    }

    #[test]
    fn optional_fields_render_unknown_when_blank() {
        let req = AssessmentRequest::from_body(&json!({
            "company": "Acme",
            "industry": "",
            "region": null,
            "size": 250
        }));
        assert_eq!(req.company(), Some("Acme"));
        assert_eq!(req.industry(), "unknown");
        assert_eq!(req.region(), "unknown");
        assert_eq!(req.size(), "250");
    }

    #[test]
    fn list_fields_render_comma_joined() {
        let req = AssessmentRequest::from_body(&json!({
            "company": "Acme",
            "industry": ["Retail", "Logistics"],
            "region": ["EMEA", null, 3]
        }));
        assert_eq!(req.industry(), "Retail,Logistics");
        assert_eq!(req.region(), "EMEA,,3");
    }

    #[test]
    fn company_must_be_a_non_empty_string() {
        for body in [
            json!({}),
            json!({ "company": "" }),
            json!({ "company": 42 }),
            json!({ "company": ["Acme"] }),
            json!("Acme"),
        ] {
            assert_eq!(AssessmentRequest::from_body(&body).company(), None, "{body}");
        }
    }
}
