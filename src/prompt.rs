use crate::core::models::AssessmentRequest;

/// System instruction sent ahead of every assessment prompt.
pub const SYSTEM_PROMPT: &str = "You are a strict JSON generator for AI maturity (AIQ) assessments. Never include commentary outside of JSON.";

/// The five fixed pillars every report is scored on, in prompt order.
pub const PILLAR_NAMES: [&str; 5] = [
    "AI Talent & Skills",
    "Data & Infrastructure",
    "Automation & Operations",
    "AI in Products & CX",
    "Governance & Risk",
];

/// Builds the user prompt for an assessment.
///
/// The request fields are interpolated verbatim, followed by the exact JSON
/// shape the model must return.
#[must_use]
pub fn build_assessment_prompt(company: &str, request: &AssessmentRequest) -> String {
    let pillars = PILLAR_NAMES
        .iter()
        .map(|name| {
            format!(
                "    {{\n      \"name\": \"{name}\",\n      \"score\": number,\n      \"comment\": string\n    }}"
            )
        })
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        r#"
You are an AI transformation consultant.
For the company described below, estimate its AI maturity (AIQ score) and return a strict JSON object.

Company: {company}
Industry: {industry}
Region: {region}
Size: {size}

AIQ is on a 0–100 scale.

Return ONLY valid JSON with this exact structure and nothing else:

{{
  "aiqScore": number,                 // 0-100
  "industryAverage": number,          // 0-100
  "leadersAverage": number,           // 0-100
  "summary": string,                  // 2-3 sentence executive summary
  "strengths": [string, ...],         // 3-5 bullet strengths
  "gaps": [string, ...],              // 3-5 bullet gaps
  "roadmap": [string, ...],           // 4-7 actions for next 90 days
  "pillars": [
{pillars}
  ]
}}
"#,
        industry = request.industry(),
        region = request.region(),
        size = request.size(),
    )
}
