use aiq::core::models::AssessmentRequest;
use aiq::prompt::{PILLAR_NAMES, SYSTEM_PROMPT, build_assessment_prompt};
use serde_json::json;

fn request(body: serde_json::Value) -> AssessmentRequest {
    AssessmentRequest::from_body(&body)
}

#[test]
fn test_prompt_interpolates_request_fields() {
    let req = request(json!({
        "company": "Acme Corp",
        "industry": "Logistics",
        "region": "EMEA",
        "size": "500-1000"
    }));
    let prompt = build_assessment_prompt("Acme Corp", &req);

    assert!(prompt.contains("Company: Acme Corp\n"));
    assert!(prompt.contains("Industry: Logistics\n"));
    assert!(prompt.contains("Region: EMEA\n"));
    assert!(prompt.contains("Size: 500-1000\n"));
    assert!(prompt.contains("AIQ is on a 0–100 scale."));
}

#[test]
fn test_prompt_uses_unknown_for_missing_fields() {
    let req = request(json!({ "company": "Acme Corp" }));
    let prompt = build_assessment_prompt("Acme Corp", &req);

    assert!(prompt.contains("Industry: unknown\n"));
    assert!(prompt.contains("Region: unknown\n"));
    assert!(prompt.contains("Size: unknown\n"));
}

#[test]
fn test_prompt_lists_every_pillar_in_order() {
    let req = request(json!({ "company": "Acme Corp" }));
    let prompt = build_assessment_prompt("Acme Corp", &req);

    let positions: Vec<usize> = PILLAR_NAMES
        .iter()
        .map(|name| {
            prompt
                .find(&format!("\"name\": \"{name}\""))
                .unwrap_or_else(|| panic!("pillar {name} missing from prompt"))
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_prompt_describes_report_shape() {
    let req = request(json!({ "company": "Acme Corp" }));
    let prompt = build_assessment_prompt("Acme Corp", &req);

    for field in [
        "\"aiqScore\": number",
        "\"industryAverage\": number",
        "\"leadersAverage\": number",
        "\"summary\": string",
        "\"strengths\": [string, ...]",
        "\"gaps\": [string, ...]",
        "\"roadmap\": [string, ...]",
        "3-5 bullet strengths",
        "3-5 bullet gaps",
        "4-7 actions for next 90 days",
        "2-3 sentence executive summary",
    ] {
        assert!(prompt.contains(field), "prompt is missing {field}");
    }
}

#[test]
fn test_system_prompt_demands_json_only() {
    assert!(SYSTEM_PROMPT.contains("strict JSON generator"));
    assert!(SYSTEM_PROMPT.contains("Never include commentary outside of JSON."));
}
