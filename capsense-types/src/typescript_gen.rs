use ts_rs::TS;

/// Every wire type the CapSense front end consumes, in declaration order.
pub const API_TYPE_NAMES: &[&str] = &[
    "Classification",
    "AnalysisResult",
    "AnalyzeRequest",
    "DashboardRow",
    "FeedbackVerdict",
    "FeedbackRequest",
    "ErrorResponse",
];

pub fn generate_typescript_definitions(
    type_names: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    if type_names.is_empty() {
        return Err("No type names provided".into());
    }

    let mut definitions = Vec::new();

    for name in type_names {
        let type_def = export_type(name)?;
        let cleaned = clean_type(type_def);

        if !cleaned.trim().is_empty() {
            definitions.push(cleaned);
        }
    }

    Ok(definitions.join("\n\n"))
}

/// Definitions for every type in [`API_TYPE_NAMES`].
pub fn generate_all_definitions() -> Result<String, Box<dyn std::error::Error>> {
    generate_typescript_definitions(API_TYPE_NAMES)
}

fn export_type(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    use crate::*;

    let result = match name {
        "Classification" => Classification::export_to_string()?,
        "AnalysisResult" => AnalysisResult::export_to_string()?,
        "AnalyzeRequest" => AnalyzeRequest::export_to_string()?,
        "DashboardRow" => DashboardRow::export_to_string()?,
        "FeedbackVerdict" => FeedbackVerdict::export_to_string()?,
        "FeedbackRequest" => FeedbackRequest::export_to_string()?,
        "ErrorResponse" => ErrorResponse::export_to_string()?,

        _ => {
            return Err(format!(
                "Unknown type: '{}'. Available types: {}",
                name,
                API_TYPE_NAMES.join(", ")
            )
            .into());
        }
    };

    Ok(result)
}

pub fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let lines: Vec<&str> = type_def.lines().collect();

    let filtered: Vec<&str> = lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
        })
        .cloned()
        .collect();

    filtered.join("\n").trim().to_string()
}
