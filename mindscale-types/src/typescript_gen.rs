use ts_rs::TS;

/// Render TypeScript definitions for the named wire types, in the order given
pub fn generate_typescript_definitions(
    type_names: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    if type_names.is_empty() {
        return Err("No type names provided".into());
    }

    let mut definitions = Vec::new();

    for name in type_names {
        let cleaned = clean_type(export_type(name)?);

        if !cleaned.trim().is_empty() {
            definitions.push(cleaned);
        }
    }

    Ok(definitions.join("\n\n"))
}

/// Every exportable type, in dependency order
pub const ALL_TYPES: &[&str] = &[
    "Category",
    "QuestionRecord",
    "ScoredRecord",
    "RiskTier",
    "AssessmentRequest",
    "AssessmentResult",
    "ErrorResponse",
    "HealthResponse",
];

fn export_type(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    use crate::*;

    let result = match name {
        "Category" => Category::export_to_string()?,
        "QuestionRecord" => QuestionRecord::export_to_string()?,
        "ScoredRecord" => ScoredRecord::export_to_string()?,
        "RiskTier" => RiskTier::export_to_string()?,
        "AssessmentRequest" => AssessmentRequest::export_to_string()?,
        "AssessmentResult" => AssessmentResult::export_to_string()?,
        "ErrorResponse" => ErrorResponse::export_to_string()?,
        "HealthResponse" => HealthResponse::export_to_string()?,
        _ => {
            return Err(format!(
                "Unknown type: '{}'. Available types: {}",
                name,
                ALL_TYPES.join(", ")
            )
            .into());
        }
    };

    Ok(result)
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let filtered: Vec<&str> = type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
        })
        .collect();

    filtered.join("\n").trim().to_string()
}
