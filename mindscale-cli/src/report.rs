//! Terminal rendering of a scored assessment.

use crate::catalog::catalog;
use crate::error::CliError;
use mindscale_types::{AssessmentResult, Category, RiskTier, ScoredRecord};
use std::io::Write;

pub const SUBMISSION_ERROR: &str =
    "Error: Unable to process your responses. Please try again later.";

/// Category a record is shown under: its own tag, or by position in the
/// catalog when the service echoed none
fn display_category(index: usize, record: &ScoredRecord) -> Category {
    if let Some(category) = record.record.category {
        return category;
    }

    let mut end = 0;
    for group in catalog() {
        end += group.len();
        if index < end {
            return group.category;
        }
    }
    Category::Social
}

/// Records grouped for the indicator columns, in response order
pub fn group_by_category(result: &AssessmentResult) -> Vec<(Category, Vec<&ScoredRecord>)> {
    let mut columns: Vec<(Category, Vec<&ScoredRecord>)> =
        Category::ALL.iter().map(|c| (*c, Vec::new())).collect();

    for (index, record) in result.responses.iter().enumerate() {
        let category = display_category(index, record);
        if let Some((_, records)) = columns.iter_mut().find(|(c, _)| *c == category) {
            records.push(record);
        }
    }

    columns
}

pub fn render_result<W: Write>(result: &AssessmentResult, output: &mut W) -> Result<(), CliError> {
    writeln!(
        output,
        "Overall Depression Risk Score: {:.1}/10",
        result.overall_depression_scale
    )?;

    writeln!(output, "{}", status_line(&result.depression_status))?;

    writeln!(output)?;
    writeln!(output, "Detailed Assessment")?;

    for (category, records) in group_by_category(result) {
        writeln!(output)?;
        writeln!(output, "{}", category.indicators_title())?;
        for scored in records {
            writeln!(
                output,
                "- Question {}: {:.1}/10",
                scored.record.question_number, scored.depression_scale
            )?;
        }
    }

    Ok(())
}

/// Status line with its colored indicator, bare label when unrecognised
pub fn status_line(label: &str) -> String {
    match RiskTier::from_label(label) {
        Some(tier) => format!("Status: {} {}", tier.indicator(), tier.label()),
        None => format!("Status: {label}"),
    }
}
