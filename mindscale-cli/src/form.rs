//! Survey form: prompting for answers and turning them into a submission.

use crate::catalog::{catalog, QuestionGroup};
use crate::error::CliError;
use mindscale_types::{Category, QuestionRecord};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::debug;

pub const FORM_TITLE: &str = "Student Depression Assessment";
pub const FORM_INTRO: &str =
    "This assessment helps identify potential signs of depression among students.";

/// Free-text answers keyed by category, in catalog order.
///
/// Also the shape of an `--answers` file; missing answers are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyAnswers {
    pub emotional: Vec<String>,
    pub academic: Vec<String>,
    pub social: Vec<String>,
}

impl SurveyAnswers {
    pub fn for_category(&self, category: Category) -> &[String] {
        match category {
            Category::Emotional => &self.emotional,
            Category::Academic => &self.academic,
            Category::Social => &self.social,
        }
    }

    fn for_category_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Emotional => &mut self.emotional,
            Category::Academic => &mut self.academic,
            Category::Social => &mut self.social,
        }
    }

    /// Answer to the `index`th question of a category, empty when unanswered
    pub fn answer(&self, category: Category, index: usize) -> &str {
        self.for_category(category)
            .get(index)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

fn write_header<W: Write>(output: &mut W) -> Result<(), CliError> {
    writeln!(output, "{FORM_TITLE}")?;
    writeln!(output, "{FORM_INTRO}")?;
    Ok(())
}

fn write_group_header<W: Write>(output: &mut W, group: &QuestionGroup) -> Result<(), CliError> {
    writeln!(output)?;
    writeln!(output, "{} Assessment", group.category.title())?;
    Ok(())
}

/// Print every group and its numbered questions without asking for input
pub fn print_catalog<W: Write>(output: &mut W) -> Result<(), CliError> {
    write_header(output)?;
    for group in catalog() {
        write_group_header(output, &group)?;
        for (i, question) in group.questions.iter().enumerate() {
            writeln!(output, "{}. {}", i + 1, question)?;
        }
    }
    Ok(())
}

/// Show the form and read one line per question.
///
/// Answers are taken as typed, trailing newline stripped. End of input
/// leaves the remaining answers empty.
pub fn render_form<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<SurveyAnswers, CliError> {
    let mut answers = SurveyAnswers::default();

    write_header(output)?;
    for group in catalog() {
        write_group_header(output, &group)?;
        for (i, question) in group.questions.iter().enumerate() {
            writeln!(output, "{}. {}", i + 1, question)?;
            write!(output, "Your response (Question {}): ", i + 1)?;
            output.flush()?;

            let mut line = String::new();
            input.read_line(&mut line)?;
            let answer = line.trim_end_matches(['\r', '\n']).to_string();
            answers.for_category_mut(group.category).push(answer);
        }
    }

    Ok(answers)
}

/// Ordered records for every catalog question, numbered 1..=N across
/// groups and tagged with their category
pub fn build_submission(answers: &SurveyAnswers) -> Vec<QuestionRecord> {
    let mut records = Vec::new();
    let mut question_number = 0;

    for group in catalog() {
        for (i, question) in group.questions.iter().enumerate() {
            question_number += 1;
            records.push(
                QuestionRecord::new(
                    question_number,
                    *question,
                    answers.answer(group.category, i),
                )
                .with_category(group.category),
            );
        }
    }

    records
}

/// Read answers from a `.json` file, or TOML for any other extension
pub fn load_answers(path: &Path) -> Result<SurveyAnswers, CliError> {
    debug!(path = %path.display(), "Loading answers file");
    let content = std::fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Ok(serde_json::from_str(&content)?)
    } else {
        toml::from_str(&content).map_err(|e| {
            CliError::Config(format!(
                "Failed to parse answers file {}: {}",
                path.display(),
                e
            ))
        })
    }
}
