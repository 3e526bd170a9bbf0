use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// How a rating is pulled out of the model's free-text reply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// First run of decimal digits wins, whatever it is
    #[default]
    FirstNumber,
    /// Skip scale expressions such as "1-10" or "out of 10" and prefer the
    /// first integer in 1..=10, else behave like `FirstNumber`
    Bounded,
}

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit run pattern is valid"));

static SCALE_EXPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+\s*(?:-|–|to)\s*\d+|\bout\s+of\s+\d+|/\s*\d+")
        .expect("scale expression pattern is valid")
});

static IN_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:10|[1-9])\b").expect("in-range pattern is valid"));

/// Extract a depression scale from a model reply. `None` means the reply
/// holds nothing usable and the caller should substitute its fallback.
///
/// The value is not clamped: in `FirstNumber` mode a reply of "42" is 42.0.
pub fn extract_scale(reply: &str, mode: ParseMode) -> Option<f64> {
    match mode {
        ParseMode::FirstNumber => first_number(reply),
        ParseMode::Bounded => bounded(reply).or_else(|| first_number(reply)),
    }
}

fn first_number(reply: &str) -> Option<f64> {
    DIGIT_RUN
        .find(reply)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

fn bounded(reply: &str) -> Option<f64> {
    let stripped = SCALE_EXPRESSION.replace_all(reply, " ");
    IN_RANGE
        .find(&stripped)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}
