/// System instruction asking the model to rate one answer on the 1-10 scale.
///
/// Question and answer are embedded verbatim, quotes included.
pub fn build_rating_prompt(question_text: &str, student_response: &str) -> String {
    format!(
        "You are an AI model specializing in student mental health assessment.
Analyze the following response to assess potential signs of depression: '{question_text}'
The student responded: '{student_response}'

Rate on a scale of 1-10 where:
1-2 = Low or no signs of depression
3-4 = Mild signs of depression
5-6 = Moderate signs of depression
7-8 = Noticeable signs of depression
9-10 = Significant signs of depression

Consider:
- Emotional state
- Academic performance
- Social integration
- Stress levels
- Coping mechanisms

Provide only the numerical rating."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_question_and_answer_verbatim() {
        let prompt = build_rating_prompt(
            "How often do you feel overwhelmed?",
            "Every day, it's \"too much\".",
        );
        assert!(prompt.contains("'How often do you feel overwhelmed?'"));
        assert!(prompt.contains("The student responded: 'Every day, it's \"too much\".'"));
    }

    #[test]
    fn test_prompt_carries_rubric_bands() {
        let prompt = build_rating_prompt("q", "a");
        for band in ["Low", "Mild", "Moderate", "Noticeable", "Significant"] {
            assert!(prompt.contains(band), "missing band {band}");
        }
        assert!(prompt.ends_with("Provide only the numerical rating."));
    }

    #[test]
    fn test_prompt_with_empty_answer() {
        let prompt = build_rating_prompt("q", "");
        assert!(prompt.contains("The student responded: ''"));
    }
}
