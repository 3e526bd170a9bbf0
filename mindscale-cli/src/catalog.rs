//! Fixed question catalog, five questions per category.

use mindscale_types::Category;

const EMOTIONAL: [&str; 5] = [
    "How often do you feel overwhelmed by academic pressure?",
    "How frequently do you experience difficulty sleeping?",
    "How often do you feel lonely or isolated at school?",
    "How would you rate your ability to concentrate in class?",
    "How often do you feel hopeless about your academic future?",
];

const ACADEMIC: [&str; 5] = [
    "How satisfied are you with your current academic performance?",
    "How well can you keep up with assignment deadlines?",
    "How often do you participate in class discussions?",
    "How comfortable are you asking teachers for help?",
    "How well can you maintain your study schedule?",
];

const SOCIAL: [&str; 5] = [
    "How often do you engage in extracurricular activities?",
    "How comfortable are you working in group projects?",
    "How strong is your support system at school?",
    "How often do you interact with classmates outside of class?",
    "How well do you handle academic competition?",
];

/// A category and its ordered questions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionGroup {
    pub category: Category,
    pub questions: &'static [&'static str],
}

impl QuestionGroup {
    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

/// Groups in submission order: emotional, academic, social
pub fn catalog() -> [QuestionGroup; 3] {
    [
        QuestionGroup {
            category: Category::Emotional,
            questions: &EMOTIONAL,
        },
        QuestionGroup {
            category: Category::Academic,
            questions: &ACADEMIC,
        },
        QuestionGroup {
            category: Category::Social,
            questions: &SOCIAL,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_sizes() {
        let groups = catalog();
        let categories: Vec<_> = groups.iter().map(|g| g.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
        assert!(groups.iter().all(|g| g.len() == 5));
    }

    #[test]
    fn test_questions_are_verbatim() {
        let [emotional, _, social] = catalog();
        assert_eq!(
            emotional.questions[0],
            "How often do you feel overwhelmed by academic pressure?"
        );
        assert_eq!(
            social.questions[2],
            "How strong is your support system at school?"
        );
    }
}
