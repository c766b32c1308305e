/// Preference vectorizer
///
/// Turns survey answers into the numbers the recommender works with,
/// using the marking scheme's per-option scores.

use crate::core::BinaryAxis;
use crate::store::{MarkingScheme, Responses};
use std::collections::BTreeMap;

/// User-side input to the recommender
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPreferences {
    /// Scores in marking-scheme order
    pub vector: Vec<i64>,
    /// Scores for answered binary-axis questions
    pub binary: BTreeMap<BinaryAxis, i64>,
}

/// Vectorizer over a marking scheme
pub struct Vectorizer;

impl Vectorizer {
    /// Build the preference vector and binary preferences
    ///
    /// Unanswered questions are skipped, so the vector is shorter than the
    /// marking scheme whenever the survey is incomplete. Use
    /// [`Vectorizer::vectorize_zero_filled`] when the result has to line up
    /// with distro scores.
    pub fn vectorize(responses: &Responses, scheme: &MarkingScheme) -> UserPreferences {
        Self::build(responses, scheme, false)
    }

    /// Same as [`Vectorizer::vectorize`] but unanswered questions score 0,
    /// so the vector always has one entry per marking-scheme question
    pub fn vectorize_zero_filled(responses: &Responses, scheme: &MarkingScheme) -> UserPreferences {
        Self::build(responses, scheme, true)
    }

    fn build(responses: &Responses, scheme: &MarkingScheme, zero_fill: bool) -> UserPreferences {
        let mut preferences = UserPreferences::default();

        for entry in &scheme.questions {
            let Some(option_id) = responses.get(&entry.question_id) else {
                if zero_fill {
                    preferences.vector.push(0);
                }
                continue;
            };

            let score = entry.score_for(option_id);
            preferences.vector.push(score);

            if let Some(axis) = entry.parameter_name.as_deref().and_then(BinaryAxis::from_name) {
                preferences.binary.insert(axis, score);
            }
        }

        preferences
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MarkingDocument;

    fn scheme() -> MarkingScheme {
        let json = r#"{"user_vector": {"questions": [
            {"question_id": 1, "option_id_to_score": {"1": 5, "2": 3, "3": 1}},
            {"question_id": 2, "parameter_name": "updates", "option_id_to_score": {"1": 1, "2": 0}},
            {"question_id": 3, "parameter_name": "UI_Look", "option_id_to_score": {"1": 2, "2": 4}},
            {"question_id": 4, "parameter_name": "gaming", "option_id_to_score": {"1": 3}}
        ]}}"#;
        serde_json::from_str::<MarkingDocument>(json).unwrap().user_vector
    }

    #[test]
    fn test_all_answered() {
        let responses: Responses = [("1", "2"), ("2", "1"), ("3", "2"), ("4", "1")]
            .into_iter()
            .collect();

        let prefs = Vectorizer::vectorize(&responses, &scheme());

        assert_eq!(prefs.vector, vec![3, 1, 4, 3]);
        assert_eq!(prefs.vector.len(), scheme().len());
        assert_eq!(prefs.binary.get(&BinaryAxis::Updates), Some(&1));
        assert_eq!(prefs.binary.get(&BinaryAxis::UiLook), Some(&4));
        // "gaming" isn't a binary axis
        assert_eq!(prefs.binary.len(), 2);
    }

    #[test]
    fn test_unanswered_question_shortens_vector() {
        let responses: Responses = [("1", "1"), ("3", "1"), ("4", "1")].into_iter().collect();

        let prefs = Vectorizer::vectorize(&responses, &scheme());

        assert_eq!(prefs.vector, vec![5, 2, 3]);
        assert_eq!(prefs.vector.len(), scheme().len() - 1);
        assert!(!prefs.binary.contains_key(&BinaryAxis::Updates));
    }

    #[test]
    fn test_zero_fill_keeps_alignment() {
        let responses: Responses = [("1", "1"), ("3", "1"), ("4", "1")].into_iter().collect();

        let prefs = Vectorizer::vectorize_zero_filled(&responses, &scheme());

        assert_eq!(prefs.vector, vec![5, 0, 2, 3]);
        assert_eq!(prefs.vector.len(), scheme().len());
        assert!(!prefs.binary.contains_key(&BinaryAxis::Updates));
    }

    #[test]
    fn test_unknown_option_scores_zero() {
        let responses: Responses = [("1", "99"), ("2", "2")].into_iter().collect();

        let prefs = Vectorizer::vectorize(&responses, &scheme());

        assert_eq!(prefs.vector, vec![0, 0]);
        assert_eq!(prefs.binary.get(&BinaryAxis::Updates), Some(&0));
    }

    #[test]
    fn test_empty_inputs() {
        let prefs = Vectorizer::vectorize(&Responses::new(), &scheme());
        assert!(prefs.vector.is_empty());
        assert!(prefs.binary.is_empty());

        let responses: Responses = [("1", "1")].into_iter().collect();
        let prefs = Vectorizer::vectorize(&responses, &MarkingScheme::default());
        assert_eq!(prefs, UserPreferences::default());
    }
}
