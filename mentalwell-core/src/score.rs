//! Combined-score computation for the results dashboard.
//!
//! The blend weights cognitive performance at 30% and the emotion component
//! at 70%, where the emotion component averages the happy score against the
//! inverse of the sad score. Labels other than happy/sad feed the chart but
//! not the blend.

use crate::types::EmotionScores;

/// Weight of the cognitive percentage in the combined score.
pub const COGNITIVE_WEIGHT: f64 = 0.3;

/// Weight of the emotion component in the combined score.
pub const EMOTION_WEIGHT: f64 = 0.7;

/// Emotion component on a 0-100 scale: `((happy*100) + ((1-sad)*100)) / 2`.
pub fn emotion_component(scores: &EmotionScores) -> f64 {
    ((scores.happy() * 100.0) + ((1.0 - scores.sad()) * 100.0)) / 2.0
}

/// Combined mental-health score on a 0-100 scale.
pub fn combined_score(cognitive_percentage: f64, scores: &EmotionScores) -> f64 {
    COGNITIVE_WEIGHT * cognitive_percentage + EMOTION_WEIGHT * emotion_component(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(happy: f64, sad: f64) -> EmotionScores {
        [("happy".to_string(), happy), ("sad".to_string(), sad)]
            .into_iter()
            .collect()
    }

    #[test]
    fn worked_example_from_the_product_sheet() {
        // cognitive=80, happy=0.6, sad=0.2:
        // emotion component = (60 + 80) / 2 = 70
        // combined = 0.3*80 + 0.7*70 = 24 + 49 = 73
        let result = combined_score(80.0, &scores(0.6, 0.2));
        assert!((result - 73.0).abs() < 1e-9);
    }

    #[test]
    fn emotion_component_of_neutral_scores() {
        // happy=0, sad=0 -> (0 + 100) / 2 = 50
        assert!((emotion_component(&scores(0.0, 0.0)) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn perfect_scores_combine_to_one_hundred() {
        let result = combined_score(100.0, &scores(1.0, 0.0));
        assert!((result - 100.0).abs() < 1e-9);
    }

    #[test]
    fn missing_labels_read_as_zero() {
        let empty = EmotionScores::default();
        // emotion component = (0 + 100) / 2 = 50; combined = 0.3*40 + 0.7*50 = 47
        let result = combined_score(40.0, &empty);
        assert!((result - 47.0).abs() < 1e-9);
    }

    #[test]
    fn extra_emotion_labels_do_not_affect_the_blend() {
        let mut with_extras = scores(0.6, 0.2);
        with_extras.0.insert("angry".to_string(), 0.9);
        with_extras.0.insert("surprise".to_string(), 0.4);
        let plain = scores(0.6, 0.2);
        assert_eq!(combined_score(80.0, &with_extras), combined_score(80.0, &plain));
    }
}
