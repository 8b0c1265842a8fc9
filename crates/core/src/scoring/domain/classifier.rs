use super::level::LevelRange;
use super::pace_scale::PaceScale;
use super::vocabulary_curve::VocabularyCurve;

/// Maps final vocabulary size and overall pace to a CEFR level range via
/// two independent reference scales.
#[derive(Debug)]
pub struct ProficiencyClassifier {
    pace_scale: PaceScale,
    vocabulary_curve: VocabularyCurve,
}

impl ProficiencyClassifier {
    pub fn new(pace_scale: PaceScale, vocabulary_curve: VocabularyCurve) -> Self {
        Self {
            pace_scale,
            vocabulary_curve,
        }
    }

    /// An undefined pace (a transcript with no words) is scored as 0 WPM
    /// so classification always completes.
    pub fn classify(
        &self,
        vocabulary_size: usize,
        clean_duration_minutes: u32,
        pace_wpm: Option<f64>,
    ) -> LevelRange {
        let vocab_level = self
            .vocabulary_curve
            .level_for(vocabulary_size, clean_duration_minutes as f64);
        let pace_level = self.pace_scale.level_for(pace_wpm.unwrap_or(0.0));
        LevelRange::spanning(vocab_level, pace_level)
    }
}
