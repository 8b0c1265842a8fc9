use thiserror::Error;

use crate::scoring::domain::level::CefrLevel;
use crate::shared::constants::{
    DEFAULT_DURATION_SLACK_SECS, DEFAULT_FILLER_WORDS, DEFAULT_ROLLING_WINDOW, PACE_CEILINGS_WPM,
    VOCABULARY_CURVE_MINUTES, VOCABULARY_CURVE_WORDS, VOCABULARY_SCALE_FACTORS,
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "vocabulary curve control points are invalid \
         (need >= 2 strictly increasing minutes with matching word counts)"
    )]
    InvalidVocabularyCurve,
}

/// Immutable configuration for one analysis pipeline.
///
/// Constructed once and passed in; nothing here is mutated after
/// construction, so a single config can back concurrent analyses.
#[derive(Clone, Debug)]
pub struct AnalysisConfig {
    /// Tokens counted as fillers (exact, case-sensitive match).
    pub filler_words: Vec<String>,
    /// Rolling-pace window, in segments.
    pub rolling_window: usize,
    /// Seconds of slack over the word count before a raw gap is treated
    /// as silence rather than speaking time.
    pub duration_slack_secs: u32,
    /// Words-per-minute ceiling per level, ascending.
    pub pace_ceilings_wpm: Vec<(CefrLevel, f64)>,
    /// Vocabulary growth control points (minutes, expected words).
    pub curve_minutes: Vec<f64>,
    pub curve_words: Vec<f64>,
    /// Per-level scale applied to the vocabulary curve, ascending.
    pub vocabulary_scale_factors: Vec<(CefrLevel, f64)>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            filler_words: DEFAULT_FILLER_WORDS.iter().map(|s| s.to_string()).collect(),
            rolling_window: DEFAULT_ROLLING_WINDOW,
            duration_slack_secs: DEFAULT_DURATION_SLACK_SECS,
            pace_ceilings_wpm: PACE_CEILINGS_WPM.to_vec(),
            curve_minutes: VOCABULARY_CURVE_MINUTES.to_vec(),
            curve_words: VOCABULARY_CURVE_WORDS.to_vec(),
            vocabulary_scale_factors: VOCABULARY_SCALE_FACTORS.to_vec(),
        }
    }
}

impl AnalysisConfig {
    /// Default config with a custom filler set.
    pub fn with_filler_words(filler_words: Vec<String>) -> Self {
        Self {
            filler_words,
            ..Self::default()
        }
    }
}
