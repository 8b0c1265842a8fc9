use serde::Serialize;

/// Whole-transcript statistics, computed once from the complete segment
/// sequence. `None` marks a statistic that is undefined for this input
/// (zero duration, zero words, or too few segments for rolling metrics);
/// consumers render it as "N/A", never as zero.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    /// Wall time between the first and last segment start, in seconds.
    pub total_duration_secs: u32,
    /// Sum of clean (speaking) durations, in seconds.
    pub clean_duration_secs: u32,
    /// Clean duration in whole minutes, truncated.
    pub clean_duration_minutes: u32,
    /// Final distinct-word count.
    pub vocabulary_size: usize,
    /// Overall words per minute over the clean duration.
    pub pace_wpm: Option<f64>,
    /// Max/min of the defined rolling-window pace values.
    pub max_rolling_wpm: Option<f64>,
    pub min_rolling_wpm: Option<f64>,
    /// Fillers as a percentage of all words.
    pub filler_percent: Option<f64>,
}
