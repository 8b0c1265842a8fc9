use serde::Serialize;

use super::summary::Summary;
use crate::transcript::domain::segment::Segment;

/// Per-segment cumulative and rolling statistics. `None` is the explicit
/// marker for an undefined value (division guard or unfilled window).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SegmentMetrics {
    pub cumulative_words: usize,
    pub cumulative_fillers: usize,
    pub cumulative_clean_duration: u32,
    /// Cumulative words per minute of clean duration.
    pub pace: Option<f64>,
    /// Cumulative fillers / cumulative words.
    pub filler_share: Option<f64>,
    /// Windowed words per minute; `None` until the window fills.
    pub rolling_pace: Option<f64>,
}

/// Metrics for a whole transcript: one row per segment plus the summary.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TranscriptMetrics {
    pub rows: Vec<SegmentMetrics>,
    pub summary: Summary,
}

/// Computes cumulative and rolling statistics over an ordered segment
/// sequence.
#[derive(Debug)]
pub struct MetricsAggregator {
    window: usize,
}

impl MetricsAggregator {
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
        }
    }

    /// Aggregate the full sequence. Returns `None` only for an empty
    /// slice; every statistic that cannot be computed for a non-empty
    /// sequence degrades to a `None` field instead.
    pub fn aggregate(&self, segments: &[Segment]) -> Option<TranscriptMetrics> {
        let (first, last) = (segments.first()?, segments.last()?);

        let mut rows = Vec::with_capacity(segments.len());
        let mut cumulative_words = 0usize;
        let mut cumulative_fillers = 0usize;
        let mut cumulative_clean = 0u32;
        // Sliding sums over the last `window` segments; mean/mean ratios
        // reduce to sum/sum.
        let mut window_words = 0usize;
        let mut window_clean = 0u32;

        for (i, segment) in segments.iter().enumerate() {
            cumulative_words += segment.word_count;
            cumulative_fillers += segment.filler_count;
            cumulative_clean += segment.clean_duration;

            window_words += segment.word_count;
            window_clean += segment.clean_duration;
            if i >= self.window {
                window_words -= segments[i - self.window].word_count;
                window_clean -= segments[i - self.window].clean_duration;
            }

            let pace = ratio(cumulative_words as f64 * 60.0, cumulative_clean as f64);
            let filler_share = ratio(cumulative_fillers as f64, cumulative_words as f64);
            let rolling_pace = if i + 1 >= self.window {
                ratio(window_words as f64 * 60.0, window_clean as f64)
            } else {
                None
            };

            rows.push(SegmentMetrics {
                cumulative_words,
                cumulative_fillers,
                cumulative_clean_duration: cumulative_clean,
                pace,
                filler_share,
                rolling_pace,
            });
        }

        let defined_rolling = rows.iter().filter_map(|r| r.rolling_pace);
        let max_rolling_wpm = defined_rolling.clone().fold(None, |m: Option<f64>, v| {
            Some(m.map_or(v, |m| m.max(v)))
        });
        let min_rolling_wpm = defined_rolling.fold(None, |m: Option<f64>, v| {
            Some(m.map_or(v, |m| m.min(v)))
        });

        let final_row = rows.last()?;
        let summary = Summary {
            total_duration_secs: last.start_offset - first.start_offset,
            clean_duration_secs: cumulative_clean,
            clean_duration_minutes: cumulative_clean / 60,
            vocabulary_size: last.cumulative_unique_words,
            pace_wpm: final_row.pace,
            max_rolling_wpm,
            min_rolling_wpm,
            filler_percent: final_row.filler_share.map(|s| s * 100.0),
        };

        Some(TranscriptMetrics { rows, summary })
    }
}

fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}
