use serde::Serialize;

use crate::metrics::domain::aggregator::{MetricsAggregator, SegmentMetrics};
use crate::metrics::domain::summary::Summary;
use crate::metrics::domain::word_frequency::{self, WordCount};
use crate::scoring::domain::classifier::ProficiencyClassifier;
use crate::scoring::domain::pace_scale::PaceScale;
use crate::scoring::domain::vocabulary_curve::VocabularyCurve;
use crate::shared::config::{AnalysisConfig, ConfigError};
use crate::transcript::domain::error::TranscriptError;
use crate::transcript::domain::parser::SegmentParser;
use crate::transcript::domain::sanitizer::sanitize;
use crate::transcript::domain::segment::Segment;

/// Full pipeline output: the per-segment table, derived statistics, the
/// proficiency estimate, and the word tally for presentation layers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FluencyReport {
    pub segments: Vec<Segment>,
    pub metrics: Vec<SegmentMetrics>,
    pub summary: Summary,
    /// Level range in the form "B1 - B2".
    pub level_range: String,
    /// Filler set the analysis ran with.
    pub filler_words: Vec<String>,
    /// Token frequency over all cleaned text, most frequent first.
    pub word_frequency: Vec<WordCount>,
}

impl FluencyReport {
    /// Chart time axis: each segment's elapsed offset in seconds.
    pub fn time_axis_secs(&self) -> Vec<u32> {
        self.segments.iter().map(|s| s.start_offset).collect()
    }
}

/// Orchestrates sanitizer -> parser -> aggregator -> classifier for one
/// raw transcript.
///
/// Stateless between runs; holds only immutable configuration, so one
/// instance can serve concurrent analyses.
#[derive(Debug)]
pub struct AnalyzeTranscriptUseCase {
    filler_words: Vec<String>,
    parser: SegmentParser,
    aggregator: MetricsAggregator,
    classifier: ProficiencyClassifier,
}

impl AnalyzeTranscriptUseCase {
    pub fn new(config: AnalysisConfig) -> Result<Self, ConfigError> {
        let curve = VocabularyCurve::new(
            &config.curve_minutes,
            &config.curve_words,
            config.vocabulary_scale_factors.clone(),
        )
        .ok_or(ConfigError::InvalidVocabularyCurve)?;

        Ok(Self {
            parser: SegmentParser::new(&config.filler_words, config.duration_slack_secs),
            aggregator: MetricsAggregator::new(config.rolling_window),
            classifier: ProficiencyClassifier::new(
                PaceScale::new(config.pace_ceilings_wpm),
                curve,
            ),
            filler_words: config.filler_words,
        })
    }

    /// Analyze one raw transcript as copied from a captioning UI.
    ///
    /// Format errors abort with no partial results; statistics that are
    /// undefined for this input come back as `None` fields instead.
    pub fn run(&self, input: &str) -> Result<FluencyReport, TranscriptError> {
        let lines: Vec<&str> = input.trim().lines().collect();
        let pairs = sanitize(&lines);
        log::debug!(
            "sanitized {} raw lines into {} timestamp/content pairs",
            lines.len(),
            pairs.len()
        );

        let segments = self.parser.parse(&pairs)?;
        let metrics = self
            .aggregator
            .aggregate(&segments)
            .ok_or(TranscriptError::EmptyInput)?;

        let summary = metrics.summary;
        let level_range = self.classifier.classify(
            summary.vocabulary_size,
            summary.clean_duration_minutes,
            summary.pace_wpm,
        );
        log::info!(
            "analyzed {} segments: {} unique words over {} s clean speech, level {}",
            segments.len(),
            summary.vocabulary_size,
            summary.clean_duration_secs,
            level_range
        );

        let word_frequency = word_frequency::tally(&segments);
        Ok(FluencyReport {
            segments,
            metrics: metrics.rows,
            summary,
            level_range: level_range.to_string(),
            filler_words: self.filler_words.clone(),
            word_frequency,
        })
    }
}
