use crate::scoring::domain::level::CefrLevel;

/// Tokens counted as filler words (exact, case-sensitive match).
pub const DEFAULT_FILLER_WORDS: &[&str] = &["uh", "um"];

/// Rolling-pace window, in segments (~1 minute of typical captions).
pub const DEFAULT_ROLLING_WINDOW: usize = 12;

/// Slack added to a segment's word count when deciding whether its raw
/// inter-segment gap is plausible speaking time (seconds).
pub const DEFAULT_DURATION_SLACK_SECS: u32 = 3;

/// Words-per-minute ceiling per CEFR level. A pace above every ceiling
/// still classifies as C2; the table deliberately has no tier above C2.
pub const PACE_CEILINGS_WPM: &[(CefrLevel, f64)] = &[
    (CefrLevel::A1, 30.0),
    (CefrLevel::A2, 50.0),
    (CefrLevel::B1, 75.0),
    (CefrLevel::B2, 105.0),
    (CefrLevel::C1, 135.0),
    (CefrLevel::C2, 165.0),
];

/// Vocabulary growth control points for a fluent native speaker:
/// elapsed speaking minutes vs. expected distinct words used so far.
pub const VOCABULARY_CURVE_MINUTES: &[f64] =
    &[0.0, 5.0, 10.0, 15.0, 20.0, 30.0, 60.0, 120.0, 180.0];
pub const VOCABULARY_CURVE_WORDS: &[f64] = &[
    0.0, 318.0, 500.0, 638.0, 767.0, 1000.0, 1450.0, 2250.0, 2800.0,
];

/// Per-level scale applied to the native-speaker vocabulary curve.
/// The `Extreme` tier (2x native) is a ceiling marker for the classifier.
pub const VOCABULARY_SCALE_FACTORS: &[(CefrLevel, f64)] = &[
    (CefrLevel::A1, 0.2),
    (CefrLevel::A2, 0.3),
    (CefrLevel::B1, 0.4),
    (CefrLevel::B2, 0.6),
    (CefrLevel::C1, 0.8),
    (CefrLevel::C2, 1.0),
    (CefrLevel::Extreme, 2.0),
];
