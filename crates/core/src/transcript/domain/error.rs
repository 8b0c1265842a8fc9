use thiserror::Error;

/// Fatal transcript errors. A single bad timestamp corrupts every
/// downstream cumulative sum, so these abort the whole analysis rather
/// than produce partial results.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TranscriptError {
    #[error("no valid transcript found in input")]
    EmptyInput,
    #[error("malformed timestamp {line:?}: expected MM:SS or HH:MM:SS")]
    TimestampFormat { line: String },
    #[error("timestamp {line:?} goes backwards (previous was {previous:?})")]
    NonMonotonicTimestamp { previous: String, line: String },
}
