use serde::Serialize;

/// One transcript utterance with its derived per-segment fields.
///
/// Invariants maintained by the parser: `start_offset` is non-decreasing
/// across a sequence, `cumulative_unique_words` is non-decreasing, and the
/// final segment always has `raw_duration == 0`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Seconds elapsed from the recording start.
    pub start_offset: u32,
    /// Utterance text with bracketed annotations removed.
    pub text: String,
    /// Whitespace-delimited tokens in `text`.
    pub word_count: usize,
    /// Tokens matching the filler set.
    pub filler_count: usize,
    /// Distinct tokens seen from the first segment through this one,
    /// including this segment's own new words.
    pub cumulative_unique_words: usize,
    /// Seconds until the next segment starts; 0 for the final segment.
    pub raw_duration: u32,
    /// `raw_duration` when it is a plausible speaking time, otherwise an
    /// estimate of one second per word (long gaps are silence, not speech).
    pub clean_duration: u32,
}
