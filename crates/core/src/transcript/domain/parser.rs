use std::collections::HashSet;

use super::error::TranscriptError;
use super::sanitizer::LinePair;
use super::segment::Segment;
use super::text_cleaner::{strip_annotations, tokenize};
use super::timestamp::parse_offset_secs;

/// Converts sanitized timestamp/content pairs into ordered [`Segment`]s.
///
/// Filler matching is exact and case-sensitive: "uh" counts, "uh," does
/// not. Known limitation, kept to match how the filler set is defined.
#[derive(Debug)]
pub struct SegmentParser {
    filler_words: HashSet<String>,
    duration_slack_secs: u32,
}

impl SegmentParser {
    pub fn new(filler_words: &[String], duration_slack_secs: u32) -> Self {
        Self {
            filler_words: filler_words.iter().cloned().collect(),
            duration_slack_secs,
        }
    }

    /// Parse the full pair sequence. Empty input, a malformed timestamp,
    /// or a timestamp going backwards aborts with an error; there are no
    /// partial results.
    pub fn parse(&self, pairs: &[LinePair]) -> Result<Vec<Segment>, TranscriptError> {
        if pairs.is_empty() {
            return Err(TranscriptError::EmptyInput);
        }

        let mut offsets = Vec::with_capacity(pairs.len());
        for pair in pairs {
            offsets.push(parse_offset_secs(&pair.timestamp)?);
        }
        for i in 1..offsets.len() {
            if offsets[i] < offsets[i - 1] {
                return Err(TranscriptError::NonMonotonicTimestamp {
                    previous: pairs[i - 1].timestamp.clone(),
                    line: pairs[i].timestamp.clone(),
                });
            }
        }

        let mut vocabulary: HashSet<String> = HashSet::new();
        let mut segments = Vec::with_capacity(pairs.len());
        for (i, pair) in pairs.iter().enumerate() {
            let text = strip_annotations(&pair.text);

            let mut word_count = 0;
            let mut filler_count = 0;
            for word in tokenize(&text) {
                word_count += 1;
                if self.filler_words.contains(word) {
                    filler_count += 1;
                }
                if !vocabulary.contains(word) {
                    vocabulary.insert(word.to_string());
                }
            }

            let raw_duration = match offsets.get(i + 1) {
                Some(next) => next - offsets[i],
                None => 0,
            };

            segments.push(Segment {
                start_offset: offsets[i],
                clean_duration: self.clean_duration(raw_duration, word_count),
                text,
                word_count,
                filler_count,
                cumulative_unique_words: vocabulary.len(),
                raw_duration,
            });
        }
        Ok(segments)
    }

    /// Raw gaps outside `(0, word_count + slack]` are treated as
    /// non-speaking silence; substitute ~1 second per word.
    fn clean_duration(&self, raw: u32, word_count: usize) -> u32 {
        let cap = word_count as u32 + self.duration_slack_secs;
        if raw > 0 && raw <= cap {
            raw
        } else {
            word_count as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::{DEFAULT_DURATION_SLACK_SECS, DEFAULT_FILLER_WORDS};

    fn parser() -> SegmentParser {
        let fillers: Vec<String> = DEFAULT_FILLER_WORDS.iter().map(|s| s.to_string()).collect();
        SegmentParser::new(&fillers, DEFAULT_DURATION_SLACK_SECS)
    }

    fn pair(timestamp: &str, text: &str) -> LinePair {
        LinePair {
            timestamp: timestamp.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert_eq!(parser().parse(&[]).unwrap_err(), TranscriptError::EmptyInput);
    }

    #[test]
    fn test_basic_segments() {
        let segments = parser()
            .parse(&[
                pair("0:12", "So in college,"),
                pair("0:15", "I was a government major,"),
            ])
            .unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].start_offset, 12);
        assert_eq!(segments[0].word_count, 3);
        assert_eq!(segments[0].raw_duration, 3);
        assert_eq!(segments[0].clean_duration, 3);
        assert_eq!(segments[1].start_offset, 15);
        assert_eq!(segments[1].word_count, 5);
        assert_eq!(segments[1].raw_duration, 0);
    }

    #[test]
    fn test_final_segment_has_zero_raw_duration() {
        let segments = parser().parse(&[pair("0:10", "one two three")]).unwrap();
        assert_eq!(segments[0].raw_duration, 0);
        // Zero raw gap is implausible speaking time: fall back to 1 s/word.
        assert_eq!(segments[0].clean_duration, 3);
    }

    #[test]
    fn test_long_gap_replaced_by_word_estimate() {
        // 60 s gap for a 4-word segment exceeds word_count + 3.
        let segments = parser()
            .parse(&[pair("0:00", "just a few words"), pair("1:00", "next")])
            .unwrap();
        assert_eq!(segments[0].raw_duration, 60);
        assert_eq!(segments[0].clean_duration, 4);
    }

    #[test]
    fn test_gap_at_cap_is_kept() {
        // 7 s gap == 4 words + 3 slack: still plausible.
        let segments = parser()
            .parse(&[pair("0:00", "just a few words"), pair("0:07", "next")])
            .unwrap();
        assert_eq!(segments[0].clean_duration, 7);
    }

    #[test]
    fn test_annotations_do_not_count_as_words() {
        let segments = parser()
            .parse(&[pair("0:00", "[Music] well then (Laughter)")])
            .unwrap();
        assert_eq!(segments[0].word_count, 2);
        assert_eq!(segments[0].text, " well then ");
    }

    #[test]
    fn test_filler_counting_is_exact_match() {
        let segments = parser()
            .parse(&[pair("0:00", "uh well um yes uh, Uh")])
            .unwrap();
        // "uh," and "Uh" are not counted.
        assert_eq!(segments[0].filler_count, 2);
    }

    #[test]
    fn test_vocabulary_is_cumulative_and_includes_own_words() {
        let segments = parser()
            .parse(&[
                pair("0:00", "a b c"),
                pair("0:03", "b c d"),
                pair("0:06", "a a a"),
            ])
            .unwrap();
        let counts: Vec<usize> = segments.iter().map(|s| s.cumulative_unique_words).collect();
        assert_eq!(counts, vec![3, 4, 4]);
    }

    #[test]
    fn test_vocabulary_is_case_sensitive() {
        let segments = parser().parse(&[pair("0:00", "Word word WORD")]).unwrap();
        assert_eq!(segments[0].cumulative_unique_words, 3);
    }

    #[test]
    fn test_malformed_timestamp_aborts() {
        let err = parser()
            .parse(&[pair("0:00", "fine"), pair("12:ab", "broken")])
            .unwrap_err();
        assert_eq!(
            err,
            TranscriptError::TimestampFormat {
                line: "12:ab".to_string()
            }
        );
    }

    #[test]
    fn test_backwards_timestamp_aborts() {
        let err = parser()
            .parse(&[pair("1:00", "later"), pair("0:30", "earlier")])
            .unwrap_err();
        assert_eq!(
            err,
            TranscriptError::NonMonotonicTimestamp {
                previous: "1:00".to_string(),
                line: "0:30".to_string()
            }
        );
    }

    #[test]
    fn test_equal_timestamps_allowed() {
        let segments = parser()
            .parse(&[pair("0:10", "first"), pair("0:10", "second")])
            .unwrap();
        assert_eq!(segments[0].raw_duration, 0);
        // Zero gap falls back to the word estimate.
        assert_eq!(segments[0].clean_duration, 1);
    }
}
