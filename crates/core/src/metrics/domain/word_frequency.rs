use std::collections::HashMap;

use serde::Serialize;

use crate::transcript::domain::segment::Segment;
use crate::transcript::domain::text_cleaner::tokenize;

/// One entry of the word-frequency tally consumed by word-cloud style
/// presentation layers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Tally token occurrences across all cleaned segment texts.
///
/// Sorted by descending count, then lexicographically, so equal inputs
/// always produce identical output.
pub fn tally(segments: &[Segment]) -> Vec<WordCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for segment in segments {
        for word in tokenize(&segment.text) {
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    let mut tally: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount {
            word: word.to_string(),
            count,
        })
        .collect();
    tally.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str) -> Segment {
        Segment {
            start_offset: 0,
            text: text.to_string(),
            word_count: 0,
            filler_count: 0,
            cumulative_unique_words: 0,
            raw_duration: 0,
            clean_duration: 0,
        }
    }

    #[test]
    fn test_counts_across_segments() {
        let tally = tally(&[segment("the monkey and the wheel"), segment("the monkey")]);
        assert_eq!(tally[0].word, "the");
        assert_eq!(tally[0].count, 3);
        assert_eq!(tally[1].word, "monkey");
        assert_eq!(tally[1].count, 2);
    }

    #[test]
    fn test_ties_break_lexicographically() {
        let tally = tally(&[segment("b a c")]);
        let words: Vec<&str> = tally.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_segments() {
        assert!(tally(&[]).is_empty());
        assert!(tally(&[segment("")]).is_empty());
    }
}
