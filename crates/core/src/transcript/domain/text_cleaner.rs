/// Remove caption annotations: non-nested `[...]` and `(...)` spans.
///
/// Two passes, one per delimiter kind, each matching an opening delimiter
/// with the nearest closing one (minimal match). An opening delimiter with
/// no closing partner is kept literally.
pub fn strip_annotations(text: &str) -> String {
    let square = strip_spans(text, '[', ']');
    strip_spans(&square, '(', ')')
}

fn strip_spans(text: &str, open: char, close: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(open) {
        let after_open = start + open.len_utf8();
        match rest[after_open..].find(close) {
            Some(end) => {
                out.push_str(&rest[..start]);
                rest = &rest[after_open + end + close.len_utf8()..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

/// Whitespace tokenization; the single definition of "word" used for
/// word counts, filler counts, and the vocabulary set.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::square("before [Music] after", "before  after")]
    #[case::round("so (Laughter) yes", "so  yes")]
    #[case::both("a [Music] b (Applause) c", "a  b  c")]
    #[case::multiple_spans("[a] x [b] y", " x  y")]
    #[case::unmatched_open("left [ open", "left [ open")]
    #[case::unmatched_close("stray ] close", "stray ] close")]
    #[case::minimal_match("a[b[c]d", "ad")]
    #[case::empty_span("x[]y", "xy")]
    #[case::untouched("no annotations here", "no annotations here")]
    fn test_strip_annotations(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_annotations(input), expected);
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        let words: Vec<&str> = tokenize("  a  b\tc ").collect();
        assert_eq!(words, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize("   ").count(), 0);
    }
}
