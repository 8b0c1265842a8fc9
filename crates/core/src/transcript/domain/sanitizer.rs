/// A sanitized timestamp/content line pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinePair {
    pub timestamp: String,
    pub text: String,
}

/// True iff the line is a timestamp token: after removing every `:`,
/// a non-empty run of ASCII digits remains.
pub fn is_timestamp_token(line: &str) -> bool {
    let mut digits = 0;
    for c in line.chars() {
        match c {
            ':' => {}
            '0'..='9' => digits += 1,
            _ => return false,
        }
    }
    digits > 0
}

/// Filter raw caption lines down to strict alternating timestamp/content
/// pairs.
///
/// Single forward pass over the input: a non-timestamp line where a
/// timestamp is expected is dropped, as is a timestamp immediately
/// followed by another timestamp (an empty content line that the caption
/// UI collapsed away). A dangling trailing timestamp with no content
/// partner is dropped too. Input with no timestamp tokens at all yields
/// an empty sequence; the caller surfaces that as an input error.
pub fn sanitize<S: AsRef<str>>(lines: &[S]) -> Vec<LinePair> {
    let mut pairs = Vec::new();
    let mut i = 0;
    while i + 1 < lines.len() {
        let current = lines[i].as_ref();
        if !is_timestamp_token(current) {
            i += 1;
            continue;
        }
        let next = lines[i + 1].as_ref();
        if is_timestamp_token(next) {
            i += 1;
            continue;
        }
        pairs.push(LinePair {
            timestamp: current.to_string(),
            text: next.to_string(),
        });
        i += 2;
    }
    pairs
}
