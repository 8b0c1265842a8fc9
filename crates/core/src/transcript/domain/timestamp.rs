use super::error::TranscriptError;

/// Parse a caption timestamp into whole seconds from the recording start.
///
/// Accepts `MM:SS` (implicit 00 hours) or `HH:MM:SS`. Components must be
/// non-negative integers forming a valid time of day; anything else is a
/// `TimestampFormat` error carrying the offending token.
pub fn parse_offset_secs(token: &str) -> Result<u32, TranscriptError> {
    let format_err = || TranscriptError::TimestampFormat {
        line: token.to_string(),
    };

    let fields: Vec<&str> = token.split(':').collect();
    let (hours, minutes, seconds) = match fields.as_slice() {
        [m, s] => (0, parse_field(m).ok_or_else(format_err)?, parse_field(s).ok_or_else(format_err)?),
        [h, m, s] => (
            parse_field(h).ok_or_else(format_err)?,
            parse_field(m).ok_or_else(format_err)?,
            parse_field(s).ok_or_else(format_err)?,
        ),
        _ => return Err(format_err()),
    };

    if hours >= 24 || minutes >= 60 || seconds >= 60 {
        return Err(format_err());
    }
    Ok(hours * 3600 + minutes * 60 + seconds)
}

fn parse_field(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::minute_second("0:12", 12)]
    #[case::two_digit("10:30", 630)]
    #[case::with_hours("1:02:03", 3723)]
    #[case::zero("0:00", 0)]
    #[case::padded("00:05:09", 309)]
    fn test_valid_offsets(#[case] token: &str, #[case] expected: u32) {
        assert_eq!(parse_offset_secs(token).unwrap(), expected);
    }

    #[rstest]
    #[case::letters("12:ab")]
    #[case::bare_number("12")]
    #[case::too_many_fields("1:2:3:4")]
    #[case::empty_field("1::3")]
    #[case::seconds_overflow("0:75")]
    #[case::large_hours("99:00:00")]
    #[case::hours_overflow("24:00:00")]
    #[case::signed("+1:00")]
    #[case::empty("")]
    fn test_invalid_offsets(#[case] token: &str) {
        let err = parse_offset_secs(token).unwrap_err();
        assert_eq!(
            err,
            TranscriptError::TimestampFormat {
                line: token.to_string()
            }
        );
    }
}
