//! Blank line detection.
//!
//! The `csv` reader skips empty lines. A blank line in a user file is a row
//! holding one empty value, so the source is split at blank lines before
//! parsing and each blank line is reported on its own.

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const QUOTE: u8 = b'"';

/// A run of source lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    /// Lines starting at `first_line` with no blank line outside quotes.
    Records { first_line: u64, bytes: &'a [u8] },
    /// A line with no content outside a quoted field.
    Blank { line: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldState {
    Start,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

impl FieldState {
    fn next(self, byte: u8, delimiter: u8) -> Self {
        match self {
            Self::Start if byte == QUOTE => Self::Quoted,
            Self::Start | Self::Unquoted | Self::QuoteInQuoted if byte == delimiter => Self::Start,
            Self::Start | Self::Unquoted => Self::Unquoted,
            Self::Quoted if byte == QUOTE => Self::QuoteInQuoted,
            Self::Quoted => Self::Quoted,
            Self::QuoteInQuoted if byte == QUOTE => Self::Quoted,
            Self::QuoteInQuoted => Self::Unquoted,
        }
    }
}

/// Split `bytes` at blank lines, in source order.
///
/// A line is blank when it starts a new record and holds nothing but an
/// optional carriage return. Newlines inside quoted fields never end a line
/// for this purpose. A leading byte order mark is not content.
pub(crate) fn split_blank_lines(bytes: &[u8], delimiter: u8) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut state = FieldState::Start;
    let mut line = 1u64;
    let mut line_start = if bytes.starts_with(UTF8_BOM) { UTF8_BOM.len() } else { 0 };
    let mut at_record_start = true;
    let mut segment_start = 0usize;
    let mut segment_line = 1u64;

    for (idx, &byte) in bytes.iter().enumerate() {
        if byte != b'\n' {
            state = state.next(byte, delimiter);
            continue;
        }
        if state == FieldState::Quoted {
            at_record_start = false;
        } else {
            let blank = at_record_start && bytes[line_start..idx].iter().all(|&b| b == b'\r');
            if blank {
                if segment_start < line_start {
                    segments.push(Segment::Records {
                        first_line: segment_line,
                        bytes: &bytes[segment_start..line_start],
                    });
                }
                segments.push(Segment::Blank { line });
                segment_start = idx + 1;
                segment_line = line + 1;
            }
            state = FieldState::Start;
            at_record_start = true;
        }
        line += 1;
        line_start = idx + 1;
    }

    if segment_start < bytes.len() {
        segments.push(Segment::Records {
            first_line: segment_line,
            bytes: &bytes[segment_start..],
        });
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_blank_lines_is_one_segment() {
        let bytes = b"email;Ville\na;b\n";
        assert_eq!(
            split_blank_lines(bytes, b';'),
            vec![Segment::Records {
                first_line: 1,
                bytes: &bytes[..]
            }]
        );
    }

    #[test]
    fn test_blank_lines_split_segments() {
        let segments = split_blank_lines(b"h\n\na\r\n\r\nb\n", b';');
        assert_eq!(
            segments,
            vec![
                Segment::Records {
                    first_line: 1,
                    bytes: b"h\n"
                },
                Segment::Blank { line: 2 },
                Segment::Records {
                    first_line: 3,
                    bytes: b"a\r\n"
                },
                Segment::Blank { line: 4 },
                Segment::Records {
                    first_line: 5,
                    bytes: b"b\n"
                },
            ]
        );
    }

    #[test]
    fn test_leading_and_trailing_blank_lines() {
        let segments = split_blank_lines(b"\nh\n\n", b';');
        assert_eq!(
            segments,
            vec![
                Segment::Blank { line: 1 },
                Segment::Records {
                    first_line: 2,
                    bytes: b"h\n"
                },
                Segment::Blank { line: 3 },
            ]
        );
    }

    #[test]
    fn test_newlines_inside_quotes_are_content() {
        let bytes = b"h;v\na;\"x\n\ny\"\n";
        assert_eq!(split_blank_lines(bytes, b';').len(), 1);
    }

    #[test]
    fn test_quote_inside_unquoted_field_is_literal() {
        let segments = split_blank_lines(b"h;v\na;5\" screen\n\n", b';');
        assert_eq!(segments.last(), Some(&Segment::Blank { line: 3 }));
    }

    #[test]
    fn test_escaped_quote_keeps_field_open() {
        let bytes = b"h;v\na;\"say \"\"hi\"\"\n\nthere\"\n";
        assert_eq!(split_blank_lines(bytes, b';').len(), 1);
    }

    #[test]
    fn test_byte_order_mark_is_not_content() {
        let segments = split_blank_lines(b"\xEF\xBB\xBF\nh\n", b';');
        assert!(segments.contains(&Segment::Blank { line: 1 }));
    }

    #[test]
    fn test_empty_input_has_no_segments() {
        assert!(split_blank_lines(b"", b';').is_empty());
    }
}
