use std::io::{self, Write};

use memchr::memchr3;

use super::policy::{LineTerminator, SafetyPolicy};

/// Reports whether `field` must be enclosed in double quotes.
///
/// Rules, first match wins:
/// 1. the empty field is never quoted, so `""` stays distinguishable from an empty value;
/// 2. `\.` is always quoted since some importers read it as end-of-data;
/// 3. everything is quoted under `force_quoting`;
/// 4. fields holding the delimiter, a double quote, CR or LF are quoted;
/// 5. fields starting with a Unicode whitespace character are quoted.
pub fn needs_quotes(field: &str, delimiter: char, policy: &SafetyPolicy) -> bool {
    if field.is_empty() {
        return false;
    }

    if field == r"\." {
        return true;
    }

    if policy.force_quoting {
        return true;
    }

    if delimiter.is_ascii() {
        let delimiter = delimiter as u8;
        if field
            .bytes()
            .any(|b| b == delimiter || b == b'"' || b == b'\r' || b == b'\n')
        {
            return true;
        }
    } else if field.contains(delimiter) || memchr3(b'"', b'\r', b'\n', field.as_bytes()).is_some()
    {
        return true;
    }

    field.chars().next().is_some_and(char::is_whitespace)
}

/// Writes `field` enclosed in double quotes.
///
/// Embedded quotes are doubled. Under [`LineTerminator::CrLf`] a line feed becomes
/// `\r\n` and bare carriage returns are dropped; under [`LineTerminator::Lf`] both are
/// written as they are.
pub fn write_quoted<W: Write>(
    out: &mut W,
    field: &str,
    terminator: LineTerminator,
) -> io::Result<()> {
    let mut rest = field.as_bytes();

    out.write_all(b"\"")?;
    while let Some(i) = memchr3(b'"', b'\r', b'\n', rest) {
        out.write_all(&rest[..i])?;
        match (rest[i], terminator) {
            (b'"', _) => out.write_all(b"\"\"")?,
            (b'\r', LineTerminator::CrLf) => {}
            (b'\r', LineTerminator::Lf) => out.write_all(b"\r")?,
            // line feed
            (_, terminator) => out.write_all(terminator.as_bytes())?,
        }
        rest = &rest[i + 1..];
    }
    out.write_all(rest)?;
    out.write_all(b"\"")
}

#[cfg(test)]
mod tests {
    use super::{needs_quotes, write_quoted};
    use crate::core::policy::{LineTerminator, SafetyPolicy};

    fn quoted(field: &str, terminator: LineTerminator) -> String {
        let mut out = Vec::new();
        write_quoted(&mut out, field, terminator).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_field_is_never_quoted() {
        assert!(!needs_quotes("", ',', &SafetyPolicy::none()));
        assert!(!needs_quotes("", ',', &SafetyPolicy::FULL_SAFETY));
    }

    #[test]
    fn end_of_data_marker_is_always_quoted() {
        assert!(needs_quotes(r"\.", ',', &SafetyPolicy::none()));
        assert!(needs_quotes(r"\.", ',', &SafetyPolicy::ESCAPE_ALL_CHARACTERS));
        assert!(!needs_quotes(r"\.x", ',', &SafetyPolicy::none()));
    }

    #[test]
    fn force_quoting_quotes_plain_fields() {
        let policy = SafetyPolicy {
            force_quoting: true,
            ..SafetyPolicy::none()
        };
        assert!(needs_quotes("a", ',', &policy));
        assert!(!needs_quotes("a", ',', &SafetyPolicy::none()));
    }

    #[test]
    fn structural_characters_are_quoted() {
        let policy = SafetyPolicy::none();
        assert!(needs_quotes("foo, bar", ',', &policy));
        assert!(needs_quotes("say \"hi\"", ',', &policy));
        assert!(needs_quotes("a\rb", ',', &policy));
        assert!(needs_quotes("a\nb", ',', &policy));
        assert!(!needs_quotes("foo, bar", ';', &policy));
        assert!(needs_quotes("foo; bar", ';', &policy));
    }

    #[test]
    fn multi_byte_delimiter_is_detected() {
        let policy = SafetyPolicy::none();
        assert!(needs_quotes("a€b", '€', &policy));
        assert!(!needs_quotes("a,b", '€', &policy));
        assert!(needs_quotes("a\"b", '€', &policy));
    }

    #[test]
    fn leading_whitespace_is_quoted() {
        let policy = SafetyPolicy::none();
        assert!(needs_quotes(" =A1", ',', &policy));
        assert!(needs_quotes("\tsecret", ',', &policy));
        // no-break space and ideographic space are multi-byte
        assert!(needs_quotes("\u{00A0}x", ',', &policy));
        assert!(needs_quotes("\u{3000}x", ',', &policy));
        assert!(!needs_quotes("x ", ',', &policy));
        assert!(!needs_quotes("éclair", ',', &policy));
    }

    #[test]
    fn decision_is_stable() {
        for field in ["", "a", " a", "a,b", r"\.", "\"", "ü"] {
            let first = needs_quotes(field, ',', &SafetyPolicy::ESCAPE_ALL_CHARACTERS);
            let second = needs_quotes(field, ',', &SafetyPolicy::ESCAPE_ALL_CHARACTERS);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn quotes_are_doubled() {
        assert_eq!(
            quoted("say \"hi\"", LineTerminator::Lf),
            "\"say \"\"hi\"\"\""
        );
        assert_eq!(quoted("\"", LineTerminator::Lf), "\"\"\"\"");
    }

    #[test]
    fn newlines_follow_the_terminator() {
        assert_eq!(quoted("a\r\nb\nc\rd", LineTerminator::Lf), "\"a\r\nb\nc\rd\"");
        assert_eq!(
            quoted("a\r\nb\nc\rd", LineTerminator::CrLf),
            "\"a\r\nb\r\ncd\""
        );
    }

    #[test]
    fn plain_content_is_copied_verbatim() {
        assert_eq!(quoted("foo, bar", LineTerminator::Lf), "\"foo, bar\"");
        assert_eq!(quoted("", LineTerminator::Lf), "\"\"");
        assert_eq!(quoted("日本語", LineTerminator::CrLf), "\"日本語\"");
    }
}
