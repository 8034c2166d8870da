use crate::error::SafeCsvError;

/// Reports whether `delimiter` can separate fields.
///
/// NUL, the double quote, carriage return, line feed and the Unicode replacement
/// character are rejected. Any other code point is accepted.
pub fn is_valid_delimiter(delimiter: char) -> bool {
    !matches!(
        delimiter,
        '\0' | '"' | '\r' | '\n' | char::REPLACEMENT_CHARACTER
    )
}

/// Same as [`is_valid_delimiter`] but returns a configuration error for invalid ones.
pub fn validate_delimiter(delimiter: char) -> Result<(), SafeCsvError> {
    if is_valid_delimiter(delimiter) {
        Ok(())
    } else {
        Err(SafeCsvError::Configuration(format!(
            "invalid field delimiter {:?}",
            delimiter
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::{is_valid_delimiter, validate_delimiter};
    use crate::error::SafeCsvError;

    #[test]
    fn rejects_structural_characters() {
        for delimiter in ['\0', '"', '\r', '\n', '\u{FFFD}'] {
            assert!(!is_valid_delimiter(delimiter), "{:?}", delimiter);
        }
    }

    #[test]
    fn accepts_other_characters() {
        for delimiter in [',', ';', '\t', '|', ' ', 'é', '€', '😀'] {
            assert!(is_valid_delimiter(delimiter), "{:?}", delimiter);
        }
    }

    #[test]
    fn validation_error_is_a_configuration_error() {
        assert!(validate_delimiter(';').is_ok());
        match validate_delimiter('"') {
            Err(SafeCsvError::Configuration(message)) => assert!(message.contains("delimiter")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
