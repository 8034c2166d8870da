use serde::{Deserialize, Serialize};

/// Switches controlling how a [`SafeCsvWriter`](crate::item::csv::csv_writer::SafeCsvWriter)
/// protects the fields it writes.
///
/// Each `escape_*` switch guards one leading character: when enabled and a field starts
/// with that character, a single space is written in front of the field so that
/// spreadsheet applications no longer read it as a formula. `force_quoting` wraps every
/// non-empty field in double quotes.
///
/// # Examples
///
/// ```
/// use safe_csv_writer::core::policy::SafetyPolicy;
///
/// let policy = SafetyPolicy {
///     escape_equals: true,
///     ..SafetyPolicy::none()
/// };
/// assert!(!policy.force_quoting);
/// assert_ne!(policy, SafetyPolicy::ESCAPE_ALL_CHARACTERS);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyPolicy {
    /// Quote every non-empty field.
    pub force_quoting: bool,
    /// Prefix fields starting with `=`.
    pub escape_equals: bool,
    /// Prefix fields starting with `+`.
    pub escape_plus: bool,
    /// Prefix fields starting with `-`.
    pub escape_minus: bool,
    /// Prefix fields starting with `@`.
    pub escape_at: bool,
    /// Prefix fields starting with a horizontal tab.
    pub escape_tab: bool,
    /// Prefix fields starting with a line feed (`\n`).
    pub escape_line_feed: bool,
}

impl SafetyPolicy {
    /// Every protection enabled, including forced quoting.
    pub const FULL_SAFETY: SafetyPolicy = SafetyPolicy {
        force_quoting: true,
        escape_equals: true,
        escape_plus: true,
        escape_minus: true,
        escape_at: true,
        escape_tab: true,
        escape_line_feed: true,
    };

    /// Every leading character escaped, quoting left to the structural rules.
    pub const ESCAPE_ALL_CHARACTERS: SafetyPolicy = SafetyPolicy {
        force_quoting: false,
        ..SafetyPolicy::FULL_SAFETY
    };

    /// No protection at all: output matches a plain CSV writer.
    pub const fn none() -> SafetyPolicy {
        SafetyPolicy {
            force_quoting: false,
            escape_equals: false,
            escape_plus: false,
            escape_minus: false,
            escape_at: false,
            escape_tab: false,
            escape_line_feed: false,
        }
    }
}

/// Line terminator written after each record and used for newlines inside quoted fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineTerminator {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineTerminator {
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            LineTerminator::Lf => b"\n",
            LineTerminator::CrLf => b"\r\n",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LineTerminator, SafetyPolicy};

    #[test]
    fn presets_differ_only_by_force_quoting() {
        assert!(SafetyPolicy::FULL_SAFETY.force_quoting);
        assert!(!SafetyPolicy::ESCAPE_ALL_CHARACTERS.force_quoting);
        assert_eq!(
            SafetyPolicy {
                force_quoting: true,
                ..SafetyPolicy::ESCAPE_ALL_CHARACTERS
            },
            SafetyPolicy::FULL_SAFETY
        );
    }

    #[test]
    fn default_policy_is_none() {
        assert_eq!(SafetyPolicy::default(), SafetyPolicy::none());
    }

    #[test]
    fn terminator_bytes() {
        assert_eq!(LineTerminator::default(), LineTerminator::Lf);
        assert_eq!(LineTerminator::Lf.as_bytes(), b"\n");
        assert_eq!(LineTerminator::CrLf.as_bytes(), b"\r\n");
    }
}
