use serde::{Deserialize, Serialize};

use crate::core::policy::{LineTerminator, SafetyPolicy};

#[cfg(feature = "json")]
use crate::SafeCsvError;

/// Serializable settings of a safe CSV writer.
///
/// Missing fields take their defaults: `,` as delimiter, `\n` as line terminator
/// and no protection.
///
/// ```
/// # #[cfg(feature = "json")]
/// # {
/// use safe_csv_writer::{config::WriterConfig, core::policy::LineTerminator};
///
/// let config = WriterConfig::from_json_str(
///     r#"{ "delimiter": ";", "line_terminator": "crlf", "policy": { "escape_equals": true } }"#,
/// )
/// .unwrap();
/// assert_eq!(config.delimiter, ';');
/// assert_eq!(config.line_terminator, LineTerminator::CrLf);
/// assert!(config.policy.escape_equals);
/// assert!(!config.policy.force_quoting);
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Field separator.
    pub delimiter: char,
    /// Terminator written after each record.
    pub line_terminator: LineTerminator,
    /// Protections applied to every field.
    pub policy: SafetyPolicy,
}

impl Default for WriterConfig {
    fn default() -> Self {
        WriterConfig {
            delimiter: ',',
            line_terminator: LineTerminator::Lf,
            policy: SafetyPolicy::none(),
        }
    }
}

#[cfg(feature = "json")]
impl WriterConfig {
    /// Parses a JSON document. Parse failures become [`SafeCsvError::Configuration`].
    pub fn from_json_str(json: &str) -> Result<WriterConfig, SafeCsvError> {
        serde_json::from_str(json).map_err(|error| SafeCsvError::Configuration(error.to_string()))
    }

    pub fn to_json_string(&self) -> Result<String, SafeCsvError> {
        serde_json::to_string(self).map_err(|error| SafeCsvError::Configuration(error.to_string()))
    }
}
