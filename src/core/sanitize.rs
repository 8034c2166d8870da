use std::borrow::Cow;

use super::policy::SafetyPolicy;

/// Neutralizes a field whose first character would trigger formula evaluation.
///
/// Only the first byte is inspected. When it is one of `=`, `+`, `-`, `@`, tab or
/// line feed and the matching switch of `policy` is on, the field is returned with a
/// single leading space. Otherwise the field is borrowed untouched.
pub fn sanitize<'a>(field: &'a str, policy: &SafetyPolicy) -> Cow<'a, str> {
    let escape = match field.as_bytes().first() {
        Some(b'=') => policy.escape_equals,
        Some(b'+') => policy.escape_plus,
        Some(b'-') => policy.escape_minus,
        Some(b'@') => policy.escape_at,
        Some(b'\t') => policy.escape_tab,
        Some(b'\n') => policy.escape_line_feed,
        _ => false,
    };

    if escape {
        let mut escaped = String::with_capacity(field.len() + 1);
        escaped.push(' ');
        escaped.push_str(field);
        Cow::Owned(escaped)
    } else {
        Cow::Borrowed(field)
    }
}
