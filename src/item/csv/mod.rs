//! CSV output protected against formula injection.
//!
//! Spreadsheet applications such as Excel or Google Sheets evaluate a cell whose
//! text starts with `=`, `+`, `-` or `@` as a formula. A CSV file built from
//! untrusted data can therefore run arbitrary formulas once opened. The writer in
//! this module prevents that by prefixing such fields with a space.
//!
//! # Module Architecture
//!
//! Every field of a record goes through the same pipeline:
//!
//! 1. **Sanitization**: the first character is compared against the enabled
//!    switches of the [`SafetyPolicy`](crate::core::policy::SafetyPolicy). On a match
//!    a single space is prepended.
//! 2. **Quoting decision**: the sanitized field is quoted when it contains the
//!    delimiter, a double quote or a newline, when it starts with whitespace, when it
//!    is the `\.` end-of-data marker, or when `force_quoting` is on.
//! 3. **Encoding**: quoted fields have their double quotes doubled and their
//!    newlines adjusted to the configured line terminator.
//!
//! The delimiter is validated before each record, so a record is either written
//! entirely or fails before its first byte with a configuration error.
//!
//! # Error handling
//!
//! Each operation returns a `Result`. Failures are also kept by the writer and
//! can be read later with `error()`, which suits code that writes many records and
//! checks only once at the end.
//!
//! # Examples
//!
//! ## Writing untrusted data
//!
//! ```
//! use safe_csv_writer::core::policy::SafetyPolicy;
//! use safe_csv_writer::item::csv::csv_writer::SafeCsvWriterBuilder;
//!
//! let mut buffer = Vec::new();
//! {
//!     let writer = SafeCsvWriterBuilder::new()
//!         .policy(SafetyPolicy::ESCAPE_ALL_CHARACTERS)
//!         .from_writer(&mut buffer);
//!
//!     writer
//!         .write_all([
//!             ["name", "comment"],
//!             ["Alice", "=HYPERLINK(\"http://evil\")"],
//!             ["Bob", "-10% discount"],
//!         ])
//!         .unwrap();
//!     assert!(writer.error().is_none());
//! } // writer is dropped here, releasing the borrow
//!
//! let csv_output = String::from_utf8(buffer).unwrap();
//! assert_eq!(
//!     csv_output,
//!     "name,comment\n\
//!      Alice,\" =HYPERLINK(\"\"http://evil\"\")\"\n\
//!      Bob,\" -10% discount\"\n"
//! );
//! ```
//!
//! ## Forced quoting with Windows line endings
//!
//! ```
//! use safe_csv_writer::core::policy::SafetyPolicy;
//! use safe_csv_writer::item::csv::csv_writer::SafeCsvWriterBuilder;
//!
//! let writer = SafeCsvWriterBuilder::new()
//!     .policy(SafetyPolicy::FULL_SAFETY)
//!     .use_crlf(true)
//!     .delimiter(';')
//!     .from_writer(vec![]);
//!
//! writer.write_record(&["id", "note"]).unwrap();
//! writer.write_record(&["1", "line one\nline two"]).unwrap();
//!
//! let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
//! assert_eq!(
//!     output,
//!     "\"id\";\"note\"\r\n\"1\";\"line one\r\nline two\"\r\n"
//! );
//! ```

/// A module providing facilities for writing CSV data records.
pub mod csv_writer;
