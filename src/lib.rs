#![cfg_attr(docsrs, feature(doc_cfg))]
//#![warn(missing_docs)]

/*!
 <div align="center">
   <h1>Safe CSV Writer</h1>
   <h3>🛡️ A CSV writer that neutralizes formula injection</h3>

   ![license](https://shields.io/badge/license-MIT%2FApache--2.0-blue)

  </div>

 # Safe CSV Writer

 CSV files are routinely opened in spreadsheet applications. Excel and Google Sheets treat
 a cell starting with `=`, `+`, `-` or `@` as a formula, so a CSV export containing
 user-supplied text can smuggle formulas ("CSV injection") into the spreadsheet of whoever
 opens it. This crate writes standard CSV while prefixing those fields with a space, which
 keeps them readable and stops their evaluation.

 ## Core Concepts

- **SafetyPolicy:** A set of independent switches. One switch per guarded leading character
  (`=`, `+`, `-`, `@`, tab, line feed) plus `force_quoting`. Two presets exist:
  `SafetyPolicy::FULL_SAFETY` and `SafetyPolicy::ESCAPE_ALL_CHARACTERS`.
- **SafeCsvWriter:** Writes records (slices of fields) to any `std::io::Write`, buffered.
  Errors are returned by every operation and kept for a later `error()` check.
- **ItemWriter:** The trait through which batch code drives a writer. Its `write_all`
  writes records in order, stops at the first failure and flushes at the end.

 ## Features

| **Feature**   | **Description**                                               |
|---------------|---------------------------------------------------------------|
| json          | Enables loading a `WriterConfig` from JSON                    |
| full          | Enables all available features                                |

 ## Getting Started

```rust
# use safe_csv_writer::{
#     core::policy::SafetyPolicy,
#     error::SafeCsvError,
#     item::csv::csv_writer::SafeCsvWriter,
# };
fn main() -> Result<(), SafeCsvError> {
    let writer = SafeCsvWriter::new(vec![], SafetyPolicy::ESCAPE_ALL_CHARACTERS);

    writer.write_record(&["userId", "secret", "comment"])?;
    writer.write_record(&["-21+63", "=A1", "foo, bar"])?;
    writer.write_record(&["+42", "\tsecret", "\nplop"])?;
    writer.write_record(&["123", "blablabla", "@foobar"])?;
    writer.flush()?;

    let csv = String::from_utf8(writer.into_inner()?).unwrap();
    assert_eq!(
        csv,
        "userId,secret,comment\n\
         \" -21+63\",\" =A1\",\"foo, bar\"\n\
         \" +42\",\" \tsecret\",\" \nplop\"\n\
         123,blablabla,\" @foobar\"\n"
    );

    Ok(())
}
```

 ## Concurrency

 A writer is meant for one thread. It is not `Sync`; wrap it in a `Mutex` to share it.

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
     ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license
     ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)

 at your option.

 ## Contribution
 Unless you explicitly state otherwise, any contribution intentionally submitted
 for inclusion in the work by you, as defined in the Apache-2.0 license, shall be
 dual licensed as above, without any additional terms or conditions

 */

/// Writer configuration
pub mod config;

/// Encoding engine: delimiter validation, sanitization, quoting
pub mod core;

/// Error types
pub mod error;

#[doc(inline)]
pub use error::*;

/// Writers (for exemple: the safe csv writer)
pub mod item;
