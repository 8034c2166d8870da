use std::{
    cell::RefCell,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::{debug, error, warn};

use crate::{
    SafeCsvError,
    config::WriterConfig,
    core::{
        delimiter::{is_valid_delimiter, validate_delimiter},
        item::ItemWriter,
        policy::{LineTerminator, SafetyPolicy},
        quoting::{needs_quotes, write_quoted},
        sanitize::sanitize,
    },
};

/// A CSV writer that neutralizes formula injection.
///
/// Records are slices of fields. Each field is sanitized according to the
/// [`SafetyPolicy`], quoted when needed, and written to an internal buffer in front
/// of the sink. Call [`flush`](SafeCsvWriter::flush) (or
/// [`into_inner`](SafeCsvWriter::into_inner)) once done to forward everything to
/// the sink.
///
/// Every failing operation returns its error and also stores it, so callers who
/// ignore intermediate results can still call [`error`](SafeCsvWriter::error)
/// afterwards. Once the sink has failed, every later write or flush returns that
/// same I/O error without touching the sink.
///
/// The writer uses interior mutability and is not `Sync`: share it between
/// threads only behind a lock.
///
/// # Examples
///
/// ```
/// use safe_csv_writer::{
///     core::policy::SafetyPolicy, item::csv::csv_writer::SafeCsvWriterBuilder,
/// };
///
/// let wtr = SafeCsvWriterBuilder::new()
///     .policy(SafetyPolicy::ESCAPE_ALL_CHARACTERS)
///     .from_writer(vec![]);
///
/// wtr.write_record(&["userId", "secret", "comment"]).unwrap();
/// wtr.write_record(&["-21+63", "=A1", "foo, bar"]).unwrap();
///
/// let data = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
/// assert_eq!(
///     data,
///     "userId,secret,comment\n\" -21+63\",\" =A1\",\"foo, bar\"\n"
/// );
/// ```
pub struct SafeCsvWriter<T: Write> {
    stream: RefCell<BufWriter<T>>,
    delimiter: char,
    terminator: LineTerminator,
    policy: SafetyPolicy,
    error: RefCell<Option<SafeCsvError>>,
}

impl<T: Write> SafeCsvWriter<T> {
    /// Creates a writer with `,` as delimiter and `\n` as line terminator.
    pub fn new(wtr: T, policy: SafetyPolicy) -> SafeCsvWriter<T> {
        SafeCsvWriterBuilder::new().policy(policy).from_writer(wtr)
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Changes the field delimiter.
    ///
    /// Meant to be called before the first write. The delimiter is validated by
    /// every subsequent [`write_record`](SafeCsvWriter::write_record).
    pub fn set_delimiter(&mut self, delimiter: char) {
        self.delimiter = delimiter;
    }

    pub fn line_terminator(&self) -> LineTerminator {
        self.terminator
    }

    /// Changes the line terminator. Meant to be called before the first write.
    pub fn set_line_terminator(&mut self, terminator: LineTerminator) {
        self.terminator = terminator;
    }

    pub fn policy(&self) -> &SafetyPolicy {
        &self.policy
    }

    /// Writes a single record followed by the line terminator.
    ///
    /// Fails with [`SafeCsvError::Configuration`] before writing anything when the
    /// delimiter is invalid. A sink failure aborts the record where it happened;
    /// bytes already handed to the buffer are not taken back, and the writer refuses
    /// any further output.
    pub fn write_record<S: AsRef<str>>(&self, record: &[S]) -> Result<(), SafeCsvError> {
        self.check_sink()?;
        let result = self.encode_record(record);
        self.latch(result)
    }

    /// Writes every record in order and flushes.
    ///
    /// Stops at the first failing record. When all records are written, the
    /// result of the flush is returned.
    pub fn write_all<I, S>(&self, records: I) -> Result<(), SafeCsvError>
    where
        I: IntoIterator,
        I::Item: AsRef<[S]>,
        S: AsRef<str>,
    {
        <Self as ItemWriter<[S]>>::write_all(self, records)
    }

    /// Flush the contents of the internal buffer to the underlying writer.
    ///
    /// Note that this also flushes the underlying writer.
    pub fn flush(&self) -> Result<(), SafeCsvError> {
        self.check_sink()?;
        let result = self
            .stream
            .borrow_mut()
            .flush()
            .map_err(SafeCsvError::from);
        self.latch(result)
    }

    /// Returns the most recent error raised by a write or a flush, if any.
    pub fn error(&self) -> Option<SafeCsvError> {
        self.error.borrow().clone()
    }

    /// Borrows the underlying writer. Buffered bytes are not visible there until flushed.
    pub fn get_ref(&mut self) -> &T {
        self.stream.get_mut().get_ref()
    }

    /// Flushes the buffer and returns the underlying writer.
    pub fn into_inner(self) -> Result<T, SafeCsvError> {
        self.stream
            .into_inner()
            .into_inner()
            .map_err(|error| SafeCsvError::from(error.into_error()))
    }

    fn encode_record<S: AsRef<str>>(&self, record: &[S]) -> Result<(), SafeCsvError> {
        validate_delimiter(self.delimiter)?;

        let mut stream = self.stream.borrow_mut();
        let mut encoded = [0u8; 4];
        let delimiter: &str = self.delimiter.encode_utf8(&mut encoded);

        for (n, field) in record.iter().enumerate() {
            if n > 0 {
                stream.write_all(delimiter.as_bytes())?;
            }

            let field = sanitize(field.as_ref(), &self.policy);

            if needs_quotes(&field, self.delimiter, &self.policy) {
                write_quoted(&mut *stream, &field, self.terminator)?;
            } else {
                stream.write_all(field.as_bytes())?;
            }
        }

        stream.write_all(self.terminator.as_bytes())?;
        Ok(())
    }

    // a failed sink may hold a torn record: nothing more may follow it
    fn check_sink(&self) -> Result<(), SafeCsvError> {
        match &*self.error.borrow() {
            Some(err @ SafeCsvError::Io(_)) => Err(err.clone()),
            _ => Ok(()),
        }
    }

    fn latch<R>(&self, result: Result<R, SafeCsvError>) -> Result<R, SafeCsvError> {
        if let Err(err) = &result {
            error!("Safe CSV writer error: {}", err);
            *self.error.borrow_mut() = Some(err.clone());
        }
        result
    }
}

impl<T: Write, S: AsRef<str>> ItemWriter<[S]> for SafeCsvWriter<T> {
    fn write(&self, item: &[S]) -> Result<(), SafeCsvError> {
        self.write_record(item)
    }

    fn flush(&self) -> Result<(), SafeCsvError> {
        SafeCsvWriter::flush(self)
    }
}

#[derive(Debug, Clone)]
pub struct SafeCsvWriterBuilder {
    delimiter: char,
    terminator: LineTerminator,
    policy: SafetyPolicy,
    capacity: Option<usize>,
}

impl Default for SafeCsvWriterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SafeCsvWriterBuilder {
    pub fn new() -> SafeCsvWriterBuilder {
        SafeCsvWriterBuilder {
            delimiter: ',',
            terminator: LineTerminator::Lf,
            policy: SafetyPolicy::none(),
            capacity: None,
        }
    }

    /// Starts from a loaded [`WriterConfig`].
    pub fn from_config(config: &WriterConfig) -> SafeCsvWriterBuilder {
        SafeCsvWriterBuilder::new()
            .delimiter(config.delimiter)
            .line_terminator(config.line_terminator)
            .policy(config.policy)
    }

    pub fn delimiter(mut self, delimiter: char) -> SafeCsvWriterBuilder {
        self.delimiter = delimiter;
        self
    }

    pub fn line_terminator(mut self, terminator: LineTerminator) -> SafeCsvWriterBuilder {
        self.terminator = terminator;
        self
    }

    /// Shorthand for `line_terminator(LineTerminator::CrLf)` when `yes` is true.
    pub fn use_crlf(self, yes: bool) -> SafeCsvWriterBuilder {
        self.line_terminator(if yes {
            LineTerminator::CrLf
        } else {
            LineTerminator::Lf
        })
    }

    pub fn policy(mut self, policy: SafetyPolicy) -> SafeCsvWriterBuilder {
        self.policy = policy;
        self
    }

    /// Size of the internal buffer. `0` forwards every write straight to the sink.
    pub fn buffer_capacity(mut self, capacity: usize) -> SafeCsvWriterBuilder {
        self.capacity = Some(capacity);
        self
    }

    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<SafeCsvWriter<File>, SafeCsvError> {
        let file = File::create(path)?;
        Ok(self.from_writer(file))
    }

    pub fn from_writer<W: Write>(self, wtr: W) -> SafeCsvWriter<W> {
        if !is_valid_delimiter(self.delimiter) {
            warn!(
                "Invalid delimiter {:?}: every record write will fail",
                self.delimiter
            );
        }

        let stream = match self.capacity {
            Some(capacity) => BufWriter::with_capacity(capacity, wtr),
            None => BufWriter::new(wtr),
        };

        debug!(
            "Safe CSV writer created: delimiter={:?}, terminator={:?}, policy={:?}",
            self.delimiter, self.terminator, self.policy
        );

        SafeCsvWriter {
            stream: RefCell::new(stream),
            delimiter: self.delimiter,
            terminator: self.terminator,
            policy: self.policy,
            error: RefCell::new(None),
        }
    }
}
