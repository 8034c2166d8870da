use log::debug;

use crate::error::SafeCsvError;

/// A sink of items, one `write` per item.
///
/// `W` may be unsized so that a writer of records can accept any `&[S]`.
pub trait ItemWriter<W: ?Sized> {
    fn write(&self, item: &W) -> Result<(), SafeCsvError>;

    fn flush(&self) -> Result<(), SafeCsvError>;

    /// Writes every item in order then flushes.
    ///
    /// Stops at the first failing item and returns its error. Items already
    /// written are not rolled back. When every item succeeds, the result of the
    /// final flush is returned.
    fn write_all<I>(&self, items: I) -> Result<(), SafeCsvError>
    where
        I: IntoIterator,
        I::Item: AsRef<W>,
    {
        debug!("Start writing items");
        let mut count = 0usize;
        for item in items {
            self.write(item.as_ref())?;
            count += 1;
        }
        self.flush()?;
        debug!("End writing items: {}", count);
        Ok(())
    }
}
