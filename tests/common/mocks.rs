//! Mock version of std::fs::File;
use mockall::mock;

use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};

mock! {
    pub File {}
    impl Write for File {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
        fn flush(&mut self) -> io::Result<()>;
    }
}

/// A file rejecting every write.
pub fn broken_file() -> MockFile {
    let mut file = MockFile::new();
    file.expect_write()
        .returning(|_| Err(io::Error::other("disk full")));
    file.expect_flush().returning(|| Ok(()));
    file
}

/// A file accepting `limit` bytes, then rejecting writes.
pub fn file_full_after(limit: usize) -> MockFile {
    let mut written = 0;
    let mut file = MockFile::new();
    file.expect_write().returning(move |buf| {
        if written >= limit {
            return Err(io::Error::other("disk full"));
        }
        let accepted = buf.len().min(limit - written);
        written += accepted;
        Ok(accepted)
    });
    file.expect_flush().returning(|| Ok(()));
    file
}

/// A file accepting writes but failing to flush.
pub fn unflushable_file() -> MockFile {
    let mut file = MockFile::new();
    file.expect_write().returning(|buf| Ok(buf.len()));
    file.expect_flush()
        .returning(|| Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe")));
    file
}

/// A file failing only on its `failing_call`-th write (1-based), recording what it accepts.
pub fn file_failing_once(failing_call: usize) -> (MockFile, Arc<Mutex<Vec<u8>>>) {
    let accepted = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&accepted);
    let mut calls = 0;
    let mut file = MockFile::new();
    file.expect_write().returning(move |buf| {
        calls += 1;
        if calls == failing_call {
            return Err(io::Error::other("transient failure"));
        }
        sink.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    });
    file.expect_flush().returning(|| Ok(()));
    (file, accepted)
}
