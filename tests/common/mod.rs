#![allow(dead_code)]

pub mod mocks;

pub use mocks::{
    MockFile, broken_file, file_failing_once, file_full_after, unflushable_file,
};

/// Routes `log` output of the writer to the test harness.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
