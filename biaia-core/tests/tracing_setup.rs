//! Tracing initialization writes the per-run log file.
//!
//! Lives in its own test binary because the global subscriber can only be
//! installed once per process.

use biaia_core::tracing_setup::{LOG_FILE_NAME, init_tracing};
use tracing::Level;

#[test]
fn test_init_tracing_creates_log_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let logs_dir = temp_dir.path().join("nested").join("logs");

    let log_path = init_tracing(Level::WARN, Some(&logs_dir)).unwrap();

    assert_eq!(log_path, logs_dir.join(LOG_FILE_NAME));
    assert!(log_path.exists());

    tracing::debug!("captured by the file layer only");
}
