//! Shared application state.

use std::path::PathBuf;

use pixport_core::Config;
use pixport_processing::UploadPolicy;

/// State shared by all request handlers. Conversions are fully
/// request-scoped, so this holds configuration only, no mutable data.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Intake limits applied to each uploaded file.
    pub upload_policy: UploadPolicy,
    /// Scratch directory for request-scoped temp files.
    pub scratch_dir: PathBuf,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        AppState {
            upload_policy: UploadPolicy {
                max_file_size: config.max_file_size_bytes,
            },
            scratch_dir: config.upload_dir.clone(),
        }
    }
}

// Handlers run on the multi-threaded runtime.
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AppState>();
};
