//! Scratch space for tests that write files.
//!
//! Background fixtures and encoded starfields from every crate land in one
//! `test_output/` directory at the workspace root, so the images can be opened
//! and inspected after a test run instead of vanishing with a temp dir.

use std::path::PathBuf;
use std::sync::OnceLock;

const TEST_OUTPUT_DIR: &str = "test_output";

fn test_output_dir() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().map(PathBuf::from).unwrap_or(manifest_dir);
    workspace_root.join(TEST_OUTPUT_DIR)
}

/// Creates `test_output/` on first use. Safe to call from parallel tests.
pub fn ensure_test_output_dir() {
    static INIT: OnceLock<()> = OnceLock::new();
    INIT.get_or_init(|| {
        std::fs::create_dir_all(test_output_dir())
            .expect("Failed to create test_output directory");
    });
}

/// Path of `name` inside the shared `test_output/` directory.
pub fn test_output_path(name: &str) -> PathBuf {
    ensure_test_output_dir();
    test_output_dir().join(name)
}
