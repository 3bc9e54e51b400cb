#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the qualmetrics binary.
#[macro_export]
macro_rules! qualmetrics {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("qualmetrics"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content and returns its path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.qualmetrics.toml` in the fixture root.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".qualmetrics.toml", content)
    }
}

/// A small Rust file touching every comment kind.
pub const MIXED_COMMENTS: &str = "\
/// CHECK: account owner verified
/// Adds two numbers.
fn add(a: i32, b: i32) -> i32 {
    // leading comment
    a + b // trailing comment
}

/* block
   comment */
fn main() {
    let url = \"http://example.com\";
}
";

/// Two functions with distinct complexity.
pub const TWO_FUNCTIONS: &str = "\
fn flat() {
    println!(\"flat\");
}

fn nested(items: &[u32]) -> u32 {
    let mut total = 0;
    for item in items {
        if *item > 10 || *item == 0 {
            total += 1;
        }
    }
    match total {
        0 => 0,
        _ => total,
    }
}
";
