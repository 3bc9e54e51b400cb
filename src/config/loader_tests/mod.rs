//! Config loader tests, run against an in-memory filesystem.

use super::*;

mod mock_fs;
mod parsing_tests;
