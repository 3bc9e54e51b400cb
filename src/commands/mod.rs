mod comments;
mod complexity;
pub(crate) mod context;
pub mod init;
mod input;
mod similarity;

pub use comments::{run_comments, run_comments_impl};
pub use complexity::{run_complexity, run_complexity_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use input::{has_extension, read_source, write_output};
pub use similarity::{run_similarity, run_similarity_impl};
