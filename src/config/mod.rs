mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LoadResult, RealFileSystem};
pub use model::{CommentsConfig, ComplexityConfig, Config, DEFAULT_EXTENSION, SimilarityConfig};
