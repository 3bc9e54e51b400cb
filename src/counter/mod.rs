mod classifier;
mod types;

pub use classifier::{CommentClassifier, DEFAULT_MARKER, is_inside_string};
pub use types::{
    Classification, CommentKind, CommentOccurrence, CommentReport, CommentText, SimpleForm,
};
