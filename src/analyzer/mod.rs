mod complexity;
mod parser;
mod types;

pub use complexity::{ComplexityAnalyzer, RustComplexityAnalyzer, count_decision_points};
pub use parser::{FunctionParser, RustParser, mask_non_code};
pub use types::{ComplexityReport, FunctionComplexity, FunctionInfo};
