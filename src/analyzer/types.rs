use serde::Serialize;

/// A function detected in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionInfo {
    /// Function name
    pub name: String,
    /// Starting line (1-indexed)
    pub start_line: usize,
    /// Ending line (1-indexed)
    pub end_line: usize,
}

impl FunctionInfo {
    #[must_use]
    pub const fn new(name: String, start_line: usize, end_line: usize) -> Self {
        Self {
            name,
            start_line,
            end_line,
        }
    }

    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.end_line.saturating_sub(self.start_line) + 1
    }
}

/// Cyclomatic complexity of one function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionComplexity {
    #[serde(flatten)]
    pub function: FunctionInfo,
    pub complexity: u32,
}

impl FunctionComplexity {
    #[must_use]
    pub const fn new(function: FunctionInfo, complexity: u32) -> Self {
        Self {
            function,
            complexity,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.function.name
    }
}

/// Per-function results for a file, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplexityReport {
    pub functions: Vec<FunctionComplexity>,
}

impl ComplexityReport {
    #[must_use]
    pub const fn new(functions: Vec<FunctionComplexity>) -> Self {
        Self { functions }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// First function holding the highest score.
    ///
    /// Ties keep the earliest function in source order.
    #[must_use]
    pub fn most_complex(&self) -> Option<&FunctionComplexity> {
        let mut best: Option<&FunctionComplexity> = None;
        for function in &self.functions {
            if best.is_none_or(|b| function.complexity > b.complexity) {
                best = Some(function);
            }
        }
        best
    }

    /// Highest score in the file, `0` when no functions were found.
    #[must_use]
    pub fn max_complexity(&self) -> u32 {
        self.most_complex().map_or(0, |f| f.complexity)
    }
}
