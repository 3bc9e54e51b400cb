use serde::Serialize;

/// Where a `//` comment sits on its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SimpleForm {
    /// The trimmed line starts with `//`
    Leading,
    /// Code precedes the `//` on the same line
    Inline,
}

/// Category assigned to a comment occurrence.
///
/// Checks run in declaration order: a line that matches an earlier
/// category is never examined for a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// `/// CHECK` marker line, reported but never counted
    ExcludedMarker,
    /// `/* ... */` span, possibly over several lines
    Block,
    /// Line whose trimmed form starts with `///`
    Doc,
    /// Plain `//` comment outside a string literal
    Simple(SimpleForm),
}

impl CommentKind {
    /// Whether this occurrence contributes to the comment totals.
    #[must_use]
    pub const fn is_counted(self) -> bool {
        !matches!(self, Self::ExcludedMarker)
    }

    /// Stable lowercase name used by machine-readable output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExcludedMarker => "excluded",
            Self::Block => "block",
            Self::Doc => "doc",
            Self::Simple(_) => "simple",
        }
    }
}

/// Source text captured for an occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentText {
    Line(String),
    Block(Vec<String>),
}

impl CommentText {
    /// Text for single-line display; block lines are joined with a space.
    #[must_use]
    pub fn joined(&self) -> String {
        match self {
            Self::Line(line) => line.clone(),
            Self::Block(lines) => lines.join(" "),
        }
    }

    /// Number of source lines covered.
    #[must_use]
    pub const fn line_count(&self) -> usize {
        match self {
            Self::Line(_) => 1,
            Self::Block(lines) => lines.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentOccurrence {
    /// 1-indexed line where the occurrence starts
    pub start_line: usize,
    pub kind: CommentKind,
    pub text: CommentText,
}

impl CommentOccurrence {
    #[must_use]
    pub const fn new(start_line: usize, kind: CommentKind, text: CommentText) -> Self {
        Self {
            start_line,
            kind,
            text,
        }
    }

    /// 1-indexed line where the occurrence ends (inclusive).
    #[must_use]
    pub const fn end_line(&self) -> usize {
        self.start_line + self.text.line_count() - 1
    }
}

/// Aggregate comment counts for one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentReport {
    pub total_lines: usize,
    pub simple_count: usize,
    pub doc_count: usize,
    pub block_count: usize,
}

impl CommentReport {
    #[must_use]
    pub const fn total_comments(&self) -> usize {
        self.simple_count + self.doc_count + self.block_count
    }

    /// Comments per line as a percentage, `0.0` for an empty file.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio_percent(&self) -> f64 {
        if self.total_lines == 0 {
            return 0.0;
        }
        self.total_comments() as f64 / self.total_lines as f64 * 100.0
    }

    const fn record(&mut self, kind: CommentKind) {
        match kind {
            CommentKind::ExcludedMarker => {}
            CommentKind::Block => self.block_count += 1,
            CommentKind::Doc => self.doc_count += 1,
            CommentKind::Simple(_) => self.simple_count += 1,
        }
    }
}

/// Ordered occurrences plus their summary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    pub occurrences: Vec<CommentOccurrence>,
    pub report: CommentReport,
}

impl Classification {
    pub(super) fn with_total_lines(total_lines: usize) -> Self {
        Self {
            occurrences: Vec::new(),
            report: CommentReport {
                total_lines,
                ..CommentReport::default()
            },
        }
    }

    pub(super) fn push(&mut self, occurrence: CommentOccurrence) {
        self.report.record(occurrence.kind);
        self.occurrences.push(occurrence);
    }

    /// Occurrences that contribute to the totals.
    pub fn counted(&self) -> impl Iterator<Item = &CommentOccurrence> {
        self.occurrences.iter().filter(|o| o.kind.is_counted())
    }
}
