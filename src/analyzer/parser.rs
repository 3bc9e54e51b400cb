use regex::Regex;

use super::types::FunctionInfo;

/// Trait for language-specific function detection.
pub trait FunctionParser {
    /// Parse content and extract function information.
    fn parse(&self, content: &str) -> Vec<FunctionInfo>;
}

/// Rust function parser.
///
/// Works on masked lines (see [`mask_non_code`]) so that `fn` inside strings
/// or comments is not picked up.
pub struct RustParser {
    fn_pattern: Regex,
}

impl Default for RustParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RustParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fn_pattern: Regex::new(
                r#"^[\t ]*(?:pub(?:\s*\([^)]*\))?\s+)?(?:default\s+)?(?:const\s+)?(?:async\s+)?(?:unsafe\s+)?(?:extern\s+(?:"[^"]*"\s+)?)?fn\s+(?P<name>[a-zA-Z_][a-zA-Z0-9_]*)"#,
            )
            .expect("Invalid regex"),
        }
    }

    /// Parse already-masked lines.
    #[must_use]
    pub fn parse_masked(&self, masked: &[String]) -> Vec<FunctionInfo> {
        let mut functions = Vec::new();

        for (i, line) in masked.iter().enumerate() {
            let Some(caps) = self.fn_pattern.captures(line) else {
                continue;
            };
            let name = caps.name("name").map_or("", |m| m.as_str()).to_string();

            // Bodiless declarations (trait methods, extern items) are skipped
            if let Some(end) = find_body_end(masked, i) {
                functions.push(FunctionInfo::new(name, i + 1, end + 1));
            }
        }

        functions
    }
}

impl FunctionParser for RustParser {
    fn parse(&self, content: &str) -> Vec<FunctionInfo> {
        self.parse_masked(&mask_non_code(content))
    }
}

/// Find the 0-indexed line holding the brace that closes the body starting
/// at `start`. Returns `None` when a `;` at nesting depth 0 ends the item
/// before any body opens.
fn find_body_end(lines: &[String], start: usize) -> Option<usize> {
    let mut brace_count: usize = 0;
    let mut group_depth: usize = 0;
    let mut found_open = false;

    for (i, line) in lines.iter().enumerate().skip(start) {
        for ch in line.chars() {
            match ch {
                '{' => {
                    brace_count += 1;
                    found_open = true;
                }
                '}' => {
                    brace_count = brace_count.saturating_sub(1);
                    if found_open && brace_count == 0 {
                        return Some(i);
                    }
                }
                '(' | '[' if !found_open => group_depth += 1,
                ')' | ']' if !found_open => group_depth = group_depth.saturating_sub(1),
                ';' if !found_open && group_depth == 0 => return None,
                _ => {}
            }
        }
    }

    // Unbalanced braces: the body runs to the end of the file
    found_open.then(|| lines.len().saturating_sub(1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MaskState {
    Code,
    /// Nesting depth of `/* */`
    Block(usize),
    Str,
    /// Number of `#` in the raw string delimiter
    RawStr(usize),
}

/// Replace comments and the contents of string and char literals with
/// spaces, line by line. String delimiters are kept.
///
/// Block comments nest as in Rust. State carries across lines, so
/// multi-line strings and comments are masked completely.
#[must_use]
pub fn mask_non_code(content: &str) -> Vec<String> {
    let mut state = MaskState::Code;
    content
        .lines()
        .map(|line| mask_line(line, &mut state))
        .collect()
}

fn mask_line(line: &str, state: &mut MaskState) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len());
    let mut i = 0;

    while i < chars.len() {
        match *state {
            MaskState::Block(depth) => {
                if starts_with(&chars, i, "*/") {
                    *state = if depth <= 1 {
                        MaskState::Code
                    } else {
                        MaskState::Block(depth - 1)
                    };
                    out.push_str("  ");
                    i += 2;
                } else if starts_with(&chars, i, "/*") {
                    *state = MaskState::Block(depth + 1);
                    out.push_str("  ");
                    i += 2;
                } else {
                    out.push(' ');
                    i += 1;
                }
            }
            MaskState::Str => {
                if chars[i] == '\\' {
                    out.push(' ');
                    if i + 1 < chars.len() {
                        out.push(' ');
                    }
                    i += 2;
                } else if chars[i] == '"' {
                    *state = MaskState::Code;
                    out.push('"');
                    i += 1;
                } else {
                    out.push(' ');
                    i += 1;
                }
            }
            MaskState::RawStr(hashes) => {
                if chars[i] == '"' && closes_raw_string(&chars, i + 1, hashes) {
                    *state = MaskState::Code;
                    out.push('"');
                    out.push_str(&"#".repeat(hashes));
                    i += 1 + hashes;
                } else {
                    out.push(' ');
                    i += 1;
                }
            }
            MaskState::Code => i = mask_code_char(&chars, i, state, &mut out),
        }
    }

    out
}

/// Handle one token in code state and return the next index.
fn mask_code_char(chars: &[char], i: usize, state: &mut MaskState, out: &mut String) -> usize {
    if starts_with(chars, i, "//") {
        return chars.len();
    }
    if starts_with(chars, i, "/*") {
        *state = MaskState::Block(1);
        out.push_str("  ");
        return i + 2;
    }

    match chars[i] {
        '"' => {
            *state = MaskState::Str;
            out.push('"');
            i + 1
        }
        'r' => {
            if let Some(hashes) = raw_string_open(chars, i) {
                *state = MaskState::RawStr(hashes);
                out.push('r');
                out.push_str(&"#".repeat(hashes));
                out.push('"');
                return i + 2 + hashes;
            }
            out.push('r');
            i + 1
        }
        '\'' => {
            if let Some(len) = char_literal_len(chars, i) {
                out.push('\'');
                out.push_str(&" ".repeat(len - 2));
                out.push('\'');
                return i + len;
            }
            // lifetime or label
            out.push('\'');
            i + 1
        }
        ch => {
            out.push(ch);
            i + 1
        }
    }
}

fn starts_with(chars: &[char], pos: usize, pattern: &str) -> bool {
    let mut idx = pos;
    for p in pattern.chars() {
        if chars.get(idx) != Some(&p) {
            return false;
        }
        idx += 1;
    }
    true
}

const fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// `r"`, `r#"`, `r##"` ... not preceded by an identifier character
/// (`br"` is accepted).
fn raw_string_open(chars: &[char], pos: usize) -> Option<usize> {
    if pos > 0 {
        let prev = chars[pos - 1];
        let byte_prefix = prev == 'b' && (pos < 2 || !is_ident_char(chars[pos - 2]));
        if is_ident_char(prev) && !byte_prefix {
            return None;
        }
    }

    let mut i = pos + 1;
    let mut hashes = 0;
    while chars.get(i) == Some(&'#') {
        hashes += 1;
        i += 1;
    }

    (chars.get(i) == Some(&'"')).then_some(hashes)
}

fn closes_raw_string(chars: &[char], pos: usize, hashes: usize) -> bool {
    (0..hashes).all(|k| chars.get(pos + k) == Some(&'#'))
}

/// Length of a char literal starting at `pos`, or `None` for a lifetime.
fn char_literal_len(chars: &[char], pos: usize) -> Option<usize> {
    match chars.get(pos + 1)? {
        '\\' => {
            // '\n', '\'', '\u{1F600}'
            let close = (pos + 3..chars.len().min(pos + 12)).find(|&j| chars[j] == '\'')?;
            Some(close - pos + 1)
        }
        _ => (chars.get(pos + 2) == Some(&'\'')).then_some(3),
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
