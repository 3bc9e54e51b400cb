mod bleu;

pub use bleu::{DEFAULT_MAX_NGRAM, MAX_SUPPORTED_NGRAM, SentenceBleu};

use serde::Serialize;

/// Scores how closely a candidate token sequence follows a reference.
pub trait SimilarityMetric {
    /// Score in `[0, 1]`, `1` meaning identical n-gram content.
    fn score(&self, reference: &[&str], candidate: &[&str]) -> f64;
}

/// Split text into whitespace-separated tokens.
#[must_use]
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Result of comparing two files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityScore {
    pub score: f64,
    pub reference_tokens: usize,
    pub candidate_tokens: usize,
}

impl SimilarityScore {
    /// Tokenize both texts and score them with `metric`.
    #[must_use]
    pub fn compute(metric: &dyn SimilarityMetric, reference: &str, candidate: &str) -> Self {
        let reference = tokenize(reference);
        let candidate = tokenize(candidate);
        Self {
            score: metric.score(&reference, &candidate),
            reference_tokens: reference.len(),
            candidate_tokens: candidate.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_any_whitespace() {
        assert_eq!(
            tokenize("fn  main()\t{\n}\r\n"),
            vec!["fn", "main()", "{", "}"]
        );
        assert!(tokenize("   \n").is_empty());
    }

    #[test]
    fn compute_reports_token_counts() {
        let result = SimilarityScore::compute(
            &SentenceBleu::default(),
            "let x = 1 ;",
            "let x = 1 ;",
        );

        assert_eq!(result.reference_tokens, 5);
        assert_eq!(result.candidate_tokens, 5);
        assert!((result.score - 1.0).abs() < 1e-9);
    }
}
