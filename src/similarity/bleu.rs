use std::collections::HashMap;

use super::SimilarityMetric;

/// Highest n-gram order used unless configured otherwise.
pub const DEFAULT_MAX_NGRAM: usize = 4;

/// Upper bound accepted for the n-gram order.
pub const MAX_SUPPORTED_NGRAM: usize = 8;

/// Sentence-level BLEU with uniform weights and no smoothing.
///
/// `score = BP * exp(sum(ln p_n) / N)` for `n` in `1..=N`, where `p_n` is the
/// clipped n-gram precision of the candidate against the reference and `BP`
/// the brevity penalty. Any zero precision gives a score of `0`.
#[derive(Debug, Clone, Copy)]
pub struct SentenceBleu {
    max_ngram: usize,
}

impl Default for SentenceBleu {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_NGRAM)
    }
}

impl SentenceBleu {
    /// `max_ngram` is clamped to `1..=MAX_SUPPORTED_NGRAM`.
    #[must_use]
    pub fn new(max_ngram: usize) -> Self {
        Self {
            max_ngram: max_ngram.clamp(1, MAX_SUPPORTED_NGRAM),
        }
    }

    #[must_use]
    pub const fn max_ngram(&self) -> usize {
        self.max_ngram
    }
}

impl SimilarityMetric for SentenceBleu {
    #[allow(clippy::cast_precision_loss)]
    fn score(&self, reference: &[&str], candidate: &[&str]) -> f64 {
        if candidate.is_empty() {
            return 0.0;
        }

        let mut log_sum = 0.0;
        for n in 1..=self.max_ngram {
            let (matches, total) = modified_precision(reference, candidate, n);
            if matches == 0 || total == 0 {
                return 0.0;
            }
            log_sum += (matches as f64 / total as f64).ln();
        }

        let geometric_mean = (log_sum / self.max_ngram as f64).exp();
        brevity_penalty(reference.len(), candidate.len()) * geometric_mean
    }
}

fn ngram_counts<'a>(tokens: &'a [&'a str], n: usize) -> HashMap<&'a [&'a str], usize> {
    let mut counts = HashMap::new();
    for window in tokens.windows(n) {
        *counts.entry(window).or_insert(0) += 1;
    }
    counts
}

/// Clipped n-gram matches and the candidate's n-gram count.
fn modified_precision(reference: &[&str], candidate: &[&str], n: usize) -> (usize, usize) {
    let candidate_counts = ngram_counts(candidate, n);
    let reference_counts = ngram_counts(reference, n);

    let matches = candidate_counts
        .iter()
        .map(|(gram, &count)| count.min(reference_counts.get(gram).copied().unwrap_or(0)))
        .sum();
    let total = candidate.len().saturating_sub(n - 1);

    (matches, total)
}

#[allow(clippy::cast_precision_loss)]
fn brevity_penalty(reference_len: usize, candidate_len: usize) -> f64 {
    if candidate_len > reference_len {
        1.0
    } else {
        (1.0 - reference_len as f64 / candidate_len as f64).exp()
    }
}

#[cfg(test)]
#[path = "bleu_tests.rs"]
mod tests;
