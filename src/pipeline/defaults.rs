use crate::alignment::similarity;
use crate::pipeline::traits::SimilarityScorer;

/// Default scorer: longest-common-subsequence ratio over characters.
pub struct LcsScorer;

impl SimilarityScorer for LcsScorer {
    fn score(&self, reference: &str, hypothesis: &str) -> f64 {
        similarity::ratio(reference, hypothesis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lcs_scorer_delegates_to_similarity_ratio() {
        let scorer = LcsScorer;
        assert_eq!(scorer.score("hello", "hello"), 1.0);
        assert_eq!(
            scorer.score("abcdefghij", "abcdefgxyz"),
            similarity::ratio("abcdefghij", "abcdefgxyz")
        );
    }

    #[test]
    fn lcs_scorer_handles_empty_inputs() {
        let scorer = LcsScorer;
        assert_eq!(scorer.score("", ""), 1.0);
        assert_eq!(scorer.score("", "x"), 0.0);
    }
}
