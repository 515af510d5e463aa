pub trait SimilarityScorer: Send + Sync {
    /// Normalized similarity in `[0, 1]` between a reference line and a
    /// transcript segment's text. Must hold for any input, empty strings
    /// included.
    fn score(&self, reference: &str, hypothesis: &str) -> f64;
}
