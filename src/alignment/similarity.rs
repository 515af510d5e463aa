/// Normalized similarity ratio between two strings in `[0, 1]`.
///
/// Computed as `2 * lcs(a, b) / (|a| + |b|)` over Unicode scalar values,
/// the longest-common-subsequence form of the classic sequence-matcher
/// ratio. Identical strings score `1.0` (two empty strings included);
/// strings sharing no characters in any alignment score `0.0`.
pub fn ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let lcs = lcs_len(&a, &b);
    (2 * lcs) as f64 / (a.len() + b.len()) as f64
}

/// Two-row DP keyed on the shorter sequence.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut prev = vec![0usize; short.len() + 1];
    let mut curr = vec![0usize; short.len() + 1];
    for &lc in long {
        for (j, &sc) in short.iter().enumerate() {
            curr[j + 1] = if lc == sc {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[short.len()]
}
