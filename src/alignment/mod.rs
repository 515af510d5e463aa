use crate::config::AlignmentPolicy;
use crate::types::{AlignedSegment, ReferenceScript, TranscriptSegment};

pub mod similarity;


/// Aligns a transcript against a reference script with the default
/// similarity scorer. Never fails: any combination of empty inputs yields a
/// well-defined (possibly empty) result.
pub fn align(
    transcript: &[TranscriptSegment],
    script: &ReferenceScript,
    policy: AlignmentPolicy,
) -> Vec<AlignedSegment> {
    match policy.threshold() {
        None => forced_alignment(transcript, script),
        Some(threshold) => best_match_alignment(transcript, script, threshold, similarity::ratio),
    }
}

/// Positional pass-through: each transcript segment donates its timing to
/// the next unused script line, until either side runs out. Trailing script
/// lines without a segment are dropped from the output.
pub fn forced_alignment(
    transcript: &[TranscriptSegment],
    script: &ReferenceScript,
) -> Vec<AlignedSegment> {
    let mut out = Vec::with_capacity(transcript.len().min(script.len()));
    let mut lines = script.lines().iter();
    for segment in transcript {
        let Some(line) = lines.next() else { break };
        out.push(AlignedSegment {
            text: line.clone(),
            start: segment.start,
            end: segment.end,
        });
    }
    let dropped = script.len() - out.len();
    if dropped > 0 {
        tracing::warn!(
            dropped,
            segments = transcript.len(),
            "transcript ran out before the script; trailing script lines dropped"
        );
    }
    out
}

/// Best-match search: for each script line, scan the entire transcript and
/// pick the segment maximizing the similarity score (first maximal segment
/// in transcript order on ties). The line's own text is emitted when the
/// winning score reaches `threshold`, otherwise the winning segment's text;
/// timing is always the winning segment's.
pub fn best_match_alignment<F>(
    transcript: &[TranscriptSegment],
    script: &ReferenceScript,
    threshold: f64,
    score: F,
) -> Vec<AlignedSegment>
where
    F: Fn(&str, &str) -> f64,
{
    if transcript.is_empty() {
        return Vec::new();
    }
    script
        .lines()
        .iter()
        .map(|line| {
            let (winner, winning_score) = best_match(transcript, line, &score);
            let use_reference = winning_score >= threshold;
            tracing::debug!(
                line = line.as_str(),
                matched = winner.text.as_str(),
                score = format!("{winning_score:.3}"),
                threshold,
                use_reference,
                "best-match line decision"
            );
            AlignedSegment {
                text: if use_reference {
                    line.clone()
                } else {
                    winner.text.clone()
                },
                start: winner.start,
                end: winner.end,
            }
        })
        .collect()
}

fn best_match<'a, F>(
    segments: &'a [TranscriptSegment],
    line: &str,
    score: &F,
) -> (&'a TranscriptSegment, f64)
where
    F: Fn(&str, &str) -> f64,
{
    let mut winner = &segments[0];
    let mut winning_score = score(line, &winner.text);
    for segment in &segments[1..] {
        let s = score(line, &segment.text);
        if s > winning_score {
            winner = segment;
            winning_score = s;
        }
    }
    (winner, winning_score)
}
