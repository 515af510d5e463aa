use crate::alignment;
use crate::config::AlignmentPolicy;
use crate::pipeline::traits::SimilarityScorer;
use crate::types::{AlignedSegment, ReferenceScript, TranscriptSegment};

/// Configured alignment runtime: a policy plus the scorer it searches with.
///
/// Pure and stateless between calls; safe to share across threads and to
/// invoke repeatedly on independent inputs.
pub struct ScriptAligner {
    policy: AlignmentPolicy,
    scorer: Box<dyn SimilarityScorer>,
}

pub(crate) struct ScriptAlignerParts {
    pub policy: AlignmentPolicy,
    pub scorer: Box<dyn SimilarityScorer>,
}

impl ScriptAligner {
    pub(crate) fn from_parts(parts: ScriptAlignerParts) -> Self {
        Self {
            policy: parts.policy,
            scorer: parts.scorer,
        }
    }

    pub fn policy(&self) -> AlignmentPolicy {
        self.policy
    }

    pub fn align(
        &self,
        transcript: &[TranscriptSegment],
        script: &ReferenceScript,
    ) -> Vec<AlignedSegment> {
        match self.policy.threshold() {
            None => alignment::forced_alignment(transcript, script),
            Some(threshold) => alignment::best_match_alignment(transcript, script, threshold, |a, b| {
                self.scorer.score(a, b)
            }),
        }
    }
}
