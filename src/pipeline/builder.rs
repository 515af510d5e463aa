use crate::config::AlignmentPolicy;
use crate::pipeline::defaults::LcsScorer;
use crate::pipeline::runtime::{ScriptAligner, ScriptAlignerParts};
use crate::pipeline::traits::SimilarityScorer;

pub struct ScriptAlignerBuilder {
    policy: AlignmentPolicy,
    scorer: Option<Box<dyn SimilarityScorer>>,
}

impl ScriptAlignerBuilder {
    pub fn new(policy: AlignmentPolicy) -> Self {
        Self {
            policy,
            scorer: None,
        }
    }

    pub fn with_scorer(mut self, scorer: Box<dyn SimilarityScorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    pub fn build(self) -> ScriptAligner {
        ScriptAligner::from_parts(ScriptAlignerParts {
            policy: self.policy,
            scorer: self.scorer.unwrap_or_else(|| Box::new(LcsScorer)),
        })
    }
}
