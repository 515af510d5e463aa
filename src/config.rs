use crate::error::AlignError;

/// How much the reference script is trusted over the machine transcription.
///
/// `Forced` pairs script lines with transcript timing positionally and never
/// keeps transcript text. `Strong` and `Weak` search the whole transcript
/// for the best-scoring segment per line and substitute the script text only
/// when the similarity ratio clears the policy threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignmentPolicy {
    Forced,
    Strong,
    Weak,
}

impl AlignmentPolicy {
    pub const STRONG_THRESHOLD: f64 = 0.7;
    pub const WEAK_THRESHOLD: f64 = 0.4;

    /// Minimum similarity ratio at which the reference text replaces the
    /// transcript text. `None` for `Forced`, which substitutes
    /// unconditionally.
    pub fn threshold(self) -> Option<f64> {
        match self {
            Self::Forced => None,
            Self::Strong => Some(Self::STRONG_THRESHOLD),
            Self::Weak => Some(Self::WEAK_THRESHOLD),
        }
    }

    /// Parses the user-facing mode labels. The Korean labels are the
    /// original UI surface ("무조건" unconditional, "강" strong, "약" weak);
    /// the English names are accepted alongside them.
    pub fn from_label(label: &str) -> Result<Self, AlignError> {
        match label.trim() {
            "무조건" | "forced" => Ok(Self::Forced),
            "강" | "strong" => Ok(Self::Strong),
            "약" | "weak" => Ok(Self::Weak),
            other => Err(AlignError::invalid_input(format!(
                "unknown alignment policy label: {other:?}"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forced => "forced",
            Self::Strong => "strong",
            Self::Weak => "weak",
        }
    }
}
