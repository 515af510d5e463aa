use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AlignError;

/// One unit of speech-to-text output. Segments arrive in chronological
/// order and that order is preserved as the search order; the aligner only
/// reads them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    pub start: f64,
    pub end: f64,
}

/// One subtitle cue produced by the aligner: final text (reference line or
/// transcript text, per policy) paired with the timing of the transcript
/// segment it was placed on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignedSegment {
    pub text: String,
    pub start: f64,
    pub end: f64,
}

/// The authoritative script, reduced to its non-blank lines.
///
/// Lines are kept verbatim; a line is discarded only when trimming leaves
/// nothing. Line order is assumed to follow the spoken order of the audio.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReferenceScript {
    lines: Vec<String>,
}

impl ReferenceScript {
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, AlignError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| AlignError::io("reading reference script", e))?;
        Ok(Self::from_text(&text))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
