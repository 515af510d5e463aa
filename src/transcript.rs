//! Loading of serialized speech-to-text output.
//!
//! Accepts either a whisper-style result object (`{"segments": [...]}`,
//! extra fields ignored) or a bare segment array. The speech-to-text run
//! itself is an external collaborator; this module only reads what it wrote.

use std::path::Path;

use serde::Deserialize;

use crate::error::AlignError;
use crate::types::TranscriptSegment;

#[derive(Debug, Deserialize)]
struct TranscriptionResult {
    segments: Vec<TranscriptSegment>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TranscriptDocument {
    Result(TranscriptionResult),
    Segments(Vec<TranscriptSegment>),
}

pub fn from_json_str(data: &str) -> Result<Vec<TranscriptSegment>, AlignError> {
    let doc: TranscriptDocument =
        serde_json::from_str(data).map_err(|e| AlignError::json("parsing transcript", e))?;
    Ok(match doc {
        TranscriptDocument::Result(result) => result.segments,
        TranscriptDocument::Segments(segments) => segments,
    })
}

pub fn load_json(path: &Path) -> Result<Vec<TranscriptSegment>, AlignError> {
    let data =
        std::fs::read_to_string(path).map_err(|e| AlignError::io("reading transcript", e))?;
    from_json_str(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whisper_result_object_ignoring_extra_fields() {
        let data = r#"{
            "text": " 안녕하세요 오늘 날씨 좋네요",
            "language": "ko",
            "segments": [
                {"id": 0, "seek": 0, "text": "안녕하세요", "start": 0.0, "end": 1.2,
                 "tokens": [1, 2, 3], "avg_logprob": -0.25, "no_speech_prob": 0.01},
                {"id": 1, "seek": 0, "text": "오늘 날씨 좋네요", "start": 1.2, "end": 3.0,
                 "tokens": [4, 5], "avg_logprob": -0.31, "no_speech_prob": 0.02}
            ]
        }"#;
        let segments = from_json_str(data).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "안녕하세요");
        assert_eq!(segments[1].start, 1.2);
        assert_eq!(segments[1].end, 3.0);
    }

    #[test]
    fn parses_bare_segment_array() {
        let data = r#"[{"text": "hello", "start": 0.5, "end": 2.0}]"#;
        let segments = from_json_str(data).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start, 0.5);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = from_json_str("{not json").unwrap_err();
        assert!(matches!(err, AlignError::Json { .. }));
    }

    #[test]
    fn rejects_json_without_segments() {
        assert!(from_json_str(r#"{"text": "no segments here"}"#).is_err());
    }

    #[test]
    fn load_json_reports_missing_file() {
        let err = load_json(Path::new("/nonexistent/transcript.json")).unwrap_err();
        assert!(matches!(err, AlignError::Io { .. }));
    }
}
