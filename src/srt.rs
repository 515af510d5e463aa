//! SubRip (SRT) subtitle serialization.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::AlignError;
use crate::types::AlignedSegment;

/// Formats seconds as an SRT timestamp, `HH:MM:SS,mmm`.
///
/// The millisecond component truncates rather than rounds; this matches the
/// historical output byte for byte and is part of the stable contract.
pub fn format_timestamp(seconds: f64) -> String {
    let whole = seconds as u64;
    let hours = whole / 3600;
    let minutes = (whole % 3600) / 60;
    let secs = whole % 60;
    let millis = ((seconds - whole as f64) * 1000.0) as u64;
    format!("{hours:02}:{minutes:02}:{secs:02},{millis:03}")
}

/// Writes segments as SRT cues: 1-based index, time range, text, blank line.
/// Cue text is trimmed on output only; the segments themselves are not
/// touched.
pub fn write_srt<W: Write>(mut writer: W, segments: &[AlignedSegment]) -> Result<(), AlignError> {
    for (i, segment) in segments.iter().enumerate() {
        writeln!(
            writer,
            "{}\n{} --> {}\n{}\n",
            i + 1,
            format_timestamp(segment.start),
            format_timestamp(segment.end),
            segment.text.trim()
        )
        .map_err(|e| AlignError::io("writing SRT cue", e))?;
    }
    Ok(())
}

pub fn write_srt_file(path: &Path, segments: &[AlignedSegment]) -> Result<(), AlignError> {
    let file = File::create(path).map_err(|e| AlignError::io("creating SRT file", e))?;
    let mut writer = BufWriter::new(file);
    write_srt(&mut writer, segments)?;
    writer
        .flush()
        .map_err(|e| AlignError::io("flushing SRT file", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_segment(text: &str, start: f64, end: f64) -> AlignedSegment {
        AlignedSegment {
            text: text.to_string(),
            start,
            end,
        }
    }

    #[test]
    fn zero_formats_as_all_zeros() {
        assert_eq!(format_timestamp(0.0), "00:00:00,000");
    }

    #[test]
    fn formats_hours_minutes_seconds_millis() {
        assert_eq!(format_timestamp(3725.4), "01:02:05,400");
        assert_eq!(format_timestamp(59.999), "00:00:59,999");
        assert_eq!(format_timestamp(3600.0), "01:00:00,000");
    }

    #[test]
    fn millisecond_component_truncates() {
        // 0.4005 * 1000 = 400.5: truncation gives 400, rounding would give 401.
        assert_eq!(format_timestamp(3725.4005), "01:02:05,400");
        assert_eq!(format_timestamp(1.9999), "00:00:01,999");
    }

    #[test]
    fn write_srt_emits_indexed_cues_with_blank_separators() {
        let segments = vec![
            make_segment("안녕하세요", 0.0, 1.2),
            make_segment(" trimmed on output ", 1.2, 3.0),
        ];
        let mut out = Vec::new();
        write_srt(&mut out, &segments).unwrap();
        let text = String::from_utf8(out).unwrap();
        // 1.2 sits just below 1.2 in binary, so its millis truncate to 199.
        assert_eq!(
            text,
            "1\n00:00:00,000 --> 00:00:01,199\n안녕하세요\n\n\
             2\n00:00:01,199 --> 00:00:03,000\ntrimmed on output\n\n"
        );
    }

    #[test]
    fn write_srt_empty_input_writes_nothing() {
        let mut out = Vec::new();
        write_srt(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
