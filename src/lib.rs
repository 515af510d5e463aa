pub mod alignment;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod srt;
pub mod transcript;
pub mod types;

pub use alignment::align;
pub use config::AlignmentPolicy;
pub use error::AlignError;
pub use pipeline::builder::ScriptAlignerBuilder;
pub use pipeline::runtime::ScriptAligner;
pub use pipeline::traits::SimilarityScorer;
pub use types::{AlignedSegment, ReferenceScript, TranscriptSegment};
