use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use subalign::{
    srt, transcript, AlignError, AlignmentPolicy, ReferenceScript, ScriptAlignerBuilder,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PolicyChoice {
    Forced,
    Strong,
    Weak,
}

impl PolicyChoice {
    fn policy(self) -> AlignmentPolicy {
        match self {
            Self::Forced => AlignmentPolicy::Forced,
            Self::Strong => AlignmentPolicy::Strong,
            Self::Weak => AlignmentPolicy::Weak,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "align_subs",
    about = "Aligns a speech-to-text transcript against a reference script and writes SubRip subtitles"
)]
struct Args {
    /// Whisper-style transcript JSON: a result object with a `segments`
    /// field, or a bare segment array.
    #[arg(long)]
    transcript: PathBuf,
    /// Reference script, one line per subtitle cue; blank lines are skipped.
    #[arg(long)]
    script: PathBuf,
    /// Trust policy for script text over transcript text.
    #[arg(long, value_enum, default_value_t = PolicyChoice::Strong)]
    mode: PolicyChoice,
    /// Legacy mode label (무조건, 강, 약); overrides --mode when given.
    #[arg(long)]
    mode_label: Option<String>,
    /// Output path; defaults to the transcript path with an .srt extension.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), AlignError> {
    let args = Args::parse();
    let policy = match &args.mode_label {
        Some(label) => AlignmentPolicy::from_label(label)?,
        None => args.mode.policy(),
    };

    let segments = transcript::load_json(&args.transcript)?;
    let script = ReferenceScript::load(&args.script)?;
    tracing::info!(
        segments = segments.len(),
        lines = script.len(),
        policy = policy.as_str(),
        "aligning transcript against script"
    );

    let aligner = ScriptAlignerBuilder::new(policy).build();
    let aligned = aligner.align(&segments, &script);

    let out_path = args
        .out
        .unwrap_or_else(|| args.transcript.with_extension("srt"));
    srt::write_srt_file(&out_path, &aligned)?;
    tracing::info!(cues = aligned.len(), out = %out_path.display(), "wrote SRT file");
    Ok(())
}
