use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use edunote_pipeline::{
    openai, tracing::init_tracing_subscriber, ExtractiveEngine, GenerativeEngine, NoTranscriber,
    NotesEngine, NotesInput, NotesProcessorBuilder, TextFileRenderer, Transcriber,
    DEFAULT_MAX_INPUT_CHARS,
};

#[derive(Parser)]
#[command(name = "edunote", about = "Lecture text to smart notes generator")]
struct Cli {
    /// Lecture input: a text file, or an audio file with --audio
    input: PathBuf,

    /// Treat the input as an audio recording and transcribe it first
    #[arg(long)]
    audio: bool,

    /// Note-generation engine
    #[arg(long, value_enum, default_value_t = EngineKind::Extractive)]
    engine: EngineKind,

    /// OpenAI API key, required for the generative engine and for audio input
    #[arg(long, env = "OPENAI_API_KEY")]
    openai_key: Option<String>,

    /// Directory the notes report is written to
    #[arg(long, default_value = "./notes")]
    output_dir: PathBuf,

    /// Maximum accepted lecture size in characters
    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_CHARS)]
    max_input_chars: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EngineKind {
    /// Derive notes positionally from the lecture text itself
    Extractive,
    /// Delegate summary, key points, and quiz to an external model
    Generative,
}

async fn run_pipeline<E, T>(engine: E, transcriber: T, cli: &Cli) -> anyhow::Result<()>
where
    E: NotesEngine + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
{
    let input = if cli.audio {
        NotesInput::Audio(cli.input.clone())
    } else {
        let text = std::fs::read_to_string(&cli.input)
            .with_context(|| format!("Failed to read {}", cli.input.display()))?;
        NotesInput::Text(text)
    };

    let processor = NotesProcessorBuilder::new(&cli.output_dir)
        .engine(engine)
        .transcriber(transcriber)
        .renderer(TextFileRenderer)
        .max_input_chars(cli.max_input_chars)
        .build();

    let notes = processor.run(input).await?;
    tracing::info!(path = %notes.path.display(), "Notes generated");
    println!("{}", notes.report);

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    match (cli.engine, cli.openai_key.as_deref()) {
        (EngineKind::Extractive, None) => {
            if cli.audio {
                anyhow::bail!("OPENAI_API_KEY is required to transcribe audio input");
            }
            run_pipeline(ExtractiveEngine::default(), NoTranscriber, &cli).await
        }
        (EngineKind::Extractive, Some(key)) => {
            let client = openai::init_shared(key);
            run_pipeline(ExtractiveEngine::default(), client, &cli).await
        }
        (EngineKind::Generative, Some(key)) => {
            let client = openai::init_shared(key);
            run_pipeline(GenerativeEngine::new(client), client, &cli).await
        }
        (EngineKind::Generative, None) => {
            anyhow::bail!("OPENAI_API_KEY is required for the generative engine")
        }
    }
}
