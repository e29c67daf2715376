//! # mcqgen CLI
//!
//! Generates a multiple-choice quiz from a text or PDF file and saves the
//! tabulated result as CSV or JSON. Any failure propagates out of `main`,
//! so the process exits non-zero and no partial output file is produced.

mod export;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mcqgen::providers::ai::openai::{OpenAiProvider, DEFAULT_API_URL, DEFAULT_MODEL};
use mcqgen::{
    tabulate, Extractor, GenerationRequest, PipelineOutput, QuizPipelineBuilder, SourceKind,
};
use mcqgen_pdf::PdfExtractor;
use mcqgen_text::PlainTextExtractor;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(name = "mcqgen", version, about = "Generate MCQs from a text or PDF file")]
struct Cli {
    /// Path to the input file (text or PDF)
    file_path: PathBuf,
    /// Number of MCQs to generate
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    number: u32,
    /// Subject of the MCQs
    #[arg(long, default_value = "General Knowledge")]
    subject: String,
    /// Tone of the MCQs
    #[arg(long, default_value = "simple")]
    tone: String,
    /// Output file name (without extension)
    #[arg(long, default_value = "quiz_output")]
    output: String,
    /// Output file format
    #[arg(long, value_enum, default_value = "csv")]
    format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = run(&cli).await?;

    println!("Total Tokens: {}", output.usage.total_tokens);
    println!("Prompt Tokens: {}", output.usage.prompt_tokens);
    println!("Completion Tokens: {}", output.usage.completion_tokens);
    println!("Total Cost: ${:.4}", output.cost);
    println!("Quiz generation completed successfully.");
    println!("Review: {}", output.review);

    Ok(())
}

async fn run(cli: &Cli) -> Result<PipelineOutput> {
    let text = read_source_text(&cli.file_path)?;
    info!(
        chars = text.len(),
        "Read source document from '{}'.",
        cli.file_path.display()
    );

    let pipeline = QuizPipelineBuilder::new()
        .ai_provider(Box::new(build_provider()?))
        .build()?;
    let request = GenerationRequest::new(text, cli.number, &cli.subject, &cli.tone);

    let output = pipeline.execute(request).await?;

    let rows = tabulate(&output.quiz)?;
    let output_path = PathBuf::from(format!("{}.{}", cli.output, cli.format.extension()));
    match cli.format {
        OutputFormat::Csv => export::write_csv(&output_path, &rows)?,
        OutputFormat::Json => export::write_json(&output_path, &rows)?,
    }
    println!("Output saved to {}", output_path.display());

    Ok(output)
}

/// Reads the input file and extracts its text, dispatching on the file
/// extension the way the declared-type contract requires.
fn read_source_text(path: &Path) -> Result<String> {
    let data = fs::read(path)
        .with_context(|| format!("Failed to read input file '{}'", path.display()))?;
    let text = match SourceKind::from_path(path) {
        SourceKind::Pdf => PdfExtractor::new().extract(&data)?,
        SourceKind::PlainText => PlainTextExtractor::new().extract(&data)?,
    };
    Ok(text)
}

/// Builds the OpenAI provider from the environment.
///
/// `OPEN_API_KEY` is required; `OPENAI_API_URL` and `MCQGEN_MODEL` override
/// the endpoint and model, which also lets tests point the CLI at a mock
/// server.
fn build_provider() -> Result<OpenAiProvider> {
    let api_key = env::var("OPEN_API_KEY")
        .context("The OPEN_API_KEY environment variable is not set")?;
    let api_url = env::var("OPENAI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let model = env::var("MCQGEN_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
    Ok(OpenAiProvider::new(api_url, api_key, model)?)
}
