//! deckcheck CLI - slide-deck extraction and fact-checking tool
//!
//! Extracts slide text and embedded images from PPTX files, and optionally
//! runs the full fact-check pipeline against the configured services.

use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use deckcheck::factcheck::FactChecker;
use deckcheck::llm::LlmConfig;
use deckcheck::stt::SttConfig;

/// Slide-deck content extraction and fact-checking
#[derive(Parser)]
#[command(
    name = "deckcheck",
    version,
    about = "Extract and fact-check slide-deck content",
    long_about = "deckcheck - slide-deck extraction and fact-checking tool.\n\n\
                  Extracts slide text and embedded images from PPTX archives as JSON,\n\
                  and can submit the content (plus optional narration audio) for a\n\
                  factual-accuracy report."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract slide text and images to JSON
    Extract {
        /// Input PPTX file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,
    },

    /// Run the full fact-check pipeline on a deck
    ///
    /// Requires ASSEMBLYAI_API_KEY and GEMINI_API_KEY in the environment.
    Factcheck {
        /// Input PPTX file path
        input: PathBuf,

        /// Narration audio file to transcribe alongside the deck
        #[arg(short, long)]
        audio: Option<PathBuf>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Extract {
            input,
            output,
            compact,
        } => {
            let pb = create_spinner("Extracting deck content...");

            let result = deckcheck::extract_content(&input)?;

            let json = if compact {
                serde_json::to_string(&result)?
            } else {
                serde_json::to_string_pretty(&result)?
            };

            pb.finish_and_clear();
            write_output(output.as_ref(), &json)?;

            if let Some(path) = output {
                println!(
                    "{} Extracted {} text runs and {} images to {}",
                    "✓".green().bold(),
                    result.texts.len(),
                    result.images.len(),
                    path.display()
                );
            }
        }

        Commands::Factcheck {
            input,
            audio,
            output,
        } => {
            let stt_key = require_env("ASSEMBLYAI_API_KEY")?;
            let llm_key = require_env("GEMINI_API_KEY")?;

            let pb = create_spinner("Running fact-check pipeline...");

            let checker = FactChecker::new(SttConfig::new(stt_key), LlmConfig::new(llm_key));
            let report = checker.run(&input, audio.as_deref()).await?;

            let json = serde_json::to_string_pretty(&report)?;

            pb.finish_and_clear();
            write_output(output.as_ref(), &json)?;

            if let Some(path) = output {
                println!(
                    "{} Fact-check report written to {}",
                    "✓".green().bold(),
                    path.display()
                );
            }
        }
    }

    Ok(())
}

fn require_env(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    std::env::var(name).map_err(|_| format!("environment variable {name} is not set").into())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}
