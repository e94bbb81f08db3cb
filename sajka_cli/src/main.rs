// Sajk'a word generator: CLI entry point.
//
// Usage:
//   saj word [SYLLABLES] [--seed N] [--config settings.json]
//   saj rotate <WORD>        (WORD may be `-` to read the grid from stdin)
//   saj help
//
// Generated and rotated words are printed to stdout in the tab/newline grid
// form. Diagnostics go to stderr through `tracing`; set `RUST_LOG=debug` to
// watch syllables being adjoined.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sajka_lang::{GameRng, GenerationConfig, Word};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "saj", about = "Generate and transform Sajk'a words")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a word with SYLLABLES syllables (default 2).
    Word {
        syllables: Option<usize>,
        /// Seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
        /// JSON generation settings; command-line values take precedence.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Rotate a word, applying the rotation mutation. `-` reads stdin.
    Rotate { word: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Word {
            syllables,
            seed,
            config,
        } => {
            let mut settings = match config {
                Some(path) => load_config(&path)?,
                None => GenerationConfig::default(),
            };
            if let Some(n) = syllables {
                settings.syllables = n;
            }
            if seed.is_some() {
                settings.seed = seed;
            }
            print!("{}", generate_word(&settings)?);
        }
        Command::Rotate { word } => {
            let text = read_word_arg(&word)?;
            let word = Word::parse(&text).context("could not parse word")?;
            print!("{}", word.rotate());
        }
    }
    Ok(())
}

fn load_config(path: &Path) -> Result<GenerationConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("could not read config {}", path.display()))?;
    GenerationConfig::from_json(&json)
        .with_context(|| format!("invalid config {}", path.display()))
}

fn generate_word(settings: &GenerationConfig) -> Result<Word> {
    let seed = settings.seed.unwrap_or_else(clock_seed);
    info!(seed, syllables = settings.syllables, "generating word");
    let mut rng = GameRng::new(seed);
    let generated = settings
        .word_generator()
        .generate(&mut rng)
        .with_context(|| format!("word generation failed (seed {seed})"))?;
    info!(
        rejected_placements = generated.rejected_placements,
        "generated {} syllables", generated.syllables
    );
    Ok(generated.word)
}

/// Seed for runs without `--seed`. Only the CLI reaches for the clock; the
/// library never does.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64)
}

fn read_word_arg(arg: &str) -> Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("could not read word from stdin")?;
    Ok(text)
}
