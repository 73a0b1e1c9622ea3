//! Quizwright — heuristic quiz generation from study text.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{ConfigArgs, GenerateArgs, GradeArgs, ImportArgs};

#[derive(Parser, Debug)]
#[command(
    name = "quizwright",
    version,
    about = "Multiple-choice and true/false quizzes from study text",
    after_help = "Environment: QUIZWRIGHT_LEXICON, QUIZWRIGHT_SEED, QUIZWRIGHT_DETERMINISTIC, \
                  QUIZWRIGHT_QUESTION_COUNT, RUST_LOG"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a quiz from a text file (or stdin).
    Generate(GenerateArgs),
    /// Grade an answers array against a generated quiz.
    Grade(GradeArgs),
    /// Normalize quiz items produced by another generator.
    Import(ImportArgs),
    /// Print the effective configuration, or save it with --output.
    Config(ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries JSON only
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Commands::Generate(args) => {
            let quiz = commands::generate(&args)?;
            if quiz.is_empty() {
                eprintln!("could not generate questions from the supplied text");
                std::process::exit(1);
            }
            println!("{}", serde_json::to_string_pretty(&quiz)?);
        }
        Commands::Grade(args) => {
            let report = commands::grade_files(&args)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Import(args) => {
            let items = commands::import(&args)?;
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        Commands::Config(args) => {
            let config = commands::effective_config(&args)?;
            if args.output.is_none() {
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }
    }
    Ok(())
}
