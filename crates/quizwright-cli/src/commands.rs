//! Subcommand implementations. Each returns its result instead of printing
//! so `main` owns stdout and exit codes.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::info;

use quizwright_core::QuizConfig;
use quizwright_quiz::{grade, import_items, GradeReport, QuizGenerator, QuizItem};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Text file to read; standard input when omitted.
    pub file: Option<PathBuf>,
    /// Number of questions (defaults to the configured count).
    #[arg(long, short = 'n')]
    pub count: Option<usize>,
    /// Fixed seed for reproducible quizzes.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Thesaurus JSON file for lexical distractors.
    #[arg(long)]
    pub lexicon: Option<PathBuf>,
    /// Quiz configuration JSON file.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct GradeArgs {
    /// Quiz array as printed by `generate`.
    pub quiz: PathBuf,
    /// JSON array of answer strings, one per question.
    pub answers: PathBuf,
    /// Topic to report when the score is low.
    #[arg(long)]
    pub topic: Option<String>,
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Generator output to normalize; standard input when omitted.
    pub file: Option<PathBuf>,
    /// Maximum number of items to keep.
    #[arg(long, short = 'n')]
    pub count: Option<usize>,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Configuration file to start from.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Write the effective configuration here instead of printing it.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Read a file, or stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read standard input")?;
            Ok(buf)
        }
    }
}

/// Resolve configuration: file and environment first, then command-line flags.
pub fn resolve_config(args: &GenerateArgs) -> anyhow::Result<QuizConfig> {
    let mut config = QuizConfig::load(args.config.as_deref());
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(path) = &args.lexicon {
        config.lexicon_path = Some(path.clone());
    }
    config.validate()?;
    Ok(config)
}

pub fn generate(args: &GenerateArgs) -> anyhow::Result<Vec<QuizItem>> {
    let config = resolve_config(args)?;
    let count = args.count.unwrap_or(config.default_question_count);
    let text = read_input(args.file.as_deref())?;

    let generator = QuizGenerator::from_config(config, None);
    let quiz = generator.create_quiz(Some(&text), count);
    info!("Generated {} questions", quiz.len());
    Ok(quiz)
}

pub fn grade_files(args: &GradeArgs) -> anyhow::Result<GradeReport> {
    let quiz: Vec<QuizItem> = serde_json::from_str(&read_input(Some(&args.quiz))?)
        .with_context(|| format!("{} is not a quiz array", args.quiz.display()))?;
    let answers: Vec<String> = serde_json::from_str(&read_input(Some(&args.answers))?)
        .with_context(|| format!("{} is not an array of answers", args.answers.display()))?;
    Ok(grade(&quiz, &answers, args.topic.as_deref())?)
}

pub fn import(args: &ImportArgs) -> anyhow::Result<Vec<QuizItem>> {
    let raw = read_input(args.file.as_deref())?;
    let limit = args.count.unwrap_or(QuizConfig::default().default_question_count);
    Ok(import_items(&raw, limit))
}

/// Effective configuration (file plus environment), saved to `--output` when given.
pub fn effective_config(args: &ConfigArgs) -> anyhow::Result<QuizConfig> {
    let config = QuizConfig::load(args.config.as_deref());
    config.validate()?;
    if let Some(path) = &args.output {
        config.save(path)?;
    }
    Ok(config)
}
