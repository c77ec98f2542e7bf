use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "prbot")]
#[command(about = "Upload files as a new branch and open a GitHub pull request", long_about = None)]
pub struct Cli {
    /// Files to upload, each one placed at the repository root under its base name
    pub files: Vec<PathBuf>,

    /// Branch to create and use as the pull request head
    #[arg(long)]
    pub pr_branch: String,

    /// Target repository [default: pull-request-bot-test]
    #[arg(long)]
    pub repo: Option<String>,

    /// Owner of the target repository [default: electricface]
    #[arg(long)]
    pub owner: Option<String>,

    /// Settings file (defaults to ./prbot.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
