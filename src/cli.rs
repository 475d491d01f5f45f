use crate::config::Config;
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// Command-line options shared by the terminal and desktop frontends
#[derive(Debug, Parser)]
#[command(version, about = "Text editor with visible undo/redo stacks")]
pub struct Args {
    /// TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Initial text (not undoable)
    #[arg(short, long, default_value = "")]
    pub text: String,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Start logging, then load the config it names
    pub fn setup(&self) -> Result<Config> {
        crate::logging::init(self.log_file.as_deref())?;
        Config::load_or_default(self.config.as_deref())
    }
}
