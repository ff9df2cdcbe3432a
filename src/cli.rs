use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Movie CSV to process (overrides `catalog.path`)
    pub file: Option<PathBuf>,

    /// Log level (overrides `logs.level`)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// CLI file first, configured path second.
    pub fn resolve_file(&self, config: &crate::config::Config) -> Option<PathBuf> {
        self.file
            .clone()
            .or_else(|| config.catalog.path.as_ref().map(PathBuf::from))
    }
}
