use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::path::Path;
use tracing::debug;
use zoommap_common::VaultCorpus;
use zoommap_suggest::{match_candidates, SuggestionIndex, MAX_SUGGESTIONS};

#[derive(Debug, Args)]
pub struct SuggestArgs {
    /// Text typed into a link field
    pub query: String,

    /// Document the link is written from (vault-relative)
    #[arg(long)]
    pub from: Option<String>,

    /// Maximum number of suggestions
    #[arg(short, long, default_value_t = MAX_SUGGESTIONS)]
    pub limit: usize,
}

pub fn suggest(args: SuggestArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let vault_dir = config.vault_dir(cwd);

    if !vault_dir.is_dir() {
        return Err(anyhow!("Vault directory does not exist: {:?}", vault_dir));
    }

    let mut corpus = VaultCorpus::open(&vault_dir);
    if let Some(from) = args.from {
        corpus = corpus.with_active(from);
    }

    let index = SuggestionIndex::build(&corpus);
    let matches = match_candidates(index.candidates(), &args.query, args.limit);
    debug!(
        vault = %vault_dir.display(),
        candidates = index.len(),
        matches = matches.len(),
        "Matched link suggestions"
    );

    if matches.is_empty() {
        println!("{}", "No matching notes".yellow());
        return Ok(());
    }

    for candidate in matches {
        println!("  {} {}", candidate.value.bright_white(), candidate.label.dimmed());
    }

    Ok(())
}
