mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{collections, edit, suggest, CollectionsArgs, EditArgs, SuggestArgs};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// ZoomMap CLI - edit map collections and look up note links
#[derive(Parser, Debug)]
#[command(name = "zoommap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the collections in the settings file
    Collections(CollectionsArgs),

    /// Show link suggestions for a query against the vault
    Suggest(SuggestArgs),

    /// Edit (or delete) one collection and save the settings
    Edit(EditArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| match cli.command {
            Command::Collections(args) => collections(args, &cwd),
            Command::Suggest(args) => suggest(args, &cwd),
            Command::Edit(args) => edit(args, &cwd),
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
