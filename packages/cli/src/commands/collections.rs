use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::Path;
use tracing::debug;
use zoommap_common::JsonFileSink;
use zoommap_model::Collection;

#[derive(Debug, Args)]
pub struct CollectionsArgs {
    /// Print the collections as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn collections(args: CollectionsArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let settings_path = config.settings_path(cwd);
    let settings = JsonFileSink::new(&settings_path).load()?;
    debug!(
        path = %settings_path.display(),
        collections = settings.collections.len(),
        "Loaded settings"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&settings.collections)?);
        return Ok(());
    }

    if settings.collections.is_empty() {
        println!("{}", "⚠️  No collections yet".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("📚 {} collections", settings.collections.len())
            .bright_blue()
            .bold()
    );
    for collection in &settings.collections {
        println!("  {}", summary_line(collection));
    }

    Ok(())
}

fn summary_line(collection: &Collection) -> String {
    let (pins, favorites, stickers) = collection
        .include
        .as_ref()
        .map(|i| (i.pin_keys.len(), i.favorites.len(), i.stickers.len()))
        .unwrap_or_default();

    format!(
        "{} {} ({} base images, {} pins, {} favorites, {} stickers, {} swap pins)",
        collection.id.bright_white(),
        collection.name,
        collection.base_paths().len(),
        pins,
        favorites,
        stickers,
        collection.swap_pins().len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_bare_collection() {
        colored::control::set_override(false);
        let line = summary_line(&Collection::new("forest", "Forest"));
        assert_eq!(
            line,
            "forest Forest (0 base images, 0 pins, 0 favorites, 0 stickers, 0 swap pins)"
        );
    }
}
