use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::Path;
use tracing::{debug, info};
use zoommap_common::{JsonFileSink, PersistenceSink};
use zoommap_editor::{CollectionEditor, CollectionMutation, EditResult, EditorOptions};
use zoommap_model::ZoomMapSettings;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Collection id (or exact name)
    pub collection: String,

    /// New collection name
    #[arg(long)]
    pub rename: Option<String>,

    /// Bind a base image path
    #[arg(long = "add-base")]
    pub add_base: Vec<String>,

    /// Flip whether an icon library key is included
    #[arg(long = "toggle-pin")]
    pub toggle_pin: Vec<String>,

    /// Delete the collection instead of editing it
    #[arg(long, conflicts_with_all = ["rename", "add_base", "toggle_pin"])]
    pub delete: bool,
}

impl EditArgs {
    fn has_changes(&self) -> bool {
        self.rename.is_some() || !self.add_base.is_empty() || !self.toggle_pin.is_empty()
    }
}

pub fn edit(args: EditArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let sink = JsonFileSink::new(config.settings_path(cwd));
    let mut settings = sink.load()?;

    let result = run_session(&mut settings, &sink, &args, config.editor_options())?;

    if result.deleted {
        println!("  {} Deleted {}", "✓".green(), args.collection.bright_white());
    } else if result.updated {
        println!("  {} Saved {}", "✓".green(), args.collection.bright_white());
    } else {
        println!("{}", "⚠️  Nothing to change".yellow());
    }
    Ok(())
}

/// One collection session driven by the command line flags
///
/// Persistence failures after a commit surface as errors here; the settings
/// in memory keep the committed change either way.
fn run_session<P: PersistenceSink + ?Sized>(
    settings: &mut ZoomMapSettings,
    sink: &P,
    args: &EditArgs,
    options: EditorOptions,
) -> Result<EditResult> {
    if args.delete {
        return delete_collection(settings, sink, &args.collection, options);
    }

    let (mut editor, _rx) = CollectionEditor::open_by_id(settings, &args.collection, sink, options)?;
    if !args.has_changes() {
        debug!(collection = %args.collection, "No edits requested");
        return Ok(editor.cancel());
    }

    if let Some(name) = &args.rename {
        editor.apply(CollectionMutation::Rename { name: name.clone() })?;
    }
    for path in &args.add_base {
        editor.apply(CollectionMutation::AddBasePath { path: path.clone() })?;
    }
    for key in &args.toggle_pin {
        let included = !editor.draft().include.pin_keys.contains(key);
        editor.apply(CollectionMutation::SetPinIncluded {
            key: key.clone(),
            included,
        })?;
    }

    let outcome = editor.save();
    info!(
        collection = %args.collection,
        renamed = args.rename.is_some(),
        added_bases = args.add_base.len(),
        toggled_pins = args.toggle_pin.len(),
        "Collection edited"
    );
    outcome.persisted?;
    Ok(outcome.result)
}

/// The editor only reports a delete; the host removes and persists
fn delete_collection<P: PersistenceSink + ?Sized>(
    settings: &mut ZoomMapSettings,
    sink: &P,
    id_or_name: &str,
    options: EditorOptions,
) -> Result<EditResult> {
    info!(collection = %id_or_name, "Deleting collection");
    let (editor, _rx) = CollectionEditor::open_by_id(settings, id_or_name, sink, options)?;
    let result = editor.delete();

    if let Some(index) = settings.position_of(id_or_name) {
        settings.remove_collection(index);
        sink.save_settings(settings)?;
    }
    Ok(result)
}
