//! # Collection Editor
//!
//! Outer editing session for one collection in the settings. Holds the
//! settings exclusively while open, so nothing else can change the
//! collection underneath the working copy.
//!
//! Save writes the draft back and hands the settings to the persistence sink
//! once. Cancel and delete never persist. Swap pins are edited through a
//! nested [`SwapPinEditor`] whose save only reaches this editor's draft.

use crate::mutations::{CollectionMutation, MutationContext};
use crate::options::EditorOptions;
use crate::projection::{self, BasePathRow, FavoriteRow, ListView, PinCell, StickerRow, SwapPinRow};
use crate::session::EditSession;
use crate::signal::{EditResult, ResultReceiver};
use crate::stage::CollectionDraft;
use crate::swap_pin_editor::SwapPinEditor;
use crate::EditorError;
use tracing::{info, warn};
use zoommap_common::{CommonResult, DocumentCorpus, IconLibrary, ImageStore, PersistenceSink};
use zoommap_model::{Collection, ZoomMapSettings};

/// Result of a save: the session result and what the sink reported
#[derive(Debug)]
pub struct SaveOutcome {
    pub result: EditResult,
    pub persisted: CommonResult<()>,
}

pub struct CollectionEditor<'a, P: PersistenceSink + ?Sized> {
    settings: &'a mut ZoomMapSettings,
    sink: &'a P,
    index: usize,
    options: EditorOptions,
    session: EditSession<Collection>,
}

impl<'a, P: PersistenceSink + ?Sized> CollectionEditor<'a, P> {
    /// Stage the collection at `index`
    pub fn open(
        settings: &'a mut ZoomMapSettings,
        index: usize,
        sink: &'a P,
        options: EditorOptions,
    ) -> Result<(Self, ResultReceiver), EditorError> {
        let collection = settings
            .collections
            .get(index)
            .ok_or_else(|| EditorError::CollectionNotFound(format!("#{}", index)))?;
        let (session, rx) = EditSession::open(collection);

        let editor = Self {
            settings,
            sink,
            index,
            options,
            session,
        };
        Ok((editor, rx))
    }

    /// Stage the collection with the given id (or, failing that, name)
    pub fn open_by_id(
        settings: &'a mut ZoomMapSettings,
        id_or_name: &str,
        sink: &'a P,
        options: EditorOptions,
    ) -> Result<(Self, ResultReceiver), EditorError> {
        let index = settings
            .position_of(id_or_name)
            .ok_or_else(|| EditorError::CollectionNotFound(id_or_name.to_string()))?;
        Self::open(settings, index, sink, options)
    }

    pub fn draft(&self) -> &CollectionDraft {
        self.session.draft()
    }

    /// The authoritative collection, unchanged until save
    pub fn original(&self) -> &Collection {
        &self.settings.collections[self.index]
    }

    pub fn icons(&self) -> IconLibrary<'_> {
        IconLibrary::new(&self.settings.icons)
    }

    /// Apply one form interaction to the draft
    pub fn apply(&mut self, mutation: CollectionMutation) -> Result<(), EditorError> {
        let ctx = MutationContext {
            icons: IconLibrary::new(&self.settings.icons),
            options: &self.options,
        };
        mutation
            .apply(self.session.draft_mut(), &ctx)
            .map_err(|e| {
                warn!(error = %e, "Rejected collection mutation");
                EditorError::from(e)
            })
    }

    pub fn base_paths(&self) -> ListView<BasePathRow<'_>> {
        projection::base_paths(self.session.draft())
    }

    pub fn pins(&self, store: &dyn ImageStore) -> ListView<PinCell<'_>> {
        projection::pin_cells(self.session.draft(), self.icons(), store)
    }

    pub fn favorites(&self) -> ListView<FavoriteRow<'_>> {
        projection::favorites(self.session.draft())
    }

    pub fn stickers(&self) -> ListView<StickerRow<'_>> {
        projection::stickers(self.session.draft())
    }

    pub fn swap_pins(&self) -> ListView<SwapPinRow<'_>> {
        projection::swap_pins(self.session.draft())
    }

    /// Open a nested editor over the swap pin at `index` of the draft
    ///
    /// The link suggestion index is built from `corpus` now and stays fixed
    /// for the nested session.
    pub fn edit_swap_pin(
        &mut self,
        index: usize,
        corpus: &dyn DocumentCorpus,
    ) -> Result<(SwapPinEditor<'_>, ResultReceiver), EditorError> {
        let icons = IconLibrary::new(&self.settings.icons);
        let hide_delay = self.options.suggestion_hide_delay();
        let len = self.session.draft().include.swap_pins.len();

        let (nested, rx) = self
            .session
            .open_child(|draft| draft.include.swap_pins.get_mut(index))
            .ok_or(crate::MutationError::IndexOutOfRange {
                list: "swap pins",
                index,
                len,
            })?;

        Ok((SwapPinEditor::new(nested, icons, corpus, hide_delay), rx))
    }

    /// Commit the draft to the settings and persist once
    pub fn save(self) -> SaveOutcome {
        let CollectionEditor {
            settings,
            sink,
            index,
            session,
            ..
        } = self;

        let result = session.commit(&mut settings.collections[index]);
        info!(
            collection = %settings.collections[index].name,
            "Collection saved, persisting settings"
        );

        let persisted = sink.save_settings(settings);
        if let Err(e) = &persisted {
            warn!(error = %e, "Persisting settings failed");
        }

        SaveOutcome { result, persisted }
    }

    /// Drop the draft; the collection stays as it was
    pub fn cancel(self) -> EditResult {
        self.session.discard()
    }

    /// Report a delete; removing the collection is up to the caller
    pub fn delete(self) -> EditResult {
        info!(collection = %self.original().name, "Collection delete requested");
        self.session.delete()
    }
}
