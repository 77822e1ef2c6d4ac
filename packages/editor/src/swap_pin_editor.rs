//! # Swap Pin Editor
//!
//! Nested session over one swap pin of a collection draft: frame list,
//! default toggles, and link inputs with suggestions.
//!
//! Only one link input has focus at a time, so a single popup is tracked,
//! bound to the frame whose input last received text.

use crate::mutations::SwapPinMutation;
use crate::projection::{self, FrameRow, ListView};
use crate::session::NestedSession;
use crate::signal::EditResult;
use crate::EditorError;
use std::time::{Duration, Instant};
use tracing::warn;
use zoommap_common::{DocumentCorpus, IconLibrary};
use zoommap_model::SwapPinPreset;
use zoommap_suggest::{SuggestionCandidate, SuggestionIndex, SuggestionPopup};

pub struct SwapPinEditor<'a> {
    session: NestedSession<'a, SwapPinPreset>,
    icons: IconLibrary<'a>,
    suggestions: SuggestionIndex,
    popup: SuggestionPopup,
    /// Frame the popup belongs to
    popup_frame: Option<usize>,
}

impl<'a> SwapPinEditor<'a> {
    /// Wrap a nested session; builds the suggestion index once
    pub fn new(
        session: NestedSession<'a, SwapPinPreset>,
        icons: IconLibrary<'a>,
        corpus: &dyn DocumentCorpus,
        hide_delay: Duration,
    ) -> Self {
        Self {
            session,
            icons,
            suggestions: SuggestionIndex::build(corpus),
            popup: SuggestionPopup::with_hide_delay(hide_delay),
            popup_frame: None,
        }
    }

    pub fn draft(&self) -> &SwapPinPreset {
        self.session.draft()
    }

    pub fn suggestion_index(&self) -> &SuggestionIndex {
        &self.suggestions
    }

    pub fn apply(&mut self, mutation: SwapPinMutation) -> Result<(), EditorError> {
        mutation
            .apply(self.session.draft_mut(), &self.icons)
            .map_err(|e| {
                warn!(error = %e, "Rejected swap pin mutation");
                EditorError::from(e)
            })?;

        if let SwapPinMutation::RemoveFrame { .. } = mutation {
            // indices after the removed row shifted
            self.close_popup();
        }
        Ok(())
    }

    pub fn frames(&self) -> ListView<FrameRow<'_>> {
        projection::frames(self.session.draft(), &self.icons)
    }

    /// Text typed into a frame's link input
    ///
    /// Stores the link and refreshes the suggestion list for that input.
    pub fn link_input(&mut self, frame: usize, text: &str) -> Result<&[SuggestionCandidate], EditorError> {
        self.apply(SwapPinMutation::SetFrameLink {
            index: frame,
            link: text.to_string(),
        })?;

        self.popup_frame = Some(frame);
        self.popup.on_input(&self.suggestions, text);
        Ok(self.popup.items())
    }

    /// The focused link input lost focus at `now`
    pub fn link_focus_lost(&mut self, now: Instant) {
        self.popup.on_focus_lost(now);
    }

    /// Advance the popup clock; returns true if the list just hid
    pub fn tick(&mut self, now: Instant) -> bool {
        let hid = self.popup.tick(now);
        if hid {
            self.popup_frame = None;
        }
        hid
    }

    /// Suggestions currently listed under the focused input
    pub fn visible_suggestions(&self) -> &[SuggestionCandidate] {
        self.popup.items()
    }

    pub fn suggestion_frame(&self) -> Option<usize> {
        self.popup_frame.filter(|_| self.popup.is_visible())
    }

    /// Pick a listed suggestion; writes it into the frame's link
    pub fn select_suggestion(&mut self, position: usize) -> Result<Option<String>, EditorError> {
        let Some(frame) = self.popup_frame else {
            return Ok(None);
        };
        let Some(value) = self.popup.select(position) else {
            return Ok(None);
        };

        self.popup_frame = None;
        self.apply(SwapPinMutation::SetFrameLink {
            index: frame,
            link: value.clone(),
        })?;
        Ok(Some(value))
    }

    fn close_popup(&mut self) {
        self.popup.hide();
        self.popup_frame = None;
    }

    /// Promote the draft into the collection draft (not the settings)
    ///
    /// Returns the merged swap pin as the collection draft now holds it.
    pub fn save(self) -> (EditResult, SwapPinPreset) {
        let (result, merged) = self.session.promote();
        (result, merged.clone())
    }

    pub fn cancel(self) -> EditResult {
        self.session.discard()
    }
}
