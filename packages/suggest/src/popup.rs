//! # Suggestion Popup State
//!
//! Visibility of the suggestion list under a text input.
//!
//! Focus leaves the input before a click on a suggestion lands, so losing
//! focus only schedules a hide after a short grace period. Selecting a
//! suggestion inside that window wins: it applies the value, hides at once
//! and cancels the pending hide.
//!
//! Time is passed in by the caller, so the state machine stays synchronous.

use crate::{SuggestionCandidate, SuggestionIndex};
use std::time::{Duration, Instant};
use tracing::debug;

/// Grace period between focus loss and hiding the list
pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(150);

#[derive(Debug, Clone)]
pub struct SuggestionPopup {
    items: Vec<SuggestionCandidate>,
    visible: bool,
    hide_at: Option<Instant>,
    hide_delay: Duration,
}

impl SuggestionPopup {
    pub fn new() -> Self {
        Self::with_hide_delay(DEFAULT_HIDE_DELAY)
    }

    pub fn with_hide_delay(hide_delay: Duration) -> Self {
        Self {
            items: Vec::new(),
            visible: false,
            hide_at: None,
            hide_delay,
        }
    }

    /// Recompute the list for the input's current text
    pub fn on_input(&mut self, index: &SuggestionIndex, query: &str) {
        self.hide_at = None;
        self.items = index.matches(query).into_iter().cloned().collect();
        self.visible = !self.items.is_empty();
    }

    /// Input lost focus; hide once the grace period elapses
    pub fn on_focus_lost(&mut self, now: Instant) {
        if self.visible {
            self.hide_at = Some(now + self.hide_delay);
        }
    }

    /// Pick a visible suggestion and return the value to insert
    pub fn select(&mut self, position: usize) -> Option<String> {
        if !self.visible {
            return None;
        }
        let value = self.items.get(position)?.value.clone();
        debug!(value = %value, "Suggestion selected");
        self.hide();
        Some(value)
    }

    /// Apply a pending hide whose deadline has passed; returns true if it hid
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.hide();
                true
            }
            _ => false,
        }
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.hide_at = None;
        self.items.clear();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn hide_pending(&self) -> bool {
        self.hide_at.is_some()
    }

    /// Rows currently shown (empty when hidden)
    pub fn items(&self) -> &[SuggestionCandidate] {
        if self.visible {
            &self.items
        } else {
            &[]
        }
    }
}

impl Default for SuggestionPopup {
    fn default() -> Self {
        Self::new()
    }
}
