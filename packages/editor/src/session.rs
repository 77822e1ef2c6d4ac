//! # Edit Session Management
//!
//! An [`EditSession`] owns the working copy of one entity for the lifetime of
//! a dialog. All mutation goes to the draft; the authoritative entity is only
//! touched by [`EditSession::commit`].
//!
//! Terminal actions consume the session, so at most one of commit, discard,
//! or delete can run. A session dropped without one reports a discard. The
//! result channel fires exactly once either way.
//!
//! ## Nesting
//!
//! [`EditSession::open_child`] stages a sub-entity out of the *draft*, not out
//! of the authoritative entity. Committing the child writes into the parent's
//! draft and nowhere else; only the outermost commit reaches the
//! authoritative entity. Each level promotes exactly one level up:
//!
//! ```text
//! authoritative ──stage──▶ parent draft ──stage──▶ child draft
//!       ▲                      ▲    │                  │
//!       └──── parent commit ───┘    └── child commit ──┘
//! ```

use crate::signal::{EditResult, ResultReceiver, ResultSignal, SessionOutcome};
use crate::stage::Stage;
use tracing::{debug, info, warn};

/// Working-copy session over one entity
pub struct EditSession<T: Stage> {
    /// Label of the staged entity, for logs
    label: String,

    /// Isolated working copy
    draft: T::Draft,

    signal: ResultSignal,
}

impl<T: Stage> EditSession<T> {
    /// Stage `original` and open a session over the copy
    pub fn open(original: &T) -> (Self, ResultReceiver) {
        let (signal, rx) = ResultSignal::channel();
        let label = original.label();
        debug!(entity = %label, "Staged working copy");

        let session = Self {
            label,
            draft: original.stage(),
            signal,
        };
        (session, rx)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn draft(&self) -> &T::Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut T::Draft {
        &mut self.draft
    }

    /// Write the draft back onto `original` and report `{updated: true}`
    pub fn commit(mut self, original: &mut T) -> EditResult {
        original.commit_draft(&self.draft);
        self.finish(SessionOutcome::Committed)
    }

    /// Leave `original` untouched and report `{updated: false}`
    pub fn discard(mut self) -> EditResult {
        self.finish(SessionOutcome::Discarded)
    }

    /// Leave `original` untouched and report `{deleted: true}`
    ///
    /// Removing the entity from its owning list is the caller's job.
    pub fn delete(mut self) -> EditResult {
        self.finish(SessionOutcome::Deleted)
    }

    /// Open a nested session over a sub-entity of this session's draft
    ///
    /// Returns `None` when `select` finds no sub-entity.
    pub fn open_child<'s, C, F>(&'s mut self, select: F) -> Option<(NestedSession<'s, C>, ResultReceiver)>
    where
        C: Stage,
        F: FnOnce(&'s mut T::Draft) -> Option<&'s mut C>,
    {
        let target = select(&mut self.draft)?;
        Some(NestedSession::open(target))
    }

    fn finish(&mut self, outcome: SessionOutcome) -> EditResult {
        let result = EditResult::from(outcome);
        match self.signal.fire(result) {
            Ok(()) => info!(entity = %self.label, ?outcome, "Edit session finished"),
            Err(e) => warn!(entity = %self.label, error = %e, "Edit session finished twice"),
        }
        result
    }
}

impl<T: Stage> Drop for EditSession<T> {
    fn drop(&mut self) {
        if !self.signal.has_fired() {
            debug!(entity = %self.label, "Edit session dropped without a terminal action");
            let _ = self.signal.fire(EditResult::DISCARDED);
        }
    }
}

/// Session whose commit target lives inside a parent session's draft
pub struct NestedSession<'p, C: Stage> {
    target: &'p mut C,
    session: EditSession<C>,
}

impl<'p, C: Stage> NestedSession<'p, C> {
    /// Stage `target` as it currently is in the parent's draft
    pub fn open(target: &'p mut C) -> (Self, ResultReceiver) {
        let (session, rx) = EditSession::open(&*target);
        (Self { target, session }, rx)
    }

    pub fn draft(&self) -> &C::Draft {
        self.session.draft()
    }

    pub fn draft_mut(&mut self) -> &mut C::Draft {
        self.session.draft_mut()
    }

    /// Promote the draft one level up, into the parent's draft
    pub fn commit(self) -> EditResult {
        self.promote().0
    }

    /// Commit and hand back the merged sub-entity as it now sits in the
    /// parent's draft
    pub fn promote(self) -> (EditResult, &'p C) {
        let NestedSession { target, session } = self;
        let result = session.commit(target);
        (result, target)
    }

    pub fn discard(self) -> EditResult {
        self.session.discard()
    }

    pub fn open_child<'s, G, F>(&'s mut self, select: F) -> Option<(NestedSession<'s, G>, ResultReceiver)>
    where
        G: Stage,
        F: FnOnce(&'s mut C::Draft) -> Option<&'s mut G>,
    {
        self.session.open_child(select)
    }
}
