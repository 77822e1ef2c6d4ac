//! Single-fire delivery of an editing session's result

use crate::EditorError;
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

/// Result notification handed to whoever opened the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditResult {
    pub updated: bool,
    pub deleted: bool,
}

impl EditResult {
    pub const COMMITTED: Self = Self {
        updated: true,
        deleted: false,
    };

    pub const DISCARDED: Self = Self {
        updated: false,
        deleted: false,
    };

    pub const DELETED: Self = Self {
        updated: false,
        deleted: true,
    };
}

/// The three terminal actions of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Committed,
    Discarded,
    Deleted,
}

impl From<SessionOutcome> for EditResult {
    fn from(outcome: SessionOutcome) -> Self {
        match outcome {
            SessionOutcome::Committed => EditResult::COMMITTED,
            SessionOutcome::Discarded => EditResult::DISCARDED,
            SessionOutcome::Deleted => EditResult::DELETED,
        }
    }
}

/// Receiving end of a session's result
pub type ResultReceiver = oneshot::Receiver<EditResult>;

/// Sending end; fires at most once
#[derive(Debug)]
pub struct ResultSignal {
    tx: Option<oneshot::Sender<EditResult>>,
}

impl ResultSignal {
    pub fn channel() -> (Self, ResultReceiver) {
        let (tx, rx) = oneshot::channel();
        (Self { tx: Some(tx) }, rx)
    }

    /// Deliver the result; a second call is an error
    ///
    /// A dropped receiver is not an error: the caller stopped listening.
    pub fn fire(&mut self, result: EditResult) -> Result<(), EditorError> {
        let tx = self.tx.take().ok_or(EditorError::SessionFinished)?;
        let _ = tx.send(result);
        Ok(())
    }

    pub fn has_fired(&self) -> bool {
        self.tx.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_exactly_once() {
        let (mut signal, mut rx) = ResultSignal::channel();
        assert!(!signal.has_fired());

        signal.fire(EditResult::COMMITTED).unwrap();
        assert!(signal.has_fired());
        assert!(matches!(
            signal.fire(EditResult::DISCARDED),
            Err(EditorError::SessionFinished)
        ));

        assert_eq!(rx.try_recv().unwrap(), EditResult::COMMITTED);
    }

    #[test]
    fn test_dropped_receiver_is_tolerated() {
        let (mut signal, rx) = ResultSignal::channel();
        drop(rx);
        assert!(signal.fire(EditResult::DELETED).is_ok());
    }

    #[test]
    fn test_outcome_shapes() {
        assert_eq!(
            EditResult::from(SessionOutcome::Committed),
            EditResult { updated: true, deleted: false }
        );
        assert_eq!(
            EditResult::from(SessionOutcome::Deleted),
            EditResult { updated: false, deleted: true }
        );
        assert_eq!(
            serde_json::to_string(&EditResult::DISCARDED).unwrap(),
            r#"{"updated":false,"deleted":false}"#
        );
    }

    #[tokio::test]
    async fn test_receiver_can_be_awaited() {
        let (mut signal, rx) = ResultSignal::channel();
        signal.fire(EditResult::DELETED).unwrap();
        assert_eq!(rx.await.unwrap(), EditResult::DELETED);
    }
}
