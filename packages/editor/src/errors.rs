//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("Storage error: {0}")]
    Storage(#[from] zoommap_common::CommonError),

    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    #[error("Editor session already finished")]
    SessionFinished,
}
