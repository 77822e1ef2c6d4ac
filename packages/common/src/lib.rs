//! Collaborators consumed by the ZoomMap editors.
//!
//! Each collaborator is a trait with a disk-backed implementation and an
//! in-memory one for tests.

pub mod corpus;
pub mod error;
pub mod filesystem;
pub mod icons;
pub mod persistence;
pub mod result;

pub use corpus::*;
pub use error::*;
pub use filesystem::*;
pub use icons::*;
pub use persistence::*;
pub use result::*;
