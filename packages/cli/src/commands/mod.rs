pub mod collections;
pub mod edit;
pub mod suggest;

pub use collections::{collections, CollectionsArgs};
pub use edit::{edit, EditArgs};
pub use suggest::{suggest, SuggestArgs};
