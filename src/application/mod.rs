//! Selection lifecycle and list filtering

pub mod fetcher;
pub mod search;
pub mod selection;

pub use fetcher::MetadataFetcher;
pub use search::SearchFilter;
pub use selection::{SelectionController, SelectionPhase, SelectionState};
