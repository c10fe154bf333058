pub mod file;
pub mod ingest;

pub use file::{JsonFileFetcher, StaticFetcher};
pub use ingest::{normalize, summarize_text, RawEntry};

pub const DEFAULT_NUM_ARTICLES: usize = 10;

pub mod prelude {
    pub use super::file::{JsonFileFetcher, StaticFetcher};
    pub use super::ingest::RawEntry;
    pub use ns_core::{Article, Error, Fetcher, Result};
}
