//! Catalog engine: HTTP fetch strategies, aggregation and client-side storage.
mod aggregate;
mod catalog;
mod engine;
mod fetch;
mod normalize;
mod persist;
mod store;
mod types;

pub use aggregate::{dedupe_by_slug, Aggregator};
pub use catalog::{load_catalog, FetchPlan};
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, PageFetcher, ReqwestPageFetcher, DEFAULT_BASE_URL};
pub use normalize::{normalize_body, normalize_value};
pub use persist::{ensure_data_dir, AtomicFileWriter, PersistError};
pub use store::{
    is_valid_key, FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, StoreError,
};
pub use types::{
    Catalog, EngineEvent, FailureKind, FetchError, GameRecord, LoadReport, PageQuery, Strategy,
};
