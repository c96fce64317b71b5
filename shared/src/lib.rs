pub mod error;
pub mod models;
pub mod counter;

pub use error::{CounterError, ErrorResponse, Result, UNAVAILABLE_PREFIX};
pub use models::*;
pub use counter::{
    CacheMode, CounterLoader, Diagnostics, Fetch, FetchRequest, HttpResponse, LoadOutcome, Page,
    DEFAULT_CONFIG_PATH, DEFAULT_COUNT_ELEMENT_ID,
};
