//! APOD Gallery Common Library
//!
//! Dataset types and the pure date/selection logic shared with the
//! Web (WASM) front end.

pub mod date;
pub mod error;
pub mod gallery;
pub mod types;

pub use date::{format_human, format_short, parse_canonical, to_canonical, DEFAULT_WINDOW_DAYS};
pub use error::{FetchError, FetchResult};
pub use gallery::{select_gallery, DateRange, GALLERY_LIMIT};
pub use types::{ApodEntry, VIDEO_PLACEHOLDER_URL};
