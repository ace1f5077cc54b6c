//! Chapter and event records for the community platform.
//!
//! This crate owns the data shapes shared between the API client and the
//! stub backend, the static showcase catalogue the browse views render
//! before a real backend exists, and the single-pass search and filter
//! operations those views perform. It is deliberately independent of any
//! transport or storage concern.
//!
//! # Example
//!
//! ```
//! use chapter_data::{catalogue, search_chapters, CountryFilter, filter_chapters_by_country};
//!
//! let chapters = catalogue::chapters();
//! let hits = search_chapters(&chapters, "berlin");
//! assert_eq!(hits.len(), 1);
//!
//! let india = filter_chapters_by_country(&chapters, &CountryFilter::only("India"));
//! assert!(india.iter().all(|c| c.country == "India"));
//! ```

mod browse;
pub mod catalogue;
mod records;

pub use browse::{
    CountryFilter, KindFilter, filter_chapters_by_country, filter_events_by_kind, search_chapters,
    search_events,
};
pub use records::{Chapter, Event, EventKind};
