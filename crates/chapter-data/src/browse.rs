//! Browse operations: substring search and single-field filters.
//!
//! These mirror what the chapter and event list views do with the
//! catalogue: a case-insensitive substring scan over a couple of display
//! fields, combined with one select-box filter. All operations borrow
//! their input and return owned matches, so reads stay idempotent.

use crate::records::{Chapter, Event, EventKind};

/// Country selection for the chapter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryFilter {
    /// No country restriction (the "all" sentinel in the UI).
    All,
    /// Restrict to chapters of one country (exact match).
    Only(String),
}

impl CountryFilter {
    /// Restrict to the given country.
    pub fn only(country: impl Into<String>) -> Self {
        Self::Only(country.into())
    }

    fn matches(&self, chapter: &Chapter) -> bool {
        match self {
            Self::All => true,
            Self::Only(country) => chapter.country == *country,
        }
    }
}

/// Event category selection for the event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFilter {
    /// No category restriction.
    All,
    /// Restrict to one event category.
    Only(EventKind),
}

impl KindFilter {
    fn matches(self, event: &Event) -> bool {
        match self {
            Self::All => true,
            Self::Only(kind) => event.kind == kind,
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Chapters whose name or city contains `query`, case-insensitively.
///
/// An empty query matches every chapter.
#[must_use]
pub fn search_chapters(chapters: &[Chapter], query: &str) -> Vec<Chapter> {
    let needle = query.to_lowercase();
    chapters
        .iter()
        .filter(|chapter| {
            contains_ignore_case(&chapter.name, &needle)
                || contains_ignore_case(&chapter.city, &needle)
        })
        .cloned()
        .collect()
}

/// Chapters passing the country filter.
#[must_use]
pub fn filter_chapters_by_country(chapters: &[Chapter], filter: &CountryFilter) -> Vec<Chapter> {
    chapters
        .iter()
        .filter(|chapter| filter.matches(chapter))
        .cloned()
        .collect()
}

/// Events whose title or hosting chapter name contains `query`,
/// case-insensitively. An empty query matches every event.
#[must_use]
pub fn search_events(events: &[Event], query: &str) -> Vec<Event> {
    let needle = query.to_lowercase();
    events
        .iter()
        .filter(|event| {
            contains_ignore_case(&event.title, &needle)
                || contains_ignore_case(&event.chapter_name, &needle)
        })
        .cloned()
        .collect()
}

/// Events passing the category filter.
#[must_use]
pub fn filter_events_by_kind(events: &[Event], filter: KindFilter) -> Vec<Event> {
    events
        .iter()
        .filter(|event| filter.matches(event))
        .cloned()
        .collect()
}
