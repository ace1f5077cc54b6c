//! Wire-facing records for chapters and events.
//!
//! Field names follow the platform's JSON conventions (camelCase keys, a
//! lowercase `type` discriminator for events), so the same types serve the
//! API client's decoded payloads and the static catalogue.

use serde::{Deserialize, Serialize};

/// A developer-group chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    /// Stable chapter identifier.
    pub id: String,
    /// Display name, e.g. "GDG Berlin".
    pub name: String,
    /// City the chapter meets in.
    pub city: String,
    /// Country the chapter belongs to; drives the browse country filter.
    pub country: String,
    /// Short blurb shown on chapter cards.
    pub description: String,
    /// Member head count.
    pub members: u32,
    /// Whether the chapter meets online only.
    #[serde(default)]
    pub is_virtual: bool,
    /// Technology tags shown on chapter cards.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Category of a community event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Regular recurring gathering.
    Meetup,
    /// Hands-on guided session.
    Workshop,
    /// Larger multi-track gathering.
    Conference,
    /// Timed build competition.
    Hackathon,
}

/// A scheduled community event hosted by a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Stable event identifier.
    pub id: String,
    /// Event title.
    pub title: String,
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,
    /// Human-readable start time, e.g. "10:00 AM".
    pub time: String,
    /// Identifier of the hosting chapter.
    pub chapter_id: String,
    /// Display name of the hosting chapter; searched alongside the title.
    pub chapter_name: String,
    /// Short blurb shown on event cards.
    pub description: String,
    /// Event category; drives the browse type filter.
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// Whether attendance is online only.
    #[serde(default)]
    pub is_virtual: bool,
    /// Current registration count.
    pub attendees: u32,
    /// Maximum registration count.
    pub capacity: u32,
    /// Announced speakers, if any.
    #[serde(default)]
    pub speakers: Vec<String>,
    /// Topic tags shown on event cards.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Event {
    /// Whether no further registrations fit.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.attendees >= self.capacity
    }

    /// Remaining registration slots, saturating at zero.
    #[must_use]
    pub const fn seats_left(&self) -> u32 {
        self.capacity.saturating_sub(self.attendees)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;
    use rstest::rstest;

    fn event(attendees: u32, capacity: u32) -> Event {
        Event {
            id: "1".to_owned(),
            title: "DevFest".to_owned(),
            date: "2025-03-15".to_owned(),
            time: "10:00 AM".to_owned(),
            chapter_id: "1".to_owned(),
            chapter_name: "GDG New Delhi".to_owned(),
            description: "Annual developer festival".to_owned(),
            kind: EventKind::Conference,
            is_virtual: false,
            attendees,
            capacity,
            speakers: vec![],
            tags: vec![],
        }
    }

    #[rstest]
    #[case(850, 1000, false, 150)]
    #[case(1000, 1000, true, 0)]
    #[case(1001, 1000, true, 0)]
    fn capacity_arithmetic(
        #[case] attendees: u32,
        #[case] capacity: u32,
        #[case] full: bool,
        #[case] left: u32,
    ) {
        let subject = event(attendees, capacity);
        assert_eq!(subject.is_full(), full);
        assert_eq!(subject.seats_left(), left);
    }

    #[test]
    fn event_serialises_with_wire_field_names() {
        let value = serde_json::to_value(event(850, 1000)).expect("event serialises");
        assert_eq!(value["chapterId"], "1");
        assert_eq!(value["chapterName"], "GDG New Delhi");
        assert_eq!(value["type"], "conference");
        assert_eq!(value["isVirtual"], false);
    }

    #[test]
    fn event_decodes_without_optional_fields() {
        let decoded: Event = serde_json::from_str(
            r#"{
                "id": "9",
                "title": "Study Jam",
                "date": "2025-04-05",
                "time": "11:00 AM",
                "chapterId": "3",
                "chapterName": "GDG Berlin",
                "description": "Hands-on ML",
                "type": "meetup",
                "attendees": 10,
                "capacity": 40
            }"#,
        )
        .expect("minimal event decodes");
        assert_eq!(decoded.kind, EventKind::Meetup);
        assert!(!decoded.is_virtual);
        assert!(decoded.speakers.is_empty());
    }
}
