//! Static showcase catalogue.
//!
//! The browse views render this fixed data set until a real backend serves
//! the same shapes. Reads are pure: every call builds a fresh collection,
//! so callers can never observe mutation through a shared reference.

use crate::records::{Chapter, Event, EventKind};

fn chapter(
    id: &str,
    name: &str,
    city: &str,
    country: &str,
    description: &str,
    members: u32,
    is_virtual: bool,
    tags: &[&str],
) -> Chapter {
    Chapter {
        id: id.to_owned(),
        name: name.to_owned(),
        city: city.to_owned(),
        country: country.to_owned(),
        description: description.to_owned(),
        members,
        is_virtual,
        tags: tags.iter().map(|tag| (*tag).to_owned()).collect(),
    }
}

/// The showcase chapters.
#[must_use]
pub fn chapters() -> Vec<Chapter> {
    vec![
        chapter(
            "1",
            "GDG New Delhi",
            "New Delhi",
            "India",
            "A community of developers passionate about Google technologies, \
             building innovative solutions together.",
            4520,
            false,
            &["Android", "Cloud", "AI/ML"],
        ),
        chapter(
            "2",
            "GDG San Francisco",
            "San Francisco",
            "USA",
            "Silicon Valley's premier developer community focused on \
             cutting-edge Google tech and open source.",
            8930,
            false,
            &["Web", "Cloud", "Firebase"],
        ),
        chapter(
            "3",
            "GDG Berlin",
            "Berlin",
            "Germany",
            "Europe's vibrant tech hub connecting developers through \
             workshops, talks, and hackathons.",
            3210,
            false,
            &["Flutter", "Kubernetes", "TensorFlow"],
        ),
        chapter(
            "4",
            "GDG Lagos",
            "Lagos",
            "Nigeria",
            "Africa's fastest-growing developer community empowering \
             builders across the continent.",
            6100,
            false,
            &["Android", "Firebase", "Web"],
        ),
        chapter(
            "5",
            "GDG Tokyo",
            "Tokyo",
            "Japan",
            "Bringing together Japan's brightest minds in technology to \
             learn, share, and innovate.",
            5670,
            false,
            &["AI/ML", "Cloud", "Angular"],
        ),
        chapter(
            "6",
            "GDG São Paulo",
            "São Paulo",
            "Brazil",
            "Latin America's largest developer community driving innovation \
             with Google technologies.",
            7800,
            true,
            &["Android", "Web", "Cloud"],
        ),
    ]
}

struct EventSeed<'a> {
    id: &'a str,
    title: &'a str,
    date: &'a str,
    time: &'a str,
    chapter_id: &'a str,
    chapter_name: &'a str,
    description: &'a str,
    kind: EventKind,
    is_virtual: bool,
    attendees: u32,
    capacity: u32,
    speakers: &'a [&'a str],
    tags: &'a [&'a str],
}

impl EventSeed<'_> {
    fn build(&self) -> Event {
        Event {
            id: self.id.to_owned(),
            title: self.title.to_owned(),
            date: self.date.to_owned(),
            time: self.time.to_owned(),
            chapter_id: self.chapter_id.to_owned(),
            chapter_name: self.chapter_name.to_owned(),
            description: self.description.to_owned(),
            kind: self.kind,
            is_virtual: self.is_virtual,
            attendees: self.attendees,
            capacity: self.capacity,
            speakers: self.speakers.iter().map(|s| (*s).to_owned()).collect(),
            tags: self.tags.iter().map(|t| (*t).to_owned()).collect(),
        }
    }
}

/// The showcase events.
#[must_use]
pub fn events() -> Vec<Event> {
    [
        EventSeed {
            id: "1",
            title: "DevFest 2025",
            date: "2025-03-15",
            time: "10:00 AM",
            chapter_id: "1",
            chapter_name: "GDG New Delhi",
            description: "The biggest developer festival featuring talks on \
                          AI, Cloud, and Web technologies.",
            kind: EventKind::Conference,
            is_virtual: false,
            attendees: 850,
            capacity: 1000,
            speakers: &["Sundar Pichai", "Jeff Dean"],
            tags: &["AI", "Cloud", "Web"],
        },
        EventSeed {
            id: "2",
            title: "Flutter Forward Workshop",
            date: "2025-03-22",
            time: "2:00 PM",
            chapter_id: "2",
            chapter_name: "GDG San Francisco",
            description: "Hands-on workshop building beautiful cross-platform \
                          apps with Flutter 4.",
            kind: EventKind::Workshop,
            is_virtual: false,
            attendees: 120,
            capacity: 150,
            speakers: &["Eric Seidel"],
            tags: &["Flutter", "Dart", "Mobile"],
        },
        EventSeed {
            id: "3",
            title: "AI/ML Study Jam",
            date: "2025-04-05",
            time: "11:00 AM",
            chapter_id: "3",
            chapter_name: "GDG Berlin",
            description: "Deep dive into machine learning with TensorFlow and \
                          Google AI APIs.",
            kind: EventKind::Meetup,
            is_virtual: true,
            attendees: 340,
            capacity: 500,
            speakers: &["Laurence Moroney"],
            tags: &["TensorFlow", "AI", "ML"],
        },
        EventSeed {
            id: "4",
            title: "Cloud Next Extended",
            date: "2025-04-12",
            time: "9:00 AM",
            chapter_id: "4",
            chapter_name: "GDG Lagos",
            description: "Watch party and hands-on labs for Google Cloud Next \
                          announcements.",
            kind: EventKind::Conference,
            is_virtual: false,
            attendees: 500,
            capacity: 600,
            speakers: &["Kelsey Hightower", "Priyanka Vergadia"],
            tags: &["GCP", "Kubernetes", "Cloud Run"],
        },
        EventSeed {
            id: "5",
            title: "Android Hackathon",
            date: "2025-04-20",
            time: "9:00 AM",
            chapter_id: "5",
            chapter_name: "GDG Tokyo",
            description: "48-hour hackathon building the next generation of \
                          Android applications.",
            kind: EventKind::Hackathon,
            is_virtual: false,
            attendees: 200,
            capacity: 250,
            speakers: &["Chet Haase", "Romain Guy"],
            tags: &["Android", "Kotlin", "Jetpack Compose"],
        },
        EventSeed {
            id: "6",
            title: "Web Performance Summit",
            date: "2025-05-01",
            time: "3:00 PM",
            chapter_id: "6",
            chapter_name: "GDG São Paulo",
            description: "Optimize your web apps with the latest Core Web \
                          Vitals strategies.",
            kind: EventKind::Meetup,
            is_virtual: true,
            attendees: 450,
            capacity: 1000,
            speakers: &["Addy Osmani"],
            tags: &["Web Vitals", "Performance", "Chrome"],
        },
    ]
    .iter()
    .map(EventSeed::build)
    .collect()
}
