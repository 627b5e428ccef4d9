//! Content catalogs: events, jobs, members, leaders.
//!
//! Immutable read-only configuration injected as resources at startup so
//! the timing/carousel core stays testable without any content attached.
//! Nothing here is persisted or mutated after insertion.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// =============================================================================
// Types
// =============================================================================

/// An upcoming meetup event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetupEvent {
    pub title: String,
    /// Human-readable date, e.g. "Thu, Sep 18".
    pub date: String,
    pub venue: String,
    pub blurb: String,
    pub tags: Vec<String>,
}

/// A community job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub contact: String,
}

/// A member shown in the community carousel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub role: String,
    pub company: String,
    pub blurb: String,
}

/// A group leader shown on the About page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leader {
    pub name: String,
    pub title: String,
    pub focus: String,
}

// =============================================================================
// Resources
// =============================================================================

#[derive(Resource, Debug, Clone, Default)]
pub struct EventCatalog {
    pub events: Vec<MeetupEvent>,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct JobBoard {
    pub postings: Vec<JobPosting>,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct MemberRoster {
    pub members: Vec<Member>,
    pub leaders: Vec<Leader>,
}

// =============================================================================
// Built-in content
// =============================================================================

fn event(title: &str, date: &str, venue: &str, blurb: &str, tags: &[&str]) -> MeetupEvent {
    MeetupEvent {
        title: title.to_string(),
        date: date.to_string(),
        venue: venue.to_string(),
        blurb: blurb.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn default_events() -> EventCatalog {
    EventCatalog {
        events: vec![
            event(
                "Lightning Talks Night",
                "Thu, Sep 18",
                "Foundry Hall, Main St.",
                "Six five-minute talks from the community. Pizza from 18:30.",
                &["talks", "social"],
            ),
            event(
                "Hands-on: Profiling Production Services",
                "Wed, Oct 1",
                "Hatch Coworking, Room B",
                "Bring a laptop — we profile a real service together.",
                &["workshop"],
            ),
            event(
                "Career Panel: Senior and Beyond",
                "Thu, Oct 16",
                "Foundry Hall, Main St.",
                "Four local engineering leaders take questions on growth paths.",
                &["panel", "careers"],
            ),
            event(
                "Winter Hack Day",
                "Sat, Nov 8",
                "Hatch Coworking, Ground Floor",
                "A full day of pairing on community projects. All levels welcome.",
                &["hackday", "social"],
            ),
        ],
    }
}

pub fn default_jobs() -> JobBoard {
    JobBoard {
        postings: vec![
            JobPosting {
                title: "Backend Engineer".to_string(),
                company: "Harbor Analytics".to_string(),
                location: "Downtown / hybrid".to_string(),
                contact: "jobs@harboranalytics.example".to_string(),
            },
            JobPosting {
                title: "Platform Engineer".to_string(),
                company: "Northside Robotics".to_string(),
                location: "On-site".to_string(),
                contact: "careers@northsiderobotics.example".to_string(),
            },
            JobPosting {
                title: "Engineering Manager".to_string(),
                company: "Cedar Health".to_string(),
                location: "Remote-friendly".to_string(),
                contact: "hiring@cedarhealth.example".to_string(),
            },
        ],
    }
}

pub fn default_roster() -> MemberRoster {
    let member = |name: &str, role: &str, company: &str, blurb: &str| Member {
        name: name.to_string(),
        role: role.to_string(),
        company: company.to_string(),
        blurb: blurb.to_string(),
    };
    let leader = |name: &str, title: &str, focus: &str| Leader {
        name: name.to_string(),
        title: title.to_string(),
        focus: focus.to_string(),
    };
    MemberRoster {
        members: vec![
            member("Priya N.", "Staff Engineer", "Harbor Analytics", "Organizes the mentoring circle."),
            member("Tomas V.", "SRE", "Cedar Health", "Runs the on-call war-stories sessions."),
            member("Dana K.", "Frontend Lead", "Northside Robotics", "Lightning-talk regular."),
            member("Ahmed S.", "Data Engineer", "Independent", "Hosts the hack-day project board."),
            member("Lena M.", "Security Engineer", "Harbor Analytics", "Started the CTF study group."),
            member("Jun P.", "Mobile Developer", "Freelance", "Photographs every meetup."),
            member("Olga R.", "Backend Engineer", "Cedar Health", "First-timer welcome desk."),
            member("Marcus T.", "Engineering Manager", "Northside Robotics", "Career-panel host."),
        ],
        leaders: vec![
            leader("Sam Whitfield", "Founder & Organizer", "Program and speaker lineup"),
            leader("Ines Duarte", "Co-organizer", "Sponsorships and venues"),
            leader("Ray Chen", "Community Lead", "Newcomer onboarding"),
            leader("Mia Kowalski", "Operations", "Logistics and the job board"),
        ],
    }
}

// =============================================================================
// Plugin
// =============================================================================

pub struct CatalogPlugin;

impl Plugin for CatalogPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(default_events());
        app.insert_resource(default_jobs());
        app.insert_resource(default_roster());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalogs_nonempty() {
        assert!(!default_events().events.is_empty());
        assert!(!default_jobs().postings.is_empty());
        let roster = default_roster();
        assert!(!roster.members.is_empty());
        assert!(!roster.leaders.is_empty());
    }

    #[test]
    fn test_events_carry_tags() {
        let catalog = default_events();
        assert!(catalog.events.iter().all(|e| !e.tags.is_empty()));
    }
}
