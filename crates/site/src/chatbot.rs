//! Scripted FAQ chatbot.
//!
//! A fixed decision table of keyword categories checked as lowercase
//! substrings, in order, falling through to a default reply. No model, no
//! network. [`reply_for`] is a pure function so the table is trivially
//! testable.

use bevy::prelude::*;

// =============================================================================
// Decision table
// =============================================================================

const GREETING_REPLY: &str =
    "Hi there! Ask me about events, joining, jobs, or how to reach the organizers.";

/// Keyword categories checked top to bottom; first hit wins.
const KEYWORD_REPLIES: &[(&[&str], &str)] = &[
    (&["hello", "hey"], GREETING_REPLY),
    (
        &["event", "meetup", "schedule", "when", "talk"],
        "We meet twice a month — the Events page has the full lineup, and Lightning Talks Night is usually the third Thursday.",
    ),
    (
        &["where", "location", "venue", "address"],
        "Most evenings we're at Foundry Hall on Main St., workshops run at Hatch Coworking. Each event lists its venue.",
    ),
    (
        &["join", "member", "sign up", "signup", "register"],
        "Everyone's welcome — just show up! If you'd like the newsletter, drop your details on the Contact page.",
    ),
    (
        &["job", "hiring", "career", "recruit"],
        "Local companies post openings on our Jobs page. Want to list one? Use the contact form and mention the role.",
    ),
    (
        &["sponsor", "partner", "support us"],
        "Sponsors keep the pizza coming! Reach out through the contact form and our co-organizer will get back to you.",
    ),
    (
        &["contact", "email", "reach", "organizer"],
        "The quickest way is the form on the Contact page — it goes straight to the organizers.",
    ),
    (
        &["thank"],
        "Anytime! See you at the next meetup.",
    ),
    (
        &["bye", "goodbye", "see you"],
        "Bye! Hope to see you at an event soon.",
    ),
];

/// Reply when no keyword category matches.
pub const FALLBACK_REPLY: &str =
    "I'm a simple bot — try asking about events, the venue, joining, jobs, or sponsoring.";

/// Pick the scripted reply for a user message.
pub fn reply_for(input: &str) -> &'static str {
    let text = input.to_lowercase();
    // "hi" is too short for substring matching ("this", "sushi"), so it is
    // checked as a standalone word.
    if text
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| word == "hi")
    {
        return GREETING_REPLY;
    }
    for (keywords, reply) in KEYWORD_REPLIES {
        if keywords.iter().any(|keyword| text.contains(keyword)) {
            return reply;
        }
    }
    FALLBACK_REPLY
}

// =============================================================================
// Transcript
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAuthor {
    User,
    Bot,
}

#[derive(Debug, Clone)]
pub struct ChatLine {
    pub author: ChatAuthor,
    pub text: String,
}

/// The running conversation. Seeded with a bot greeting.
#[derive(Resource)]
pub struct ChatTranscript {
    lines: Vec<ChatLine>,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self {
            lines: vec![ChatLine {
                author: ChatAuthor::Bot,
                text: "Hi! I'm the DevMeet helper bot. What would you like to know?".to_string(),
            }],
        }
    }
}

impl ChatTranscript {
    /// Append the user's message and the scripted reply.
    pub fn say(&mut self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }
        self.lines.push(ChatLine {
            author: ChatAuthor::User,
            text: trimmed.to_string(),
        });
        self.lines.push(ChatLine {
            author: ChatAuthor::Bot,
            text: reply_for(trimmed).to_string(),
        });
    }

    pub fn lines(&self) -> &[ChatLine] {
        &self.lines
    }
}

pub struct ChatbotPlugin;

impl Plugin for ChatbotPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ChatTranscript>();
    }
}

// =============================================================================
// Tests
// =============================================================================
