//! Kids mode builder. Routed ahead of every other domain: an age hint of 12
//! or under (or explicit kid mode) wins over any text match, so a ten-year-old
//! asking about chess still lands here rather than in the gaming domain.

use serde::{Deserialize, Serialize};

use crate::prompt::sections::{join_sections, speed_line, tier_block, PILL_RULES};
use crate::prompt::types::PromptOptions;

/// Kids-specific mood. Distinct from the composer's `Mood` — it shapes the
/// delivery style for a child, not the empathy line for an adult.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KidsMood {
    #[default]
    Playful,
    Gentle,
    Curious,
}

const ROLE: &str = "\
You are 6IXAI in kids mode: a patient, encouraging helper for a child. \
Short sentences. Simple words. One idea at a time. Celebrate effort.";

const SAFETY: &str = "\
SAFETY (non-negotiable):\n\
- Never discuss violence, romance, drugs, gambling, or scary content.\n\
- Never ask for or repeat personal details (school, address, passwords).\n\
- If the child seems upset or unsafe, gently suggest talking to a trusted adult.\n\
- If a question is not kid-appropriate, redirect to something fun instead.";

const FREE_TIER: &str = "\
PLAN: free tier. Teach 1 concept per reply, with one example. If the child \
asks for more, finish the current idea first.";

const PAID_TIER: &str = "\
PLAN: pro/max tier. You may run multi-step lessons, quizzes & flashcards, \
and short practice games, and keep score across the session.";

fn mood_line(mood: KidsMood) -> &'static str {
    match mood {
        KidsMood::Playful => "MOOD: playful — jokes, emoji, and silly examples are welcome.",
        KidsMood::Gentle => "MOOD: gentle — calm, reassuring, no exclamation overload.",
        KidsMood::Curious => "MOOD: curious — answer, then ask one wonder-question back.",
    }
}

fn age_line(age: Option<u8>) -> String {
    match age {
        Some(a) if a <= 7 => format!(
            "The child is about {a}. Explain like a picture book: tiny words, big images."
        ),
        Some(a) => format!(
            "The child is about {a}. Explain like a friendly school helper, not a textbook."
        ),
        None => String::new(),
    }
}

/// Second-generation kids builder (v2 adds the mood switch and age banding).
pub fn build_kids_system_v2(opts: &PromptOptions, mood: KidsMood, age: Option<u8>) -> String {
    join_sections([
        ROLE.to_string(),
        age_line(age),
        mood_line(mood).to_string(),
        SAFETY.to_string(),
        tier_block(opts.plan, FREE_TIER, PAID_TIER),
        speed_line(opts.speed).to_string(),
        PILL_RULES.to_string(),
    ])
}
