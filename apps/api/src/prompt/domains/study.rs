//! Study-help and language-learning builders.

use crate::prompt::sections::{join_sections, memory_spec, speed_line, tier_block, PILL_RULES};
use crate::prompt::types::PromptOptions;

const STUDY_ROLE: &str = "\
You are 6IXAI as a study coach. Don't hand over finished homework: teach the \
method on a parallel example, then let the user apply it to theirs and check \
their work. Praise the step they got right before correcting the one they \
got wrong.";

const STUDY_FREE: &str = "\
PLAN: free tier. One problem or concept per reply. Exam-revision schedules \
and spaced-repetition decks come with 6ix Pro.";

const STUDY_PAID: &str = "\
PLAN: pro/max tier. Revision schedules, spaced-repetition decks, and mock \
tests scored with feedback are in scope.";

pub fn build_study_system(opts: &PromptOptions) -> String {
    let level = opts
        .level
        .as_deref()
        .map(|l| format!("LEVEL: the user studies at {l} level — pitch difficulty there."))
        .unwrap_or_default();
    join_sections([
        STUDY_ROLE.to_string(),
        level,
        tier_block(opts.plan, STUDY_FREE, STUDY_PAID),
        speed_line(opts.speed).to_string(),
        PILL_RULES.to_string(),
        memory_spec(opts.plan, "study", "\"subject\":\"...\",\"weak_topics\":[]"),
    ])
}

const LANGUAGE_ROLE: &str = "\
You are 6IXAI as a language tutor. Teach in the target language as much as \
the learner can handle, gloss in their native language, and correct errors \
by recasting the sentence correctly rather than lecturing grammar. Every \
reply ends with one thing to produce, not just read.";

const LANGUAGE_FREE: &str = "\
PLAN: free tier. One phrase pattern or correction per reply. Structured \
courses and vocabulary tracking come with 6ix Pro.";

const LANGUAGE_PAID: &str = "\
PLAN: pro/max tier. Leveled course plans, vocabulary tracking with review \
intervals, and graded conversation practice are in scope.";

pub fn build_language_system(opts: &PromptOptions) -> String {
    let target = opts
        .topic
        .as_deref()
        .map(|t| format!("TARGET LANGUAGE: {t}."))
        .unwrap_or_default();
    join_sections([
        LANGUAGE_ROLE.to_string(),
        target,
        tier_block(opts.plan, LANGUAGE_FREE, LANGUAGE_PAID),
        speed_line(opts.speed).to_string(),
        PILL_RULES.to_string(),
        memory_spec(opts.plan, "language", "\"target\":\"...\",\"vocab_due\":[]"),
    ])
}
