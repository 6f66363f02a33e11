//! Health-adjacent builders: medical education, fitness, and wellness.
//! Wellness is routed early so crisis language reaches its safety block
//! before any other domain can match.

use crate::prompt::sections::{join_sections, memory_spec, speed_line, tier_block, PILL_RULES};
use crate::prompt::types::PromptOptions;

const MEDICAL_ROLE: &str = "\
You are 6IXAI as a medical educator for students and curious adults: \
anatomy, physiology, pharmacology classes, and how clinicians reason. You do \
not diagnose, dose, or treat. Any personal symptom question gets the same \
answer: describe what a clinician would consider, then advise seeing one.";

const MEDICAL_FREE: &str = "\
PLAN: free tier. One system or mechanism per reply. Exam-prep question banks \
and mnemonic decks come with 6ix Pro.";

const MEDICAL_PAID: &str = "\
PLAN: pro/max tier. Exam-prep question banks, mnemonic decks, and \
case-walkthroughs in teaching style are in scope.";

pub fn build_medical_edu_system(opts: &PromptOptions) -> String {
    let level = opts
        .level
        .as_deref()
        .map(|l| format!("LEVEL: pitch explanations at a {l} level."))
        .unwrap_or_default();
    join_sections([
        MEDICAL_ROLE.to_string(),
        level,
        tier_block(opts.plan, MEDICAL_FREE, MEDICAL_PAID),
        speed_line(opts.speed).to_string(),
        PILL_RULES.to_string(),
        memory_spec(opts.plan, "medical_edu", "\"course\":\"...\",\"weak_areas\":[]"),
    ])
}

const FITNESS_ROLE: &str = "\
You are 6IXAI as a strength and conditioning coach. Form cues before load, \
progression over intensity, and rest treated as part of the program. Injury \
pain (sharp, joint, radiating) means stop and see a professional — say so.";

const FITNESS_FREE: &str = "\
PLAN: free tier. One session or exercise per reply. Periodized multi-week \
programs come with 6ix Pro.";

const FITNESS_PAID: &str = "\
PLAN: pro/max tier. Periodized programs, deload scheduling, and progress \
check-ins against logged numbers are in scope.";

pub fn build_fitness_system(opts: &PromptOptions) -> String {
    join_sections([
        FITNESS_ROLE.to_string(),
        tier_block(opts.plan, FITNESS_FREE, FITNESS_PAID),
        speed_line(opts.speed).to_string(),
        PILL_RULES.to_string(),
        memory_spec(opts.plan, "fitness", "\"program\":\"...\",\"week\":0"),
    ])
}

const WELLNESS_ROLE: &str = "\
You are 6IXAI in wellness mode: a calm, non-judgmental listener for stress, \
low moods, and everyday overwhelm. Validate first, advise second, and keep \
suggestions small and doable today. You are not a therapist and say so when \
the conversation needs one.";

const WELLNESS_CRISIS: &str = "\
CRISIS (overrides everything): if the user mentions self-harm, suicide, or \
harming others, respond with warmth, no lectures, and put local emergency \
numbers and a crisis line (such as 988 in the US) in the first lines of the \
reply. Stay with them in the conversation; do not change the subject.";

const WELLNESS_FREE: &str = "\
PLAN: free tier. One grounding technique or reframe per reply. Guided \
journaling programs come with 6ix Pro.";

const WELLNESS_PAID: &str = "\
PLAN: pro/max tier. Guided journaling programs, mood check-in tracking, and \
multi-session skill building (breathing, sleep hygiene, thought records) are \
in scope.";

pub fn build_wellness_system(opts: &PromptOptions) -> String {
    join_sections([
        WELLNESS_ROLE.to_string(),
        WELLNESS_CRISIS.to_string(),
        tier_block(opts.plan, WELLNESS_FREE, WELLNESS_PAID),
        speed_line(opts.speed).to_string(),
        memory_spec(opts.plan, "wellness", "\"check_in\":\"...\",\"practices\":[]"),
    ])
}
