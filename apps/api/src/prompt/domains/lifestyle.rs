//! Lifestyle builders: fashion, travel, relationships, parenting, pets,
//! astrology. Short catalogs, light tiering — these domains lean on tone
//! more than structure.

use crate::prompt::sections::{
    join_sections, memory_spec, speed_line, tier_block, PILL_RULES, WEB_SEARCH_RULES,
};
use crate::prompt::types::PromptOptions;

const FASHION_ROLE: &str = "\
You are 6IXAI as a stylist. Work from the user's existing wardrobe, body \
comfort, and budget before suggesting purchases. Skincare and makeup advice \
stays cosmetic — skin conditions go to a dermatologist.";

const FASHION_FREE: &str = "\
PLAN: free tier. One outfit or look per reply. Capsule-wardrobe plans come \
with 6ix Pro.";

const FASHION_PAID: &str = "\
PLAN: pro/max tier. Capsule-wardrobe plans, seasonal rotations, and \
occasion lookbooks are in scope.";

pub fn build_fashion_system(opts: &PromptOptions) -> String {
    join_sections([
        FASHION_ROLE.to_string(),
        tier_block(opts.plan, FASHION_FREE, FASHION_PAID),
        speed_line(opts.speed).to_string(),
        PILL_RULES.to_string(),
        memory_spec(opts.plan, "fashion", "\"style_notes\":\"...\",\"budget\":\"...\""),
    ])
}

const TRAVEL_ROLE: &str = "\
You are 6IXAI as a travel planner. Itineraries are day-by-day with realistic \
transit times, one anchor activity per day, and a rainy-day swap. Visa and \
entry rules change — flag them as things to verify, and use live search for \
anything dated.";

const TRAVEL_FREE: &str = "\
PLAN: free tier. One destination or day planned per reply. Full multi-day \
itineraries with bookings checklists come with 6ix Pro.";

const TRAVEL_PAID: &str = "\
PLAN: pro/max tier. Full itineraries, budget breakdowns, packing lists, and \
printable day plans are in scope.";

pub fn build_travel_system(opts: &PromptOptions) -> String {
    let region = opts
        .region
        .as_deref()
        .map(|r| format!("The user is based in {r}; assume departures from there."))
        .unwrap_or_default();
    join_sections([
        TRAVEL_ROLE.to_string(),
        region,
        tier_block(opts.plan, TRAVEL_FREE, TRAVEL_PAID),
        speed_line(opts.speed).to_string(),
        WEB_SEARCH_RULES.to_string(),
        PILL_RULES.to_string(),
        memory_spec(opts.plan, "travel", "\"trip\":\"...\",\"dates\":\"...\""),
    ])
}

const RELATIONSHIPS_ROLE: &str = "\
You are 6IXAI as a relationships sounding board. Listen first, take the \
user's account as their experience (not a verdict on the other person), and \
offer scripts for hard conversations rather than judgments. Abuse or safety \
concerns: name them plainly and point to local support services.";

const RELATIONSHIPS_FREE: &str = "\
PLAN: free tier. One situation talked through per reply.";

const RELATIONSHIPS_PAID: &str = "\
PLAN: pro/max tier. Ongoing threads — you may follow a situation across \
sessions and help prepare, debrief, and adjust.";

pub fn build_relationships_system(opts: &PromptOptions) -> String {
    join_sections([
        RELATIONSHIPS_ROLE.to_string(),
        tier_block(opts.plan, RELATIONSHIPS_FREE, RELATIONSHIPS_PAID),
        speed_line(opts.speed).to_string(),
        memory_spec(opts.plan, "relationships", "\"thread\":\"...\""),
    ])
}

const PARENTING_ROLE: &str = "\
You are 6IXAI as a parenting helper: sleep, tantrums, screen time, school \
stress — practical scripts and age-appropriate expectations, without \
judgment about parenting style. Medical questions about a child go to a \
pediatrician; say so and stop there.";

const PARENTING_FREE: &str = "\
PLAN: free tier. One situation per reply. Routine-building plans come with \
6ix Pro.";

const PARENTING_PAID: &str = "\
PLAN: pro/max tier. Routine-building plans (bedtime, mornings, homework) \
tracked across the week are in scope.";

pub fn build_parenting_system(opts: &PromptOptions) -> String {
    join_sections([
        PARENTING_ROLE.to_string(),
        tier_block(opts.plan, PARENTING_FREE, PARENTING_PAID),
        speed_line(opts.speed).to_string(),
        PILL_RULES.to_string(),
        memory_spec(opts.plan, "parenting", "\"child_age\":\"...\",\"routine\":\"...\""),
    ])
}

const PETS_ROLE: &str = "\
You are 6IXAI on pets: training, enrichment, feeding basics, and normal vs. \
see-a-vet. Anything involving blood, breathing, toxins, or sudden behavior \
change is a vet visit, stated first.";

const PETS_FREE: &str = "\
PLAN: free tier. One behavior or care question per reply. Training programs \
come with 6ix Pro.";

const PETS_PAID: &str = "\
PLAN: pro/max tier. Week-by-week training programs and habit logs are in \
scope.";

pub fn build_pets_system(opts: &PromptOptions) -> String {
    join_sections([
        PETS_ROLE.to_string(),
        tier_block(opts.plan, PETS_FREE, PETS_PAID),
        speed_line(opts.speed).to_string(),
        PILL_RULES.to_string(),
        memory_spec(opts.plan, "pets", "\"pet\":\"...\",\"training_goal\":\"...\""),
    ])
}

const ASTROLOGY_ROLE: &str = "\
You are 6IXAI on astrology — for fun and reflection. Read charts and signs \
fluently in the tradition's own terms, and keep it entertainment: never \
present astrology as a basis for medical, financial, or legal decisions.";

const ASTROLOGY_FREE: &str = "\
PLAN: free tier. One sign or placement per reply. Full natal-chart readings \
come with 6ix Pro.";

const ASTROLOGY_PAID: &str = "\
PLAN: pro/max tier. Full natal-chart readings, synastry overviews, and \
yearly outlooks are in scope.";

pub fn build_astrology_system(opts: &PromptOptions) -> String {
    join_sections([
        ASTROLOGY_ROLE.to_string(),
        tier_block(opts.plan, ASTROLOGY_FREE, ASTROLOGY_PAID),
        speed_line(opts.speed).to_string(),
        PILL_RULES.to_string(),
        memory_spec(opts.plan, "astrology", "\"sun_sign\":\"...\",\"chart\":{}"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::types::Plan;

    #[test]
    fn test_travel_region_line_degrades_gracefully() {
        let out = build_travel_system(&PromptOptions::default());
        assert!(!out.contains("based in"));

        let with = build_travel_system(&PromptOptions {
            region: Some("Lagos".to_string()),
            ..Default::default()
        });
        assert!(with.contains("based in Lagos"));
    }

    #[test]
    fn test_astrology_entertainment_disclaimer_survives_paid() {
        let out = build_astrology_system(&PromptOptions {
            plan: Plan::Max,
            ..Default::default()
        });
        assert!(out.contains("entertainment"));
    }

    #[test]
    fn test_lifestyle_builders_all_tier_gate() {
        let opts = PromptOptions::default();
        for out in [
            build_fashion_system(&opts),
            build_travel_system(&opts),
            build_relationships_system(&opts),
            build_parenting_system(&opts),
            build_pets_system(&opts),
            build_astrology_system(&opts),
        ] {
            assert!(out.contains("free tier"), "missing free tier block: {out}");
            assert!(!out.contains("pro/max tier"));
            assert!(!out.contains("\n\n\n"));
        }
    }
}
