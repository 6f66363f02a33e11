//! General-knowledge builders: science, history, sports.

use crate::prompt::sections::{
    join_sections, memory_spec, speed_line, tier_block, PILL_RULES, WEB_SEARCH_RULES,
};
use crate::prompt::types::PromptOptions;

const SCIENCE_ROLE: &str = "\
You are 6IXAI as a science explainer. Correct model first, simplification \
second — and say which parts of the simple version break down. Use numbers \
with units, and separate established results from open questions.";

const SCIENCE_FREE: &str = "\
PLAN: free tier. One phenomenon or concept per reply. Course-style deep \
dives come with 6ix Pro.";

const SCIENCE_PAID: &str = "\
PLAN: pro/max tier. Multi-part deep dives, derivations on request, and \
reading paths from popular to technical are in scope.";

pub fn build_science_system(opts: &PromptOptions) -> String {
    join_sections([
        SCIENCE_ROLE.to_string(),
        tier_block(opts.plan, SCIENCE_FREE, SCIENCE_PAID),
        speed_line(opts.speed).to_string(),
        PILL_RULES.to_string(),
        memory_spec(opts.plan, "science", "\"topic\":\"...\",\"depth\":\"...\""),
    ])
}

const HISTORY_ROLE: &str = "\
You are 6IXAI as a historian. Dates anchor the story but are not the story: \
explain causes, contested interpretations, and whose sources we are reading. \
Distinguish what the record shows from later myth, and say when historians \
disagree.";

const HISTORY_FREE: &str = "\
PLAN: free tier. One event, era, or figure per reply. Timelines and themed \
reading lists come with 6ix Pro.";

const HISTORY_PAID: &str = "\
PLAN: pro/max tier. Cross-referenced timelines, themed reading lists, and \
multi-session period studies are in scope.";

pub fn build_history_system(opts: &PromptOptions) -> String {
    join_sections([
        HISTORY_ROLE.to_string(),
        tier_block(opts.plan, HISTORY_FREE, HISTORY_PAID),
        speed_line(opts.speed).to_string(),
        PILL_RULES.to_string(),
        memory_spec(opts.plan, "history", "\"period\":\"...\",\"thread\":\"...\""),
    ])
}

const SPORTS_ROLE: &str = "\
You are 6IXAI on sports: rules, tactics, stats literacy, and the stories \
behind fixtures. Live scores and lineups are search territory, not memory — \
use the search tag rather than guessing.";

const SPORTS_FREE: &str = "\
PLAN: free tier. One match, rule, or player question per reply. Season-long \
tactical breakdowns come with 6ix Pro.";

const SPORTS_PAID: &str = "\
PLAN: pro/max tier. Tactical series, fantasy-league support, and stat deep \
dives are in scope.";

pub fn build_sports_system(opts: &PromptOptions) -> String {
    join_sections([
        SPORTS_ROLE.to_string(),
        tier_block(opts.plan, SPORTS_FREE, SPORTS_PAID),
        speed_line(opts.speed).to_string(),
        WEB_SEARCH_RULES.to_string(),
        PILL_RULES.to_string(),
        memory_spec(opts.plan, "sports", "\"team\":\"...\",\"competition\":\"...\""),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sports_delegates_live_data_to_search() {
        let out = build_sports_system(&PromptOptions::default());
        assert!(out.contains("##WEB_SEARCH:"));
    }

    #[test]
    fn test_science_and_history_are_distinct() {
        let opts = PromptOptions::default();
        let s = build_science_system(&opts);
        let h = build_history_system(&opts);
        assert!(s.contains("science explainer"));
        assert!(h.contains("historian"));
        assert_ne!(s, h);
    }
}
