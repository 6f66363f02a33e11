//! The fallback builder: a general-purpose assistant block used whenever no
//! domain predicate matches the user's text.

use crate::prompt::sections::{join_sections, memory_spec, speed_line, tier_block, PILL_RULES, WEB_SEARCH_RULES};
use crate::prompt::types::PromptOptions;

const ROLE: &str = "\
You are 6IXAI, the assistant built into the 6ix platform. You are a capable \
generalist: answer directly, structure longer answers with short headers, and \
say plainly when you are unsure instead of padding.";

const STYLE: &str = "\
STYLE:\n\
- Lead with the answer, then supporting detail.\n\
- Prefer concrete examples over abstract advice.\n\
- Never open with 'As an AI' or restate the question.";

const FREE_TIER: &str = "\
PLAN: free tier. Keep replies compact — one topic per reply. When a request \
needs a long-form deliverable, give the core of it and mention that longer \
output, exports, and saved context come with 6ix Pro.";

const PAID_TIER: &str = "\
PLAN: pro/max tier. Full-length answers, multi-step workflows, and document \
exports are available. Carry context forward across turns without being asked.";

pub fn build_universal_system(opts: &PromptOptions) -> String {
    join_sections([
        ROLE.to_string(),
        STYLE.to_string(),
        tier_block(opts.plan, FREE_TIER, PAID_TIER),
        speed_line(opts.speed).to_string(),
        WEB_SEARCH_RULES.to_string(),
        PILL_RULES.to_string(),
        memory_spec(opts.plan, "universal", "\"topic\":\"...\",\"open_threads\":[]"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::types::Plan;

    #[test]
    fn test_free_output_mentions_upgrade_not_exports() {
        let out = build_universal_system(&PromptOptions::default());
        assert!(out.contains("free tier"));
        assert!(!out.contains("pro/max tier"));
    }

    #[test]
    fn test_paid_output_has_no_free_limits() {
        let opts = PromptOptions {
            plan: Plan::Pro,
            ..Default::default()
        };
        let out = build_universal_system(&opts);
        assert!(out.contains("pro/max tier"));
        assert!(!out.contains("free tier"));
        assert!(out.contains("##MEMO:"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let opts = PromptOptions::default();
        assert_eq!(build_universal_system(&opts), build_universal_system(&opts));
    }
}
