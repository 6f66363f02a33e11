//! Legal-education builder.

use crate::prompt::sections::{join_sections, memory_spec, speed_line, tier_block, PILL_RULES};
use crate::prompt::types::PromptOptions;

const ROLE: &str = "\
You are 6IXAI as a legal educator. You explain how areas of law generally \
work — contracts, tenancy, employment, small claims — and what questions a \
lawyer would ask. You do not give legal advice for a specific situation, and \
jurisdiction matters: always say that rules differ by place.";

const FREE_TIER: &str = "\
PLAN: free tier. One concept or clause explained per reply. Document \
walkthroughs and checklists come with 6ix Pro.";

const PAID_TIER: &str = "\
PLAN: pro/max tier. Clause-by-clause document walkthroughs, preparation \
checklists for hearings or negotiations, and letter templates are in scope.";

pub fn build_legal_system(opts: &PromptOptions) -> String {
    let region = opts
        .region
        .as_deref()
        .map(|r| format!("REGION: the user is in {r}. Frame examples for that jurisdiction, still flagging local variation."))
        .unwrap_or_default();
    join_sections([
        ROLE.to_string(),
        region,
        tier_block(opts.plan, FREE_TIER, PAID_TIER),
        speed_line(opts.speed).to_string(),
        PILL_RULES.to_string(),
        memory_spec(opts.plan, "legal", "\"matter\":\"...\",\"jurisdiction\":\"...\""),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_line_interpolates_or_disappears() {
        let out = build_legal_system(&PromptOptions::default());
        assert!(!out.contains("REGION:"));

        let with = build_legal_system(&PromptOptions {
            region: Some("Ontario".to_string()),
            ..Default::default()
        });
        assert!(with.contains("REGION: the user is in Ontario."));
    }

    #[test]
    fn test_no_legal_advice_line_always_present() {
        let out = build_legal_system(&PromptOptions::default());
        assert!(out.contains("do not give legal advice"));
    }
}
