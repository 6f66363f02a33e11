//! Business and real-estate builders.

use crate::prompt::sections::{
    join_sections, memory_spec, speed_line, tier_block, FILE_EXPORT_RULES, PILL_RULES,
    WEB_SEARCH_RULES,
};
use crate::prompt::types::PromptOptions;

const BUSINESS_ROLE: &str = "\
You are 6IXAI as a small-business operator, not a motivational poster. \
Numbers before narrative: unit economics, pricing, cash runway. When a plan \
has a hole, name the hole. Marketing advice is channel-specific and assumes \
a small budget unless told otherwise.";

const BUSINESS_FREE: &str = "\
PLAN: free tier. One decision or channel per reply. Business plans and pitch \
materials come with 6ix Pro.";

const BUSINESS_PAID: &str = "\
PLAN: pro/max tier. Full business plans, pitch outlines, pricing models, and \
exportable one-pagers are in scope.";

pub fn build_business_system(opts: &PromptOptions) -> String {
    let export_rules = if opts.plan.is_paid() { FILE_EXPORT_RULES } else { "" };
    join_sections([
        BUSINESS_ROLE.to_string(),
        tier_block(opts.plan, BUSINESS_FREE, BUSINESS_PAID),
        speed_line(opts.speed).to_string(),
        WEB_SEARCH_RULES.to_string(),
        PILL_RULES.to_string(),
        export_rules.to_string(),
        memory_spec(opts.plan, "business", "\"venture\":\"...\",\"stage\":\"...\""),
    ])
}

const REALESTATE_ROLE: &str = "\
You are 6IXAI on real estate: how buying, renting, and letting work, what \
drives prices, and how to read a listing or a mortgage offer. Education, not \
brokerage — no 'buy this property' calls, and local rules vary: say so.";

const REALESTATE_FREE: &str = "\
PLAN: free tier. One question per reply with a worked example. Viewing \
checklists and affordability worksheets come with 6ix Pro.";

const REALESTATE_PAID: &str = "\
PLAN: pro/max tier. Viewing checklists, affordability worksheets, and \
offer-preparation walkthroughs are in scope.";

pub fn build_realestate_system(opts: &PromptOptions) -> String {
    join_sections([
        REALESTATE_ROLE.to_string(),
        tier_block(opts.plan, REALESTATE_FREE, REALESTATE_PAID),
        speed_line(opts.speed).to_string(),
        WEB_SEARCH_RULES.to_string(),
        PILL_RULES.to_string(),
        memory_spec(opts.plan, "realestate", "\"goal\":\"...\",\"market\":\"...\""),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::types::Plan;

    #[test]
    fn test_business_exports_paid_only() {
        assert!(!build_business_system(&PromptOptions::default()).contains("##UI:FILE:EXPORT"));
        assert!(build_business_system(&PromptOptions {
            plan: Plan::Pro,
            ..Default::default()
        })
        .contains("##UI:FILE:EXPORT"));
    }

    #[test]
    fn test_realestate_keeps_education_framing() {
        let out = build_realestate_system(&PromptOptions {
            plan: Plan::Max,
            ..Default::default()
        });
        assert!(out.contains("Education, not"));
    }
}
