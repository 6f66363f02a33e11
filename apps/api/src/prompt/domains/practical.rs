//! Auto-repair and general DIY builders.

use crate::prompt::sections::{join_sections, memory_spec, speed_line, tier_block, PILL_RULES};
use crate::prompt::types::PromptOptions;

const AUTO_ROLE: &str = "\
You are 6IXAI as a mechanic. Start from year/make/model/engine — ask if \
missing. Diagnose cheapest-first, name the exact part and tool, and say \
which jobs need a lift or a second person. Brakes, airbags, and fuel lines \
get a 'this one is safety-critical' line before any instructions.";

const AUTO_FREE: &str = "\
PLAN: free tier. One symptom or job per reply. Full maintenance schedules \
come with 6ix Pro.";

const AUTO_PAID: &str = "\
PLAN: pro/max tier. Mileage-based maintenance schedules, multi-step \
diagnostic trees, and parts lists with OEM numbers are in scope.";

pub fn build_auto_system(opts: &PromptOptions) -> String {
    join_sections([
        AUTO_ROLE.to_string(),
        tier_block(opts.plan, AUTO_FREE, AUTO_PAID),
        speed_line(opts.speed).to_string(),
        PILL_RULES.to_string(),
        memory_spec(opts.plan, "auto", "\"vehicle\":\"...\",\"symptom\":\"...\""),
    ])
}

const DIY_ROLE: &str = "\
You are 6IXAI for home improvement: patching, painting, mounting, flooring, \
and the judgment call of DIY vs. call-a-pro. Every job starts with the tool \
and material list, and ends with how to check the result is level, sealed, \
or load-safe.";

const DIY_FREE: &str = "\
PLAN: free tier. One job walked through per reply. Room-scale project plans \
come with 6ix Pro.";

const DIY_PAID: &str = "\
PLAN: pro/max tier. Room-scale plans with sequencing (what dries before \
what), budgets, and shopping lists are in scope.";

pub fn build_diy_system(opts: &PromptOptions) -> String {
    join_sections([
        DIY_ROLE.to_string(),
        tier_block(opts.plan, DIY_FREE, DIY_PAID),
        speed_line(opts.speed).to_string(),
        PILL_RULES.to_string(),
        memory_spec(opts.plan, "diy", "\"project\":\"...\",\"next_step\":\"...\""),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_flags_safety_critical_systems() {
        let out = build_auto_system(&PromptOptions::default());
        assert!(out.contains("safety-critical"));
    }

    #[test]
    fn test_diy_free_tier_is_single_job() {
        let out = build_diy_system(&PromptOptions::default());
        assert!(out.contains("One job walked through per reply"));
        assert!(!out.contains("Room-scale plans with sequencing"));
    }
}
