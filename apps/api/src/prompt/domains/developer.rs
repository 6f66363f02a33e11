//! Developer domain builder. The router derives a focus sub-mood from
//! secondary pattern tests inside the matched branch (debugging vs. review
//! vs. architecture) before invoking the builder.

use serde::{Deserialize, Serialize};

use crate::prompt::sections::{
    join_sections, memory_spec, speed_line, tier_block, FILE_EXPORT_RULES, PILL_RULES,
    WEB_SEARCH_RULES,
};
use crate::prompt::types::PromptOptions;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevFocus {
    #[default]
    General,
    Debugging,
    Review,
    Architecture,
}

const ROLE: &str = "\
You are 6IXAI acting as a senior full-stack developer. You read code \
carefully before commenting on it, prefer minimal reproducible examples, and \
name the exact file/function/line you are talking about.";

const STYLE: &str = "\
STYLE:\n\
- Code in fenced blocks with the language tag.\n\
- Explain the why in one or two sentences, not an essay.\n\
- If the user's approach is a dead end, say so early and offer the alternative.";

const FREE_TIER: &str = "\
PLAN: free tier. One focused fix or snippet per reply. Point to docs for the \
rest. Project-wide refactors and file exports come with 6ix Pro.";

const PAID_TIER: &str = "\
PLAN: pro/max tier. Multi-file refactors, step-by-step migration plans, and \
exporting generated code or docs are all in scope.";

fn focus_block(focus: DevFocus) -> &'static str {
    match focus {
        DevFocus::General => "",
        DevFocus::Debugging => {
            "FOCUS: debugging. Reproduce first: ask for the exact error and the \
             smallest failing input if they are missing. Fix the cause, not the \
             symptom, and say how to verify the fix."
        }
        DevFocus::Review => {
            "FOCUS: code review. Order findings by severity. Separate must-fix \
             from nitpicks. Quote the line you are flagging."
        }
        DevFocus::Architecture => {
            "FOCUS: architecture. Start from the constraints (scale, team, \
             deadline), give one recommended design plus one alternative, and \
             name the tradeoff that decides between them."
        }
    }
}

pub fn build_developer_system(opts: &PromptOptions, focus: DevFocus) -> String {
    let export_rules = if opts.plan.is_paid() {
        FILE_EXPORT_RULES
    } else {
        ""
    };
    join_sections([
        ROLE.to_string(),
        focus_block(focus).to_string(),
        STYLE.to_string(),
        tier_block(opts.plan, FREE_TIER, PAID_TIER),
        speed_line(opts.speed).to_string(),
        WEB_SEARCH_RULES.to_string(),
        PILL_RULES.to_string(),
        export_rules.to_string(),
        memory_spec(
            opts.plan,
            "developer",
            "\"stack\":\"...\",\"current_task\":\"...\"",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::types::Plan;

    #[test]
    fn test_role_names_senior_full_stack_developer() {
        let out = build_developer_system(&PromptOptions::default(), DevFocus::General);
        assert!(out.contains("senior full-stack developer"));
    }

    #[test]
    fn test_debug_focus_block_present_only_when_selected() {
        let debug = build_developer_system(&PromptOptions::default(), DevFocus::Debugging);
        assert!(debug.contains("FOCUS: debugging"));

        let general = build_developer_system(&PromptOptions::default(), DevFocus::General);
        assert!(!general.contains("FOCUS:"));
    }

    #[test]
    fn test_export_tag_is_paid_only() {
        let free = build_developer_system(&PromptOptions::default(), DevFocus::General);
        assert!(!free.contains("##UI:FILE:EXPORT"));

        let opts = PromptOptions {
            plan: Plan::Pro,
            ..Default::default()
        };
        let paid = build_developer_system(&opts, DevFocus::General);
        assert!(paid.contains("##UI:FILE:EXPORT"));
    }

    #[test]
    fn test_no_triple_newlines_with_empty_focus() {
        let out = build_developer_system(&PromptOptions::default(), DevFocus::General);
        assert!(!out.contains("\n\n\n"));
    }
}
