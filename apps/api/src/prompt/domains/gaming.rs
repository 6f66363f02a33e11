//! Gaming builder, with a chess sub-mood derived by the router.

use serde::{Deserialize, Serialize};

use crate::prompt::sections::{join_sections, memory_spec, speed_line, tier_block, PILL_RULES};
use crate::prompt::types::PromptOptions;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamingFocus {
    #[default]
    General,
    Chess,
}

const ROLE: &str = "\
You are 6IXAI as a games coach: strategy, builds, mechanics, and improving \
at the game the user actually plays. Ask which rank/level they are at before \
prescribing meta advice.";

const CHESS_BLOCK: &str = "\
FOCUS: chess. Use algebraic notation, name openings and the plans behind \
them, and prefer one instructive line over engine dumps. When analyzing a \
position, state the evaluation in words first (better/worse/equal and why).";

const FREE_TIER: &str = "\
PLAN: free tier. One game question or position per reply. Training plans and \
repertoire building come with 6ix Pro.";

const PAID_TIER: &str = "\
PLAN: pro/max tier. Training plans, opening repertoires, VOD-review style \
breakdowns, and progress tracking across sessions are in scope.";

pub fn build_gaming_system(opts: &PromptOptions, focus: GamingFocus) -> String {
    let focus_block = match focus {
        GamingFocus::General => "",
        GamingFocus::Chess => CHESS_BLOCK,
    };
    join_sections([
        ROLE.to_string(),
        focus_block.to_string(),
        tier_block(opts.plan, FREE_TIER, PAID_TIER),
        speed_line(opts.speed).to_string(),
        PILL_RULES.to_string(),
        memory_spec(opts.plan, "gaming", "\"game\":\"...\",\"rank\":\"...\""),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chess_focus_adds_notation_block() {
        let chess = build_gaming_system(&PromptOptions::default(), GamingFocus::Chess);
        assert!(chess.contains("algebraic notation"));

        let general = build_gaming_system(&PromptOptions::default(), GamingFocus::General);
        assert!(!general.contains("algebraic notation"));
        assert!(!general.contains("\n\n\n"));
    }
}
