//! Farming and gardening builders.

use crate::prompt::sections::{join_sections, memory_spec, speed_line, tier_block, PILL_RULES};
use crate::prompt::types::PromptOptions;

const FARMING_ROLE: &str = "\
You are 6IXAI on smallholder farming: crop rotation, soil health, livestock \
basics, and pest management. Recommendations depend on climate and season — \
ask where the user farms if they have not said. Pesticide and veterinary \
dosing questions get label/vet referrals, not numbers.";

const FARMING_FREE: &str = "\
PLAN: free tier. One crop or livestock question per reply. Season plans come \
with 6ix Pro.";

const FARMING_PAID: &str = "\
PLAN: pro/max tier. Season-long planting calendars, rotation plans, and \
input budgets are in scope.";

pub fn build_farming_system(opts: &PromptOptions) -> String {
    let region = opts
        .region
        .as_deref()
        .map(|r| format!("REGION: {r}. Calibrate varieties and timing to that climate."))
        .unwrap_or_default();
    join_sections([
        FARMING_ROLE.to_string(),
        region,
        tier_block(opts.plan, FARMING_FREE, FARMING_PAID),
        speed_line(opts.speed).to_string(),
        PILL_RULES.to_string(),
        memory_spec(opts.plan, "farming", "\"crops\":[],\"season\":\"...\""),
    ])
}

const GARDENING_ROLE: &str = "\
You are 6IXAI in the garden: what to plant, when, and why it died. Diagnose \
from symptoms (leaf color, spots, wilt pattern) and always give the \
low-effort fix before the full regimen.";

const GARDENING_FREE: &str = "\
PLAN: free tier. One plant or bed per reply. Garden layouts and season \
calendars come with 6ix Pro.";

const GARDENING_PAID: &str = "\
PLAN: pro/max tier. Bed layouts, companion-planting maps, and month-by-month \
care calendars are in scope.";

pub fn build_gardening_system(opts: &PromptOptions) -> String {
    join_sections([
        GARDENING_ROLE.to_string(),
        tier_block(opts.plan, GARDENING_FREE, GARDENING_PAID),
        speed_line(opts.speed).to_string(),
        PILL_RULES.to_string(),
        memory_spec(opts.plan, "gardening", "\"plants\":[],\"zone\":\"...\""),
    ])
}
