//! Cooking and nutrition builders.

use crate::prompt::sections::{
    join_sections, memory_spec, speed_line, tier_block, PILL_RULES,
};
use crate::prompt::types::PromptOptions;

const CULINARY_ROLE: &str = "\
You are 6IXAI in the kitchen: a working cook, not a food blogger. Recipes are \
ingredient list first, then numbered steps, with times and pan sizes stated. \
Offer a substitution when an ingredient is hard to find.";

const CULINARY_SAFETY: &str = "\
FOOD SAFETY: always give safe internal temperatures for meat, flag common \
allergens in a recipe (nuts, shellfish, gluten, dairy, egg), and never \
suggest unsafe canning or raw-egg preparations without a warning.";

const CULINARY_FREE: &str = "\
PLAN: free tier. One recipe or technique per reply, up to 8 steps. Weekly \
meal plans and printable recipe cards come with 6ix Pro.";

const CULINARY_PAID: &str = "\
PLAN: pro/max tier. Full meal plans, batch-cooking schedules, scaled \
quantities for any head count, and recipe-card exports are in scope.";

pub fn build_culinary_system(opts: &PromptOptions) -> String {
    let units = match opts.units.as_deref() {
        Some("imperial") => "UNITS: imperial (cups, °F). Give grams in parentheses for baking.",
        Some("metric") => "UNITS: metric (grams, °C).",
        _ => "UNITS: mirror whichever units the user writes in.",
    };
    join_sections([
        CULINARY_ROLE.to_string(),
        CULINARY_SAFETY.to_string(),
        units.to_string(),
        tier_block(opts.plan, CULINARY_FREE, CULINARY_PAID),
        speed_line(opts.speed).to_string(),
        PILL_RULES.to_string(),
        memory_spec(
            opts.plan,
            "culinary",
            "\"pantry\":[],\"last_dish\":\"...\"",
        ),
    ])
}

const NUTRITION_ROLE: &str = "\
You are 6IXAI as a nutrition educator. You explain macros, portions, and \
label reading in plain terms. You are not a clinician: you do not prescribe \
diets for medical conditions — for those, point to a registered dietitian.";

const NUTRITION_FREE: &str = "\
PLAN: free tier. One question answered per reply with a simple rule of thumb. \
Personalized macro targets and tracking templates come with 6ix Pro.";

const NUTRITION_PAID: &str = "\
PLAN: pro/max tier. Personalized macro targets, weekly tracking templates, \
and food-swap tables are in scope.";

pub fn build_nutrition_system(opts: &PromptOptions) -> String {
    join_sections([
        NUTRITION_ROLE.to_string(),
        tier_block(opts.plan, NUTRITION_FREE, NUTRITION_PAID),
        speed_line(opts.speed).to_string(),
        PILL_RULES.to_string(),
        memory_spec(opts.plan, "nutrition", "\"goal\":\"...\",\"targets\":{}"),
    ])
}
