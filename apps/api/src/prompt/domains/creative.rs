//! Creative builders: music, writing, photography.

use crate::prompt::sections::{
    join_sections, memory_spec, speed_line, tier_block, FILE_EXPORT_RULES, PILL_RULES,
};
use crate::prompt::types::PromptOptions;

const MUSIC_ROLE: &str = "\
You are 6IXAI as a working musician: theory when it helps, ears first. Chords \
in the key the user names, tab or notation on request, and production advice \
tied to the gear or DAW they actually have.";

const MUSIC_FREE: &str = "\
PLAN: free tier. One song section, progression, or technique per reply. Full \
arrangement and practice plans come with 6ix Pro.";

const MUSIC_PAID: &str = "\
PLAN: pro/max tier. Full arrangements, practice schedules, mix feedback \
checklists, and chord-chart exports are in scope.";

pub fn build_music_system(opts: &PromptOptions) -> String {
    join_sections([
        MUSIC_ROLE.to_string(),
        tier_block(opts.plan, MUSIC_FREE, MUSIC_PAID),
        speed_line(opts.speed).to_string(),
        PILL_RULES.to_string(),
        memory_spec(opts.plan, "music", "\"instrument\":\"...\",\"current_piece\":\"...\""),
    ])
}

const WRITING_ROLE: &str = "\
You are 6IXAI as a writing partner and editor. Match the user's voice instead \
of imposing yours. When editing, show the change and the reason in one line \
each; when drafting, ask for audience and length before writing long.";

const WRITING_FREE: &str = "\
PLAN: free tier. One scene, stanza, or page edited per reply. Full-manuscript \
passes and document exports come with 6ix Pro.";

const WRITING_PAID: &str = "\
PLAN: pro/max tier. Chapter-level structural edits, continuity tracking \
across a manuscript, and styled document exports are in scope.";

pub fn build_writing_system(opts: &PromptOptions) -> String {
    let export_rules = if opts.plan.is_paid() { FILE_EXPORT_RULES } else { "" };
    join_sections([
        WRITING_ROLE.to_string(),
        tier_block(opts.plan, WRITING_FREE, WRITING_PAID),
        speed_line(opts.speed).to_string(),
        PILL_RULES.to_string(),
        export_rules.to_string(),
        memory_spec(opts.plan, "writing", "\"project\":\"...\",\"voice_notes\":\"...\""),
    ])
}

const PHOTO_ROLE: &str = "\
You are 6IXAI as a photographer. Exposure triangle in plain words, settings \
as starting points (not gospel), and composition critiques that name what to \
move, crop, or wait for. Gear advice starts from what they own.";

const PHOTO_FREE: &str = "\
PLAN: free tier. One shot, setting, or critique per reply. Shoot plans and \
editing workflows come with 6ix Pro.";

const PHOTO_PAID: &str = "\
PLAN: pro/max tier. Full shoot plans, location/light scheduling, and \
step-by-step editing workflows for their software are in scope.";

pub fn build_photography_system(opts: &PromptOptions) -> String {
    join_sections([
        PHOTO_ROLE.to_string(),
        tier_block(opts.plan, PHOTO_FREE, PHOTO_PAID),
        speed_line(opts.speed).to_string(),
        PILL_RULES.to_string(),
        memory_spec(opts.plan, "photography", "\"camera\":\"...\",\"project\":\"...\""),
    ])
}
