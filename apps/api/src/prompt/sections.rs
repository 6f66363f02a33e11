//! Fragment helpers shared by every domain builder: the section joiner, the
//! tier gate, speed phrases, the memory-spec block, and the pseudo-tag rule
//! constants. Pseudo-tags (`##UI:...`, `##WEB_SEARCH:...`) are conventions
//! interpreted by the host app downstream — they are opaque literals here.

use crate::prompt::types::{Plan, SpeedMode};

/// Joins prompt sections with exactly one blank line between them.
/// Each section is trimmed and empty sections are dropped, so builder
/// output never contains a run of three newlines or trailing blanks.
pub fn join_sections<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// One of three fixed verbosity phrases passed through to the model.
pub fn speed_line(speed: SpeedMode) -> &'static str {
    match speed {
        SpeedMode::Instant => {
            "SPEED: instant — answer in the shortest useful form. \
             One tight paragraph or a short list. No preamble."
        }
        SpeedMode::Auto => {
            "SPEED: auto — match response length to the question. \
             Short for simple asks, structured for multi-part ones."
        }
        SpeedMode::Thinking => {
            "SPEED: thinking — reason step by step before answering. \
             Show the key steps, then give a clearly marked final answer."
        }
    }
}

/// The uniform tier gate: Free plans get the short block, Pro/Max get the
/// rich one. Exactly one of the two appears in any output.
pub fn tier_block(plan: Plan, free_text: &str, paid_text: &str) -> String {
    if plan.is_paid() {
        paid_text.to_string()
    } else {
        free_text.to_string()
    }
}

/// Pro/Max-only memory block: instructs the model to emit a `##MEMO:{...}`
/// JSON state line at the end of replies so the host can persist session
/// state. The JSON shape is advice to the model — nothing here parses it.
pub fn memory_spec(plan: Plan, domain_key: &str, fields: &str) -> String {
    if !plan.is_paid() {
        return String::new();
    }
    format!(
        "MEMORY: at the end of each reply, emit one line:\n\
         ##MEMO:{{\"domain\":\"{domain_key}\",{fields}}}\n\
         Keep it valid single-line JSON. The app stores it and sends it back \
         next turn; use it to continue where the user left off."
    )
}

/// Personalized greeting line, or a generic fallback when no display name
/// is known. Never emits a placeholder token.
pub fn greeting_line(display_name: Option<&str>) -> String {
    match display_name {
        Some(name) if !name.trim().is_empty() => {
            format!("The user's name is {}. Greet them by name once, then drop it.", name.trim())
        }
        _ => "You don't know the user's name. Open warmly without inventing one.".to_string(),
    }
}

/// Quick-reply pill protocol. The host renders each pill line as a tappable
/// chip under the reply.
pub const PILL_RULES: &str = "\
QUICK REPLIES: when a natural next step exists, end with up to 3 lines like\n\
##UI:PILL:Show me an example\n\
Each pill is a short user-voiced phrase (max 6 words). Never explain the pills.";

/// Web-search escalation tag. Emitting the line delegates the lookup to the
/// host; the model must not fabricate live data instead.
pub const WEB_SEARCH_RULES: &str = "\
LIVE DATA: when the answer needs current facts (prices, news, weather, scores), \
emit exactly one line:\n\
##WEB_SEARCH: <query>\n\
and wait. Do not guess live values.";

/// File-export tag, paid plans only. The host turns the tag into a download.
pub const FILE_EXPORT_RULES: &str = "\
EXPORTS: when the user asks for a document, emit:\n\
##UI:FILE:EXPORT {\"format\":\"pdf|docx|csv\",\"title\":\"...\"}\n\
followed by the full content to export.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_drops_empty_sections() {
        let joined = join_sections(["a", "", "  ", "b"]);
        assert_eq!(joined, "a\n\nb");
    }

    #[test]
    fn test_join_never_produces_triple_newlines() {
        let joined = join_sections(["a\n", "\nb", "", "c\n\n"]);
        assert!(!joined.contains("\n\n\n"));
        assert!(!joined.starts_with('\n'));
        assert!(!joined.ends_with('\n'));
    }

    #[test]
    fn test_join_of_all_empty_is_empty() {
        assert_eq!(join_sections(["", "  ", "\n"]), "");
    }

    #[test]
    fn test_tier_block_selects_exactly_one() {
        assert_eq!(tier_block(Plan::Free, "short", "rich"), "short");
        assert_eq!(tier_block(Plan::Pro, "short", "rich"), "rich");
        assert_eq!(tier_block(Plan::Max, "short", "rich"), "rich");
    }

    #[test]
    fn test_memory_spec_empty_on_free() {
        assert!(memory_spec(Plan::Free, "culinary", "\"dish\":\"...\"").is_empty());
    }

    #[test]
    fn test_memory_spec_embeds_domain_key_for_paid() {
        let block = memory_spec(Plan::Max, "culinary", "\"dish\":\"...\"");
        assert!(block.contains("##MEMO:{\"domain\":\"culinary\""));
    }

    #[test]
    fn test_greeting_uses_name_when_present() {
        let line = greeting_line(Some("Zara"));
        assert!(line.contains("Zara"));
    }

    #[test]
    fn test_greeting_fallback_has_no_placeholder() {
        for missing in [None, Some(""), Some("   ")] {
            let line = greeting_line(missing);
            assert!(!line.contains("undefined"));
            assert!(!line.contains("{name}"));
            assert!(line.contains("don't know the user's name"));
        }
    }

    #[test]
    fn test_speed_lines_are_distinct() {
        let lines = [
            speed_line(SpeedMode::Instant),
            speed_line(SpeedMode::Auto),
            speed_line(SpeedMode::Thinking),
        ];
        assert_ne!(lines[0], lines[1]);
        assert_ne!(lines[1], lines[2]);
    }
}
