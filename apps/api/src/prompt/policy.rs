//! Language and preference policy helpers. Both are pure string-returning
//! functions; empty inputs yield empty fragments the joiner filters out.

use crate::prompt::types::{Plan, UserPrefs};

/// Language policy fragment. Free tier mirrors the user's language; paid
/// tiers additionally honor an explicit hint and offer translation.
pub fn language_rules(plan: Plan, lang_hint: Option<&str>) -> String {
    let hint = lang_hint.map(str::trim).filter(|h| !h.is_empty());

    match (plan.is_paid(), hint) {
        (true, Some(hint)) => format!(
            "LANGUAGE: the user prefers {hint}. Answer in {hint} unless they \
             switch languages mid-conversation — then follow them. Offer to \
             translate any quoted material on request."
        ),
        (true, None) => "LANGUAGE: mirror the language the user writes in. Offer to \
             translate any quoted material on request."
            .to_string(),
        (false, Some(hint)) => format!(
            "LANGUAGE: the user prefers {hint}. Answer in {hint} when you can, \
             otherwise mirror the language they write in."
        ),
        (false, None) => {
            "LANGUAGE: mirror the language the user writes in.".to_string()
        }
    }
}

/// Folds user preferences into instruction lines. Persistent-preference
/// wording is reserved for paid plans.
pub fn preference_rules(prefs: &UserPrefs, plan: Plan) -> String {
    if prefs.is_empty() {
        return String::new();
    }

    let mut lines: Vec<String> = Vec::new();

    if let Some(nickname) = prefs.nickname.as_deref().map(str::trim) {
        if !nickname.is_empty() {
            lines.push(format!("Call the user \"{nickname}\"."));
        }
    }
    if let Some(tone) = prefs.tone.as_deref().map(str::trim) {
        if !tone.is_empty() {
            lines.push(format!("Keep a {tone} tone."));
        }
    }
    if !prefs.interests.is_empty() {
        lines.push(format!(
            "When examples help, draw them from the user's interests: {}.",
            prefs.interests.join(", ")
        ));
    }
    if !prefs.avoid_topics.is_empty() {
        lines.push(format!(
            "Avoid bringing up: {}.",
            prefs.avoid_topics.join(", ")
        ));
    }

    if lines.is_empty() {
        return String::new();
    }

    if plan.is_paid() {
        lines.push(
            "These preferences persist across conversations; apply them without restating them."
                .to_string(),
        );
    }

    format!("USER PREFERENCES:\n{}", lines.join("\n"))
}
