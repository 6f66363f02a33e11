//! Shared option types consumed by the router, the composer, and every
//! domain builder. All records default cleanly so builders stay total
//! functions; a missing optional means "omit that fragment", never an error.

use serde::{Deserialize, Serialize};

/// Subscription tier. Gates longer output, exports, and memory blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Pro,
    Max,
}

impl Plan {
    /// Pro and Max share every gated fragment; only Free is limited.
    pub fn is_paid(self) -> bool {
        !matches!(self, Plan::Free)
    }
}

/// Response-depth mode. Selects one of three fixed verbosity phrases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedMode {
    Instant,
    #[default]
    Auto,
    Thinking,
}

/// Detected user mood. Drives the personal tone line in the composer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Neutral,
    Stressed,
    Sad,
    Angry,
    Excited,
}

/// Optional structured hints about the user profile. Used only for router
/// dispatch (e.g. the kids check) and light interpolation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileHints {
    pub age: Option<u8>,
    pub grade: Option<String>,
    pub kid_mode: bool,
    pub location: Option<String>,
    pub language: Option<String>,
    pub bio: Option<String>,
}

impl ProfileHints {
    /// True when the profile marks the user as a child: explicit kid mode
    /// or a stated age of 12 or under.
    pub fn is_kid(&self) -> bool {
        self.kid_mode || self.age.is_some_and(|a| a <= 12)
    }
}

/// User preferences folded into instruction lines by `preference_rules`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPrefs {
    pub nickname: Option<String>,
    /// e.g. "formal", "casual", "playful"
    pub tone: Option<String>,
    pub interests: Vec<String>,
    pub avoid_topics: Vec<String>,
}

impl UserPrefs {
    pub fn is_empty(&self) -> bool {
        self.nickname.is_none()
            && self.tone.is_none()
            && self.interests.is_empty()
            && self.avoid_topics.is_empty()
    }
}

/// The shared per-domain builder input. Domain builders read the fields they
/// care about and ignore the rest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptOptions {
    pub display_name: Option<String>,
    pub plan: Plan,
    pub model: Option<String>,
    pub speed: SpeedMode,
    pub lang_hint: Option<String>,
    pub prefs: UserPrefs,
    // Domain-specific optional fields; builders that do not use them ignore them.
    pub region: Option<String>,
    pub level: Option<String>,
    pub topic: Option<String>,
    pub units: Option<String>,
    pub currency: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Plan::Free).unwrap(), "\"free\"");
        let plan: Plan = serde_json::from_str("\"max\"").unwrap();
        assert_eq!(plan, Plan::Max);
    }

    #[test]
    fn test_plan_default_is_free() {
        assert_eq!(Plan::default(), Plan::Free);
        assert!(!Plan::default().is_paid());
    }

    #[test]
    fn test_pro_and_max_are_paid() {
        assert!(Plan::Pro.is_paid());
        assert!(Plan::Max.is_paid());
    }

    #[test]
    fn test_speed_mode_default_is_auto() {
        assert_eq!(SpeedMode::default(), SpeedMode::Auto);
    }

    #[test]
    fn test_mood_serde_roundtrip() {
        let mood: Mood = serde_json::from_str("\"stressed\"").unwrap();
        assert_eq!(mood, Mood::Stressed);
    }

    #[test]
    fn test_hints_kid_detection() {
        let by_age = ProfileHints {
            age: Some(10),
            ..Default::default()
        };
        assert!(by_age.is_kid());

        let by_mode = ProfileHints {
            kid_mode: true,
            ..Default::default()
        };
        assert!(by_mode.is_kid());

        let teen = ProfileHints {
            age: Some(13),
            ..Default::default()
        };
        assert!(!teen.is_kid());

        assert!(!ProfileHints::default().is_kid());
    }

    #[test]
    fn test_prompt_options_deserializes_from_partial_json() {
        let opts: PromptOptions =
            serde_json::from_str(r#"{"plan": "pro", "display_name": "Ada"}"#).unwrap();
        assert_eq!(opts.plan, Plan::Pro);
        assert_eq!(opts.display_name.as_deref(), Some("Ada"));
        assert_eq!(opts.speed, SpeedMode::Auto);
        assert!(opts.prefs.is_empty());
    }
}
