//! The persisted settings record and its parts.

use serde::{Deserialize, Serialize};

use crate::IdSet;

/// Name of the single persisted record (localStorage key / config file stem).
pub const SETTINGS_RECORD_NAME: &str = "pokemon-settings";

/// Color theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Auto,
}

/// Theme actually applied after resolving `Auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveTheme {
    Light,
    Dark,
}

impl Theme {
    /// Resolve `Auto` against the system color-scheme preference.
    pub fn effective(self, system_prefers_dark: bool) -> EffectiveTheme {
        match self {
            Theme::Light => EffectiveTheme::Light,
            Theme::Dark => EffectiveTheme::Dark,
            Theme::Auto if system_prefers_dark => EffectiveTheme::Dark,
            Theme::Auto => EffectiveTheme::Light,
        }
    }

    /// Next theme in the toggle cycle: light → dark → auto → light.
    pub fn cycle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Auto,
            Theme::Auto => Theme::Light,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
            Theme::Auto => "🌗",
        }
    }

    pub fn parse(s: &str) -> Option<Theme> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "auto" => Some(Theme::Auto),
            _ => None,
        }
    }
}

impl EffectiveTheme {
    /// CSS class applied to the document root
    pub fn css_class(self) -> &'static str {
        match self {
            EffectiveTheme::Light => "light",
            EffectiveTheme::Dark => "dark",
        }
    }
}

/// UI language. Only English and Polish are supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pl,
}

impl Language {
    /// Detect the language from a browser/system locale tag.
    ///
    /// Anything starting with `pl` (`pl`, `pl-PL`, `pl_pl`, ...) is Polish, everything
    /// else (including no locale at all) is English.
    pub fn from_locale(locale: Option<&str>) -> Language {
        match locale {
            Some(tag) if tag.trim().to_ascii_lowercase().starts_with("pl") => Language::Pl,
            _ => Language::En,
        }
    }

    /// PokeAPI language code
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pl => "pl",
        }
    }

    pub fn toggle(self) -> Language {
        match self {
            Language::En => Language::Pl,
            Language::Pl => Language::En,
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::En => "🇬🇧",
            Language::Pl => "🇵🇱",
        }
    }

    /// Whether numbers use a decimal comma in this language.
    pub fn decimal_comma(self) -> bool {
        matches!(self, Language::Pl)
    }

    pub fn parse(s: &str) -> Option<Language> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "pl" => Some(Language::Pl),
            _ => None,
        }
    }
}

/// Lifetime quiz statistics (persisted).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizStats {
    /// Longest streak ever reached
    pub high_score: u32,
    pub total_correct: u32,
    pub total_attempts: u32,
}

impl QuizStats {
    /// Share of correct answers, 0.0 when nothing was attempted yet.
    pub fn accuracy(&self) -> f64 {
        if self.total_attempts == 0 {
            return 0.0;
        }
        self.total_correct as f64 / self.total_attempts as f64
    }
}

/// The single persisted preferences record.
///
/// Every field falls back to its default so older or partial records still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub theme: Theme,
    pub language: Language,
    pub auto_next: bool,
    pub favorites: IdSet,
    pub caught: IdSet,
    // Last so the TOML rendering keeps plain values ahead of the table
    pub quiz_stats: QuizStats,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Auto,
            language: Language::En,
            auto_next: true,
            favorites: IdSet::new(),
            caught: IdSet::new(),
            quiz_stats: QuizStats::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_run() {
        let s = Settings::default();
        assert_eq!(s.theme, Theme::Auto);
        assert_eq!(s.language, Language::En);
        assert!(s.auto_next);
        assert_eq!(s.quiz_stats, QuizStats::default());
        assert!(s.favorites.is_empty());
        assert!(s.caught.is_empty());
    }

    #[test]
    fn partial_json_record_fills_defaults() {
        let s: Settings = serde_json::from_str(r#"{"theme":"dark","favorites":[25,1]}"#).unwrap();
        assert_eq!(s.theme, Theme::Dark);
        assert!(s.auto_next);
        assert!(s.favorites.contains(25));
        assert_eq!(s.quiz_stats.high_score, 0);
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let mut s = Settings::default();
        s.quiz_stats.high_score = 7;
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"autoNext\":true"));
        assert!(json.contains("\"highScore\":7"));
        assert!(json.contains("\"language\":\"en\""));
    }

    #[test]
    fn parse_toml_record() {
        let toml = r#"
theme = "light"
language = "pl"
autoNext = false
favorites = [1, 4, 7]
caught = []

[quizStats]
highScore = 12
totalCorrect = 40
totalAttempts = 55
"#;

        let s: Settings = toml::from_str(toml).unwrap();
        assert_eq!(s.theme, Theme::Light);
        assert_eq!(s.language, Language::Pl);
        assert!(!s.auto_next);
        assert_eq!(s.quiz_stats.total_attempts, 55);
        assert_eq!(s.favorites.len(), 3);
    }

    #[test]
    fn language_detection() {
        assert_eq!(Language::from_locale(Some("pl-PL")), Language::Pl);
        assert_eq!(Language::from_locale(Some("PL")), Language::Pl);
        assert_eq!(Language::from_locale(Some("en-US")), Language::En);
        assert_eq!(Language::from_locale(Some("de")), Language::En);
        assert_eq!(Language::from_locale(None), Language::En);
    }

    #[test]
    fn theme_cycle_and_resolution() {
        assert_eq!(Theme::Light.cycle(), Theme::Dark);
        assert_eq!(Theme::Dark.cycle(), Theme::Auto);
        assert_eq!(Theme::Auto.cycle(), Theme::Light);
        assert_eq!(Theme::Auto.effective(true), EffectiveTheme::Dark);
        assert_eq!(Theme::Auto.effective(false), EffectiveTheme::Light);
        assert_eq!(Theme::Light.effective(true), EffectiveTheme::Light);
    }

    #[test]
    fn accuracy_handles_zero_attempts() {
        assert_eq!(QuizStats::default().accuracy(), 0.0);
        let stats = QuizStats {
            high_score: 2,
            total_correct: 3,
            total_attempts: 4,
        };
        assert!((stats.accuracy() - 0.75).abs() < f64::EPSILON);
    }
}
