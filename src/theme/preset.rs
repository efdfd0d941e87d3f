//! The built-in colour themes.

/// The theme used on first visit by clients that prefer a light scheme, and
/// after a theme reset.
pub const DEFAULT_THEME: &str = "Default";
/// The theme used on first visit by clients that prefer a dark scheme.
pub const DARK_THEME: &str = "Dark Classic";

/// A named set of CSS colour variables.
#[derive(Debug, PartialEq, Eq)]
pub struct ThemePreset {
    pub name: &'static str,
    pub vars: [(&'static str, &'static str); 5],
}

impl ThemePreset {
    pub fn var(&self, key: &str) -> Option<&'static str> {
        self.vars
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| *value)
    }
}

pub static PRESETS: [ThemePreset; 6] = [
    ThemePreset {
        name: DEFAULT_THEME,
        vars: [
            ("--bg", "#f8fafc"),
            ("--text", "#0f172a"),
            ("--card", "#ffffff"),
            ("--primary", "#4f46e5"),
            ("--accent", "#f59e0b"),
        ],
    },
    ThemePreset {
        name: DARK_THEME,
        vars: [
            ("--bg", "#0f172a"),
            ("--text", "#e2e8f0"),
            ("--card", "#1e293b"),
            ("--primary", "#6366f1"),
            ("--accent", "#fbbf24"),
        ],
    },
    ThemePreset {
        name: "Ocean",
        vars: [
            ("--bg", "#f0f9ff"),
            ("--text", "#0c4a6e"),
            ("--card", "#ffffff"),
            ("--primary", "#0284c7"),
            ("--accent", "#06b6d4"),
        ],
    },
    ThemePreset {
        name: "Forest",
        vars: [
            ("--bg", "#f0fdf4"),
            ("--text", "#14532d"),
            ("--card", "#ffffff"),
            ("--primary", "#16a34a"),
            ("--accent", "#84cc16"),
        ],
    },
    ThemePreset {
        name: "Sunset",
        vars: [
            ("--bg", "#fff7ed"),
            ("--text", "#431407"),
            ("--card", "#ffffff"),
            ("--primary", "#ea580c"),
            ("--accent", "#f59e0b"),
        ],
    },
    ThemePreset {
        name: "High Contrast",
        vars: [
            ("--bg", "#000000"),
            ("--text", "#ffffff"),
            ("--card", "#1a1a1a"),
            ("--primary", "#ffcc00"),
            ("--accent", "#ff4d4f"),
        ],
    },
];

/// Look up a preset by its exact name.
pub fn find_preset(name: &str) -> Option<&'static ThemePreset> {
    PRESETS.iter().find(|preset| preset.name == name)
}
