use serde::{Deserialize, Serialize};

/// Supported UI locales.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Uk,
}

impl Locale {
    /// All variants in display order.
    pub const ALL: &'static [Locale] = &[Locale::En, Locale::Uk];

    /// Human-readable display names, aligned with `ALL`.
    pub const DISPLAY_NAMES: &'static [&'static str] = &["English", "Українська"];

    /// ISO 639-1 code used as the locale id in the catalog.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Uk => "uk",
        }
    }

    /// Parses an ISO 639-1 code. Returns `None` for codes the catalog
    /// does not carry.
    pub fn from_tag(tag: &str) -> Option<Locale> {
        match tag {
            "en" => Some(Locale::En),
            "uk" => Some(Locale::Uk),
            _ => None,
        }
    }

    /// Returns the index of this locale in `ALL` / `DISPLAY_NAMES`.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&v| v == self).unwrap_or(0)
    }

    /// Returns the locale at the given index, or `En` if out of range.
    pub fn from_index(i: usize) -> Self {
        Self::ALL.get(i).copied().unwrap_or(Locale::En)
    }

    /// Detects the locale from OS environment variables, checked in
    /// precedence order: `LANGUAGE`, `LC_ALL`, `LC_MESSAGES`, `LANG`.
    ///
    /// The first non-empty variable decides; any language the catalog
    /// does not carry maps to `En`.
    pub fn detect() -> Self {
        ["LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"]
            .into_iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|val| !val.is_empty())
            .map_or(Locale::En, |val| Self::from_env_value(&val))
    }

    /// Maps an environment value such as `"uk_UA.UTF-8"` to a supported
    /// locale via its primary language subtag.
    fn from_env_value(value: &str) -> Self {
        value
            .split(['_', '-', '.', '@'])
            .next()
            .and_then(Self::from_tag)
            .unwrap_or(Locale::En)
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
