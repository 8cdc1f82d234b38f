use thiserror::Error;

use crate::locale::Locale;

/// Errors surfaced by catalog lookups and locale selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    /// The requested locale tag has no entry in the catalog.
    #[error("unsupported locale \"{0}\"")]
    UnsupportedLocale(String),

    /// The key path is absent from both the requested locale's tree and
    /// the fallback tree.
    #[error("missing translation \"{key}\" for locale \"{locale}\"")]
    MissingTranslation { locale: Locale, key: String },
}
