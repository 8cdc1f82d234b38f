//! Message catalog for the Ballsim UI.
//!
//! Every visible label is keyed by a dot-separated path
//! (`"controls.gravity"`) into a per-locale namespace tree. The trees are
//! static and immutable; the only runtime state is the active locale,
//! switched from the language control.

mod catalog;
mod error;
mod locale;
mod messages;

use std::sync::{OnceLock, RwLock};

pub use catalog::{Catalog, Node};
pub use error::I18nError;
pub use locale::Locale;

static CATALOG: Catalog = Catalog::bundled();

/// Returns the catalog bundled with the app.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

static ACTIVE: OnceLock<RwLock<Locale>> = OnceLock::new();

fn active_lock() -> &'static RwLock<Locale> {
    ACTIVE.get_or_init(|| RwLock::new(Locale::default()))
}

/// Returns the locale display sites currently resolve against.
pub fn active_locale() -> Locale {
    *active_lock().read().expect("i18n RwLock poisoned")
}

/// Switches the active locale. Subsequent calls to `t()` resolve against
/// the new locale.
pub fn set_locale(locale: Locale) {
    debug_assert!(CATALOG.supported_locales().contains(&locale));
    let mut guard = active_lock().write().expect("i18n RwLock poisoned");
    *guard = locale;
}

/// Switches the active locale by tag, as received from the language
/// control.
///
/// Fails with `UnsupportedLocale` for tags the catalog has no entry for;
/// the selector is left untouched in that case.
pub fn set_active_locale(tag: &str) -> Result<Locale, I18nError> {
    let locale =
        Locale::from_tag(tag).ok_or_else(|| I18nError::UnsupportedLocale(tag.to_string()))?;
    set_locale(locale);
    Ok(locale)
}

/// Resolves `key_path` against the active locale for display.
///
/// Fail-open: a key missing from the active locale's tree is served from
/// the fallback locale, and a key missing from both comes back as the raw
/// key path, so a display site always has something to render.
pub fn t<'a>(key_path: &'a str) -> &'a str {
    match CATALOG.resolve_locale(active_locale(), key_path) {
        Ok(text) => text,
        Err(_) => key_path,
    }
}
