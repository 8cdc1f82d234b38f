use crate::error::I18nError;
use crate::locale::Locale;
use crate::messages;

/// A node in a locale's namespace tree.
#[derive(Clone, Copy, Debug)]
pub enum Node {
    /// A leaf display string.
    Text(&'static str),
    /// A nested namespace of related keys.
    Namespace(&'static [(&'static str, Node)]),
}

impl Node {
    /// Looks up a dot-separated key path, e.g. `"controls.gravity"`.
    ///
    /// Misses when a segment is absent, when the path stops on a
    /// namespace, or when it tries to descend through a leaf.
    pub fn get(&self, key_path: &str) -> Option<&'static str> {
        let mut node = *self;
        for segment in key_path.split('.') {
            let Node::Namespace(entries) = node else {
                return None;
            };
            match entries.iter().find(|(key, _)| *key == segment) {
                Some((_, child)) => node = *child,
                None => return None,
            }
        }
        match node {
            Node::Text(text) => Some(text),
            Node::Namespace(_) => None,
        }
    }

    /// All leaf key paths under this node, in table order.
    pub fn key_paths(&self) -> Vec<String> {
        fn walk(node: Node, prefix: &str, out: &mut Vec<String>) {
            match node {
                Node::Text(_) => out.push(prefix.to_string()),
                Node::Namespace(entries) => {
                    for (key, child) in entries {
                        let path = if prefix.is_empty() {
                            (*key).to_string()
                        } else {
                            format!("{prefix}.{key}")
                        };
                        walk(*child, &path, out);
                    }
                }
            }
        }
        let mut out = Vec::new();
        walk(*self, "", &mut out);
        out
    }
}

/// The full set of locale-to-translation mappings, plus the fallback
/// locale consulted when the requested locale lacks a key.
///
/// Trees are static data; a catalog is immutable after construction.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    entries: &'static [(Locale, &'static Node)],
    fallback: Locale,
}

impl Catalog {
    /// The catalog bundled with the app, with `En` as the fallback.
    pub const fn bundled() -> Self {
        Self::with_entries(messages::BUNDLED, Locale::En)
    }

    /// Builds a catalog from caller-supplied locale trees.
    pub const fn with_entries(
        entries: &'static [(Locale, &'static Node)],
        fallback: Locale,
    ) -> Self {
        Self { entries, fallback }
    }

    /// Locales this catalog can serve.
    pub fn supported_locales(&self) -> Vec<Locale> {
        self.entries.iter().map(|(locale, _)| *locale).collect()
    }

    /// The locale consulted when the requested one lacks a key.
    pub fn fallback(&self) -> Locale {
        self.fallback
    }

    fn tree(&self, locale: Locale) -> Option<&'static Node> {
        self.entries
            .iter()
            .find(|(l, _)| *l == locale)
            .map(|(_, tree)| *tree)
    }

    /// Resolves `key_path` for the locale identified by `tag`.
    ///
    /// Unknown tags fail with `UnsupportedLocale`; they never fall back.
    pub fn resolve(&self, tag: &str, key_path: &str) -> Result<&'static str, I18nError> {
        let locale = Locale::from_tag(tag)
            .ok_or_else(|| I18nError::UnsupportedLocale(tag.to_string()))?;
        self.resolve_locale(locale, key_path)
    }

    /// Resolves `key_path` for `locale`, retrying under the fallback
    /// locale on a miss.
    ///
    /// A key absent from both trees is `MissingTranslation`; display
    /// sites that want a visible placeholder instead go through
    /// [`crate::t`].
    pub fn resolve_locale(
        &self,
        locale: Locale,
        key_path: &str,
    ) -> Result<&'static str, I18nError> {
        if let Some(text) = self.tree(locale).and_then(|tree| tree.get(key_path)) {
            return Ok(text);
        }
        if locale != self.fallback {
            if let Some(text) = self.tree(self.fallback).and_then(|tree| tree.get(key_path)) {
                return Ok(text);
            }
        }
        Err(I18nError::MissingTranslation {
            locale,
            key: key_path.to_string(),
        })
    }

    /// Key paths present in the fallback tree but untranslated in
    /// `locale`.
    ///
    /// New keys land in the fallback language first and show up here
    /// until their translations do.
    pub fn missing_keys(&self, locale: Locale) -> Vec<String> {
        let Some(reference) = self.tree(self.fallback) else {
            return Vec::new();
        };
        let tree = self.tree(locale);
        reference
            .key_paths()
            .into_iter()
            .filter(|path| tree.is_none_or(|t| t.get(path).is_none()))
            .collect()
    }
}

#[cfg(test)]
#[path = "../tests/unit/catalog.rs"]
mod tests;
