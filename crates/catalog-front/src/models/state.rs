use serde::{Deserialize, Serialize};
use yewdux::prelude::*;

use crate::i18n::{normalize_locale, FALLBACK_LOCALE};

#[derive(Default, Clone, PartialEq, Serialize, Deserialize, Store)]
#[store(storage = "local")]
pub struct LocaleState {
    pub locale: Option<String>,
}

impl LocaleState {
    /// Stores `tag` as the preferred locale when it is supported.
    /// Returns whether the preference changed.
    pub fn remember(&mut self, tag: &str) -> bool {
        let Some(locale) = normalize_locale(tag) else {
            log::warn!("Not remembering unsupported locale {}", tag);
            return false;
        };
        if self.locale.as_deref() == Some(locale) {
            return false;
        }
        self.locale = Some(locale.to_string());
        true
    }
}

/// Picks the locale to render with: the page's explicit choice, then the
/// stored preference, then the browser language.
pub fn effective_locale(
    requested: Option<&str>,
    stored: Option<&str>,
    browser: Option<&str>,
) -> String {
    [requested, stored, browser]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|tag| !tag.is_empty())
        .unwrap_or(FALLBACK_LOCALE)
        .to_string()
}
