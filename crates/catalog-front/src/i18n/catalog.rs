use std::collections::HashMap;

use super::{LocaleError, MessageDescriptor};

pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "fr"];
pub const FALLBACK_LOCALE: &str = "en";

fn embedded_source(locale: &str) -> Option<&'static str> {
    match locale {
        "en" => Some(include_str!("../../locales/en.json")),
        "fr" => Some(include_str!("../../locales/fr.json")),
        _ => None,
    }
}

/// Maps a language tag such as `fr-FR` or `fr_CA` to a supported locale.
pub fn normalize_locale(tag: &str) -> Option<&'static str> {
    let tag = tag.trim().to_ascii_lowercase();
    let primary = tag.split(['-', '_']).next().unwrap_or_default();
    SUPPORTED_LOCALES
        .iter()
        .copied()
        .find(|supported| *supported == primary)
}

/// Translations of one locale, keyed by message id.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    locale: String,
    messages: HashMap<String, String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            locale: FALLBACK_LOCALE.to_string(),
            messages: HashMap::new(),
        }
    }
}

impl Catalog {
    pub fn from_json(locale: impl Into<String>, source: &str) -> Result<Self, LocaleError> {
        let messages: HashMap<String, String> = serde_json::from_str(source)?;
        Ok(Self {
            locale: locale.into(),
            messages,
        })
    }

    pub fn for_locale(tag: &str) -> Result<Self, LocaleError> {
        let locale =
            normalize_locale(tag).ok_or_else(|| LocaleError::UnsupportedLocale(tag.to_string()))?;
        let source =
            embedded_source(locale).ok_or_else(|| LocaleError::UnsupportedLocale(tag.to_string()))?;
        Self::from_json(locale, source)
    }

    /// Like [`Catalog::for_locale`], falling back to English and then to the
    /// default messages instead of failing.
    pub fn resolve(tag: &str) -> Self {
        match Self::for_locale(tag) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::warn!("{}, falling back to {}", e, FALLBACK_LOCALE);
                Self::for_locale(FALLBACK_LOCALE).unwrap_or_else(|e| {
                    log::error!("Failed to load fallback catalog: {}", e);
                    Self::default()
                })
            }
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn format(&self, message: &MessageDescriptor) -> String {
        match self.messages.get(message.id) {
            Some(text) => text.clone(),
            None => {
                log::debug!("Missing message {} for locale {}", message.id, self.locale);
                message.default_message.to_string()
            }
        }
    }
}
