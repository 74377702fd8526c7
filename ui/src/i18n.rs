//! Internationalization (i18n) support for `topicquotes-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/topicquotes-ui.ftl   (fallback/reference)
//!   es-ES/topicquotes-ui.ftl
//!   fr-FR/topicquotes-ui.ftl
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let heading = t!("home-title");
//! let title = t!("dialog-title", topic = "Cricket");
//! ```
//!
//! Only UI chrome is translated. Quotes and topic names come from the
//! catalog and are shown as stored.
//!
//! Platform notes:
//! - Desktop/mobile: `DesktopLanguageRequester` (OS locale list).
//! - Web/WASM: `WebLanguageRequester` (`navigator.languages`).
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Ergonomic translation macro.
/// Examples:
///     t!("home-title")
///     t!("dialog-title", topic = "Gaming")
///
/// Expands to `fl!(&*LOADER, ...)` so every lookup goes through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "topicquotes-ui";

/// Fallback locale tag.
pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match select_into(&LOADER, &requested) {
            Ok(selected) => tracing::debug!(?selected, "localization bundles loaded"),
            Err(err) => {
                tracing::warn!(%err, "failed selecting languages; continuing with fallback")
            }
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => {
            tracing::debug!(tag, "ignoring unparseable language tag");
            return Ok(());
        }
    };
    select_into(&LOADER, &[lang])?;
    tracing::info!(tag, "language switched");
    Ok(())
}

/// Tag of the language the loader currently renders (first loaded bundle).
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Load bundles for `requested` into `loader`.
///
/// Isolation is a per-bundle setting, so it has to be turned off after the
/// bundles exist; otherwise `{ $topic }` renders wrapped in U+2068/U+2069.
fn select_into(
    loader: &FluentLanguageLoader,
    requested: &[LanguageIdentifier],
) -> Result<Vec<LanguageIdentifier>, i18n_embed::I18nEmbedError> {
    let selected = i18n_embed::select(loader, &Localizations, requested)?;
    loader.set_use_isolating(false);
    Ok(selected)
}

/// Embedded language identifiers, sorted (for the picker).
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::TOPIC_REQUIRED_MESSAGE;
    use crate::i18n::fl;

    fn fallback_loader() -> FluentLanguageLoader {
        let loader = FluentLanguageLoader::new(DOMAIN, FALLBACK_LANGUAGE.parse().unwrap());
        select_into(&loader, &[FALLBACK_LANGUAGE.parse().unwrap()]).unwrap();
        loader
    }

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == FALLBACK_LANGUAGE));
        assert!(available_languages().len() > 1);
    }

    #[test]
    fn fallback_required_message_matches_validation() {
        let loader = fallback_loader();
        assert_eq!(fl!(&loader, "form-topic-required"), TOPIC_REQUIRED_MESSAGE);
    }

    #[test]
    fn dialog_title_names_the_topic() {
        let loader = fallback_loader();
        assert_eq!(
            fl!(&loader, "dialog-title", topic = "Cricket"),
            "Motivational Quotes - Cricket"
        );
    }

    #[test]
    fn placeables_render_without_isolation_marks() {
        let loader = fallback_loader();
        let title = fl!(&loader, "dialog-title", topic = "Cricket");
        let footer = fl!(&loader, "footer-rights", year = "2026");
        assert!(!title.contains(['\u{2068}', '\u{2069}']), "{title:?}");
        assert_eq!(footer, "© 2026 Topic Quotes. All rights reserved.");
    }

    #[test]
    fn switched_language_is_reported_and_stays_plain() {
        let loader = FluentLanguageLoader::new(DOMAIN, FALLBACK_LANGUAGE.parse().unwrap());
        select_into(&loader, &["fr-FR".parse().unwrap()]).unwrap();
        assert_eq!(loader.current_language().to_string(), "fr-FR");
        assert_eq!(
            fl!(&loader, "dialog-title", topic = "Gaming"),
            "Citations motivantes - Gaming"
        );
    }

    #[test]
    fn unknown_language_keeps_fallback_text() {
        init();
        set_language(FALLBACK_LANGUAGE).unwrap();
        assert_eq!(current_language(), FALLBACK_LANGUAGE);
        assert_eq!(
            t!("dialog-title", topic = "Cricket"),
            "Motivational Quotes - Cricket"
        );
        let before = t!("form-submit");
        let _ = set_language("zz-ZZ");
        let after = t!("form-submit");
        assert_eq!(before, after);
    }
}
