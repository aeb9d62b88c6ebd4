//! Localization for `crackbench-ui`.
//!
//! Built on `i18n-embed` (language selection and loading), `fluent`
//! (formatting), `rust-embed` (compile-time embedding of `.ftl` files) and
//! `i18n-embed-fl` (`fl!`, keys checked at compile time).
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/crackbench-ui.ftl   (fallback/reference)
//!   zh-TW/crackbench-ui.ftl
//! ```
//!
//! Chart data (categories, notes, page content) comes from the embedded
//! catalog and is not translated; only the application chrome is.
//!
//! To add a locale, copy `en-US/crackbench-ui.ftl` to
//! `i18n/<lang-id>/crackbench-ui.ftl`, translate every value keeping IDs and
//! placeholders, and register it in `tests/i18n_missing_keys.rs`.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::{langid, LanguageIdentifier};

pub use i18n_embed_fl::fl;

/// Short form of `fl!(&*LOADER, ...)`.
///
/// ```ignore
/// t!("nav-results")
/// t!("sidebar-version", version = "0.1.0")
/// ```
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
const DOMAIN: &str = "crackbench-ui";

const FALLBACK: LanguageIdentifier = langid!("en-US");

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> =
    Lazy::new(|| FluentLanguageLoader::new(DOMAIN, FALLBACK));

static INIT: Once = Once::new();

/// Load bundles for the platform's preferred languages. Idempotent.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => tracing::debug!(?selected, "localization loaded"),
            Err(err) => {
                tracing::warn!(%err, "failed selecting languages; continuing with fallback")
            }
        }
        // Bidi isolation marks would leak into SVG text and exported files.
        LOADER.set_use_isolating(false);
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    LOADER.set_use_isolating(false);
    Ok(())
}

/// Embedded language identifiers, sorted.
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

    #[test]
    fn both_locales_are_embedded() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "zh-TW"));
    }

    #[test]
    fn loader_domain_matches_fluent_config() {
        let config = include_str!("../i18n.toml");
        assert!(config.contains(&format!("domain = \"{DOMAIN}\"")));
    }

    #[test]
    fn fallback_lookup_works() {
        init();
        let loader = FluentLanguageLoader::new(DOMAIN, FALLBACK);
        i18n_embed::select(&loader, &Localizations, &[FALLBACK]).unwrap();
        assert_eq!(fl!(loader, "nav-results"), "Results");
    }

    #[test]
    fn unknown_language_keeps_current_bundle() {
        init();
        let before = fl!(&*LOADER, "nav-design");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "nav-design");
        assert_eq!(before, after);
    }
}
