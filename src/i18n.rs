//! Internationalization (i18n) module
//!
//! Picks the UI language from the configuration or the system locale.
//! English and Simplified Chinese are available; log messages stay in English.

use tracing::debug;

/// Locales with translation files
pub const AVAILABLE_LOCALES: &[&str] = &["en", "zh-CN"];

/// Map a locale tag ("zh_CN.UTF-8", "zh-Hans", "en-US") to an available locale
pub fn resolve_locale(tag: &str) -> &'static str {
    let tag = tag.to_lowercase();
    if tag.starts_with("zh") {
        "zh-CN"
    } else {
        "en"
    }
}

/// Set the active locale. `preferred` wins over the system locale.
pub fn init_locale(preferred: Option<&str>) -> &'static str {
    let system = sys_locale::get_locale();
    let locale = preferred
        .or(system.as_deref())
        .map(resolve_locale)
        .unwrap_or("en");
    debug!(?preferred, ?system, locale, "Locale selected");
    rust_i18n::set_locale(locale);
    locale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_locale() {
        assert_eq!(resolve_locale("zh_CN.UTF-8"), "zh-CN");
        assert_eq!(resolve_locale("zh-Hans"), "zh-CN");
        assert_eq!(resolve_locale("en-US"), "en");
        assert_eq!(resolve_locale("de-DE"), "en");
    }

    #[test]
    fn test_available_locales_resolve_to_themselves() {
        for locale in AVAILABLE_LOCALES {
            assert_eq!(resolve_locale(locale), *locale);
        }
    }
}
