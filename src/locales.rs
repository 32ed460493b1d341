//! Static table of standard culture names.
//!
//! The table lists neutral languages (`de`) and language-region cultures
//! (`de-DE`, `zh-Hans-CN`) as they appear in resource file names. Lookups are
//! case-insensitive and return the table's canonical spelling.

use std::collections::HashMap;

use lazy_static::lazy_static;
use unic_langid::LanguageIdentifier;

pub const KNOWN_LOCALES: &[&str] = &[
    "af", "af-ZA", "am", "am-ET", "ar", "ar-AE", "ar-BH", "ar-DZ", "ar-EG", "ar-IQ", "ar-JO",
    "ar-KW", "ar-LB", "ar-LY", "ar-MA", "ar-OM", "ar-QA", "ar-SA", "ar-SY", "ar-TN", "ar-YE",
    "as", "as-IN", "az", "az-Cyrl", "az-Cyrl-AZ", "az-Latn", "az-Latn-AZ", "ba", "ba-RU", "be",
    "be-BY", "bg", "bg-BG", "bn", "bn-BD", "bn-IN", "bo", "bo-CN", "br", "br-FR", "bs",
    "bs-Cyrl", "bs-Cyrl-BA", "bs-Latn", "bs-Latn-BA", "ca", "ca-ES", "co", "co-FR", "cs",
    "cs-CZ", "cy", "cy-GB", "da", "da-DK", "de", "de-AT", "de-CH", "de-DE", "de-LI", "de-LU",
    "dsb", "dsb-DE", "dv", "dv-MV", "el", "el-GR", "en", "en-029", "en-AU", "en-BZ", "en-CA",
    "en-GB", "en-IE", "en-IN", "en-JM", "en-MY", "en-NZ", "en-PH", "en-SG", "en-TT", "en-US",
    "en-ZA", "en-ZW", "es", "es-AR", "es-BO", "es-CL", "es-CO", "es-CR", "es-DO", "es-EC",
    "es-ES", "es-GT", "es-HN", "es-MX", "es-NI", "es-PA", "es-PE", "es-PR", "es-PY", "es-SV",
    "es-US", "es-UY", "es-VE", "et", "et-EE", "eu", "eu-ES", "fa", "fa-IR", "fi", "fi-FI",
    "fil", "fil-PH", "fo", "fo-FO", "fr", "fr-BE", "fr-CA", "fr-CH", "fr-FR", "fr-LU", "fr-MC",
    "fy", "fy-NL", "ga", "ga-IE", "gd", "gd-GB", "gl", "gl-ES", "gsw", "gsw-FR", "gu", "gu-IN",
    "ha", "ha-Latn", "ha-Latn-NG", "he", "he-IL", "hi", "hi-IN", "hr", "hr-BA", "hr-HR", "hsb",
    "hsb-DE", "hu", "hu-HU", "hy", "hy-AM", "id", "id-ID", "ig", "ig-NG", "ii", "ii-CN", "is",
    "is-IS", "it", "it-CH", "it-IT", "iu", "iu-Cans", "iu-Cans-CA", "iu-Latn", "iu-Latn-CA",
    "ja", "ja-JP", "ka", "ka-GE", "kk", "kk-KZ", "kl", "kl-GL", "km", "km-KH", "kn", "kn-IN",
    "ko", "ko-KR", "kok", "kok-IN", "ky", "ky-KG", "lb", "lb-LU", "lo", "lo-LA", "lt", "lt-LT",
    "lv", "lv-LV", "mi", "mi-NZ", "mk", "mk-MK", "ml", "ml-IN", "mn", "mn-Cyrl", "mn-MN",
    "mn-Mong", "mn-Mong-CN", "moh", "moh-CA", "mr", "mr-IN", "ms", "ms-BN", "ms-MY", "mt",
    "mt-MT", "nb", "nb-NO", "ne", "ne-NP", "nl", "nl-BE", "nl-NL", "nn", "nn-NO", "no", "nso",
    "nso-ZA", "oc", "oc-FR", "or", "or-IN", "pa", "pa-IN", "pl", "pl-PL", "prs", "prs-AF", "ps",
    "ps-AF", "pt", "pt-BR", "pt-PT", "qut", "qut-GT", "quz", "quz-BO", "quz-EC", "quz-PE", "rm",
    "rm-CH", "ro", "ro-RO", "ru", "ru-RU", "rw", "rw-RW", "sa", "sa-IN", "sah", "sah-RU", "se",
    "se-FI", "se-NO", "se-SE", "si", "si-LK", "sk", "sk-SK", "sl", "sl-SI", "sma", "sma-NO",
    "sma-SE", "smj", "smj-NO", "smj-SE", "smn", "smn-FI", "sms", "sms-FI", "sq", "sq-AL", "sr",
    "sr-Cyrl", "sr-Cyrl-BA", "sr-Cyrl-CS", "sr-Cyrl-ME", "sr-Cyrl-RS", "sr-Latn",
    "sr-Latn-BA", "sr-Latn-CS", "sr-Latn-ME", "sr-Latn-RS", "sv", "sv-FI", "sv-SE", "sw",
    "sw-KE", "syr", "syr-SY", "ta", "ta-IN", "te", "te-IN", "tg", "tg-Cyrl", "tg-Cyrl-TJ", "th",
    "th-TH", "tk", "tk-TM", "tn", "tn-ZA", "tr", "tr-TR", "tt", "tt-RU", "tzm", "tzm-Latn",
    "tzm-Latn-DZ", "ug", "ug-CN", "uk", "uk-UA", "ur", "ur-PK", "uz", "uz-Cyrl", "uz-Cyrl-UZ",
    "uz-Latn", "uz-Latn-UZ", "vi", "vi-VN", "wo", "wo-SN", "xh", "xh-ZA", "yo", "yo-NG", "zh",
    "zh-CHS", "zh-CHT", "zh-CN", "zh-Hans", "zh-Hant", "zh-HK", "zh-MO", "zh-SG", "zh-TW", "zu",
    "zu-ZA",
];

lazy_static! {
    static ref LOCALE_INDEX: HashMap<String, &'static str> = KNOWN_LOCALES
        .iter()
        .map(|locale| (locale.to_ascii_lowercase(), *locale))
        .collect();
}

/// Returns the canonical table spelling of `id`, if it is a known locale.
pub fn canonical_locale(id: &str) -> Option<&'static str> {
    LOCALE_INDEX.get(&id.to_ascii_lowercase()).copied()
}

pub fn is_known_locale(id: &str) -> bool {
    canonical_locale(id).is_some()
}

/// Normalizes an identifier missing from the table as a BCP-47 language
/// identifier, e.g. `xx-xx` becomes `xx-XX`.
///
/// Only two- or three-letter language subtags are accepted. BCP-47 also
/// allows five to eight letters, which would turn words like `Errors` into
/// locales.
pub fn normalize_dynamic_locale(id: &str) -> Option<String> {
    if id.is_empty() {
        return None;
    }
    let langid = id.parse::<LanguageIdentifier>().ok()?;
    if !(2..=3).contains(&langid.language.as_str().len()) {
        return None;
    }
    Some(langid.to_string())
}

/// True when `id` is a known locale or shaped like one.
pub fn looks_like_locale(id: &str) -> bool {
    is_known_locale(id) || normalize_dynamic_locale(id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_locales_are_unique_ignoring_case() {
        assert_eq!(LOCALE_INDEX.len(), KNOWN_LOCALES.len());
    }

    #[test]
    fn test_canonical_locale_is_case_insensitive() {
        assert_eq!(canonical_locale("de-DE"), Some("de-DE"));
        assert_eq!(canonical_locale("de-de"), Some("de-DE"));
        assert_eq!(canonical_locale("ZH-HANS"), Some("zh-Hans"));
        assert_eq!(canonical_locale("xx-XX"), None);
    }

    #[test]
    fn test_neutral_and_specific_cultures() {
        assert!(is_known_locale("de"));
        assert!(is_known_locale("fr-FR"));
        assert!(is_known_locale("ja-JP"));
        assert!(is_known_locale("sr-Latn-RS"));
        assert!(!is_known_locale(""));
        assert!(!is_known_locale("Errors"));
    }

    #[test]
    fn test_normalize_dynamic_locale() {
        assert_eq!(normalize_dynamic_locale("xx-xx"), Some("xx-XX".to_string()));
        assert_eq!(normalize_dynamic_locale("not a locale"), None);
        assert_eq!(normalize_dynamic_locale(""), None);
    }

    #[test]
    fn test_long_language_subtags_are_not_locales() {
        assert_eq!(normalize_dynamic_locale("Errors"), None);
        assert_eq!(normalize_dynamic_locale("Messages-DE"), None);
        assert_eq!(normalize_dynamic_locale("haw"), Some("haw".to_string()));
        assert!(looks_like_locale("de-de"));
        assert!(looks_like_locale("xx-XX"));
        assert!(!looks_like_locale("Errors"));
        assert!(!looks_like_locale("Designer"));
    }
}
