use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;

/// Language codes offered by the UI, in display order.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh-CN", "Chinese (Simplified)"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
];

lazy_static! {
    static ref LANGUAGE_NAMES: HashMap<&'static str, &'static str> =
        LANGUAGES.iter().copied().collect();
}

/// Resolve a code to its display name. Unknown codes are returned as-is.
pub fn display_name(code: &str) -> &str {
    LANGUAGE_NAMES.get(code).copied().unwrap_or(code)
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub name: &'static str,
}

pub fn list() -> Vec<LanguageInfo> {
    LANGUAGES
        .iter()
        .map(|&(code, name)| LanguageInfo { code, name })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(display_name("en"), "English");
        assert_eq!(display_name("zh-CN"), "Chinese (Simplified)");
        assert_eq!(display_name("hi"), "Hindi");
    }

    #[test]
    fn test_unknown_code_passes_through() {
        assert_eq!(display_name("sv"), "sv");
        assert_eq!(display_name("Klingon"), "Klingon");
        // Lookup is case-sensitive
        assert_eq!(display_name("zh-cn"), "zh-cn");
    }

    #[test]
    fn test_list_order() {
        let languages = list();
        assert_eq!(languages.len(), 12);
        assert_eq!(languages[0].code, "en");
        assert_eq!(languages[11].name, "Hindi");
    }
}
