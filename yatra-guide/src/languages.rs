//! Reply language registry
//!
//! Two selectable groups, each mapping a display name to the code used by
//! the translation and speech services.

use crate::error::{GuideError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageGroup {
    Indian,
    Foreign,
}

const INDIAN_LANGUAGES: &[(&str, &str)] = &[
    ("English", "en"),
    ("Hindi", "hi"),
    ("Tamil", "ta"),
    ("Telugu", "te"),
    ("Kannada", "kn"),
    ("Malayalam", "ml"),
    ("Bengali", "bn"),
    ("Gujarati", "gu"),
    ("Marathi", "mr"),
    ("Punjabi", "pa"),
];

const FOREIGN_LANGUAGES: &[(&str, &str)] = &[
    ("French", "fr"),
    ("German", "de"),
    ("Spanish", "es"),
    ("Italian", "it"),
    ("Russian", "ru"),
    ("Japanese", "ja"),
    ("Korean", "ko"),
    ("Chinese (Mandarin)", "zh-cn"),
    ("Arabic", "ar"),
];

/// Display names for one language group, in registry order.
pub fn language_names(group: LanguageGroup) -> Vec<&'static str> {
    table(group).iter().map(|(name, _)| *name).collect()
}

/// Like [`language_code`], but errors on names outside the registry.
/// Used where a missing code must abort instead of degrade, e.g. when
/// handing a reply language to the speech services.
pub fn resolve_language(name: &str) -> Result<&'static str> {
    language_code(name).ok_or_else(|| GuideError::UnknownLanguage(name.to_string()))
}

/// Code for a display name, searched across both groups.
pub fn language_code(name: &str) -> Option<&'static str> {
    INDIAN_LANGUAGES
        .iter()
        .chain(FOREIGN_LANGUAGES.iter())
        .find(|(n, _)| *n == name)
        .map(|(_, code)| *code)
}

fn table(group: LanguageGroup) -> &'static [(&'static str, &'static str)] {
    match group {
        LanguageGroup::Indian => INDIAN_LANGUAGES,
        LanguageGroup::Foreign => FOREIGN_LANGUAGES,
    }
}
