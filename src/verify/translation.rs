//! Untranslated header detection.

use crate::books;

/// The first word of `text` that is part of an English book name, when the
/// document language is set and is not English.
pub fn untranslated_word<'t>(text: &'t str, language_code: Option<&str>) -> Option<&'t str> {
    let language = language_code.filter(|code| !code.is_empty())?;
    if language.starts_with("en") {
        return None;
    }
    text.split(' ')
        .filter(|word| !word.is_empty())
        .find(|word| books::is_english_word(&word.to_lowercase()))
}
