//! Keyword Extraction & Validation
//!
//! Keywords are short tags attached to a chat room, written inline as
//! `#token` in messages or added through the room-creation form. They
//! are stored bare (no `#`) and rendered with the prefix.
//!
//! The allowed alphabet is ASCII letters and digits plus Hangul:
//! syllables (가-힣), consonant jamo (ㄱ-ㅎ) and vowel jamo (ㅏ-ㅣ).

use super::limits::{KEYWORD_MAX_CHARS, KEYWORD_MIN_CHARS};

/// Whether `c` may appear in a keyword
pub fn is_keyword_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || ('\u{AC00}'..='\u{D7A3}').contains(&c)
        || ('\u{3131}'..='\u{314E}').contains(&c)
        || ('\u{314F}'..='\u{3163}').contains(&c)
}

/// Validate a bare keyword: length bounds and alphabet
pub fn is_valid_keyword(keyword: &str) -> bool {
    let count = keyword.chars().count();
    if count < KEYWORD_MIN_CHARS || count > KEYWORD_MAX_CHARS {
        return false;
    }
    keyword.chars().all(is_keyword_char)
}

/// Strip a leading `#` if present; the stored form is always bare
pub fn normalize(keyword: &str) -> &str {
    keyword.strip_prefix('#').unwrap_or(keyword)
}

/// Extract `#token` occurrences from message text
///
/// A token runs from a `#` to the next whitespace or `#`. Tokens that
/// fail validation are dropped; duplicates keep their first position.
pub fn extract_keywords(content: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '#' {
            continue;
        }
        let mut token = String::new();
        while let Some(&next) = chars.peek() {
            if next.is_whitespace() || next == '#' {
                break;
            }
            token.push(next);
            chars.next();
        }
        if is_valid_keyword(&token) && !found.iter().any(|k| k == &token) {
            found.push(token);
        }
    }
    found
}
