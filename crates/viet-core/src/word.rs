//! Word-break and script classification over composed text.

use unicode_normalization::UnicodeNormalization;

use crate::tone::{tone_of, with_tone, Tone};

/// Tone-neutral letters that are unambiguously Vietnamese by shape alone.
const VIETNAMESE_SHAPES: [char; 7] = ['â', 'ă', 'ê', 'ô', 'ơ', 'ư', 'đ'];

/// True for characters that end the word currently being composed:
/// ASCII digits plus punctuation, whitespace, and symbol keys.
pub fn is_word_break(c: char) -> bool {
    if c.is_ascii_digit() {
        return true;
    }
    matches!(
        c,
        ',' | ';'
            | ':'
            | '.'
            | '"'
            | '\''
            | '!'
            | '?'
            | ' '
            | '<'
            | '>'
            | '='
            | '+'
            | '-'
            | '*'
            | '/'
            | '\\'
            | '_'
            | '~'
            | '`'
            | '@'
            | '#'
            | '$'
            | '%'
            | '^'
            | '&'
            | '('
            | ')'
            | '{'
            | '}'
            | '['
            | ']'
            | '|'
    )
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Drop the tone from every vowel in `word`, leaving shape marks intact.
/// Operates code-point-wise; the output has exactly as many characters as
/// the input.
pub fn strip_tones(word: &str) -> String {
    word.chars().map(|c| with_tone(c, Tone::None)).collect()
}

/// True when `word` contains a letter only Vietnamese has: either a toned
/// vowel, or a letter whose tone-neutral form carries a Vietnamese shape
/// mark (đ, ơ, ă, ...). Case-insensitive.
pub fn has_vietnamese_char(word: &str) -> bool {
    word.chars().flat_map(char::to_lowercase).any(|c| {
        tone_of(c) != Tone::None || VIETNAMESE_SHAPES.contains(&with_tone(c, Tone::None))
    })
}

/// Recompose combining diacritics into the precomposed forms the tables are
/// keyed on (NFC).
///
/// Text read back from a host application may arrive decomposed, and the
/// classifiers here are code-point-exact; run uncertain input through this
/// first.
pub fn precompose(word: &str) -> String {
    word.nfc().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_break_classification() {
        assert!(is_word_break('5'));
        assert!(is_word_break('0'));
        assert!(is_word_break(' '));
        assert!(is_word_break('.'));
        assert!(is_word_break('$'));
        assert!(is_word_break('\\'));
        assert!(is_word_break('|'));
        assert!(!is_word_break('a'));
        assert!(!is_word_break('đ'));
        assert!(!is_word_break('ế'));
    }

    #[test]
    fn latin_classification() {
        assert!(is_latin('a'));
        assert!(is_latin('Z'));
        assert!(!is_latin('đ'));
        assert!(!is_latin('7'));
    }

    #[test]
    fn strip_tones_examples() {
        assert_eq!(strip_tones("đã"), "đa");
        assert_eq!(strip_tones("Tiếng Việt"), "Tiêng Viêt");
        assert_eq!(strip_tones("xin chào"), "xin chao");
        assert_eq!(strip_tones(""), "");
    }

    #[test]
    fn strip_tones_keeps_length() {
        for word in ["đã", "người", "chữ quốc ngữ", "abc123"] {
            assert_eq!(strip_tones(word).chars().count(), word.chars().count());
        }
    }

    #[test]
    fn vietnamese_detection() {
        assert!(!has_vietnamese_char("viet"));
        assert!(has_vietnamese_char("việt"));
        assert!(has_vietnamese_char("đen"));
        assert!(!has_vietnamese_char("den"));
        // Shape-only letters count even without a tone.
        assert!(has_vietnamese_char("tư"));
        assert!(!has_vietnamese_char("tu"));
        // Case-insensitive.
        assert!(has_vietnamese_char("VIỆT"));
        assert!(has_vietnamese_char("ĐEN"));
        assert!(!has_vietnamese_char("DEN"));
    }

    #[test]
    fn precompose_recovers_decomposed_input() {
        let decomposed: String = "việt đó".nfd().collect();
        assert_ne!(decomposed, "việt đó");
        assert_eq!(precompose(&decomposed), "việt đó");
        assert!(has_vietnamese_char(&precompose(&decomposed)));
    }

    #[test]
    fn precompose_is_identity_on_composed_text() {
        assert_eq!(precompose("việt"), "việt");
        assert_eq!(precompose("abc"), "abc");
    }
}
