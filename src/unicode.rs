//! Character classes used by the slug stages.
//!
//! Everything here is a plain predicate over general categories; no pattern
//! engine is involved.
use unicode_general_category::{GeneralCategory, get_general_category};

// Fast ASCII class table: bit 0 = allowed in a slug, bit 1 = separator.
const ALLOWED: u8 = 0b01;
const SEPARATOR: u8 = 0b10;

static ASCII_CLASS: [u8; 128] = {
    let mut table = [0u8; 128];
    let mut b = 0;
    while b < 128 {
        let c = b as u8;
        if c.is_ascii_alphanumeric() || c == b'_' || c == b'.' || c == b'~' {
            table[b] = ALLOWED;
        }
        b += 1;
    }
    table[b'-' as usize] = ALLOWED | SEPARATOR;
    table[b' ' as usize] = ALLOWED | SEPARATOR;
    table[b'\t' as usize] = ALLOWED | SEPARATOR;
    table[b'\n' as usize] = ALLOWED | SEPARATOR;
    table[b'\r' as usize] = ALLOWED | SEPARATOR;
    table[b'\x0B' as usize] = ALLOWED | SEPARATOR; // Vertical tab
    table[b'\x0C' as usize] = ALLOWED | SEPARATOR; // Form feed
    table
};

/// Letters, marks, decimal digits and connector punctuation.
#[inline(always)]
pub fn is_word_char(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric() || c == '_';
    }
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::NonspacingMark
            | GeneralCategory::SpacingMark
            | GeneralCategory::EnclosingMark
            | GeneralCategory::DecimalNumber
            | GeneralCategory::ConnectorPunctuation
    )
}

/// May this character appear in a slug at all?
#[inline(always)]
pub fn is_slug_char(c: char) -> bool {
    if c.is_ascii() {
        return ASCII_CLASS[c as usize] & ALLOWED != 0;
    }
    c.is_whitespace() || is_word_char(c)
}

/// Hyphen or any whitespace: the characters folded into the delimiter.
#[inline(always)]
pub fn is_separator(c: char) -> bool {
    if c.is_ascii() {
        return ASCII_CLASS[c as usize] & SEPARATOR != 0;
    }
    c.is_whitespace()
}

/// General category `So` ("Symbol, other").
#[inline(always)]
pub fn is_other_symbol(c: char) -> bool {
    // No ASCII character is in So.
    !c.is_ascii() && get_general_category(c) == GeneralCategory::OtherSymbol
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_allowed_set() {
        let allowed: String = (0u8..128)
            .map(char::from)
            .filter(|&c| is_slug_char(c) && !c.is_whitespace())
            .collect();
        assert_eq!(
            allowed,
            "-.0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz~"
        );
    }

    #[test]
    fn unicode_word_chars_are_kept() {
        for c in ['é', 'ж', '中', 'ا', '\u{0301}', '٣', '‿'] {
            assert!(is_slug_char(c), "{c:?} should be allowed");
        }
        for c in ['☢', '€', '†', '“', '•', '©', '½'] {
            assert!(!is_slug_char(c), "{c:?} should be stripped");
        }
    }

    #[test]
    fn separators() {
        assert!(is_separator('-'));
        assert!(is_separator(' '));
        assert!(is_separator('\u{3000}'));
        assert!(is_separator('\u{00A0}'));
        assert!(!is_separator('_'));
        assert!(!is_separator('~'));
    }

    #[test]
    fn other_symbols() {
        assert!(is_other_symbol('☢'));
        assert!(is_other_symbol('©'));
        assert!(is_other_symbol('😹'));
        assert!(!is_other_symbol('€')); // Sc
        assert!(!is_other_symbol('a'));
        assert!(!is_other_symbol('&'));
    }
}
