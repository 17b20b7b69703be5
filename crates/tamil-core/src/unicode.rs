//! Character-level Unicode classification for Tamil text.

/// Virama (புள்ளி), the mark that leaves a consonant without its vowel.
pub const PULLI: char = '\u{0BCD}';

/// Check the full Tamil block (U+0B80..U+0BFF), unassigned codepoints included.
pub fn is_tamil_char(c: char) -> bool {
    ('\u{0B80}'..='\u{0BFF}').contains(&c)
}

/// Non-empty and made only of Tamil-block characters.
pub fn is_tamil(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_tamil_char)
}

/// True when `s` ends in a bare consonant (consonant + pulli).
pub fn ends_with_pulli(s: &str) -> bool {
    s.ends_with(PULLI)
}
