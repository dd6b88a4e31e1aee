// Primitive character classifiers.
//
// End of input is represented as `None` throughout; it counts as a break.

use crate::glyph::Tengwa;

/// The disambiguation marker ("prime").
pub const PRIME: char = '\'';

/// Vowel letters recognized by the transcriber, including the diaeresis and
/// acute forms.
const VOWELS: &[char] = &[
    'a', 'e', '\u{00EB}', 'i', 'o', 'u', '\u{00E1}', '\u{00E9}', '\u{00ED}', '\u{00F3}', '\u{00FA}',
];

/// Whether a character delimits words: whitespace or end of input.
pub fn is_break(c: Option<char>) -> bool {
    match c {
        None => true,
        Some(c) => c.is_whitespace(),
    }
}

/// Whether the preceding character is word-final: a break, end of input, or
/// a punctuation mark.
pub fn is_final(c: Option<char>) -> bool {
    match c {
        None => true,
        Some(c) => c.is_whitespace() || is_punctuation(c),
    }
}

/// Whether a character has a punctuation glyph.
pub fn is_punctuation(c: char) -> bool {
    Tengwa::punctuation(c).is_some()
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

pub fn is_prime(c: char) -> bool {
    c == PRIME
}
