// Input normalization.
//
// Words are normalized before idiom lookup and matching, so the matcher
// only ever sees lowercase letters, acute long vowels and ASCII primes.

use std::fmt;

/// Rewrites a word into the alphabet the matcher understands.
pub trait Normalizer: fmt::Debug + Sync {
    fn normalize(&self, word: &str) -> String;
}

/// Passes text through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

/// Lowercases, folds long-vowel spellings to acute vowels and rewrites
/// letters General Use has no tengwa for.
#[derive(Debug, Clone, Copy, Default)]
pub struct Canonical;

pub static IDENTITY: Identity = Identity;
pub static CANONICAL: Canonical = Canonical;

impl Normalizer for Identity {
    fn normalize(&self, word: &str) -> String {
        word.to_string()
    }
}

/// Circumflex and macron vowels are written with the acute.
fn fold_long_vowel(c: char) -> Option<char> {
    match c {
        '\u{00E2}' | '\u{0101}' => Some('\u{00E1}'), // â ā -> á
        '\u{00EA}' | '\u{0113}' => Some('\u{00E9}'), // ê ē -> é
        '\u{00EE}' | '\u{012B}' => Some('\u{00ED}'), // î ī -> í
        '\u{00F4}' | '\u{014D}' => Some('\u{00F3}'), // ô ō -> ó
        '\u{00FB}' | '\u{016B}' => Some('\u{00FA}'), // û ū -> ú
        _ => None,
    }
}

impl Normalizer for Canonical {
    fn normalize(&self, word: &str) -> String {
        let chars: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();
        let mut out = String::with_capacity(word.len());
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            let next = chars.get(i + 1).copied();
            let after = chars.get(i + 2).copied();
            i += 1;
            if let Some(long) = fold_long_vowel(c) {
                out.push(long);
                continue;
            }
            match (c, next, after) {
                ('\u{2032}' | '\u{2019}', _, _) => out.push('\''),
                ('m', Some('p'), Some('h')) => {
                    out.push_str("mf");
                    i += 2;
                }
                ('m', Some('b'), Some('h')) => {
                    out.push_str("mv");
                    i += 2;
                }
                ('p', Some('h'), _) => {
                    out.push('f');
                    i += 1;
                }
                ('b', Some('h'), _) => {
                    out.push('v');
                    i += 1;
                }
                ('c', Some('k'), _) => {
                    out.push('c');
                    i += 1;
                }
                ('k', _, _) => out.push('c'),
                ('x', _, _) => out.push_str("cs"),
                ('q', Some('u'), _) => {
                    out.push_str("cw");
                    i += 1;
                }
                ('q', _, _) => out.push_str("cw"),
                (c, _, _) => out.push(c),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(word: &str) -> String {
        CANONICAL.normalize(word)
    }

    #[test]
    fn lowercases() {
        assert_eq!(canonical("Gandalf"), "gandalf");
        assert_eq!(canonical("ËARENDIL"), "\u{00EB}arendil");
    }

    #[test]
    fn folds_long_vowels_to_acute() {
        assert_eq!(canonical("m\u{00EE}r"), "m\u{00ED}r"); // mîr
        assert_eq!(canonical("r\u{014D}n"), "r\u{00F3}n"); // rōn
        assert_eq!(canonical("\u{00C2}"), "\u{00E1}"); // Â
    }

    #[test]
    fn rewrites_foreign_letters() {
        assert_eq!(canonical("kirk"), "circ");
        assert_eq!(canonical("axe"), "acse");
        assert_eq!(canonical("queen"), "cween");
        assert_eq!(canonical("qat"), "cwat");
        assert_eq!(canonical("back"), "bac");
    }

    #[test]
    fn rewrites_aspirates() {
        assert_eq!(canonical("phial"), "fial");
        assert_eq!(canonical("amphora"), "amfora");
        assert_eq!(canonical("bhan"), "van");
        assert_eq!(canonical("ambhar"), "amvar");
    }

    #[test]
    fn folds_prime_lookalikes() {
        assert_eq!(canonical("s\u{2032}"), "s'");
        assert_eq!(canonical("the\u{2019}"), "the'");
    }

    #[test]
    fn identity_keeps_everything() {
        assert_eq!(IDENTITY.normalize("Kî\u{2019}"), "Kî\u{2019}");
    }
}
