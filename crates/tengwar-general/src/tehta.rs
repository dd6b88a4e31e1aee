// Tehta resolution: reading a vowel and building vowel carriers.

use tengwar_core::column::ColumnBuilder;
use tengwar_core::glyph::Tengwa;
use tengwar_core::mark::Tehta;

use crate::engine::WordParser;

/// A vowel read ahead of its host tengwa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingTehta {
    pub tehta: Tehta,
    /// The source text of the vowel, e.g. `"a"` or `"ee"`.
    pub from: String,
}

impl WordParser<'_> {
    /// Read an optional vowel.
    ///
    /// A doubled vowel reads as the long tehta. Outside English, `ë` is
    /// just an `e` with a reminder to pronounce it. Consumes nothing when
    /// the next character is not a vowel.
    pub(crate) fn parse_tehta(&mut self) -> Option<PendingTehta> {
        let first = self.cursor.peek()?;
        let vowel = if first == '\u{00EB}' && !self.options.is_english() {
            'e'
        } else {
            first
        };
        match vowel {
            'a' | 'e' | 'i' | 'o' | 'u' => {
                let tehta = Tehta::from_char(vowel)?;
                self.cursor.bump();
                if self.cursor.eat(vowel) {
                    Some(PendingTehta {
                        tehta: tehta.lengthen(),
                        from: format!("{first}{vowel}"),
                    })
                } else {
                    Some(PendingTehta {
                        tehta,
                        from: first.to_string(),
                    })
                }
            }
            '\u{00F3}' | '\u{00FA}' => {
                let tehta = Tehta::from_char(vowel)?;
                self.cursor.bump();
                Some(PendingTehta {
                    tehta,
                    from: first.to_string(),
                })
            }
            _ => None,
        }
    }

    /// A carrier bearing `tehta`.
    ///
    /// Long á sits on wilya; the other long tehtar sit, shortened, on the
    /// long carrier; short tehtar on the short carrier.
    pub(crate) fn carrier(&self, tehta: Tehta, from: &str) -> ColumnBuilder {
        match tehta {
            Tehta::LongA => self.make(Tengwa::Wilya, "").above(Tehta::A, from),
            long => match long.shorten() {
                Some(short) => self.make(Tengwa::LongCarrier, "").above(short, from),
                None => self.make(Tengwa::ShortCarrier, "").above(tehta, from),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Language, Options};

    fn read(word: &str, options: &Options) -> (Option<PendingTehta>, Option<char>) {
        let mut parser = WordParser::new(word, options);
        let tehta = parser.parse_tehta();
        (tehta, parser.cursor.peek())
    }

    fn tehta_of(word: &str) -> Option<Tehta> {
        read(word, &Options::default()).0.map(|pending| pending.tehta)
    }

    #[test]
    fn single_vowel_is_short() {
        assert_eq!(tehta_of("an"), Some(Tehta::A));
        assert_eq!(tehta_of("u"), Some(Tehta::U));
    }

    #[test]
    fn doubled_vowel_is_long() {
        let (pending, next) = read("een", &Options::default());
        let pending = pending.unwrap();
        assert_eq!(pending.tehta, Tehta::LongE);
        assert_eq!(pending.from, "ee");
        assert_eq!(next, Some('n'));
    }

    #[test]
    fn different_vowels_do_not_combine() {
        let (pending, next) = read("ai", &Options::default());
        assert_eq!(pending.map(|p| p.tehta), Some(Tehta::A));
        assert_eq!(next, Some('i'));
    }

    #[test]
    fn acute_curls_are_tehtar() {
        assert_eq!(tehta_of("\u{00F3}"), Some(Tehta::LongO));
        assert_eq!(tehta_of("\u{00FA}"), Some(Tehta::LongU));
    }

    #[test]
    fn acute_a_e_i_are_not_tehtar() {
        assert_eq!(tehta_of("\u{00E1}"), None);
        assert_eq!(tehta_of("\u{00E9}"), None);
        assert_eq!(tehta_of("\u{00ED}"), None);
    }

    #[test]
    fn consonant_consumes_nothing() {
        let (pending, next) = read("n", &Options::default());
        assert_eq!(pending, None);
        assert_eq!(next, Some('n'));
    }

    #[test]
    fn diaeresis_e_outside_english() {
        let (pending, _) = read("\u{00EB}", &Options::default());
        let pending = pending.unwrap();
        assert_eq!(pending.tehta, Tehta::E);
        assert_eq!(pending.from, "\u{00EB}");
    }

    #[test]
    fn diaeresis_e_in_english_is_left_alone() {
        let english = Options::for_language(Language::English);
        let (pending, next) = read("\u{00EB}", &english);
        assert_eq!(pending, None);
        assert_eq!(next, Some('\u{00EB}'));
    }

    #[test]
    fn carriers() {
        let options = Options::default();
        let parser = WordParser::new("", &options);
        let wilya = parser.carrier(Tehta::LongA, "aa").build();
        assert_eq!(wilya.to_string(), "wilya:a");
        let long = parser.carrier(Tehta::LongI, "ii").build();
        assert_eq!(long.to_string(), "long-carrier:i");
        let short = parser.carrier(Tehta::O, "o").build();
        assert_eq!(short.to_string(), "short-carrier:o");
        assert_eq!(short.provenance(), ["o"]);
    }
}
