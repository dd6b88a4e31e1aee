// Following marks: letters after the host that fold into its column.
//
// Three passes run in order on every finished host:
// 1. w above (labialization)
// 2. y below, or e below (palatalization and the e dot)
// 3. s, as a hook below or as one of the trailing s shapes
//
// Primes decide between the folded mark and the literal letter. A letter
// that is not folded is handed back to the input for the next column.

use std::iter;

use tengwar_core::character::{PRIME, is_final};
use tengwar_core::column::ColumnBuilder;
use tengwar_core::mark::{Above, Below, Following};

use crate::engine::WordParser;

impl WordParser<'_> {
    pub(crate) fn parse_annotations(&mut self, column: ColumnBuilder) -> ColumnBuilder {
        let column = self.parse_following_above(column);
        let column = self.parse_following_below(column);
        self.parse_following(column)
    }

    fn parse_following_above(&mut self, column: ColumnBuilder) -> ColumnBuilder {
        if self.cursor.peek() == Some('w') && column.can_add_above(Above::W) {
            self.cursor.bump();
            column.above(Above::W, "w")
        } else {
            column
        }
    }

    fn parse_following_below(&mut self, column: ColumnBuilder) -> ColumnBuilder {
        match self.cursor.peek() {
            Some('y') if column.can_add_below(Below::Y) => {
                self.cursor.bump();
                column.below(Below::Y, "y")
            }
            Some(c @ ('e' | '\u{00EB}')) => {
                if c == '\u{00EB}' && self.options.is_english() {
                    return column;
                }
                if !column.can_add_below(Below::IBelow) {
                    return column;
                }
                self.following_e(column, c)
            }
            _ => column,
        }
    }

    /// An e after the host is written as a dot below by default. One prime
    /// keeps it as a vowel of its own.
    fn following_e(&mut self, column: ColumnBuilder, letter: char) -> ColumnBuilder {
        self.cursor.bump();
        let primes = self.cursor.count_primes();
        if primes == 0 {
            // A final e in a longer English word is silent; both readings
            // take the same mark.
            let silent = self.options.is_english() && self.length > 2 && is_final(self.cursor.peek());
            let from = if silent { "" } else { "e" };
            return column.below(Below::IBelow, from).varies();
        }
        let column = if primes > 1 {
            column.error("Following E has only one variation.")
        } else {
            column
        };
        self.cursor.replay(&[letter]);
        column
    }

    fn parse_following(&mut self, column: ColumnBuilder) -> ColumnBuilder {
        if self.cursor.peek() != Some('s') {
            return column;
        }
        let start = self.cursor.mark();
        self.cursor.bump();
        let primes = self.cursor.count_primes();

        if column.can_add_below(Below::S) {
            if primes == 0 {
                return column.below(Below::S, "s").varies();
            }
            // The s stays a letter and its primes go with it.
            let column = if primes > 1 {
                column.error("Only one alternate form for following S.")
            } else {
                column
            };
            let replay: Vec<char> = iter::once('s')
                .chain(iter::repeat_n(PRIME, primes))
                .collect();
            self.cursor.replay(&replay);
            return column;
        }

        if !is_final(self.cursor.peek()) {
            self.cursor.rewind(start);
            return column;
        }

        let legal: Vec<Following> = Following::PRIORITY
            .into_iter()
            .filter(|&shape| column.can_add_following(shape))
            .collect();
        match legal.get(primes) {
            Some(&shape) => {
                let column = column.following(shape, "s");
                if primes > 0 { column.varies() } else { column }
            }
            None => {
                let excess = primes - legal.len();
                let replay: Vec<char> = iter::once('s')
                    .chain(iter::repeat_n(PRIME, excess))
                    .collect();
                self.cursor.replay(&replay);
                column
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tengwar_core::glyph::Tengwa;

    use super::*;
    use crate::options::{Language, Options};

    /// Run the following-mark passes on `host` with `rest` as the input.
    fn annotate(host: Tengwa, rest: &str, options: &Options) -> (String, String) {
        let mut parser = WordParser::new(rest, options);
        let column = parser.make(host, "");
        let column = parser.parse_annotations(column).build().to_string();
        let mut left = String::new();
        while let Some(c) = parser.cursor.bump() {
            left.push(c);
        }
        (column, left)
    }

    fn general(host: Tengwa, rest: &str) -> (String, String) {
        annotate(host, rest, &Options::default())
    }

    fn pair(column: &str, left: &str) -> (String, String) {
        (column.to_string(), left.to_string())
    }

    // -- w and y tests --

    #[test]
    fn following_w_goes_above() {
        assert_eq!(general(Tengwa::Tinco, "wa"), pair("tinco:w", "a"));
    }

    #[test]
    fn following_w_needs_room_above() {
        assert_eq!(
            general(Tengwa::AndoExtended, "wa"),
            pair("ando-extended", "wa")
        );
    }

    #[test]
    fn following_y_goes_below() {
        assert_eq!(general(Tengwa::Lambe, "ya"), pair("lambe:y", "a"));
    }

    #[test]
    fn w_and_y_combine() {
        assert_eq!(general(Tengwa::Tinco, "wy"), pair("tinco:w,y", ""));
    }

    // -- following e tests --

    #[test]
    fn following_e_is_a_dot_below_by_default() {
        assert_eq!(general(Tengwa::Tinco, "el"), pair("tinco:i-below?", "l"));
    }

    #[test]
    fn one_prime_keeps_e_a_vowel() {
        assert_eq!(general(Tengwa::Tinco, "e'l"), pair("tinco", "el"));
    }

    #[test]
    fn two_primes_keep_e_with_a_diagnostic() {
        let options = Options::default();
        let mut parser = WordParser::new("e''", &options);
        let column = parser.make(Tengwa::Tinco, "t");
        let column = parser.parse_annotations(column).build();
        assert_eq!(column.to_string(), "tinco");
        assert_eq!(column.diagnostics().len(), 1);
        assert_eq!(parser.cursor.bump(), Some('e'));
        assert!(parser.cursor.is_at_end());
    }

    #[test]
    fn following_e_needs_a_free_below_slot() {
        let options = Options::default();
        let mut parser = WordParser::new("e", &options);
        let column = parser.make(Tengwa::Tinco, "t").tilde_below("t");
        let column = parser.parse_annotations(column).build();
        assert_eq!(column.to_string(), "tinco:tilde-below");
        assert_eq!(parser.cursor.peek(), Some('e'));
    }

    #[test]
    fn english_final_e_is_silent() {
        let english = Options::for_language(Language::English);
        let mut parser = WordParser::new("ake", &english);
        parser.cursor.bump();
        parser.cursor.bump();
        let column = parser.make(Tengwa::Quesse, "c");
        let column = parser.parse_annotations(column).build();
        assert_eq!(column.to_string(), "quesse:i-below?");
        assert_eq!(column.provenance(), ["c"]);
    }

    #[test]
    fn english_diaeresis_is_not_folded() {
        let english = Options::for_language(Language::English);
        assert_eq!(
            annotate(Tengwa::Tinco, "\u{00EB}", &english),
            pair("tinco", "\u{00EB}")
        );
        assert_eq!(
            general(Tengwa::Tinco, "\u{00EB}"),
            pair("tinco:i-below?", "")
        );
    }

    // -- following s tests --

    #[test]
    fn s_hooks_below_a_descending_stem() {
        assert_eq!(general(Tengwa::Tinco, "s"), pair("tinco:s?", ""));
        assert_eq!(general(Tengwa::Tinco, "sa"), pair("tinco:s?", "a"));
    }

    #[test]
    fn primed_s_after_a_descending_stem_stays_a_letter() {
        assert_eq!(general(Tengwa::Tinco, "s'"), pair("tinco", "s'"));
        assert_eq!(general(Tengwa::Tinco, "s'a"), pair("tinco", "s'a"));
    }

    #[test]
    fn extra_primes_on_a_hooked_s_are_reported_and_kept() {
        for (rest, left) in [("s''", "s''"), ("s'''", "s'''")] {
            let options = Options::default();
            let mut parser = WordParser::new(rest, &options);
            let column = parser.make(Tengwa::Tinco, "t");
            let column = parser.parse_annotations(column).build();
            assert_eq!(column.to_string(), "tinco", "{rest}");
            assert_eq!(
                column.diagnostics(),
                ["Only one alternate form for following S."],
                "{rest}"
            );
            let mut got = String::new();
            while let Some(c) = parser.cursor.bump() {
                got.push(c);
            }
            assert_eq!(got, left, "{rest}");
        }
    }

    #[test]
    fn final_s_takes_the_first_legal_shape() {
        assert_eq!(general(Tengwa::Lambe, "s"), pair("lambe:s-final", ""));
        assert_eq!(general(Tengwa::Lambe, "s."), pair("lambe:s-final", "."));
    }

    #[test]
    fn primes_skip_down_the_priority_list() {
        // Lambe allows final, inverse and flourish.
        assert_eq!(general(Tengwa::Lambe, "s'"), pair("lambe:s-inverse?", ""));
        assert_eq!(general(Tengwa::Lambe, "s''"), pair("lambe:s-flourish?", ""));
        // Hyarmen allows final, extended and flourish.
        assert_eq!(
            general(Tengwa::Hyarmen, "s'"),
            pair("hyarmen:s-extended?", "")
        );
    }

    #[test]
    fn excess_primes_are_replayed() {
        assert_eq!(general(Tengwa::Lambe, "s''''"), pair("lambe", "s'"));
    }

    #[test]
    fn medial_s_is_left_alone() {
        assert_eq!(general(Tengwa::Lambe, "sa"), pair("lambe", "sa"));
        assert_eq!(general(Tengwa::Lambe, "s'a"), pair("lambe", "s'a"));
    }

    #[test]
    fn punctuation_takes_no_s() {
        assert_eq!(general(Tengwa::FullStop, "s"), pair("full-stop", "s"));
    }
}
