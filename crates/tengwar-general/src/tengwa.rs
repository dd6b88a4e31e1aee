// Tengwa matching: the consonant (or carrier) that hosts a column.
//
// Matching is keyed on the next character and reads ahead greedily for
// digraphs (th, nd, ss ...). Primes after some letters pick an alternate
// glyph; one prime too many clamps to the last alternate and leaves a
// diagnostic on the column.

use tengwar_core::character::{is_final, is_vowel};
use tengwar_core::column::ColumnBuilder;
use tengwar_core::glyph::Tengwa;
use tengwar_core::mark::{Above, Below, Tehta};

use crate::engine::WordParser;
use crate::tehta::PendingTehta;

/// Outcome of tengwa matching: the host column, if any, and the tehta that
/// is still waiting for a place.
pub(crate) type Matched = (Option<ColumnBuilder>, Option<PendingTehta>);

impl WordParser<'_> {
    /// Match a host for the column.
    ///
    /// Most rules leave the pending tehta untouched. A few consume it
    /// (English silent e) or depend on it (yanta after a or alone).
    pub(crate) fn parse_tengwa(&mut self, tehta: Option<PendingTehta>) -> Matched {
        let english = self.options.is_english();
        let pending_e = tehta.as_ref().is_some_and(|p| p.tehta == Tehta::E);

        let Some(c) = self.cursor.peek() else {
            if english && pending_e {
                // Silent final e in English.
                let column = self
                    .make(Tengwa::ShortCarrier, "")
                    .below(Below::IBelow, "e");
                return (Some(column), None);
            }
            return (None, tehta);
        };

        let column = match c {
            'n' => {
                self.cursor.bump();
                self.after_n()
            }
            'm' => {
                self.cursor.bump();
                self.after_m()
            }
            '\u{00F1}' => {
                self.cursor.bump();
                if self.cursor.eat('c') {
                    self.make(Tengwa::Quesse, "c").tilde_above("\u{00F1}")
                } else if self.cursor.eat('g') {
                    self.make(Tengwa::Ungwe, "g").tilde_above("\u{00F1}")
                } else {
                    self.make(Tengwa::Nwalme, "\u{00F1}")
                }
            }
            't' => {
                self.cursor.bump();
                self.after_t()
            }
            'p' => {
                self.cursor.bump();
                if self.cursor.eat('p') {
                    self.make(Tengwa::Parma, "p").tilde_below("p")
                } else if self.cursor.eat('h') {
                    self.make(Tengwa::Formen, "ph")
                } else {
                    self.make(Tengwa::Parma, "p")
                }
            }
            'c' => {
                self.cursor.bump();
                self.after_c()
            }
            'd' => {
                self.cursor.bump();
                if self.cursor.eat('d') {
                    self.make(Tengwa::Ando, "d").tilde_below("d")
                } else if self.cursor.eat('j') {
                    self.make(Tengwa::Anga, "dj")
                } else if self.options.tsdz && self.cursor.eat('z') {
                    self.make(Tengwa::Anga, "dz")
                } else if self.cursor.eat('h') {
                    self.make(Tengwa::Anto, "dh")
                } else {
                    self.make(Tengwa::Ando, "d")
                }
            }
            'b' => {
                self.cursor.bump();
                if self.cursor.eat('b') {
                    self.make(Tengwa::Umbar, "b").tilde_below("b")
                } else if self.cursor.eat('h') {
                    self.make(Tengwa::Ampa, "bh")
                } else {
                    self.make(Tengwa::Umbar, "b")
                }
            }
            'g' => {
                self.cursor.bump();
                if self.cursor.eat('g') {
                    self.make(Tengwa::Ungwe, "g").tilde_below("g")
                } else if self.cursor.eat('h') {
                    if self.options.is_black_speech() {
                        self.make(Tengwa::UngweExtended, "gh")
                    } else {
                        self.make(Tengwa::Unque, "gh")
                    }
                } else {
                    self.make(Tengwa::Ungwe, "g")
                }
            }
            'f' => {
                self.cursor.bump();
                if self.cursor.eat('f') {
                    self.make(Tengwa::Formen, "f").tilde_below("f")
                } else {
                    self.make(Tengwa::Formen, "f")
                }
            }
            'v' => {
                self.cursor.bump();
                if self.cursor.eat('v') {
                    self.make(Tengwa::Ampa, "v").tilde_below("v")
                } else {
                    self.make(Tengwa::Ampa, "v")
                }
            }
            'j' => {
                self.cursor.bump();
                if self.cursor.eat('j') {
                    self.make(Tengwa::Anca, "j").tilde_below("j")
                } else {
                    self.make(Tengwa::Anca, "j")
                }
            }
            's' => {
                self.cursor.bump();
                if self.cursor.peek() == Some('h') {
                    self.cursor.bump();
                    if self.options.is_black_speech() {
                        self.make(Tengwa::CalmaExtended, "sh")
                    } else {
                        self.make(Tengwa::Harma, "sh")
                    }
                } else {
                    self.sibilant('s', Tengwa::Silme, "Silme")
                }
            }
            'z' => {
                self.cursor.bump();
                self.sibilant('z', Tengwa::Esse, "Esse")
            }
            'h' => {
                self.cursor.bump();
                if self.cursor.eat('w') {
                    self.make(Tengwa::HwestaSindarinwa, "hw")
                } else {
                    self.make(Tengwa::Hyarmen, "h")
                }
            }
            'r' => {
                self.cursor.bump();
                self.after_r()
            }
            'l' => {
                self.cursor.bump();
                if self.cursor.eat('l') {
                    self.make(Tengwa::Lambe, "l").tilde_below("l")
                } else if self.cursor.eat('h') {
                    self.make(Tengwa::Alda, "lh")
                } else {
                    self.make(Tengwa::Lambe, "l")
                }
            }
            'i' => {
                self.cursor.bump();
                self.make(Tengwa::Anna, "i").diphthong()
            }
            'u' => {
                self.cursor.bump();
                self.make(Tengwa::Vala, "u").diphthong()
            }
            'w' => {
                self.cursor.bump();
                if self.cursor.eat('h') {
                    self.make(Tengwa::HwestaSindarinwa, "wh")
                } else {
                    self.make(Tengwa::Vala, "w").diphthong()
                }
            }
            'e' if tehta.as_ref().is_none_or(|p| p.tehta == Tehta::A) => {
                self.cursor.bump();
                self.make(Tengwa::Yanta, "e").diphthong()
            }
            '\u{00EB}' => {
                // In English, or after another vowel. The pending tehta stays pending.
                self.cursor.bump();
                self.make(Tengwa::ShortCarrier, "").above(Tehta::E, "\u{00EB}")
            }
            'y' => {
                self.cursor.bump();
                self.consonantal_y()
            }
            '\u{00E1}' | '\u{00E9}' | '\u{00ED}' | '\u{00F3}' | '\u{00FA}' => {
                let Some(long) = Tehta::from_char(c) else {
                    return (None, tehta);
                };
                self.cursor.bump();
                self.carrier(long, &c.to_string())
            }
            '\'' if english && pending_e => {
                // A prime after e keeps it audible in English.
                self.cursor.bump();
                let column = self.make(Tengwa::ShortCarrier, "").above(Tehta::E, "e");
                return (Some(column), None);
            }
            _ => return (None, tehta),
        };
        (Some(column), tehta)
    }

    // -- Nasals --

    fn doubled_nasal(&self, tengwa: Tengwa, from: &str) -> ColumnBuilder {
        let column = self.make(tengwa, from);
        if self.options.double_nasals_with_tilde_below {
            column.tilde_below(from)
        } else {
            column.tilde_above(from)
        }
    }

    fn after_n(&mut self) -> ColumnBuilder {
        match self.cursor.peek() {
            Some('n') => {
                self.cursor.bump();
                self.doubled_nasal(Tengwa::Numen, "n")
            }
            Some('t') => {
                self.cursor.bump();
                if self.cursor.eat('h') {
                    self.make(Tengwa::Thule, "th").tilde_above("n")
                } else {
                    self.make(Tengwa::Tinco, "t").tilde_above("n")
                }
            }
            Some('d') => {
                self.cursor.bump();
                self.make(Tengwa::Ando, "d").tilde_above("n")
            }
            Some('c') => {
                self.cursor.bump();
                self.make(Tengwa::Quesse, "c").tilde_above("\u{00F1}")
            }
            Some('g') => {
                self.cursor.bump();
                self.make(Tengwa::Ungwe, "g").tilde_above("\u{00F1}")
            }
            Some('j') => {
                self.cursor.bump();
                self.make(Tengwa::Anca, "j").tilde_above("n")
            }
            Some('f') => {
                // nf is pronounced nv.
                self.cursor.bump();
                self.cursor.replay(&['v']);
                self.make(Tengwa::Numen, "n")
            }
            Some('w') => {
                self.cursor.bump();
                if self.cursor.peek() == Some('a') && self.cursor.peek_nth(1) == Some('l') {
                    self.make(Tengwa::Nwalme, "n").above(Above::W, "w")
                } else if self.cursor.eat('\'') {
                    self.make(Tengwa::Nwalme, "\u{00F1}").above(Above::W, "w")
                } else {
                    self.make(Tengwa::Numen, "n").above(Above::W, "w")
                }
            }
            _ => self.make(Tengwa::Numen, "n"),
        }
    }

    fn after_m(&mut self) -> ColumnBuilder {
        let nasalized = match self.cursor.peek() {
            Some('m') => {
                self.cursor.bump();
                return self.doubled_nasal(Tengwa::Malta, "m");
            }
            Some('p') => (Tengwa::Parma, "p"),
            Some('b') => (Tengwa::Umbar, "b"),
            Some('f') => (Tengwa::Formen, "f"),
            Some('v') => (Tengwa::Ampa, "v"),
            _ => return self.make(Tengwa::Malta, "m"),
        };
        self.cursor.bump();
        let (tengwa, from) = nasalized;
        self.make(tengwa, from).tilde_above("m")
    }

    // -- Stops --

    fn after_t(&mut self) -> ColumnBuilder {
        match self.cursor.peek() {
            Some('t') => {
                self.cursor.bump();
                self.make(Tengwa::Tinco, "t").tilde_below("t")
            }
            Some('h') => {
                self.cursor.bump();
                self.make(Tengwa::Thule, "th")
            }
            Some('c') if self.cursor.peek_nth(1) == Some('h') => {
                // tch: tinco, then ch as in "church".
                self.cursor.bump();
                self.cursor.bump();
                self.cursor.replay(&['c', 'c']);
                self.make(Tengwa::Tinco, "t")
            }
            Some('s') if self.options.tsdz => {
                self.cursor.bump();
                self.make(Tengwa::Calma, "ts")
            }
            _ => self.make(Tengwa::Tinco, "t"),
        }
    }

    /// `cc` is calma; `ch` is hwesta (ach-laut) unless the option reads it
    /// as calma, in which case `ch'` gives hwesta.
    fn after_c(&mut self) -> ColumnBuilder {
        if self.cursor.eat('c') {
            return self.make(Tengwa::Calma, "ch");
        }
        if !self.cursor.eat('h') {
            return self.make(Tengwa::Quesse, "c");
        }
        let primes = self.cursor.count_primes();
        let column = if self.options.no_ach_laut && primes == 0 {
            self.make(Tengwa::Calma, "ch")
        } else {
            self.make(Tengwa::Hwesta, "ch")
        };
        if primes > 1 {
            column.error("Ch has only one alternate form.")
        } else {
            column
        }
    }

    // -- Sibilants --

    /// Silme or esse, doubled with a bar below. The plain and the turned
    /// form are equally valid when no tehta decides, so a plain letter is
    /// a variant; one prime selects the turned form.
    fn sibilant(&mut self, letter: char, plain: Tengwa, name: &str) -> ColumnBuilder {
        let doubled = self.cursor.eat(letter);
        let primes = self.cursor.count_primes();
        let from = letter.to_string();
        let tengwa = if primes == 0 {
            plain
        } else {
            plain.nuquerna().unwrap_or(plain)
        };
        let mut column = self.make(tengwa, &from);
        if doubled {
            column = column.tilde_below(&from);
        }
        if primes == 0 {
            column = column.varies();
        }
        if primes > 1 {
            column = column.error(format!("{name} does not have this many alternate forms."));
        }
        column
    }

    // -- Liquids and semivowels --

    fn after_r(&mut self) -> ColumnBuilder {
        match self.cursor.peek() {
            Some('r') => {
                self.cursor.bump();
                self.make(Tengwa::Romen, "r").tilde_below("r")
            }
            Some('h') => {
                self.cursor.bump();
                self.make(Tengwa::Arda, "rh")
            }
            next if is_final(next)
                || (self.options.uses_medial_ore() && next.is_some_and(|c| !is_vowel(c))) =>
            {
                self.make(Tengwa::Ore, "r").final_form()
            }
            _ => self.make(Tengwa::Romen, "r"),
        }
    }

    /// Anna for a consonantal y; `y'` selects the long carrier with i.
    fn consonantal_y(&mut self) -> ColumnBuilder {
        let primes = self.cursor.count_primes();
        match primes {
            0 => self.make(Tengwa::Anna, "y"),
            1 => self.make(Tengwa::LongCarrier, "y").above(Tehta::I, ""),
            _ => self
                .make(Tengwa::LongCarrier, "y")
                .above(Tehta::I, "")
                .error("Consonantal Y only has one variation."),
        }
    }
}
