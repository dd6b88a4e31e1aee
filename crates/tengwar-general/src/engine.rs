// Column assembly for a single word.
//
// Each column is read in three stages:
// 1. an optional tehta (vowel) from `tehta.rs`
// 2. an optional host tengwa from `tengwa.rs`, which may also consume,
//    reinterpret or pass through the pending tehta
// 3. following marks from `following.rs` (w above, y or e below, s hooks)
//
// When neither a tehta nor a tengwa matches, the column is a numeral run,
// punctuation, or an untranscribable character (ure plus a diagnostic).

use tengwar_core::character::is_break;
use tengwar_core::column::ColumnBuilder;
use tengwar_core::glyph::Tengwa;
use tengwar_core::mark::{Below, Tehta};

use crate::cursor::Cursor;
use crate::options::Options;
use crate::tehta::PendingTehta;

/// Matcher state for one word.
pub(crate) struct WordParser<'o> {
    pub(crate) options: &'o Options,
    pub(crate) cursor: Cursor,
    /// Length of the word in characters, as given to the parser.
    pub(crate) length: usize,
}

impl<'o> WordParser<'o> {
    pub(crate) fn new(word: &str, options: &'o Options) -> Self {
        Self {
            options,
            cursor: Cursor::new(word),
            length: word.chars().count(),
        }
    }

    pub(crate) fn make(&self, tengwa: Tengwa, from: &str) -> ColumnBuilder {
        self.options.font.make_column(tengwa, from)
    }

    /// Read columns until the word is exhausted.
    ///
    /// Every call to `parse_column` consumes at least one character net of
    /// replays, so the loop terminates.
    pub(crate) fn parse_word(mut self) -> Vec<ColumnBuilder> {
        let mut columns = Vec::new();
        while !self.cursor.is_at_end() {
            for column in self.parse_column() {
                tracing::trace!(tengwa = %column.tengwa(), "column");
                columns.push(column);
            }
        }
        columns
    }

    /// Read the next column (or short run of columns).
    pub(crate) fn parse_column(&mut self) -> Vec<ColumnBuilder> {
        let tehta = self.parse_tehta();
        let (column, tehta) = self.parse_tengwa(tehta);
        match (column, tehta) {
            (Some(column), Some(pending)) => self.place_tehta(column, pending),
            (Some(column), None) => vec![self.parse_annotations(column)],
            (None, Some(pending)) => {
                let tehta = self.styled(pending.tehta);
                let carrier = self.carrier(tehta, &pending.from);
                vec![self.parse_annotations(carrier)]
            }
            (None, None) => self.parse_other(),
        }
    }

    /// Seat a pending tehta on its host, or on a carrier before it.
    fn place_tehta(&mut self, column: ColumnBuilder, pending: PendingTehta) -> Vec<ColumnBuilder> {
        let tehta = self.styled(pending.tehta);

        if self.options.s_hook && column.tengwa() == Tengwa::Silme && !column.has_tilde_below() {
            let hooked = self
                .carrier(tehta, &pending.from)
                .below(Below::S, "s");
            return vec![hooked];
        }

        if let (true, Some(short)) = (self.options.is_english(), tehta.shorten()) {
            let carrier = self
                .make(Tengwa::LongCarrier, "")
                .above(short, &pending.from);
            return vec![carrier, self.parse_annotations(column)];
        }

        if tehta.fits_above_tengwa() && column.can_add_above(tehta) {
            let column = column.above(tehta, &pending.from);
            vec![self.parse_annotations(column)]
        } else {
            let column = self.parse_annotations(column);
            vec![self.carrier(tehta, &pending.from), column]
        }
    }

    /// Apply the curl and dot/slash swaps the options ask for.
    pub(crate) fn styled(&self, tehta: Tehta) -> Tehta {
        let tehta = if self.options.reverses_curls() {
            tehta.reverse_curl()
        } else {
            tehta
        };
        if self.options.swap_dot_slash {
            tehta.swap_dot_slash()
        } else {
            tehta
        }
    }

    /// Columns that are neither vowels nor consonants.
    fn parse_other(&mut self) -> Vec<ColumnBuilder> {
        let Some(c) = self.cursor.peek() else {
            return Vec::new();
        };
        if is_break(Some(c)) {
            self.cursor.bump();
            return Vec::new();
        }
        if c.is_ascii_digit() {
            return self.parse_numeral();
        }
        self.cursor.bump();
        let from = c.to_string();
        if let Some(tengwa) = Tengwa::punctuation(c) {
            return vec![self.make(tengwa, &from)];
        }
        tracing::debug!(character = %c, "untranscribable character");
        vec![
            self.make(Tengwa::Ure, &from)
                .error(format!("Cannot transcribe {c:?} in General Use Mode")),
        ]
    }
}

/// Transcribe one normalized word, without idiom lookup.
pub(crate) fn transcribe_piecewise(word: &str, options: &Options) -> Vec<ColumnBuilder> {
    WordParser::new(word, options).parse_word()
}
