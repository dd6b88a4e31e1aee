// Numerals.
//
// Tengwar numbers are written least significant digit first. Each digit
// gets its own numeral column, marked below with the decimal dot (or the
// duodecimal line). Digits are transcribed as given; no base conversion.

use tengwar_core::column::ColumnBuilder;
use tengwar_core::glyph::Tengwa;
use tengwar_core::mark::Below;

use crate::engine::WordParser;
use crate::options::Options;

/// Numeral columns for a run of ASCII digits. Other characters are skipped.
pub fn numeral_columns(digits: &str, options: &Options) -> Vec<ColumnBuilder> {
    let mark = if options.duodecimal {
        Below::Duodecimal
    } else {
        Below::Decimal
    };
    digits
        .chars()
        .rev()
        .filter_map(|c| {
            let tengwa = c.to_digit(10).and_then(Tengwa::numeral)?;
            Some(
                options
                    .font
                    .make_column(tengwa, &c.to_string())
                    .below(mark, ""),
            )
        })
        .collect()
}

impl WordParser<'_> {
    /// Consume a run of digits.
    pub(crate) fn parse_numeral(&mut self) -> Vec<ColumnBuilder> {
        let start = self.cursor.mark();
        while self.cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.cursor.bump();
        }
        numeral_columns(&self.cursor.since(start), self.options)
    }
}
