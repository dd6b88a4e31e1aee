// Columns: one glyph position in the transcription.
//
// `ColumnBuilder` is the mutable form used while a word is being matched.
// It is turned into an immutable `Column` once the word is finished.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::font::Font;
use crate::glyph::Tengwa;
use crate::mark::{Above, Below, Following};

// ---------------------------------------------------------------------------
// ColumnBuilder
// ---------------------------------------------------------------------------

/// A column under construction.
///
/// Mutators take and return the builder so calls chain. Each attachment
/// slot can be filled once; filling it twice panics, so callers check the
/// matching `can_add_*` query first.
#[derive(Debug, Clone)]
pub struct ColumnBuilder {
    font: &'static dyn Font,
    tengwa: Tengwa,
    above: Option<Above>,
    below: Option<Below>,
    following: Option<Following>,
    tilde_above: bool,
    tilde_below: bool,
    provenance: Vec<String>,
    variant: bool,
    diagnostics: Vec<String>,
    is_final: bool,
    diphthong: bool,
}

impl ColumnBuilder {
    pub fn new(font: &'static dyn Font, tengwa: Tengwa, from: &str) -> Self {
        let mut column = Self {
            font,
            tengwa,
            above: None,
            below: None,
            following: None,
            tilde_above: false,
            tilde_below: false,
            provenance: Vec::new(),
            variant: false,
            diagnostics: Vec::new(),
            is_final: false,
            diphthong: false,
        };
        column.record(from);
        column
    }

    fn record(&mut self, from: &str) {
        if !from.is_empty() {
            self.provenance.push(from.to_string());
        }
    }

    // -- Capability queries --

    pub fn can_add_above(&self, above: impl Into<Above>) -> bool {
        self.font.can_add_above(self, above.into())
    }

    pub fn can_add_below(&self, below: Below) -> bool {
        self.font.can_add_below(self, below)
    }

    pub fn can_add_following(&self, following: Following) -> bool {
        self.font.can_add_following(self, following)
    }

    // -- Mutators --

    pub fn above(mut self, above: impl Into<Above>, from: &str) -> Self {
        let above = above.into();
        assert!(
            self.above.is_none(),
            "above slot of {} already holds {:?}",
            self.tengwa,
            self.above
        );
        if matches!(above, Above::Tehta(_)) {
            self.tengwa = self.font.under_tehta(self.tengwa);
        }
        self.above = Some(above);
        self.record(from);
        self
    }

    pub fn below(mut self, below: Below, from: &str) -> Self {
        assert!(
            self.below.is_none() && !self.tilde_below,
            "below slot of {} is already occupied",
            self.tengwa
        );
        self.below = Some(below);
        self.record(from);
        self
    }

    pub fn following(mut self, following: Following, from: &str) -> Self {
        assert!(
            self.following.is_none(),
            "following slot of {} already holds {:?}",
            self.tengwa,
            self.following
        );
        self.following = Some(following);
        self.record(from);
        self
    }

    /// Nasalization or doubling bar above the base glyph.
    pub fn tilde_above(mut self, from: &str) -> Self {
        assert!(!self.tilde_above, "{} already has a tilde above", self.tengwa);
        self.tilde_above = true;
        self.record(from);
        self
    }

    /// Doubling bar below the base glyph; shares the below slot.
    pub fn tilde_below(mut self, from: &str) -> Self {
        assert!(
            !self.tilde_below && self.below.is_none(),
            "below slot of {} is already occupied",
            self.tengwa
        );
        self.tilde_below = true;
        self.record(from);
        self
    }

    /// Mark the glyph as one of several equally valid shapes.
    pub fn varies(mut self) -> Self {
        self.variant = true;
        self
    }

    /// Attach a non-fatal diagnostic.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.diagnostics.push(message.into());
        self
    }

    /// Flag a word-final form (e.g. óre for a final r).
    pub fn final_form(mut self) -> Self {
        self.is_final = true;
        self
    }

    /// Flag a glyph that stands for the second half of a diphthong.
    pub fn diphthong(mut self) -> Self {
        self.diphthong = true;
        self
    }

    // -- Accessors --

    pub fn font(&self) -> &'static dyn Font {
        self.font
    }

    pub fn tengwa(&self) -> Tengwa {
        self.tengwa
    }

    pub fn above_mark(&self) -> Option<Above> {
        self.above
    }

    pub fn below_mark(&self) -> Option<Below> {
        self.below
    }

    pub fn following_mark(&self) -> Option<Following> {
        self.following
    }

    pub fn has_tilde_above(&self) -> bool {
        self.tilde_above
    }

    pub fn has_tilde_below(&self) -> bool {
        self.tilde_below
    }

    pub fn is_variant(&self) -> bool {
        self.variant
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// Freeze the column.
    pub fn build(self) -> Column {
        Column {
            tengwa: self.tengwa,
            above: self.above,
            below: self.below,
            following: self.following,
            tilde_above: self.tilde_above,
            tilde_below: self.tilde_below,
            provenance: self.provenance,
            variant: self.variant,
            diagnostics: self.diagnostics,
            is_final: self.is_final,
            diphthong: self.diphthong,
        }
    }
}

// ---------------------------------------------------------------------------
// Column
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
fn is_false(value: &bool) -> bool {
    !*value
}

/// A finished column.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "camelCase"))]
pub struct Column {
    #[cfg_attr(feature = "serde", serde(rename = "base"))]
    tengwa: Tengwa,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    above: Option<Above>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    below: Option<Below>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    following: Option<Following>,
    #[cfg_attr(feature = "serde", serde(rename = "hasTildeAbove", skip_serializing_if = "is_false"))]
    tilde_above: bool,
    #[cfg_attr(feature = "serde", serde(rename = "hasTildeBelow", skip_serializing_if = "is_false"))]
    tilde_below: bool,
    provenance: Vec<String>,
    #[cfg_attr(feature = "serde", serde(rename = "isVariant", skip_serializing_if = "is_false"))]
    variant: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    diagnostics: Vec<String>,
    #[cfg_attr(feature = "serde", serde(rename = "final", skip_serializing_if = "is_false"))]
    is_final: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_false"))]
    diphthong: bool,
}

impl Column {
    pub fn tengwa(&self) -> Tengwa {
        self.tengwa
    }

    /// The base glyph tag.
    pub fn base(&self) -> &'static str {
        self.tengwa.name()
    }

    pub fn above(&self) -> Option<Above> {
        self.above
    }

    pub fn below(&self) -> Option<Below> {
        self.below
    }

    pub fn following(&self) -> Option<Following> {
        self.following
    }

    pub fn has_tilde_above(&self) -> bool {
        self.tilde_above
    }

    pub fn has_tilde_below(&self) -> bool {
        self.tilde_below
    }

    /// Source fragments that produced this column, in order.
    pub fn provenance(&self) -> &[String] {
        &self.provenance
    }

    pub fn is_variant(&self) -> bool {
        self.variant
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn is_diphthong(&self) -> bool {
        self.diphthong
    }
}

/// Human-readable descriptor: `tengwa:mark,mark`, with `?` for a variant.
impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base())?;
        let mut marks: Vec<&str> = Vec::new();
        if let Some(above) = self.above {
            marks.push(above.name());
        }
        if self.tilde_above {
            marks.push("tilde-above");
        }
        if let Some(below) = self.below {
            marks.push(below.name());
        }
        if self.tilde_below {
            marks.push("tilde-below");
        }
        if let Some(following) = self.following {
            marks.push(following.name());
        }
        if !marks.is_empty() {
            write!(f, ":{}", marks.join(","))?;
        }
        if self.variant {
            f.write_str("?")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Word
// ---------------------------------------------------------------------------

/// The columns transcribed from one break-delimited span of input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Word {
    source: String,
    columns: Vec<Column>,
}

impl Word {
    pub fn new(source: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            source: source.into(),
            columns,
        }
    }

    /// The input text this word was transcribed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// All diagnostics of all columns, in column order.
    pub fn diagnostics(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .flat_map(|column| column.diagnostics().iter().map(String::as_str))
    }

    pub fn has_diagnostics(&self) -> bool {
        self.diagnostics().next().is_some()
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{column}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{ANNATAR, Font};
    use crate::mark::Tehta;

    #[test]
    fn build_copies_every_slot() {
        let column = ANNATAR
            .make_column(Tengwa::Tinco, "t")
            .above(Tehta::A, "a")
            .tilde_above("n")
            .varies()
            .error("note")
            .build();
        assert_eq!(column.base(), "tinco");
        assert_eq!(column.above(), Some(Above::Tehta(Tehta::A)));
        assert!(column.has_tilde_above());
        assert!(!column.has_tilde_below());
        assert!(column.is_variant());
        assert_eq!(column.provenance(), ["t", "a", "n"]);
        assert_eq!(column.diagnostics(), ["note"]);
    }

    #[test]
    fn empty_provenance_is_skipped() {
        let column = ANNATAR.make_column(Tengwa::ShortCarrier, "").build();
        assert!(column.provenance().is_empty());
    }

    #[test]
    #[should_panic(expected = "above slot")]
    fn overfilling_above_panics() {
        let _ = ANNATAR
            .make_column(Tengwa::Tinco, "t")
            .above(Tehta::A, "a")
            .above(Above::W, "w");
    }

    #[test]
    #[should_panic(expected = "below slot")]
    fn below_after_tilde_below_panics() {
        let _ = ANNATAR
            .make_column(Tengwa::Tinco, "t")
            .tilde_below("t")
            .below(Below::S, "s");
    }

    #[test]
    fn capability_queries_track_filled_slots() {
        let column = ANNATAR.make_column(Tengwa::Tinco, "t");
        assert!(column.can_add_above(Above::W));
        let column = column.above(Above::W, "w");
        assert!(!column.can_add_above(Tehta::A));
        let column = column.following(Following::SFlourish, "s");
        assert!(!column.can_add_following(Following::SFlourish));
    }

    #[test]
    fn display_descriptor() {
        let column = ANNATAR
            .make_column(Tengwa::Silme, "s")
            .tilde_below("s")
            .varies()
            .build();
        assert_eq!(column.to_string(), "silme:tilde-below?");
        let word = Word::new(
            "nd",
            vec![ANNATAR.make_column(Tengwa::Ando, "d").tilde_above("n").build()],
        );
        assert_eq!(word.to_string(), "ando:tilde-above");
    }

    #[test]
    fn word_collects_diagnostics() {
        let word = Word::new(
            "@x",
            vec![
                ANNATAR.make_column(Tengwa::Ure, "@").error("bad").build(),
                ANNATAR.make_column(Tengwa::Ure, "x").build(),
            ],
        );
        assert_eq!(word.diagnostics().collect::<Vec<_>>(), ["bad"]);
        assert!(word.has_diagnostics());
        assert_eq!(word.len(), 2);
    }
}
