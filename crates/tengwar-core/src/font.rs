// Glyph providers.
//
// A font decides which marks a base glyph can physically host. The engine
// never attaches a mark without asking first; the builder only asserts that
// the slot is still empty.

use std::fmt;

use crate::column::ColumnBuilder;
use crate::glyph::Tengwa;
use crate::mark::{Above, Below, Following};

/// A glyph-construction provider.
pub trait Font: fmt::Debug + Sync {
    /// A short identifier for diagnostics and logging.
    fn name(&self) -> &'static str;

    /// Start a column on `tengwa`, recording `from` as its source text.
    fn make_column(&'static self, tengwa: Tengwa, from: &str) -> ColumnBuilder;

    fn can_add_above(&self, column: &ColumnBuilder, above: Above) -> bool;

    fn can_add_below(&self, column: &ColumnBuilder, below: Below) -> bool;

    fn can_add_following(&self, column: &ColumnBuilder, following: Following) -> bool;

    /// The base glyph to draw once a tehta sits above `tengwa`.
    ///
    /// Silme and esse curl upward and turn over to make room.
    fn under_tehta(&self, tengwa: Tengwa) -> Tengwa {
        tengwa.nuquerna().unwrap_or(tengwa)
    }
}

// ---------------------------------------------------------------------------
// Annatar
// ---------------------------------------------------------------------------

/// Stem shape of a letter, which governs where sibilant marks fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stem {
    /// Stem below the bow (tinco, ando ...).
    Descending,
    /// Stem raised above the bow (thule, anto, hyarmen ...).
    Ascending,
    /// Stem both above and below (the extended forms).
    Extended,
    /// No stem worth speaking of (numen, lambe, carriers ...).
    Short,
}

/// Classify a letter by stem. Punctuation and numerals are `Short`.
pub fn stem(tengwa: Tengwa) -> Stem {
    match tengwa {
        Tengwa::Tinco
        | Tengwa::Parma
        | Tengwa::Calma
        | Tengwa::Quesse
        | Tengwa::Ando
        | Tengwa::Umbar
        | Tengwa::Anga
        | Tengwa::Ungwe => Stem::Descending,
        Tengwa::Thule
        | Tengwa::Formen
        | Tengwa::Harma
        | Tengwa::Hwesta
        | Tengwa::Anto
        | Tengwa::Ampa
        | Tengwa::Anca
        | Tengwa::Unque
        | Tengwa::Hyarmen => Stem::Ascending,
        Tengwa::AndoExtended
        | Tengwa::UmbarExtended
        | Tengwa::CalmaExtended
        | Tengwa::UngweExtended => Stem::Extended,
        _ => Stem::Short,
    }
}

/// The default glyph provider, modelled on the Tengwar Annatar typeface.
#[derive(Debug, Clone, Copy, Default)]
pub struct Annatar;

/// Shared instance used as the default font.
pub static ANNATAR: Annatar = Annatar;

impl Font for Annatar {
    fn name(&self) -> &'static str {
        "annatar"
    }

    fn make_column(&'static self, tengwa: Tengwa, from: &str) -> ColumnBuilder {
        ColumnBuilder::new(self, tengwa, from)
    }

    fn can_add_above(&self, column: &ColumnBuilder, _above: Above) -> bool {
        let tengwa = column.tengwa();
        column.above_mark().is_none() && tengwa.is_letter() && stem(tengwa) != Stem::Extended
    }

    fn can_add_below(&self, column: &ColumnBuilder, below: Below) -> bool {
        if column.below_mark().is_some() || column.has_tilde_below() {
            return false;
        }
        let tengwa = column.tengwa();
        match below {
            Below::Decimal | Below::Duodecimal => tengwa.is_numeral(),
            Below::S => matches!(stem(tengwa), Stem::Descending | Stem::Extended),
            Below::Y | Below::IBelow => tengwa.is_letter(),
        }
    }

    fn can_add_following(&self, column: &ColumnBuilder, following: Following) -> bool {
        let tengwa = column.tengwa();
        if column.following_mark().is_some() || !tengwa.is_letter() {
            return false;
        }
        match following {
            Following::SFinal => matches!(stem(tengwa), Stem::Short | Stem::Ascending),
            Following::SInverse => stem(tengwa) == Stem::Short,
            Following::SExtended => stem(tengwa) == Stem::Ascending,
            Following::SFlourish => true,
        }
    }
}
