// Diacritics and secondary marks that attach to a base glyph.
//
// A column has three attachment slots (above, below, following). Each slot
// takes at most one mark; the nasal/doubling tildes are tracked separately on
// the column itself.

#[cfg(feature = "serde")]
use serde::Serialize;

// ---------------------------------------------------------------------------
// Tehta
// ---------------------------------------------------------------------------

/// A vowel diacritic.
///
/// The short forms sit above a tengwa or a short carrier. Of the long forms
/// only `ó` and `ú` (doubled curls) still fit above a tengwa; the others need
/// a long carrier (or vilya, for `á`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(into = "&'static str"))]
pub enum Tehta {
    A,
    E,
    I,
    O,
    U,
    LongA,
    LongE,
    LongI,
    LongO,
    LongU,
}

impl Tehta {
    /// Map a vowel letter to its tehta. Acute vowels map to the long forms.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a' => Some(Self::A),
            'e' => Some(Self::E),
            'i' => Some(Self::I),
            'o' => Some(Self::O),
            'u' => Some(Self::U),
            '\u{00E1}' => Some(Self::LongA), // á
            '\u{00E9}' => Some(Self::LongE), // é
            '\u{00ED}' => Some(Self::LongI), // í
            '\u{00F3}' => Some(Self::LongO), // ó
            '\u{00FA}' => Some(Self::LongU), // ú
            _ => None,
        }
    }

    /// The lengthened form of a short tehta. Long tehtar are returned as is.
    pub fn lengthen(self) -> Self {
        match self {
            Self::A => Self::LongA,
            Self::E => Self::LongE,
            Self::I => Self::LongI,
            Self::O => Self::LongO,
            Self::U => Self::LongU,
            long => long,
        }
    }

    /// The short form of a long tehta, or `None` if already short.
    pub fn shorten(self) -> Option<Self> {
        match self {
            Self::LongA => Some(Self::A),
            Self::LongE => Some(Self::E),
            Self::LongI => Some(Self::I),
            Self::LongO => Some(Self::O),
            Self::LongU => Some(Self::U),
            _ => None,
        }
    }

    pub fn is_long(self) -> bool {
        self.shorten().is_some()
    }

    /// Swap the forward and backward curls (o and u).
    pub fn reverse_curl(self) -> Self {
        match self {
            Self::O => Self::U,
            Self::U => Self::O,
            Self::LongO => Self::LongU,
            Self::LongU => Self::LongO,
            other => other,
        }
    }

    /// Swap the dot and the acute stroke (i and e).
    pub fn swap_dot_slash(self) -> Self {
        match self {
            Self::I => Self::E,
            Self::E => Self::I,
            other => other,
        }
    }

    /// Whether this tehta may be placed directly over a tengwa.
    pub fn fits_above_tengwa(self) -> bool {
        !matches!(self, Self::LongA | Self::LongE | Self::LongI)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::E => "e",
            Self::I => "i",
            Self::O => "o",
            Self::U => "u",
            Self::LongA => "\u{00E1}",
            Self::LongE => "\u{00E9}",
            Self::LongI => "\u{00ED}",
            Self::LongO => "\u{00F3}",
            Self::LongU => "\u{00FA}",
        }
    }
}

impl From<Tehta> for &'static str {
    fn from(tehta: Tehta) -> Self {
        tehta.name()
    }
}

// ---------------------------------------------------------------------------
// Slot marks
// ---------------------------------------------------------------------------

/// A mark for the slot above the base glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(into = "&'static str"))]
pub enum Above {
    Tehta(Tehta),
    /// Labialization ("following w").
    W,
}

impl Above {
    pub fn name(self) -> &'static str {
        match self {
            Self::Tehta(tehta) => tehta.name(),
            Self::W => "w",
        }
    }

    pub fn tehta(self) -> Option<Tehta> {
        match self {
            Self::Tehta(tehta) => Some(tehta),
            Self::W => None,
        }
    }
}

impl From<Tehta> for Above {
    fn from(tehta: Tehta) -> Self {
        Self::Tehta(tehta)
    }
}

impl From<Above> for &'static str {
    fn from(above: Above) -> Self {
        above.name()
    }
}

/// A mark for the slot below the base glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(into = "&'static str"))]
pub enum Below {
    /// Palatalization (two dots).
    Y,
    /// Sibilant hook on a descending stem.
    S,
    /// Following e written as a dot below.
    IBelow,
    /// Dot marking decimal numerals.
    Decimal,
    /// Line marking duodecimal numerals.
    Duodecimal,
}

impl Below {
    pub fn name(self) -> &'static str {
        match self {
            Self::Y => "y",
            Self::S => "s",
            Self::IBelow => "i-below",
            Self::Decimal => "decimal",
            Self::Duodecimal => "duodecimal",
        }
    }
}

impl From<Below> for &'static str {
    fn from(below: Below) -> Self {
        below.name()
    }
}

/// A trailing sibilant suffix shape, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(into = "&'static str"))]
pub enum Following {
    SFinal,
    SInverse,
    SExtended,
    SFlourish,
}

impl Following {
    /// Every following-s shape, highest priority first.
    pub const PRIORITY: [Following; 4] = [
        Following::SFinal,
        Following::SInverse,
        Following::SExtended,
        Following::SFlourish,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::SFinal => "s-final",
            Self::SInverse => "s-inverse",
            Self::SExtended => "s-extended",
            Self::SFlourish => "s-flourish",
        }
    }
}

impl From<Following> for &'static str {
    fn from(following: Following) -> Self {
        following.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tehta_from_char() {
        assert_eq!(Tehta::from_char('a'), Some(Tehta::A));
        assert_eq!(Tehta::from_char('\u{00F3}'), Some(Tehta::LongO));
        assert_eq!(Tehta::from_char('y'), None);
        assert_eq!(Tehta::from_char('t'), None);
    }

    #[test]
    fn lengthen_and_shorten() {
        assert_eq!(Tehta::E.lengthen(), Tehta::LongE);
        assert_eq!(Tehta::LongE.lengthen(), Tehta::LongE);
        assert_eq!(Tehta::LongU.shorten(), Some(Tehta::U));
        assert_eq!(Tehta::U.shorten(), None);
        assert!(Tehta::LongA.is_long());
        assert!(!Tehta::A.is_long());
    }

    #[test]
    fn curls_and_dots() {
        assert_eq!(Tehta::O.reverse_curl(), Tehta::U);
        assert_eq!(Tehta::LongU.reverse_curl(), Tehta::LongO);
        assert_eq!(Tehta::A.reverse_curl(), Tehta::A);
        assert_eq!(Tehta::I.swap_dot_slash(), Tehta::E);
        assert_eq!(Tehta::O.swap_dot_slash(), Tehta::O);
    }

    #[test]
    fn only_short_and_curled_tehtar_fit_above() {
        for tehta in [Tehta::A, Tehta::E, Tehta::I, Tehta::O, Tehta::U] {
            assert!(tehta.fits_above_tengwa());
        }
        assert!(Tehta::LongO.fits_above_tengwa());
        assert!(Tehta::LongU.fits_above_tengwa());
        assert!(!Tehta::LongA.fits_above_tengwa());
        assert!(!Tehta::LongE.fits_above_tengwa());
        assert!(!Tehta::LongI.fits_above_tengwa());
    }

    #[test]
    fn mark_names() {
        assert_eq!(Above::W.name(), "w");
        assert_eq!(Above::from(Tehta::I).name(), "i");
        assert_eq!(Below::IBelow.name(), "i-below");
        assert_eq!(Following::SFlourish.name(), "s-flourish");
    }
}
