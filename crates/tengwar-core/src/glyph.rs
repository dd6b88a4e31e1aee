// The closed vocabulary of base glyphs a column can carry.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Names of the numeral glyphs, indexed by value (0..=11).
const NUMERAL_NAMES: [&str; 12] = [
    "num-0", "num-1", "num-2", "num-3", "num-4", "num-5", "num-6", "num-7", "num-8", "num-9",
    "num-10", "num-11",
];

/// A base glyph: a tengwa, a vowel carrier, a punctuation mark or a numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(into = "&'static str"))]
pub enum Tengwa {
    // -- Tincotéma --
    Tinco,
    Ando,
    Thule,
    Anto,
    Numen,
    Ore,
    // -- Parmatéma --
    Parma,
    Umbar,
    Formen,
    Ampa,
    Malta,
    Vala,
    // -- Calmatéma --
    Calma,
    Anga,
    Harma,
    Anca,
    Noldo,
    Anna,
    // -- Quessetéma --
    Quesse,
    Ungwe,
    Hwesta,
    Unque,
    Nwalme,
    Wilya,
    // -- Additional letters --
    Romen,
    Arda,
    Lambe,
    Alda,
    Silme,
    SilmeNuquerna,
    Esse,
    EsseNuquerna,
    Hyarmen,
    HwestaSindarinwa,
    Yanta,
    Ure,
    // -- Extended stems --
    AndoExtended,
    UmbarExtended,
    CalmaExtended,
    UngweExtended,
    // -- Carriers --
    ShortCarrier,
    LongCarrier,
    // -- Punctuation --
    Comma,
    FullStop,
    ExclamationPoint,
    QuestionMark,
    OpenParen,
    CloseParen,
    FlourishLeft,
    FlourishRight,
    /// A numeral glyph, 0 through 11.
    Numeral(u8),
}

impl Tengwa {
    /// The stable kebab-case tag for this glyph.
    pub fn name(self) -> &'static str {
        match self {
            Self::Tinco => "tinco",
            Self::Ando => "ando",
            Self::Thule => "thule",
            Self::Anto => "anto",
            Self::Numen => "numen",
            Self::Ore => "ore",
            Self::Parma => "parma",
            Self::Umbar => "umbar",
            Self::Formen => "formen",
            Self::Ampa => "ampa",
            Self::Malta => "malta",
            Self::Vala => "vala",
            Self::Calma => "calma",
            Self::Anga => "anga",
            Self::Harma => "harma",
            Self::Anca => "anca",
            Self::Noldo => "noldo",
            Self::Anna => "anna",
            Self::Quesse => "quesse",
            Self::Ungwe => "ungwe",
            Self::Hwesta => "hwesta",
            Self::Unque => "unque",
            Self::Nwalme => "nwalme",
            Self::Wilya => "wilya",
            Self::Romen => "romen",
            Self::Arda => "arda",
            Self::Lambe => "lambe",
            Self::Alda => "alda",
            Self::Silme => "silme",
            Self::SilmeNuquerna => "silme-nuquerna",
            Self::Esse => "esse",
            Self::EsseNuquerna => "esse-nuquerna",
            Self::Hyarmen => "hyarmen",
            Self::HwestaSindarinwa => "hwesta-sindarinwa",
            Self::Yanta => "yanta",
            Self::Ure => "ure",
            Self::AndoExtended => "ando-extended",
            Self::UmbarExtended => "umbar-extended",
            Self::CalmaExtended => "calma-extended",
            Self::UngweExtended => "ungwe-extended",
            Self::ShortCarrier => "short-carrier",
            Self::LongCarrier => "long-carrier",
            Self::Comma => "comma",
            Self::FullStop => "full-stop",
            Self::ExclamationPoint => "exclamation-point",
            Self::QuestionMark => "question-mark",
            Self::OpenParen => "open-paren",
            Self::CloseParen => "close-paren",
            Self::FlourishLeft => "flourish-left",
            Self::FlourishRight => "flourish-right",
            Self::Numeral(n) => NUMERAL_NAMES[usize::from(n.min(11))],
        }
    }

    /// The punctuation glyph for a character, if it has one.
    pub fn punctuation(c: char) -> Option<Self> {
        match c {
            '-' | ',' | ':' => Some(Self::Comma),
            '.' | ';' => Some(Self::FullStop),
            '!' => Some(Self::ExclamationPoint),
            '?' => Some(Self::QuestionMark),
            '(' => Some(Self::OpenParen),
            ')' => Some(Self::CloseParen),
            '<' => Some(Self::FlourishLeft),
            '>' => Some(Self::FlourishRight),
            _ => None,
        }
    }

    /// The numeral glyph for a value in 0..=11.
    pub fn numeral(value: u32) -> Option<Self> {
        u8::try_from(value)
            .ok()
            .filter(|&n| n < 12)
            .map(Self::Numeral)
    }

    /// The silme/esse form that leaves room for a tehta above.
    pub fn nuquerna(self) -> Option<Self> {
        match self {
            Self::Silme => Some(Self::SilmeNuquerna),
            Self::Esse => Some(Self::EsseNuquerna),
            _ => None,
        }
    }

    pub fn is_carrier(self) -> bool {
        matches!(self, Self::ShortCarrier | Self::LongCarrier)
    }

    pub fn is_punctuation(self) -> bool {
        matches!(
            self,
            Self::Comma
                | Self::FullStop
                | Self::ExclamationPoint
                | Self::QuestionMark
                | Self::OpenParen
                | Self::CloseParen
                | Self::FlourishLeft
                | Self::FlourishRight
        )
    }

    pub fn is_numeral(self) -> bool {
        matches!(self, Self::Numeral(_))
    }

    /// Letters are everything that is neither punctuation nor a numeral.
    pub fn is_letter(self) -> bool {
        !self.is_punctuation() && !self.is_numeral()
    }
}

impl From<Tengwa> for &'static str {
    fn from(tengwa: Tengwa) -> Self {
        tengwa.name()
    }
}

impl std::fmt::Display for Tengwa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
