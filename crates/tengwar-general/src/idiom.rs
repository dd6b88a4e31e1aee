// Whole-word idioms.
//
// Some words are not transcribed letter by letter: the book spellings of a
// few names, and (in English) the abbreviations for "of", "the" and "and".
// Primes select alternate spellings of the English abbreviations.

use tengwar_core::column::ColumnBuilder;
use tengwar_core::font::Font;
use tengwar_core::glyph::Tengwa;
use tengwar_core::mark::{Below, Tehta};

use crate::options::Options;

// ---------------------------------------------------------------------------
// Book spellings
// ---------------------------------------------------------------------------

/// One column of a fixed spelling.
#[derive(Debug, Clone, Copy)]
struct Glyph {
    tengwa: Tengwa,
    above: Option<Tehta>,
    tilde_above: bool,
}

const fn plain(tengwa: Tengwa) -> Glyph {
    Glyph {
        tengwa,
        above: None,
        tilde_above: false,
    }
}

const fn with(tengwa: Tengwa, tehta: Tehta) -> Glyph {
    Glyph {
        tengwa,
        above: Some(tehta),
        tilde_above: false,
    }
}

const fn nasal(tengwa: Tengwa, tehta: Tehta) -> Glyph {
    Glyph {
        tengwa,
        above: Some(tehta),
        tilde_above: true,
    }
}

/// Spellings attested in the books that the rules would not produce.
static BOOK: &[(&str, &[Glyph])] = &[
    ("iant", &[plain(Tengwa::Yanta), nasal(Tengwa::Tinco, Tehta::A)]),
    (
        "iaur",
        &[plain(Tengwa::Yanta), with(Tengwa::Vala, Tehta::A), plain(Tengwa::Ore)],
    ),
    (
        "baranduiniant",
        &[
            plain(Tengwa::Umbar),
            with(Tengwa::Romen, Tehta::A),
            nasal(Tengwa::Ando, Tehta::A),
            with(Tengwa::Anna, Tehta::U),
            plain(Tengwa::Yanta),
            nasal(Tengwa::Anto, Tehta::A),
        ],
    ),
    (
        "ioreth",
        &[
            plain(Tengwa::Yanta),
            with(Tengwa::Romen, Tehta::O),
            with(Tengwa::Thule, Tehta::E),
        ],
    ),
    (
        "noldo",
        &[
            plain(Tengwa::Nwalme),
            with(Tengwa::Lambe, Tehta::O),
            plain(Tengwa::Ando),
            with(Tengwa::ShortCarrier, Tehta::O),
        ],
    ),
    (
        "noldor",
        &[
            plain(Tengwa::Nwalme),
            with(Tengwa::Lambe, Tehta::O),
            plain(Tengwa::Ando),
            with(Tengwa::Ore, Tehta::O),
        ],
    ),
];

fn book(word: &str, font: &'static dyn Font) -> Option<Vec<ColumnBuilder>> {
    let (_, glyphs) = BOOK.iter().find(|(spelling, _)| *spelling == word)?;
    let columns = glyphs
        .iter()
        .enumerate()
        .map(|(i, glyph)| {
            let mut column = font.make_column(glyph.tengwa, if i == 0 { word } else { "" });
            if let Some(tehta) = glyph.above {
                column = column.above(tehta, "");
            }
            if glyph.tilde_above {
                column = column.tilde_above("");
            }
            column
        })
        .collect();
    Some(columns)
}

// ---------------------------------------------------------------------------
// English abbreviations
// ---------------------------------------------------------------------------

/// Spellings of "of".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Of {
    /// `of`: extended umbar.
    Plain,
    /// `of'`: extended umbar with an o above.
    Prime,
}

/// Spellings of "the".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum The {
    /// `the`: extended ando.
    Plain,
    /// `the'`: extended ando with a dot below.
    Prime,
    /// `the''`: thule with a dot below.
    PrimePrime,
}

impl Of {
    pub(crate) fn parse(word: &str) -> Option<Self> {
        match word {
            "of" => Some(Self::Plain),
            "of'" => Some(Self::Prime),
            _ => None,
        }
    }

    fn column(self, font: &'static dyn Font) -> ColumnBuilder {
        let of = font.make_column(Tengwa::UmbarExtended, "of").varies();
        match self {
            Self::Plain => of,
            // Books disagree on whether this is an o or a u.
            Self::Prime => of.above(Tehta::O, ""),
        }
    }
}

impl The {
    pub(crate) fn parse(word: &str) -> Option<Self> {
        match word {
            "the" => Some(Self::Plain),
            "the'" => Some(Self::Prime),
            "the''" => Some(Self::PrimePrime),
            _ => None,
        }
    }

    fn column(self, font: &'static dyn Font) -> ColumnBuilder {
        match self {
            Self::Plain => font.make_column(Tengwa::AndoExtended, "the").varies(),
            Self::Prime => font
                .make_column(Tengwa::AndoExtended, "the")
                .below(Below::IBelow, "")
                .varies(),
            Self::PrimePrime => font
                .make_column(Tengwa::Thule, "th")
                .below(Below::IBelow, ""),
        }
    }
}

/// Columns for "of" followed by "the".
///
/// Plain "of the" fuses into one glyph. A primed "the" after a plain "of"
/// reads as `of` + `the'` for either number of primes.
pub(crate) fn of_the(of: Of, the: The, font: &'static dyn Font) -> Vec<ColumnBuilder> {
    match (of, the) {
        (Of::Plain, The::Plain) => vec![
            font.make_column(Tengwa::UmbarExtended, "of the")
                .tilde_below(""),
        ],
        (Of::Plain, The::Prime | The::PrimePrime) => {
            vec![of.column(font), The::Prime.column(font)]
        }
        (Of::Prime, the) => vec![of.column(font), the.column(font)],
    }
}

fn and(primes: usize, font: &'static dyn Font) -> ColumnBuilder {
    match primes {
        0 => font.make_column(Tengwa::Ando, "and").tilde_above(""),
        1 => font
            .make_column(Tengwa::Ando, "and")
            .tilde_above("")
            .below(Below::IBelow, "")
            .varies(),
        // Per-letter provenance, unlike the other forms; which is meant is unsettled.
        _ => font
            .make_column(Tengwa::Ando, "d")
            .tilde_above("n")
            .above(Tehta::A, "a"),
    }
}

fn english(word: &str, font: &'static dyn Font) -> Option<Vec<ColumnBuilder>> {
    if let Some(of) = Of::parse(word) {
        return Some(vec![of.column(font)]);
    }
    if let Some(the) = The::parse(word) {
        return Some(vec![the.column(font)]);
    }
    let columns = match word {
        "of'the" => vec![Of::Plain.column(font), The::Plain.column(font)],
        "of'the'" => vec![Of::Prime.column(font), The::Prime.column(font)],
        "and" => vec![and(0, font)],
        "and'" => vec![and(1, font)],
        "and''" => vec![and(2, font)],
        "we" => vec![
            font.make_column(Tengwa::Vala, "w"),
            font.make_column(Tengwa::ShortCarrier, "")
                .above(Tehta::E, "e")
                .varies(),
        ],
        "we'" => vec![
            font.make_column(Tengwa::Vala, "w")
                .diphthong()
                .below(Below::Y, "e"),
        ],
        _ => return None,
    };
    Some(columns)
}

/// Look up a whole normalized word, without surrounding punctuation.
pub(crate) fn lookup(word: &str, options: &Options) -> Option<Vec<ColumnBuilder>> {
    let found = if options.is_english() {
        english(word, options.font)
    } else {
        None
    };
    let found = found.or_else(|| book(word, options.font));
    if found.is_some() {
        tracing::debug!(word, language = %options.language, "idiom");
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Language;

    fn describe(columns: Vec<ColumnBuilder>) -> String {
        columns
            .into_iter()
            .map(|column| column.build().to_string())
            .collect::<Vec<_>>()
            .join(";")
    }

    fn english_lookup(word: &str) -> Option<String> {
        lookup(word, &Options::for_language(Language::English)).map(describe)
    }

    // -- book tests --

    #[test]
    fn book_spellings_apply_in_every_language() {
        let general = lookup("iant", &Options::default()).map(describe);
        assert_eq!(general.as_deref(), Some("yanta;tinco:a,tilde-above"));
        assert_eq!(
            english_lookup("noldor").as_deref(),
            Some("nwalme;lambe:o;ando;ore:o")
        );
        assert_eq!(
            english_lookup("baranduiniant").as_deref(),
            Some("umbar;romen:a;ando:a,tilde-above;anna:u;yanta;anto:a,tilde-above")
        );
    }

    #[test]
    fn book_records_the_word_once() {
        let columns = lookup("iaur", &Options::default()).unwrap();
        let first = columns[0].clone().build();
        assert_eq!(first.provenance(), ["iaur"]);
        assert!(columns[1].clone().build().provenance().is_empty());
    }

    #[test]
    fn unknown_words_miss() {
        assert!(lookup("nanta", &Options::default()).is_none());
        assert!(english_lookup("thee").is_none());
    }

    // -- English tests --

    #[test]
    fn english_idioms_need_english() {
        assert!(lookup("the", &Options::default()).is_none());
        assert!(lookup("and", &Options::for_language(Language::BlackSpeech)).is_none());
    }

    #[test]
    fn the_forms() {
        assert_eq!(english_lookup("the").as_deref(), Some("ando-extended?"));
        assert_eq!(
            english_lookup("the'").as_deref(),
            Some("ando-extended:i-below?")
        );
        assert_eq!(english_lookup("the''").as_deref(), Some("thule:i-below"));
    }

    #[test]
    fn of_forms() {
        assert_eq!(english_lookup("of").as_deref(), Some("umbar-extended?"));
        assert_eq!(english_lookup("of'").as_deref(), Some("umbar-extended:o?"));
        assert_eq!(
            english_lookup("of'the").as_deref(),
            Some("umbar-extended?;ando-extended?")
        );
        assert_eq!(
            english_lookup("of'the'").as_deref(),
            Some("umbar-extended:o?;ando-extended:i-below?")
        );
    }

    #[test]
    fn and_forms() {
        assert_eq!(english_lookup("and").as_deref(), Some("ando:tilde-above"));
        assert_eq!(
            english_lookup("and'").as_deref(),
            Some("ando:tilde-above,i-below?")
        );
        assert_eq!(english_lookup("and''").as_deref(), Some("ando:a,tilde-above"));
    }

    #[test]
    fn doubly_primed_and_is_spelled_per_letter() {
        let english = Options::for_language(Language::English);
        let columns = lookup("and''", &english).unwrap();
        assert_eq!(columns[0].clone().build().provenance(), ["d", "n", "a"]);
        let columns = lookup("and'", &english).unwrap();
        assert_eq!(columns[0].clone().build().provenance(), ["and"]);
    }

    #[test]
    fn we_forms() {
        assert_eq!(english_lookup("we").as_deref(), Some("vala;short-carrier:e?"));
        assert_eq!(english_lookup("we'").as_deref(), Some("vala:y"));
    }

    #[test]
    fn of_the_combinations() {
        let font = Options::default().font;
        assert_eq!(
            describe(of_the(Of::Plain, The::Plain, font)),
            "umbar-extended:tilde-below"
        );
        assert_eq!(
            describe(of_the(Of::Plain, The::PrimePrime, font)),
            "umbar-extended?;ando-extended:i-below?"
        );
        assert_eq!(
            describe(of_the(Of::Prime, The::PrimePrime, font)),
            "umbar-extended:o?;thule:i-below"
        );
    }
}
