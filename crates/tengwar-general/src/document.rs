// Text-level driver.
//
// Splits text on whitespace, normalizes each word, consults the idioms and
// falls back to column-by-column matching. English "of the" spans two
// words, so the driver looks one word ahead after "of".

use tengwar_core::character::{is_break, is_punctuation};
use tengwar_core::column::{ColumnBuilder, Word};
use tengwar_core::glyph::Tengwa;

use crate::engine::transcribe_piecewise;
use crate::idiom::{self, Of, The};
use crate::options::Options;

/// Error type for text transcription.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranscribeError {
    /// Strict mode found a word that could not be transcribed cleanly.
    #[error("cannot transcribe {word:?}: {message}")]
    Diagnostic { word: String, message: String },
}

/// A normalized word with punctuation peeled off both ends.
struct Split {
    normalized: String,
    lead: usize,
    trail: usize,
}

impl Split {
    fn new(raw: &str, options: &Options) -> Self {
        let normalized = options.normalizer.normalize(raw);
        let lead = normalized.chars().take_while(|&c| is_punctuation(c)).count();
        let rest = normalized.chars().count() - lead;
        let trail = normalized
            .chars()
            .rev()
            .take(rest)
            .take_while(|&c| is_punctuation(c))
            .count();
        Self {
            normalized,
            lead,
            trail,
        }
    }

    fn leading(&self) -> String {
        self.normalized.chars().take(self.lead).collect()
    }

    fn core(&self) -> String {
        let len = self.normalized.chars().count();
        self.normalized
            .chars()
            .skip(self.lead)
            .take(len - self.lead - self.trail)
            .collect()
    }

    fn trailing(&self) -> String {
        let len = self.normalized.chars().count();
        self.normalized.chars().skip(len - self.trail).collect()
    }
}

fn punctuation_columns(text: &str, options: &Options) -> Vec<ColumnBuilder> {
    text.chars()
        .filter_map(|c| {
            let tengwa = Tengwa::punctuation(c)?;
            Some(options.font.make_column(tengwa, &c.to_string()))
        })
        .collect()
}

fn finish(source: impl Into<String>, columns: Vec<ColumnBuilder>) -> Word {
    Word::new(source, columns.into_iter().map(ColumnBuilder::build).collect())
}

/// Transcribe a single word.
///
/// The word is normalized and looked up as an idiom (ignoring punctuation
/// at either end) before it is matched column by column. Breaks inside
/// `word` are skipped.
pub fn transcribe_word(word: &str, options: &Options) -> Word {
    let split = Split::new(word, options);
    let columns = match idiom::lookup(&split.core(), options) {
        Some(idiom) => {
            let mut columns = punctuation_columns(&split.leading(), options);
            columns.extend(idiom);
            columns.extend(punctuation_columns(&split.trailing(), options));
            columns
        }
        None => transcribe_piecewise(&split.normalized, options),
    };
    finish(word, columns)
}

/// Try the English "of the" pair at the head of `words`.
fn of_the(words: &[&str], options: &Options) -> Option<Word> {
    let [first, second, ..] = words else {
        return None;
    };
    let of = Split::new(first, options);
    if of.trail > 0 {
        return None;
    }
    let of_form = Of::parse(&of.core())?;
    let the = Split::new(second, options);
    if the.lead > 0 {
        return None;
    }
    let the_form = The::parse(&the.core())?;
    tracing::debug!(of = *first, the = *second, "idiom");

    let mut columns = punctuation_columns(&of.leading(), options);
    columns.extend(idiom::of_the(of_form, the_form, options.font));
    columns.extend(punctuation_columns(&the.trailing(), options));
    Some(finish(format!("{first} {second}"), columns))
}

/// Transcribe text into words.
///
/// Words are separated by whitespace. In strict mode the first diagnostic
/// is returned as an error; otherwise diagnostics stay on their columns.
pub fn transcribe(text: &str, options: &Options) -> Result<Vec<Word>, TranscribeError> {
    let words: Vec<&str> = text
        .split(|c: char| is_break(Some(c)))
        .filter(|word| !word.is_empty())
        .collect();

    let mut out = Vec::with_capacity(words.len());
    let mut i = 0;
    while i < words.len() {
        let pair = if options.is_english() {
            of_the(&words[i..], options)
        } else {
            None
        };
        let word = match pair {
            Some(word) => {
                i += 2;
                word
            }
            None => {
                i += 1;
                transcribe_word(words[i - 1], options)
            }
        };
        if let Some(message) = word.diagnostics().next() {
            tracing::debug!(word = word.source(), diagnostic = message, "diagnostic");
            if options.strict {
                return Err(TranscribeError::Diagnostic {
                    word: word.source().to_string(),
                    message: message.to_string(),
                });
            }
        }
        out.push(word);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::IDENTITY;
    use crate::options::Language;

    fn render(words: &[Word]) -> Vec<String> {
        words.iter().map(Word::to_string).collect()
    }

    fn english(text: &str) -> Vec<String> {
        render(&transcribe(text, &Options::for_language(Language::English)).unwrap())
    }

    // -- splitting tests --

    #[test]
    fn split_peels_punctuation() {
        let split = Split::new("(the),", &Options::default());
        assert_eq!(split.leading(), "(");
        assert_eq!(split.core(), "the");
        assert_eq!(split.trailing(), "),");
    }

    #[test]
    fn split_all_punctuation() {
        let split = Split::new("?!", &Options::default());
        assert_eq!(split.leading(), "?!");
        assert_eq!(split.core(), "");
        assert_eq!(split.trailing(), "");
    }

    #[test]
    fn words_split_on_any_whitespace() {
        let words = transcribe("l\tl\n l", &Options::default()).unwrap();
        assert_eq!(render(&words), ["lambe", "lambe", "lambe"]);
        assert_eq!(words[0].source(), "l");
    }

    #[test]
    fn empty_text_has_no_words() {
        assert!(transcribe("  ", &Options::default()).unwrap().is_empty());
    }

    // -- idiom tests --

    #[test]
    fn of_the_fuses_across_words() {
        assert_eq!(english("of the"), ["umbar-extended:tilde-below"]);
        assert_eq!(english("of'  the''"), ["umbar-extended:o?;thule:i-below"]);
    }

    #[test]
    fn of_the_keeps_source() {
        let words = transcribe("of the", &Options::for_language(Language::English)).unwrap();
        assert_eq!(words[0].source(), "of the");
    }

    #[test]
    fn of_alone() {
        assert_eq!(english("of"), ["umbar-extended?"]);
        assert_eq!(english("of and"), ["umbar-extended?", "ando:tilde-above"]);
    }

    #[test]
    fn punctuation_between_of_and_the_blocks_the_pair() {
        assert_eq!(english("of, the"), ["umbar-extended?;comma", "ando-extended?"]);
    }

    #[test]
    fn idioms_keep_trailing_punctuation() {
        assert_eq!(english("the."), ["ando-extended?;full-stop"]);
        assert_eq!(english("of the!"), ["umbar-extended:tilde-below;exclamation-point"]);
    }

    #[test]
    fn idioms_match_after_normalization() {
        // Lookup is exact; the normalizer lowercases first.
        assert_eq!(english("The"), ["ando-extended?"]);
        let raw = Options::for_language(Language::English).with_normalizer(&IDENTITY);
        let word = transcribe_word("The", &raw);
        assert_ne!(word.columns()[0].tengwa(), Tengwa::AndoExtended);
    }

    #[test]
    fn general_words_are_not_english_idioms() {
        let words = transcribe("of", &Options::default()).unwrap();
        assert_eq!(render(&words), ["formen:o"]);
    }

    // -- strict tests --

    #[test]
    fn diagnostics_stay_on_columns_by_default() {
        let words = transcribe("l@", &Options::default()).unwrap();
        assert!(words[0].has_diagnostics());
    }

    #[test]
    fn strict_mode_fails_on_the_first_diagnostic() {
        let options = Options::default().with_strict(true);
        let err = transcribe("la l@", &options).unwrap_err();
        match err {
            TranscribeError::Diagnostic { word, message } => {
                assert_eq!(word, "l@");
                assert!(message.contains('@'));
            }
        }
    }
}
