// Transcription options.
//
// Options are plain data: every field is public, `Default` gives the
// conventional General Use settings, and the `with_*` setters allow
// chaining from a default.

use std::fmt;
use std::str::FromStr;

use tengwar_core::font::{ANNATAR, Font};

use crate::normalize::{CANONICAL, Normalizer};

/// Error type for option parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    /// A language name that no mode variant is registered under.
    #[error("unknown language: {0:?} (expected general, english or black-speech)")]
    UnknownLanguage(String),
}

/// Which flavor of the General Use mode to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// Sindarin/Quenya-oriented defaults.
    #[default]
    General,
    /// English spelling: silent final e, long-vowel carriers, idioms for
    /// common short words.
    English,
    /// The Black Speech inscription style of the One Ring.
    BlackSpeech,
}

impl Language {
    pub fn name(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::English => "english",
            Self::BlackSpeech => "black-speech",
        }
    }
}

impl FromStr for Language {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "general" => Ok(Self::General),
            "english" => Ok(Self::English),
            "black-speech" | "blackSpeech" => Ok(Self::BlackSpeech),
            other => Err(OptionsError::UnknownLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Configuration for the General Use transcriber.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Glyph provider deciding which marks fit where.
    pub font: &'static dyn Font,

    /// Input normalization applied to each word before matching.
    pub normalizer: &'static dyn Normalizer,

    pub language: Language,

    /// Swap the o and u curls. Always on for Black Speech.
    pub reverse_curls: bool,

    /// Swap the i dot and the e stroke.
    pub swap_dot_slash: bool,

    /// Use óre for r before any consonant, not only word-finally.
    /// Always on for Black Speech.
    pub medial_ore: bool,

    /// Read plain `ch` as calma (as in "church"); `ch'` then gives hwesta.
    pub no_ach_laut: bool,

    /// Write s after a vowel as a hook below the carrier.
    pub s_hook: bool,

    /// Read `ts` as calma and `dz` as anga.
    pub tsdz: bool,

    /// Mark doubled nasals with a bar below instead of above.
    pub double_nasals_with_tilde_below: bool,

    /// Mark numerals with the duodecimal line instead of the decimal dot.
    pub duodecimal: bool,

    /// Turn diagnostics into errors when transcribing text.
    pub strict: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            font: &ANNATAR,
            normalizer: &CANONICAL,
            language: Language::General,
            reverse_curls: false,
            swap_dot_slash: false,
            medial_ore: false,
            no_ach_laut: false,
            s_hook: false,
            tsdz: false,
            double_nasals_with_tilde_below: false,
            duodecimal: false,
            strict: false,
        }
    }
}

impl Options {
    /// Default options for a language.
    pub fn for_language(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn is_english(&self) -> bool {
        self.language == Language::English
    }

    pub fn is_black_speech(&self) -> bool {
        self.language == Language::BlackSpeech
    }

    /// Whether curls are reversed, including the Black Speech default.
    pub fn reverses_curls(&self) -> bool {
        self.reverse_curls || self.is_black_speech()
    }

    /// Whether medial r uses óre, including the Black Speech default.
    pub fn uses_medial_ore(&self) -> bool {
        self.medial_ore || self.is_black_speech()
    }

    // -- Builder-style setters --

    pub fn with_font(mut self, font: &'static dyn Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_normalizer(mut self, normalizer: &'static dyn Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_reverse_curls(mut self, on: bool) -> Self {
        self.reverse_curls = on;
        self
    }

    pub fn with_swap_dot_slash(mut self, on: bool) -> Self {
        self.swap_dot_slash = on;
        self
    }

    pub fn with_medial_ore(mut self, on: bool) -> Self {
        self.medial_ore = on;
        self
    }

    pub fn with_no_ach_laut(mut self, on: bool) -> Self {
        self.no_ach_laut = on;
        self
    }

    pub fn with_s_hook(mut self, on: bool) -> Self {
        self.s_hook = on;
        self
    }

    pub fn with_tsdz(mut self, on: bool) -> Self {
        self.tsdz = on;
        self
    }

    pub fn with_double_nasals_with_tilde_below(mut self, on: bool) -> Self {
        self.double_nasals_with_tilde_below = on;
        self
    }

    pub fn with_duodecimal(mut self, on: bool) -> Self {
        self.duodecimal = on;
        self
    }

    pub fn with_strict(mut self, on: bool) -> Self {
        self.strict = on;
        self
    }
}
