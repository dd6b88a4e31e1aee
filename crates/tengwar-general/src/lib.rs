//! Tengwar General Use mode transcription.
//!
//! Turns Latin-alphabet text into columns of Tengwar glyph descriptors,
//! following the phonetic conventions of the General Use mode (with English
//! and Black Speech variants).
//!
//! - [`transcribe`] handles running text and returns one [`Word`] per
//!   whitespace-separated word.
//! - [`transcribe_word`] handles a single word.
//! - [`Options`] selects the language flavor and the orthographic choices.
//!
//! A word is read column by column: an optional vowel (tehta), an optional
//! host consonant (tengwa), then the marks that fold into the host from the
//! letters after it. Ambiguous spellings are steered with primes (`'`):
//! `s` is silme, `s'` the turned silme.
//!
//! [`Word`]: tengwar_core::Word

mod cursor;
mod document;
mod engine;
mod following;
mod idiom;
pub mod normalize;
pub mod numerals;
pub mod options;
mod tehta;
mod tengwa;

pub use document::{TranscribeError, transcribe, transcribe_word};
pub use normalize::{CANONICAL, Canonical, IDENTITY, Identity, Normalizer};
pub use options::{Language, Options, OptionsError};
