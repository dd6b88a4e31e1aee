//! Shared types for Tengwar transcription.
//!
//! - [`glyph`] -- The closed vocabulary of base glyphs
//! - [`mark`] -- Tehtar and the marks that fill a column's slots
//! - [`column`] -- Column builder, finished columns and words
//! - [`font`] -- Glyph providers and their capability rules
//! - [`character`] -- Primitive character classifiers

pub mod character;
pub mod column;
pub mod font;
pub mod glyph;
pub mod mark;

pub use column::{Column, ColumnBuilder, Word};
pub use font::{ANNATAR, Annatar, Font};
pub use glyph::Tengwa;
pub use mark::{Above, Below, Following, Tehta};
