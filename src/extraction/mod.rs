//! extraction — candidate values from free-form text.
//!
//! Purpose
//! -------
//! Bridge document-parsing collaborators (which hand over plain text) and the
//! statistical core (which expects an ordered slice of numbers).
//!
//! Key behaviors
//! -------------
//! - [`NumberExtractor`] drops metadata lines, tokenizes numbers, and applies
//!   the relevance filter configured by [`ExtractorOptions`].
//! - [`extract_numbers`] is the default-configured shortcut.
//!
//! Downstream usage
//! ----------------
//! - `corpus::NumericCorpus::from_text` wraps the extracted values with
//!   their positions in the extracted sequence.

pub mod number_extractor;
pub mod options;

pub use self::number_extractor::{NumberExtractor, extract_numbers};
pub use self::options::{DEFAULT_KEYWORDS, ExtractorOptions};
