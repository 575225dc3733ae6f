//! `cbt_core` is the core library for the `cbt` asset compiler. It bundles a
//! project's locale string files and HTML templates into importable ES
//! modules, and generates a pseudo-locale (`eo`) for internationalization
//! testing.
//!
//! ## Processing Pipeline
//!
//! ```text
//! locales/strings_*.json
//!   → Discovery (glob patterns, locale tag from the file name)
//!   → Assembler (default-locale key order, fallbacks, `eo` / `ke` synthesis)
//!   → Locale module (single module or one per locale)
//!
//! *.html
//!   → Discovery
//!   → Template compiler (import hoisting, whitespace collapsing, name checks)
//!   → Template module (`dom` / `str` lookups, optionally importing the locales)
//! ```
//!
//! ## Pseudo-locale
//!
//! Every entry of the default locale is turned into
//! `[<lookalike text><filler><suffix>]`:
//!
//! - the key is hashed with [`key_hash`];
//! - [`scan`] walks the value, leaving `<markup>`, `${name}` and `%{name}`
//!   untouched, and [`substitute`] swaps each remaining letter for a
//!   lookalike chosen by the hash;
//! - [`expand`] pads the text to a length bucket with random filler;
//! - a non-Latin suffix from [`MIXED_LANGUAGE_SUFFIXES`] is chosen by the
//!   hash.
//!
//! Only the filler is random, and it comes from a caller supplied
//! [`rand::RngCore`], so seeded builds are byte-identical.
//!
//! ## Quick Start
//!
//! ```rust
//! use cbt_core::AssembleOptions;
//! use cbt_core::LocaleSource;
//! use cbt_core::assemble;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let sources = [
//! 	LocaleSource::new("en", "locales/strings_en.json", r#"{"OK":"Ok","BYE":"Bye"}"#),
//! 	LocaleSource::new("fr", "locales/strings_fr.json", r#"{"OK":"D'accord"}"#),
//! ];
//! let mut rng = StdRng::seed_from_u64(7);
//! let bundle = assemble(&sources, &AssembleOptions::default(), &mut rng).unwrap();
//!
//! assert_eq!(bundle.keys, ["OK", "BYE"]);
//! assert_eq!(bundle.table("fr").unwrap()["BYE"], "-*Bye*-");
//! assert!(bundle.table("eo").unwrap()["OK"].as_str().unwrap().starts_with('['));
//! ```

pub use assemble::*;
pub use compile::*;
pub use config::*;
pub use error::*;
pub use expand::expand;
pub use hash::*;
pub use pseudo::*;
pub use scanner::*;
pub use substitute::*;
pub use table::*;
pub use templates::CompiledTemplate;

mod assemble;
mod compile;
pub mod config;
pub mod discover;
#[allow(unused_assignments)]
mod error;
pub mod expand;
mod hash;
pub mod locales;
mod pseudo;
mod scanner;
mod substitute;
mod table;
pub mod templates;
pub mod writer;

#[cfg(test)]
mod __fixtures;
