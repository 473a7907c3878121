//! libfinglish crate root
//!
//! Turns a Finglish token (Persian typed in Latin letters) into a short,
//! ranked list of Farsi-script suggestions. The `Engine` runs the stages in
//! priority order over the shared `finglish-core` lexicon types:
//!
//! colloquial table → lexicon → compound table → morphology → positional
//! transliteration → spelling variants → simple transliteration → loanword
//! endings.
//!
//! ```
//! use libfinglish::{seed_lexicon, Engine};
//!
//! let engine = Engine::new(seed_lexicon().unwrap());
//! let out = engine.get_suggestions("salam");
//! assert_eq!(out[0], "سلام");
//! assert!(out.len() <= 5);
//! ```
//!
//! Public API exported here:
//! - `Engine` and `FinglishConfig`
//! - the individual stages (`transliterate`, `match_compound`, `variants`, ...)
//! - committed-text helpers (`insert_zone_joiner`, `convert_to_persian_numbers`)

pub mod cleanup;
pub mod colloquial;
pub mod compound;
pub mod config;
pub mod engine;
pub mod morphology;
pub mod seed;
pub mod tables;
pub mod transliterate;
pub mod typo;
pub mod variants;
pub mod zwnj;

pub use finglish_core::{Candidate, Lexicon, LexiconClient, Stage};

pub use cleanup::cleanup;
pub use colloquial::colloquial_form;
pub use compound::match_compound;
pub use config::FinglishConfig;
pub use engine::Engine;
pub use morphology::{analyze, morphological_transliterate, Analysis, WordForm};
pub use seed::seed_lexicon;
pub use transliterate::{simple_transliterate, transliterate, transliterate_loanword};
pub use typo::{correct, Normalized};
pub use variants::{variants, variants_with_limit};
pub use zwnj::{convert_to_persian_numbers, insert_zone_joiner, should_insert_zone_joiner, ZWNJ};
