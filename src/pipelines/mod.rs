//! # Ready-to-use tagging and coloring pipelines
//!
//! End-to-end pipelines turning raw English text into colored tokens. The following capabilities
//! are currently available:
//!
//! #### 1. Tokenization
//! Whitespace-preserving split of a text into words, punctuation marks and whitespace runs
//! (see `tokenizer`).
//!
//! #### 2. Part of Speech tagging
//! Assigns a universal part-of-speech tag to every token. The default model is a lexicon tagger
//! with Viterbi decoding (see `pos_tagging`); a pretrained MobileBERT tagger is available with the
//! `bert` feature (see `bert_tagging`).
//!
//! ```
//! use pos_colorizer::pipelines::pos_tagging::POSModel;
//! # fn main() -> anyhow::Result<()> {
//! let pos_model = POSModel::new(Default::default())?;
//! let output = pos_model.predict(&["My name is Bob"])?;
//! # Ok(())
//! # }
//! ```
//! Output: \
//! ```no_run
//! # use pos_colorizer::pipelines::common::{PartOfSpeech, Token};
//! # use rust_tokenizers::Offset;
//! # let output =
//! [
//!     Token { text: String::from("My"), category: PartOfSpeech::Pron, is_whitespace: false, offset: Offset::new(0, 2) },
//!     Token { text: String::from(" "), category: PartOfSpeech::Space, is_whitespace: true, offset: Offset::new(2, 3) },
//!     Token { text: String::from("name"), category: PartOfSpeech::Noun, is_whitespace: false, offset: Offset::new(3, 7) },
//!     Token { text: String::from(" "), category: PartOfSpeech::Space, is_whitespace: true, offset: Offset::new(7, 8) },
//!     Token { text: String::from("is"), category: PartOfSpeech::Aux, is_whitespace: false, offset: Offset::new(8, 10) },
//!     Token { text: String::from(" "), category: PartOfSpeech::Space, is_whitespace: true, offset: Offset::new(10, 11) },
//!     Token { text: String::from("Bob"), category: PartOfSpeech::Propn, is_whitespace: false, offset: Offset::new(11, 14) },
//! ]
//! # ;
//! ```
//!
//! #### 3. Colorization
//! Maps part-of-speech labels to display colors, with a configurable fallback (see `colorization`).
//!
//! #### 4. Part of Speech coloring
//! Tagging followed by colorization, producing the `{text, pos, color}` records served over HTTP
//! (see `pos_coloring`).
//!
//! ```
//! use pos_colorizer::pipelines::pos_coloring::POSColoringPipeline;
//! # fn main() -> anyhow::Result<()> {
//! let pipeline = POSColoringPipeline::new(Default::default())?;
//! let output = pipeline.predict("Hello, world!")?;
//! # Ok(())
//! # }
//! ```

pub mod colorization;
pub mod common;
pub mod lexicon;
pub mod pos_coloring;
pub mod pos_tagging;
pub mod tokenizer;

#[cfg(feature = "bert")]
pub mod bert_tagging;
