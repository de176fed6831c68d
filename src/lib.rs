//! Part-of-speech colorizer for English text.
//!
//! The crate tags every token of a text with its universal part-of-speech category and maps
//! the categories to display colors. It ships:
//! - a whitespace-preserving tokenizer: concatenating the token texts reproduces the input,
//! - a deterministic lexicon tagger decoding each sentence with the Viterbi algorithm,
//! - an optional pretrained MobileBERT tagger (`bert` feature, requires libtorch),
//! - a configurable category-to-color table,
//! - an HTTP service (axum) with an interactive page tagging text as it is typed.
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> anyhow::Result<()> {
//! use pos_colorizer::pipelines::pos_coloring::POSColoringPipeline;
//!
//! let pipeline = POSColoringPipeline::new(Default::default())?;
//! for word in pipeline.predict("The cat runs.")? {
//!     println!("{:?} {} {}", word.text, word.pos, word.color);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration files
//!
//! Color tables and user lexicons are JSON files loaded through a `ResourceProvider`:
//!
//! ```no_run
//! # fn main() -> anyhow::Result<()> {
//! use pos_colorizer::pipelines::colorization::ColorMap;
//! use pos_colorizer::pipelines::pos_coloring::{POSColoringConfig, POSColoringPipeline};
//! use pos_colorizer::pipelines::pos_tagging::POSConfig;
//! use pos_colorizer::resources::LocalResource;
//!
//! let config = POSColoringConfig {
//!     pos_config: POSConfig::new(Some(LocalResource::from("lexicon.json")), true),
//!     color_resource: Some(Box::new(LocalResource::from("colors.json"))),
//! };
//! let pipeline = POSColoringPipeline::new(config)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Serving
//!
//! The `pos-colorizer` binary serves the page on `http://127.0.0.1:5050` by default; see
//! `pos-colorizer --help` and the `server` module.

pub mod common;
pub mod pipelines;
pub mod server;

pub use common::error::TaggerError;
pub use common::resources;
pub use common::Config;
