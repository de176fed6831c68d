// Copyright 2026 The pos-colorizer Authors
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Part-of-speech coloring pipeline
//! Tags a text with an `Annotator` and colors every token with a `ColorMap`.
//!
//! ```
//! # fn main() -> anyhow::Result<()> {
//! use pos_colorizer::pipelines::pos_coloring::POSColoringPipeline;
//!
//! let pipeline = POSColoringPipeline::new(Default::default())?;
//! let output = pipeline.predict("The cat runs.")?;
//! # assert_eq!(output.len(), 6);
//! # Ok(())
//! # }
//! ```
//! Output: \
//! ```no_run
//! # use pos_colorizer::pipelines::pos_coloring::ColoredWord;
//! # let output =
//! [
//!     ColoredWord { text: String::from("The"), pos: String::from("DET"), color: String::from("#66bb66") },
//!     ColoredWord { text: String::from(" "), pos: String::from("SPACE"), color: String::from("") },
//!     ColoredWord { text: String::from("cat"), pos: String::from("NOUN"), color: String::from("#ff4444") },
//!     ColoredWord { text: String::from(" "), pos: String::from("SPACE"), color: String::from("") },
//!     ColoredWord { text: String::from("runs"), pos: String::from("VERB"), color: String::from("#44cc44") },
//!     ColoredWord { text: String::from("."), pos: String::from("PUNCT"), color: String::from("#000000") },
//! ]
//! # ;
//! ```

use crate::common::error::TaggerError;
use crate::pipelines::colorization::{AnnotatedToken, ColorMap};
use crate::pipelines::common::Annotator;
use crate::pipelines::pos_tagging::{POSConfig, POSModel};
use crate::resources::ResourceProvider;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// # Colored word, as sent to clients
pub struct ColoredWord {
    /// Exact substring of the input
    pub text: String,
    /// Part-of-speech label (`SPACE` for whitespace)
    pub pos: String,
    /// Display color, possibly empty
    pub color: String,
}

impl From<AnnotatedToken> for ColoredWord {
    fn from(annotated: AnnotatedToken) -> Self {
        ColoredWord {
            pos: annotated.token.category.to_string(),
            text: annotated.token.text,
            color: annotated.color,
        }
    }
}

#[derive(Default)]
/// # Configuration for the coloring pipeline
pub struct POSColoringConfig {
    /// Tagger configuration
    pub pos_config: POSConfig,
    /// Color table file, the default table is used if `None`
    pub color_resource: Option<Box<dyn ResourceProvider>>,
}

/// # Tagging and coloring pipeline
pub struct POSColoringPipeline {
    annotator: Box<dyn Annotator>,
    color_map: ColorMap,
}

impl POSColoringPipeline {
    /// Build a new `POSColoringPipeline` with the built-in lexicon tagger
    ///
    /// # Arguments
    ///
    /// * `config` - `POSColoringConfig` holding the tagger configuration and color table resource
    pub fn new(config: POSColoringConfig) -> Result<POSColoringPipeline, TaggerError> {
        let annotator = POSModel::new(config.pos_config)?;
        let color_map = match &config.color_resource {
            Some(color_resource) => ColorMap::from_resource(color_resource.as_ref())?,
            None => ColorMap::default(),
        };
        Ok(POSColoringPipeline::new_with_annotator(
            Box::new(annotator),
            color_map,
        ))
    }

    /// Build a new `POSColoringPipeline` from any annotator.
    ///
    /// # Arguments
    ///
    /// * `annotator` - tagger splitting and tagging the texts
    /// * `color_map` - color table
    pub fn new_with_annotator(
        annotator: Box<dyn Annotator>,
        color_map: ColorMap,
    ) -> POSColoringPipeline {
        POSColoringPipeline {
            annotator,
            color_map,
        }
    }

    pub fn color_map(&self) -> &ColorMap {
        &self.color_map
    }

    /// Tags and colors a text.
    ///
    /// # Arguments
    ///
    /// * `text` - text to tag, possibly empty
    ///
    /// # Returns
    ///
    /// * `Vec<ColoredWord>` one entry per token, in input order
    pub fn predict(&self, text: &str) -> Result<Vec<ColoredWord>, TaggerError> {
        Ok(self
            .annotate(text)?
            .into_iter()
            .map(ColoredWord::from)
            .collect())
    }

    /// Tags and colors a text, keeping the full token information
    pub fn annotate(&self, text: &str) -> Result<Vec<AnnotatedToken>, TaggerError> {
        let tokens = self.annotator.annotate(text)?;
        Ok(self.color_map.annotate(tokens))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::pipelines::common::{PartOfSpeech, Token};
    use rust_tokenizers::Offset;

    struct FailingAnnotator;

    impl Annotator for FailingAnnotator {
        fn annotate(&self, _text: &str) -> Result<Vec<Token>, TaggerError> {
            Err(TaggerError::ModelError("model not loaded".to_string()))
        }
    }

    struct SingleTokenAnnotator;

    impl Annotator for SingleTokenAnnotator {
        fn annotate(&self, text: &str) -> Result<Vec<Token>, TaggerError> {
            if text.is_empty() {
                return Ok(vec![]);
            }
            Ok(vec![Token::new(
                text,
                Offset::new(0, text.len() as u32),
                PartOfSpeech::Intj,
            )])
        }
    }

    #[test]
    fn annotator_errors_are_propagated() {
        let pipeline =
            POSColoringPipeline::new_with_annotator(Box::new(FailingAnnotator), ColorMap::default());
        assert!(matches!(
            pipeline.predict("anything"),
            Err(TaggerError::ModelError(_))
        ));
    }

    #[test]
    fn annotators_are_swappable() -> anyhow::Result<()> {
        let color_map = ColorMap::new(vec![], "#123456");
        let pipeline =
            POSColoringPipeline::new_with_annotator(Box::new(SingleTokenAnnotator), color_map);
        assert_eq!(
            pipeline.predict("hooray")?,
            [ColoredWord {
                text: "hooray".to_string(),
                pos: "INTJ".to_string(),
                color: "#123456".to_string(),
            }]
        );
        Ok(())
    }
}
