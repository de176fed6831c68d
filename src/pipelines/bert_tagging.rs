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

//! # Pretrained Part Of Speech tagger
//! Annotator backed by rust-bert's MobileBERT POS model (English, Penn Treebank labels). The
//! weights are downloaded and cached on first use. Requires the `bert` feature and libtorch.
//!
//! ```no_run
//! # fn main() -> anyhow::Result<()> {
//! use pos_colorizer::pipelines::bert_tagging::BertPOSAnnotator;
//! use pos_colorizer::pipelines::common::Annotator;
//!
//! let annotator = BertPOSAnnotator::new(Default::default())?;
//! let tokens = annotator.annotate("My name is Amélie.")?;
//! # Ok(())
//! # }
//! ```

use crate::common::error::TaggerError;
use crate::pipelines::common::{check_text_length, is_whitespace, Annotator, PartOfSpeech, Token};
use rust_bert::pipelines::pos_tagging::{POSConfig, POSModel, POSTag};
use rust_tokenizers::{Offset, OffsetSize};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// # Annotator wrapping a pretrained transformer POS model
pub struct BertPOSAnnotator {
    model: Mutex<POSModel>,
}

impl BertPOSAnnotator {
    /// Build a new `BertPOSAnnotator`, loading (and downloading if needed) the model weights
    ///
    /// # Arguments
    ///
    /// * `pos_config` - rust-bert `POSConfig` with the model resources and device
    pub fn new(pos_config: POSConfig) -> Result<BertPOSAnnotator, TaggerError> {
        let model = POSModel::new(pos_config)?;
        Ok(BertPOSAnnotator {
            model: Mutex::new(model),
        })
    }
}

impl Annotator for BertPOSAnnotator {
    fn annotate(&self, text: &str) -> Result<Vec<Token>, TaggerError> {
        check_text_length(text.len())?;
        if text.is_empty() {
            return Ok(vec![]);
        }
        let tags = lock_model(&self.model)
            .predict(&[text])
            .pop()
            .unwrap_or_default();
        Ok(align_tags(text, &tags))
    }
}

/// Locks the model, recovering from poisoning: a panic inside `predict` leaves no partial state.
fn lock_model<T>(model: &Mutex<T>) -> MutexGuard<'_, T> {
    model.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Places predicted words back onto the text. Words that cannot be found are skipped, text
/// between words becomes whitespace tokens or `X` tokens.
pub(crate) fn align_tags(text: &str, tags: &[POSTag]) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(2 * tags.len());
    let mut cursor = 0;
    for tag in tags {
        if tag.word.is_empty() {
            continue;
        }
        let Some(relative_begin) = text[cursor..].find(tag.word.as_str()) else {
            continue;
        };
        let begin = cursor + relative_begin;
        let end = begin + tag.word.len();
        push_gap(text, cursor, begin, &mut tokens);
        tokens.push(Token::new(
            text,
            Offset::new(begin as OffsetSize, end as OffsetSize),
            PartOfSpeech::from_penn_treebank(&tag.label, &tag.word),
        ));
        cursor = end;
    }
    push_gap(text, cursor, text.len(), &mut tokens);
    tokens
}

fn push_gap(text: &str, begin: usize, end: usize, tokens: &mut Vec<Token>) {
    let mut run_start = begin;
    let mut run_is_whitespace = None;
    for (position, character) in text[begin..end].char_indices() {
        let current = character.is_whitespace();
        if let Some(previous) = run_is_whitespace {
            if previous != current {
                push_run(text, run_start, begin + position, tokens);
                run_start = begin + position;
            }
        }
        run_is_whitespace = Some(current);
    }
    if run_start < end {
        push_run(text, run_start, end, tokens);
    }
}

fn push_run(text: &str, begin: usize, end: usize, tokens: &mut Vec<Token>) {
    if is_whitespace(&text[begin..end]) {
        tokens.push(Token::whitespace(text, begin, end));
    } else {
        tokens.push(Token::new(
            text,
            Offset::new(begin as OffsetSize, end as OffsetSize),
            PartOfSpeech::X,
        ));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn pos_tag(word: &str, label: &str) -> POSTag {
        POSTag {
            word: word.to_string(),
            score: 1.0,
            label: label.to_string(),
        }
    }

    #[test]
    fn predicted_words_are_aligned_onto_the_text() {
        let text = "My name  is\nAmélie ~";
        let tags = [
            pos_tag("My", "PRP$"),
            pos_tag("name", "NN"),
            pos_tag("is", "VBZ"),
            pos_tag("Amélie", "NNP"),
        ];
        let tokens = align_tags(text, &tags);
        let output = tokens
            .iter()
            .map(|token| (token.text.as_str(), token.category))
            .collect::<Vec<_>>();
        assert_eq!(
            output,
            [
                ("My", PartOfSpeech::Pron),
                (" ", PartOfSpeech::Space),
                ("name", PartOfSpeech::Noun),
                ("  ", PartOfSpeech::Space),
                ("is", PartOfSpeech::Aux),
                ("\n", PartOfSpeech::Space),
                ("Amélie", PartOfSpeech::Propn),
                (" ", PartOfSpeech::Space),
                ("~", PartOfSpeech::X),
            ]
        );
    }

    #[test]
    fn poisoned_model_lock_is_recovered() {
        let model = Mutex::new(vec![1, 2, 3]);
        let outcome = std::panic::catch_unwind(|| {
            let _guard = model.lock().unwrap();
            panic!("prediction failed");
        });
        assert!(outcome.is_err());
        assert!(model.is_poisoned());

        assert_eq!(*lock_model(&model), [1, 2, 3]);
        assert_eq!(lock_model(&model).len(), 3);
    }

    #[test]
    #[ignore] // downloads the MobileBERT weights
    fn pretrained_model_reconstructs_input() -> anyhow::Result<()> {
        let annotator = BertPOSAnnotator::new(Default::default())?;
        let text = "A liter of milk costs 0.95 Euros!";
        let tokens = annotator.annotate(text)?;
        let reconstructed: String = tokens.iter().map(|token| token.text.as_str()).collect();
        assert_eq!(reconstructed, text);
        Ok(())
    }
}
