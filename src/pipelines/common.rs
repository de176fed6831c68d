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

//! # Common blocks shared by the tagging pipelines
//!
//! - `PartOfSpeech`: the fixed tag vocabulary every annotator draws from
//! - `Token`: a span of the input text with its tag
//! - `Annotator`: the tagging capability, implemented by the built-in lexicon tagger and
//!   (with the `bert` feature) by the pretrained MobileBERT tagger

use crate::common::error::TaggerError;
use rust_tokenizers::{Offset, OffsetSize};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd)]
/// # Universal part-of-speech tag
pub enum PartOfSpeech {
    /// Adjective
    #[serde(rename = "ADJ")]
    Adj,
    /// Adposition (preposition, postposition)
    #[serde(rename = "ADP")]
    Adp,
    /// Adverb
    #[serde(rename = "ADV")]
    Adv,
    /// Auxiliary verb
    #[serde(rename = "AUX")]
    Aux,
    /// Coordinating conjunction
    #[serde(rename = "CCONJ")]
    Cconj,
    /// Determiner
    #[serde(rename = "DET")]
    Det,
    /// Interjection
    #[serde(rename = "INTJ")]
    Intj,
    /// Noun
    #[serde(rename = "NOUN")]
    Noun,
    /// Numeral
    #[serde(rename = "NUM")]
    Num,
    /// Particle
    #[serde(rename = "PART")]
    Part,
    /// Pronoun
    #[serde(rename = "PRON")]
    Pron,
    /// Proper noun
    #[serde(rename = "PROPN")]
    Propn,
    /// Punctuation
    #[serde(rename = "PUNCT")]
    Punct,
    /// Subordinating conjunction
    #[serde(rename = "SCONJ")]
    Sconj,
    /// Symbol
    #[serde(rename = "SYM")]
    Sym,
    /// Verb
    #[serde(rename = "VERB")]
    Verb,
    /// Other
    #[serde(rename = "X")]
    X,
    /// Whitespace run
    #[serde(rename = "SPACE")]
    Space,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 18] = [
        PartOfSpeech::Adj,
        PartOfSpeech::Adp,
        PartOfSpeech::Adv,
        PartOfSpeech::Aux,
        PartOfSpeech::Cconj,
        PartOfSpeech::Det,
        PartOfSpeech::Intj,
        PartOfSpeech::Noun,
        PartOfSpeech::Num,
        PartOfSpeech::Part,
        PartOfSpeech::Pron,
        PartOfSpeech::Propn,
        PartOfSpeech::Punct,
        PartOfSpeech::Sconj,
        PartOfSpeech::Sym,
        PartOfSpeech::Verb,
        PartOfSpeech::X,
        PartOfSpeech::Space,
    ];

    /// Label of the tag, as exchanged with clients and used as color table key
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Adp => "ADP",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Aux => "AUX",
            PartOfSpeech::Cconj => "CCONJ",
            PartOfSpeech::Det => "DET",
            PartOfSpeech::Intj => "INTJ",
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Num => "NUM",
            PartOfSpeech::Part => "PART",
            PartOfSpeech::Pron => "PRON",
            PartOfSpeech::Propn => "PROPN",
            PartOfSpeech::Punct => "PUNCT",
            PartOfSpeech::Sconj => "SCONJ",
            PartOfSpeech::Sym => "SYM",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::X => "X",
            PartOfSpeech::Space => "SPACE",
        }
    }

    /// Maps a Penn Treebank label (e.g. NN, VBZ) to its universal counterpart.
    /// The surface form disambiguates the labels the Treebank shares between
    /// universal categories (auxiliaries among verbs, subordinators among prepositions).
    ///
    /// # Arguments
    ///
    /// * `label` - Penn Treebank label
    /// * `word` - surface form the label was assigned to
    ///
    /// # Example
    ///
    /// ```
    /// use pos_colorizer::pipelines::common::PartOfSpeech;
    ///
    /// assert_eq!(PartOfSpeech::from_penn_treebank("NNS", "cats"), PartOfSpeech::Noun);
    /// assert_eq!(PartOfSpeech::from_penn_treebank("VBZ", "is"), PartOfSpeech::Aux);
    /// assert_eq!(PartOfSpeech::from_penn_treebank("VBZ", "runs"), PartOfSpeech::Verb);
    /// ```
    pub fn from_penn_treebank(label: &str, word: &str) -> PartOfSpeech {
        let lower_word = word.to_lowercase();
        match label {
            "NN" | "NNS" => PartOfSpeech::Noun,
            "NNP" | "NNPS" => PartOfSpeech::Propn,
            "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" => {
                if AUXILIARY_FORMS.contains(&lower_word.as_str()) {
                    PartOfSpeech::Aux
                } else {
                    PartOfSpeech::Verb
                }
            }
            "MD" => PartOfSpeech::Aux,
            "JJ" | "JJR" | "JJS" | "AFX" => PartOfSpeech::Adj,
            "RB" | "RBR" | "RBS" | "WRB" => PartOfSpeech::Adv,
            "PRP" | "PRP$" | "WP" | "WP$" | "EX" => PartOfSpeech::Pron,
            "DT" | "PDT" | "WDT" => PartOfSpeech::Det,
            "IN" => {
                if SUBORDINATORS.contains(&lower_word.as_str()) {
                    PartOfSpeech::Sconj
                } else {
                    PartOfSpeech::Adp
                }
            }
            "RP" => PartOfSpeech::Adp,
            "CC" => PartOfSpeech::Cconj,
            "CD" => PartOfSpeech::Num,
            "TO" | "POS" => PartOfSpeech::Part,
            "UH" => PartOfSpeech::Intj,
            "SYM" | "$" | "#" => PartOfSpeech::Sym,
            "." | "," | ":" | "``" | "''" | "\"" | "-LRB-" | "-RRB-" | "HYPH" | "NFP" => {
                PartOfSpeech::Punct
            }
            "_SP" => PartOfSpeech::Space,
            _ => PartOfSpeech::X,
        }
    }
}

const AUXILIARY_FORMS: [&str; 21] = [
    "be", "am", "is", "are", "was", "were", "been", "being", "'m", "'re", "'s", "have", "has",
    "had", "having", "'ve", "'d", "do", "does", "did", "'ll",
];

const SUBORDINATORS: [&str; 16] = [
    "although", "because", "if", "since", "though", "unless", "until", "whereas", "whether",
    "while", "once", "that", "as", "so", "than", "lest",
];

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PartOfSpeech {
    type Err = TaggerError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        PartOfSpeech::ALL
            .iter()
            .find(|pos| pos.as_str().eq_ignore_ascii_case(label))
            .copied()
            .ok_or_else(|| {
                TaggerError::InvalidConfigurationError(format!(
                    "unknown part-of-speech label: {label}"
                ))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// # Token produced by an `Annotator`
pub struct Token {
    /// Exact substring of the input text
    pub text: String,
    /// Part-of-speech tag (`SPACE` for whitespace runs)
    pub category: PartOfSpeech,
    /// Whether the token is made of whitespace only
    pub is_whitespace: bool,
    /// Byte offsets of the token in the input text
    pub offset: Offset,
}

impl Token {
    /// Builds a token for the span `offset` of `text`. Whitespace spans are always tagged `SPACE`.
    pub fn new(text: &str, offset: Offset, category: PartOfSpeech) -> Token {
        let surface = &text[offset.begin as usize..offset.end as usize];
        let is_whitespace = is_whitespace(surface);
        Token {
            text: surface.to_string(),
            category: if is_whitespace {
                PartOfSpeech::Space
            } else {
                category
            },
            is_whitespace,
            offset,
        }
    }

    /// Builds a whitespace token spanning `begin..end` of `text`
    pub(crate) fn whitespace(text: &str, begin: usize, end: usize) -> Token {
        Token::new(
            text,
            Offset::new(begin as OffsetSize, end as OffsetSize),
            PartOfSpeech::Space,
        )
    }
}

/// Longest text, in bytes, whose token offsets fit in an `Offset`
pub const MAX_TEXT_BYTES: usize = OffsetSize::MAX as usize;

/// Rejects texts too long for their byte offsets to be represented by an `Offset`.
///
/// # Arguments
///
/// * `length` - length of the text in bytes
pub fn check_text_length(length: usize) -> Result<(), TaggerError> {
    if length > MAX_TEXT_BYTES {
        return Err(TaggerError::ValueError(format!(
            "text of {length} bytes exceeds the {MAX_TEXT_BYTES} bytes limit"
        )));
    }
    Ok(())
}

/// True for non-empty strings made of whitespace characters only
pub fn is_whitespace(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_whitespace)
}

/// # Part-of-speech annotator
/// Splits a text into tokens and tags each of them. Implementations must return tokens
/// whose texts, concatenated in order, reproduce the input exactly.
pub trait Annotator: Send + Sync {
    /// Tokenizes and tags a text.
    ///
    /// # Arguments
    ///
    /// * `text` - text to annotate, possibly empty
    ///
    /// # Returns
    ///
    /// * `Vec<Token>` covering the whole input, in order
    fn annotate(&self, text: &str) -> Result<Vec<Token>, TaggerError>;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for pos in PartOfSpeech::ALL {
            assert_eq!(pos.as_str().parse::<PartOfSpeech>().unwrap(), pos);
        }
        assert!("CONJUNCTION".parse::<PartOfSpeech>().is_err());
    }

    #[test]
    fn serde_uses_upper_case_labels() {
        assert_eq!(
            serde_json::to_string(&PartOfSpeech::Propn).unwrap(),
            "\"PROPN\""
        );
        let pos: PartOfSpeech = serde_json::from_str("\"SCONJ\"").unwrap();
        assert_eq!(pos, PartOfSpeech::Sconj);
    }

    #[test]
    fn penn_treebank_mapping() {
        assert_eq!(PartOfSpeech::from_penn_treebank("PRP$", "my"), PartOfSpeech::Pron);
        assert_eq!(PartOfSpeech::from_penn_treebank("IN", "of"), PartOfSpeech::Adp);
        assert_eq!(PartOfSpeech::from_penn_treebank("IN", "because"), PartOfSpeech::Sconj);
        assert_eq!(PartOfSpeech::from_penn_treebank("MD", "can"), PartOfSpeech::Aux);
        assert_eq!(PartOfSpeech::from_penn_treebank(".", "?"), PartOfSpeech::Punct);
        assert_eq!(PartOfSpeech::from_penn_treebank("FW", "ergo"), PartOfSpeech::X);
    }

    #[test]
    fn whitespace_tokens_are_tagged_space() {
        let text = "a \n b";
        let token = Token::new(text, Offset::new(1, 4), PartOfSpeech::Noun);
        assert!(token.is_whitespace);
        assert_eq!(token.category, PartOfSpeech::Space);
        assert_eq!(token.text, " \n ");
        assert!(!is_whitespace(""));
    }

    #[test]
    fn text_length_limit() {
        assert!(check_text_length(0).is_ok());
        assert!(check_text_length(MAX_TEXT_BYTES).is_ok());
        assert!(matches!(
            check_text_length(MAX_TEXT_BYTES + 1),
            Err(TaggerError::ValueError(_))
        ));
    }
}
