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

//! # Part Of Speech pipeline
//! Extracts Part of Speech tags (Noun, Verb, Adjective...) from text.
//! The default model is a lexicon tagger: every word receives weighted candidate tags (lexicon
//! lookup, inflections, word shape, suffixes) and the most likely tag sequence of each sentence is
//! decoded with the Viterbi algorithm over a fixed tag-transition table. It runs on CPU, needs no
//! download and is deterministic.
//!
//! The example below illustrate how to run the model:
//! ```
//! # fn main() -> anyhow::Result<()> {
//! use pos_colorizer::pipelines::pos_tagging::POSModel;
//! let pos_model = POSModel::new(Default::default())?;
//!
//! let input = ["My name is Bob."];
//! let output = pos_model.predict(&input)?;
//! # assert_eq!(output[0].len(), 8);
//! # Ok(())
//! # }
//! ```
//! Output: \
//! ```no_run
//! # use pos_colorizer::pipelines::common::{PartOfSpeech, Token};
//! # use rust_tokenizers::Offset;
//! # let output =
//! [[
//!     Token {
//!         text: String::from("My"),
//!         category: PartOfSpeech::Pron,
//!         is_whitespace: false,
//!         offset: Offset { begin: 0, end: 2 },
//!     },
//!     Token {
//!         text: String::from(" "),
//!         category: PartOfSpeech::Space,
//!         is_whitespace: true,
//!         offset: Offset { begin: 2, end: 3 },
//!     },
//!     Token {
//!         text: String::from("name"),
//!         category: PartOfSpeech::Noun,
//!         is_whitespace: false,
//!         offset: Offset { begin: 3, end: 7 },
//!     },
//!     // ...
//!     Token {
//!         text: String::from("Bob"),
//!         category: PartOfSpeech::Propn,
//!         is_whitespace: false,
//!         offset: Offset { begin: 11, end: 14 },
//!     },
//!     Token {
//!         text: String::from("."),
//!         category: PartOfSpeech::Punct,
//!         is_whitespace: false,
//!         offset: Offset { begin: 14, end: 15 },
//!     },
//! ]]
//! # ;
//! ```
//!
//! Domain vocabulary can be added with a user lexicon (see `POSConfig` and the `lexicon` module).

use crate::common::error::TaggerError;
use crate::pipelines::common::{check_text_length, is_whitespace, Annotator, PartOfSpeech, Token};
use crate::pipelines::lexicon::{Lexicon, ENGLISH_LEXICON, POSSESSIVES};
use crate::pipelines::tokenizer::SpanTokenizer;
use crate::resources::ResourceProvider;
use ordered_float::OrderedFloat;
use rust_tokenizers::Offset;
use tracing::debug;

use PartOfSpeech::*;

const SENTENCE_TERMINATORS: [&str; 5] = [".", "!", "?", "...", "…"];

const SYMBOL_CHARACTERS: &str = "$€£¥¢%&*+<=>@^|~#/\\§°©®™±×÷";

/// Suffix rules for unknown words, longest suffixes first
const SUFFIX_RULES: &[(&str, &[(PartOfSpeech, f64)])] = &[
    ("ness", &[(Noun, 1.0)]),
    ("ment", &[(Noun, 1.0)]),
    ("tion", &[(Noun, 1.0)]),
    ("sion", &[(Noun, 1.0)]),
    ("ship", &[(Noun, 1.0)]),
    ("hood", &[(Noun, 1.0)]),
    ("ance", &[(Noun, 1.0)]),
    ("ence", &[(Noun, 1.0)]),
    ("able", &[(Adj, 1.0)]),
    ("ible", &[(Adj, 1.0)]),
    ("less", &[(Adj, 1.0)]),
    ("ous", &[(Adj, 1.0)]),
    ("ful", &[(Adj, 0.9), (Noun, 0.1)]),
    ("ive", &[(Adj, 0.8), (Noun, 0.2)]),
    ("ish", &[(Adj, 0.8), (Verb, 0.2)]),
    ("ity", &[(Noun, 1.0)]),
    ("ism", &[(Noun, 1.0)]),
    ("ist", &[(Noun, 1.0)]),
    ("ize", &[(Verb, 1.0)]),
    ("ise", &[(Verb, 0.7), (Noun, 0.3)]),
    ("ify", &[(Verb, 1.0)]),
    ("ate", &[(Verb, 0.6), (Adj, 0.2), (Noun, 0.2)]),
    ("ary", &[(Adj, 0.5), (Noun, 0.5)]),
    ("ing", &[(Verb, 0.7), (Noun, 0.2), (Adj, 0.1)]),
    ("est", &[(Adj, 0.7), (Noun, 0.3)]),
    ("al", &[(Adj, 0.7), (Noun, 0.3)]),
    ("ic", &[(Adj, 0.8), (Noun, 0.2)]),
    ("ly", &[(Adv, 0.85), (Adj, 0.15)]),
    ("ed", &[(Verb, 0.75), (Adj, 0.25)]),
    ("er", &[(Noun, 0.7), (Adj, 0.2), (Verb, 0.1)]),
    ("or", &[(Noun, 1.0)]),
    ("en", &[(Verb, 0.4), (Adj, 0.3), (Noun, 0.3)]),
    ("s", &[(Noun, 0.7), (Verb, 0.3)]),
];

const UNKNOWN_WORD: &[(PartOfSpeech, f64)] = &[(Noun, 0.6), (Adj, 0.2), (Verb, 0.2)];

/// # Configuration for Part-Of-Speech tagging
pub struct POSConfig {
    /// User lexicon merged over the built-in English lexicon
    pub lexicon_resource: Option<Box<dyn ResourceProvider>>,
    /// Tag unknown capitalized words as proper nouns
    pub detect_proper_nouns: bool,
}

impl POSConfig {
    /// Instantiate a new POS tagging configuration
    ///
    /// # Arguments
    ///
    /// * `lexicon_resource` - An optional `ResourceProvider` pointing to a user lexicon JSON file
    /// * `detect_proper_nouns` - Tag unknown capitalized words as proper nouns
    pub fn new<RL>(lexicon_resource: Option<RL>, detect_proper_nouns: bool) -> POSConfig
    where
        RL: ResourceProvider + 'static,
    {
        POSConfig {
            lexicon_resource: lexicon_resource
                .map(|resource| Box::new(resource) as Box<dyn ResourceProvider>),
            detect_proper_nouns,
        }
    }
}

impl Default for POSConfig {
    /// Provides the built-in English lexicon tagger
    fn default() -> POSConfig {
        POSConfig {
            lexicon_resource: None,
            detect_proper_nouns: true,
        }
    }
}

/// # POSModel to extract Part of Speech tags
pub struct POSModel {
    tokenizer: SpanTokenizer,
    lexicon: Lexicon,
    detect_proper_nouns: bool,
}

impl POSModel {
    /// Build a new `POSModel`
    ///
    /// # Arguments
    ///
    /// * `pos_config` - `POSConfig` object containing the lexicon resource and tagging options
    ///
    /// # Example
    ///
    /// ```
    /// # fn main() -> anyhow::Result<()> {
    /// use pos_colorizer::pipelines::pos_tagging::POSModel;
    ///
    /// let pos_model = POSModel::new(Default::default())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pos_config: POSConfig) -> Result<POSModel, TaggerError> {
        let mut lexicon = ENGLISH_LEXICON.clone();
        if let Some(lexicon_resource) = &pos_config.lexicon_resource {
            let user_lexicon = Lexicon::from_resource(lexicon_resource.as_ref())?;
            debug!(entries = user_lexicon.len(), "loaded user lexicon");
            lexicon.extend(user_lexicon);
        }
        Ok(POSModel::new_with_lexicon(
            lexicon,
            pos_config.detect_proper_nouns,
        ))
    }

    /// Build a new `POSModel` with a provided lexicon, replacing the built-in one.
    ///
    /// # Arguments
    ///
    /// * `lexicon` - `Lexicon` to look words up in
    /// * `detect_proper_nouns` - Tag unknown capitalized words as proper nouns
    pub fn new_with_lexicon(lexicon: Lexicon, detect_proper_nouns: bool) -> POSModel {
        POSModel {
            tokenizer: SpanTokenizer::new(),
            lexicon,
            detect_proper_nouns,
        }
    }

    /// Get a reference to the model tokenizer.
    pub fn get_tokenizer(&self) -> &SpanTokenizer {
        &self.tokenizer
    }

    /// Extract Part of Speech tags from texts
    ///
    /// # Arguments
    ///
    /// * `input` - `&[&str]` Array of texts to tag.
    ///
    /// # Returns
    ///
    /// * `Vec<Vec<Token>>` tokens (including whitespace runs) for each input text
    ///
    /// # Errors
    ///
    /// * `TaggerError::ValueError` if a text is longer than `MAX_TEXT_BYTES`
    ///
    /// # Example
    ///
    /// ```
    /// # fn main() -> anyhow::Result<()> {
    /// # use pos_colorizer::pipelines::pos_tagging::POSModel;
    ///
    /// let pos_model = POSModel::new(Default::default())?;
    /// let input = ["My name is Amy. I live in Paris.", "Paris is a city in France."];
    /// let output = pos_model.predict(&input)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn predict<S>(&self, input: &[S]) -> Result<Vec<Vec<Token>>, TaggerError>
    where
        S: AsRef<str>,
    {
        input.iter().map(|text| self.annotate(text.as_ref())).collect()
    }

    fn tag(&self, text: &str) -> Vec<Token> {
        let spans = self.tokenizer.tokenize_with_offsets(text);
        let mut categories = vec![Space; spans.len()];
        let mut sentence: Vec<usize> = Vec::new();

        for (index, span) in spans.iter().enumerate() {
            let surface = span_text(text, span);
            if is_whitespace(surface) {
                if surface.contains('\n') && !sentence.is_empty() {
                    self.decode_sentence(text, &spans, &sentence, &mut categories);
                    sentence.clear();
                }
                continue;
            }
            sentence.push(index);
            if SENTENCE_TERMINATORS.contains(&surface) {
                self.decode_sentence(text, &spans, &sentence, &mut categories);
                sentence.clear();
            }
        }
        if !sentence.is_empty() {
            self.decode_sentence(text, &spans, &sentence, &mut categories);
        }

        spans
            .into_iter()
            .zip(categories)
            .map(|(span, category)| Token::new(text, span, category))
            .collect()
    }

    /// Viterbi decoding of the most likely tag sequence for the words of a sentence
    fn decode_sentence(
        &self,
        text: &str,
        spans: &[Offset],
        sentence: &[usize],
        categories: &mut [PartOfSpeech],
    ) {
        let words = sentence
            .iter()
            .map(|index| span_text(text, &spans[*index]))
            .collect::<Vec<&str>>();
        let lattice = words
            .iter()
            .enumerate()
            .map(|(position, word)| self.candidates(word, position == 0))
            .collect::<Vec<Vec<(PartOfSpeech, f64)>>>();

        let mut scores: Vec<Vec<f64>> = Vec::with_capacity(lattice.len());
        let mut backpointers: Vec<Vec<usize>> = Vec::with_capacity(lattice.len());
        for (position, candidates) in lattice.iter().enumerate() {
            if position == 0 {
                scores.push(
                    candidates
                        .iter()
                        .map(|(pos, weight)| weight.ln() + transition_weight(None, *pos).ln())
                        .collect(),
                );
                backpointers.push(vec![0; candidates.len()]);
                continue;
            }
            let previous_word = words[position - 1].to_lowercase();
            let previous_candidates = &lattice[position - 1];
            let previous_scores = &scores[position - 1];
            let mut position_scores = Vec::with_capacity(candidates.len());
            let mut position_backpointers = Vec::with_capacity(candidates.len());
            for (pos, weight) in candidates {
                let (best_previous, best_score) = previous_candidates
                    .iter()
                    .zip(previous_scores.iter())
                    .enumerate()
                    .map(|(index, ((previous_pos, _), previous_score))| {
                        let state = transition_state(&previous_word, *previous_pos);
                        (
                            index,
                            previous_score + transition_weight(Some(state), *pos).ln(),
                        )
                    })
                    .max_by_key(|(_, score)| OrderedFloat(*score))
                    .unwrap_or((0, 0.0));
                position_scores.push(best_score + weight.ln());
                position_backpointers.push(best_previous);
            }
            scores.push(position_scores);
            backpointers.push(position_backpointers);
        }

        let Some(last_scores) = scores.last() else {
            return;
        };
        let mut best = last_scores
            .iter()
            .enumerate()
            .max_by_key(|(_, score)| OrderedFloat(**score))
            .map_or(0, |(index, _)| index);
        for position in (0..lattice.len()).rev() {
            categories[sentence[position]] = lattice[position][best].0;
            best = backpointers[position][best];
        }
    }

    /// Weighted candidate tags for a word, never empty
    fn candidates(&self, word: &str, sentence_initial: bool) -> Vec<(PartOfSpeech, f64)> {
        let lower = word.to_lowercase();
        let capitalized = word.chars().next().map_or(false, char::is_uppercase);

        if let Some(known) = self.lexicon.get(&lower) {
            let open_class = known
                .iter()
                .any(|(pos, _)| matches!(pos, Noun | Verb | Adj));
            if capitalized && !sentence_initial && open_class && self.detect_proper_nouns {
                let mut candidates = known
                    .iter()
                    .map(|(pos, weight)| (*pos, weight * 0.5))
                    .collect::<Vec<(PartOfSpeech, f64)>>();
                candidates.push((Propn, 0.5));
                return candidates;
            }
            return known.to_vec();
        }
        if let Some(pos) = shape_category(word) {
            return vec![(pos, 1.0)];
        }
        if capitalized && self.detect_proper_nouns {
            let acronym = word.chars().count() > 1 && !word.chars().any(char::is_lowercase);
            if acronym || !sentence_initial {
                return vec![(Propn, 0.9), (Noun, 0.1)];
            }
        }
        if let Some(candidates) = self.inflected_candidates(&lower) {
            return candidates;
        }
        let mut candidates = suffix_candidates(&lower).to_vec();
        if capitalized && self.detect_proper_nouns {
            candidates = candidates
                .into_iter()
                .map(|(pos, weight)| (pos, weight * 0.7))
                .collect();
            candidates.push((Propn, 0.3));
        }
        candidates
    }

    /// Candidates of regular inflections (plural, third person, past, gerund) of known words
    fn inflected_candidates(&self, lower: &str) -> Option<Vec<(PartOfSpeech, f64)>> {
        for stem in plural_stems(lower) {
            let noun = self.lexicon.has_tag(&stem, Noun);
            let verb = self.lexicon.has_tag(&stem, Verb);
            match (noun, verb) {
                (true, true) => return Some(vec![(Verb, 0.5), (Noun, 0.5)]),
                (true, false) => return Some(vec![(Noun, 1.0)]),
                (false, true) => return Some(vec![(Verb, 0.85), (Noun, 0.15)]),
                (false, false) => {}
            }
        }
        if past_stems(lower)
            .iter()
            .any(|stem| self.lexicon.has_tag(stem, Verb))
        {
            return Some(vec![(Verb, 0.8), (Adj, 0.2)]);
        }
        if gerund_stems(lower)
            .iter()
            .any(|stem| self.lexicon.has_tag(stem, Verb))
        {
            return Some(vec![(Verb, 0.75), (Noun, 0.15), (Adj, 0.1)]);
        }
        None
    }
}

impl Annotator for POSModel {
    fn annotate(&self, text: &str) -> Result<Vec<Token>, TaggerError> {
        check_text_length(text.len())?;
        Ok(self.tag(text))
    }
}

fn span_text<'a>(text: &'a str, span: &Offset) -> &'a str {
    &text[span.begin as usize..span.end as usize]
}

/// Tag of a word as seen by its successor: possessive pronouns behave like determiners
fn transition_state(lower_word: &str, pos: PartOfSpeech) -> PartOfSpeech {
    if pos == Pron && POSSESSIVES.contains(&lower_word) {
        Det
    } else {
        pos
    }
}

/// Relative likelihood of `next` following `previous` (`None` at sentence start)
fn transition_weight(previous: Option<PartOfSpeech>, next: PartOfSpeech) -> f64 {
    match (previous, next) {
        (None, Det | Pron) => 1.5,
        (None, Aux | Propn) => 1.2,
        (None, Verb) => 0.8,
        (Some(Det), Noun) => 3.0,
        (Some(Det), Adj) => 2.0,
        (Some(Det), Propn | Num) => 1.5,
        (Some(Det), Verb | Aux | Det | Pron | Adp | Part) => 0.2,
        (Some(Adj), Noun) => 3.0,
        (Some(Adj), Propn) => 1.5,
        (Some(Adj), Verb | Aux) => 0.5,
        (Some(Noun | Propn), Verb | Aux) => 2.5,
        (Some(Noun | Propn), Adp | Punct | Cconj) => 1.5,
        (Some(Noun | Propn), Det | Adj) => 0.4,
        (Some(Pron), Verb | Aux) => 3.0,
        (Some(Pron), Noun | Adj | Det) => 0.3,
        (Some(Aux), Verb) => 3.0,
        (Some(Aux), Adv | Adj | Part) => 1.5,
        (Some(Aux), Det) => 1.2,
        (Some(Aux), Noun) => 0.6,
        (Some(Aux), Aux) => 0.8,
        (Some(Part), Verb) => 3.0,
        (Some(Part), Aux) => 2.0,
        (Some(Part), Noun) => 0.4,
        (Some(Adp), Det | Propn) => 2.2,
        (Some(Adp), Noun | Pron | Num) => 1.5,
        (Some(Adp), Verb | Aux) => 0.3,
        (Some(Adv), Verb | Adj) => 1.8,
        (Some(Verb), Det) => 2.0,
        (Some(Verb), Pron | Adp | Adv) => 1.5,
        (Some(Verb), Part | Noun | Adj) => 1.2,
        (Some(Verb), Verb) => 0.4,
        (Some(Num), Noun) => 2.5,
        (Some(Sconj | Cconj), Pron | Det) => 1.4,
        _ => 1.0,
    }
}

/// Tags decided by the shape of a word alone (punctuation, symbols, numbers, addresses)
fn shape_category(word: &str) -> Option<PartOfSpeech> {
    if !word.chars().any(char::is_alphanumeric) {
        return if word.chars().all(|c| SYMBOL_CHARACTERS.contains(c)) {
            Some(Sym)
        } else {
            Some(Punct)
        };
    }
    let lower = word.to_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("www.") {
        return Some(X);
    }
    if let Some((local, domain)) = word.split_once('@') {
        if !local.is_empty() && domain.contains('.') {
            return Some(X);
        }
    }
    if word.starts_with(|c: char| c.is_ascii_digit()) {
        if word
            .chars()
            .all(|c| c.is_ascii_digit() || ",.:/-".contains(c))
        {
            return Some(Num);
        }
        let digits = lower.trim_end_matches(|c: char| c.is_ascii_alphabetic());
        let suffix = &lower[digits.len()..];
        if digits.chars().all(|c| c.is_ascii_digit()) {
            if matches!(suffix, "st" | "nd" | "rd" | "th") {
                return Some(Adj);
            }
            if suffix == "s" {
                return Some(Num);
            }
        }
    }
    None
}

fn suffix_candidates(lower: &str) -> &'static [(PartOfSpeech, f64)] {
    SUFFIX_RULES
        .iter()
        .find(|(suffix, _)| lower.len() > suffix.len() + 2 && lower.ends_with(suffix))
        .map_or(UNKNOWN_WORD, |(_, candidates)| *candidates)
}

fn plural_stems(lower: &str) -> Vec<String> {
    let mut stems = Vec::new();
    if let Some(stem) = lower.strip_suffix("ies") {
        stems.push(format!("{stem}y"));
    }
    if let Some(stem) = lower.strip_suffix("es") {
        stems.push(stem.to_string());
    }
    if !lower.ends_with("ss") {
        if let Some(stem) = lower.strip_suffix('s') {
            stems.push(stem.to_string());
        }
    }
    stems.retain(|stem| stem.len() > 1);
    stems
}

fn past_stems(lower: &str) -> Vec<String> {
    let mut stems = Vec::new();
    if let Some(stem) = lower.strip_suffix("ied") {
        stems.push(format!("{stem}y"));
    }
    if let Some(stem) = lower.strip_suffix("ed") {
        stems.push(stem.to_string());
        stems.push(format!("{stem}e"));
        stems.extend(undouble(stem));
    }
    stems.retain(|stem| stem.len() > 1);
    stems
}

fn gerund_stems(lower: &str) -> Vec<String> {
    let mut stems = Vec::new();
    if let Some(stem) = lower.strip_suffix("ing") {
        stems.push(stem.to_string());
        stems.push(format!("{stem}e"));
        stems.extend(undouble(stem));
    }
    stems.retain(|stem| stem.len() > 1);
    stems
}

/// `stopp` -> `stop`
fn undouble(stem: &str) -> Option<String> {
    let mut characters = stem.chars().rev();
    match (characters.next(), characters.next()) {
        (Some(last), Some(before)) if last == before && !"aeiou".contains(last) => {
            Some(stem[..stem.len() - last.len_utf8()].to_string())
        }
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn tags(model: &POSModel, text: &str) -> Vec<(String, PartOfSpeech)> {
        model
            .annotate(text)
            .unwrap()
            .into_iter()
            .filter(|token| !token.is_whitespace)
            .map(|token| (token.text, token.category))
            .collect()
    }

    #[test]
    fn shape_categories() {
        assert_eq!(shape_category("."), Some(Punct));
        assert_eq!(shape_category("--"), Some(Punct));
        assert_eq!(shape_category("$"), Some(Sym));
        assert_eq!(shape_category("%"), Some(Sym));
        assert_eq!(shape_category("3.14"), Some(Num));
        assert_eq!(shape_category("1,000"), Some(Num));
        assert_eq!(shape_category("1990s"), Some(Num));
        assert_eq!(shape_category("21st"), Some(Adj));
        assert_eq!(shape_category("amelie@somemail.com"), Some(X));
        assert_eq!(shape_category("https://example.org"), Some(X));
        assert_eq!(shape_category("cat"), None);
    }

    #[test]
    fn inflection_stems() {
        assert!(plural_stems("stories").contains(&"story".to_string()));
        assert!(plural_stems("runs").contains(&"run".to_string()));
        assert!(plural_stems("class").is_empty());
        assert!(past_stems("stopped").contains(&"stop".to_string()));
        assert!(past_stems("liked").contains(&"like".to_string()));
        assert!(gerund_stems("making").contains(&"make".to_string()));
        assert!(gerund_stems("running").contains(&"run".to_string()));
    }

    #[test]
    fn simple_sentence() -> anyhow::Result<()> {
        let model = POSModel::new(Default::default())?;
        assert_eq!(
            tags(&model, "The cat runs."),
            [
                ("The".to_string(), Det),
                ("cat".to_string(), Noun),
                ("runs".to_string(), Verb),
                (".".to_string(), Punct),
            ]
        );
        Ok(())
    }

    #[test]
    fn infinitive_and_prepositional_to() -> anyhow::Result<()> {
        let model = POSModel::new(Default::default())?;
        let output = tags(&model, "I want to run to Paris");
        assert_eq!(output[2], ("to".to_string(), Part));
        assert_eq!(output[3], ("run".to_string(), Verb));
        assert_eq!(output[4], ("to".to_string(), Adp));
        assert_eq!(output[5], ("Paris".to_string(), Propn));
        Ok(())
    }

    #[test]
    fn possessives_are_followed_by_nouns() -> anyhow::Result<()> {
        let model = POSModel::new(Default::default())?;
        assert_eq!(
            tags(&model, "My name is Bob"),
            [
                ("My".to_string(), Pron),
                ("name".to_string(), Noun),
                ("is".to_string(), Aux),
                ("Bob".to_string(), Propn),
            ]
        );
        Ok(())
    }

    #[test]
    fn proper_noun_detection_can_be_disabled() {
        let model = POSModel::new_with_lexicon(ENGLISH_LEXICON.clone(), false);
        let output = tags(&model, "I met Zorblax");
        assert_ne!(output[2].1, Propn);
    }

    #[test]
    fn unknown_words_use_suffixes() -> anyhow::Result<()> {
        let model = POSModel::new(Default::default())?;
        let output = tags(&model, "she quickly finished the impressive assignment");
        assert_eq!(output[1], ("quickly".to_string(), Adv));
        assert_eq!(output[4], ("impressive".to_string(), Adj));
        assert_eq!(output[5], ("assignment".to_string(), Noun));
        Ok(())
    }
}
