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

//! # Whitespace-preserving English tokenizer
//! Splits a text into words, punctuation marks and whitespace runs. Unlike subword tokenizers,
//! nothing is dropped or normalized: every byte of the input belongs to exactly one span.
//!
//! ```
//! use pos_colorizer::pipelines::tokenizer::SpanTokenizer;
//!
//! let tokenizer = SpanTokenizer::new();
//! let tokens = tokenizer.tokenize("I can't go (yet).");
//! assert_eq!(tokens, ["I", " ", "ca", "n't", " ", "go", " ", "(", "yet", ")", "."]);
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use rust_tokenizers::{Offset, OffsetSize};
use std::collections::HashSet;

const CHUNK_PATTERN: &str = r"\s+|\S+";
const PREFIX_PATTERN: &str = r#"^(?:\.\.\.|…|[(\[{"'“‘«¿¡$£€¥#])"#;
const SUFFIX_PATTERN: &str = r#"(?:\.\.\.|…|[)\]}"'”’»!?,;:.%])$"#;
const CLITIC_PATTERN: &str = r"(?i)(?:n['’]t|['’](?:s|re|ll|ve|d|m))$";
const INITIALISM_PATTERN: &str = r"^(?:\p{L}\.)+$";

const ABBREVIATIONS: [&str; 28] = [
    "mr.", "mrs.", "ms.", "dr.", "prof.", "sr.", "jr.", "st.", "mt.", "vs.", "etc.", "e.g.",
    "i.e.", "inc.", "ltd.", "co.", "corp.", "no.", "approx.", "dept.", "est.", "fig.", "jan.",
    "feb.", "aug.", "sept.", "oct.", "nov.",
];

lazy_static! {
    static ref ABBREVIATION_SET: HashSet<&'static str> = ABBREVIATIONS.iter().copied().collect();
}

/// # Rule-based span tokenizer
/// Whitespace runs are kept as single spans. Other chunks are split into leading punctuation,
/// trailing punctuation, English clitics and letter-bound hyphens.
#[derive(Debug, Clone)]
pub struct SpanTokenizer {
    chunk_pattern: Regex,
    prefix_pattern: Regex,
    suffix_pattern: Regex,
    clitic_pattern: Regex,
    initialism_pattern: Regex,
}

impl Default for SpanTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SpanTokenizer {
    pub fn new() -> SpanTokenizer {
        SpanTokenizer {
            chunk_pattern: Regex::new(CHUNK_PATTERN).unwrap(),
            prefix_pattern: Regex::new(PREFIX_PATTERN).unwrap(),
            suffix_pattern: Regex::new(SUFFIX_PATTERN).unwrap(),
            clitic_pattern: Regex::new(CLITIC_PATTERN).unwrap(),
            initialism_pattern: Regex::new(INITIALISM_PATTERN).unwrap(),
        }
    }

    /// Splits a text into spans.
    ///
    /// # Arguments
    ///
    /// * `text` - text to tokenize
    ///
    /// # Returns
    ///
    /// * `Vec<Offset>` byte offsets of the spans, contiguous and covering the whole input
    pub fn tokenize_with_offsets(&self, text: &str) -> Vec<Offset> {
        let mut offsets = Vec::new();
        for chunk in self.chunk_pattern.find_iter(text) {
            if chunk.as_str().starts_with(char::is_whitespace) {
                offsets.push(offset(chunk.start(), chunk.end()));
            } else {
                self.split_chunk(text, chunk.start(), chunk.end(), &mut offsets);
            }
        }
        offsets
    }

    /// Splits a text into string slices (see `tokenize_with_offsets`)
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.tokenize_with_offsets(text)
            .into_iter()
            .map(|span| &text[span.begin as usize..span.end as usize])
            .collect()
    }

    fn split_chunk(&self, text: &str, begin: usize, end: usize, output: &mut Vec<Offset>) {
        let mut start = begin;
        let mut stop = end;
        let mut suffixes = Vec::new();

        while start < stop {
            let core = &text[start..stop];
            if core.eq_ignore_ascii_case("cannot") {
                output.push(offset(start, start + 3));
                start += 3;
                break;
            }
            if let Some(prefix) = self.prefix_pattern.find(core) {
                if prefix.end() < core.len() {
                    output.push(offset(start, start + prefix.end()));
                    start += prefix.end();
                    continue;
                }
            }
            if let Some(clitic) = self.clitic_pattern.find(core) {
                if clitic.start() > 0 {
                    suffixes.push(offset(start + clitic.start(), stop));
                    stop = start + clitic.start();
                    continue;
                }
            }
            if let Some(suffix) = self.suffix_pattern.find(core) {
                if suffix.start() > 0 && !self.keeps_trailing_period(core, suffix.as_str()) {
                    suffixes.push(offset(start + suffix.start(), stop));
                    stop = start + suffix.start();
                    continue;
                }
            }
            break;
        }

        if start < stop {
            split_infixes(text, start, stop, output);
        }
        output.extend(suffixes.into_iter().rev());
    }

    fn keeps_trailing_period(&self, core: &str, suffix: &str) -> bool {
        suffix == "."
            && (ABBREVIATION_SET.contains(core.to_lowercase().as_str())
                || self.initialism_pattern.is_match(core))
    }
}

fn split_infixes(text: &str, begin: usize, end: usize, output: &mut Vec<Offset>) {
    let characters = text[begin..end].char_indices().collect::<Vec<(usize, char)>>();
    let mut piece_start = begin;
    for window in characters.windows(3) {
        let (_, before) = window[0];
        let (position, character) = window[1];
        let (_, after) = window[2];
        if character == '-' && before.is_alphabetic() && after.is_alphabetic() {
            let hyphen = begin + position;
            output.push(offset(piece_start, hyphen));
            output.push(offset(hyphen, hyphen + 1));
            piece_start = hyphen + 1;
        }
    }
    output.push(offset(piece_start, end));
}

fn offset(begin: usize, end: usize) -> Offset {
    Offset::new(begin as OffsetSize, end as OffsetSize)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn whitespace_runs_are_single_spans() {
        let tokenizer = SpanTokenizer::new();
        assert_eq!(
            tokenizer.tokenize("Hi\nthere  \t friend"),
            ["Hi", "\n", "there", "  \t ", "friend"]
        );
    }

    #[test]
    fn punctuation_is_split_from_words() {
        let tokenizer = SpanTokenizer::new();
        assert_eq!(
            tokenizer.tokenize("\"Wait...\" she said, (quietly)!"),
            ["\"", "Wait", "...", "\"", " ", "she", " ", "said", ",", " ", "(", "quietly", ")", "!"]
        );
        assert_eq!(tokenizer.tokenize("$5 or 50%"), ["$", "5", " ", "or", " ", "50", "%"]);
    }

    #[test]
    fn clitics_and_contractions() {
        let tokenizer = SpanTokenizer::new();
        assert_eq!(
            tokenizer.tokenize("don't it's we’re cannot"),
            ["do", "n't", " ", "it", "'s", " ", "we", "’re", " ", "can", "not"]
        );
    }

    #[test]
    fn abbreviations_keep_their_period() {
        let tokenizer = SpanTokenizer::new();
        assert_eq!(
            tokenizer.tokenize("Mr. Smith lives in the U.S. now."),
            ["Mr.", " ", "Smith", " ", "lives", " ", "in", " ", "the", " ", "U.S.", " ", "now", "."]
        );
    }

    #[test]
    fn hyphens_between_letters() {
        let tokenizer = SpanTokenizer::new();
        assert_eq!(
            tokenizer.tokenize("a well-known 3-4 split"),
            ["a", " ", "well", "-", "known", " ", "3-4", " ", "split"]
        );
    }

    #[test]
    fn offsets_cover_the_input() {
        let tokenizer = SpanTokenizer::new();
        let text = "  Amélie's e-mail: amelie@somemail.com!!\r\n";
        let offsets = tokenizer.tokenize_with_offsets(text);
        let mut cursor = 0;
        for span in &offsets {
            assert_eq!(span.begin as usize, cursor);
            assert!(span.end > span.begin);
            cursor = span.end as usize;
        }
        assert_eq!(cursor, text.len());
    }

    #[test]
    fn lone_punctuation_is_kept() {
        let tokenizer = SpanTokenizer::new();
        assert_eq!(tokenizer.tokenize("..."), ["..."]);
        assert_eq!(tokenizer.tokenize("?!"), ["?", "!"]);
        assert!(tokenizer.tokenize("").is_empty());
    }
}
