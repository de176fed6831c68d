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

//! # Tagging lexicon
//! Maps lower-cased word forms to weighted part-of-speech candidates. A built-in English lexicon
//! covers the closed word classes and a core of frequent open-class words. User lexicons are JSON
//! files whose entries are either a single label, a list of labels, or a map of label weights:
//!
//! ```json
//! {
//!     "entries": {
//!         "rust": "PROPN",
//!         "crate": ["NOUN", "VERB"],
//!         "parse": {"VERB": 0.8, "NOUN": 0.2}
//!     }
//! }
//! ```

use crate::common::error::TaggerError;
use crate::common::Config;
use crate::pipelines::common::PartOfSpeech;
use crate::resources::ResourceProvider;
use lazy_static::lazy_static;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use PartOfSpeech::*;

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "these", "those", "every", "each", "some", "any", "another",
    "either", "neither", "both", "which", "whichever", "whatever", "whose", "such",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself", "yourself",
    "himself", "herself", "itself", "ourselves", "yourselves", "themselves", "mine", "yours",
    "hers", "ours", "theirs", "who", "whom", "whoever", "something", "anything", "nothing",
    "everything", "someone", "anyone", "everyone", "nobody", "somebody", "anybody", "everybody",
    "none", "y'all",
];

/// Possessive pronouns: tagged `PRON`, but followed by nouns like determiners are
pub(crate) const POSSESSIVES: &[&str] = &["my", "your", "his", "her", "its", "our", "their"];

const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "been", "being", "will", "would", "shall", "should", "can",
    "could", "may", "might", "must", "ca", "wo", "sha", "'m", "’m", "'re", "’re", "'ll", "’ll",
    "'ve", "’ve", "'d", "’d",
];

const ADPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "above", "below", "from", "under", "around", "among", "across",
    "behind", "beyond", "near", "onto", "toward", "towards", "upon", "within", "without",
    "along", "despite", "except", "per", "via", "amid", "beneath", "beside", "besides", "inside",
    "outside", "throughout", "unlike", "versus", "vs.",
];

const COORDINATORS: &[&str] = &["and", "or", "but", "nor", "&", "plus"];

const SUBORDINATORS: &[&str] = &[
    "because", "although", "though", "if", "unless", "whether", "while", "whereas", "whilst",
    "lest",
];

const PARTICLES: &[&str] = &["not", "n't", "n’t"];

const INTERJECTIONS: &[&str] = &[
    "hi", "hello", "hey", "oh", "ah", "wow", "oops", "ouch", "ok", "okay", "thanks", "bye",
    "goodbye", "hmm", "uh", "um", "alas", "yeah", "yay", "hooray", "yes", "nope", "yep", "ugh",
    "huh", "hurray", "bravo", "cheers",
];

const NUMERALS: &[&str] = &[
    "zero", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety", "hundred",
    "thousand", "million", "billion", "trillion", "dozen",
];

const ADVERBS: &[&str] = &[
    "very", "too", "also", "just", "now", "then", "always", "never", "often", "sometimes",
    "already", "soon", "again", "almost", "quite", "rather", "really", "how", "why", "ever",
    "even", "only", "most", "least", "away", "together", "maybe", "perhaps", "instead",
    "however", "therefore", "thus", "else", "here", "usually", "seldom", "rarely", "nearly",
    "indeed", "anyway", "somewhat", "everywhere", "somewhere", "nowhere", "anywhere", "forever",
    "meanwhile", "otherwise", "afterwards", "hence", "once", "twice", "ago", "abroad", "tonight",
];

const ADJECTIVES: &[&str] = &[
    "good", "bad", "new", "old", "big", "small", "great", "large", "long", "short", "high",
    "young", "happy", "sad", "red", "blue", "green", "black", "white", "yellow", "brown",
    "other", "same", "different", "important", "wrong", "best", "better", "worse", "worst",
    "first", "last", "next", "many", "few", "several", "beautiful", "easy", "nice", "quick",
    "lazy", "free", "full", "sure", "real", "true", "false", "able", "strong", "hot", "cold",
    "warm", "dark", "own", "whole", "possible", "simple", "public", "private", "certain",
    "special", "clear", "recent", "major", "available", "likely", "local", "human", "social",
    "early", "late", "poor", "rich", "tiny", "huge", "ready", "busy", "quiet", "loud", "gray",
    "grey", "pink", "purple", "orange", "smart", "fine", "main", "second", "third", "various",
];

const VERBS: &[&str] = &[
    "go", "get", "make", "know", "think", "take", "see", "come", "want", "use", "find", "give",
    "tell", "try", "ask", "feel", "become", "leave", "put", "mean", "keep", "let", "begin",
    "seem", "bring", "happen", "write", "provide", "sit", "lose", "include", "continue",
    "learn", "understand", "follow", "create", "speak", "allow", "add", "spend", "grow", "win",
    "offer", "remember", "consider", "appear", "buy", "wait", "serve", "die", "send", "expect",
    "build", "stay", "reach", "kill", "remain", "eat", "drink", "sleep", "sing", "swim", "fly",
    "drive", "say", "jump", "believe", "bark", "meet", "pay", "hear", "type", "paste", "tag",
    "enjoy", "apply", "carry", "marry", "study", "stop", "plan", "chase", "catch", "teach",
    "choose", "throw", "wear", "forget", "sell", "explain", "hope", "agree", "arrive", "decide",
    "prefer", "smile", "laugh", "cry", "listen", "render",
];

const IRREGULAR_VERB_FORMS: &[&str] = &[
    "went", "got", "made", "knew", "thought", "took", "saw", "came", "gave", "told", "felt",
    "became", "meant", "kept", "began", "brought", "wrote", "sat", "stood", "lost", "paid",
    "met", "understood", "spoke", "grew", "won", "bought", "fell", "ate", "drank", "slept",
    "sang", "swam", "flew", "drove", "said", "found", "ran", "held", "built", "sent", "taught",
    "caught", "gone", "seen", "taken", "given", "known", "written", "eaten", "spoken",
    "driven", "flown", "begun", "chose", "chosen", "threw", "thrown", "wore", "worn", "forgot",
    "forgotten", "sold", "heard", "done", "goes", "says",
];

const NOUNS: &[&str] = &[
    "time", "person", "year", "way", "day", "thing", "man", "woman", "child", "children",
    "world", "life", "hand", "part", "place", "case", "week", "company", "system", "program",
    "question", "government", "number", "night", "point", "home", "room", "mother", "father",
    "area", "money", "story", "fact", "month", "lot", "book", "eye", "job", "word", "business",
    "issue", "side", "kind", "head", "house", "friend", "power", "hour", "game", "member",
    "law", "car", "city", "community", "name", "president", "team", "minute", "idea", "kid",
    "body", "information", "school", "face", "level", "office", "health", "art", "war",
    "history", "party", "result", "morning", "reason", "research", "girl", "boy", "guy",
    "moment", "air", "teacher", "education", "cat", "dog", "fox", "bird", "fish", "tree",
    "food", "milk", "email", "e-mail", "text", "sentence", "language", "computer", "phone",
    "music", "table", "chair", "street", "country", "family", "people", "data", "problem",
    "liter", "tea", "coffee", "sun", "moon", "sky", "town", "river", "road", "men", "women",
    "feet", "teeth", "mice", "euro", "dollar", "speech", "grammar", "noun", "verb", "adjective",
    "adverb", "pronoun", "legend", "page", "browser", "box", "weather", "garden",
    "window", "paper", "student", "university", "doctor", "hospital", "price", "mouse", "door",
    "service",
];

/// Words belonging to several classes, with their relative weights
const AMBIGUOUS: &[(&str, &[(PartOfSpeech, f64)])] = &[
    ("that", &[(Sconj, 0.4), (Det, 0.3), (Pron, 0.3)]),
    ("what", &[(Pron, 0.7), (Det, 0.3)]),
    ("all", &[(Det, 0.7), (Pron, 0.2), (Adv, 0.1)]),
    ("no", &[(Det, 0.7), (Intj, 0.3)]),
    ("one", &[(Num, 0.7), (Pron, 0.3)]),
    ("there", &[(Pron, 0.5), (Adv, 0.5)]),
    ("to", &[(Part, 0.5), (Adp, 0.5)]),
    ("'s", &[(Part, 0.5), (Aux, 0.5)]),
    ("’s", &[(Part, 0.5), (Aux, 0.5)]),
    ("be", &[(Aux, 0.8), (Verb, 0.2)]),
    ("have", &[(Aux, 0.5), (Verb, 0.5)]),
    ("has", &[(Aux, 0.5), (Verb, 0.5)]),
    ("had", &[(Aux, 0.5), (Verb, 0.5)]),
    ("having", &[(Aux, 0.4), (Verb, 0.6)]),
    ("do", &[(Aux, 0.6), (Verb, 0.4)]),
    ("does", &[(Aux, 0.6), (Verb, 0.4)]),
    ("did", &[(Aux, 0.6), (Verb, 0.4)]),
    ("as", &[(Adp, 0.5), (Sconj, 0.3), (Adv, 0.2)]),
    ("since", &[(Sconj, 0.5), (Adp, 0.5)]),
    ("before", &[(Adp, 0.5), (Sconj, 0.3), (Adv, 0.2)]),
    ("after", &[(Adp, 0.6), (Sconj, 0.4)]),
    ("until", &[(Sconj, 0.5), (Adp, 0.5)]),
    ("than", &[(Sconj, 0.5), (Adp, 0.5)]),
    ("like", &[(Adp, 0.5), (Verb, 0.5)]),
    ("up", &[(Adp, 0.5), (Adv, 0.5)]),
    ("down", &[(Adp, 0.5), (Adv, 0.5)]),
    ("out", &[(Adp, 0.4), (Adv, 0.6)]),
    ("off", &[(Adp, 0.5), (Adv, 0.5)]),
    ("over", &[(Adp, 0.7), (Adv, 0.3)]),
    ("back", &[(Adv, 0.6), (Noun, 0.4)]),
    ("so", &[(Adv, 0.5), (Cconj, 0.3), (Sconj, 0.2)]),
    ("yet", &[(Adv, 0.6), (Cconj, 0.4)]),
    ("when", &[(Sconj, 0.5), (Adv, 0.5)]),
    ("where", &[(Sconj, 0.4), (Adv, 0.6)]),
    ("more", &[(Adj, 0.5), (Adv, 0.5)]),
    ("less", &[(Adj, 0.5), (Adv, 0.5)]),
    ("much", &[(Adj, 0.6), (Adv, 0.4)]),
    ("still", &[(Adv, 0.9), (Adj, 0.1)]),
    ("well", &[(Adv, 0.6), (Intj, 0.2), (Adj, 0.2)]),
    ("enough", &[(Adv, 0.5), (Adj, 0.5)]),
    ("fast", &[(Adj, 0.5), (Adv, 0.5)]),
    ("hard", &[(Adj, 0.6), (Adv, 0.4)]),
    ("right", &[(Adj, 0.5), (Adv, 0.3), (Noun, 0.2)]),
    ("today", &[(Noun, 0.6), (Adv, 0.4)]),
    ("tomorrow", &[(Noun, 0.6), (Adv, 0.4)]),
    ("yesterday", &[(Noun, 0.6), (Adv, 0.4)]),
    ("please", &[(Intj, 0.5), (Verb, 0.5)]),
    ("open", &[(Adj, 0.5), (Verb, 0.5)]),
    ("light", &[(Noun, 0.6), (Adj, 0.4)]),
    ("low", &[(Adj, 0.9), (Adv, 0.1)]),
    ("little", &[(Adj, 0.8), (Adv, 0.2)]),
    ("run", &[(Verb, 0.6), (Noun, 0.4)]),
    ("work", &[(Verb, 0.5), (Noun, 0.5)]),
    ("look", &[(Verb, 0.7), (Noun, 0.3)]),
    ("call", &[(Verb, 0.6), (Noun, 0.4)]),
    ("need", &[(Verb, 0.7), (Noun, 0.3)]),
    ("help", &[(Verb, 0.6), (Noun, 0.4)]),
    ("talk", &[(Verb, 0.6), (Noun, 0.4)]),
    ("turn", &[(Verb, 0.6), (Noun, 0.4)]),
    ("start", &[(Verb, 0.6), (Noun, 0.4)]),
    ("show", &[(Verb, 0.6), (Noun, 0.4)]),
    ("play", &[(Verb, 0.6), (Noun, 0.4)]),
    ("move", &[(Verb, 0.6), (Noun, 0.4)]),
    ("live", &[(Verb, 0.8), (Adj, 0.2)]),
    ("hold", &[(Verb, 0.8), (Noun, 0.2)]),
    ("stand", &[(Verb, 0.7), (Noun, 0.3)]),
    ("set", &[(Verb, 0.6), (Noun, 0.4)]),
    ("change", &[(Verb, 0.5), (Noun, 0.5)]),
    ("lead", &[(Verb, 0.6), (Noun, 0.4)]),
    ("watch", &[(Verb, 0.6), (Noun, 0.4)]),
    ("read", &[(Verb, 0.9), (Noun, 0.1)]),
    ("walk", &[(Verb, 0.6), (Noun, 0.4)]),
    ("love", &[(Verb, 0.5), (Noun, 0.5)]),
    ("end", &[(Noun, 0.6), (Verb, 0.4)]),
    ("line", &[(Noun, 0.8), (Verb, 0.2)]),
    ("water", &[(Noun, 0.9), (Verb, 0.1)]),
    ("cost", &[(Verb, 0.5), (Noun, 0.5)]),
    ("cut", &[(Verb, 0.7), (Noun, 0.3)]),
    ("fall", &[(Verb, 0.6), (Noun, 0.4)]),
    ("dream", &[(Noun, 0.5), (Verb, 0.5)]),
    ("test", &[(Noun, 0.5), (Verb, 0.5)]),
    ("color", &[(Noun, 0.6), (Verb, 0.4)]),
    ("colour", &[(Noun, 0.6), (Verb, 0.4)]),
    ("tag", &[(Noun, 0.5), (Verb, 0.5)]),
    ("type", &[(Noun, 0.5), (Verb, 0.5)]),
    ("study", &[(Noun, 0.5), (Verb, 0.5)]),
    ("plan", &[(Noun, 0.5), (Verb, 0.5)]),
    ("hope", &[(Noun, 0.4), (Verb, 0.6)]),
    ("smile", &[(Noun, 0.4), (Verb, 0.6)]),
    ("stop", &[(Verb, 0.7), (Noun, 0.3)]),
    ("jump", &[(Verb, 0.7), (Noun, 0.3)]),
    ("sleep", &[(Verb, 0.6), (Noun, 0.4)]),
    ("drink", &[(Verb, 0.6), (Noun, 0.4)]),
    ("catch", &[(Verb, 0.8), (Noun, 0.2)]),
    ("bark", &[(Verb, 0.7), (Noun, 0.3)]),
    ("left", &[(Verb, 0.5), (Adj, 0.3), (Noun, 0.2)]),
];

lazy_static! {
    /// Built-in English lexicon
    pub static ref ENGLISH_LEXICON: Lexicon = Lexicon::english();
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
/// # Entry of a user lexicon file
pub enum LexiconEntryConfig {
    /// Unambiguous word
    Single(PartOfSpeech),
    /// Equally likely tags
    Several(Vec<PartOfSpeech>),
    /// Weighted tags
    Weighted(BTreeMap<PartOfSpeech, f64>),
}

#[derive(Debug, Clone, Deserialize)]
/// # User lexicon file
pub struct LexiconConfig {
    /// Word forms and their tags
    pub entries: BTreeMap<String, LexiconEntryConfig>,
}

impl Config for LexiconConfig {}

/// # Lexicon
/// Weighted part-of-speech candidates for lower-cased word forms. Weights of an entry are
/// normalized to sum to one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    entries: HashMap<String, Vec<(PartOfSpeech, f64)>>,
}

impl Lexicon {
    /// Creates an empty lexicon
    pub fn new() -> Lexicon {
        Lexicon::default()
    }

    /// Creates the built-in English lexicon. `ENGLISH_LEXICON` holds a shared instance.
    pub fn english() -> Lexicon {
        let mut lexicon = Lexicon::new();
        let word_classes: [(&[&str], PartOfSpeech); 14] = [
            (NOUNS, Noun),
            (VERBS, Verb),
            (IRREGULAR_VERB_FORMS, Verb),
            (ADJECTIVES, Adj),
            (ADVERBS, Adv),
            (NUMERALS, Num),
            (INTERJECTIONS, Intj),
            (PARTICLES, Part),
            (SUBORDINATORS, Sconj),
            (COORDINATORS, Cconj),
            (ADPOSITIONS, Adp),
            (AUXILIARIES, Aux),
            (POSSESSIVES, Pron),
            (PRONOUNS, Pron),
        ];
        for (words, pos) in word_classes {
            for word in words {
                lexicon.insert(word, vec![(pos, 1.0)]);
            }
        }
        for word in DETERMINERS {
            lexicon.insert(word, vec![(Det, 1.0)]);
        }
        for (word, candidates) in AMBIGUOUS {
            lexicon.insert(word, candidates.to_vec());
        }
        lexicon
    }

    /// Loads a user lexicon from a JSON file (see module documentation for the format).
    ///
    /// # Arguments
    ///
    /// * `lexicon_resource` - resource pointing to the lexicon file
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pos_colorizer::pipelines::lexicon::Lexicon;
    /// use pos_colorizer::resources::LocalResource;
    ///
    /// let lexicon = Lexicon::from_resource(&LocalResource::from("path/to/lexicon.json"))?;
    /// # Ok::<(), pos_colorizer::TaggerError>(())
    /// ```
    pub fn from_resource(lexicon_resource: &dyn ResourceProvider) -> Result<Lexicon, TaggerError> {
        let lexicon_path = lexicon_resource.get_local_path()?;
        let config = LexiconConfig::from_file(&lexicon_path)?;
        Lexicon::try_from(config)
    }

    /// Adds or replaces an entry. Weights are normalized; entries without positive weight are ignored.
    pub fn insert(&mut self, word: &str, candidates: Vec<(PartOfSpeech, f64)>) {
        let candidates = candidates
            .into_iter()
            .filter(|(_, weight)| *weight > 0.0)
            .collect::<Vec<(PartOfSpeech, f64)>>();
        let total: f64 = candidates.iter().map(|(_, weight)| weight).sum();
        if total <= 0.0 {
            return;
        }
        let normalized = candidates
            .into_iter()
            .map(|(pos, weight)| (pos, weight / total))
            .collect();
        self.entries.insert(word.to_lowercase(), normalized);
    }

    /// Merges another lexicon into this one, its entries taking precedence
    pub fn extend(&mut self, other: Lexicon) {
        self.entries.extend(other.entries);
    }

    /// Candidates for a lower-cased word form
    pub fn get(&self, word: &str) -> Option<&[(PartOfSpeech, f64)]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    /// Whether the word form is known with the given tag
    pub fn has_tag(&self, word: &str, pos: PartOfSpeech) -> bool {
        self.get(word)
            .map_or(false, |candidates| candidates.iter().any(|(tag, _)| *tag == pos))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<LexiconConfig> for Lexicon {
    type Error = TaggerError;

    fn try_from(config: LexiconConfig) -> Result<Self, Self::Error> {
        let mut lexicon = Lexicon::new();
        for (word, entry) in config.entries {
            let candidates = match entry {
                LexiconEntryConfig::Single(pos) => vec![(pos, 1.0)],
                LexiconEntryConfig::Several(tags) => tags.into_iter().map(|pos| (pos, 1.0)).collect(),
                LexiconEntryConfig::Weighted(weights) => weights.into_iter().collect(),
            };
            if candidates.iter().any(|(pos, _)| *pos == Space) {
                return Err(TaggerError::InvalidConfigurationError(format!(
                    "lexicon entry `{word}` cannot be tagged SPACE"
                )));
            }
            if !candidates.iter().any(|(_, weight)| *weight > 0.0) {
                return Err(TaggerError::InvalidConfigurationError(format!(
                    "lexicon entry `{word}` has no positive weight"
                )));
            }
            lexicon.insert(&word, candidates);
        }
        Ok(lexicon)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn english_lexicon_covers_closed_classes() {
        let lexicon = &*ENGLISH_LEXICON;
        assert_eq!(lexicon.get("the"), Some(&[(Det, 1.0)][..]));
        assert_eq!(lexicon.get("my"), Some(&[(Pron, 1.0)][..]));
        assert!(lexicon.has_tag("to", Part));
        assert!(lexicon.has_tag("to", Adp));
        assert!(lexicon.get("The").is_none());
    }

    #[test]
    fn ambiguous_entries_are_normalized() {
        let lexicon = &*ENGLISH_LEXICON;
        for word in ["that", "as", "right", "left"] {
            let total: f64 = lexicon.get(word).unwrap().iter().map(|(_, w)| w).sum();
            assert!((total - 1.0).abs() < 1e-9, "{word}");
        }
    }

    #[test]
    fn user_entries_override_built_in_ones() -> anyhow::Result<()> {
        let config: LexiconConfig = serde_json::from_str(
            r#"{"entries": {"Rust": "PROPN", "crate": ["NOUN", "VERB"], "the": {"DET": 3, "PRON": 1}}}"#,
        )?;
        let mut lexicon = Lexicon::english();
        lexicon.extend(Lexicon::try_from(config)?);

        assert_eq!(lexicon.get("rust"), Some(&[(Propn, 1.0)][..]));
        assert_eq!(lexicon.get("crate"), Some(&[(Noun, 0.5), (Verb, 0.5)][..]));
        assert_eq!(lexicon.get("the"), Some(&[(Det, 0.75), (Pron, 0.25)][..]));
        Ok(())
    }

    #[test]
    fn invalid_user_entries_are_rejected() -> anyhow::Result<()> {
        let config: LexiconConfig =
            serde_json::from_str(r#"{"entries": {"blank": "SPACE"}}"#)?;
        assert!(Lexicon::try_from(config).is_err());

        let config: LexiconConfig =
            serde_json::from_str(r#"{"entries": {"void": {"NOUN": 0.0}}}"#)?;
        assert!(Lexicon::try_from(config).is_err());
        Ok(())
    }
}
