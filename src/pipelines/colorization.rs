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

//! # Part-of-speech colors
//! A `ColorMap` assigns a display color to each part-of-speech label. Whitespace tokens are never
//! colored, labels mapped to an empty string are rendered unstyled and left out of the legend,
//! and labels missing from the table fall back to a neutral gray.
//!
//! ```
//! use pos_colorizer::pipelines::colorization::colorize;
//!
//! assert_eq!(colorize("NOUN", false), "#ff4444");
//! assert_eq!(colorize("NOUN", true), "");
//! assert_eq!(colorize("NOT_A_TAG", false), "#bbbbbb");
//! ```
//!
//! Tables can be loaded from JSON files; the key order is the legend order:
//!
//! ```json
//! {
//!     "fallback": "#cccccc",
//!     "colors": {"NOUN": "#ff0000", "VERB": "#00ff00", "PUNCT": ""}
//! }
//! ```

use crate::common::error::TaggerError;
use crate::common::Config;
use crate::pipelines::common::Token;
use crate::resources::ResourceProvider;
use lazy_static::lazy_static;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::path::Path;

/// Color of tokens whose category is missing from the color table
pub const FALLBACK_COLOR: &str = "#bbbbbb";

const DEFAULT_COLORS: [(&str, &str); 18] = [
    ("NOUN", "#ff4444"),
    ("PROPN", "#ff4444"),
    ("VERB", "#44cc44"),
    ("AUX", "#44aa44"),
    ("ADJ", "#4488ff"),
    ("ADV", "#ffaa44"),
    ("PRON", "#b266ff"),
    ("CCONJ", "#00cccc"),
    ("SCONJ", "#00cccc"),
    ("ADP", "#bbcc44"),
    ("DET", "#66bb66"),
    ("INTJ", "#ff66cc"),
    ("NUM", "#fa8072"),
    ("PART", "#a9a9a9"),
    ("PUNCT", "#000000"),
    ("SYM", "#d2691e"),
    ("X", "#888888"),
    ("SPACE", ""),
];

lazy_static! {
    /// Default color table
    pub static ref POS_COLORS: ColorMap = ColorMap::default();
}

/// Color of a token in the default color table (see `ColorMap::colorize`)
pub fn colorize(category: &str, is_whitespace: bool) -> &'static str {
    POS_COLORS.colorize(category, is_whitespace)
}

#[derive(Debug, Clone, Deserialize)]
/// # Color table file
pub struct ColorMapConfig {
    /// Color of categories missing from `colors`
    #[serde(default = "default_fallback")]
    pub fallback: String,
    /// Category labels and their colors, in legend order
    pub colors: serde_json::Map<String, serde_json::Value>,
}

fn default_fallback() -> String {
    FALLBACK_COLOR.to_string()
}

impl Config for ColorMapConfig {}

/// # Category to color table
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMap {
    entries: Vec<(String, String)>,
    fallback: String,
}

impl Default for ColorMap {
    fn default() -> Self {
        ColorMap::new(
            DEFAULT_COLORS
                .iter()
                .map(|(category, color)| (category.to_string(), color.to_string())),
            FALLBACK_COLOR,
        )
    }
}

impl ColorMap {
    /// Creates a color table. Later entries for an already present category replace its color
    /// and keep its position.
    ///
    /// # Arguments
    ///
    /// * `entries` - category labels and colors, in legend order
    /// * `fallback` - color of categories missing from the table
    pub fn new<I, S>(entries: I, fallback: S) -> ColorMap
    where
        I: IntoIterator<Item = (String, String)>,
        S: Into<String>,
    {
        let mut deduplicated: Vec<(String, String)> = Vec::new();
        for (category, color) in entries {
            match deduplicated.iter_mut().find(|(known, _)| *known == category) {
                Some(entry) => entry.1 = color,
                None => deduplicated.push((category, color)),
            }
        }
        ColorMap {
            entries: deduplicated,
            fallback: fallback.into(),
        }
    }

    /// Loads a color table from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `color_resource` - resource pointing to the color table file
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pos_colorizer::pipelines::colorization::ColorMap;
    /// use pos_colorizer::resources::LocalResource;
    ///
    /// let color_map = ColorMap::from_resource(&LocalResource::from("path/to/colors.json"))?;
    /// # Ok::<(), pos_colorizer::TaggerError>(())
    /// ```
    pub fn from_resource(color_resource: &dyn ResourceProvider) -> Result<ColorMap, TaggerError> {
        let color_path = color_resource.get_local_path()?;
        ColorMap::from_file(color_path)
    }

    /// Loads a color table from a JSON file path (see `from_resource`)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ColorMap, TaggerError> {
        ColorMap::try_from(ColorMapConfig::from_file(path)?)
    }

    /// Color of a token.
    ///
    /// # Arguments
    ///
    /// * `category` - part-of-speech label of the token
    /// * `is_whitespace` - whether the token is a whitespace run
    ///
    /// # Returns
    ///
    /// * empty string for whitespace, the mapped color (possibly empty) for known categories,
    ///   the fallback color otherwise
    pub fn colorize(&self, category: &str, is_whitespace: bool) -> &str {
        if is_whitespace {
            return "";
        }
        self.get(category).unwrap_or(self.fallback.as_str())
    }

    /// Color mapped to a category, if any
    pub fn get(&self, category: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(known, _)| known == category)
            .map(|(_, color)| color.as_str())
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// All entries, in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(category, color)| (category.as_str(), color.as_str()))
    }

    /// Entries shown in a legend: the ones with a color, in table order
    pub fn legend(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(_, color)| !color.is_empty())
    }

    /// Attaches a color to each token
    pub fn annotate(&self, tokens: Vec<Token>) -> Vec<AnnotatedToken> {
        tokens
            .into_iter()
            .map(|token| {
                let color = self
                    .colorize(token.category.as_str(), token.is_whitespace)
                    .to_string();
                AnnotatedToken { token, color }
            })
            .collect()
    }
}

impl TryFrom<ColorMapConfig> for ColorMap {
    type Error = TaggerError;

    fn try_from(config: ColorMapConfig) -> Result<Self, Self::Error> {
        let mut entries = Vec::with_capacity(config.colors.len());
        for (category, color) in config.colors {
            match color {
                serde_json::Value::String(color) => entries.push((category, color)),
                other => {
                    return Err(TaggerError::InvalidConfigurationError(format!(
                        "color of `{category}` must be a string, got {other}"
                    )))
                }
            }
        }
        Ok(ColorMap::new(entries, config.fallback))
    }
}

/// Serialized as a JSON object whose keys keep the table order
impl Serialize for ColorMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, color) in &self.entries {
            map.serialize_entry(category, color)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// # Token with its display color
pub struct AnnotatedToken {
    #[serde(flatten)]
    pub token: Token,
    /// Display color, empty for whitespace and unstyled categories
    pub color: String,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::pipelines::common::PartOfSpeech;

    #[test]
    fn default_table_colors() {
        assert_eq!(colorize("DET", false), "#66bb66");
        assert_eq!(colorize("VERB", false), "#44cc44");
        assert_eq!(colorize("PUNCT", false), "#000000");
        assert_eq!(colorize("CCONJ", false), "#00cccc");
        assert_eq!(colorize("SPACE", false), "");
        assert_eq!(colorize("SPACE", true), "");
    }

    #[test]
    fn default_table_covers_the_tag_vocabulary() {
        for pos in PartOfSpeech::ALL {
            assert!(POS_COLORS.get(pos.as_str()).is_some(), "{pos}");
        }
    }

    #[test]
    fn legend_skips_uncolored_entries() {
        let legend = POS_COLORS.legend().map(|(category, _)| category).collect::<Vec<_>>();
        assert_eq!(legend.first(), Some(&"NOUN"));
        assert!(!legend.contains(&"SPACE"));
        assert_eq!(legend.len(), 17);
    }

    #[test]
    fn later_entries_replace_earlier_ones() {
        let color_map = ColorMap::new(
            vec![
                ("NOUN".to_string(), "#111111".to_string()),
                ("VERB".to_string(), "#222222".to_string()),
                ("NOUN".to_string(), "#333333".to_string()),
            ],
            "#999999",
        );
        assert_eq!(
            color_map.iter().collect::<Vec<_>>(),
            [("NOUN", "#333333"), ("VERB", "#222222")]
        );
        assert_eq!(color_map.colorize("ADJ", false), "#999999");
    }

    #[test]
    fn serializes_in_table_order() -> anyhow::Result<()> {
        let json = serde_json::to_string(&*POS_COLORS)?;
        assert!(json.starts_with(r##"{"NOUN":"#ff4444","PROPN":"#ff4444","VERB""##));
        assert!(json.ends_with(r#""SPACE":""}"#));
        Ok(())
    }

    #[test]
    fn config_with_non_string_color_is_rejected() -> anyhow::Result<()> {
        let config: ColorMapConfig = serde_json::from_str(r#"{"colors": {"NOUN": 12}}"#)?;
        assert!(ColorMap::try_from(config).is_err());
        Ok(())
    }
}
