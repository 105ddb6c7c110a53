use crate::utils::error::{ParkError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Value the UI uses for "nothing selected" in both dropdowns.
pub const NO_SELECTION: &str = "none";

/// Lookup key for a state's park list. Matched exactly, never normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateCode(String);

impl StateCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Interprets a state selector value; `None` for the placeholder or an empty value.
    pub fn from_selection(value: &str) -> Option<Self> {
        if value.is_empty() || value == NO_SELECTION {
            None
        } else {
            Some(Self::new(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A park display name after formatting. Only built through [`format_park_name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParkName(String);

impl ParkName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ParkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Title-cases every space-separated word except the exact lowercase words
/// `of` and `the`. Separators are kept as-is, so double spaces survive.
pub fn format_park_name(raw: &str) -> ParkName {
    let words: Vec<String> = raw.split(' ').map(format_word).collect();
    ParkName(words.join(" "))
}

fn format_word(word: &str) -> String {
    if word == "of" || word == "the" {
        return word.to_string();
    }

    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Splits a newline-delimited park list into names, dropping blank lines and `\r`.
pub fn parse_park_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkRecord {
    pub image: String,
    #[serde(deserialize_with = "year_from_text_or_number")]
    pub year: String,
    pub name: String,
}

impl ParkRecord {
    /// Builds a record from a park file: first line image URL, second line year.
    /// Lines are positional, so a blank image line stays blank.
    pub fn from_file_contents(name: &ParkName, contents: &str) -> Result<Self> {
        let mut lines = contents.lines();
        let malformed = |reason: &str| ParkError::MalformedRecord {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        let image = lines.next().ok_or_else(|| malformed("missing image line"))?;
        let year = lines.next().ok_or_else(|| malformed("missing year line"))?;

        Ok(Self {
            image: image.trim().to_string(),
            year: year.trim().to_string(),
            name: name.to_string(),
        })
    }

    pub fn alt_text(&self) -> String {
        format!("{} National Park", self.name)
    }
}

fn year_from_text_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Text(String),
        Number(i64),
    }

    Ok(match Year::deserialize(deserializer)? {
        Year::Text(text) => text,
        Year::Number(n) => n.to_string(),
    })
}
