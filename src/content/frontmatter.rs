//! Front-matter parsing

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::error::FrontMatterError;

/// Front-matter fields of a post
///
/// The mapping is kept as parsed, in source order. Only `date` is inspected
/// when ordering posts; every other field is passed through to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostMetadata(Mapping);

impl PostMetadata {
    /// Wrap an already-parsed mapping
    pub fn new(fields: Mapping) -> Self {
        Self(fields)
    }

    /// Parse front-matter from the top of a markdown document
    /// Returns (metadata, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let content = content.trim_start();

        let (first, rest) = split_line(content);
        if first.trim_end() != "---" {
            // No front-matter block, the whole document is body
            return Ok((Self::default(), content));
        }

        let mut consumed = 0;
        let mut remaining = rest;
        let (yaml, body) = loop {
            if remaining.is_empty() {
                return Err(FrontMatterError::Unterminated);
            }
            let (line, next) = split_line(remaining);
            if line.trim_end() == "---" {
                break (&rest[..consumed], next);
            }
            consumed += remaining.len() - next.len();
            remaining = next;
        };

        let body = body.trim_start_matches(['\n', '\r']);
        if yaml.trim().is_empty() {
            return Ok((Self::default(), body));
        }

        match serde_yaml::from_str::<Value>(yaml)? {
            Value::Mapping(fields) => Ok((Self(fields), body)),
            Value::Null => Ok((Self::default(), body)),
            _ => Err(FrontMatterError::NotAMapping),
        }
    }

    /// Look up a raw field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The `date` field, when it is a string
    pub fn date(&self) -> Option<&str> {
        self.get("date").and_then(Value::as_str)
    }

    /// The `date` field used as a sort key; missing or non-string dates sort as ""
    pub fn date_key(&self) -> &str {
        self.date().unwrap_or_default()
    }

    /// The `title` field, when it is a string
    pub fn title(&self) -> Option<&str> {
        self.get("title").and_then(Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> &Mapping {
        &self.0
    }
}

/// Split off the first line, dropping the newline
fn split_line(s: &str) -> (&str, &str) {
    match s.find('\n') {
        Some(pos) => (&s[..pos], &s[pos + 1..]),
        None => (s, ""),
    }
}
