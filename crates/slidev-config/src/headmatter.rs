//! Headmatter parsing.
//!
//! Headmatter values are free-form YAML written by users, so scalar fields
//! are read leniently: numbers become strings and `false`/`null` mean unset.

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use crate::fonts::FontOptions;

/// User-authored presentation metadata.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Headmatter {
    /// Presentation title.
    #[serde(deserialize_with = "lenient_text")]
    pub title: Option<String>,
    /// Title template, `%s` is replaced by the title.
    #[serde(deserialize_with = "lenient_text")]
    pub title_template: Option<String>,
    /// Presentation description.
    #[serde(deserialize_with = "lenient_text")]
    pub info: Option<String>,
    /// Presentation author.
    #[serde(deserialize_with = "lenient_text")]
    pub author: Option<String>,
    /// Keywords, either a single string or a list.
    #[serde(deserialize_with = "lenient_keywords")]
    pub keywords: Option<Keywords>,
    /// Favicon URL or path.
    #[serde(deserialize_with = "lenient_text")]
    pub favicon: Option<String>,
    /// Font configuration.
    pub fonts: Option<FontOptions>,
}

impl Headmatter {
    /// Parse headmatter from YAML content.
    ///
    /// Empty content yields the default headmatter.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(trimmed)
    }
}

/// Keywords given either as one string or as an ordered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keywords {
    /// A single keyword string, used verbatim.
    One(String),
    /// An ordered keyword list.
    Many(Vec<String>),
}

impl Keywords {
    /// Flatten into the comma-separated form used in the keywords meta tag.
    ///
    /// ```
    /// use slidev_config::Keywords;
    ///
    /// let keywords = Keywords::Many(vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]);
    /// assert_eq!(keywords.joined(), "a, b, c");
    /// ```
    #[must_use]
    pub fn joined(&self) -> String {
        match self {
            Self::One(keyword) => keyword.clone(),
            Self::Many(keywords) => keywords.join(", "),
        }
    }
}

/// Split the leading `---` fenced headmatter block from a slide deck.
///
/// Returns `(yaml, rest)`. When the source has no headmatter the YAML part
/// is empty and `rest` is the whole source.
pub fn split_frontmatter(source: &str) -> (&str, &str) {
    let Some(after_open) = strip_fence(source) else {
        return ("", source);
    };

    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let yaml = &after_open[..offset];
            let rest = &after_open[offset + line.len()..];
            return (yaml, rest);
        }
        offset += line.len();
    }

    // Unterminated block
    ("", source)
}

/// Strip the opening `---` line, returning what follows it.
fn strip_fence(source: &str) -> Option<&str> {
    let rest = source.strip_prefix("---")?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

/// Deserialize a scalar as text: strings and numbers are kept, `true` is
/// rendered as text, `false` and `null` are unset.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_text))
}

/// Deserialize keywords: a scalar becomes [`Keywords::One`], a sequence
/// becomes [`Keywords::Many`] with non-text items dropped.
fn lenient_keywords<'de, D>(deserializer: D) -> Result<Option<Keywords>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match &value {
        Some(Value::Sequence(items)) => Some(Keywords::Many(
            items.iter().filter_map(scalar_text).collect(),
        )),
        Some(other) => scalar_text(other).map(Keywords::One),
        None => None,
    })
}

/// Deserialize a string-or-list value into a list.
///
/// A single string is split on commas, so `"Inter, Roboto"` and
/// `[Inter, Roboto]` are equivalent.
pub(crate) fn string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(value) = value else {
        return Ok(None);
    };

    let items = match &value {
        Value::Sequence(items) => items.iter().filter_map(scalar_text).collect(),
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect(),
        other => scalar_text(other).into_iter().collect(),
    };
    Ok(Some(items))
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_owned()),
        _ => None,
    }
}
