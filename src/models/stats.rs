//! Repository statistics: languages, contributors, code frequency.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Bytes of code written in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageShare {
    #[serde(rename = "lang")]
    pub language: String,
    pub bytes: u64,
}

/// Turn the `{language: bytes}` object into an ordered list.
///
/// Key order of the response is kept. Entries whose value is not a
/// non-negative integer are skipped and logged at debug level.
pub fn language_shares(languages: Map<String, Value>) -> Vec<LanguageShare> {
    languages
        .into_iter()
        .filter_map(|(language, bytes)| match bytes.as_u64() {
            Some(bytes) => Some(LanguageShare { language, bytes }),
            None => {
                tracing::debug!(%language, value = %bytes, "skipping language without a byte count");
                None
            }
        })
        .collect()
}

/// A contributor to a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub login: String,
    /// Profile page.
    #[serde(rename = "html_url", default)]
    pub profile_url: Option<String>,
    #[serde(default)]
    pub contributions: u64,
}

/// One week of the `stats/code_frequency` series.
///
/// The API sends each week as `[unix_timestamp, additions, deletions]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(i64, i64, i64)", into = "(i64, i64, i64)")]
pub struct CodeFrequencyWeek {
    pub week: i64,
    pub additions: i64,
    pub deletions: i64,
}

impl From<(i64, i64, i64)> for CodeFrequencyWeek {
    fn from((week, additions, deletions): (i64, i64, i64)) -> Self {
        Self {
            week,
            additions,
            deletions,
        }
    }
}

impl From<CodeFrequencyWeek> for (i64, i64, i64) {
    fn from(w: CodeFrequencyWeek) -> Self {
        (w.week, w.additions, w.deletions)
    }
}

impl CodeFrequencyWeek {
    /// Start of the week.
    pub fn starts_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.week, 0)
    }

    pub fn net(&self) -> i64 {
        self.additions - self.deletions
    }
}

/// Sum of `additions - deletions` over every week.
///
/// This is a net line delta, not a line count: it will not match the
/// repository's current size in general.
pub fn net_line_delta(weeks: &[CodeFrequencyWeek]) -> i64 {
    weeks.iter().map(CodeFrequencyWeek::net).sum()
}

/// A `.gitignore` template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitignoreTemplate {
    pub name: String,
    pub source: String,
}
