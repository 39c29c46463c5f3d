//! Wire types shared by several endpoint response shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};


/// Open key/value bag for the vendor's free-form `Properties` objects.
pub type PropertyBag = Map<String, Value>;

/// One localized text value.
///
/// Names and descriptions always arrive as a list of these, even when only a
/// single locale is present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct LocaleDescription {
    #[serde(rename = "Locale")]
    pub locale: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl LocaleDescription {
    pub fn new(locale: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            description: description.into(),
        }
    }
}

/// Lookup helpers for a list of [`LocaleDescription`]s.
pub trait Localized {
    /// Text for `locale`, compared case-insensitively (`en-GB` == `en-gb`).
    fn for_locale(&self, locale: &str) -> Option<&str>;

    /// First text in the list, whatever its locale.
    fn first_text(&self) -> Option<&str>;
}

impl Localized for [LocaleDescription] {
    fn for_locale(&self, locale: &str) -> Option<&str> {
        self.iter()
            .find(|d| d.locale.eq_ignore_ascii_case(locale))
            .map(|d| d.description.as_str())
    }

    fn first_text(&self) -> Option<&str> {
        self.first().map(|d| d.description.as_str())
    }
}

/// Paginated list envelope.
///
/// An empty or null `ContinuationToken` means there are no further pages.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Page<T> {
    #[serde(rename = "ContinuationToken")]
    pub continuation_token: Option<String>,
    #[serde(rename = "ContinuationHash")]
    pub continuation_hash: Option<String>,
    #[serde(rename = "Results")]
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Token to pass back for the next page, `None` on the last page.
    pub fn next_token(&self) -> Option<&str> {
        self.continuation_token
            .as_deref()
            .filter(|token| !token.is_empty())
    }

    pub fn has_more(&self) -> bool {
        self.next_token().is_some()
    }

    pub fn into_results(self) -> Vec<T> {
        self.results
    }
}

/// Identifiers that address one match in the timeline endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MatchKey {
    pub competition_id: String,
    pub season_id: String,
    pub stage_id: String,
    pub match_id: String,
}

impl MatchKey {
    pub fn new(
        competition_id: impl Into<String>,
        season_id: impl Into<String>,
        stage_id: impl Into<String>,
        match_id: impl Into<String>,
    ) -> Self {
        Self {
            competition_id: competition_id.into(),
            season_id: season_id.into(),
            stage_id: stage_id.into(),
            match_id: match_id.into(),
        }
    }
}

/// Identifiers that address one stage of a season, used for standings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StageKey {
    pub competition_id: String,
    pub season_id: String,
    pub stage_id: String,
}

impl StageKey {
    pub fn new(
        competition_id: impl Into<String>,
        season_id: impl Into<String>,
        stage_id: impl Into<String>,
    ) -> Self {
        Self {
            competition_id: competition_id.into(),
            season_id: season_id.into(),
            stage_id: stage_id.into(),
        }
    }
}
