//! Search-bar autocomplete suggestions.

use crate::ids::HistoryId;
use crate::search::FilterPatch;
use serde::{Deserialize, Serialize};

/// Where a suggestion comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuggestionKind {
    /// A previous search of this session.
    #[serde(rename = "historial")]
    History,
    /// Live match against the catalog text.
    #[serde(rename = "coincidencia")]
    TextMatch,
}

/// One autocomplete entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "texto")]
    pub text: String,
    #[serde(rename = "tipo")]
    pub kind: SuggestionKind,
    /// Facets captured with a history entry.
    #[serde(rename = "filtros", default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<FilterPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<HistoryId>,
}

impl Suggestion {
    /// A live text match.
    pub fn text_match(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SuggestionKind::TextMatch,
            filters: None,
            id: None,
        }
    }

    /// A history entry.
    pub fn history(id: impl Into<HistoryId>, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SuggestionKind::History,
            filters: None,
            id: Some(id.into()),
        }
    }

    /// Attach a captured facet snapshot.
    pub fn with_filters(mut self, filters: FilterPatch) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn is_history(&self) -> bool {
        self.kind == SuggestionKind::History
    }

    /// Only history entries with an id can be deleted.
    pub fn is_deletable(&self) -> bool {
        self.is_history() && self.id.is_some()
    }

    /// Facet snapshot to re-apply when this entry is selected.
    pub fn history_filters(&self) -> Option<&FilterPatch> {
        if self.is_history() {
            self.filters.as_ref()
        } else {
            None
        }
    }
}

/// The suggestion dropdown contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestionList(Vec<Suggestion>);

impl SuggestionList {
    pub fn new(items: Vec<Suggestion>) -> Self {
        Self(items)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Suggestion> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Suggestion] {
        &self.0
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Replace the contents.
    pub fn replace(&mut self, items: Vec<Suggestion>) {
        self.0 = items;
    }

    /// Remove the entry with this id. Returns whether anything was removed.
    pub fn remove_id(&mut self, id: &HistoryId) -> bool {
        let before = self.0.len();
        self.0.retain(|s| s.id.as_ref() != Some(id));
        self.0.len() != before
    }

    /// Drop every history entry, keeping text matches.
    pub fn clear_history(&mut self) {
        self.0.retain(|s| !s.is_history());
    }
}

impl From<Vec<Suggestion>> for SuggestionList {
    fn from(items: Vec<Suggestion>) -> Self {
        Self(items)
    }
}

impl<'a> IntoIterator for &'a SuggestionList {
    type Item = &'a Suggestion;
    type IntoIter = std::slice::Iter<'a, Suggestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
