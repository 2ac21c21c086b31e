//! Search page state stores

use crate::display_types::SpeciesSummary;
use dioxus::prelude::*;

/// State for the full search results grid
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct SearchViewState {
    /// Query the current results belong to
    pub query: String,
    pub results: Vec<SpeciesSummary>,
    pub loading: bool,
    /// Whether a search has been run at all (drives the empty states)
    pub searched: bool,
}

/// State for the search bar suggestion dropdown
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct SuggestionsState {
    pub items: Vec<SpeciesSummary>,
    pub loading: bool,
    pub open: bool,
}
