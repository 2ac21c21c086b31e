//! Catalogue view state stores

use crate::display_types::{CatalogueEntry, FilterChoice};
use dioxus::prelude::*;

/// State for the catalogue results grid
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct CatalogueViewState {
    /// Entries for the current page
    pub entries: Vec<CatalogueEntry>,
    /// Total matching species across all pages
    pub total: u64,
    /// Current 1-based page
    pub page: u32,
    /// Total number of pages
    pub total_pages: u32,
    /// Whether a fetch is in flight
    pub loading: bool,
    /// Error message if the last fetch failed
    pub error: Option<String>,
}

/// Available filter values, fetched once from the API
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct FilterOptionsState {
    pub colors: Vec<FilterChoice>,
    pub countries: Vec<FilterChoice>,
}
