//! Species detail page state store

use crate::display_types::SpeciesProfile;
use dioxus::prelude::*;

/// State for the species detail page
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct SpeciesDetailState {
    pub profile: Option<SpeciesProfile>,
    pub loading: bool,
    pub error: Option<String>,
}
