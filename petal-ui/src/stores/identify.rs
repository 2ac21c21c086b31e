//! Identify flow state

use crate::display_types::IdentifiedFlower;
use dioxus::prelude::*;

/// State for the identify page
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct IdentifyState {
    pub loading: bool,
    pub error: Option<String>,
}

/// A completed identification, handed from the identify page to the
/// result page through context. Not persisted anywhere; reloading the
/// result page shows the "no result" guard.
#[derive(Clone, Debug, PartialEq)]
pub struct IdentificationOutcome {
    pub flower: IdentifiedFlower,
    /// Blob URL of the photo the user uploaded
    pub uploaded_image_url: Option<String>,
}
