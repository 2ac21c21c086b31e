//! petal-web - Flower identification web app
//!
//! Pages, routing, and the API client. All rendering goes through the
//! pure view components in petal-ui; this crate wires them to the remote
//! identification API and the URL.

pub mod api;
pub mod catalogue_query;
pub mod config;
pub mod pages;

use api::ApiClient;
use catalogue_query::CatalogueQuery;
use config::ApiConfig;
use dioxus::prelude::*;
use pages::{AppLayout, Catalogue, FlowerResult, Home, Identify, Search, SpeciesDetail};
use petal_ui::stores::IdentificationOutcome;

pub const FAVICON: Asset = asset!("/assets/favicon.ico");
pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/identify")]
    Identify {},
    #[route("/result")]
    FlowerResult {},
    #[route("/search?:q")]
    Search { q: String },
    #[route("/catalogue?:..query")]
    Catalogue { query: CatalogueQuery },
    #[route("/species/:species_id")]
    SpeciesDetail { species_id: String },
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| ApiClient::new(ApiConfig::from_build_env()));
    // Hand-off slot for the identify -> result transition
    use_context_provider(|| Signal::new(None::<IdentificationOutcome>));

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen bg-background", Router::<Route> {} }
    }
}
