use crate::api::ApiClient;
use crate::catalogue_query::CatalogueQuery;
use crate::Route;
use dioxus::prelude::*;
use petal_ui::{CameraIcon, FlowerIcon, PageContainer, SearchIcon};

#[component]
pub fn Home() -> Element {
    let api: ApiClient = use_context();

    // Wake the API early so the first identify/search is not hit by a
    // cold start.
    use_future(move || {
        let api = api.clone();
        async move {
            if !api.health().await {
                tracing::warn!("identification API is not reachable");
            }
        }
    });

    rsx! {
        PageContainer {
            section { class: "text-center max-w-2xl mx-auto py-12",
                h1 { class: "font-serif text-4xl md:text-5xl font-bold text-foreground mb-4",
                    "What flower is that?"
                }
                p { class: "text-lg text-muted-foreground mb-8",
                    "Snap a photo to identify a flower, or browse the catalogue of species."
                }
                div { class: "flex flex-wrap items-center justify-center gap-3",
                    button {
                        class: "btn-botanical",
                        onclick: move |_| {
                            navigator().push(Route::Identify {});
                        },
                        "Identify a Flower"
                    }
                    button {
                        class: "btn-botanical-outline",
                        onclick: move |_| {
                            navigator()
                                .push(Route::Catalogue {
                                    query: CatalogueQuery::default(),
                                });
                        },
                        "Browse the Catalogue"
                    }
                }
            }

            section { class: "grid md:grid-cols-3 gap-6 max-w-4xl mx-auto mt-8",
                FeatureCard {
                    icon: rsx! { CameraIcon { class: "w-8 h-8 text-primary" } },
                    title: "Photo identification",
                    body: "Upload a photo and get the most likely species with a confidence score.",
                }
                FeatureCard {
                    icon: rsx! { SearchIcon { class: "w-8 h-8 text-primary" } },
                    title: "Search by name",
                    body: "Look species up by common or scientific name, with live suggestions.",
                }
                FeatureCard {
                    icon: rsx! { FlowerIcon { class: "w-8 h-8 text-primary" } },
                    title: "Species catalogue",
                    body: "Browse and filter the full catalogue by color, country, and popularity.",
                }
            }
        }
    }
}

#[component]
fn FeatureCard(icon: Element, title: &'static str, body: &'static str) -> Element {
    rsx! {
        div { class: "bg-card rounded-2xl shadow-soft p-6 text-center",
            div { class: "w-14 h-14 rounded-full bg-primary/10 flex items-center justify-center mx-auto mb-4",
                {icon}
            }
            h3 { class: "font-serif text-lg font-semibold text-foreground mb-2", "{title}" }
            p { class: "text-sm text-muted-foreground", "{body}" }
        }
    }
}
