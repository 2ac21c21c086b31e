use crate::api::{ApiClient, ApiError};
use crate::catalogue_query::CatalogueQuery;
use crate::Route;
use dioxus::prelude::*;
use petal_ui::stores::{SpeciesDetailState, SpeciesDetailStateStoreExt};
use petal_ui::{
    ArrowLeftIcon, CalendarIcon, DropletIcon, ErrorDisplay, ImageIcon, LoadingSpinner,
    PageContainer,
};

#[component]
pub fn SpeciesDetail(species_id: ReadSignal<String>) -> Element {
    let api: ApiClient = use_context();
    let state = use_store(SpeciesDetailState::default);
    let mut retry_nonce = use_signal(|| 0u32);

    use_effect(move || {
        let id = species_id();
        let _ = retry_nonce();
        let api = api.clone();
        spawn(async move {
            state.loading().set(true);
            state.error().set(None);
            match api.species_detail(&id).await {
                Ok(profile) => {
                    state.profile().set(Some(profile));
                    state.loading().set(false);
                }
                Err(e) => {
                    tracing::error!("species detail fetch failed: {e}");
                    let message = match e {
                        ApiError::Status { status: 404, .. } => {
                            "We don't have a record of that species.".to_string()
                        }
                        _ => "Could not load this species.".to_string(),
                    };
                    state.profile().set(None);
                    state.error().set(Some(message));
                    state.loading().set(false);
                }
            }
        });
    });

    rsx! {
        PageContainer {
            button {
                class: "inline-flex items-center gap-2 text-muted-foreground hover:text-foreground transition-colors mb-8",
                onclick: move |_| {
                    navigator().push(Route::Catalogue { query: CatalogueQuery::default() });
                },
                ArrowLeftIcon { class: "w-4 h-4" }
                "Back to Catalogue"
            }

            if state.loading()() {
                LoadingSpinner { message: "Loading species..." }
            } else if let Some(message) = state.error()() {
                div { class: "max-w-md mx-auto",
                    ErrorDisplay {
                        message,
                        on_retry: move |_| {
                            retry_nonce += 1;
                        },
                    }
                }
            } else if let Some(profile) = state.profile()() {
                div { class: "max-w-6xl mx-auto bg-card rounded-2xl shadow-card overflow-hidden",
                    div { class: "grid md:grid-cols-2",
                        div { class: "bg-muted flex items-center justify-center p-8",
                            if let Some(url) = &profile.image_url {
                                img {
                                    src: "{url}",
                                    alt: "{profile.scientific_name}",
                                    class: "w-full max-w-md aspect-square object-cover rounded-lg shadow-card",
                                }
                            } else {
                                ImageIcon { class: "w-16 h-16 text-muted-foreground/50" }
                            }
                        }

                        div { class: "p-8 space-y-6",
                            div {
                                h1 { class: "text-3xl md:text-4xl font-serif font-bold text-foreground mb-1",
                                    "{profile.display_name()}"
                                }
                                p { class: "text-lg text-muted-foreground italic",
                                    "{profile.scientific_name}"
                                }
                                if !profile.other_names().is_empty() {
                                    p { class: "text-sm text-muted-foreground mt-2",
                                        "Also known as: "
                                        {profile.other_names().join(", ")}
                                    }
                                }
                            }

                            if let Some(description) = &profile.description {
                                p { class: "text-foreground leading-relaxed", "{description}" }
                            }

                            if !profile.bloom_season.is_empty() {
                                div {
                                    h3 { class: "flex items-center gap-2 font-serif text-lg font-semibold text-foreground mb-2",
                                        CalendarIcon { class: "w-5 h-5 text-primary" }
                                        "Bloom season"
                                    }
                                    div { class: "flex flex-wrap gap-2",
                                        for season in profile.bloom_season.iter() {
                                            span {
                                                key: "{season}",
                                                class: "px-3 py-1 rounded-full bg-primary/10 text-primary text-sm capitalize",
                                                "{season}"
                                            }
                                        }
                                    }
                                }
                            }

                            if let Some(care_tips) = &profile.care_tips {
                                div {
                                    h3 { class: "flex items-center gap-2 font-serif text-lg font-semibold text-foreground mb-2",
                                        DropletIcon { class: "w-5 h-5 text-primary" }
                                        "Care tips"
                                    }
                                    p { class: "text-muted-foreground leading-relaxed", "{care_tips}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
