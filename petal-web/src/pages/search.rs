use crate::api::ApiClient;
use crate::Route;
use dioxus::prelude::*;
use petal_ui::debounce::{use_debounce, DEBOUNCE_WINDOW_MS};
use petal_ui::stores::{
    SearchViewState, SearchViewStateStoreExt, SuggestionsState, SuggestionsStateStoreExt,
};
use petal_ui::{LoadingSpinner, PageContainer, SearchBarView, SpeciesCard};

/// Result count for a submitted search
const SEARCH_RESULT_LIMIT: u32 = 20;
/// Result count for the live suggestion dropdown
const SUGGESTION_LIMIT: u32 = 5;
/// Suggestions only kick in once the query is long enough to be useful
const MIN_SUGGESTION_CHARS: usize = 2;

#[component]
pub fn Search(q: ReadSignal<String>) -> Element {
    let api: ApiClient = use_context();
    let state = use_store(SearchViewState::default);
    let suggestions = use_store(SuggestionsState::default);
    let mut input = use_signal(|| q.peek().clone());

    // Keep the input in step with the URL on back/forward navigation
    use_effect(move || {
        input.set(q());
    });

    // Full search runs off the URL, so a submitted query is linkable
    let search_api = api.clone();
    use_effect(move || {
        let query = q().trim().to_string();
        let api = search_api.clone();
        spawn(async move {
            if query.is_empty() {
                state.query().set(String::new());
                state.results().set(Vec::new());
                state.searched().set(false);
                state.loading().set(false);
                return;
            }
            state.loading().set(true);
            match api.search(&query, SEARCH_RESULT_LIMIT).await {
                Ok(results) => {
                    state.query().set(query);
                    state.results().set(results);
                    state.searched().set(true);
                    state.loading().set(false);
                }
                Err(e) => {
                    tracing::error!("search failed: {e}");
                    state.query().set(query);
                    state.results().set(Vec::new());
                    state.searched().set(true);
                    state.loading().set(false);
                }
            }
        });
    });

    let suggestion_api = api.clone();
    let mut debounce = use_debounce(DEBOUNCE_WINDOW_MS, move |value: String| {
        let api = suggestion_api.clone();
        spawn(async move {
            let trimmed = value.trim().to_string();
            if trimmed.len() < MIN_SUGGESTION_CHARS {
                suggestions.items().set(Vec::new());
                suggestions.open().set(false);
                suggestions.loading().set(false);
                return;
            }
            suggestions.loading().set(true);
            match api.search(&trimmed, SUGGESTION_LIMIT).await {
                Ok(items) => {
                    suggestions.open().set(!items.is_empty());
                    suggestions.items().set(items);
                    suggestions.loading().set(false);
                }
                Err(e) => {
                    tracing::debug!("suggestion fetch failed: {e}");
                    suggestions.items().set(Vec::new());
                    suggestions.open().set(false);
                    suggestions.loading().set(false);
                }
            }
        });
    });

    let results = state.results()();
    let searched = state.searched()();
    let loading = state.loading()();
    let current_query = state.query()();

    rsx! {
        PageContainer {
            div { class: "max-w-2xl mx-auto mb-10",
                h1 { class: "font-serif text-3xl md:text-4xl font-bold text-foreground text-center mb-6",
                    "Search Flowers"
                }
                SearchBarView {
                    value: input(),
                    loading: suggestions.loading()(),
                    suggestions: suggestions.items()(),
                    show_dropdown: suggestions.open()(),
                    on_input: move |value: String| {
                        input.set(value.clone());
                        debounce.queue(value);
                    },
                    on_submit: move |query: String| {
                        debounce.cancel();
                        suggestions.open().set(false);
                        navigator().push(Route::Search { q: query });
                    },
                    on_clear: move |_| {
                        debounce.cancel();
                        input.set(String::new());
                        suggestions.items().set(Vec::new());
                        suggestions.open().set(false);
                        navigator().replace(Route::Search { q: String::new() });
                    },
                    on_suggestion_click: move |species_id: String| {
                        suggestions.open().set(false);
                        navigator().push(Route::SpeciesDetail { species_id });
                    },
                }
            }

            if loading {
                LoadingSpinner { message: "Searching..." }
            } else if searched && results.is_empty() {
                div { class: "text-center py-16",
                    p { class: "text-muted-foreground",
                        "No flowers found for \"{current_query}\"."
                    }
                }
            } else if !results.is_empty() {
                div { class: "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6 max-w-5xl mx-auto",
                    for species in results {
                        SpeciesCard {
                            key: "{species.id}",
                            species,
                            on_click: move |species_id: String| {
                                navigator().push(Route::SpeciesDetail { species_id });
                            },
                        }
                    }
                }
            } else {
                div { class: "text-center py-16",
                    p { class: "text-muted-foreground",
                        "Search by common or scientific name, like \"sunflower\" or \"Helianthus\"."
                    }
                }
            }
        }
    }
}
