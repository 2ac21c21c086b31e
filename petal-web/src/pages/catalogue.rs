use crate::api::ApiClient;
use crate::catalogue_query::CatalogueQuery;
use crate::Route;
use dioxus::prelude::*;
use petal_ui::debounce::{use_debounce, DEBOUNCE_WINDOW_MS};
use petal_ui::stores::{
    CatalogueViewState, CatalogueViewStateStoreExt, FilterOptionsState, FilterOptionsStateStoreExt,
};
use petal_ui::{
    CatalogueCard, CatalogueCardSkeleton, CatalogueEmptyState, CatalogueFiltersView,
    CataloguePagination, ErrorDisplay, PageContainer,
};

/// Cards per catalogue page
const CATALOGUE_PAGE_SIZE: u32 = 12;

fn navigate(query: CatalogueQuery) {
    // Filter changes replace the current entry so back does not walk
    // through every keystroke and toggle
    navigator().replace(Route::Catalogue { query });
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[component]
pub fn Catalogue(query: ReadSignal<CatalogueQuery>) -> Element {
    let api: ApiClient = use_context();
    let state = use_store(CatalogueViewState::default);
    let filter_options = use_store(FilterOptionsState::default);
    let mut retry_nonce = use_signal(|| 0u32);

    // Name filter edits go URL-ward through a debounce; the URL is the
    // only owner of the filter state
    let mut debounce = use_debounce(DEBOUNCE_WINDOW_MS, move |value: String| {
        navigate(query.peek().set_param("name", &value));
    });

    // The input echoes the URL unless the user is mid-edit
    let mut name_input = use_signal(|| query.peek().name.clone());
    use_effect(move || {
        let name = query().name;
        if !debounce.is_pending() {
            name_input.set(name);
        }
    });

    // Filter values load once per visit
    let options_api = api.clone();
    use_future(move || {
        let api = options_api.clone();
        async move {
            match api.catalogue_filters().await {
                Ok(options) => {
                    filter_options.colors().set(options.colors);
                    filter_options.countries().set(options.countries);
                }
                Err(e) => {
                    tracing::warn!("failed to load catalogue filters: {e}");
                }
            }
        }
    });

    // Refetch whenever the URL-derived query (or a retry) changes
    let fetch_api = api.clone();
    use_effect(move || {
        let current = query();
        let _ = retry_nonce();
        let api = fetch_api.clone();
        spawn(async move {
            state.loading().set(true);
            state.error().set(None);
            match api.catalogue(&current, Some(CATALOGUE_PAGE_SIZE)).await {
                Ok(page) => {
                    state.entries().set(page.entries);
                    state.total().set(page.total);
                    state.page().set(page.page);
                    state.total_pages().set(page.total_pages);
                    state.loading().set(false);
                }
                Err(e) => {
                    tracing::error!("catalogue fetch failed: {e}");
                    state
                        .error()
                        .set(Some("Could not load the catalogue.".to_string()));
                    state.loading().set(false);
                }
            }
        });
    });

    let current = query();
    let entries = state.entries()();
    let loading = state.loading()();
    let error = state.error()();
    let total = state.total()();
    let active_filter_count = current.active_filter_count();

    rsx! {
        PageContainer {
            div { class: "mb-8",
                h1 { class: "font-serif text-3xl md:text-4xl font-bold text-foreground mb-2",
                    "Flower Catalogue"
                }
                if !loading && error.is_none() {
                    p { class: "text-muted-foreground",
                        if total == 1 {
                            "1 species"
                        } else {
                            "{total} species"
                        }
                    }
                }
            }

            div { class: "grid lg:grid-cols-[280px_1fr] gap-8 items-start",
                aside { class: "bg-card rounded-2xl shadow-soft p-6 lg:sticky lg:top-24",
                    CatalogueFiltersView {
                        search_value: name_input(),
                        on_search_change: move |value: String| {
                            name_input.set(value.clone());
                            debounce.queue(value);
                        },
                        sort_value: current.sort_by.as_str().to_string(),
                        on_sort_change: move |value: String| {
                            navigate(query.peek().set_param("sort_by", &value));
                        },
                        colors: filter_options.colors()(),
                        selected_colors: current.colors.clone(),
                        on_color_toggle: move |color: String| {
                            navigate(query.peek().toggle_color(&color));
                        },
                        countries: filter_options.countries()(),
                        selected_country: current.country.clone(),
                        on_country_change: move |value: String| {
                            navigate(query.peek().set_param("country", &value));
                        },
                        active_filter_count,
                        on_clear_all: move |_| {
                            debounce.cancel();
                            name_input.set(String::new());
                            navigate(CatalogueQuery::default());
                        },
                    }
                }

                section {
                    if let Some(message) = error {
                        ErrorDisplay {
                            message,
                            on_retry: move |_| {
                                retry_nonce += 1;
                            },
                        }
                    } else if loading {
                        div { class: "grid grid-cols-2 md:grid-cols-3 xl:grid-cols-4 gap-6",
                            for i in 0..CATALOGUE_PAGE_SIZE {
                                CatalogueCardSkeleton { key: "{i}" }
                            }
                        }
                    } else if entries.is_empty() {
                        CatalogueEmptyState {
                            has_filters: active_filter_count > 0,
                            on_clear: move |_| {
                                debounce.cancel();
                                name_input.set(String::new());
                                navigate(CatalogueQuery::default());
                            },
                        }
                    } else {
                        div { class: "grid grid-cols-2 md:grid-cols-3 xl:grid-cols-4 gap-6",
                            for entry in entries {
                                CatalogueCard {
                                    key: "{entry.species.id}",
                                    entry,
                                    on_click: move |species_id: String| {
                                        navigator().push(Route::SpeciesDetail { species_id });
                                    },
                                }
                            }
                        }
                        CataloguePagination {
                            current_page: state.page()(),
                            total_pages: state.total_pages()(),
                            on_page_change: move |page: u32| {
                                navigate(query.peek().set_param("page", &page.to_string()));
                                scroll_to_top();
                            },
                        }
                    }
                }
            }
        }
    }
}
