//! Catalogue filter panel - pure view with callbacks
//!
//! The parent owns all filter state (it lives in the URL) and the search
//! debounce; this panel only renders inputs and forwards changes.

use crate::components::icons::{SearchIcon, SlidersIcon, XIcon};
use crate::display_types::FilterChoice;
use dioxus::prelude::*;

/// Canonical sort values with display labels
pub const SORT_OPTIONS: [(&str, &str); 3] = [
    ("name", "Name (A-Z)"),
    ("popularity", "Most Popular"),
    ("recent", "Recently Added"),
];

/// Swatch class for the known color filter values; unknown values get a
/// neutral chip.
fn swatch_class(color: &str) -> &'static str {
    match color {
        "red" => "bg-red-500",
        "pink" => "bg-pink-400",
        "white" => "bg-white border border-border",
        "yellow" => "bg-yellow-400",
        "orange" => "bg-orange-500",
        "purple" => "bg-purple-500",
        "blue" => "bg-blue-500",
        _ => "bg-muted border border-border",
    }
}

#[component]
pub fn CatalogueFiltersView(
    search_value: String,
    on_search_change: EventHandler<String>,
    sort_value: String,
    on_sort_change: EventHandler<String>,
    colors: Vec<FilterChoice>,
    selected_colors: Vec<String>,
    on_color_toggle: EventHandler<String>,
    countries: Vec<FilterChoice>,
    selected_country: String,
    on_country_change: EventHandler<String>,
    active_filter_count: usize,
    on_clear_all: EventHandler<()>,
) -> Element {
    let has_search = !search_value.is_empty();

    rsx! {
        div { class: "space-y-6",
            // Header with active-filter badge
            div { class: "flex items-center justify-between",
                div { class: "flex items-center gap-2",
                    SlidersIcon { class: "w-5 h-5 text-primary" }
                    h3 { class: "font-serif text-lg font-semibold text-foreground", "Filters" }
                    if active_filter_count > 0 {
                        span { class: "bg-primary text-primary-foreground text-xs px-2 py-0.5 rounded-full",
                            "{active_filter_count}"
                        }
                    }
                }
                if active_filter_count > 0 {
                    button {
                        class: "text-sm text-muted-foreground hover:text-primary transition-colors flex items-center gap-1",
                        onclick: move |_| on_clear_all.call(()),
                        XIcon { class: "w-3.5 h-3.5" }
                        "Clear All"
                    }
                }
            }

            // Name search
            div {
                label { class: "text-sm font-medium text-foreground mb-2 block", "Search" }
                div { class: "relative",
                    span { class: "absolute left-3 top-1/2 -translate-y-1/2 text-muted-foreground",
                        SearchIcon {}
                    }
                    input {
                        r#type: "text",
                        value: "{search_value}",
                        placeholder: "Search flowers...",
                        class: "w-full pl-9 pr-9 py-2.5 rounded-lg bg-background border border-border text-foreground placeholder:text-muted-foreground focus:outline-none focus:ring-2 focus:ring-primary/30 focus:border-primary transition-all text-sm",
                        oninput: move |evt| on_search_change.call(evt.value()),
                    }
                    if has_search {
                        button {
                            class: "absolute right-3 top-1/2 -translate-y-1/2 text-muted-foreground hover:text-foreground",
                            onclick: move |_| on_search_change.call(String::new()),
                            XIcon { class: "w-3.5 h-3.5" }
                        }
                    }
                }
            }

            // Sort
            div {
                label { class: "text-sm font-medium text-foreground mb-2 block", "Sort By" }
                select {
                    class: "w-full px-3 py-2.5 rounded-lg bg-background border border-border text-foreground focus:outline-none focus:ring-2 focus:ring-primary/30 focus:border-primary transition-all text-sm cursor-pointer",
                    value: "{sort_value}",
                    onchange: move |evt| on_sort_change.call(evt.value()),
                    for (value, label) in SORT_OPTIONS {
                        option { key: "{value}", value: "{value}", selected: sort_value == value,
                            "{label}"
                        }
                    }
                }
            }

            // Color chips
            div {
                label { class: "text-sm font-medium text-foreground mb-3 block", "Colors" }
                div { class: "flex flex-wrap gap-2",
                    for choice in colors {
                        {
                            let is_selected = selected_colors.iter().any(|c| *c == choice.value);
                            let value = choice.value.clone();
                            rsx! {
                                button {
                                    key: "{choice.value}",
                                    class: if is_selected {
                                        "flex items-center gap-2 px-3 py-1.5 rounded-full text-sm transition-all border border-primary bg-primary/10 text-primary font-medium"
                                    } else {
                                        "flex items-center gap-2 px-3 py-1.5 rounded-full text-sm transition-all border border-border bg-background text-muted-foreground hover:border-primary/40"
                                    },
                                    onclick: move |_| on_color_toggle.call(value.clone()),
                                    span { class: "w-3.5 h-3.5 rounded-full shrink-0 {swatch_class(&choice.value)}" }
                                    "{choice.label}"
                                }
                            }
                        }
                    }
                }
            }

            // Country
            div {
                label { class: "text-sm font-medium text-foreground mb-2 block", "Country" }
                select {
                    class: "w-full px-3 py-2.5 rounded-lg bg-background border border-border text-foreground focus:outline-none focus:ring-2 focus:ring-primary/30 focus:border-primary transition-all text-sm cursor-pointer",
                    value: "{selected_country}",
                    onchange: move |evt| on_country_change.call(evt.value()),
                    option { value: "", selected: selected_country.is_empty(), "All countries" }
                    for choice in countries {
                        option {
                            key: "{choice.value}",
                            value: "{choice.value}",
                            selected: selected_country == choice.value,
                            if let Some(count) = choice.count {
                                "{choice.label} ({count})"
                            } else {
                                "{choice.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
