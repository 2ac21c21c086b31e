//! Search bar with suggestion dropdown - pure view with callbacks
//!
//! The parent owns the query string and the debounce; this component only
//! renders the input, the loading indicator, and the suggestion list.

use crate::components::icons::{LoaderIcon, SearchIcon, XIcon};
use crate::display_types::SpeciesSummary;
use dioxus::prelude::*;

#[component]
pub fn SearchBarView(
    value: String,
    #[props(default = "Search flowers by name...".to_string())] placeholder: String,
    loading: bool,
    suggestions: Vec<SpeciesSummary>,
    show_dropdown: bool,
    on_input: EventHandler<String>,
    /// Called with the trimmed query when the form is submitted
    on_submit: EventHandler<String>,
    on_clear: EventHandler<()>,
    /// Called with the species id of a clicked suggestion
    on_suggestion_click: EventHandler<String>,
) -> Element {
    let submit_value = value.clone();
    let has_value = !value.is_empty();

    rsx! {
        div { class: "relative",
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    let trimmed = submit_value.trim();
                    if !trimmed.is_empty() {
                        on_submit.call(trimmed.to_string());
                    }
                },
                div { class: "relative",
                    span { class: "absolute left-4 top-1/2 -translate-y-1/2 text-muted-foreground",
                        SearchIcon { class: "w-5 h-5" }
                    }
                    input {
                        r#type: "text",
                        value: "{value}",
                        placeholder: "{placeholder}",
                        class: "w-full pl-12 pr-12 py-4 bg-card border border-border rounded-full text-foreground placeholder:text-muted-foreground focus:outline-none focus:ring-2 focus:ring-primary/20 focus:border-primary transition-all shadow-soft",
                        oninput: move |evt| on_input.call(evt.value()),
                    }
                    span { class: "absolute right-4 top-1/2 -translate-y-1/2",
                        if loading {
                            LoaderIcon { class: "w-5 h-5 text-muted-foreground animate-spin" }
                        } else if has_value {
                            button {
                                r#type: "button",
                                class: "text-muted-foreground hover:text-foreground",
                                onclick: move |_| on_clear.call(()),
                                XIcon { class: "w-5 h-5" }
                            }
                        }
                    }
                }
            }

            if show_dropdown && !suggestions.is_empty() {
                div { class: "absolute inset-x-0 top-full mt-2 bg-card border border-border rounded-2xl shadow-card overflow-hidden z-30",
                    for suggestion in suggestions {
                        button {
                            key: "{suggestion.id}",
                            r#type: "button",
                            class: "w-full flex items-center gap-3 px-4 py-3 text-left hover:bg-muted transition-colors",
                            onclick: {
                                let id = suggestion.id.clone();
                                move |_| on_suggestion_click.call(id.clone())
                            },
                            if let Some(url) = &suggestion.image_url {
                                img {
                                    src: "{url}",
                                    alt: "",
                                    class: "w-10 h-10 rounded-full object-cover shrink-0",
                                }
                            }
                            div { class: "min-w-0",
                                p { class: "text-foreground truncate", "{suggestion.display_name()}" }
                                p { class: "text-sm text-muted-foreground italic truncate",
                                    "{suggestion.scientific_name}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
