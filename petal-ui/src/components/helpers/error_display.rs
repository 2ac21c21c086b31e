//! Error display component

use crate::components::icons::{AlertCircleIcon, RefreshIcon};
use dioxus::prelude::*;

/// Generic "something went wrong" box with an optional manual retry
/// action. Every remote failure in the app degrades to this view.
#[component]
pub fn ErrorDisplay(
    message: String,
    #[props(default)] on_retry: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div { class: "bg-destructive/10 border border-destructive/20 rounded-2xl p-6 text-center",
            AlertCircleIcon { class: "w-12 h-12 text-destructive mx-auto mb-4" }
            p { class: "text-foreground mb-4", "{message}" }
            if let Some(retry) = on_retry {
                button {
                    class: "btn-botanical inline-flex items-center gap-2",
                    onclick: move |_| retry.call(()),
                    RefreshIcon { class: "w-4 h-4" }
                    "Try Again"
                }
            }
        }
    }
}
