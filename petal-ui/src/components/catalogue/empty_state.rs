//! Empty state for a filtered catalogue with no matches

use crate::components::icons::FlowerIcon;
use dioxus::prelude::*;

#[component]
pub fn CatalogueEmptyState(has_filters: bool, on_clear: EventHandler<()>) -> Element {
    rsx! {
        div { class: "text-center py-20",
            FlowerIcon { class: "w-16 h-16 text-muted-foreground/50 mx-auto mb-4" }
            h3 { class: "font-serif text-xl font-medium text-foreground mb-2", "No flowers found" }
            if has_filters {
                p { class: "text-muted-foreground mb-6",
                    "No species match the current filters."
                }
                button {
                    class: "btn-botanical",
                    onclick: move |_| on_clear.call(()),
                    "Clear Filters"
                }
            } else {
                p { class: "text-muted-foreground", "The catalogue is empty right now." }
            }
        }
    }
}
