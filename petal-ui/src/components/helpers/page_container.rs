//! Page container component

use dioxus::prelude::*;

/// Standard page shell: navbar offset plus centered container
#[component]
pub fn PageContainer(children: Element) -> Element {
    rsx! {
        main { class: "pt-24 pb-16",
            div { class: "container mx-auto px-4", {children} }
        }
    }
}
