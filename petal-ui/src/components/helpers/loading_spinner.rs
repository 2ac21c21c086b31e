//! Loading spinner component

use crate::components::icons::LoaderIcon;
use dioxus::prelude::*;

/// Loading spinner with optional message
#[component]
pub fn LoadingSpinner(
    /// Message to display under the spinner (default: "Loading...")
    #[props(default = "Loading...".to_string())]
    message: String,
) -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center py-20",
            LoaderIcon { class: "w-10 h-10 text-primary animate-spin mb-4" }
            p { class: "text-muted-foreground", "{message}" }
        }
    }
}
