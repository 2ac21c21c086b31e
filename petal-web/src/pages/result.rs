use crate::Route;
use dioxus::prelude::*;
use petal_ui::stores::IdentificationOutcome;
use petal_ui::{FlowerIcon, IdentificationResultView, PageContainer};

/// Result of the most recent identification. The outcome only lives in
/// memory, so a direct visit or reload lands on the guard below.
#[component]
pub fn FlowerResult() -> Element {
    let outcome: Signal<Option<IdentificationOutcome>> = use_context();

    let Some(result) = outcome() else {
        return rsx! {
            PageContainer {
                div { class: "text-center py-20 max-w-md mx-auto",
                    FlowerIcon { class: "w-16 h-16 text-muted-foreground/50 mx-auto mb-4" }
                    h2 { class: "font-serif text-2xl font-semibold text-foreground mb-2",
                        "No identification yet"
                    }
                    p { class: "text-muted-foreground mb-6",
                        "Upload a flower photo to see its identification here."
                    }
                    button {
                        class: "btn-botanical",
                        onclick: move |_| {
                            navigator().push(Route::Identify {});
                        },
                        "Identify a Flower"
                    }
                }
            }
        };
    };

    rsx! {
        PageContainer {
            IdentificationResultView {
                flower: result.flower,
                uploaded_image_url: result.uploaded_image_url,
                on_view_species: move |species_id: String| {
                    navigator().push(Route::SpeciesDetail { species_id });
                },
                on_back: move |_| {
                    navigator().push(Route::Identify {});
                },
            }
        }
    }
}
