//! Identification result card - pure view with callbacks

use crate::components::confidence_badge::ConfidenceBadge;
use crate::components::icons::{ArrowLeftIcon, ImageIcon};
use crate::display_types::IdentifiedFlower;
use dioxus::prelude::*;

/// Full result card for a completed identification.
///
/// Shows the uploaded photo when available, otherwise the species
/// reference image. `on_view_species` fires with the species id when the
/// identification is linked to a catalogue record.
#[component]
pub fn IdentificationResultView(
    flower: IdentifiedFlower,
    uploaded_image_url: Option<String>,
    on_view_species: EventHandler<String>,
    on_back: EventHandler<()>,
) -> Element {
    let display_name = flower
        .common_names
        .first()
        .cloned()
        .unwrap_or_else(|| flower.scientific_name.clone());
    let image_url = uploaded_image_url.or_else(|| flower.image_url.clone());

    rsx! {
        button {
            class: "inline-flex items-center gap-2 text-muted-foreground hover:text-foreground transition-colors mb-8",
            onclick: move |_| on_back.call(()),
            ArrowLeftIcon { class: "w-4 h-4" }
            "Back to Identify"
        }

        div { class: "max-w-6xl mx-auto bg-card rounded-2xl shadow-card overflow-hidden",
            div { class: "grid md:grid-cols-2",
                div { class: "bg-muted flex items-center justify-center p-8",
                    if let Some(url) = image_url {
                        img {
                            src: "{url}",
                            alt: "{display_name}",
                            class: "w-full max-w-md aspect-square object-cover rounded-lg shadow-card",
                        }
                    } else {
                        ImageIcon { class: "w-16 h-16 text-muted-foreground/50" }
                    }
                }

                div { class: "p-8 space-y-6",
                    div {
                        ConfidenceBadge { confidence: flower.confidence }
                        h1 { class: "text-3xl md:text-4xl font-serif font-bold text-foreground mt-3 mb-1",
                            "{display_name}"
                        }
                        p { class: "text-lg text-muted-foreground italic", "{flower.scientific_name}" }
                        if flower.common_names.len() > 1 {
                            p { class: "text-sm text-muted-foreground mt-2",
                                "Also known as: "
                                {flower.common_names[1..].join(", ")}
                            }
                        }
                    }

                    if let Some(species_id) = flower.species_id.clone() {
                        button {
                            class: "btn-botanical",
                            onclick: move |_| on_view_species.call(species_id.clone()),
                            "View species details"
                        }
                    }

                    if !flower.alternatives.is_empty() {
                        div {
                            h3 { class: "font-serif text-lg font-semibold text-foreground mb-3",
                                "Other possibilities"
                            }
                            div { class: "space-y-2",
                                for alt in flower.alternatives.iter() {
                                    div {
                                        key: "{alt.scientific_name}",
                                        class: "flex items-center justify-between bg-muted rounded-xl px-4 py-3",
                                        div { class: "min-w-0 mr-3",
                                            p { class: "text-foreground truncate",
                                                {alt.common_names.first().cloned().unwrap_or_else(|| alt.scientific_name.clone())}
                                            }
                                            p { class: "text-sm text-muted-foreground italic truncate",
                                                "{alt.scientific_name}"
                                            }
                                        }
                                        ConfidenceBadge { confidence: alt.confidence }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
