//! Species card component - pure view with callbacks

use crate::components::icons::ImageIcon;
use crate::display_types::SpeciesSummary;
use dioxus::prelude::*;

/// Polaroid-style card for a species in a result grid.
///
/// Pure view component; navigation is handled via the `on_click` callback.
#[component]
pub fn SpeciesCard(species: SpeciesSummary, on_click: EventHandler<String>) -> Element {
    let id = species.id.clone();
    let display_name = species.display_name().to_string();

    rsx! {
        button {
            class: "polaroid-card text-left w-full group",
            onclick: move |_| on_click.call(id.clone()),
            div { class: "aspect-square overflow-hidden rounded-sm bg-muted flex items-center justify-center",
                if let Some(url) = &species.image_url {
                    img {
                        src: "{url}",
                        alt: "{species.scientific_name}",
                        loading: "lazy",
                        class: "w-full h-full object-cover group-hover:scale-105 transition-transform duration-300",
                    }
                } else {
                    ImageIcon { class: "w-10 h-10 text-muted-foreground/50" }
                }
            }
            div { class: "pt-3 pb-1 px-1",
                h3 { class: "font-medium text-foreground truncate", title: "{display_name}",
                    "{display_name}"
                }
                p { class: "text-sm text-muted-foreground italic truncate",
                    "{species.scientific_name}"
                }
            }
        }
    }
}
