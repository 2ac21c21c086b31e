//! Catalogue entry card - pure view with callbacks

use crate::components::icons::ImageIcon;
use crate::display_types::CatalogueEntry;
use dioxus::prelude::*;

/// Card for one catalogue entry: photo, names, color chips.
#[component]
pub fn CatalogueCard(entry: CatalogueEntry, on_click: EventHandler<String>) -> Element {
    let id = entry.species.id.clone();
    let display_name = entry.species.display_name().to_string();

    rsx! {
        button {
            class: "polaroid-card text-left w-full group",
            onclick: move |_| on_click.call(id.clone()),
            div { class: "aspect-square overflow-hidden rounded-sm bg-muted flex items-center justify-center",
                if let Some(url) = &entry.species.image_url {
                    img {
                        src: "{url}",
                        alt: "{entry.species.scientific_name}",
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
                    "{entry.species.scientific_name}"
                }
                if !entry.colors.is_empty() {
                    div { class: "flex flex-wrap gap-1 mt-2",
                        for color in entry.colors.iter() {
                            span {
                                key: "{color}",
                                class: "px-2 py-0.5 rounded-full bg-muted text-xs text-muted-foreground capitalize",
                                "{color}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Placeholder card shown while a page is loading
#[component]
pub fn CatalogueCardSkeleton() -> Element {
    rsx! {
        div { class: "polaroid-card animate-pulse",
            div { class: "aspect-square rounded-sm bg-muted" }
            div { class: "pt-3 pb-1 px-1 space-y-2",
                div { class: "h-4 bg-muted rounded w-3/4" }
                div { class: "h-3 bg-muted rounded w-1/2" }
            }
        }
    }
}
