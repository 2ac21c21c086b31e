//! Top navigation bar - pure view with callbacks

use crate::components::icons::FlowerIcon;
use dioxus::prelude::*;

/// A single navigation entry
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

/// Fixed top navigation bar. Navigation is handled via `on_nav_click`,
/// not direct router calls, so the component stays router-agnostic.
#[component]
pub fn NavbarView(
    nav_items: Vec<NavItem>,
    on_nav_click: EventHandler<String>,
    on_brand_click: EventHandler<()>,
) -> Element {
    rsx! {
        header { class: "fixed top-0 inset-x-0 z-50 bg-background/80 backdrop-blur-md border-b border-border",
            div { class: "container mx-auto px-4 h-16 flex items-center justify-between",
                button {
                    class: "flex items-center gap-2 font-serif text-xl font-bold text-foreground",
                    onclick: move |_| on_brand_click.call(()),
                    FlowerIcon { class: "w-6 h-6 text-primary" }
                    "Petal"
                }
                nav { class: "flex items-center gap-1",
                    for item in nav_items {
                        button {
                            key: "{item.id}",
                            class: if item.is_active {
                                "px-4 py-2 rounded-full text-sm font-medium bg-primary/10 text-primary"
                            } else {
                                "px-4 py-2 rounded-full text-sm font-medium text-muted-foreground hover:text-foreground transition-colors"
                            },
                            onclick: {
                                let id = item.id.clone();
                                move |_| on_nav_click.call(id.clone())
                            },
                            "{item.label}"
                        }
                    }
                }
            }
        }
    }
}
