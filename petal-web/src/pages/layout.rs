use crate::catalogue_query::CatalogueQuery;
use crate::Route;
use dioxus::prelude::*;
use petal_ui::{NavItem, NavbarView};

#[component]
pub fn AppLayout() -> Element {
    let current_route = use_route::<Route>();

    let nav_items = vec![
        NavItem {
            id: "identify".to_string(),
            label: "Identify".to_string(),
            is_active: matches!(
                current_route,
                Route::Identify {} | Route::FlowerResult {}
            ),
        },
        NavItem {
            id: "search".to_string(),
            label: "Search".to_string(),
            is_active: matches!(current_route, Route::Search { .. }),
        },
        NavItem {
            id: "catalogue".to_string(),
            label: "Catalogue".to_string(),
            is_active: matches!(
                current_route,
                Route::Catalogue { .. } | Route::SpeciesDetail { .. }
            ),
        },
    ];

    rsx! {
        NavbarView {
            nav_items,
            on_nav_click: move |id: String| {
                match id.as_str() {
                    "identify" => {
                        navigator().push(Route::Identify {});
                    }
                    "search" => {
                        navigator().push(Route::Search { q: String::new() });
                    }
                    "catalogue" => {
                        navigator().push(Route::Catalogue {
                            query: CatalogueQuery::default(),
                        });
                    }
                    _ => {}
                }
            },
            on_brand_click: move |_| {
                navigator().push(Route::Home {});
            },
        }
        Outlet::<Route> {}
    }
}
