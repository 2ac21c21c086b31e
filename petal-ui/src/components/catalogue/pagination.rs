//! Catalogue pagination bar

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon};
use dioxus::prelude::*;

/// One slot in the pagination bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSlot {
    Page(u32),
    Ellipsis,
}

/// Windowed page list: all pages when there are at most 7, otherwise the
/// first page, a window around the current page, and the last page, with
/// ellipses marking the gaps.
pub fn page_slots(current: u32, total_pages: u32) -> Vec<PageSlot> {
    let mut slots = Vec::new();
    if total_pages <= 7 {
        for page in 1..=total_pages {
            slots.push(PageSlot::Page(page));
        }
        return slots;
    }

    slots.push(PageSlot::Page(1));
    if current > 3 {
        slots.push(PageSlot::Ellipsis);
    }
    let from = current.saturating_sub(1).max(2);
    let to = (current + 1).min(total_pages - 1);
    for page in from..=to {
        slots.push(PageSlot::Page(page));
    }
    if current + 2 < total_pages {
        slots.push(PageSlot::Ellipsis);
    }
    slots.push(PageSlot::Page(total_pages));
    slots
}

/// Pagination bar with previous/next and windowed page buttons.
/// Renders nothing when there is a single page.
#[component]
pub fn CataloguePagination(
    current_page: u32,
    total_pages: u32,
    on_page_change: EventHandler<u32>,
) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }

    rsx! {
        div { class: "flex items-center justify-center gap-2 pt-8",
            button {
                class: "p-2 rounded-lg border border-border text-foreground hover:bg-muted disabled:opacity-40 disabled:cursor-not-allowed transition-colors",
                disabled: current_page <= 1,
                onclick: move |_| on_page_change.call(current_page - 1),
                ChevronLeftIcon {}
            }

            for (idx, slot) in page_slots(current_page, total_pages).into_iter().enumerate() {
                match slot {
                    PageSlot::Ellipsis => rsx! {
                        span { key: "dots-{idx}", class: "px-2 text-muted-foreground", "…" }
                    },
                    PageSlot::Page(page) => rsx! {
                        button {
                            key: "page-{page}",
                            class: if page == current_page {
                                "w-9 h-9 rounded-lg text-sm font-medium bg-primary text-primary-foreground"
                            } else {
                                "w-9 h-9 rounded-lg text-sm font-medium border border-border text-foreground hover:bg-muted transition-colors"
                            },
                            onclick: move |_| on_page_change.call(page),
                            "{page}"
                        }
                    },
                }
            }

            button {
                class: "p-2 rounded-lg border border-border text-foreground hover:bg-muted disabled:opacity-40 disabled:cursor-not-allowed transition-colors",
                disabled: current_page >= total_pages,
                onclick: move |_| on_page_change.call(current_page + 1),
                ChevronRightIcon {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageSlot::{Ellipsis, Page};

    #[test]
    fn few_pages_listed_fully() {
        assert_eq!(
            page_slots(2, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
        assert_eq!(page_slots(1, 1), vec![Page(1)]);
    }

    #[test]
    fn long_run_windows_around_current() {
        assert_eq!(
            page_slots(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn window_at_the_start_skips_leading_ellipsis() {
        assert_eq!(
            page_slots(1, 10),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_slots(3, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn window_at_the_end_skips_trailing_ellipsis() {
        assert_eq!(
            page_slots(10, 10),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
        assert_eq!(
            page_slots(8, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }
}
