//! Catalogue view components

pub mod card;
pub mod empty_state;
pub mod filters;
pub mod pagination;

pub use card::{CatalogueCard, CatalogueCardSkeleton};
pub use empty_state::CatalogueEmptyState;
pub use filters::{CatalogueFiltersView, SORT_OPTIONS};
pub use pagination::CataloguePagination;
