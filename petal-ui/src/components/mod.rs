//! Shared UI components

pub mod catalogue;
pub mod confidence_badge;
pub mod helpers;
pub mod icons;
pub mod identification_result;
pub mod image_upload;
pub mod navbar;
pub mod search_bar;
pub mod species_card;

pub use catalogue::{
    CatalogueCard, CatalogueCardSkeleton, CatalogueEmptyState, CatalogueFiltersView,
    CataloguePagination,
};
pub use confidence_badge::{ConfidenceBadge, ConfidenceLevel};
pub use helpers::{ErrorDisplay, LoadingSpinner, PageContainer};
pub use icons::{
    AlertCircleIcon, ArrowLeftIcon, CalendarIcon, CameraIcon, ChevronLeftIcon, ChevronRightIcon,
    DropletIcon, FlowerIcon, ImageIcon, LoaderIcon, RefreshIcon, SearchIcon, SlidersIcon, SunIcon,
    UploadIcon, XIcon,
};
pub use identification_result::IdentificationResultView;
pub use image_upload::ImageUploadView;
pub use navbar::{NavItem, NavbarView};
pub use search_bar::SearchBarView;
pub use species_card::SpeciesCard;
