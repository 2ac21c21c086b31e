//! petal-ui - Shared UI types and components for petal
//!
//! Contains display types, view-state structs, and pure view components
//! used by the web app. Components render props and emit callbacks; all
//! data fetching and routing lives in petal-web.

pub mod components;
pub mod debounce;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use debounce::use_debounce;
pub use display_types::*;
