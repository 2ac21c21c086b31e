//! Store types for UI state management
//!
//! These stores hold view state for the pages. Each store derives `Store`
//! for fine-grained reactivity via lensing; pages own them and pass
//! `ReadStore` handles down to the pure view components.

pub mod catalogue;
pub mod identify;
pub mod search;
pub mod species_detail;

pub use catalogue::*;
pub use identify::*;
pub use search::*;
pub use species_detail::*;
