mod catalogue;
mod home;
mod identify;
mod layout;
mod result;
mod search;
mod species_detail;

pub use catalogue::Catalogue;
pub use home::Home;
pub use identify::Identify;
pub use layout::AppLayout;
pub use result::FlowerResult;
pub use search::Search;
pub use species_detail::SpeciesDetail;
