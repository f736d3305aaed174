//! Property listing catalog backing the location/budget search flow.

pub mod catalog;

pub use catalog::ListingCatalog;
