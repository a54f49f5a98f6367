//! View models hold pre-computed presentation data
//!
//! Views only iterate over these; every formatting decision lives here so it
//! can be tested without a terminal.

pub mod catalog_grid;
pub mod detail;
pub mod pagination;
pub mod search_bar;
