//! Use cases (application services)

pub mod build_layouts;
pub mod edit_composition;
pub mod refresh_countries;
