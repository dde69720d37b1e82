// src/templates/mod.rs
// Page templates live in views/; these modules own the data they are rendered with.
pub mod landing;
pub mod not_found;
