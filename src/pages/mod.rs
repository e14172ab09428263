pub mod editor;
pub mod gallery;
pub mod not_found;
