pub mod autocomplete;
pub mod download;
