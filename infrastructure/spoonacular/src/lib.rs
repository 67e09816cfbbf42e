pub mod client;
pub mod dto;
pub mod recipe_catalog;
