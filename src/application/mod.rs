pub mod blog;
pub mod chrome;
pub mod error;
pub mod links;
pub mod listing;
pub mod navigation;
pub mod post;
pub mod theme;
