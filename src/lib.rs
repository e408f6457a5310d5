//! Folio: a personal site's blog core.
//!
//! Posts live in an immutable [`domain::posts::PostStore`]. The application
//! layer turns the store into structured views, the presentation layer renders
//! those views with askama templates, and [`presentation::document::Document`]
//! is the thin adapter that owns the page regions the renderers write into.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
