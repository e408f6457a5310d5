//! Views, askama templates, and the page document they are written into.

pub mod document;
pub mod views;
