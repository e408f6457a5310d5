//! Post content loaded from a TOML file.
//!
//! ```toml
//! [[posts]]
//! title = "Hello"
//! slug = "hello"
//! date = "2026-01-03"
//! tags = ["Intro"]
//! description = "First post."
//! content = "<p>Hi.</p>"
//! ```

use std::{fs, path::Path};

use serde::Deserialize;
use tracing::info;

use crate::domain::{
    error::DomainError,
    posts::{Post, PostStore, parse_iso_date},
    slug::Slug,
};

use super::error::InfraError;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ContentFile {
    #[serde(default)]
    posts: Vec<RawPost>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPost {
    title: String,
    slug: String,
    date: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    description: String,
    content: String,
}

impl RawPost {
    fn into_post(self) -> Result<Post, DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "post `{}` has an empty title",
                self.slug
            )));
        }

        Ok(Post {
            slug: Slug::new(self.slug)?,
            date: parse_iso_date(&self.date)?,
            title: self.title,
            tags: self.tags,
            description: self.description,
            content: self.content,
        })
    }
}

/// Build a store from TOML source text. Posts keep their file order.
pub fn parse_posts(source: &str) -> Result<PostStore, InfraError> {
    parse_with_origin(source, "<inline>")
}

pub fn load_posts(path: &Path) -> Result<PostStore, InfraError> {
    let source = fs::read_to_string(path)?;
    let store = parse_with_origin(&source, &path.display().to_string())?;

    info!(
        target = "folio::content",
        path = %path.display(),
        posts = store.len(),
        "loaded posts"
    );
    Ok(store)
}

fn parse_with_origin(source: &str, origin: &str) -> Result<PostStore, InfraError> {
    let file: ContentFile =
        toml::from_str(source).map_err(|err| InfraError::content(origin, err.to_string()))?;

    let posts = file
        .posts
        .into_iter()
        .map(RawPost::into_post)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| InfraError::invalid_post(origin, err))?;

    PostStore::new(posts).map_err(|err| InfraError::invalid_post(origin, err))
}
