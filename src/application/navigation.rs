use std::sync::Arc;

use crate::application::links::SiteLinks;
use crate::domain::posts::{Post, PostStore};
use crate::presentation::views::{NavigationLinkView, PostNavigationView};

#[derive(Clone)]
pub struct NavigationService {
    store: Arc<PostStore>,
    links: SiteLinks,
}

impl NavigationService {
    pub fn new(store: Arc<PostStore>, links: SiteLinks) -> Self {
        Self { store, links }
    }

    /// Links to the posts either side of `slug` by date, or `None` when the
    /// slug is unknown.
    pub fn navigation(&self, slug: &str) -> Option<PostNavigationView> {
        let adjacent = self.store.adjacent(slug)?;

        Some(PostNavigationView {
            newer: adjacent.newer.map(|post| self.link(post)),
            older: adjacent.older.map(|post| self.link(post)),
        })
    }

    fn link(&self, post: &Post) -> NavigationLinkView {
        NavigationLinkView {
            title: post.title.clone(),
            href: self.links.post(post.slug.as_str()),
        }
    }
}
