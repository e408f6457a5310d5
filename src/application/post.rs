use std::sync::Arc;

use crate::application::links::{SiteLinks, post_slug_from_query};
use crate::domain::posts::{PostFilter, PostStore};
use crate::presentation::views::{PostDetailView, PostNotFoundView};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PostLookup {
    Found(PostDetailView),
    NotFound(PostNotFoundView),
}

#[derive(Clone)]
pub struct PostService {
    store: Arc<PostStore>,
    links: SiteLinks,
    owner_name: String,
}

impl PostService {
    pub fn new(store: Arc<PostStore>, links: SiteLinks, owner_name: impl Into<String>) -> Self {
        Self {
            store,
            links,
            owner_name: owner_name.into(),
        }
    }

    /// Resolve the post named by the `post` parameter of `query`.
    pub fn lookup(&self, query: &str) -> PostLookup {
        let requested = post_slug_from_query(query);

        match requested.as_deref().and_then(|slug| self.store.find_by_slug(slug)) {
            Some(post) => PostLookup::Found(PostDetailView {
                slug: post.slug.to_string(),
                title: post.title.clone(),
                page_title: format!("{} - {}", post.title, self.owner_name),
                content_html: post.content.clone(),
            }),
            None => PostLookup::NotFound(PostNotFoundView {
                requested,
                listing_href: self.links.listing(&PostFilter::All),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> PostService {
        PostService::new(
            Arc::new(PostStore::sample()),
            SiteLinks::new("blog.html", "post.html"),
            "Gyan Prakash Tiwari",
        )
    }

    #[test]
    fn found_post_carries_page_title_and_raw_content() {
        let PostLookup::Found(view) = service().lookup("post=understanding-webrtc") else {
            panic!("expected post");
        };

        assert_eq!(
            view.page_title,
            "Understanding WebRTC: Real-Time Communication on the Web - Gyan Prakash Tiwari"
        );
        let store = PostStore::sample();
        let stored = store
            .find_by_slug("understanding-webrtc")
            .expect("sample post");
        assert_eq!(view.content_html, stored.content);
    }

    #[test]
    fn missing_parameter_is_not_found() {
        let lookup = service().lookup("");
        assert_eq!(
            lookup,
            PostLookup::NotFound(PostNotFoundView {
                requested: None,
                listing_href: "blog.html".to_string(),
            })
        );
    }

    #[test]
    fn slug_match_is_exact() {
        assert!(matches!(
            service().lookup("post=Understanding-WebRTC"),
            PostLookup::NotFound(_)
        ));
    }
}
