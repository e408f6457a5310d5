use std::sync::Arc;

use crate::application::links::SiteLinks;
use crate::domain::posts::{self, Post, PostFilter, PostStore};
use crate::presentation::views::{ListingView, PostSummaryView, TagFilterView, TagOption};

const ALL_TAGS_LABEL: &str = "All";

#[derive(Clone)]
pub struct ListingService {
    store: Arc<PostStore>,
    links: SiteLinks,
}

impl ListingService {
    pub fn new(store: Arc<PostStore>, links: SiteLinks) -> Self {
        Self { store, links }
    }

    pub fn listing(&self, filter: &PostFilter) -> ListingView {
        let posts: Vec<PostSummaryView> = self
            .store
            .collect(filter)
            .into_iter()
            .map(|post| self.summary(post))
            .collect();

        let empty_tag = if posts.is_empty() {
            filter.tag().map(str::to_string)
        } else {
            None
        };

        ListingView {
            filter: self.tag_filter(filter),
            posts,
            empty_tag,
        }
    }

    /// "All" followed by every known tag. The option matching `filter` is active;
    /// an unknown tag leaves every option inactive.
    pub fn tag_filter(&self, filter: &PostFilter) -> TagFilterView {
        let active_tag = filter.tag();
        let tags = self.store.all_tags();
        let mut options = Vec::with_capacity(tags.len() + 1);

        options.push(TagOption {
            label: ALL_TAGS_LABEL.to_string(),
            href: self.links.listing(&PostFilter::All),
            filter: PostFilter::All,
            is_active: active_tag.is_none(),
        });

        for tag in tags {
            let option_filter = PostFilter::Tag(tag.to_string());
            options.push(TagOption {
                label: tag.to_string(),
                href: self.links.listing(&option_filter),
                filter: option_filter,
                is_active: active_tag == Some(tag),
            });
        }

        TagFilterView { options }
    }

    fn summary(&self, post: &Post) -> PostSummaryView {
        PostSummaryView {
            slug: post.slug.to_string(),
            title: post.title.clone(),
            href: self.links.post(post.slug.as_str()),
            iso_date: posts::format_iso_date(post.date),
            published: posts::format_human_date(post.date),
            tags: post.tags.join(", "),
            description: post.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ListingService {
        ListingService::new(
            Arc::new(PostStore::sample()),
            SiteLinks::new("blog.html", "post.html"),
        )
    }

    #[test]
    fn all_option_is_active_without_filter() {
        let view = service().tag_filter(&PostFilter::All);

        let labels: Vec<&str> = view.options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["All", "Backend", "Database", "Node.js", "PostgreSQL", "WebRTC"]
        );
        assert_eq!(view.active().map(|o| o.label.as_str()), Some("All"));
        assert_eq!(view.options.iter().filter(|o| o.is_active).count(), 1);
    }

    #[test]
    fn unknown_tag_leaves_no_option_active() {
        let view = service().tag_filter(&PostFilter::Tag("Rust".to_string()));
        assert!(view.active().is_none());
    }

    #[test]
    fn summaries_carry_links_dates_and_tags() {
        let view = service().listing(&PostFilter::Tag("Backend".to_string()));

        assert_eq!(view.posts.len(), 1);
        let summary = &view.posts[0];
        assert_eq!(
            summary.href,
            "post.html?post=building-scalable-apis-with-nodejs"
        );
        assert_eq!(summary.published, "January 3, 2026");
        assert_eq!(summary.iso_date, "2026-01-03");
        assert_eq!(summary.tags, "Node.js, Backend");
        assert!(view.empty_tag.is_none());
    }

    #[test]
    fn empty_selection_records_the_tag() {
        let view = service().listing(&PostFilter::Tag("Rust".to_string()));
        assert!(view.posts.is_empty());
        assert_eq!(view.empty_tag.as_deref(), Some("Rust"));
    }
}
