mod data;

use std::collections::{BTreeSet, HashSet};

use time::{Date, format_description::FormatItem, macros::format_description};

use super::error::DomainError;
use super::slug::Slug;

pub use data::sample_posts;

pub const HUMAN_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:long] [day padding:none], [year]");
pub const ISO_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month padding:zero]-[day padding:zero]");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    pub slug: Slug,
    pub date: Date,
    pub tags: Vec<String>,
    pub description: String,
    /// Pre-formatted markup, inserted into the page as-is.
    pub content: String,
}

impl Post {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PostFilter {
    #[default]
    All,
    Tag(String),
}

impl PostFilter {
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some(tag) => Self::Tag(tag.to_string()),
            None => Self::All,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            PostFilter::Tag(value) => Some(value.as_str()),
            PostFilter::All => None,
        }
    }

    fn matches(&self, post: &Post) -> bool {
        match self {
            PostFilter::All => true,
            PostFilter::Tag(tag) => post.has_tag(tag),
        }
    }
}

/// Posts adjacent to a given post in newest-first order.
#[derive(Clone, Copy, Debug)]
pub struct Adjacent<'a> {
    pub newer: Option<&'a Post>,
    pub older: Option<&'a Post>,
}

/// Immutable, ordered post collection built once at startup.
///
/// Store order doubles as the tie-break for posts sharing a date: the post
/// appearing first in the store is treated as the newer one.
#[derive(Clone, Debug)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    pub fn new(posts: Vec<Post>) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(posts.len());
        for post in &posts {
            if !seen.insert(post.slug.as_str()) {
                return Err(DomainError::duplicate_slug(post.slug.as_str()));
            }
        }

        Ok(Self { posts })
    }

    /// Store seeded with the site's built-in posts.
    pub fn sample() -> Self {
        Self::new(sample_posts()).expect("built-in posts have unique slugs")
    }

    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.slug == *slug)
    }

    /// Posts matching `filter`, newest first.
    pub fn collect(&self, filter: &PostFilter) -> Vec<&Post> {
        let mut posts: Vec<(usize, &Post)> = self
            .posts
            .iter()
            .enumerate()
            .filter(|(_, post)| filter.matches(post))
            .collect();

        posts.sort_by(|(left_index, left), (right_index, right)| {
            right
                .date
                .cmp(&left.date)
                .then(left_index.cmp(right_index))
        });

        posts.into_iter().map(|(_, post)| post).collect()
    }

    /// Every distinct tag across the store, sorted.
    pub fn all_tags(&self) -> Vec<&str> {
        let tags: BTreeSet<&str> = self
            .posts
            .iter()
            .flat_map(|post| post.tags.iter().map(String::as_str))
            .collect();
        tags.into_iter().collect()
    }

    pub fn is_known_tag(&self, value: &str) -> bool {
        self.posts.iter().any(|post| post.has_tag(value))
    }

    /// Neighbours of `slug` in newest-first order, or `None` for an unknown slug.
    pub fn adjacent(&self, slug: &str) -> Option<Adjacent<'_>> {
        let ordered = self.collect(&PostFilter::All);
        let index = ordered.iter().position(|post| post.slug == *slug)?;

        Some(Adjacent {
            newer: index.checked_sub(1).map(|newer| ordered[newer]),
            older: ordered.get(index + 1).copied(),
        })
    }
}

pub fn format_human_date(date: Date) -> String {
    date.format(HUMAN_DATE_FORMAT).expect("valid calendar date")
}

pub fn format_iso_date(date: Date) -> String {
    date.format(ISO_DATE_FORMAT).expect("valid calendar date")
}

pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), ISO_DATE_FORMAT)
        .map_err(|err| DomainError::validation(format!("invalid date `{value}`: {err}")))
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn post(slug: &str, date: Date, tags: &[&str]) -> Post {
        Post {
            title: slug.to_string(),
            slug: Slug::new(slug).expect("valid slug"),
            date,
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            description: String::new(),
            content: String::new(),
        }
    }

    fn slugs(posts: &[&Post]) -> Vec<String> {
        posts.iter().map(|post| post.slug.to_string()).collect()
    }

    #[test]
    fn all_tags_is_sorted_union_without_duplicates() {
        let store = PostStore::sample();
        assert_eq!(
            store.all_tags(),
            vec!["Backend", "Database", "Node.js", "PostgreSQL", "WebRTC"]
        );
    }

    #[test]
    fn duplicate_tags_within_a_post_collapse_in_the_index() {
        let store = PostStore::new(vec![
            post("first", date!(2025 - 01 - 01), &["rust", "rust", "cli"]),
            post("second", date!(2025 - 01 - 02), &["cli"]),
        ])
        .expect("store");

        assert_eq!(store.all_tags(), vec!["cli", "rust"]);
    }

    #[test]
    fn collect_orders_newest_first() {
        let store = PostStore::sample();
        let dates: Vec<String> = store
            .collect(&PostFilter::All)
            .into_iter()
            .map(|post| format_iso_date(post.date))
            .collect();

        assert_eq!(dates, vec!["2026-01-03", "2025-12-28", "2025-12-15"]);
    }

    #[test]
    fn collect_keeps_store_order_for_equal_dates() {
        let store = PostStore::new(vec![
            post("older", date!(2024 - 03 - 01), &[]),
            post("tie-a", date!(2024 - 06 - 01), &[]),
            post("tie-b", date!(2024 - 06 - 01), &[]),
            post("newest", date!(2024 - 09 - 01), &[]),
        ])
        .expect("store");

        assert_eq!(
            slugs(&store.collect(&PostFilter::All)),
            vec!["newest", "tie-a", "tie-b", "older"]
        );
    }

    #[test]
    fn tag_filter_uses_exact_match() {
        let store = PostStore::sample();

        let webrtc = store.collect(&PostFilter::Tag("WebRTC".to_string()));
        assert_eq!(slugs(&webrtc), vec!["understanding-webrtc"]);

        let lowercase = store.collect(&PostFilter::Tag("webrtc".to_string()));
        assert!(lowercase.is_empty());
        assert!(!store.is_known_tag("webrtc"));
    }

    #[test]
    fn rejects_duplicate_slugs() {
        let err = PostStore::new(vec![
            post("same", date!(2025 - 01 - 01), &[]),
            post("same", date!(2025 - 02 - 01), &[]),
        ])
        .expect_err("duplicate slug");

        assert!(matches!(err, DomainError::DuplicateSlug { slug } if slug == "same"));
    }

    #[test]
    fn adjacent_reports_neighbours() {
        let store = PostStore::sample();

        let middle = store.adjacent("understanding-webrtc").expect("known slug");
        assert_eq!(
            middle.newer.map(|post| post.slug.as_str()),
            Some("building-scalable-apis-with-nodejs")
        );
        assert_eq!(
            middle.older.map(|post| post.slug.as_str()),
            Some("postgresql-performance-tuning")
        );

        let newest = store
            .adjacent("building-scalable-apis-with-nodejs")
            .expect("known slug");
        assert!(newest.newer.is_none());
        assert!(newest.older.is_some());

        assert!(store.adjacent("does-not-exist").is_none());
    }

    #[test]
    fn formats_dates() {
        assert_eq!(format_human_date(date!(2026 - 01 - 03)), "January 3, 2026");
        assert_eq!(format_iso_date(date!(2025 - 12 - 28)), "2025-12-28");
        assert_eq!(
            parse_iso_date("2025-12-15").expect("valid date"),
            date!(2025 - 12 - 15)
        );
        assert!(parse_iso_date("15/12/2025").is_err());
    }
}
