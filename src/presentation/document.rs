//! In-memory page model the renderers write into.
//!
//! A document owns a title and a fixed set of named regions. Writes to a
//! region the page does not carry are ignored, which lets the same renderers
//! run against pages that lack some regions.

use std::collections::BTreeMap;

use crate::domain::posts::PostFilter;

pub mod regions {
    pub const LISTING: &str = "blog-posts";
    pub const TAG_FILTER: &str = "tag-filter";
    pub const POST_CONTENT: &str = "post-content";
    pub const NAVIGATION: &str = "post-navigation";
}

#[derive(Clone, Debug, Default)]
pub struct Document {
    title: String,
    regions: Vec<(String, String)>,
    filter_bindings: BTreeMap<String, PostFilter>,
}

impl Document {
    pub fn new<I, S>(title: impl Into<String>, region_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            regions: region_ids
                .into_iter()
                .map(|id| (id.into(), String::new()))
                .collect(),
            filter_bindings: BTreeMap::new(),
        }
    }

    pub fn listing_page(title: impl Into<String>) -> Self {
        Self::new(title, [regions::TAG_FILTER, regions::LISTING])
    }

    pub fn post_page(title: impl Into<String>) -> Self {
        Self::new(title, [regions::POST_CONTENT, regions::NAVIGATION])
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn has_region(&self, id: &str) -> bool {
        self.regions.iter().any(|(region, _)| region == id)
    }

    pub fn region(&self, id: &str) -> Option<&str> {
        self.regions
            .iter()
            .find(|(region, _)| region == id)
            .map(|(_, html)| html.as_str())
    }

    /// Replace the content of region `id`. Returns `false` when the page has
    /// no such region.
    pub fn replace_region(&mut self, id: &str, html: impl Into<String>) -> bool {
        match self.regions.iter_mut().find(|(region, _)| region == id) {
            Some((_, content)) => {
                *content = html.into();
                true
            }
            None => false,
        }
    }

    pub fn regions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.regions
            .iter()
            .map(|(id, html)| (id.as_str(), html.as_str()))
    }

    /// Register the filter activated by following `href`, replacing any
    /// previous registrations.
    pub fn bind_filters<I>(&mut self, bindings: I)
    where
        I: IntoIterator<Item = (String, PostFilter)>,
    {
        self.filter_bindings = bindings.into_iter().collect();
    }

    pub fn filter_for(&self, href: &str) -> Option<&PostFilter> {
        self.filter_bindings.get(href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_to_missing_region_are_ignored() {
        let mut document = Document::post_page("Blog");

        assert!(!document.replace_region(regions::LISTING, "<p>ignored</p>"));
        assert!(!document.has_region(regions::LISTING));
        assert_eq!(document.region(regions::POST_CONTENT), Some(""));
    }

    #[test]
    fn replace_overwrites_previous_content() {
        let mut document = Document::listing_page("Blog");

        assert!(document.replace_region(regions::LISTING, "first"));
        assert!(document.replace_region(regions::LISTING, "second"));
        assert_eq!(document.region(regions::LISTING), Some("second"));
    }

    #[test]
    fn filter_bindings_replace_earlier_ones() {
        let mut document = Document::listing_page("Blog");
        document.bind_filters([(
            "blog.html?tag=Rust".to_string(),
            PostFilter::Tag("Rust".to_string()),
        )]);
        document.bind_filters([("blog.html".to_string(), PostFilter::All)]);

        assert_eq!(document.filter_for("blog.html"), Some(&PostFilter::All));
        assert!(document.filter_for("blog.html?tag=Rust").is_none());
    }
}
