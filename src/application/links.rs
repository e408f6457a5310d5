use url::form_urlencoded::{self, Serializer};

use crate::domain::posts::PostFilter;

pub const POST_QUERY_PARAM: &str = "post";
pub const TAG_QUERY_PARAM: &str = "tag";

/// Builds the hrefs used by the listing and post pages.
#[derive(Clone, Debug)]
pub struct SiteLinks {
    listing_path: String,
    post_path: String,
}

impl SiteLinks {
    pub fn new(listing_path: impl Into<String>, post_path: impl Into<String>) -> Self {
        Self {
            listing_path: listing_path.into(),
            post_path: post_path.into(),
        }
    }

    pub fn listing_path(&self) -> &str {
        &self.listing_path
    }

    pub fn listing(&self, filter: &PostFilter) -> String {
        match filter.tag() {
            Some(tag) => with_query(&self.listing_path, TAG_QUERY_PARAM, tag),
            None => self.listing_path.clone(),
        }
    }

    pub fn post(&self, slug: &str) -> String {
        with_query(&self.post_path, POST_QUERY_PARAM, slug)
    }
}

fn with_query(path: &str, key: &str, value: &str) -> String {
    let mut serializer = Serializer::new(String::new());
    serializer.append_pair(key, value);
    format!("{path}?{}", serializer.finish())
}

/// Value of the first `post` parameter in a query string. A leading `?` is
/// accepted; an empty value counts as absent. The value is returned verbatim.
pub fn post_slug_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == POST_QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}
