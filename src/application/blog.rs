use std::sync::Arc;

use metrics::counter;
use tracing::{debug, info};

use crate::application::{
    error::AppError,
    links::SiteLinks,
    listing::ListingService,
    navigation::NavigationService,
    post::{PostLookup, PostService},
};
use crate::domain::posts::{PostFilter, PostStore};
use crate::presentation::{
    document::{Document, regions},
    views::{
        PostListTemplate, PostNavigationTemplate, PostNotFoundTemplate, TagFilterTemplate,
        render_template,
    },
};

const SOURCE: &str = "application::blog::BlogPage";
const METRIC_RENDER_TOTAL: &str = "folio_render_total";
const METRIC_LOOKUP_MISS_TOTAL: &str = "folio_post_lookup_miss_total";

/// Writes the listing, post, and navigation views into a [`Document`].
///
/// Every render replaces the target region wholesale and is skipped when the
/// document lacks that region.
#[derive(Clone)]
pub struct BlogPage {
    listing: ListingService,
    posts: PostService,
    navigation: NavigationService,
    default_title: String,
}

impl BlogPage {
    pub fn new(store: Arc<PostStore>, links: SiteLinks, owner_name: &str) -> Self {
        Self {
            listing: ListingService::new(store.clone(), links.clone()),
            posts: PostService::new(store.clone(), links.clone(), owner_name),
            navigation: NavigationService::new(store, links),
            default_title: format!("Blog - {owner_name}"),
        }
    }

    pub fn listing_document(&self) -> Document {
        Document::listing_page(self.default_title.clone())
    }

    pub fn post_document(&self) -> Document {
        Document::post_page(self.default_title.clone())
    }

    pub fn render_list(
        &self,
        document: &mut Document,
        filter: &PostFilter,
    ) -> Result<(), AppError> {
        if !document.has_region(regions::LISTING) {
            debug!(target = "folio::listing", "no listing region; skipping");
            return Ok(());
        }

        let view = self.listing.listing(filter);

        if document.has_region(regions::TAG_FILTER) {
            let filter_html = render_template(&TagFilterTemplate { view: &view.filter }, SOURCE)?;
            document.replace_region(regions::TAG_FILTER, filter_html);
        }

        let list_html = render_template(&PostListTemplate { view: &view }, SOURCE)?;
        document.replace_region(regions::LISTING, list_html);
        document.bind_filters(
            view.filter
                .options
                .iter()
                .map(|option| (option.href.clone(), option.filter.clone())),
        );

        counter!(METRIC_RENDER_TOTAL, "view" => "listing").increment(1);
        debug!(
            target = "folio::listing",
            tag = filter.tag().unwrap_or("all"),
            posts = view.posts.len(),
            "listing rendered"
        );
        Ok(())
    }

    /// Follow a tag filter link previously rendered into `document`.
    ///
    /// Returns `false` when `href` is not a registered filter link.
    pub fn activate_filter(
        &self,
        document: &mut Document,
        href: &str,
    ) -> Result<bool, AppError> {
        let Some(filter) = document.filter_for(href).cloned() else {
            return Ok(false);
        };

        self.render_list(document, &filter)?;
        Ok(true)
    }

    /// Render the post selected by the `post` parameter of `query`.
    ///
    /// A miss resets the title and empties the navigation region, so a reused
    /// document never keeps the previous post's state.
    pub fn render_post(&self, document: &mut Document, query: &str) -> Result<(), AppError> {
        if !document.has_region(regions::POST_CONTENT) {
            debug!(target = "folio::post", "no post-content region; skipping");
            return Ok(());
        }

        match self.posts.lookup(query) {
            PostLookup::Found(view) => {
                document.set_title(view.page_title);
                document.replace_region(regions::POST_CONTENT, view.content_html);
                counter!(METRIC_RENDER_TOTAL, "view" => "post").increment(1);
                debug!(target = "folio::post", slug = %view.slug, "post rendered");
                self.render_navigation(document, &view.slug)
            }
            PostLookup::NotFound(view) => {
                let html = render_template(&PostNotFoundTemplate { view: &view }, SOURCE)?;
                document.set_title(self.default_title.clone());
                document.replace_region(regions::POST_CONTENT, html);
                document.replace_region(regions::NAVIGATION, "");
                counter!(METRIC_LOOKUP_MISS_TOTAL).increment(1);
                info!(
                    target = "folio::post",
                    requested = view.requested.as_deref().unwrap_or(""),
                    "post not found"
                );
                Ok(())
            }
        }
    }

    pub fn render_navigation(
        &self,
        document: &mut Document,
        current_slug: &str,
    ) -> Result<(), AppError> {
        if !document.has_region(regions::NAVIGATION) {
            return Ok(());
        }

        let Some(view) = self.navigation.navigation(current_slug) else {
            debug!(
                target = "folio::navigation",
                slug = current_slug,
                "slug missing from date order; navigation skipped"
            );
            return Ok(());
        };

        let html = render_template(&PostNavigationTemplate { view: &view }, SOURCE)?;
        document.replace_region(regions::NAVIGATION, html);
        Ok(())
    }
}
