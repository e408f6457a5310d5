use askama::{Error as AskamaError, Template};
use thiserror::Error;

use crate::domain::posts::PostFilter;
use crate::domain::theme::Theme;

use super::document::Document;

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) source: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(source: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            source,
            public_message,
            error,
        }
    }

    pub fn location(&self) -> &'static str {
        self.source
    }
}

pub fn render_template<T: Template>(
    template: &T,
    source: &'static str,
) -> Result<String, TemplateRenderError> {
    template
        .render()
        .map_err(|err| TemplateRenderError::new(source, "Template rendering failed", err))
}

#[derive(Clone)]
pub struct BrandView {
    pub title: String,
    pub href: String,
}

#[derive(Clone)]
pub struct FooterView {
    pub copy: String,
}

#[derive(Clone)]
pub struct LayoutChrome {
    pub brand: BrandView,
    pub footer: FooterView,
}

#[derive(Clone)]
pub struct LayoutContext<T> {
    pub brand: BrandView,
    pub footer: FooterView,
    pub theme: Theme,
    pub content: T,
}

impl<T> LayoutContext<T> {
    pub fn new(chrome: LayoutChrome, theme: Theme, content: T) -> Self {
        Self {
            brand: chrome.brand,
            footer: chrome.footer,
            theme,
            content,
        }
    }

    /// Label of the toggle control: the theme a click switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self.theme {
            Theme::Light => "Dark mode",
            Theme::Dark => "Light mode",
        }
    }
}

/// One selectable entry of the tag filter control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagOption {
    pub label: String,
    pub href: String,
    pub filter: PostFilter,
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagFilterView {
    pub options: Vec<TagOption>,
}

impl TagFilterView {
    pub fn active(&self) -> Option<&TagOption> {
        self.options.iter().find(|option| option.is_active)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostSummaryView {
    pub slug: String,
    pub title: String,
    pub href: String,
    pub iso_date: String,
    pub published: String,
    pub tags: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingView {
    pub filter: TagFilterView,
    pub posts: Vec<PostSummaryView>,
    /// Tag that selected nothing; `None` with no posts means an empty store.
    pub empty_tag: Option<String>,
}

#[derive(Template)]
#[template(path = "partials/tag_filter.html")]
pub struct TagFilterTemplate<'a> {
    pub view: &'a TagFilterView,
}

#[derive(Template)]
#[template(path = "partials/post_list.html")]
pub struct PostListTemplate<'a> {
    pub view: &'a ListingView,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostDetailView {
    pub slug: String,
    pub title: String,
    pub page_title: String,
    pub content_html: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostNotFoundView {
    pub requested: Option<String>,
    pub listing_href: String,
}

#[derive(Template)]
#[template(path = "partials/post_not_found.html")]
pub struct PostNotFoundTemplate<'a> {
    pub view: &'a PostNotFoundView,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationLinkView {
    pub title: String,
    pub href: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostNavigationView {
    pub newer: Option<NavigationLinkView>,
    pub older: Option<NavigationLinkView>,
}

impl PostNavigationView {
    pub fn has_both(&self) -> bool {
        self.newer.is_some() && self.older.is_some()
    }
}

#[derive(Template)]
#[template(path = "partials/post_navigation.html")]
pub struct PostNavigationTemplate<'a> {
    pub view: &'a PostNavigationView,
}

pub struct RegionView {
    pub id: String,
    pub html: String,
}

pub struct DocumentView {
    pub title: String,
    pub regions: Vec<RegionView>,
}

impl From<&Document> for DocumentView {
    fn from(document: &Document) -> Self {
        Self {
            title: document.title().to_string(),
            regions: document
                .regions()
                .map(|(id, html)| RegionView {
                    id: id.to_string(),
                    html: html.to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub view: LayoutContext<DocumentView>,
}

/// Wrap a document's regions in the site layout.
pub fn render_page(
    chrome: LayoutChrome,
    theme: Theme,
    document: &Document,
) -> Result<String, TemplateRenderError> {
    let view = LayoutContext::new(chrome, theme, DocumentView::from(document));
    render_template(&PageTemplate { view }, "presentation::views::render_page")
}
