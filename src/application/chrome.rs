use crate::config::SiteSettings;
use crate::presentation::views::{BrandView, FooterView, LayoutChrome};

#[derive(Clone)]
pub struct ChromeService {
    brand_title: String,
    brand_href: String,
    footer_copy: String,
}

impl ChromeService {
    pub fn new(site: &SiteSettings) -> Self {
        Self {
            brand_title: site.owner_name.clone(),
            brand_href: site.home_path.clone(),
            footer_copy: site.footer_copy.clone(),
        }
    }

    pub fn load(&self) -> LayoutChrome {
        LayoutChrome {
            brand: BrandView {
                title: self.brand_title.clone(),
                href: self.brand_href.clone(),
            },
            footer: FooterView {
                copy: self.footer_copy.clone(),
            },
        }
    }
}
