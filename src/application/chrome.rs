use crate::config::SiteSettings;
use crate::presentation::views::{
    BrandView, FooterView, LayoutChrome, NavigationLinkView, NavigationView,
};

/// Builds the shared header/footer data from the site settings.
#[derive(Clone, Debug)]
pub struct ChromeService {
    settings: SiteSettings,
}

impl ChromeService {
    pub fn new(settings: SiteSettings) -> Self {
        Self { settings }
    }

    pub fn load(&self) -> LayoutChrome {
        let settings = &self.settings;

        let entries = settings
            .navigation
            .iter()
            .map(|entry| NavigationLinkView {
                label: entry.label.clone(),
                href: entry.href.clone(),
                is_current: false,
            })
            .collect();

        LayoutChrome {
            brand: BrandView {
                title: settings.brand_title.clone(),
                href: settings.brand_href.clone(),
            },
            navigation: NavigationView { entries },
            footer: FooterView {
                copy: settings.footer_copy.clone(),
                contact_email: settings.contact_email.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_mirrors_site_settings() {
        let chrome = ChromeService::new(SiteSettings::default()).load();

        assert_eq!(chrome.brand.title, "GUSdb");
        assert_eq!(chrome.footer.contact_email, "webmaster@gusdb.org");
        let labels: Vec<_> = chrome
            .navigation
            .entries
            .iter()
            .map(|entry| entry.label.as_str())
            .collect();
        assert_eq!(labels, ["Home", "About"]);
        assert!(chrome.navigation.entries.iter().all(|entry| !entry.is_current));
    }
}
