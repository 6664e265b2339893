use super::page::PageKey;

/// Which parts of the site frame surround the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub show_navbar: bool,
    pub show_footer: bool,
    /// No top margin, full width, no padding
    pub full_bleed: bool,
}

impl Chrome {
    pub fn for_page(authenticated: bool, page: PageKey) -> Self {
        Self {
            show_navbar: !authenticated && !page.is_auth_page(),
            show_footer: !authenticated && page != PageKey::Recuperacion,
            full_bleed: authenticated || page.is_auth_page(),
        }
    }

    pub fn container_class(&self) -> &'static str {
        if self.full_bleed {
            "app-container app-container--full"
        } else {
            "app-container"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_pages_show_full_chrome() {
        let c = Chrome::for_page(false, PageKey::Blog);
        assert_eq!(
            c,
            Chrome {
                show_navbar: true,
                show_footer: true,
                full_bleed: false
            }
        );
    }

    #[test]
    fn test_auth_pages() {
        let login = Chrome::for_page(false, PageKey::Login);
        assert!(!login.show_navbar);
        assert!(login.show_footer);
        assert!(login.full_bleed);

        let recovery = Chrome::for_page(false, PageKey::Recuperacion);
        assert!(!recovery.show_navbar);
        assert!(!recovery.show_footer);
        assert!(recovery.full_bleed);
    }

    #[test]
    fn test_authenticated_hides_site_frame() {
        for page in PageKey::ALL {
            let c = Chrome::for_page(true, page);
            assert!(!c.show_navbar && !c.show_footer && c.full_bleed, "{page:?}");
            assert_eq!(c.container_class(), "app-container app-container--full");
        }
    }
}
