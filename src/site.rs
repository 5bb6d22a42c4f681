//! Site-wide settings.
//!
//! The [`SITE`] singleton plus the scalar values shared by every page.

use serde::Serialize;

/// Site-wide configuration values applied across all pages.
///
/// Exactly one instance exists, [`SITE`]. The rendering layer reads its
/// fields directly and never constructs or mutates one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteSettings {
    /// Site title displayed in browser tab and headers.
    pub title: &'static str,

    /// Site description for SEO meta tags.
    pub description: &'static str,

    /// Contact email shown on the site and used in feed metadata.
    pub email: &'static str,

    /// How many recent posts the homepage lists.
    pub num_posts_on_homepage: usize,

    /// How many publications the homepage lists.
    pub num_publications_on_homepage: usize,

    /// Base URL for absolute links in feeds and meta tags.
    pub url: &'static str,
}

/// The site-wide settings instance.
pub const SITE: SiteSettings = SiteSettings {
    title: "Amit Rahman",
    description: "Personal website and blog of Amit Rahman",
    email: "contact@amitrahman.me",
    num_posts_on_homepage: 5,
    num_publications_on_homepage: 3,
    url: "https://amitrahman.me",
};

/// Author name to highlight in publication author lists.
pub const HIGHLIGHT_AUTHOR: &str = "Amit Rahman";

/// A named external profile link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Display label ("GitHub", "LinkedIn").
    pub name: &'static str,

    /// Absolute profile URL.
    pub url: &'static str,
}

/// Profile links shown alongside the contact email.
pub const SOCIALS: [SocialLink; 2] = [
    SocialLink {
        name: "GitHub",
        url: "https://www.github.com/amitrahman1026",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/amitrahman1026",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_site_exact_values() {
        assert_eq!(SITE.title, "Amit Rahman");
        assert_eq!(SITE.description, "Personal website and blog of Amit Rahman");
        assert_eq!(SITE.email, "contact@amitrahman.me");
        assert_eq!(SITE.url, "https://amitrahman.me");
    }

    #[test]
    fn test_homepage_counts() {
        assert_eq!(SITE.num_posts_on_homepage, 5);
        assert_eq!(SITE.num_publications_on_homepage, 3);
    }

    #[test]
    fn test_url_is_absolute() {
        // scheme + host, optional path
        let re = Regex::new(r"^https?://[A-Za-z0-9][A-Za-z0-9.-]*(/.*)?$").unwrap();
        assert!(re.is_match(SITE.url));
    }

    #[test]
    fn test_email_is_well_formed() {
        let re = Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();
        assert!(re.is_match(SITE.email));
    }

    #[test]
    fn test_highlight_author_matches_site_title() {
        assert_eq!(HIGHLIGHT_AUTHOR, SITE.title);
    }

    #[test]
    fn test_socials_are_named_https_links() {
        let re = Regex::new(r"^https://[A-Za-z0-9.-]+/.+$").unwrap();
        for link in &SOCIALS {
            assert!(!link.name.is_empty());
            assert!(re.is_match(link.url), "{} is not an https link", link.name);
        }
    }

    #[test]
    fn test_rereads_are_identical() {
        assert_eq!(SITE, SITE.clone());
        assert_eq!(SITE.title, SITE.title);
    }

    #[test]
    fn test_site_serializes_expected_fields() {
        let json = serde_json::to_value(&SITE).unwrap();
        let obj = json.as_object().unwrap();

        for key in [
            "title",
            "description",
            "email",
            "num_posts_on_homepage",
            "num_publications_on_homepage",
            "url",
        ] {
            assert!(obj.contains_key(key), "missing field `{key}`");
        }
        assert_eq!(obj.len(), 6);
        assert_eq!(json["num_posts_on_homepage"], 5);
        assert_eq!(json["title"], "Amit Rahman");
    }
}
