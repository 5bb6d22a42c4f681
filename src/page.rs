//! Per-page display metadata.
//!
//! One [`PageMetadata`] record per logical page, addressable either through
//! its named constant or through the [`Page`] identifier.

use serde::Serialize;

/// The title/description pair shown for a page or section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    /// Page title for the browser tab and page header.
    pub title: &'static str,

    /// Page description for SEO meta tags.
    pub description: &'static str,
}

/// Homepage metadata.
pub const HOME: PageMetadata = PageMetadata {
    title: "Home",
    description: "Astro Micro is an accessible theme for Astro.",
};

/// Blog index metadata.
pub const BLOG: PageMetadata = PageMetadata {
    title: "Blog",
    description: "A collection of articles on topics I am passionate about.",
};

/// Publications list metadata.
pub const RESEARCH: PageMetadata = PageMetadata {
    title: "Publications",
    description: "A collection of my publications with links to paper, repositories and live demos.",
};

/// CV page metadata.
pub const CV: PageMetadata = PageMetadata {
    title: "CV",
    description: "your cv",
};

/// Tag filter page metadata.
pub const TAGS: PageMetadata = PageMetadata {
    title: "TAGS",
    description: "blog tag filter",
};

/// About page metadata.
pub const ABOUT: PageMetadata = PageMetadata {
    title: "ABOUT",
    description: "A self-intro",
};

/// Identifier for a logical page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Page {
    Home,
    Blog,
    Research,
    Cv,
    Tags,
    About,
}

impl Page {
    /// Every page, in navigation order.
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Blog,
        Page::Research,
        Page::Cv,
        Page::Tags,
        Page::About,
    ];

    /// Display metadata for this page.
    pub const fn metadata(self) -> &'static PageMetadata {
        match self {
            Page::Home => &HOME,
            Page::Blog => &BLOG,
            Page::Research => &RESEARCH,
            Page::Cv => &CV,
            Page::Tags => &TAGS,
            Page::About => &ABOUT,
        }
    }
}
