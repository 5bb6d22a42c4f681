//! Site configuration table for amitrahman.me.
//!
//! A static, read-only table of site-wide settings and per-page display
//! metadata, consumed by the page-rendering layer. Every value is a
//! compile-time literal: nothing is parsed, validated, or mutated at
//! runtime, and a malformed entry is a build error rather than a runtime
//! condition.
//!
//! # Exports
//!
//! | Export                 | Shape                                     |
//! |------------------------|-------------------------------------------|
//! | [`SITE`]               | [`SiteSettings`] singleton                |
//! | [`HIGHLIGHT_AUTHOR`]   | `&'static str`                            |
//! | [`HOME`] .. [`ABOUT`]  | one [`PageMetadata`] per page             |
//! | [`Page`]               | page identifier with [`Page::metadata`]   |
//! | [`SOCIALS`]            | [`SocialLink`] profile links              |
//!
//! # Example
//!
//! ```
//! use site_config::{Page, SITE};
//!
//! assert_eq!(SITE.title, "Amit Rahman");
//! for page in Page::ALL {
//!     assert!(!page.metadata().title.is_empty());
//! }
//! ```

mod page;
mod site;

pub use page::{ABOUT, BLOG, CV, HOME, Page, PageMetadata, RESEARCH, TAGS};
pub use site::{HIGHLIGHT_AUTHOR, SITE, SOCIALS, SiteSettings, SocialLink};
