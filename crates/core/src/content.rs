//! Content types, their sources and fallbacks, and the placeholder mapping.

use std::fmt;
use std::str::FromStr;

use crate::site;

/// Where a content type's markup comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    /// Built-in markup, never fetched.
    Static(&'static str),
    /// Inner markup of `element_id` inside the document at `path`.
    Document { path: &'static str, element_id: &'static str },
}

/// Every kind of content the site places into a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Header,
    Footer,
    ServicesSummary,
    AboutSummary,
    WorksSummary,
    BlogSummary,
}

impl ContentType {
    pub const ALL: [ContentType; 6] = [
        ContentType::Header,
        ContentType::Footer,
        ContentType::ServicesSummary,
        ContentType::AboutSummary,
        ContentType::WorksSummary,
        ContentType::BlogSummary,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContentType::Header => "header",
            ContentType::Footer => "footer",
            ContentType::ServicesSummary => "services-summary",
            ContentType::AboutSummary => "about-summary",
            ContentType::WorksSummary => "works-summary",
            ContentType::BlogSummary => "blog-summary",
        }
    }

    pub fn source(self) -> ContentSource {
        match self {
            ContentType::Header => ContentSource::Static(site::HEADER_MARKUP),
            ContentType::Footer => ContentSource::Static(site::FOOTER_MARKUP),
            ContentType::ServicesSummary => {
                ContentSource::Document { path: "./services.html", element_id: "services-summary" }
            }
            ContentType::AboutSummary => ContentSource::Document { path: "./about.html", element_id: "about-summary" },
            ContentType::WorksSummary => ContentSource::Document { path: "./works.html", element_id: "works-summary" },
            ContentType::BlogSummary => ContentSource::Document { path: "./blog.html", element_id: "blog-summary" },
        }
    }

    /// Markup placed when the content cannot be fetched or extracted.
    ///
    /// Static content never fails, so its fallback is the markup itself.
    pub fn fallback(self) -> &'static str {
        match self {
            ContentType::Header => site::HEADER_MARKUP,
            ContentType::Footer => site::FOOTER_MARKUP,
            ContentType::ServicesSummary => site::SERVICES_FALLBACK,
            ContentType::AboutSummary => site::ABOUT_FALLBACK,
            ContentType::WorksSummary => site::WORKS_FALLBACK,
            ContentType::BlogSummary => site::BLOG_FALLBACK,
        }
    }

    pub fn is_static(self) -> bool {
        matches!(self.source(), ContentSource::Static(_))
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown content label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content type: {0}")]
pub struct UnknownContentType(pub String);

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::ALL
            .into_iter()
            .find(|content| content.label() == s)
            .ok_or_else(|| UnknownContentType(s.to_string()))
    }
}

/// Fallback markup for a content label, or the generic notice when the label
/// is not a known content type.
pub fn fallback_for(label: &str) -> &'static str {
    label
        .parse::<ContentType>()
        .map(ContentType::fallback)
        .unwrap_or(site::CONTENT_UNAVAILABLE)
}

/// Pairs a placeholder element id on the page with the content placed in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentMapping {
    pub placeholder: &'static str,
    pub content: ContentType,
}

/// The site's placeholders, header and footer first.
pub const DEFAULT_MAPPINGS: &[ContentMapping] = &[
    ContentMapping { placeholder: "header-placeholder", content: ContentType::Header },
    ContentMapping { placeholder: "footer-placeholder", content: ContentType::Footer },
    ContentMapping { placeholder: "services-content", content: ContentType::ServicesSummary },
    ContentMapping { placeholder: "about-content", content: ContentType::AboutSummary },
    ContentMapping { placeholder: "works-content", content: ContentType::WorksSummary },
    ContentMapping { placeholder: "blog-content", content: ContentType::BlogSummary },
];
