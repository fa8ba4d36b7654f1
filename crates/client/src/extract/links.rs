//! Navigation entries harvested from page markup.

use scraper::{Html, Selector};

/// One `.nav-links` anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// `data-page` value, if present
    pub page: Option<String>,
    /// Raw href attribute
    pub href: String,
    /// Link text content
    pub text: String,
    /// Whether the entry carries the `active` class
    pub active: bool,
}

/// List the navigation entries of a document in order.
///
/// Only anchors inside an element with class `nav-links` are returned.
pub fn nav_links(html: &str) -> Vec<NavLink> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(".nav-links a").expect("invalid selector");

    document
        .select(&selector)
        .map(|element| {
            let value = element.value();
            let text = element.text().collect::<Vec<_>>().join(" ").trim().to_string();
            NavLink {
                page: value.attr("data-page").map(str::to_string),
                href: value.attr("href").unwrap_or_default().to_string(),
                text,
                active: value.classes().any(|class| class == "active"),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use brochure_core::site::HEADER_MARKUP;

    #[test]
    fn test_nav_links_from_header() {
        let links = nav_links(HEADER_MARKUP);
        let pages: Vec<_> = links.iter().filter_map(|l| l.page.as_deref()).collect();

        assert_eq!(pages, ["index", "about", "services", "works", "blog", "contact"]);
        assert_eq!(links[1].href, "about.html");
        assert_eq!(links[1].text, "会社概要");
        assert!(links.iter().all(|l| !l.active));
    }

    #[test]
    fn test_nav_links_active_class() {
        let html = r#"<ul class="nav-links"><li><a class="x active" href="a.html" data-page="a">A</a></li></ul>"#;
        let links = nav_links(html);
        assert_eq!(links.len(), 1);
        assert!(links[0].active);
    }

    #[test]
    fn test_nav_links_ignores_other_anchors() {
        let html = r#"
            <a href="index.html">logo</a>
            <ul class="nav-links"><li><a href="blog.html">Blog</a></li></ul>
            <footer><a href="contact.html">Contact</a></footer>
        "#;
        let links = nav_links(html);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].page, None);
        assert_eq!(links[0].text, "Blog");
    }

    #[test]
    fn test_nav_links_empty() {
        assert!(nav_links("<p>no navigation</p>").is_empty());
    }
}
