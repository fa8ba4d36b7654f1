//! Owned page document.
//!
//! Stands in for the browser DOM: reads go through scraper, writes are
//! streamed through lol_html and replace the stored markup. Every write
//! method validates its selector up front, so a bad selector is an
//! `INVALID_INPUT` error rather than a panic inside the rewriter.

pub mod class_list;
pub mod menu;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod style;

use std::cell::Cell;

use brochure_core::Error;
use lol_html::html_content::ContentType as MarkupType;
use lol_html::{RewriteStrSettings, element, rewrite_str};
use scraper::{Html, Selector};

use crate::extract::{element_by_id, element_by_id_index};

/// Attributes of one matched element, as seen by an edit callback.
#[derive(Debug, Clone, Default)]
pub struct ElementAttrs(Vec<(String, String)>);

impl ElementAttrs {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.get("id")
    }

    pub fn has_class(&self, class: &str) -> bool {
        class_list::contains(self.get("class"), class)
    }
}

/// A change applied to one matched element.
#[derive(Debug, Clone)]
pub(crate) enum Edit {
    SetAttribute(&'static str, String),
    RemoveAttribute(&'static str),
    SetInner(String),
}

/// An HTML page and the URL path it is served under.
#[derive(Debug, Clone)]
pub struct Page {
    path: String,
    html: String,
}

impl Page {
    pub fn new(path: impl Into<String>, html: impl Into<String>) -> Self {
        Self { path: path.into(), html: html.into() }
    }

    /// URL path of the page, e.g. `/works.html`.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    fn document(&self) -> Html {
        Html::parse_document(&self.html)
    }

    pub fn has_element(&self, id: &str) -> bool {
        element_by_id(&self.document(), id).is_some()
    }

    pub fn inner_html(&self, id: &str) -> Option<String> {
        element_by_id(&self.document(), id).map(|el| el.inner_html())
    }

    /// Number of elements matching a CSS selector. Unparseable selectors match nothing.
    pub fn count(&self, selector: &str) -> usize {
        match Selector::parse(selector) {
            Ok(selector) => self.document().select(&selector).count(),
            Err(_) => 0,
        }
    }

    /// Whether any element matching `selector` carries `class`.
    pub fn has_class(&self, selector: &str, class: &str) -> bool {
        let Ok(selector) = Selector::parse(selector) else {
            return false;
        };
        self.document().select(&selector).any(|el| el.value().classes().any(|c| c == class))
    }

    /// Attribute value of the `nth` element matching `selector`.
    pub fn attribute(&self, selector: &str, nth: usize, name: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;
        self.document().select(&selector).nth(nth)?.value().attr(name).map(str::to_string)
    }

    /// Replace the inner markup of the first element with the given id.
    /// Elements inside `<template>` are not candidates.
    ///
    /// # Errors
    ///
    /// `PLACEHOLDER_MISSING` if no element has that id; the page is unchanged.
    pub fn set_inner_html(&mut self, id: &str, markup: &str) -> Result<(), Error> {
        let Some(target) = element_by_id_index(&self.document(), id) else {
            return Err(Error::PlaceholderMissing(id.to_string()));
        };

        let mut seen = 0usize;
        let mut placed = false;
        self.apply("[id]", |attrs| {
            if attrs.id() != Some(id) {
                return Vec::new();
            }
            let current = seen;
            seen += 1;
            if current != target {
                return Vec::new();
            }
            placed = true;
            vec![Edit::SetInner(markup.to_string())]
        })?;

        if placed { Ok(()) } else { Err(Error::PlaceholderMissing(id.to_string())) }
    }

    /// Add `class` to every element matching `selector`. Returns the match count.
    pub fn add_class(&mut self, selector: &str, class: &str) -> Result<usize, Error> {
        self.set_class_where(selector, class, |_| true)
    }

    /// Remove `class` from every element matching `selector`. Returns the match count.
    pub fn remove_class(&mut self, selector: &str, class: &str) -> Result<usize, Error> {
        self.set_class_where(selector, class, |_| false)
    }

    /// Flip `class` on every element matching `selector`. Returns the match count.
    pub fn toggle_class(&mut self, selector: &str, class: &str) -> Result<usize, Error> {
        self.set_class_where(selector, class, |attrs| !attrs.has_class(class))
    }

    /// Give each element matching `selector` the class iff `decide` returns true.
    pub fn set_class_where(
        &mut self, selector: &str, class: &str, mut decide: impl FnMut(&ElementAttrs) -> bool,
    ) -> Result<usize, Error> {
        self.apply(selector, |attrs| {
            let present = decide(attrs);
            if present == attrs.has_class(class) {
                return Vec::new();
            }
            match class_list::with_class(attrs.get("class"), class, present) {
                Some(value) => vec![Edit::SetAttribute("class", value)],
                None => vec![Edit::RemoveAttribute("class")],
            }
        })
    }

    /// Merge inline style declarations into the `nth` element matching
    /// `selector`, or into all of them when `nth` is `None`.
    pub fn set_style(
        &mut self, selector: &str, nth: Option<usize>, declarations: &[(&str, &str)],
    ) -> Result<usize, Error> {
        let mut index = 0usize;
        let mut styled = 0usize;
        self.apply(selector, |attrs| {
            let current = index;
            index += 1;
            if nth.is_some_and(|n| n != current) {
                return Vec::new();
            }
            styled += 1;
            vec![Edit::SetAttribute("style", style::merge(attrs.get("style"), declarations))]
        })?;
        Ok(styled)
    }

    /// Stream the page through lol_html, letting `edit` decide the changes for
    /// every element matching `selector`. Returns the number of matches.
    pub(crate) fn apply(
        &mut self, selector: &str, mut edit: impl FnMut(&ElementAttrs) -> Vec<Edit>,
    ) -> Result<usize, Error> {
        selector
            .parse::<lol_html::Selector>()
            .map_err(|e| Error::InvalidInput(format!("unsupported selector {selector:?}: {e}")))?;

        let matched = Cell::new(0usize);
        let output = rewrite_str(
            &self.html,
            RewriteStrSettings {
                element_content_handlers: vec![element!(selector, |el| {
                    matched.set(matched.get() + 1);
                    let attrs = ElementAttrs(el.attributes().iter().map(|a| (a.name(), a.value())).collect());
                    for change in edit(&attrs) {
                        match change {
                            Edit::SetAttribute(name, value) => {
                                el.set_attribute(name, &value)?;
                            }
                            Edit::RemoveAttribute(name) => {
                                el.remove_attribute(name);
                            }
                            Edit::SetInner(markup) => {
                                el.set_inner_content(&markup, MarkupType::Html);
                            }
                        }
                    }
                    Ok(())
                })],
                ..RewriteStrSettings::new()
            },
        )
        .map_err(|e| Error::RewriteFailed(e.to_string()))?;

        self.html = output;
        Ok(matched.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>文山建築設計事務所</title></head>
<body>
    <div id="header-placeholder"></div>
    <main>
        <section id="services-content" class="summary"><p>old</p></section>
        <div class="service-item">one</div>
        <div class="service-item" style="color: red">two</div>
    </main>
    <div id="footer-placeholder"></div>
</body>
</html>"#;

    fn page() -> Page {
        Page::new("/index.html", PAGE)
    }

    #[test]
    fn test_page_accessors() {
        let page = page();
        assert_eq!(page.path(), "/index.html");
        assert!(page.html().contains("services-content"));
        assert!(page.has_element("footer-placeholder"));
        assert!(!page.has_element("blog-content"));
        assert_eq!(page.inner_html("services-content").as_deref(), Some("<p>old</p>"));
    }

    #[test]
    fn test_set_inner_html() {
        let mut page = page();
        page.set_inner_html("services-content", "<h3>設計</h3>").unwrap();
        assert_eq!(page.inner_html("services-content").as_deref(), Some("<h3>設計</h3>"));
        assert!(page.html().contains(r#"class="summary""#));
    }

    #[test]
    fn test_set_inner_html_missing_placeholder() {
        let mut page = page();
        let before = page.html().to_string();
        let result = page.set_inner_html("works-content", "<p>x</p>");
        assert!(matches!(result, Err(Error::PlaceholderMissing(id)) if id == "works-content"));
        assert_eq!(page.html(), before);
    }

    #[test]
    fn test_template_content_is_not_a_placeholder() {
        let mut page = Page::new("/", r#"<template><div id="services-content"></div></template>"#);
        assert!(!page.has_element("services-content"));
        assert_eq!(page.inner_html("services-content"), None);
        let result = page.set_inner_html("services-content", "<p>x</p>");
        assert!(matches!(result, Err(Error::PlaceholderMissing(_))));
    }

    #[test]
    fn test_set_inner_html_skips_template_copy() {
        let html = r#"<template><div id="services-content">t</div></template><div id="services-content">d</div>"#;
        let mut page = Page::new("/", html);
        page.set_inner_html("services-content", "<p>x</p>").unwrap();
        assert_eq!(page.inner_html("services-content").as_deref(), Some("<p>x</p>"));
        assert!(page.html().contains(r#"<template><div id="services-content">t</div></template>"#));
    }

    #[test]
    fn test_class_operations() {
        let mut page = page();
        assert_eq!(page.add_class("main", "ready").unwrap(), 1);
        assert!(page.has_class("main", "ready"));

        assert_eq!(page.toggle_class(".summary", "open").unwrap(), 1);
        assert!(page.has_class("#services-content", "open"));
        assert!(page.has_class("#services-content", "summary"));

        page.toggle_class(".summary", "open").unwrap();
        assert!(!page.has_class("#services-content", "open"));

        page.remove_class("main", "ready").unwrap();
        assert!(!page.has_class("main", "ready"));
        assert_eq!(page.attribute("main", 0, "class"), None);
    }

    #[test]
    fn test_class_operation_no_match() {
        let mut page = page();
        assert_eq!(page.add_class(".nav-links", "nav-open").unwrap(), 0);
    }

    #[test]
    fn test_invalid_selector_is_error() {
        let mut page = page();
        let result = page.add_class("div[", "x");
        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert!(!page.has_class("div[", "x"));
        assert_eq!(page.count("div["), 0);
    }

    #[test]
    fn test_set_style_nth() {
        let mut page = page();
        assert_eq!(page.set_style(".service-item", Some(1), &[("opacity", "0")]).unwrap(), 1);
        assert_eq!(page.attribute(".service-item", 0, "style"), None);
        assert_eq!(page.attribute(".service-item", 1, "style").as_deref(), Some("color: red; opacity: 0"));
    }

    #[test]
    fn test_set_style_all() {
        let mut page = page();
        assert_eq!(page.set_style(".service-item", None, &[("opacity", "1")]).unwrap(), 2);
        assert_eq!(page.count(".service-item[style]"), 2);
    }

    #[test]
    fn test_element_attrs() {
        let attrs = ElementAttrs(vec![("ID".into(), "x".into()), ("class".into(), "a b".into())]);
        assert_eq!(attrs.id(), Some("x"));
        assert!(attrs.has_class("b"));
        assert!(!attrs.has_class("c"));
    }
}
