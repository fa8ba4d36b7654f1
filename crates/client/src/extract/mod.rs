//! Fragment extraction from fetched documents.
//!
//! Parses a whole document with scraper and returns the inner markup of the
//! first element whose `id` attribute matches, the same element
//! `getElementById` would pick.

pub mod links;

pub use links::{NavLink, nav_links};

use brochure_core::Error;
use scraper::{ElementRef, Html, Selector};

/// Elements carrying `element_id` in document order, template content included.
fn elements_with_id<'a>(document: &'a Html, element_id: &str) -> Vec<ElementRef<'a>> {
    let selector = Selector::parse("[id]").expect("invalid selector");
    document.select(&selector).filter(|el| el.value().id() == Some(element_id)).collect()
}

/// Template content is inert and not part of the document.
fn in_template(element: &ElementRef) -> bool {
    element.ancestors().any(|node| node.value().as_element().is_some_and(|el| el.name() == "template"))
}

/// Find the first element with the given id outside any `<template>`.
pub(crate) fn element_by_id<'a>(document: &'a Html, element_id: &str) -> Option<ElementRef<'a>> {
    elements_with_id(document, element_id).into_iter().find(|el| !in_template(el))
}

/// Position of [`element_by_id`]'s match among all elements carrying that
/// id, counting those inside templates.
pub(crate) fn element_by_id_index(document: &Html, element_id: &str) -> Option<usize> {
    elements_with_id(document, element_id).iter().position(|el| !in_template(el))
}

/// Extract the inner markup of `element_id` from an HTML document.
///
/// `source_path` is only used to describe the failure.
pub fn extract_fragment(html: &str, element_id: &str, source_path: &str) -> Result<String, Error> {
    let document = Html::parse_document(html);

    element_by_id(&document, element_id).map(|el| el.inner_html()).ok_or_else(|| Error::ElementNotFound {
        element_id: element_id.to_string(),
        source_path: source_path.to_string(),
    })
}
