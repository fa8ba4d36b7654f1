//! Current-page detection and navigation highlighting.

use brochure_core::Error;

use super::Page;

/// Navigation anchors that can be highlighted.
pub const NAV_LINK_SELECTOR: &str = ".nav-links a";

/// Class marking the entry for the current page.
pub const ACTIVE_CLASS: &str = "active";

/// Logical page name for a URL path.
///
/// The last path segment without its extension; an empty segment or any
/// `index.*` file is `"index"`. Query and fragment are ignored.
pub fn page_name(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let file = path.rsplit('/').next().unwrap_or_default();

    let stem = match file.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file,
    };

    if stem.is_empty() { "index".to_string() } else { stem.to_string() }
}

impl Page {
    /// Logical name of this page, see [`page_name`].
    pub fn current_page_name(&self) -> String {
        page_name(self.path())
    }

    /// Mark the navigation entry whose `data-page` equals the current page
    /// name as active and clear the mark from every other entry.
    ///
    /// Returns the page name that was matched against.
    pub fn set_active_menu(&mut self) -> Result<String, Error> {
        let current = self.current_page_name();
        let matched = self.set_class_where(NAV_LINK_SELECTOR, ACTIVE_CLASS, |attrs| {
            attrs.get("data-page") == Some(current.as_str())
        })?;

        tracing::debug!(page = %current, nav_links = matched, "active menu updated");
        Ok(current)
    }
}
