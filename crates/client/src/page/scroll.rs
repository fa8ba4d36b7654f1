//! In-page anchor scrolling and scroll-driven header styling.

use brochure_core::Error;

use super::Page;

pub const HEADER_SELECTOR: &str = ".header";
pub const SCROLLED_CLASS: &str = "scrolled";

/// Scroll position (px) beyond which the header switches style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

/// Element id an in-page `href` points at. `#` alone points nowhere.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts a target just below the fixed header.
pub fn scroll_offset(target_top: f64, header_height: f64) -> f64 {
    (target_top - header_height).max(0.0)
}

impl Page {
    /// Update the header style for a new scroll position. Returns whether
    /// the header is in the scrolled state.
    pub fn apply_scroll(&mut self, scroll_y: f64) -> Result<bool, Error> {
        let scrolled = header_is_scrolled(scroll_y);
        if scrolled {
            self.add_class(HEADER_SELECTOR, SCROLLED_CLASS)?;
        } else {
            self.remove_class(HEADER_SELECTOR, SCROLLED_CLASS)?;
        }
        Ok(scrolled)
    }

    /// Follow an in-page link.
    ///
    /// Returns the id to scroll to when the anchor names an element on this
    /// page; in that case an open mobile menu is closed as well.
    pub fn follow_anchor(&mut self, href: &str) -> Result<Option<String>, Error> {
        let Some(id) = anchor_id(href) else {
            return Ok(None);
        };

        if !self.has_element(id) {
            tracing::debug!(href, "anchor target not on page");
            return Ok(None);
        }

        self.follow_nav_link()?;
        Ok(Some(id.to_string()))
    }
}
