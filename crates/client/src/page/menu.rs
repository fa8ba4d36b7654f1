//! Mobile navigation toggle.
//!
//! State lives only in the page markup: the navigation list carries
//! `nav-open` while the menu is shown and the toggle button carries `active`.

use brochure_core::Error;

use super::Page;

pub const MENU_TOGGLE_SELECTOR: &str = ".mobile-menu-toggle";
pub const NAV_LIST_SELECTOR: &str = ".nav-links";
pub const NAV_OPEN_CLASS: &str = "nav-open";
pub const TOGGLE_ACTIVE_CLASS: &str = "active";

impl Page {
    /// Whether the page has a mobile menu control to click.
    pub fn has_mobile_menu(&self) -> bool {
        self.count(MENU_TOGGLE_SELECTOR) > 0
    }

    pub fn is_menu_open(&self) -> bool {
        self.has_class(NAV_LIST_SELECTOR, NAV_OPEN_CLASS)
    }

    /// Click on the toggle control: flip the navigation list and the toggle
    /// button independently. Returns whether the menu is open afterwards.
    ///
    /// Without a toggle control this is a no-op.
    pub fn toggle_mobile_menu(&mut self) -> Result<bool, Error> {
        if !self.has_mobile_menu() {
            return Ok(false);
        }

        self.toggle_class(NAV_LIST_SELECTOR, NAV_OPEN_CLASS)?;
        self.toggle_class(MENU_TOGGLE_SELECTOR, TOGGLE_ACTIVE_CLASS)?;

        let open = self.is_menu_open();
        tracing::debug!(open, "mobile menu toggled");
        Ok(open)
    }

    pub fn close_mobile_menu(&mut self) -> Result<(), Error> {
        self.remove_class(NAV_LIST_SELECTOR, NAV_OPEN_CLASS)?;
        self.remove_class(MENU_TOGGLE_SELECTOR, TOGGLE_ACTIVE_CLASS)?;
        Ok(())
    }

    /// A navigation link was followed; an open menu closes.
    pub fn follow_nav_link(&mut self) -> Result<(), Error> {
        if self.is_menu_open() {
            self.close_mobile_menu()?;
        }
        Ok(())
    }
}
