//! Scroll-triggered fade-in of content cards.

use brochure_core::Error;

use super::{Edit, Page, style};

/// Elements carrying any of these classes fade in when scrolled into view.
pub const REVEAL_CLASSES: [&str; 3] = ["service-item", "portfolio-item", "blog-item"];

const HIDDEN: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(30px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];

const SHOWN: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

/// Intersection rule deciding when a card is revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealObserver {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// Pixels trimmed off the bottom of the viewport.
    pub bottom_margin: f64,
}

impl Default for RevealObserver {
    fn default() -> Self {
        Self { threshold: 0.1, bottom_margin: 50.0 }
    }
}

impl RevealObserver {
    /// Visible fraction of an element at `top` (relative to the viewport top)
    /// with the given height.
    pub fn visible_ratio(&self, top: f64, height: f64, viewport_height: f64) -> f64 {
        if height <= 0.0 {
            return 0.0;
        }
        let root_bottom = viewport_height - self.bottom_margin;
        let overlap = (top + height).min(root_bottom) - top.max(0.0);
        (overlap / height).clamp(0.0, 1.0)
    }

    pub fn should_reveal(&self, ratio: f64) -> bool {
        ratio > 0.0 && ratio >= self.threshold
    }
}

fn is_reveal_target(attrs: &super::ElementAttrs) -> bool {
    REVEAL_CLASSES.iter().any(|class| attrs.has_class(class))
}

impl Page {
    /// Number of elements taking part in the reveal animation.
    pub fn reveal_targets(&self) -> usize {
        self.count(&REVEAL_CLASSES.map(|c| format!(".{c}")).join(", "))
    }

    /// Put every reveal target in its hidden starting state.
    pub fn prepare_reveal(&mut self) -> Result<usize, Error> {
        self.style_reveal_targets(None, &HIDDEN)
    }

    /// Reveal the `index`-th target in document order. Returns false when
    /// there is no such target.
    pub fn reveal(&mut self, index: usize) -> Result<bool, Error> {
        Ok(self.style_reveal_targets(Some(index), &SHOWN)? > 0)
    }

    /// Reveal every target whose visible ratio passes the observer.
    ///
    /// `positions` holds `(top, height)` per target in document order.
    pub fn reveal_visible(
        &mut self, observer: &RevealObserver, positions: &[(f64, f64)], viewport_height: f64,
    ) -> Result<Vec<usize>, Error> {
        let mut revealed = Vec::new();
        for (index, (top, height)) in positions.iter().enumerate() {
            let ratio = observer.visible_ratio(*top, *height, viewport_height);
            if observer.should_reveal(ratio) && self.reveal(index)? {
                revealed.push(index);
            }
        }
        Ok(revealed)
    }

    fn style_reveal_targets(&mut self, nth: Option<usize>, declarations: &[(&str, &str)]) -> Result<usize, Error> {
        let mut index = 0usize;
        let mut styled = 0usize;
        self.apply("[class]", |attrs| {
            if !is_reveal_target(attrs) {
                return Vec::new();
            }
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
}
