//! Composite cache keys for extracted fragments.

use std::fmt;

/// Identifies one extracted fragment: the document it came from and the
/// element id inside that document.
///
/// The path is kept exactly as the caller passed it, so `./services.html` and
/// `services.html` are distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FragmentKey {
    path: String,
    element_id: String,
}

impl FragmentKey {
    pub fn new(path: impl Into<String>, element_id: impl Into<String>) -> Self {
        Self { path: path.into(), element_id: element_id.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }
}

/// Renders as `{path}_{element_id}`.
impl fmt::Display for FragmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.path, self.element_id)
    }
}
