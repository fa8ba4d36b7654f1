//! Client code for brochure.
//!
//! This crate provides the HTTP document source, fragment extraction, the
//! page document model with its behaviors, and the content loader that ties
//! them together.

pub mod extract;
pub mod fetch;
pub mod form;
pub mod loader;
pub mod page;

pub use extract::{NavLink, extract_fragment, nav_links};
pub use fetch::{DocumentSource, FetchClient, FetchConfig, FetchResponse};
pub use form::{ContactForm, FormError};
pub use loader::{ContentLoader, Fragment, PopulateReport};
pub use page::Page;
pub use page::reveal::RevealObserver;
