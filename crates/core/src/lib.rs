//! Core types and shared functionality for brochure.
//!
//! This crate provides:
//! - In-memory fragment cache
//! - Content types, fallbacks and the placeholder mapping
//! - Static site markup
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod content;
pub mod error;
pub mod site;

pub use cache::{FragmentCache, FragmentKey};
pub use config::{AppConfig, ConfigError};
pub use content::{ContentMapping, ContentSource, ContentType, DEFAULT_MAPPINGS, fallback_for};
pub use error::Error;
