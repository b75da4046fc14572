//! Configuration types for Vellum document loading.
//!
//! This module provides configuration structures that control how documents
//! are parsed. All types implement [`serde::Deserialize`] for loading from
//! external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`ParserConfig`] - Controls how unsupported tags are handled.
//!
//! # Example
//!
//! ```
//! # use vellum::{config::AppConfig, policy::UnsupportedTagPolicy};
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.parser().unsupported_tags(), UnsupportedTagPolicy::Drop);
//! ```

use serde::Deserialize;

use vellum_core::policy::UnsupportedTagPolicy;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Parser configuration section.
    #[serde(default)]
    parser: ParserConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified parser configuration.
    pub fn new(parser: ParserConfig) -> Self {
        Self { parser }
    }

    /// Returns the parser configuration.
    pub fn parser(&self) -> &ParserConfig {
        &self.parser
    }
}

/// Parser configuration.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ParserConfig {
    /// What happens to recognized elements nested inside unsupported tags.
    #[serde(default)]
    unsupported_tags: UnsupportedTagPolicy,
}

impl ParserConfig {
    /// Creates a new [`ParserConfig`] with the given unsupported tag policy.
    pub fn new(unsupported_tags: UnsupportedTagPolicy) -> Self {
        Self { unsupported_tags }
    }

    /// Returns the [`UnsupportedTagPolicy`].
    pub fn unsupported_tags(&self) -> UnsupportedTagPolicy {
        self.unsupported_tags
    }
}
