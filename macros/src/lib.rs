//! Proc macros for doctopics.
//!
//! # Config derive macro
//!
//! Generates field path accessors and a commented TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site")]
//! /// Site metadata.
//! pub struct SiteSectionConfig {
//!     /// Site title shown in the sidebar header.
//!     pub title: String,
//!
//!     /// Base path prefix.
//!     #[config(default = "/")]
//!     pub base: String,
//!
//!     /// Internal field.
//!     #[config(skip)]
//!     pub resolved: String,
//! }
//!
//! // Generates:
//! // - SiteSectionConfig::FIELDS.title -> FieldPath("site.title")
//! // - SiteSectionConfig::template() -> TOML string with comments
//! // - SiteSectionConfig::template_with_header() -> with [section] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS and template (internal use)
//! - `#[config(hidden)]` - Hide from template output only
//! - `#[config(name = "x")]` - Custom TOML field name
//! - `#[config(default = "x")]` - Default value in template
//! - `#[config(inline_doc)]` - Show single-line doc as inline comment
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `SiteSectionConfig` → `site`
//! - `TopicConfig` → `topic`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
