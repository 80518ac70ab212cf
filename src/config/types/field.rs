//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Used with `#[derive(Config)]` to generate compile-time checked
/// field path accessors.
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "site")]
/// pub struct SiteSectionConfig {
///     pub url: Option<String>,
/// }
///
/// // Generated:
/// impl SiteSectionConfig {
///     pub const FIELDS: SiteSectionConfigFields = ...;
/// }
///
/// // Usage:
/// diag.error(DiagnosticKind::MalformedUrl, SiteSectionConfig::FIELDS.url, "invalid");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    /// Build an indexed path for array-of-table entries,
    /// e.g. `indexed("topics", 0, "link")` -> `topics[0].link`.
    ///
    /// Paths are leaked; validation runs once per process so the leak is
    /// bounded by the number of diagnostics produced.
    pub fn indexed(section: &str, index: usize, field: &str) -> Self {
        Self(Box::leak(
            format!("{section}[{index}].{field}").into_boxed_str(),
        ))
    }

    /// Build a keyed path for map entries,
    /// e.g. `keyed("components", "Sidebar")` -> `components.Sidebar`.
    pub fn keyed(section: &str, key: &str) -> Self {
        Self(Box::leak(format!("{section}.{key}").into_boxed_str()))
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
