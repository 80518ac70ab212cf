//! `[site]` section configuration.
//!
//! Contains site metadata: title, deployment URL, base path, social links.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "ICU"
//! url = "https://echeran.github.io/icu"
//! base = "/icu"
//!
//! [[site.social]]
//! icon = "github"
//! label = "GitHub"
//! href = "https://github.com/unicode-org/icu"
//! ```
//!
//! `base` is the path prefix under which the site is served (e.g. a GitHub
//! Pages project site at `https://user.github.io/project` uses `/project`).

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, DiagnosticKind, FieldPath};

/// Site metadata handed to the downstream site builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Site title shown in the sidebar header.
    #[config(default = "My Docs", inline_doc)]
    pub title: String,

    /// Deployment URL (absolute, http or https).
    #[config(inline_doc)]
    pub url: Option<String>,

    /// Base path prefix, must start with `/`.
    #[config(default = "/", inline_doc)]
    pub base: String,

    /// Social links rendered in the site header.
    #[config(skip)]
    pub social: Vec<SocialLink>,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            url: None,
            base: "/".into(),
            social: Vec::new(),
        }
    }
}

impl SiteSectionConfig {
    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` non-empty
    /// - `url` (if set) is an absolute http/https URL with a host
    /// - `base` starts with `/`
    /// - each social link has a non-empty icon/label and a valid `href`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.is_empty() {
            diag.error_with_hint(
                DiagnosticKind::MissingField,
                Self::FIELDS.title,
                "site title is required",
                "set a title, e.g.: \"ICU\"",
            );
        }

        if let Some(url) = &self.url {
            validate_absolute_url(url, Self::FIELDS.url, diag);
        }

        if !self.base.starts_with('/') {
            diag.error_with_hint(
                DiagnosticKind::MissingField,
                Self::FIELDS.base,
                format!("base path '{}' must start with '/'", self.base),
                format!("use \"/{}\"", self.base.trim_start_matches('/')),
            );
        }

        for (index, link) in self.social.iter().enumerate() {
            link.validate(index, diag);
        }
    }
}

/// Validate a URL string as absolute http/https with a host.
///
/// Shared by `site.url` and social `href` checks.
pub(crate) fn validate_absolute_url(url_str: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(url_str) {
        Ok(parsed) => {
            // Must be http or https
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    DiagnosticKind::MalformedUrl,
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            }
            // Must have a valid host
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    DiagnosticKind::MalformedUrl,
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                DiagnosticKind::MalformedUrl,
                field,
                format!("invalid URL: {}", e),
                "use format like https://example.com",
            );
        }
    }
}

// ============================================================================
// Social links
// ============================================================================

/// A single social link entry (icon identifier, label, target URL).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    /// Icon identifier understood by the site builder (e.g. "github").
    pub icon: String,
    /// Accessible label.
    pub label: String,
    /// Target URL (absolute).
    pub href: String,
}

impl Default for SocialLink {
    fn default() -> Self {
        Self {
            icon: String::new(),
            label: String::new(),
            href: String::new(),
        }
    }
}

impl SocialLink {
    fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        if self.icon.is_empty() {
            diag.error(
                DiagnosticKind::MissingField,
                FieldPath::indexed("site.social", index, "icon"),
                "social link icon is required",
            );
        }
        if self.label.is_empty() {
            diag.error(
                DiagnosticKind::MissingField,
                FieldPath::indexed("site.social", index, "label"),
                "social link label is required",
            );
        }
        if self.href.is_empty() {
            diag.error(
                DiagnosticKind::MissingField,
                FieldPath::indexed("site.social", index, "href"),
                "social link href is required",
            );
        } else {
            validate_absolute_url(
                &self.href,
                FieldPath::indexed("site.social", index, "href"),
                diag,
            );
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn validated(extra: &str) -> ConfigDiagnostics {
        let config = test_parse_config(extra);
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        diag
    }

    #[test]
    fn test_valid_site_section() {
        let diag = validated("url = \"https://echeran.github.io/icu\"\nbase = \"/icu\"");
        assert!(diag.is_empty(), "unexpected errors: {diag}");
    }

    #[test]
    fn test_missing_title() {
        let config: crate::config::SiteConfig =
            crate::config::SiteConfig::from_str("[site]\nbase = \"/\"").unwrap();
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert!(diag.has_kind(DiagnosticKind::MissingField));
    }

    #[test]
    fn test_base_without_leading_slash() {
        let diag = validated("base = \"icu\"");
        assert!(diag.has_kind(DiagnosticKind::MissingField));
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.field.as_str() == "site.base")
        );
    }

    #[test]
    fn test_url_without_scheme() {
        let diag = validated("url = \"echeran.github.io/icu\"");
        assert!(diag.has_kind(DiagnosticKind::MalformedUrl));
    }

    #[test]
    fn test_url_unsupported_scheme() {
        let diag = validated("url = \"ftp://example.com\"");
        assert!(diag.has_kind(DiagnosticKind::MalformedUrl));
    }

    #[test]
    fn test_social_link_requires_href() {
        let diag = validated("[[site.social]]\nicon = \"github\"\nlabel = \"GitHub\"");
        assert!(diag.has_kind(DiagnosticKind::MissingField));
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.field.as_str() == "site.social[0].href")
        );
    }

    #[test]
    fn test_social_link_valid() {
        let diag = validated(
            "[[site.social]]\nicon = \"github\"\nlabel = \"GitHub\"\nhref = \"https://github.com/unicode-org/icu\"",
        );
        assert!(diag.is_empty(), "unexpected errors: {diag}");
    }
}
