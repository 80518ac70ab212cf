//! Site configuration management for `doctopics.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── topics     # [[topics]]
//! │   └── components # [components]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section        | Purpose                                      |
//! |----------------|----------------------------------------------|
//! | `[site]`       | Site metadata (title, url, base, social)     |
//! | `[[topics]]`   | Disjoint sidebar topic groups                |
//! | `[components]` | Component override map                       |

pub mod section;
pub mod types;
mod util;

use util::{extract_url_path, find_config_file};

// Re-export from section/
pub use section::{ComponentOverrides, PageItem, SiteSectionConfig, SocialLink, TopicConfig};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, DiagnosticKind, FieldPath};

use crate::{
    cli::{Cli, Commands},
    log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing doctopics.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Unknown fields found while parsing (internal use only)
    #[serde(skip)]
    pub unknown_fields: Vec<String>,

    /// Site metadata (title, url, base, social links)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Sidebar topic groups
    #[serde(default)]
    pub topics: Vec<TopicConfig>,

    /// Component overrides for the site builder
    #[serde(default)]
    pub components: ComponentOverrides,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            cli: None,
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            unknown_fields: Vec::new(),
            site: SiteSectionConfig::default(),
            topics: Vec::new(),
            components: ComponentOverrides::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find config file.
    /// The project root is determined by the config file's parent directory.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        // Validate config existence (skip for init)
        if !cli.is_init() && !exists {
            log!(
                "error";
                "Config file '{}' not found. Run 'doctopics init' to create one.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        // Load or create default config
        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        // Set paths
        config.config_path = config_path;
        config.cli = Some(cli);
        config.resolve_root(cli);

        // Full validation (skip for init: no config file yet)
        if !cli.is_init() {
            config.report_unknown_fields();
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match &cli.command {
            Commands::Init {
                name: Some(name), ..
            } => {
                let path = cwd.join(name).join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None, .. } => {
                let path = cwd.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => {
                // Search upward from cwd
                match find_config_file(&cli.config) {
                    Some(path) => Ok((path, true)),
                    None => Ok((cwd.join(&cli.config), false)),
                }
            }
        }
    }

    /// Resolve the project root from the command and config path.
    fn resolve_root(&mut self, cli: &Cli) {
        let root = match &cli.command {
            Commands::Init {
                name: Some(name), ..
            } => std::env::current_dir().unwrap_or_default().join(name),
            Commands::Init { name: None, .. } => std::env::current_dir().unwrap_or_default(),
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };
        self.root = root;
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        config.unknown_fields = ignored;

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields, if any.
    ///
    /// Unknown fields never fail the load; `check --strict` turns them into
    /// a failure after loading.
    fn report_unknown_fields(&self) {
        if self.unknown_fields.is_empty() {
            return;
        }
        // Show only filename since the config is always at project root
        let display_path = self
            .config_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| self.config_path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in &self.unknown_fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Get CLI arguments reference
    pub const fn get_cli(&self) -> &'static Cli {
        self.cli.unwrap()
    }

    /// Total page item count across all topics.
    pub fn page_count(&self) -> usize {
        self.topics.iter().map(|t| t.items.len()).sum()
    }

    /// Site-relative URL for a page slug, with the base path prefix applied.
    ///
    /// # Example
    /// base `/icu` + slug `about/example` -> `/icu/about/example`
    pub fn page_url(&self, slug: &str) -> String {
        let base = self.site.base.trim_end_matches('/');
        format!("{base}/{slug}")
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        if !self.config_path.as_os_str().is_empty() && !self.config_path.exists() {
            bail!(ConfigError::Validation("config file not found".into()));
        }

        // Validate each section
        self.site.validate(&mut diag);

        if self.topics.is_empty() {
            diag.error_with_hint(
                DiagnosticKind::MissingField,
                FieldPath::new("topics"),
                "at least one topic is required",
                "add a [[topics]] entry",
            );
        }
        for (index, topic) in self.topics.iter().enumerate() {
            topic.validate(index, &mut diag);
        }

        self.components.validate(&mut diag);

        // Cross-section consistency (hint only)
        self.check_base_against_url(&mut diag);

        // Print collected hints (grouped display)
        diag.print_hints();

        // Return all collected errors
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Hint when `site.base` disagrees with the path component of `site.url`.
    ///
    /// A GitHub Pages project site at `https://user.github.io/project` is
    /// normally served under base `/project`; a mismatch usually means one of
    /// the two was updated without the other.
    fn check_base_against_url(&self, diag: &mut ConfigDiagnostics) {
        let Some(url) = &self.site.url else { return };
        let Some(url_path) = extract_url_path(url) else {
            return;
        };

        let base = self.site.base.trim_matches('/');
        if base != url_path {
            diag.hint(
                SiteSectionConfig::FIELDS.base,
                format!(
                    "base '{}' does not match the url path '/{}'",
                    self.site.base, url_path
                ),
            );
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal `[site]` section; `extra` is appended so bare
/// keys land in `[site]`.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CONFIG: &str = r#"
[site]
title = "ICU"
url = "https://echeran.github.io/icu"
base = "/icu"

[[site.social]]
icon = "github"
label = "GitHub"
href = "https://github.com/unicode-org/icu"

[[topics]]
label = "About"
icon = "information"
link = "about/example"
items = [
    { label = "Example", slug = "about/example" },
    { label = "Other Page", slug = "about/otherpage" },
]

[[topics]]
label = "User Guide"
icon = "open-book"
link = "guide/example"
items = [
    { label = "Example", slug = "guide/example" },
]

[components]
Sidebar = "./src/components/Sidebar.astro"
"#;

    #[test]
    fn test_full_config_loads_and_validates() {
        let config = SiteConfig::from_str(FULL_CONFIG).unwrap();
        assert_eq!(config.site.title, "ICU");
        assert_eq!(config.topics.len(), 2);
        assert_eq!(config.page_count(), 3);
        assert_eq!(
            config.components.get("Sidebar"),
            Some("./src/components/Sidebar.astro")
        );
        config.validate().unwrap();
    }

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<SiteConfig, _> = toml::from_str("[site\ntitle = \"ICU\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert!(config.cli.is_none());
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.title, "");
        assert_eq!(config.site.base, "/");
        assert!(config.topics.is_empty());
        assert!(config.components.is_empty());
    }

    #[test]
    fn test_empty_topics_rejected() {
        let config = test_parse_config("");
        let err = config.validate().unwrap_err();
        let diag = downcast(&err);
        assert!(diag.has_kind(DiagnosticKind::MissingField));
        assert!(diag.errors().iter().any(|e| e.field.as_str() == "topics"));
    }

    #[test]
    fn test_dangling_link_reported_at_topic_index() {
        let content = r#"
[site]
title = "ICU"

[[topics]]
label = "About"
icon = "information"
link = "about/missing"
items = [
    { label = "Example", slug = "about/example" },
    { label = "Other Page", slug = "about/otherpage" },
]
"#;
        let config = SiteConfig::from_str(content).unwrap();
        let err = config.validate().unwrap_err();
        let diag = downcast(&err);
        assert!(diag.has_kind(DiagnosticKind::DanglingLink));
        assert!(
            diag.errors()
                .iter()
                .any(|e| e.field.as_str() == "topics[0].link")
        );
    }

    #[test]
    fn test_all_errors_collected_at_once() {
        let content = r#"
[site]
title = ""
base = "icu"

[[topics]]
label = "About"
icon = "information"
link = "about/example"
items = []
"#;
        let config = SiteConfig::from_str(content).unwrap();
        let err = config.validate().unwrap_err();
        let diag = downcast(&err);
        // title + base + empty topic, all in one batch
        assert!(diag.len() >= 3);
        assert!(diag.has_kind(DiagnosticKind::EmptyTopic));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.site.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ntitle = \"Test\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_round_trip_is_identity() {
        let config = SiteConfig::from_str(FULL_CONFIG).unwrap();
        let serialized = toml::to_string(&config).unwrap();
        let reloaded = SiteConfig::from_str(&serialized).unwrap();

        assert_eq!(config.site, reloaded.site);
        assert_eq!(config.topics, reloaded.topics);
        assert_eq!(config.components, reloaded.components);
    }

    #[test]
    fn test_page_url_applies_base_prefix() {
        let config = SiteConfig::from_str(FULL_CONFIG).unwrap();
        assert_eq!(config.page_url("about/example"), "/icu/about/example");

        let config = test_parse_config("");
        assert_eq!(config.page_url("about/example"), "/about/example");
    }

    /// Pull the diagnostics batch out of an anyhow error.
    fn downcast(err: &anyhow::Error) -> &ConfigDiagnostics {
        match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::Diagnostics(diag)) => diag,
            other => panic!("expected diagnostics error, got: {other:?}"),
        }
    }
}
