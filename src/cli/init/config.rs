//! Configuration file generation.
//!
//! Creates doctopics.toml and ignore files for new projects.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::SiteSectionConfig;

/// Default config filename
const CONFIG_FILE: &str = "doctopics.toml";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Sample social link entry.
const SOCIAL_TEMPLATE: &str = r#"# [[site.social]]
# icon = "github"
# label = "GitHub"
# href = "https://github.com/example/project"
"#;

/// Sample topic entry. `link` must match one of the item slugs.
const TOPICS_TEMPLATE: &str = r#"# One [[topics]] entry per disjoint sidebar group.
[[topics]]
label = "About"
icon = "information"
link = "about/example"
items = [
    { label = "Example", slug = "about/example" },
]
"#;

/// Sample component override section.
const COMPONENTS_TEMPLATE: &str = r#"# Component overrides for the site builder.
# [components]
# Sidebar = "./src/components/Sidebar.astro"
"#;

/// Generate doctopics.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# Doctopics configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# https://github.com/doctopics/doctopics\n\n");

    // [site] section from the derive-generated template
    out.push_str(&SiteSectionConfig::template_with_header());
    out.push('\n');

    out.push_str(SOCIAL_TEMPLATE);
    out.push('\n');

    out.push_str(TOPICS_TEMPLATE);
    out.push('\n');

    out.push_str(COMPONENTS_TEMPLATE);

    out
}

/// Write default doctopics.toml configuration
pub fn write_config(root: &Path) -> Result<()> {
    let content = generate_config_template();

    let path = root.join(CONFIG_FILE);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
pub fn write_ignore_files(root: &Path) -> Result<()> {
    let patterns = ["/dist/", ".DS_Store"];
    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_template_is_loadable() {
        // The scaffold must parse and validate cleanly
        let template = generate_config_template();
        let config = SiteConfig::from_str(&template).unwrap();
        assert_eq!(config.topics.len(), 1);
        config.validate().unwrap();
    }

    #[test]
    fn test_write_config() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path()).unwrap();

        let config_path = temp.path().join("doctopics.toml");
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[site]"));
        assert!(content.contains("[[topics]]"));
    }

    #[test]
    fn test_write_ignore_files() {
        let temp = TempDir::new().unwrap();
        write_ignore_files(temp.path()).unwrap();

        let gitignore = temp.path().join(".gitignore");
        assert!(gitignore.exists());

        let content = fs::read_to_string(&gitignore).unwrap();
        assert!(content.contains("/dist/"));
    }

    #[test]
    fn test_ignore_files_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let gitignore = temp.path().join(".gitignore");
        fs::write(&gitignore, "custom content").unwrap();

        write_ignore_files(temp.path()).unwrap();

        let content = fs::read_to_string(&gitignore).unwrap();
        assert_eq!(content, "custom content");
    }
}
