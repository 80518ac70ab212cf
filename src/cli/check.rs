//! `check` command: summarize an already-validated config.
//!
//! Structural validation happens during `SiteConfig::load`; by the time this
//! runs the config is known to be well-formed. This adds the strict-mode
//! unknown-field gate and prints a per-topic summary.

use anyhow::{Result, bail};
use owo_colors::OwoColorize;

use crate::config::SiteConfig;
use crate::log;
use crate::utils::plural_s;

/// Report check results for a loaded config.
pub fn check_config(config: &SiteConfig, strict: bool) -> Result<()> {
    if strict && !config.unknown_fields.is_empty() {
        bail!(
            "unknown config fields in strict mode: {}",
            config.unknown_fields.join(", ")
        );
    }

    print_summary(config);

    let topics = config.topics.len();
    let pages = config.page_count();
    log!(
        "check";
        "ok: {} topic{}, {} page{}, {} override{}",
        topics,
        plural_s(topics),
        pages,
        plural_s(pages),
        config.components.len(),
        plural_s(config.components.len())
    );
    Ok(())
}

/// Print the topic tree (label, landing slug, item count).
fn print_summary(config: &SiteConfig) {
    for topic in &config.topics {
        let items = topic.items.len();
        let landing = format!("→ {}", config.page_url(&topic.link));
        println!(
            "{} {} ({} page{})",
            topic.label.bold(),
            landing.dimmed(),
            items,
            plural_s(items)
        );
        for item in &topic.items {
            println!("  - {} ({})", item.label, item.slug.dimmed());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_strict_rejects_unknown_fields() {
        let mut config = test_parse_config("");
        config.unknown_fields = vec!["site.titel".to_string()];

        assert!(check_config(&config, false).is_ok());
        let err = check_config(&config, true).unwrap_err();
        assert!(err.to_string().contains("site.titel"));
    }

    #[test]
    fn test_clean_config_passes_strict() {
        let config = test_parse_config("");
        assert!(check_config(&config, true).is_ok());
    }
}
