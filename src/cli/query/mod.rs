//! `query` command: emit resolved topics and pages as JSON.
//!
//! Flattens the validated topic tree into one record per page so downstream
//! tooling (link checkers, nav generators) can consume it without knowing
//! the TOML layout.

mod output;

use anyhow::Result;
use serde::Serialize;

use crate::cli::QueryArgs;
use crate::config::SiteConfig;
use crate::debug;

/// One flattened page record.
#[derive(Debug, Clone, Serialize)]
pub struct PageRecord {
    /// Content slug.
    pub slug: String,
    /// Site-relative URL (base prefix applied).
    pub url: String,
    /// Display label.
    pub label: String,
    /// Owning topic label.
    pub topic: String,
    /// Whether this page is the topic's landing page.
    pub landing: bool,
}

/// Run the query command against a loaded config.
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let pages = collect_pages(config, args.topic.as_deref());
    debug!("query"; "collected {} page(s)", pages.len());
    output::output_results(&pages, args)
}

/// Flatten topics into page records, optionally filtered by topic label.
fn collect_pages(config: &SiteConfig, topic_filter: Option<&str>) -> Vec<PageRecord> {
    config
        .topics
        .iter()
        .filter(|topic| topic_filter.is_none_or(|label| topic.label == label))
        .flat_map(|topic| {
            topic.items.iter().map(|item| PageRecord {
                slug: item.slug.clone(),
                url: config.page_url(&item.slug),
                label: item.label.clone(),
                topic: topic.label.clone(),
                landing: item.slug == topic.link,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn sample_config() -> SiteConfig {
        test_parse_config(
            r#"base = "/icu"

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
"#,
        )
    }

    #[test]
    fn test_collect_all_pages() {
        let pages = collect_pages(&sample_config(), None);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].slug, "about/example");
        assert_eq!(pages[0].url, "/icu/about/example");
        assert!(pages[0].landing);
        assert!(!pages[1].landing);
    }

    #[test]
    fn test_collect_filtered_by_topic() {
        let pages = collect_pages(&sample_config(), Some("User Guide"));
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].topic, "User Guide");
    }

    #[test]
    fn test_collect_unknown_topic_is_empty() {
        let pages = collect_pages(&sample_config(), Some("Nope"));
        assert!(pages.is_empty());
    }
}
