//! `[[topics]]` configuration: disjoint sidebar topic groups.
//!
//! Each topic is a self-contained sidebar. The site builder shows one topic
//! at a time, selected by a dropdown, so the topics act as distinct sub-sites
//! within the overall site.
//!
//! # Example
//!
//! ```toml
//! [[topics]]
//! label = "About"
//! icon = "information"
//! link = "about/example"
//! items = [
//!     { label = "Example", slug = "about/example" },
//!     { label = "Other Page", slug = "about/otherpage" },
//! ]
//! ```
//!
//! `link` is the topic's landing page and must equal the slug of exactly one
//! entry in `items`.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, DiagnosticKind, FieldPath};

/// One sidebar topic group: label, icon, landing link, ordered page items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicConfig {
    /// Topic label shown in the topic dropdown.
    pub label: String,

    /// Icon identifier understood by the site builder
    /// (e.g. "information", "open-book", "seti:todo").
    pub icon: String,

    /// Default landing slug for the topic.
    pub link: String,

    /// Ordered page items, owned exclusively by this topic.
    pub items: Vec<PageItem>,
}

impl TopicConfig {
    /// Validate a single topic.
    ///
    /// `index` is the topic's position in the `[[topics]]` array, used to
    /// build field paths like `topics[0].link`.
    ///
    /// # Checks
    /// - `label` non-empty
    /// - `items` non-empty
    /// - item slugs unique within the topic (case-sensitive)
    /// - `link` equals the slug of exactly one item
    pub fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        if self.label.is_empty() {
            diag.error(
                DiagnosticKind::MissingField,
                FieldPath::indexed("topics", index, "label"),
                "topic label is required",
            );
        }

        if self.items.is_empty() {
            diag.error_with_hint(
                DiagnosticKind::EmptyTopic,
                FieldPath::indexed("topics", index, "items"),
                "topic has no page items",
                "add at least one { label, slug } entry",
            );
            // Without items, the link check below would only produce noise.
            return;
        }

        // Duplicate slug detection (case-sensitive, first occurrence wins)
        let mut seen = FxHashSet::default();
        for item in &self.items {
            if !seen.insert(item.slug.as_str()) {
                diag.error(
                    DiagnosticKind::DuplicateSlug,
                    FieldPath::indexed("topics", index, "items"),
                    format!("slug '{}' appears more than once", item.slug),
                );
            }
            if item.slug.is_empty() {
                diag.error(
                    DiagnosticKind::MissingField,
                    FieldPath::indexed("topics", index, "items"),
                    format!("item '{}' has an empty slug", item.label),
                );
            }
        }

        // Default link must resolve to one of the item slugs
        if !seen.contains(self.link.as_str()) {
            diag.error_with_hint(
                DiagnosticKind::DanglingLink,
                FieldPath::indexed("topics", index, "link"),
                format!("link '{}' does not match any item slug", self.link),
                format!(
                    "set link to one of: {}",
                    self.items
                        .iter()
                        .map(|i| i.slug.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            );
        }
    }

    /// The item the topic lands on, if `link` resolves.
    pub fn landing_item(&self) -> Option<&PageItem> {
        self.items.iter().find(|item| item.slug == self.link)
    }
}

/// One navigation leaf: display label and content slug.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageItem {
    /// Display label in the sidebar.
    pub label: String,
    /// Content slug, unique within the owning topic.
    pub slug: String,
}

// ============================================================================
// tests
// ============================================================================
