//! Configuration section definitions.
//!
//! Each module corresponds to a section in `doctopics.toml`:
//!
//! | Module       | TOML Section    | Purpose                              |
//! |--------------|-----------------|--------------------------------------|
//! | `site`       | `[site]`        | Title, url, base path, social links  |
//! | `topics`     | `[[topics]]`    | Disjoint sidebar topic groups        |
//! | `components` | `[components]`  | Component override map               |

mod components;
mod site;
mod topics;

// Re-export section configs
pub use components::ComponentOverrides;
pub use site::{SiteSectionConfig, SocialLink};
pub use topics::{PageItem, TopicConfig};
