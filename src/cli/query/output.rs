//! Query output formatting.

use std::fs;
use std::io::Write;

use anyhow::Result;
use serde_json::{Map, Value as JsonValue};

use crate::cli::QueryArgs;
use crate::log;

use super::PageRecord;

pub(super) fn output_results(pages: &[PageRecord], args: &QueryArgs) -> Result<()> {
    // Skip output if no results
    if pages.is_empty() {
        return Ok(());
    }

    let output = if let Some(ref fields) = args.fields {
        filter_fields(pages, fields)
    } else {
        format_results(pages)
    };

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Format all page records.
fn format_results(pages: &[PageRecord]) -> JsonValue {
    let pages: Vec<JsonValue> = pages
        .iter()
        .map(|page| serde_json::to_value(page).unwrap_or_default())
        .collect();

    JsonValue::Array(pages)
}

/// Filter to specific fields, with slug/url always included first.
fn filter_fields(pages: &[PageRecord], fields: &[String]) -> JsonValue {
    let pages: Vec<JsonValue> = pages
        .iter()
        .map(|page| {
            let mut obj = Map::new();

            // slug and url always first
            obj.insert("slug".to_string(), JsonValue::String(page.slug.clone()));
            obj.insert("url".to_string(), JsonValue::String(page.url.clone()));

            let page_value = serde_json::to_value(page).unwrap_or_default();
            if let JsonValue::Object(page_obj) = page_value {
                for field in fields {
                    if let Some(value) = page_obj.get(field) {
                        obj.insert(field.clone(), value.clone());
                    } else {
                        // Field explicitly requested but doesn't exist
                        obj.insert(field.clone(), JsonValue::Null);
                    }
                }
            }

            JsonValue::Object(obj)
        })
        .collect();

    JsonValue::Array(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PageRecord {
        PageRecord {
            slug: "about/example".into(),
            url: "/icu/about/example".into(),
            label: "Example".into(),
            topic: "About".into(),
            landing: true,
        }
    }

    #[test]
    fn test_format_results() {
        let json = format_results(&[record()]);
        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), 1);
        assert_eq!(arr[0]["slug"], "about/example");
        assert_eq!(arr[0]["url"], "/icu/about/example");
        assert_eq!(arr[0]["landing"], true);
    }

    #[test]
    fn test_filter_fields_keeps_slug_and_url() {
        let json = filter_fields(&[record()], &["topic".to_string()]);
        let obj = json.as_array().unwrap()[0].as_object().unwrap();
        assert!(obj.contains_key("slug"));
        assert!(obj.contains_key("url"));
        assert_eq!(obj["topic"], "About");
        assert!(!obj.contains_key("label"));
    }

    #[test]
    fn test_filter_missing_field_is_null() {
        let json = filter_fields(&[record()], &["nope".to_string()]);
        let obj = json.as_array().unwrap()[0].as_object().unwrap();
        assert_eq!(obj["nope"], JsonValue::Null);
    }
}
