//! Project initialization module.
//!
//! Creates a new project with a default configuration.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`config`]: Configuration file generation

mod config;
mod validate;

use crate::{config::SiteConfig, log};
use anyhow::Result;
use std::fs;

pub use validate::InitMode;

/// Create a new project with a default config
///
/// # Steps
/// 1. Validate target directory
/// 2. Create the directory
/// 3. Write doctopics.toml and ignore files
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_project(site_config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    let root = site_config.get_root();
    let mode = if has_name {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };

    if let Err(e) = validate::validate_target(root, mode) {
        log!("error"; "{}", e);
        std::process::exit(1);
    }

    fs::create_dir_all(root)?;
    config::write_config(root)?;
    config::write_ignore_files(root)?;

    log!("init"; "Config initialized at {}", root.join("doctopics.toml").display());
    Ok(())
}
