//! Command implementations

pub mod check;
pub mod completions;
pub mod inputs;
pub mod products;

use std::path::Path;

use anyhow::Result;

use projgen::core::Project;
use projgen::ops::load_project;
use projgen::util::config::{global_config_path, load_config, project_config_path};
use projgen::util::Config;

/// Load a project spec.
pub fn load(file: &Path) -> Result<Project> {
    Ok(load_project(file)?)
}

/// Load the configuration that applies to a spec file.
pub fn config_for(file: &Path) -> Config {
    let spec_dir = file
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    load_config(
        global_config_path().as_deref(),
        &project_config_path(spec_dir),
    )
}
