use crate::error::{RepoHealthError, Result};
use crate::types::config::RepoHealthConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "repohealth.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/repohealth/config.toml";

/// Loads the explicit config file, or merges the global and working-directory files.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<RepoHealthConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(RepoHealthError::ConfigNotFound(path.display().to_string()));
        }
        return load_config_files(&[path]);
    }

    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<RepoHealthConfig> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    let mut paths = Vec::new();
    if let Some(path) = global_path {
        paths.push(path);
    }
    paths.push(repo_path.as_path());
    load_config_files(&paths)
}

fn load_config_files(paths: &[&Path]) -> Result<RepoHealthConfig> {
    let mut merged = Value::Table(Map::new());
    for path in paths {
        merge_file_if_exists(&mut merged, path)?;
    }

    let cfg: RepoHealthConfig = merged.try_into()?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "merging config file");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| RepoHealthError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
