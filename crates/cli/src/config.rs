use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "enabled")]
    pub transform_amd_modules: bool,
    #[serde(default = "enabled")]
    pub process_common_js_modules: bool,
    #[serde(default = "default_path_prefix")]
    pub common_js_module_path_prefix: String,
    #[serde(default)]
    pub report_dependencies: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            transform_amd_modules: true,
            process_common_js_modules: true,
            common_js_module_path_prefix: default_path_prefix(),
            report_dependencies: false,
        }
    }
}

fn enabled() -> bool {
    true
}

fn default_path_prefix() -> String {
    compiler::DEFAULT_FILENAME_PREFIX.to_string()
}

/// Loads a JSON pass config. serde_json's own errors already carry the
/// line/column, so a path-naming context layer is all that is added here.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("could not read config file {}", path.display()))?;
    let config = serde_json::from_str(&content)
        .with_context(|| format!("config file {} is not valid", path.display()))?;
    Ok(config)
}
