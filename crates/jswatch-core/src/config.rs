use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::extract::ExtractOptions;
use crate::identity::IdentityRules;

/// Which kinds of script to extract (`[extract]` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Report scripts loaded by their own request (usually you want this).
    pub external: bool,
    /// Report `<script>` blocks embedded in captured HTML.
    pub inline: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            external: true,
            inline: true,
        }
    }
}

/// Run log settings (`[report]` section). File names are relative to the
/// state directory unless absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Append each run to the detail and summary logs.
    pub write_logs: bool,
    pub detail_log: PathBuf,
    pub summary_log: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            write_logs: true,
            detail_log: PathBuf::from("jswatch_log.txt"),
            summary_log: PathBuf::from("jswatch_summary.txt"),
        }
    }
}

/// Global configuration loaded from `~/.config/jswatch/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JswatchConfig {
    pub extract: ExtractConfig,
    pub identity: IdentityRules,
    pub report: ReportConfig,
}

impl JswatchConfig {
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            external: self.extract.external,
            inline: self.extract.inline,
            identity: self.identity.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("jswatch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<JswatchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = JswatchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: JswatchConfig = toml::from_str(&data)?;
    Ok(cfg)
}
