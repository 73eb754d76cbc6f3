use anyhow::{bail, Context};
use notion_fixer_core::DirPair;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "appsettings.json";

/// Settings file layout: `{"AppSettings": {"DirPairs": [...]}}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Config {
    pub app_settings: AppSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppSettings {
    #[serde(default)]
    pub dir_pairs: Vec<DirPair>,
}

impl Config {
    /// `appsettings.json` beside the running executable.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        let exe = std::env::current_exe().context("cannot locate the running executable")?;
        let dir = exe
            .parent()
            .context("executable path has no parent directory")?;
        Ok(dir.join(CONFIG_FILE_NAME))
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;

        if config.pairs().is_empty() {
            bail!("config {} lists no directory pairs", path.display());
        }
        Ok(config)
    }

    pub fn pairs(&self) -> &[DirPair] {
        &self.app_settings.dir_pairs
    }
}
