//! reportcard configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::history::{HistoryStore, DEFAULT_HISTORY_FILE};

/// File name searched for in the working directory.
pub const CONFIG_FILE: &str = "reportcard.toml";

/// Environment variable overriding the history file location.
pub const HISTORY_ENV: &str = "REPORTCARD_HISTORY";

/// Top-level reportcard configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportcardConfig {
    /// Where reports are appended.
    #[serde(default = "default_history_path")]
    pub history_path: PathBuf,
    /// PDF export settings.
    #[serde(default)]
    pub pdf: PdfOptions,
}

/// Settings for PDF export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfOptions {
    /// Line printed above the exported text.
    #[serde(default = "default_header")]
    pub header: String,
    /// Document title stored in the PDF metadata.
    #[serde(default = "default_title")]
    pub title: String,
    /// Body font size in points.
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

fn default_history_path() -> PathBuf {
    PathBuf::from(DEFAULT_HISTORY_FILE)
}
fn default_header() -> String {
    "student report card".to_string()
}
fn default_title() -> String {
    "Student Report".to_string()
}
fn default_font_size() -> f32 {
    12.0
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            header: default_header(),
            title: default_title(),
            font_size: default_font_size(),
        }
    }
}

impl Default for ReportcardConfig {
    fn default() -> Self {
        Self {
            history_path: default_history_path(),
            pdf: PdfOptions::default(),
        }
    }
}

impl ReportcardConfig {
    /// History store at the configured path.
    pub fn history(&self) -> HistoryStore {
        HistoryStore::new(&self.history_path)
    }
}

/// Load config from an explicit path, or the default location.
///
/// An explicit path must exist. `REPORTCARD_HISTORY` overrides the history
/// path from the file.
pub fn load_config_from(path: Option<&Path>) -> Result<ReportcardConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => Some(PathBuf::from(CONFIG_FILE)).filter(|p| p.exists()),
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<ReportcardConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => ReportcardConfig::default(),
    };

    if let Ok(history) = std::env::var(HISTORY_ENV) {
        if !history.is_empty() {
            config.history_path = PathBuf::from(history);
        }
    }

    anyhow::ensure!(
        config.pdf.font_size > 0.0,
        "pdf.font_size must be positive"
    );

    Ok(config)
}

/// Starter config written by `reportcard init`.
pub const SAMPLE_CONFIG: &str = r#"# reportcard configuration

# Reports are appended here, relative to the working directory.
history_path = "history.txt"

[pdf]
header = "student report card"
title = "Student Report"
font_size = 12.0
"#;
