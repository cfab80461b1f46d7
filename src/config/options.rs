// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// Everything one extraction run needs to know.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub url: String,
    pub render: RenderOptions,
    pub export: ExportOptions,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            url: s!(SOURCE_URL),
            render: RenderOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub headless: bool,
    pub sandbox: bool,
    /// Consent control to dismiss after navigation, if it shows up.
    pub cookie_selector: String,
    pub cookie_wait: Duration,
    pub navigate_timeout: Duration,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            headless: true,
            sandbox: false,
            cookie_selector: s!(COOKIE_BUTTON_SELECTOR),
            cookie_wait: Duration::from_secs(COOKIE_WAIT_SECS),
            navigate_timeout: Duration::from_secs(NAVIGATE_TIMEOUT_SECS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub project_name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            project_name: s!(PROJECT_NAME),
        }
    }
}

impl ExportOptions {
    /// `<out_dir>/<project_name>_<year>.ics`
    pub fn out_path(&self, year: i32) -> PathBuf {
        self.out_dir.join(self.file_name(year))
    }

    pub fn file_name(&self, year: i32) -> String {
        join!(&self.project_name, "_", &year.to_string(), ".", ICS_EXT)
    }
}
