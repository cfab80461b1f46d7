// src/core/render.rs
// Page renderer seam. The extraction core only ever sees `render(url) -> html`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to launch browser: {0}")]
    Launch(String),
    #[error("failed to load {url}: {reason}")]
    Navigate { url: String, reason: String },
    #[error("failed to read page content: {0}")]
    Content(String),
}

/// Produces fully rendered page markup (scripts run, consent dismissed).
pub trait Render {
    fn render(&self, url: &str) -> Result<String, RenderError>;
}

impl<F> Render for F
where
    F: Fn(&str) -> Result<String, RenderError>,
{
    fn render(&self, url: &str) -> Result<String, RenderError> {
        self(url)
    }
}

#[cfg(feature = "browser")]
pub use chrome::ChromeRenderer;

#[cfg(feature = "browser")]
mod chrome {
    use std::ffi::OsStr;
    use std::fmt::Display;

    use headless_chrome::{Browser, LaunchOptions};
    use tracing::{debug, info};

    use super::{Render, RenderError};
    use crate::config::options::RenderOptions;

    /// Headless Chrome via the DevTools protocol.
    /// One browser per `render` call; it is killed when dropped, on every path.
    pub struct ChromeRenderer {
        opts: RenderOptions,
    }

    impl ChromeRenderer {
        pub fn new(opts: RenderOptions) -> Self {
            Self { opts }
        }

        fn launch(&self) -> Result<Browser, RenderError> {
            let launch = LaunchOptions::default_builder()
                .headless(self.opts.headless)
                .sandbox(self.opts.sandbox)
                .args(vec![OsStr::new("--disable-gpu")])
                .build()
                .map_err(|e| RenderError::Launch(e.to_string()))?;
            Browser::new(launch).map_err(|e| RenderError::Launch(e.to_string()))
        }
    }

    impl Render for ChromeRenderer {
        fn render(&self, url: &str) -> Result<String, RenderError> {
            let browser = self.launch()?;

            let tab = browser.new_tab().map_err(|e| navigate_err(url, e))?;
            tab.set_default_timeout(self.opts.navigate_timeout);
            info!(url, "rendering page");
            tab.navigate_to(url).map_err(|e| navigate_err(url, e))?;
            tab.wait_until_navigated().map_err(|e| navigate_err(url, e))?;

            // Consent pop-up is optional; timing out just means it never showed.
            match tab.wait_for_element_with_custom_timeout(
                &self.opts.cookie_selector,
                self.opts.cookie_wait,
            ) {
                Ok(button) => match button.click() {
                    Ok(_) => debug!(selector = %self.opts.cookie_selector, "dismissed cookie consent"),
                    Err(e) => debug!(error = %e, "cookie consent present but not clickable"),
                },
                Err(_) => debug!(
                    selector = %self.opts.cookie_selector,
                    wait = ?self.opts.cookie_wait,
                    "no cookie consent within timeout; proceeding"
                ),
            }

            tab.get_content().map_err(|e| RenderError::Content(e.to_string()))
        }
    }

    fn navigate_err(url: &str, e: impl Display) -> RenderError {
        RenderError::Navigate { url: s!(url), reason: e.to_string() }
    }
}
