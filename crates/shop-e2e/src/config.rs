// Suite configuration
//
// Target address, browser choice, viewport and the library-wide timeouts
// used by every wait-then-act primitive. Built with a builder, loadable from
// JSON, and overridable by the runner through environment variables.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Public address of the shop under test.
pub const DEFAULT_BASE_URL: &str = "https://automationexercise.com";

/// Runner override for the base address.
pub const ENV_BASE_URL: &str = "SHOP_E2E_BASE_URL";
/// Runner override for the browser engine (`chromium`, `firefox`, `webkit`).
pub const ENV_BROWSER: &str = "SHOP_E2E_BROWSER";
/// Runner override to show the browser window (`1`/`true`).
pub const ENV_HEADED: &str = "SHOP_E2E_HEADED";

/// Browser engine to launch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl BrowserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserKind::Chromium => "chromium",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Webkit => "webkit",
        }
    }
}

impl FromStr for BrowserKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chromium" | "chrome" => Ok(BrowserKind::Chromium),
            "firefox" => Ok(BrowserKind::Firefox),
            "webkit" | "safari" => Ok(BrowserKind::Webkit),
            other => Err(Error::Config(format!(
                "unknown browser '{}', expected chromium, firefox or webkit",
                other
            ))),
        }
    }
}

/// Timeouts applied by the primitives when a call does not pass its own.
///
/// Serialized as milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Timeouts {
    /// Page load (`navigate`)
    pub navigation_ms: u64,
    /// Visibility wait before a click
    pub click_ms: u64,
    /// Visibility wait before fill/read/probe (the engine default)
    pub visibility_ms: u64,
    /// Polling text/count assertions
    pub assertion_ms: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            navigation_ms: 30_000,
            click_ms: 20_000,
            visibility_ms: 30_000,
            assertion_ms: 5_000,
        }
    }
}

impl Timeouts {
    pub fn navigation(&self) -> Duration {
        Duration::from_millis(self.navigation_ms)
    }

    pub fn click(&self) -> Duration {
        Duration::from_millis(self.click_ms)
    }

    pub fn visibility(&self) -> Duration {
        Duration::from_millis(self.visibility_ms)
    }

    pub fn assertion(&self) -> Duration {
        Duration::from_millis(self.assertion_ms)
    }
}

/// Browser viewport in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// Configuration shared by every test case of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuiteConfig {
    /// Scheme and host of the shop, without trailing slash
    pub base_url: String,
    pub browser: BrowserKind,
    pub headless: bool,
    pub viewport: ViewportSize,
    pub timeouts: Timeouts,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            browser: BrowserKind::default(),
            headless: true,
            viewport: ViewportSize::default(),
            timeouts: Timeouts::default(),
        }
    }
}

impl SuiteConfig {
    /// Creates a builder starting from the defaults.
    pub fn builder() -> SuiteConfigBuilder {
        SuiteConfigBuilder::default()
    }

    /// Defaults with runner overrides from the process environment applied.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Reads a JSON config file; missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: SuiteConfig = serde_json::from_str(raw)?;
        config.validated()
    }

    /// Applies runner overrides looked up through `lookup`.
    ///
    /// Taking the lookup as a function keeps this testable without touching
    /// the real process environment.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(browser) = lookup(ENV_BROWSER) {
            self.browser = browser.parse()?;
        }
        if let Some(headed) = lookup(ENV_HEADED) {
            self.headless = !matches!(
                headed.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            );
        }
        self.validated()
    }

    /// Normalizes the base URL and rejects values that cannot be joined with
    /// endpoint paths.
    fn validated(mut self) -> Result<Self> {
        let parsed = Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("invalid base URL '{}': {}", self.base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "base URL '{}' must use http or https",
                self.base_url
            )));
        }
        self.base_url = self.base_url.trim_end_matches('/').to_string();
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(Error::Config("viewport must be non-empty".to_string()));
        }
        Ok(self)
    }
}

/// Builder for [`SuiteConfig`]
#[derive(Debug, Clone, Default)]
pub struct SuiteConfigBuilder {
    config: SuiteConfig,
}

impl SuiteConfigBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn browser(mut self, browser: BrowserKind) -> Self {
        self.config.browser = browser;
        self
    }

    pub fn headless(mut self, headless: bool) -> Self {
        self.config.headless = headless;
        self
    }

    pub fn viewport(mut self, width: u32, height: u32) -> Self {
        self.config.viewport = ViewportSize { width, height };
        self
    }

    pub fn timeouts(mut self, timeouts: Timeouts) -> Self {
        self.config.timeouts = timeouts;
        self
    }

    pub fn build(self) -> Result<SuiteConfig> {
        self.config.validated()
    }
}
