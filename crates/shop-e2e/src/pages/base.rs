// BasePage - Wait-then-act primitives shared by every page object
//
// Each primitive waits (bounded) for the element state it needs and only
// then acts, so page objects never touch an element that is not ready.
//
// See: <https://playwright.dev/docs/actionability>

use crate::config::Timeouts;
use crate::data::endpoints::join_url;
use crate::error::{Error, Result, ensure_eq};
use crate::wait::{self, DEFAULT_POLL_INTERVAL, ElementState, TextMatch};
use parking_lot::Mutex;
use playwright_rs::{ClickOptions, GotoOptions, Locator, Page, SelectOption, WaitUntil};
use std::time::Duration;

/// Quotes a string for use inside a selector, e.g. `:has-text(...)` or an
/// attribute value.
pub(crate) fn quoted(text: &str) -> String {
    let escaped = text.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// Page handle plus the address and timeouts every primitive works with.
///
/// Embedded by value in every page object.
#[derive(Clone)]
pub struct BasePage {
    page: Page,
    base_url: String,
    timeouts: Timeouts,
}

impl BasePage {
    /// Creates a base page using the default [`Timeouts`].
    pub fn new(page: Page, base_url: impl Into<String>) -> Self {
        Self {
            page,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeouts: Timeouts::default(),
        }
    }

    /// Replaces the library-wide default timeouts.
    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeouts(&self) -> &Timeouts {
        &self.timeouts
    }

    /// Lazy locator for `selector`; resolved again on every use.
    pub async fn locator(&self, selector: &str) -> Locator {
        self.page.locator(selector).await
    }

    /// Opens `path` relative to the base address and waits for the load event.
    pub async fn navigate(&self, path: &str) -> Result<()> {
        self.navigate_within(path, self.timeouts.navigation()).await
    }

    pub async fn navigate_within(&self, path: &str, timeout: Duration) -> Result<()> {
        let url = join_url(&self.base_url, path);
        tracing::debug!("Navigating to {} (timeout {:?})", url, timeout);

        let options = GotoOptions::new()
            .timeout(timeout)
            .wait_until(WaitUntil::Load);

        match self.page.goto(&url, Some(options)).await {
            Ok(_) => Ok(()),
            Err(playwright_rs::Error::Timeout(_))
            | Err(playwright_rs::Error::NavigationTimeout { .. }) => Err(Error::NavigationTimeout {
                url,
                timeout_ms: timeout.as_millis() as u64,
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Waits until `locator` reaches `state` within `timeout`.
    pub async fn wait_for(
        &self,
        locator: &Locator,
        state: ElementState,
        timeout: Duration,
    ) -> Result<()> {
        wait::wait_for(locator, state, timeout).await
    }

    async fn wait_visible(&self, locator: &Locator) -> Result<()> {
        wait::wait_for(locator, ElementState::Visible, self.timeouts.visibility()).await
    }

    /// Clicks once the element is visible (default 20s wait).
    pub async fn click(&self, locator: &Locator) -> Result<()> {
        self.click_within(locator, self.timeouts.click()).await
    }

    pub async fn click_within(&self, locator: &Locator, timeout: Duration) -> Result<()> {
        wait::wait_for(locator, ElementState::Visible, timeout).await?;
        tracing::debug!("Clicking '{}'", locator.selector());
        locator.click(None).await?;
        Ok(())
    }

    /// Clicks without actionability checks once the element is attached.
    ///
    /// Only for controls that stay covered by an overlay.
    pub async fn force_click(&self, locator: &Locator, timeout: Duration) -> Result<()> {
        wait::wait_for(locator, ElementState::Attached, timeout).await?;
        tracing::debug!("Force-clicking '{}'", locator.selector());
        let options = ClickOptions::builder().force(true).build();
        locator.click(Some(options)).await?;
        Ok(())
    }

    /// Replaces the element's value once it is visible.
    pub async fn fill(&self, locator: &Locator, text: &str) -> Result<()> {
        self.fill_within(locator, text, self.timeouts.visibility()).await
    }

    pub async fn fill_within(&self, locator: &Locator, text: &str, timeout: Duration) -> Result<()> {
        wait::wait_for(locator, ElementState::Visible, timeout).await?;
        tracing::debug!("Filling '{}'", locator.selector());
        locator.fill(text, None).await?;
        Ok(())
    }

    pub async fn hover(&self, locator: &Locator) -> Result<()> {
        self.wait_visible(locator).await?;
        tracing::debug!("Hovering '{}'", locator.selector());
        locator.hover(None).await?;
        Ok(())
    }

    /// Trimmed rendered text (`innerText`, so CSS text-transform applies).
    pub async fn read_text(&self, locator: &Locator) -> Result<String> {
        self.wait_visible(locator).await?;
        let text = locator.inner_text().await?;
        Ok(text.trim().to_string())
    }

    /// Trimmed DOM text (`textContent`, casing as written in the markup).
    pub async fn read_text_content(&self, locator: &Locator) -> Result<String> {
        self.wait_visible(locator).await?;
        let text = locator.text_content().await?.unwrap_or_default();
        Ok(text.trim().to_string())
    }

    /// Current value of an input, textarea or select.
    pub async fn read_value(&self, locator: &Locator) -> Result<String> {
        self.wait_visible(locator).await?;
        Ok(locator.input_value(None).await?)
    }

    /// Waits for visibility, then reports it.
    ///
    /// Fails instead of returning `false` when the element never shows up.
    pub async fn is_visible(&self, locator: &Locator) -> Result<bool> {
        self.wait_visible(locator).await?;
        Ok(locator.is_visible().await?)
    }

    pub async fn is_checked(&self, locator: &Locator) -> Result<bool> {
        self.wait_visible(locator).await?;
        Ok(locator.is_checked().await?)
    }

    /// Brings a checkbox or radio into the `desired` state.
    ///
    /// Returns whether a check/uncheck was actually issued; an element
    /// already in the desired state is left alone.
    pub async fn set_checked(&self, locator: &Locator, desired: bool) -> Result<bool> {
        self.wait_visible(locator).await?;
        if locator.is_checked().await? == desired {
            tracing::debug!("'{}' already {}", locator.selector(), checked_word(desired));
            return Ok(false);
        }

        tracing::debug!("Setting '{}' {}", locator.selector(), checked_word(desired));
        if desired {
            locator.check(None).await?;
        } else {
            locator.uncheck(None).await?;
        }
        Ok(true)
    }

    pub async fn check(&self, locator: &Locator) -> Result<()> {
        self.set_checked(locator, true).await.map(|_| ())
    }

    pub async fn uncheck(&self, locator: &Locator) -> Result<()> {
        self.set_checked(locator, false).await.map(|_| ())
    }

    /// Selects `value` in a dropdown, matching the option's value first and
    /// its label second.
    pub async fn select_option(&self, locator: &Locator, value: &str) -> Result<()> {
        self.wait_visible(locator).await?;

        let by_value = locator.locator(&format!("option[value={}]", quoted(value)));
        let option = if by_value.count().await? > 0 {
            SelectOption::Value(value.to_string())
        } else {
            let by_label = locator.locator(&format!("option:text-is({})", quoted(value)));
            if by_label.count().await? == 0 {
                return Err(Error::OptionNotFound {
                    selector: locator.selector().to_string(),
                    value: value.to_string(),
                });
            }
            SelectOption::Label(value.to_string())
        };

        tracing::debug!("Selecting '{}' in '{}'", value, locator.selector());
        locator.select_option(option, None).await?;
        Ok(())
    }

    /// Polling text assertion using the default assertion timeout.
    pub async fn expect_text(&self, locator: &Locator, mode: TextMatch, expected: &str) -> Result<()> {
        self.expect_text_within(locator, mode, expected, self.timeouts.assertion())
            .await
    }

    pub async fn expect_text_within(
        &self,
        locator: &Locator,
        mode: TextMatch,
        expected: &str,
        timeout: Duration,
    ) -> Result<()> {
        wait::expect_text(locator, mode, expected, timeout).await
    }

    pub async fn expect_count(&self, locator: &Locator, expected: usize) -> Result<()> {
        wait::expect_count(locator, expected, self.timeouts.assertion()).await
    }

    /// Asserts the element disappears (hidden or detached).
    pub async fn expect_hidden(&self, locator: &Locator) -> Result<()> {
        let timeout = self.timeouts.assertion();
        match wait::wait_for(locator, ElementState::Hidden, timeout).await {
            Err(Error::ElementNotInteractable { selector, .. }) => Err(Error::assertion(
                format!("Visibility of '{}'", selector),
                "hidden",
                "visible",
            )),
            other => other,
        }
    }

    /// Waits for the page address to become `expected`.
    ///
    /// `expected` is either absolute or a path relative to the base address.
    pub async fn verify_url(&self, expected: &str) -> Result<()> {
        self.verify_url_within(expected, self.timeouts.assertion())
            .await
    }

    pub async fn verify_url_within(&self, expected: &str, timeout: Duration) -> Result<()> {
        let expected = if expected.starts_with('/') {
            join_url(&self.base_url, expected)
        } else {
            expected.to_string()
        };

        let last_seen = Mutex::new(String::new());
        let matched = wait::poll_until(timeout, DEFAULT_POLL_INTERVAL, || {
            let last_seen = &last_seen;
            let expected = expected.as_str();
            async move {
                let current = self.page.url();
                let matched = current.trim_end_matches('/') == expected.trim_end_matches('/');
                *last_seen.lock() = current;
                Ok(matched)
            }
        })
        .await?;

        if matched {
            Ok(())
        } else {
            Err(Error::assertion("Page URL", expected, last_seen.into_inner()))
        }
    }

    pub async fn verify_title(&self, expected: &str) -> Result<()> {
        let title = self.page.title().await?;
        ensure_eq("Page title", expected, title.trim())
    }

    /// Scrolls the first element matching the CSS selector into view.
    pub async fn scroll_into_view(&self, css: &str) -> Result<()> {
        let target = serde_json::to_string(css)?;
        tracing::debug!("Scrolling '{}' into view", css);
        self.page
            .evaluate_expression(&format!(
                "document.querySelector({})?.scrollIntoView({{ block: 'center' }})",
                target
            ))
            .await?;
        Ok(())
    }

    /// Presses a key on the focused page, e.g. `Home` or `End`.
    pub async fn press_key(&self, key: &str) -> Result<()> {
        tracing::debug!("Pressing '{}'", key);
        self.page.keyboard().press(key, None).await?;
        Ok(())
    }

    /// Page vertical scroll offset in CSS pixels.
    pub async fn scroll_offset(&self) -> Result<f64> {
        let value = self
            .page
            .evaluate_value("window.scrollY")
            .await?;
        value.trim().parse::<f64>().map_err(|e| {
            Error::Precondition(format!("unreadable scroll offset '{}': {}", value, e))
        })
    }
}

fn checked_word(checked: bool) -> &'static str {
    if checked { "checked" } else { "unchecked" }
}
