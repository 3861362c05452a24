// Wait - Bounded polling for element states
//
// Visibility waits go through the bindings' `expect()` assertions. The
// bindings have no attached/detached assertion and their text/count
// assertions report only a message, so those run through `poll_until`,
// which follows the same loop: probe, check elapsed time, sleep the poll
// interval, repeat.

use crate::error::{Error, Result};
use parking_lot::Mutex;
use playwright_rs::{Locator, expect};
use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Default polling interval (100ms, matching Playwright assertions)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Element state a primitive waits for before acting.
///
/// See: <https://playwright.dev/docs/api/class-locator#locator-wait-for>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementState {
    /// At least one matching element is present in the DOM
    Attached,
    /// No matching element is present in the DOM
    Detached,
    /// The element is present and visible
    Visible,
    /// The element is absent or not visible
    Hidden,
}

impl ElementState {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            ElementState::Attached => "attached",
            ElementState::Detached => "detached",
            ElementState::Visible => "visible",
            ElementState::Hidden => "hidden",
        }
    }
}

impl fmt::Display for ElementState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How observed text is compared against the expected text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMatch {
    /// Trimmed text equals the expected text
    Exact,
    /// Trimmed text contains the expected text
    Contains,
}

impl TextMatch {
    /// Returns true when `actual` satisfies this match against `expected`.
    pub fn matches(&self, expected: &str, actual: &str) -> bool {
        match self {
            TextMatch::Exact => actual.trim() == expected.trim(),
            TextMatch::Contains => actual.contains(expected),
        }
    }
}

/// Repeatedly evaluates `probe` until it returns `true` or `timeout` elapses.
///
/// Returns `Ok(true)` once the condition holds and `Ok(false)` if time ran
/// out. The probe always runs at least once, so a zero timeout still gives
/// a single observation. Probe errors abort the wait immediately.
pub async fn poll_until<F, Fut>(timeout: Duration, interval: Duration, mut probe: F) -> Result<bool>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    let start = Instant::now();

    loop {
        if probe().await? {
            return Ok(true);
        }

        if start.elapsed() >= timeout {
            return Ok(false);
        }

        tokio::time::sleep(interval).await;
    }
}

/// Checks a locator once against `state`.
pub async fn probe_state(locator: &Locator, state: ElementState) -> Result<bool> {
    let satisfied = match state {
        ElementState::Attached => locator.count().await? > 0,
        ElementState::Detached => locator.count().await? == 0,
        ElementState::Visible => locator.is_visible().await?,
        ElementState::Hidden => !locator.is_visible().await?,
    };
    Ok(satisfied)
}

/// Waits until `locator` reaches `state`.
///
/// Fails with [`Error::ElementNotInteractable`] naming the selector when the
/// state is not reached within `timeout`.
pub async fn wait_for(locator: &Locator, state: ElementState, timeout: Duration) -> Result<()> {
    tracing::debug!(selector = locator.selector(), %state, ?timeout, "Waiting for element");

    let reached = match state {
        ElementState::Visible | ElementState::Hidden => {
            let expectation = expect(locator.clone())
                .with_timeout(timeout)
                .with_poll_interval(DEFAULT_POLL_INTERVAL);
            let outcome = if state == ElementState::Visible {
                expectation.to_be_visible().await
            } else {
                expectation.to_be_hidden().await
            };
            match outcome {
                Ok(()) => true,
                Err(playwright_rs::Error::AssertionTimeout(_)) => false,
                Err(e) => return Err(e.into()),
            }
        }
        ElementState::Attached | ElementState::Detached => {
            poll_until(timeout, DEFAULT_POLL_INTERVAL, || probe_state(locator, state)).await?
        }
    };

    if reached {
        Ok(())
    } else {
        Err(Error::ElementNotInteractable {
            selector: locator.selector().to_string(),
            state,
            timeout_ms: timeout.as_millis() as u64,
        })
    }
}

/// Waits until the trimmed `textContent` of `locator` satisfies `mode`.
///
/// The element must be visible first; the text comparison is then retried
/// until it matches or `timeout` elapses, at which point the last observed
/// text is reported as the actual value. Both phases share one deadline.
pub async fn expect_text(
    locator: &Locator,
    mode: TextMatch,
    expected: &str,
    timeout: Duration,
) -> Result<()> {
    let deadline = Instant::now() + timeout;
    wait_for(locator, ElementState::Visible, timeout).await?;
    let remaining = deadline.saturating_duration_since(Instant::now());

    let last_seen = Mutex::new(String::new());
    let matched = poll_until(remaining, DEFAULT_POLL_INTERVAL, || {
        let last_seen = &last_seen;
        async move {
            let actual = locator.text_content().await?.unwrap_or_default();
            let actual = actual.trim().to_string();
            let matched = mode.matches(expected, &actual);
            *last_seen.lock() = actual;
            Ok(matched)
        }
    })
    .await?;

    if matched {
        Ok(())
    } else {
        Err(Error::assertion(
            format!("Text of '{}'", locator.selector()),
            expected,
            last_seen.into_inner(),
        ))
    }
}

/// Waits until `locator` resolves to exactly `expected` elements.
///
/// An empty match where elements are expected is reported as a
/// [`Error::Precondition`] so list checks fail before any per-item work.
pub async fn expect_count(locator: &Locator, expected: usize, timeout: Duration) -> Result<()> {
    let last_count = AtomicUsize::new(0);
    let matched = poll_until(timeout, DEFAULT_POLL_INTERVAL, || {
        let last_count = &last_count;
        async move {
            let count = locator.count().await?;
            last_count.store(count, Ordering::SeqCst);
            Ok(count == expected)
        }
    })
    .await?;
    let last_count = last_count.into_inner();

    if matched {
        return Ok(());
    }

    if last_count == 0 && expected > 0 {
        return Err(Error::Precondition(format!(
            "no elements match '{}' (expected {})",
            locator.selector(),
            expected
        )));
    }

    Err(Error::assertion(
        format!("Element count of '{}'", locator.selector()),
        expected,
        last_count,
    ))
}

/// Waits up to `timeout` for at least one element to match `locator`,
/// returning the count. Still empty afterwards is a [`Error::Precondition`].
pub async fn require_non_empty(locator: &Locator, what: &str, timeout: Duration) -> Result<usize> {
    let last_count = AtomicUsize::new(0);
    poll_until(timeout, DEFAULT_POLL_INTERVAL, || {
        let last_count = &last_count;
        async move {
            let count = locator.count().await?;
            last_count.store(count, Ordering::SeqCst);
            Ok(count > 0)
        }
    })
    .await?;

    let count = last_count.into_inner();
    if count == 0 {
        return Err(Error::Precondition(format!(
            "{} is empty (no elements match '{}')",
            what,
            locator.selector()
        )));
    }
    Ok(count)
}
