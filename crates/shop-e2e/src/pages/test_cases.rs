// TestCasesPage - Heading of `/test_cases`

use super::base::BasePage;
use crate::error::{Result, ensure_eq};
use crate::wait::ElementState;
use playwright_rs::{Locator, Page};
use std::time::Duration;

const HEADING_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TestCasesPage {
    base: BasePage,
    heading: Locator,
}

impl TestCasesPage {
    pub async fn new(page: Page, base_url: &str) -> Self {
        Self::from_base(BasePage::new(page, base_url)).await
    }

    pub async fn from_base(base: BasePage) -> Self {
        Self {
            heading: base.locator("h2.title.text-center b").await,
            base,
        }
    }

    pub fn base(&self) -> &BasePage {
        &self.base
    }

    pub async fn verify_test_cases_text(&self, expected: &str) -> Result<()> {
        tracing::info!("Verify '{}' text is visible", expected);
        self.base
            .wait_for(&self.heading, ElementState::Visible, HEADING_TIMEOUT)
            .await?;
        let actual = self.base.read_text_content(&self.heading).await?;
        ensure_eq("Test cases heading", expected, actual.as_str())
    }
}
